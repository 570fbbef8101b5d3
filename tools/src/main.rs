// Print a palette of maximally distinct colors, one per line:
// “min_delta red green blue”, where min_delta is the CIEDE2000
// difference between the color and the ones on the previous lines.

use std::{fmt,
          io::{self, BufWriter, Write},
          path::PathBuf};
use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use glasbey_palette::{config::Config, PaletteGenerator};

#[derive(Parser)]
#[command(name = "make-palette")]
#[command(about = "Generate a palette of perceptually distinct colors")]
struct Cli {
    /// Number of colors to generate
    num_colors: usize,

    /// Configuration file: the L*C*h filter “min_L max_L min_C max_C
    /// min_h max_h” followed by seed colors “red green blue”
    config_file: Option<PathBuf>,
}

/// Format a float like C's `%g`: 6 significant digits, trailing zeros
/// removed.
struct Significant(f64);

impl fmt::Display for Significant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = self.0;
        if x == 0. || !x.is_finite() { return write!(f, "{x}") }
        let exp = x.abs().log10().floor() as i32;
        if !(-4 .. 6).contains(&exp) { return write!(f, "{x:.5e}") }
        let s = format!("{:.*}", (5 - exp) as usize, x);
        if s.contains('.') { f.write_str(s.trim_end_matches('0').trim_end_matches('.')) }
        else { f.write_str(&s) }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "glasbey_palette=warn,make_palette=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(io::stderr))
        .init();

    let mut palette = PaletteGenerator::new();
    let seeds = match &cli.config_file {
        Some(path) => {
            let config = Config::from_path(path)
                .with_context(|| format!("reading {}", path.display()))?;
            palette.reset(&config.filter);
            config.seeds
        }
        None => vec![],
    };
    info!(colors = cli.num_colors, seeds = seeds.len(), "generating palette");
    let start = palette.seed(&seeds);

    let mut out = BufWriter::new(io::stdout().lock());
    let mut n = 0;
    for c in palette.swatches(start).take(cli.num_colors) {
        writeln!(out, "{} {} {} {}", Significant(c.min_delta), c.rgb.r, c.rgb.g, c.rgb.b)?;
        n += 1;
    }
    out.flush()?;
    if n < cli.num_colors {
        warn!(requested = cli.num_colors, generated = n,
              "no color left satisfying the filter");
    }
    Ok(())
}
