// Write “swatches.html” showing palettes generated over the whole sRGB
// cube, with and without an L*C*h filter.  Usage: swatches [num_colors]

use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use glasbey_palette::{ColorSample, LchFilter, PaletteGenerator};

type Err = Box<dyn Error>;

fn css_string(c: &ColorSample) -> String {
    format!("#{:02x}{:02x}{:02x}", c.rgb.r, c.rgb.g, c.rgb.b)
}

fn table_of_colors(fh: &mut impl Write, colors: &[ColorSample],
                   width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {}\"></td>",
                 css_string(c))?;
    }
    writeln!(fh, "<td rowspan=\"2\" style=\"padding-left: 7px\">\
                  {comment}</td></tr><tr>")?;
    for c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 12px; \
                      font-size: 8px; text-align: center\">{:.1}</td>",
                 c.min_delta)?;
    }
    writeln!(fh, "</tr></table><br/>")?;
    Ok(())
}

fn palette(fh: &mut impl Write, generator: &mut PaletteGenerator,
           filter: LchFilter, n: usize, comment: &str) -> Result<(), Err> {
    generator.reset(&filter);
    let start = generator.seed(&[]);
    let colors: Vec<_> = generator.swatches(start).take(n).collect();
    table_of_colors(fh, &colors, 40, comment)
}

fn main() -> Result<(), Err> {
    let n = match env::args().nth(1) {
        Some(n) => n.parse()?,
        None => 24,
    };
    let mut generator = PaletteGenerator::new();
    let mut fh = BufWriter::new(File::create("swatches.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>Glasbey palettes ({n} colors)</title>\n\
                  </head>\n\
                  <body>")?;
    palette(&mut fh, &mut generator, LchFilter::default(), n,
            "whole sRGB gamut")?;
    palette(&mut fh, &mut generator,
            LchFilter::new(30., 80., 20., 150., 0., 360.), n,
            "L* ∈ [30, 80], C* ≥ 20")?;
    palette(&mut fh, &mut generator,
            LchFilter::new(60., 90., 0., 40., 0., 360.), n, "pastel")?;
    palette(&mut fh, &mut generator,
            LchFilter::new(0., 100., 30., 150., 300., 60.), n,
            "reds and purples (h ∈ [300°, 60°])")?;
    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
