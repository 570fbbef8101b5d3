//! Palette configuration files.
//!
//! A configuration is plain text made of whitespace separated numbers:
//! the six bounds of the [`LchFilter`]
//!
//! ```text
//! min_L max_L  min_C max_C  min_h max_h
//! ```
//!
//! followed by any number of seed colors given as `red green blue`
//! triples of integers in \[0, 255\].

use std::{fs, path::Path, str::FromStr};
use rgb::RGB8;
use thiserror::Error;
use tracing::{debug, warn};

use crate::LchFilter;

const BOUNDS: [&str; 6] = ["min_L", "max_L", "min_C", "max_C", "min_h", "max_h"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing filter bound {0}")]
    MissingBound(&'static str),

    #[error("filter bound {name} is not a number: “{value}”")]
    InvalidBound { name: &'static str, value: String },

    #[error("seed color {index} is incomplete")]
    IncompleteSeed { index: usize },

    #[error("seed color {index}: “{value}” is not an integer in 0..=255")]
    InvalidChannel { index: usize, value: String },

    #[error("cannot read configuration: {0}")]
    Io(#[from] std::io::Error),
}

/// Filter and seed colors of a palette.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Config {
    pub filter: LchFilter,
    /// Colors the palette starts with, in order.
    pub seeds: Vec<RGB8>,
}

impl Config {
    /// Read the configuration file `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config: Config = fs::read_to_string(path)?.parse()?;
        debug!(path = %path.display(), seeds = config.seeds.len(),
               "configuration loaded");
        Ok(config)
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let mut bounds = [0.; 6];
        for (b, name) in bounds.iter_mut().zip(BOUNDS) {
            let w = words.next().ok_or(ConfigError::MissingBound(name))?;
            *b = w.parse().map_err(|_| ConfigError::InvalidBound {
                name, value: w.to_string() })?;
        }
        let [min_l, max_l, min_c, max_c, min_h, max_h] = bounds;
        if min_l > max_l || min_c > max_c {
            warn!(min_l, max_l, min_c, max_c, "empty filter range");
        }
        let filter = LchFilter::new(min_l, max_l, min_c, max_c, min_h, max_h);

        let words: Vec<_> = words.collect();
        let seeds = words.chunks(3).enumerate().map(|(index, rgb)| {
            let channel = |w: &str| w.parse::<u8>().map_err(|_| {
                ConfigError::InvalidChannel { index, value: w.to_string() } });
            match *rgb {
                [r, g, b] => Ok(RGB8::new(channel(r)?, channel(g)?, channel(b)?)),
                _ => Err(ConfigError::IncompleteSeed { index }),
            }
        }).collect::<Result<_, _>>()?;
        Ok(Config { filter, seeds })
    }
}
