//! Glasbey sequential algorithm.
//!
//! C. Glasbey, G. van der Heijden, V. F. K. Toh, A. Gray, “Colour
//! displays for categorical images”, Color Research & Application 32
//! (2007).

use std::borrow::Cow;
use lazy_static::lazy_static;
use rayon::prelude::*;
use rgb::RGB8;
use tracing::{debug, trace};

use crate::{diff_de00, ColorSample, WHITE};

mod filter;
pub use filter::LchFilter;

lazy_static! {
    /// All 256³ sRGB colors, by increasing red, then green, then blue.
    static ref SRGB_CUBE: Vec<ColorSample> = {
        let cube: Vec<_> = (0 .. 1u32 << 24).into_par_iter()
            .map(|i| ColorSample::new(RGB8::new((i >> 16) as u8,
                                                (i >> 8) as u8,
                                                i as u8)))
            .collect();
        debug!(len = cube.len(), "sRGB cube built");
        cube
    };
}

/// Search state of a candidate color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Status {
    /// The color may still be chosen.  Carries the minimum CIEDE2000
    /// difference to the colors of the palette (+∞ if none).
    Eligible(f64),
    /// The color is outside the region set by
    /// [`PaletteGenerator::reset`].
    Excluded,
    /// The color belongs to the palette.
    Committed,
}

impl Status {
    /// The minimum difference to the palette, `0.` for colors that
    /// cannot be chosen.
    #[inline]
    pub fn min_delta(&self) -> f64 {
        match *self {
            Status::Eligible(d) => d,
            Status::Excluded | Status::Committed => 0.,
        }
    }
}

/// Generator of palettes of maximally distinct colors.
///
/// Each call to [`add`](Self::add) puts a color into the palette and
/// returns, among all candidate colors, the one whose minimum CIEDE2000
/// difference to the palette is the largest.
pub struct PaletteGenerator {
    samples: Cow<'static, [ColorSample]>, // enumeration order
    status: Vec<Status>, // status[i] is the state of samples[i]
}

impl Default for PaletteGenerator {
    fn default() -> Self { Self::new() }
}

// Largest minimum difference, the first in enumeration order on ties.
fn farthest(c0: (usize, f64), c1: (usize, f64)) -> (usize, f64) {
    if c1.1 > c0.1 || (c1.1 == c0.1 && c1.0 < c0.0) { c1 } else { c0 }
}

impl PaletteGenerator {
    /// Return a generator whose candidates are all 256³ sRGB colors.
    ///
    /// The colors and their Lab coordinates are computed on first use
    /// and shared by all generators.
    pub fn new() -> Self {
        let samples: &'static [ColorSample] = &SRGB_CUBE;
        Self::with_samples(Cow::Borrowed(samples))
    }

    /// Return a generator whose candidates are `colors`, in this order.
    /// When several candidates are equally far from the palette, the
    /// first one is chosen.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use glasbey_palette::PaletteGenerator;
    /// let levels = || (0 ..= 255).step_by(51);
    /// let grid = levels().flat_map(|r| levels().flat_map(move |g| {
    ///     levels().map(move |b| RGB8::new(r, g, b)) }));
    /// let mut palette = PaletteGenerator::from_colors(grid);
    /// let next = palette.seed(&[]).unwrap();
    /// assert_eq!(next.rgb, RGB8::new(0, 0, 0));
    /// ```
    pub fn from_colors(colors: impl IntoIterator<Item = RGB8>) -> Self {
        let samples: Vec<_> = colors.into_iter().map(ColorSample::new)
            .collect();
        Self::with_samples(Cow::Owned(samples))
    }

    fn with_samples(samples: Cow<'static, [ColorSample]>) -> Self {
        let status = vec![Status::Eligible(f64::INFINITY); samples.len()];
        PaletteGenerator { samples, status }
    }

    /// Returns the number of candidate colors.
    pub fn len(&self) -> usize { self.samples.len() }

    /// Says whether the generator has no candidate color at all.
    pub fn is_empty(&self) -> bool { self.samples.is_empty() }

    /// Returns the number of candidates that may still be chosen.
    pub fn eligible(&self) -> usize {
        self.status.par_iter()
            .filter(|s| matches!(s, Status::Eligible(_)))
            .count()
    }

    /// Returns the state of the candidate `rgb`, or `None` if it is
    /// not a candidate of this generator.
    pub fn status(&self, rgb: RGB8) -> Option<Status> {
        self.samples.iter().position(|c| c.rgb == rgb)
            .map(|i| self.status[i])
    }

    /// Return an iterator on all candidates, in enumeration order, with
    /// their current minimum difference to the palette (`0.` for the
    /// colors that cannot be chosen).
    pub fn candidates(&self) -> impl Iterator<Item = ColorSample> + '_ {
        self.samples.iter().zip(&self.status)
            .map(|(c, s)| ColorSample { min_delta: s.min_delta(), ..*c })
    }

    /// Restrict the candidates to the colors accepted by `filter` and
    /// forget the palette built so far.
    pub fn reset(&mut self, filter: &LchFilter) {
        if filter.wraps_hue() {
            debug!(from = filter.min_h, to = filter.max_h,
                   "hue range wraps around 0°");
        }
        self.status.par_iter_mut().zip(self.samples.par_iter())
            .for_each(|(status, c)| {
                *status = if filter.accepts(&c.lab) {
                    Status::Eligible(f64::INFINITY)
                } else {
                    Status::Excluded
                }
            });
        let accepted = self.eligible();
        debug!(?filter, accepted, rejected = self.len() - accepted,
               "palette generator reset");
    }

    /// Add `color` to the palette and return the candidate maximizing
    /// the minimum CIEDE2000 difference to the palette, with that
    /// difference as `min_delta`.  Return `None` if no candidate is
    /// left.
    ///
    /// `color` needs not be a candidate (nor be accepted by the
    /// current filter): it only constrains the next choices.  The
    /// returned color is not yet in the palette; pass it to the next
    /// call to `add` (see [`swatches`](Self::swatches)).
    pub fn add(&mut self, color: &ColorSample) -> Option<ColorSample> {
        let lab = color.lab;
        let next = self.status.par_iter_mut().zip(self.samples.par_iter())
            .enumerate()
            .filter_map(|(i, (status, c))| {
                let Status::Eligible(min_delta) = *status else { return None };
                let delta = diff_de00(&lab, &c.lab);
                let min_delta = if delta < min_delta { delta } else { min_delta };
                if min_delta > 0. {
                    *status = Status::Eligible(min_delta);
                    Some((i, min_delta))
                } else {
                    *status = Status::Committed;
                    None
                }
            })
            .reduce_with(farthest)
            .map(|(i, min_delta)| ColorSample { min_delta, ..self.samples[i] });
        match &next {
            Some(c) => trace!(added = ?color.rgb, next = ?c.rgb,
                              min_delta = c.min_delta, "color added"),
            None => debug!(added = ?color.rgb, "no candidate left"),
        }
        next
    }

    /// Add the seed colors `colors`, in order, and return the last
    /// result of [`add`](Self::add).  If `colors` is empty, the
    /// generator is primed with white instead.
    pub fn seed(&mut self, colors: &[RGB8]) -> Option<ColorSample> {
        if colors.is_empty() { return self.add(&ColorSample::new(WHITE)) }
        let mut next = None;
        for &rgb in colors {
            next = self.add(&ColorSample::new(rgb));
        }
        next
    }

    /// Return an iterator yielding `start` and then successively the
    /// colors chosen by the generator, each one being added to the
    /// palette before the next is computed.  The iterator ends when
    /// the candidates are exhausted.
    pub fn swatches(&mut self, start: Option<ColorSample>) -> Swatches<'_> {
        Swatches { generator: self, first: start, last: None }
    }
}

/// An iterator over the colors of a growing palette.
///
/// Created by [`PaletteGenerator::swatches`].
pub struct Swatches<'a> {
    generator: &'a mut PaletteGenerator,
    first: Option<ColorSample>,
    last: Option<ColorSample>, // yielded, not yet added
}

impl<'a> Iterator for Swatches<'a> {
    type Item = ColorSample;

    fn next(&mut self) -> Option<Self::Item> {
        let c = match self.last.take() {
            None => self.first.take()?,
            Some(last) => self.generator.add(&last)?,
        };
        self.last = Some(c);
        Some(c)
    }
}

impl<'a> std::iter::FusedIterator for Swatches<'a> {}
