//! Palettes of perceptually distinct colors.
//!
//! - [`PaletteGenerator`] grows a palette with the Glasbey sequential
//!   algorithm: each new color maximizes its minimum [CIEDE2000]
//!   difference to the colors already chosen, searching the whole sRGB
//!   cube (optionally restricted by an [`LchFilter`]).
//! - [`diff_de00`] is the CIEDE2000 color difference.
//! - [`srgb_to_xyz`] and [`xyz_to_lab`] convert 8-bit sRGB colors to
//!   CIE L\*a\*b\* (D65 reference white).
//!
//! # Example
//!
//! ```no_run
//! use glasbey_palette::PaletteGenerator;
//! let mut palette = PaletteGenerator::new();
//! let start = palette.seed(&[]); // primed with white
//! for c in palette.swatches(start).take(8) {
//!     println!("{:.2} {} {} {}", c.min_delta, c.rgb.r, c.rgb.g, c.rgb.b);
//! }
//! ```
//!
//! [CIEDE2000]: https://en.wikipedia.org/wiki/Color_difference#CIEDE2000

use std::f64::consts::PI;
use rgb::RGB8;

mod de2000;
pub use de2000::{diff_de00, diff_de00_weighted, Weights};

mod glasbey;
pub use glasbey::{PaletteGenerator, Status, Swatches, LchFilter};

pub mod config;

/// Pure white, used to prime a generator without seed colors.
pub const WHITE: RGB8 = RGB8 { r: 255, g: 255, b: 255 };

/// A color in the CIE XYZ color space, scaled so that Y ∈ \[0, 100\].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// D65 reference white (2° observer).
pub const D65: Xyz = Xyz { x: 95.047, y: 100.0, z: 108.883 };

/// A color in the CIE L\*a\*b\* color space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Lab {
    /// The lightness, nominally in the range 0. to 100.
    pub l: f64,
    /// Green–red axis.
    pub a: f64,
    /// Blue–yellow axis.
    pub b: f64,
}

/// The type for colors in the CIE L\*C\*h\*_ab color space.  This
/// color space is CIE L\*a\*b\* with polar coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lch {
    /// The lightness, nominally in the range 0. to 100.
    pub l: f64,
    /// The chroma, in the range 0. to 181.02, but less in practice.
    pub c: f64,
    /// The hue in degrees in the range \[0, 360).
    pub h: f64,
}

const EPS0: f64 = 6. / 29.;
const EPS: f64 = EPS0 * EPS0 * EPS0;

impl Lab {
    /// Return the polar form of the color, with the hue in degrees.
    pub fn to_lch(&self) -> Lch {
        let c = (self.a * self.a + self.b * self.b).sqrt();
        let h = { let h = self.b.atan2(self.a) * 180. / PI;
                  if h < 0. { h + 360. } else { h } };
        Lch { l: self.l, c, h }
    }
}

/// Convert the sRGB color `srgb` (channels in \[0, 255\]) to CIE XYZ.
///
/// # Example
///
/// ```
/// use rgb::RGB8;
/// use glasbey_palette::srgb_to_xyz;
/// let xyz = srgb_to_xyz(RGB8::new(255, 255, 255));
/// assert!((xyz.y - 100.).abs() < 1e-9);
/// ```
pub fn srgb_to_xyz(srgb: RGB8) -> Xyz {
    // Inverse of the sRGB transfer function, scaled to [0, 100].
    let linear = |c: u8| {
        let c = c as f64 / 255.;
        let c = if c > 0.04045 { ((c + 0.055) / 1.055).powf(2.4) }
                else { c / 12.92 };
        100. * c
    };
    let (r, g, b) = (linear(srgb.r), linear(srgb.g), linear(srgb.b));
    Xyz { x: r * 0.4124 + g * 0.3576 + b * 0.1805,
          y: r * 0.2126 + g * 0.7152 + b * 0.0722,
          z: r * 0.0193 + g * 0.1192 + b * 0.9505 }
}

/// Convert the CIE XYZ color `xyz` to CIE L\*a\*b\* relative to the
/// [`D65`] white point.
pub fn xyz_to_lab(xyz: Xyz) -> Lab { xyz_to_lab_with_white(xyz, D65) }

/// Convert the CIE XYZ color `xyz` to CIE L\*a\*b\* relative to the
/// reference `white`.
pub fn xyz_to_lab_with_white(xyz: Xyz, white: Xyz) -> Lab {
    const C0: f64 = 1. / 3.;
    const C1: f64 = 4. / 29.;
    let f = |t: f64| if t > EPS { t.powf(C0) }
                     else { t / (3. * EPS0 * EPS0) + C1 };
    let fx = f(xyz.x / white.x);
    let fy = f(xyz.y / white.y);
    let fz = f(xyz.z / white.z);
    Lab { l: 116. * fy - 16.,
          a: 500. * (fx - fy),
          b: 200. * (fy - fz) }
}

/// A color given by its sRGB and CIE L\*a\*b\* coordinates.
///
/// The Lab coordinates are computed once, when the sample is created.
/// `min_delta` is the search state of [`PaletteGenerator`]: for a
/// sample returned by [`PaletteGenerator::add`], it is the minimum
/// CIEDE2000 difference between that color and the palette built so
/// far, i.e., how distinguishable the new color is.  It is +∞ for a
/// freshly created sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorSample {
    pub rgb: RGB8,
    pub lab: Lab,
    pub min_delta: f64,
}

impl ColorSample {
    /// Create a sample for the sRGB color `rgb`.
    pub fn new(rgb: RGB8) -> Self {
        let lab = xyz_to_lab(srgb_to_xyz(rgb));
        ColorSample { rgb, lab, min_delta: f64::INFINITY }
    }
}

impl From<RGB8> for ColorSample {
    #[inline]
    fn from(rgb: RGB8) -> Self { ColorSample::new(rgb) }
}

impl From<[u8; 3]> for ColorSample {
    #[inline]
    fn from([r, g, b]: [u8; 3]) -> Self { ColorSample::new(RGB8::new(r, g, b)) }
}
