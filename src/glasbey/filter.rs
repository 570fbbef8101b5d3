use crate::{Lab, Lch};

/// A region of the CIE L\*C\*h\*_ab color space restricting the
/// colors a [`PaletteGenerator`](crate::PaletteGenerator) may choose.
///
/// All bounds are inclusive.  Hues are in degrees.  When
/// `min_h > max_h`, the hue range wraps around 0°: for example
/// `min_h = 300.` and `max_h = 60.` allows hues in \[300, 360) and
/// \[0, 60\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LchFilter {
    pub min_l: f64,
    pub max_l: f64,
    pub min_c: f64,
    pub max_c: f64,
    pub min_h: f64,
    pub max_h: f64,
}

impl Default for LchFilter {
    /// The whole sRGB gamut: L\* ∈ \[0, 100\], C\* ∈ \[0, 150\],
    /// h ∈ \[0, 360\].
    fn default() -> Self {
        LchFilter { min_l: 0., max_l: 100.,
                    min_c: 0., max_c: 150.,
                    min_h: 0., max_h: 360. }
    }
}

impl LchFilter {
    pub fn new(min_l: f64, max_l: f64, min_c: f64, max_c: f64,
               min_h: f64, max_h: f64) -> Self {
        LchFilter { min_l, max_l, min_c, max_c, min_h, max_h }
    }

    /// Says whether the hue range crosses 0°.
    #[inline]
    pub fn wraps_hue(&self) -> bool { self.min_h > self.max_h }

    /// Says whether the color `lab` lies in the region.
    pub fn accepts(&self, lab: &Lab) -> bool {
        let Lch { l, c, h } = lab.to_lch();
        let reject = l < self.min_l || l > self.max_l
            || c < self.min_c || c > self.max_c
            || if self.min_h <= self.max_h { h < self.min_h || h > self.max_h }
               else { h < self.min_h && h > self.max_h };
        !reject
    }
}
