//! CIEDE2000 color difference.
//!
//! See G. Sharma, W. Wu, E. N. Dalal, “The CIEDE2000 color-difference
//! formula: Implementation notes, supplementary test data, and
//! mathematical observations”, Color Research & Application 30 (2005).

use std::f64::consts::PI;
use crate::Lab;

const TWO_PI: f64 = 2. * PI;
const DEG: f64 = PI / 180.;
const POW25_7: f64 = 6_103_515_625.; // 25⁷

/// Parametric weighting factors of the CIEDE2000 formula for the
/// lightness, chroma and hue differences.
///
/// The default (all factors equal to 1) corresponds to the reference
/// conditions and is what [`diff_de00`] uses.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Weights {
    pub kl: f64,
    pub kc: f64,
    pub kh: f64,
}

impl Default for Weights {
    fn default() -> Self { Weights { kl: 1., kc: 1., kh: 1. } }
}

/// Return the CIEDE2000 color difference between `lab1` and `lab2`.
///
/// The result is non-negative, symmetric in its arguments, and `0.`
/// for identical colors.
///
/// # Example
///
/// ```
/// use glasbey_palette::{diff_de00, Lab};
/// let c1 = Lab { l: 50., a: 2.6772, b: -79.7751 };
/// let c2 = Lab { l: 50., a: 0., b: -82.7485 };
/// assert!((diff_de00(&c1, &c2) - 2.0425).abs() < 1e-4);
/// ```
#[inline]
pub fn diff_de00(lab1: &Lab, lab2: &Lab) -> f64 {
    diff_de00_weighted(lab1, lab2, &Weights::default())
}

/// Return the CIEDE2000 color difference between `lab1` and `lab2`
/// with the parametric factors `k`.
pub fn diff_de00_weighted(lab1: &Lab, lab2: &Lab, k: &Weights) -> f64 {
    let Lab { l: l1, a: a1, b: b1 } = *lab1;
    let Lab { l: l2, a: a2, b: b2 } = *lab2;

    let c1 = (a1 * a1 + b1 * b1).sqrt();
    let c2 = (a2 * a2 + b2 * b2).sqrt();
    let cbar7 = ((c1 + c2) / 2.).powf(7.);
    let g = 0.5 * (1. - (cbar7 / (cbar7 + POW25_7)).sqrt());
    let ap1 = (1. + g) * a1;
    let ap2 = (1. + g) * a2;
    let cp1 = (ap1 * ap1 + b1 * b1).sqrt();
    let cp2 = (ap2 * ap2 + b2 * b2).sqrt();
    let hp1 = { let h = b1.atan2(ap1); if h < 0. { h + TWO_PI } else { h } };
    let hp2 = { let h = b2.atan2(ap2); if h < 0. { h + TWO_PI } else { h } };

    let dlp = l2 - l1;
    let dcp = cp2 - cp1;
    let dh = {
        let dh = hp2 - hp1;
        if dh > PI { dh - TWO_PI }
        else if dh < -PI { dh + TWO_PI }
        else { dh } };
    let dhp = 2. * (cp1 * cp2).sqrt() * (dh / 2.).sin();

    let lpbar = (l1 + l2) / 2.;
    let cpbar = (cp1 + cp2) / 2.;
    let hpbar = {
        let mut h = (hp1 + hp2) / 2.;
        if (hp1 - hp2).abs() > PI { h -= PI }
        if h < 0. { h += TWO_PI }
        // The hue of an achromatic color is meaningless.
        if cp1 * cp2 == 0. { h = hp1 + hp2 }
        h * (180. / PI) };

    let t = 1.
        - 0.17 * (DEG * (hpbar - 30.)).cos()
        + 0.24 * (DEG * (2. * hpbar)).cos()
        + 0.32 * (DEG * (3. * hpbar + 6.)).cos()
        - 0.20 * (DEG * (4. * hpbar - 63.)).cos();
    let angle = PI / 6. * (-((hpbar - 275.) / 25.).powi(2)).exp();
    let cpbar7 = cpbar.powf(7.);
    let rc = 2. * (cpbar7 / (cpbar7 + POW25_7)).sqrt();
    let lpbar502 = (lpbar - 50.).powi(2);
    let sl = 1. + 0.015 * lpbar502 / (20. + lpbar502).sqrt();
    let sc = 1. + 0.045 * cpbar;
    let sh = 1. + 0.015 * cpbar * t;
    let rt = -(2. * angle).sin() * rc;
    let x = dlp / (k.kl * sl);
    let y = dcp / (k.kc * sc);
    let z = dhp / (k.kh * sh);
    (x * x + y * y + z * z + rt * y * z).sqrt()
}
