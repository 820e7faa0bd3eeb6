//! CIE XYZ ↔ CIE L*a*b*.
//!
//! # Formula
//! With `(Xn, Yn, Zn)` the reference white, ε = 216/24389, κ = 24389/27:
//! ```text
//!   f(t) = t^(1/3)               t > ε
//!        = (κ × t + 16) / 116    otherwise
//!
//!   L = 116 × f(Y/Yn) − 16
//!   a = 500 × (f(X/Xn) − f(Y/Yn))
//!   b = 200 × (f(Y/Yn) − f(Z/Zn))
//! ```
//! The inverse reverses each step exactly.
//!
//! # Reference
//! CIE 15:2004 Colorimetry; Lindbloom, Bruce J. — Lab to XYZ

use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::xyz::Tristimulus;
use crate::coefficients::WhitePoint;
use crate::rgba::Rgba;

const EPSILON: f64 = 216.0 / 24389.0;
const KAPPA: f64 = 24389.0 / 27.0;

/// Lightness `l` in [0, 100] and opponent axes `a` (green–red) and `b`
/// (blue–yellow), roughly −128 to 127.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

fn lab_f_inv(f: f64) -> f64 {
    let cubed = f * f * f;
    if cubed > EPSILON {
        cubed
    } else {
        (116.0 * f - 16.0) / KAPPA
    }
}

/// XYZ relative to `white` → LAB.
pub fn xyz_to_lab(xyz: Tristimulus, white: WhitePoint) -> Lab {
    let n = DVec3::from(xyz) / white.tristimulus();
    let (fx, fy, fz) = (lab_f(n.x), lab_f(n.y), lab_f(n.z));
    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// LAB → XYZ relative to `white`.
pub fn lab_to_xyz(lab: Lab, white: WhitePoint) -> Tristimulus {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = fy + lab.a / 500.0;
    let fz = fy - lab.b / 200.0;

    // Lightness has its own linear segment: L ≤ κε ↔ Y/Yn ≤ ε.
    let y = if lab.l > KAPPA * EPSILON {
        fy * fy * fy
    } else {
        lab.l / KAPPA
    };

    let n = DVec3::new(lab_f_inv(fx), y, lab_f_inv(fz));
    (n * white.tristimulus()).into()
}

impl Rgba {
    /// LAB relative to D65.
    pub fn lab(&self) -> Lab {
        self.lab_under(WhitePoint::D65)
    }

    pub fn lab_under(&self, white: WhitePoint) -> Lab {
        xyz_to_lab(self.xyz_under(white), white)
    }

    /// Build from LAB relative to `white`; `alpha` is in [0, 1]. The
    /// resulting RGB is clamped.
    pub fn from_lab(lab: Lab, white: WhitePoint, alpha: f64) -> Self {
        Self::from_xyz_under(lab_to_xyz(lab, white), white, alpha)
    }
}
