//! RGBA ↔ CIE 1931 XYZ, plus Bradford chromatic adaptation between white
//! points.
//!
//! ```text
//! RGB ──→ linearize ──→ SRGB_TO_XYZ ──→ XYZ (D65, white Y = 1)
//! XYZ ──→ XYZ_TO_SRGB ──→ encode ──→ clamp(0, 1) ──→ RGB
//! ```
//!
//! # Reference
//! Lindbloom, Bruce J. — RGB/XYZ Matrices; Chromatic Adaptation (Bradford)

use glam::{DMat3, DVec3};
use serde::{Deserialize, Serialize};

use super::transfer::{SrgbTransfer, TransferFunction};
use crate::coefficients::{BRADFORD, BRADFORD_INV, SRGB_TO_XYZ, WhitePoint, XYZ_TO_SRGB};
use crate::rgba::Rgba;

/// CIE XYZ tristimulus values. `y` is relative luminance; the reference
/// white has `y = 1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tristimulus {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Tristimulus {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Tristimulus values of a reference white.
    pub fn white(white: WhitePoint) -> Self {
        white.tristimulus().into()
    }

    /// Re-express these values, measured under `from`, as seen under `to`.
    pub fn adapt(self, from: WhitePoint, to: WhitePoint) -> Self {
        if from == to {
            return self;
        }
        (bradford_adaptation(from, to) * DVec3::from(self)).into()
    }
}

impl From<Tristimulus> for DVec3 {
    fn from(t: Tristimulus) -> Self {
        DVec3::new(t.x, t.y, t.z)
    }
}

impl From<DVec3> for Tristimulus {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// Bradford adaptation matrix from `from` white to `to` white.
///
/// ```text
/// M_INV × diag(cone(to) / cone(from)) × M
/// ```
pub fn bradford_adaptation(from: WhitePoint, to: WhitePoint) -> DMat3 {
    let src_cone = BRADFORD * from.tristimulus();
    let dst_cone = BRADFORD * to.tristimulus();
    BRADFORD_INV * DMat3::from_diagonal(dst_cone / src_cone) * BRADFORD
}

/// Encoded sRGB in [0, 1] → XYZ relative to D65.
pub fn rgb_to_xyz(rgb: [f64; 3]) -> Tristimulus {
    rgb_to_xyz_with(rgb, &SrgbTransfer)
}

/// RGB with an explicit transfer function → XYZ relative to D65.
pub fn rgb_to_xyz_with(rgb: [f64; 3], transfer: &dyn TransferFunction) -> Tristimulus {
    let linear = DVec3::from_array(rgb.map(|c| transfer.to_linear(c)));
    (SRGB_TO_XYZ * linear).into()
}

/// XYZ relative to D65 → encoded sRGB, clamped to [0, 1].
pub fn xyz_to_rgb(xyz: Tristimulus) -> [f64; 3] {
    xyz_to_rgb_with(xyz, &SrgbTransfer)
}

pub fn xyz_to_rgb_with(xyz: Tristimulus, transfer: &dyn TransferFunction) -> [f64; 3] {
    let linear = XYZ_TO_SRGB * DVec3::from(xyz);
    linear
        .to_array()
        .map(|c| transfer.to_encoded(c).clamp(0.0, 1.0))
}

impl Rgba {
    /// XYZ relative to D65.
    pub fn xyz(&self) -> Tristimulus {
        rgb_to_xyz(self.normalized_rgb())
    }

    /// XYZ relative to `white`, adapted from sRGB's native D65.
    pub fn xyz_under(&self, white: WhitePoint) -> Tristimulus {
        self.xyz().adapt(WhitePoint::D65, white)
    }

    /// Build from XYZ relative to D65; `alpha` is in [0, 1].
    pub fn from_xyz(xyz: Tristimulus, alpha: f64) -> Self {
        Self::from_normalized_rgb(xyz_to_rgb(xyz), alpha)
    }

    pub fn from_xyz_under(xyz: Tristimulus, white: WhitePoint, alpha: f64) -> Self {
        Self::from_xyz(xyz.adapt(white, WhitePoint::D65), alpha)
    }
}
