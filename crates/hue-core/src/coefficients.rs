//! Constant tables shared by the conversions: luma weights per signal
//! encoding, YPbPr reconstruction constants, reference white points and the
//! sRGB / Bradford matrices.

use glam::{DMat3, DVec3};
use serde::{Deserialize, Serialize};

/// An ITU-R Recommendation signal encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalEncoding {
    /// ITU-R BT.601 (standard-definition television).
    #[default]
    Rec601,
    /// ITU-R BT.709 (high-definition television).
    Rec709,
}

impl SignalEncoding {
    /// The `[kR, kG, kB]` weights used to compute luma. They sum to 1.
    pub const fn coefficients(self) -> [f64; 3] {
        match self {
            Self::Rec601 => [0.299, 0.587, 0.114],
            Self::Rec709 => [0.2126, 0.7152, 0.0722],
        }
    }

    /// Weighted luma of a normalized RGB triplet.
    ///
    /// Evaluated as `g + kR·(r − g) + kB·(b − g)`, which equals
    /// `kR·r + kG·g + kB·b` and returns a gray's level bit-for-bit.
    pub fn luma(self, rgb: [f64; 3]) -> f64 {
        let [kr, _, kb] = self.coefficients();
        rgb[1] + kr * (rgb[0] - rgb[1]) + kb * (rgb[2] - rgb[1])
    }

    /// Published YPbPr → RGB constants `[r_pr, g_pb, g_pr, b_pb]`.
    ///
    /// ```text
    /// r = Y + r_pr × Pr
    /// g = Y − g_pb × Pb − g_pr × Pr
    /// b = Y + b_pb × Pb
    /// ```
    ///
    /// These are rounded published values, not the exact inverse of the
    /// forward transform, so a round trip drifts by up to ~2e-4 per channel.
    pub const fn ypbpr_inverse(self) -> [f64; 4] {
        match self {
            Self::Rec601 => [1.402, 0.344, 0.714, 1.772],
            Self::Rec709 => [1.575, 0.187, 0.468, 1.856],
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Rec601 => "ITU-R BT.601",
            Self::Rec709 => "ITU-R BT.709",
        }
    }
}

/// A CIE standard illuminant used as reference white.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WhitePoint {
    /// Noon daylight, 6504 K. Native white of sRGB.
    #[default]
    D65,
    /// Horizon light, 5003 K. Print and ICC profile connection space.
    D50,
}

impl WhitePoint {
    /// XYZ tristimulus values of the white, normalized to `Y = 1`.
    pub fn tristimulus(self) -> DVec3 {
        match self {
            Self::D65 => DVec3::new(0.95047, 1.0, 1.08883),
            Self::D50 => DVec3::new(0.96422, 1.0, 0.82521),
        }
    }
}

const fn from_rows(m: [[f64; 3]; 3]) -> DMat3 {
    DMat3::from_cols(
        DVec3::new(m[0][0], m[1][0], m[2][0]),
        DVec3::new(m[0][1], m[1][1], m[2][1]),
        DVec3::new(m[0][2], m[1][2], m[2][2]),
    )
}

/// Linear sRGB (D65) → XYZ, IEC 61966-2-1.
pub const SRGB_TO_XYZ: DMat3 = from_rows([
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
]);

/// XYZ → linear sRGB (D65).
pub const XYZ_TO_SRGB: DMat3 = from_rows([
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
]);

/// Bradford cone response matrix.
pub const BRADFORD: DMat3 = from_rows([
    [0.8951, 0.2664, -0.1614],
    [-0.7502, 1.7135, 0.0367],
    [0.0389, -0.0685, 1.0296],
]);

pub const BRADFORD_INV: DMat3 = from_rows([
    [0.9869929055, -0.1470542564, 0.1599626517],
    [0.4323052697, 0.5183602715, 0.0492912282],
    [-0.0085286646, 0.0400428217, 0.9684866958],
]);
