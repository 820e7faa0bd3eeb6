//! Transfer functions between encoded RGB and linear light.

/// Converts between non-linear (encoded) and linear light values.
pub trait TransferFunction: Send + Sync {
    /// Convert from non-linear (encoded) to linear light.
    fn to_linear(&self, encoded: f64) -> f64;

    /// Convert from linear light to non-linear (encoded).
    fn to_encoded(&self, linear: f64) -> f64;
}

/// sRGB transfer function per IEC 61966-2-1.
///
/// ```text
/// to_linear:   V <= 0.04045 → V / 12.92
///              V >  0.04045 → ((V + 0.055) / 1.055) ^ 2.4
///
/// to_encoded:  L <= 0.0031308 → L × 12.92
///              L >  0.0031308 → 1.055 × L^(1/2.4) − 0.055
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SrgbTransfer;

impl SrgbTransfer {
    const ENCODED_CUT: f64 = 0.04045;
    const LINEAR_CUT: f64 = 0.0031308;
    const SLOPE: f64 = 12.92;
    const GAMMA: f64 = 2.4;
    const OFFSET: f64 = 0.055;
}

impl TransferFunction for SrgbTransfer {
    fn to_linear(&self, encoded: f64) -> f64 {
        if encoded <= Self::ENCODED_CUT {
            encoded / Self::SLOPE
        } else {
            ((encoded + Self::OFFSET) / (1.0 + Self::OFFSET)).powf(Self::GAMMA)
        }
    }

    fn to_encoded(&self, linear: f64) -> f64 {
        if linear <= Self::LINEAR_CUT {
            linear * Self::SLOPE
        } else {
            (1.0 + Self::OFFSET) * linear.powf(1.0 / Self::GAMMA) - Self::OFFSET
        }
    }
}

/// Identity transfer for RGB that is already linear light.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearTransfer;

impl TransferFunction for LinearTransfer {
    fn to_linear(&self, encoded: f64) -> f64 {
        encoded
    }

    fn to_encoded(&self, linear: f64) -> f64 {
        linear
    }
}
