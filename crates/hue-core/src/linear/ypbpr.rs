//! RGBA ↔ YPbPr (analog) and YCbCr (digital) luma/chroma conversions.
//!
//! # Formula
//! Forward, over normalized RGB with the encoding's `(kR, kG, kB)`:
//! ```text
//!   Y  = kR×r + kG×g + kB×b
//!   Pb = 0.5 × (b − Y) / (1 − kB)
//!   Pr = 0.5 × (r − Y) / (1 − kR)
//! ```
//! The inverse uses the published per-encoding constants from
//! [`SignalEncoding::ypbpr_inverse`], which are rounded and not the exact
//! algebraic inverse. Reconstructed RGB is clamped.
//!
//! Digital YCbCr is the 8-bit studio-swing quantization of YPbPr:
//! ```text
//!   Y' = 16 + 219×Y      Cb = 128 + 224×Pb      Cr = 128 + 224×Pr
//! ```

use serde::{Deserialize, Serialize};

use crate::coefficients::SignalEncoding;
use crate::rgba::Rgba;

/// Luma (`y`, 0–1) and blue/red color differences (`pb`, `pr`, −0.5–0.5).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YPbPr {
    pub y: f64,
    pub pb: f64,
    pub pr: f64,
}

/// 8-bit studio-swing luma (16–235) and chroma (16–240).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YCbCr {
    pub y: f64,
    pub cb: f64,
    pub cr: f64,
}

const LUMA_OFFSET: f64 = 16.0;
const LUMA_SCALE: f64 = 219.0;
const CHROMA_OFFSET: f64 = 128.0;
const CHROMA_SCALE: f64 = 224.0;

pub fn rgb_to_ypbpr(rgb: [f64; 3], encoding: SignalEncoding) -> YPbPr {
    let [kr, _, kb] = encoding.coefficients();
    let y = encoding.luma(rgb);
    YPbPr {
        y,
        pb: 0.5 * (rgb[2] - y) / (1.0 - kb),
        pr: 0.5 * (rgb[0] - y) / (1.0 - kr),
    }
}

/// Reconstruct normalized RGB, clamped to [0, 1].
pub fn ypbpr_to_rgb(ypbpr: YPbPr, encoding: SignalEncoding) -> [f64; 3] {
    let [r_pr, g_pb, g_pr, b_pb] = encoding.ypbpr_inverse();
    let YPbPr { y, pb, pr } = ypbpr;
    [
        (y + r_pr * pr).clamp(0.0, 1.0),
        (y - g_pb * pb - g_pr * pr).clamp(0.0, 1.0),
        (y + b_pb * pb).clamp(0.0, 1.0),
    ]
}

impl From<YPbPr> for YCbCr {
    fn from(v: YPbPr) -> Self {
        Self {
            y: LUMA_OFFSET + LUMA_SCALE * v.y,
            cb: CHROMA_OFFSET + CHROMA_SCALE * v.pb,
            cr: CHROMA_OFFSET + CHROMA_SCALE * v.pr,
        }
    }
}

impl From<YCbCr> for YPbPr {
    fn from(v: YCbCr) -> Self {
        Self {
            y: (v.y - LUMA_OFFSET) / LUMA_SCALE,
            pb: (v.cb - CHROMA_OFFSET) / CHROMA_SCALE,
            pr: (v.cr - CHROMA_OFFSET) / CHROMA_SCALE,
        }
    }
}

impl Rgba {
    /// YPbPr components under standard-definition encoding.
    pub fn ypbpr(&self) -> YPbPr {
        self.ypbpr_with(SignalEncoding::default())
    }

    pub fn ypbpr_with(&self, encoding: SignalEncoding) -> YPbPr {
        rgb_to_ypbpr(self.normalized_rgb(), encoding)
    }

    /// Reconstruct a color from YPbPr; `alpha` is in [0, 1].
    pub fn from_ypbpr(ypbpr: YPbPr, encoding: SignalEncoding, alpha: f64) -> Self {
        Self::from_normalized_rgb(ypbpr_to_rgb(ypbpr, encoding), alpha)
    }

    pub fn ycbcr_with(&self, encoding: SignalEncoding) -> YCbCr {
        self.ypbpr_with(encoding).into()
    }

    pub fn from_ycbcr(ycbcr: YCbCr, encoding: SignalEncoding, alpha: f64) -> Self {
        Self::from_ypbpr(ycbcr.into(), encoding, alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-4;
    /// Round-trip bound imposed by the rounded inverse constants.
    const ROUNDTRIP_TOLERANCE: f64 = 1e-3;

    #[test]
    fn test_red_rec601_known_values() {
        let v = Rgba::opaque(255.0, 0.0, 0.0).ypbpr();
        assert!((v.y - 0.299).abs() < EPSILON);
        assert!((v.pb + 0.1687).abs() < EPSILON);
        assert!((v.pr - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_gray_has_no_chroma() {
        for encoding in [SignalEncoding::Rec601, SignalEncoding::Rec709] {
            let v = Rgba::opaque(100.0, 100.0, 100.0).ypbpr_with(encoding);
            assert!((v.y - 100.0 / 255.0).abs() < 1e-12);
            assert_eq!(v.pb, 0.0);
            assert_eq!(v.pr, 0.0);
        }
    }

    #[test]
    fn test_roundtrip_within_published_constant_tolerance() {
        let samples = [
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
            [0.2, 0.4, 0.6],
            [0.9, 0.7, 0.1],
            [0.5, 0.5, 0.5],
        ];
        for encoding in [SignalEncoding::Rec601, SignalEncoding::Rec709] {
            for rgb in samples {
                let back = ypbpr_to_rgb(rgb_to_ypbpr(rgb, encoding), encoding);
                for c in 0..3 {
                    assert!(
                        (back[c] - rgb[c]).abs() < ROUNDTRIP_TOLERANCE,
                        "{encoding:?} {rgb:?} channel {c}: {}",
                        back[c]
                    );
                }
            }
        }
    }

    #[test]
    fn test_reconstruction_clamps_and_keeps_alpha() {
        let over = YPbPr { y: 1.0, pb: 0.5, pr: 0.5 };
        let c = Rgba::from_ypbpr(over, SignalEncoding::Rec601, 0.5);
        assert_eq!(c.red, 255.0);
        assert_eq!(c.blue, 255.0);
        assert!(c.green >= 0.0);
        assert!((c.alpha - 127.5).abs() < 1e-9);
    }

    #[test]
    fn test_ycbcr_studio_range() {
        let white = Rgba::opaque(255.0, 255.0, 255.0).ycbcr_with(SignalEncoding::Rec601);
        assert!((white.y - 235.0).abs() < 1e-9);
        assert!((white.cb - 128.0).abs() < 1e-9);
        assert!((white.cr - 128.0).abs() < 1e-9);

        let black = Rgba::default().ycbcr_with(SignalEncoding::Rec709);
        assert!((black.y - 16.0).abs() < 1e-9);

        let blue = Rgba::opaque(0.0, 0.0, 255.0).ycbcr_with(SignalEncoding::Rec601);
        assert!((blue.cb - 240.0).abs() < 1e-6);
    }

    #[test]
    fn test_ycbcr_reconstruction_matches_ypbpr() {
        let c = Rgba::opaque(30.0, 160.0, 220.0);
        let via_ycbcr = Rgba::from_ycbcr(c.ycbcr_with(SignalEncoding::Rec709), SignalEncoding::Rec709, 1.0);
        let via_ypbpr = Rgba::from_ypbpr(c.ypbpr_with(SignalEncoding::Rec709), SignalEncoding::Rec709, 1.0);
        assert!((via_ycbcr.red - via_ypbpr.red).abs() < 1e-9);
        assert!((via_ycbcr.green - via_ypbpr.green).abs() < 1e-9);
        assert!((via_ycbcr.blue - via_ypbpr.blue).abs() < 1e-9);
    }
}
