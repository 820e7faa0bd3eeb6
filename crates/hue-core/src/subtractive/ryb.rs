//! RGBA ↔ RYB (red, yellow, blue painter's model).
//!
//! RYB has no canonical definition; this follows the piecewise linear
//! model of Sugita & Takahashi.
//!
//! # Algorithm
//! RGB → RYB:
//! ```text
//! 1. Iw = min(r, g, b);  (r', g', b') = (r, g, b) − Iw         remove whiteness
//! 2. R = r' − min(r', g')
//!    Y = (g' + min(r', g')) / 2
//!    B = (b' + g' − min(r', g')) / 2                         green → yellow + blue
//! 3. scale (R, Y, B) so max(R, Y, B) = max(r', g', b')
//! 4. (R, Y, B) += min(1 − r, 1 − g, 1 − b)                   blackness
//! ```
//! RYB → RGB runs the mirror image (yellow + blue → green, whiteness of RYB
//! becomes blackness of RGB).
//!
//! The mapping is an approximation. Round trips land within 1e-3 of the
//! input but are not guaranteed to be exact.
//!
//! # Reference
//! Sugita, J. & Takahashi, T. — Computational RYB Color Model and its
//! Applications, IIEEJ Transactions on Image Electronics and Visual
//! Computing 5(2), 2017.

use serde::{Deserialize, Serialize};

use crate::rgba::Rgba;

/// Red, yellow and blue pigment amounts in [0, 1]. `(0, 0, 0)` is white,
/// `(1, 1, 1)` is black.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ryb {
    pub red: f64,
    pub yellow: f64,
    pub blue: f64,
}

fn min3(v: [f64; 3]) -> f64 {
    v[0].min(v[1]).min(v[2])
}

fn max3(v: [f64; 3]) -> f64 {
    v[0].max(v[1]).max(v[2])
}

/// Rescale `v` so its largest component equals `peak`.
fn renormalize(v: [f64; 3], peak: f64) -> [f64; 3] {
    let top = max3(v);
    if top == 0.0 { v } else { v.map(|c| c * peak / top) }
}

pub fn rgb_to_ryb(rgb: [f64; 3]) -> Ryb {
    let rgb = rgb.map(|c| c.clamp(0.0, 1.0));
    let whiteness = min3(rgb);
    let blackness = min3(rgb.map(|c| 1.0 - c));
    let [r, g, b] = rgb.map(|c| c - whiteness);

    let shared = r.min(g);
    let ryb = [r - shared, (g + shared) / 2.0, (b + g - shared) / 2.0];
    let [red, yellow, blue] = renormalize(ryb, max3([r, g, b])).map(|c| c + blackness);

    Ryb { red, yellow, blue }
}

pub fn ryb_to_rgb(ryb: Ryb) -> [f64; 3] {
    let ryb = [ryb.red, ryb.yellow, ryb.blue].map(|c| c.clamp(0.0, 1.0));
    let whiteness = min3(ryb);
    let blackness = min3(ryb.map(|c| 1.0 - c));
    let [r, y, b] = ryb.map(|c| c - whiteness);

    let shared = y.min(b);
    let rgb = [r + y - shared, y + shared, 2.0 * (b - shared)];
    renormalize(rgb, max3([r, y, b])).map(|c| (c + blackness).clamp(0.0, 1.0))
}

impl Rgba {
    pub fn ryb(&self) -> Ryb {
        rgb_to_ryb(self.normalized_rgb())
    }

    /// Build from RYB; `alpha` is in [0, 1].
    pub fn from_ryb(ryb: Ryb, alpha: f64) -> Self {
        Self::from_normalized_rgb(ryb_to_rgb(ryb), alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;
    const ROUNDTRIP_TOLERANCE: f64 = 1e-3;

    fn assert_ryb(rgb: [f64; 3], expected: [f64; 3]) {
        let ryb = rgb_to_ryb(rgb);
        let got = [ryb.red, ryb.yellow, ryb.blue];
        for c in 0..3 {
            assert!((got[c] - expected[c]).abs() < EPSILON, "{rgb:?} → {got:?}, expected {expected:?}");
        }
    }

    #[test]
    fn test_primaries_and_secondaries() {
        assert_ryb([1.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
        assert_ryb([1.0, 1.0, 0.0], [0.0, 1.0, 0.0]);
        assert_ryb([0.0, 0.0, 1.0], [0.0, 0.0, 1.0]);
        assert_ryb([0.0, 1.0, 0.0], [0.0, 1.0, 1.0]);
        assert_ryb([1.0, 0.5, 0.0], [1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_white_and_black_swap_roles() {
        assert_ryb([1.0, 1.0, 1.0], [0.0, 0.0, 0.0]);
        assert_ryb([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);
        assert_eq!(ryb_to_rgb(Ryb { red: 0.0, yellow: 0.0, blue: 0.0 }), [1.0, 1.0, 1.0]);
        assert_eq!(ryb_to_rgb(Ryb { red: 1.0, yellow: 1.0, blue: 1.0 }), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_roundtrip_error_is_bounded() {
        let steps = [0.0, 0.2, 0.45, 0.7, 1.0];
        for r in steps {
            for g in steps {
                for b in steps {
                    let rgb = [r, g, b];
                    let back = ryb_to_rgb(rgb_to_ryb(rgb));
                    for c in 0..3 {
                        assert!(
                            (back[c] - rgb[c]).abs() < ROUNDTRIP_TOLERANCE,
                            "{rgb:?} → {back:?}"
                        );
                    }
                }
            }
        }
    }
}
