//! RGBA ↔ HSL.
//!
//! ```text
//! lightness  = (max + min) / 2
//! saturation = Δ / (1 − |2L − 1|)      (0 when Δ = 0)
//!
//! inverse: C = (1 − |2L − 1|) × saturation
//!          rgb = sector(hue, C) + (L − C/2)
//! ```

use serde::{Deserialize, Serialize};

use super::{Extrema, sector_rgb, wrap_hue};
use crate::rgba::Rgba;

/// Hue in degrees [0, 360), saturation and lightness in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue: wrap_hue(hue),
            saturation: saturation.clamp(0.0, 1.0),
            lightness: lightness.clamp(0.0, 1.0),
        }
    }
}

pub fn rgb_to_hsl(rgb: [f64; 3]) -> Hsl {
    let e = Extrema::of(rgb);
    let delta = e.delta();
    let lightness = (e.max + e.min) / 2.0;
    let saturation = if delta == 0.0 {
        0.0
    } else {
        // Clamped: rounding can push the denominator just under delta.
        (delta / (1.0 - (2.0 * lightness - 1.0).abs())).min(1.0)
    };
    Hsl {
        hue: e.hue,
        saturation,
        lightness,
    }
}

pub fn hsl_to_rgb(hsl: Hsl) -> [f64; 3] {
    let Hsl {
        hue,
        saturation,
        lightness,
    } = Hsl::new(hsl.hue, hsl.saturation, hsl.lightness);

    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let m = lightness - chroma / 2.0;
    sector_rgb(hue, chroma).map(|c| c + m)
}

impl Rgba {
    pub fn hsl(&self) -> Hsl {
        rgb_to_hsl(self.normalized_rgb())
    }

    /// Build from HSL; `alpha` is in [0, 1].
    pub fn from_hsl(hsl: Hsl, alpha: f64) -> Self {
        Self::from_normalized_rgb(hsl_to_rgb(hsl), alpha)
    }
}
