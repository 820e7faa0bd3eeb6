//! RGBA ↔ HSB (a.k.a. HSV).
//!
//! ```text
//! brightness = max
//! saturation = Δ / max          (0 when max = 0)
//!
//! inverse: C = brightness × saturation
//!          rgb = sector(hue, C) + (brightness − C)
//! ```

use serde::{Deserialize, Serialize};

use super::{Extrema, sector_rgb, wrap_hue};
use crate::rgba::Rgba;

/// Hue in degrees [0, 360), saturation and brightness in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsb {
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
}

/// HSV is the same model as HSB; `brightness` holds the value.
pub type Hsv = Hsb;

impl Hsb {
    pub fn new(hue: f64, saturation: f64, brightness: f64) -> Self {
        Self {
            hue: wrap_hue(hue),
            saturation: saturation.clamp(0.0, 1.0),
            brightness: brightness.clamp(0.0, 1.0),
        }
    }

    /// The HSV name for [`Hsb::brightness`].
    pub fn value(&self) -> f64 {
        self.brightness
    }
}

pub fn rgb_to_hsb(rgb: [f64; 3]) -> Hsb {
    let e = Extrema::of(rgb);
    let saturation = if e.max == 0.0 { 0.0 } else { e.delta() / e.max };
    Hsb {
        hue: e.hue,
        saturation,
        brightness: e.max,
    }
}

pub fn hsb_to_rgb(hsb: Hsb) -> [f64; 3] {
    let Hsb {
        hue,
        saturation,
        brightness,
    } = Hsb::new(hsb.hue, hsb.saturation, hsb.brightness);

    let chroma = brightness * saturation;
    let m = brightness - chroma;
    sector_rgb(hue, chroma).map(|c| c + m)
}

impl Rgba {
    pub fn hsb(&self) -> Hsb {
        rgb_to_hsb(self.normalized_rgb())
    }

    pub fn hsv(&self) -> Hsv {
        self.hsb()
    }

    /// Build from HSB; `alpha` is in [0, 1].
    pub fn from_hsb(hsb: Hsb, alpha: f64) -> Self {
        Self::from_normalized_rgb(hsb_to_rgb(hsb), alpha)
    }

    pub fn from_hsv(hsv: Hsv, alpha: f64) -> Self {
        Self::from_hsb(hsv, alpha)
    }
}
