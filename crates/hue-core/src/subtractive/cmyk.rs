//! RGBA ↔ CMYK.
//!
//! ```text
//! k = 1 − max(r, g, b)
//! c = (1 − r − k) / (1 − k)      (c = m = y = 0 when k = 1)
//!
//! inverse: r = (1 − c) × (1 − k)
//! ```

use serde::{Deserialize, Serialize};

use crate::rgba::Rgba;

/// Cyan, magenta, yellow and key (black), each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cmyk {
    pub cyan: f64,
    pub magenta: f64,
    pub yellow: f64,
    pub key: f64,
}

impl Cmyk {
    pub fn new(cyan: f64, magenta: f64, yellow: f64, key: f64) -> Self {
        Self {
            cyan: cyan.clamp(0.0, 1.0),
            magenta: magenta.clamp(0.0, 1.0),
            yellow: yellow.clamp(0.0, 1.0),
            key: key.clamp(0.0, 1.0),
        }
    }
}

pub fn rgb_to_cmyk(rgb: [f64; 3]) -> Cmyk {
    let [r, g, b] = rgb.map(|c| c.clamp(0.0, 1.0));
    let key = 1.0 - r.max(g).max(b);
    if key == 1.0 {
        return Cmyk::new(0.0, 0.0, 0.0, 1.0);
    }

    let ink = |c: f64| (1.0 - c - key) / (1.0 - key);
    Cmyk::new(ink(r), ink(g), ink(b), key)
}

pub fn cmyk_to_rgb(cmyk: Cmyk) -> [f64; 3] {
    let Cmyk {
        cyan,
        magenta,
        yellow,
        key,
    } = Cmyk::new(cmyk.cyan, cmyk.magenta, cmyk.yellow, cmyk.key);
    [cyan, magenta, yellow].map(|ink| (1.0 - ink) * (1.0 - key))
}

impl Rgba {
    pub fn cmyk(&self) -> Cmyk {
        rgb_to_cmyk(self.normalized_rgb())
    }

    /// Build from CMYK; `alpha` is in [0, 1].
    pub fn from_cmyk(cmyk: Cmyk, alpha: f64) -> Self {
        Self::from_normalized_rgb(cmyk_to_rgb(cmyk), alpha)
    }
}
