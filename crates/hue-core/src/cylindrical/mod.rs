//! Cylindrical conversions — HSB/HSV and HSL.
//!
//! Both models share the same hue: the angle of the dominant channel around
//! the RGB hexcone, split into six 60° sectors.
//!
//! ```text
//! max = r → hue = 60 × (g − b) / Δ        (+360 when negative)
//! max = g → hue = 60 × ((b − r) / Δ + 2)
//! max = b → hue = 60 × ((r − g) / Δ + 4)
//! Δ   = 0 → hue = 0
//! ```

pub mod hsb;
pub mod hsl;

pub use hsb::{Hsb, Hsv};
pub use hsl::Hsl;

/// Extent of the hue circle in degrees.
pub const HUE_CIRCLE: f64 = 360.0;

/// Max, min and hue of a normalized RGB triplet.
pub(crate) struct Extrema {
    pub max: f64,
    pub min: f64,
    pub hue: f64,
}

impl Extrema {
    pub fn of(rgb: [f64; 3]) -> Self {
        let [r, g, b] = rgb;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        // Achromatic: hue is defined as 0.
        let hue = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * ((g - b) / delta)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };

        Self {
            max,
            min,
            hue: wrap_hue(hue),
        }
    }

    pub fn delta(&self) -> f64 {
        self.max - self.min
    }
}

/// Wrap any angle into [0, 360).
pub fn wrap_hue(degrees: f64) -> f64 {
    let h = degrees.rem_euclid(HUE_CIRCLE);
    // rem_euclid rounds tiny negative angles up to exactly 360.
    if h >= HUE_CIRCLE { 0.0 } else { h }
}

/// Pure-hue RGB with the given chroma, before the lightness offset is added.
pub(crate) fn sector_rgb(hue: f64, chroma: f64) -> [f64; 3] {
    let h = wrap_hue(hue) / 60.0;
    let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
    match h as u32 {
        0 => [chroma, x, 0.0],
        1 => [x, chroma, 0.0],
        2 => [0.0, chroma, x],
        3 => [0.0, x, chroma],
        4 => [x, 0.0, chroma],
        _ => [chroma, 0.0, x],
    }
}
