//! Weighted linear interpolation between two colors.
//!
//! ```text
//! w   = clamp(weight, 0, 1)
//! out = clamp(a + (b − a) × w, 0, 255)      for each of R, G, B, A
//! ```

use crate::rgba::Rgba;

/// Weight used when none is given: an even blend.
pub const DEFAULT_MIX_WEIGHT: f64 = 0.5;

/// Interpolate each channel of `a` toward `b`.
///
/// `weight = 0` returns `a`, `weight = 1` returns `b`. Weights outside
/// [0, 1] are pulled to the nearest bound rather than rejected.
pub fn mix(a: Rgba, b: Rgba, weight: f64) -> Rgba {
    let w = weight.clamp(0.0, 1.0);
    if w != weight {
        tracing::trace!("mix weight {weight} clamped to {w}");
    }

    let lerp = |from: f64, to: f64| {
        // Evaluated from the nearer end so both endpoints are exact.
        if w < 0.5 {
            from + (to - from) * w
        } else {
            to - (to - from) * (1.0 - w)
        }
    };
    Rgba::new(
        lerp(a.red, b.red),
        lerp(a.green, b.green),
        lerp(a.blue, b.blue),
        lerp(a.alpha, b.alpha),
    )
}

impl Rgba {
    /// Blend toward `other` by `weight` in [0, 1].
    pub fn mix(&self, other: &Rgba, weight: f64) -> Rgba {
        mix(*self, *other, weight)
    }

    /// Even blend with `other` ([`DEFAULT_MIX_WEIGHT`]).
    pub fn mixed(&self, other: &Rgba) -> Rgba {
        mix(*self, *other, DEFAULT_MIX_WEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn red() -> Rgba {
        Rgba::opaque(255.0, 0.0, 0.0)
    }

    fn translucent_blue() -> Rgba {
        Rgba::new(0.0, 0.0, 255.0, 0.0)
    }

    #[test]
    fn test_mix_endpoints_return_inputs() {
        assert_eq!(mix(red(), translucent_blue(), 0.0), red());
        assert_eq!(mix(red(), translucent_blue(), 1.0), translucent_blue());
    }

    #[test]
    fn test_mixed_uses_even_weight() {
        let out = red().mixed(&translucent_blue());
        assert!((out.red - 127.5).abs() < EPSILON);
        assert!((out.blue - 127.5).abs() < EPSILON);
        assert!((out.alpha - 127.5).abs() < EPSILON);
        assert_eq!(out.green, 0.0);
    }

    #[test]
    fn test_mix_clamps_weight() {
        assert_eq!(mix(red(), translucent_blue(), -3.0), red());
        assert_eq!(mix(red(), translucent_blue(), 7.5), translucent_blue());
    }

    #[test]
    fn test_mix_interpolates_alpha_independently() {
        let a = Rgba::new(100.0, 100.0, 100.0, 255.0);
        let b = Rgba::new(100.0, 100.0, 100.0, 55.0);
        let out = a.mix(&b, 0.25);
        assert_eq!(out.red, 100.0);
        assert!((out.alpha - 205.0).abs() < EPSILON);
    }

    #[test]
    fn test_mix_is_monotonic_per_channel() {
        let a = Rgba::new(10.0, 240.0, 128.0, 255.0);
        let b = Rgba::new(250.0, 5.0, 128.0, 0.0);
        let mut prev = a;
        for step in 1..=20 {
            let out = mix(a, b, step as f64 / 20.0);
            assert!(out.red >= prev.red);
            assert!(out.green <= prev.green);
            assert_eq!(out.blue, 128.0);
            assert!(out.alpha <= prev.alpha);
            prev = out;
        }
    }
}
