//! The RGBA hub representation.
//!
//! Every other model converts to and from [`Rgba`]. Channels are stored in
//! the 0–255 range; the conversion math works on channels normalized to
//! [0, 1].

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::coefficients::SignalEncoding;
use crate::error::ColorError;
use crate::model::Model;

/// Upper bound of every RGBA channel.
pub const MAX_CHANNEL: f64 = 255.0;

/// The red, green, blue and alpha components of a color, each in [0, 255].
///
/// `#[repr(C)]` and [`Pod`], so a `&[Rgba]` can be viewed as a flat `&[f64]`
/// buffer of `[r, g, b, a]` quadruples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct Rgba {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Rgba {
    /// Build a color, clamping every channel to [0, 255].
    pub fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
        .clamped()
    }

    /// Fully opaque color.
    pub fn opaque(red: f64, green: f64, blue: f64) -> Self {
        Self::new(red, green, blue, MAX_CHANNEL)
    }

    /// Build from `[r, g, b]` normalized to [0, 1] and an alpha in [0, 1].
    pub fn from_normalized_rgb(rgb: [f64; 3], alpha: f64) -> Self {
        Self::new(
            rgb[0] * MAX_CHANNEL,
            rgb[1] * MAX_CHANNEL,
            rgb[2] * MAX_CHANNEL,
            alpha * MAX_CHANNEL,
        )
    }

    /// Build from `[r, g, b, a]` normalized to [0, 1].
    pub fn from_normalized(rgba: [f64; 4]) -> Self {
        Self::from_normalized_rgb([rgba[0], rgba[1], rgba[2]], rgba[3])
    }

    /// Copy with every channel pulled into [0, 255].
    pub fn clamped(self) -> Self {
        Self {
            red: self.red.clamp(0.0, MAX_CHANNEL),
            green: self.green.clamp(0.0, MAX_CHANNEL),
            blue: self.blue.clamp(0.0, MAX_CHANNEL),
            alpha: self.alpha.clamp(0.0, MAX_CHANNEL),
        }
    }

    /// `[r, g, b]` normalized to [0, 1].
    pub fn normalized_rgb(&self) -> [f64; 3] {
        [
            self.red / MAX_CHANNEL,
            self.green / MAX_CHANNEL,
            self.blue / MAX_CHANNEL,
        ]
    }

    /// `[r, g, b, a]` normalized to [0, 1].
    pub fn normalized(&self) -> [f64; 4] {
        let [r, g, b] = self.normalized_rgb();
        [r, g, b, self.normalized_alpha()]
    }

    pub fn normalized_alpha(&self) -> f64 {
        self.alpha / MAX_CHANNEL
    }

    /// Relative luma in [0, 1] under the given encoding's weights.
    pub fn luminance(&self, encoding: SignalEncoding) -> f64 {
        encoding.luma(self.normalized_rgb())
    }

    /// Round every channel to the nearest integer.
    pub fn rounded(self) -> Self {
        Self {
            red: self.red.round(),
            green: self.green.round(),
            blue: self.blue.round(),
            alpha: self.alpha.round(),
        }
    }

    /// View a slice of colors as flat `[r, g, b, a, r, g, b, a, …]` components.
    pub fn slice_as_components(colors: &[Rgba]) -> &[f64] {
        bytemuck::cast_slice(colors)
    }

    /// View flat `[r, g, b, a, …]` components as colors. Channels are not
    /// clamped.
    pub fn slice_from_components(components: &[f64]) -> Result<&[Rgba], ColorError> {
        bytemuck::try_cast_slice(components).map_err(|_| ColorError::ComponentCount {
            model: Model::Rgb,
            expected: 4 * components.len().div_ceil(4),
            found: components.len(),
        })
    }
}

impl Default for Rgba {
    /// Opaque black.
    fn default() -> Self {
        Self::opaque(0.0, 0.0, 0.0)
    }
}

impl From<Rgba> for [f64; 4] {
    fn from(color: Rgba) -> Self {
        bytemuck::cast(color)
    }
}

impl From<[f64; 4]> for Rgba {
    /// `[r, g, b, a]` in the 0–255 range, clamped.
    fn from(c: [f64; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}
