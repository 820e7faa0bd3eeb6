//! Color model tags.
//!
//! [`Model`] names the representations the engine can produce. It is
//! descriptive metadata used to pick a conversion at runtime (see
//! [`crate::convert::convert`]); each model carries its values in its own
//! concrete type, never in this enum.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An abstract mathematical model describing how colors are represented as
/// tuples of numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Model {
    /// RGB written as hexadecimal digits, e.g. `#0080ff`.
    Hex,
    /// Additive red, green, blue. The hub every conversion routes through.
    Rgb,
    /// Red, yellow, blue: the traditional artist's color wheel.
    Ryb,
    /// Cyan, magenta, yellow, key (black): subtractive print model.
    Cmyk,
    /// Hue, saturation, brightness. Same model as [`Model::Hsv`].
    Hsb,
    /// Hue, saturation, value. Same model as [`Model::Hsb`].
    Hsv,
    /// Hue, saturation, lightness. Fully saturated colors sit at lightness ½.
    Hsl,
    /// Analog luma and color-difference components.
    YPbPr,
    /// Digital (8-bit studio swing) luma and color-difference components.
    YCbCr,
    /// CIE 1931 tristimulus values.
    CieXyz,
    /// CIE L*a*b*, designed to be perceptually uniform.
    CieLab,
}

impl Model {
    /// Human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Hex => "Hex",
            Self::Rgb => "RGB",
            Self::Ryb => "RYB",
            Self::Cmyk => "CMYK",
            Self::Hsb => "HSB",
            Self::Hsv => "HSV",
            Self::Hsl => "HSL",
            Self::YPbPr => "YPbPr",
            Self::YCbCr => "YCbCr",
            Self::CieXyz => "CIE XYZ",
            Self::CieLab => "CIE LAB",
        }
    }

    /// Number of numeric components in the model's tuple, not counting alpha.
    ///
    /// Hex is a string form and has no numeric tuple.
    pub const fn component_count(&self) -> Option<usize> {
        match self {
            Self::Hex => None,
            Self::Cmyk => Some(4),
            _ => Some(3),
        }
    }

    pub fn all() -> &'static [Self] {
        const ALL: [Model; 11] = [
            Model::Hex,
            Model::Rgb,
            Model::Ryb,
            Model::Cmyk,
            Model::Hsb,
            Model::Hsv,
            Model::Hsl,
            Model::YPbPr,
            Model::YCbCr,
            Model::CieXyz,
            Model::CieLab,
        ];
        &ALL
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
