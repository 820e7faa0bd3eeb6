//! Hue Core — color-model conversion engine.
//!
//! Pure conversions between RGBA and YPbPr/YCbCr, hexadecimal, HSB/HSV,
//! HSL, CMYK, RYB, CIE XYZ and CIE LAB, plus weighted mixing and luma under
//! the BT.601 and BT.709 coefficient sets. [`Rgba`] is the hub; every other
//! representation converts to and from it. No UI framework dependencies.

pub mod coefficients;
pub mod config;
pub mod convert;
pub mod cylindrical;
pub mod error;
pub mod linear;
pub mod mixing;
pub mod model;
pub mod rgba;
pub mod subtractive;
pub mod tristimulus;

// Re-exports for convenience.
pub use coefficients::{SignalEncoding, WhitePoint};
pub use config::ConversionConfig;
pub use convert::convert;
pub use cylindrical::{Hsb, Hsl, Hsv};
pub use error::ColorError;
pub use linear::{YCbCr, YPbPr, parse_hex};
pub use mixing::{DEFAULT_MIX_WEIGHT, mix};
pub use model::Model;
pub use rgba::Rgba;
pub use subtractive::{Cmyk, Ryb};
pub use tristimulus::{Lab, Tristimulus};
