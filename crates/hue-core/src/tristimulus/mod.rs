//! Perceptual conversions — sRGB transfer, CIE XYZ and CIE LAB.
//!
//! Only the final RGB of an inverse conversion is clamped. Out-of-gamut XYZ
//! or LAB values pass through the intermediate stages untouched.

pub mod lab;
pub mod transfer;
pub mod xyz;

pub use lab::Lab;
pub use transfer::{LinearTransfer, SrgbTransfer, TransferFunction};
pub use xyz::Tristimulus;
