//! Subtractive conversions — CMYK print inks and the RYB painter's model.

pub mod cmyk;
pub mod ryb;

pub use cmyk::Cmyk;
pub use ryb::Ryb;
