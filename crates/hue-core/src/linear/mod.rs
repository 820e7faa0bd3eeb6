//! Linear conversions — luma/chroma encodings and hexadecimal strings.

pub mod hex;
pub mod ypbpr;

pub use hex::{parse_hex, to_hex, to_hex_with_alpha};
pub use ypbpr::{YCbCr, YPbPr};
