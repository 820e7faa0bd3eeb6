//! RGBA ↔ hexadecimal strings.
//!
//! Accepted on parse (case-insensitive, `#` optional):
//! * `#RGB`
//! * `#RGBA`
//! * `#RRGGBB`
//! * `#RRGGBBAA`
//!
//! Formatting always emits a leading `#` and lowercase digits.

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;
use crate::rgba::{MAX_CHANNEL, Rgba};

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Parse a hex color. Alpha defaults to fully opaque when omitted.
pub fn parse_hex(input: &str) -> Result<Rgba, ColorError> {
    let invalid = || {
        tracing::debug!("rejecting malformed hex color {input:?}");
        ColorError::InvalidFormat(input.to_string())
    };

    let digits = input.strip_prefix('#').unwrap_or(input).as_bytes();
    let values = digits
        .iter()
        .map(|&c| nibble(c))
        .collect::<Option<Vec<u8>>>()
        .ok_or_else(invalid)?;

    let channels: Vec<u8> = match values.len() {
        // Shorthand: each digit is duplicated, 0xF → 0xFF.
        3 | 4 => values.iter().map(|v| v * 17).collect(),
        6 | 8 => values.chunks_exact(2).map(|p| p[0] << 4 | p[1]).collect(),
        _ => return Err(invalid()),
    };

    let alpha = channels.get(3).map_or(MAX_CHANNEL, |&a| f64::from(a));
    Ok(Rgba::new(
        f64::from(channels[0]),
        f64::from(channels[1]),
        f64::from(channels[2]),
        alpha,
    ))
}

/// Channel rounded to the nearest integer in 0–255.
fn channel_byte(value: f64) -> u8 {
    value.clamp(0.0, MAX_CHANNEL).round() as u8
}

/// `#rrggbb`.
pub fn to_hex(color: &Rgba) -> String {
    format!(
        "#{:02x}{:02x}{:02x}",
        channel_byte(color.red),
        channel_byte(color.green),
        channel_byte(color.blue)
    )
}

/// `#rrggbbaa`.
pub fn to_hex_with_alpha(color: &Rgba) -> String {
    format!("{}{:02x}", to_hex(color), channel_byte(color.alpha))
}

impl Rgba {
    pub fn from_hex(input: &str) -> Result<Self, ColorError> {
        parse_hex(input)
    }

    pub fn to_hex(&self) -> String {
        to_hex(self)
    }

    pub fn to_hex_with_alpha(&self) -> String {
        to_hex_with_alpha(self)
    }
}

impl FromStr for Rgba {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

impl fmt::Display for Rgba {
    /// `#rrggbb` for opaque colors, `#rrggbbaa` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if channel_byte(self.alpha) == u8::MAX {
            f.write_str(&to_hex(self))
        } else {
            f.write_str(&to_hex_with_alpha(self))
        }
    }
}
