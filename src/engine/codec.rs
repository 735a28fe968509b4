//! Hex string <-> RGB conversion.

use log::debug;

use super::Color;
use crate::error::{Error, Result};

/// Formats channels as a lowercase `#rrggbb` string.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Parses `#rrggbb` or `rrggbb`, case-insensitive.
///
/// Anything else (wrong length, non-hex characters, shorthand forms) is an
/// [`Error::InvalidColorFormat`].
pub fn parse_hex(hex: &str) -> Result<Color> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    parse_digits(digits).ok_or_else(|| Error::InvalidColorFormat(hex.to_string()))
}

/// Parses a hex color, falling back to black on malformed input.
///
/// Use [`parse_hex`] where the caller needs to tell the difference.
pub fn hex_to_rgb(hex: &str) -> Color {
    parse_hex(hex).unwrap_or_else(|e| {
        debug!("{e}; using black");
        Color::BLACK
    })
}

/// Parses strict user entry: the leading `#` is required.
pub fn parse_hex_entry(entry: &str) -> Option<Color> {
    entry.strip_prefix('#').and_then(parse_digits)
}

fn parse_digits(digits: &str) -> Option<Color> {
    // Checked up front: `from_str_radix` alone would accept a leading `+`.
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Color::new(channel(0)?, channel(2)?, channel(4)?))
}
