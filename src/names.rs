//! Named footer colors.
//!
//! The nine named colors double as the preset swatches offered next to the
//! wheel. Lookup is by hex, case-insensitive; everything else is "Custom".

use crate::engine::{Color, parse_hex};

/// A color with a display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedColor {
    pub hex: &'static str,
    pub name: &'static str,
}

impl NamedColor {
    const fn new(hex: &'static str, name: &'static str) -> Self {
        Self { hex, name }
    }

    /// The decoded color. The table only holds valid hex, so this never falls
    /// back.
    pub fn color(&self) -> Color {
        parse_hex(self.hex).unwrap_or_default()
    }
}

/// Known footer colors, in preset order.
pub static NAMED_COLORS: [NamedColor; 9] = [
    NamedColor::new("#1a1f3c", "Dark Blue"),
    NamedColor::new("#2a3158", "Blue Light"),
    NamedColor::new("#0d1020", "Navy"),
    NamedColor::new("#3d4470", "Slate Blue"),
    NamedColor::new("#f5f0e8", "Beige"),
    NamedColor::new("#e8e0d0", "Beige Dark"),
    NamedColor::new("#d4c9b8", "Warm Taupe"),
    NamedColor::new("#ffffff", "White"),
    NamedColor::new("#faf8f5", "Off White"),
];

/// Name reported for colors outside the table.
pub const CUSTOM_COLOR_NAME: &str = "Custom";

/// The footer color a fresh session starts with.
pub const DEFAULT_FOOTER_COLOR: Color = Color::new(0x1a, 0x1f, 0x3c);

/// Looks up the display name for a hex string.
pub fn color_name(hex: &str) -> &'static str {
    NAMED_COLORS
        .iter()
        .find(|named| named.hex.eq_ignore_ascii_case(hex))
        .map_or(CUSTOM_COLOR_NAME, |named| named.name)
}

/// Finds the preset matching `color`, if any.
pub fn preset_for(color: Color) -> Option<&'static NamedColor> {
    NAMED_COLORS.iter().find(|named| named.color() == color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(color_name("#faf8f5"), "Off White");
        assert_eq!(color_name("#FAF8F5"), "Off White");
        assert_eq!(color_name("#1A1f3C"), "Dark Blue");
    }

    #[test]
    fn unknown_colors_are_custom() {
        assert_eq!(color_name("#ff0000"), "Custom");
        assert_eq!(color_name("faf8f5"), "Custom");
        assert_eq!(color_name(""), "Custom");
    }

    #[test]
    fn every_entry_decodes() {
        for named in NAMED_COLORS.iter() {
            assert_eq!(named.color().to_hex(), named.hex);
            assert_eq!(color_name(named.hex), named.name);
        }
    }

    #[test]
    fn default_footer_is_dark_blue() {
        assert_eq!(preset_for(DEFAULT_FOOTER_COLOR).unwrap().name, "Dark Blue");
        assert!(preset_for(Color::new(1, 2, 3)).is_none());
    }
}
