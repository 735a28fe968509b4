//! Brightness scaling and contrast decisions.

use std::fmt;

use super::Color;
use super::codec::hex_to_rgb;

// ============================================================================
// Brightness
// ============================================================================

/// A slider-style brightness value.
///
/// The slider runs over `0..=100` with 50 as neutral; the applied factor is
/// `value / 50`. Out-of-range values are not rejected, the channel clamp in
/// [`Color::scaled`] keeps every result valid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brightness(f64);

impl Brightness {
    pub const NEUTRAL: Self = Self(50.0);
    pub const MAX: Self = Self(100.0);

    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn factor(&self) -> f64 {
        self.0 / Self::NEUTRAL.0
    }

    pub fn apply(&self, color: Color) -> Color {
        color.scaled(self.factor())
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Scales a hex color by a slider brightness value and re-encodes it.
///
/// Malformed input decodes as black, so the result is always a valid hex.
pub fn adjust_brightness(hex: &str, brightness: f64) -> String {
    Brightness::new(brightness).apply(hex_to_rgb(hex)).to_hex()
}

// ============================================================================
// Contrast
// ============================================================================

/// Text color used on bright backgrounds.
pub const DARK_TEXT: Color = Color::new(0x1a, 0x1f, 0x3c);
/// Text color used on dark backgrounds.
pub const LIGHT_TEXT: Color = Color::WHITE;
/// Border color drawn around very bright backgrounds.
pub const BORDER_COLOR: Color = Color::new(0xe8, 0xe0, 0xd0);

/// Luma above which text switches to [`DARK_TEXT`].
pub const TEXT_LUMA_THRESHOLD: f64 = 128.0;
/// Luma above which a border is drawn.
pub const BORDER_LUMA_THRESHOLD: f64 = 200.0;

/// A solid border around a preview surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Border {
    pub width_px: u32,
    pub color: Color,
}

impl Default for Border {
    fn default() -> Self {
        Self {
            width_px: 1,
            color: BORDER_COLOR,
        }
    }
}

impl fmt::Display for Border {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px solid {}", self.width_px, self.color)
    }
}

/// Foreground treatment for text drawn on a colored background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContrastDecision {
    pub text_color: Color,
    pub border: Option<Border>,
}

impl ContrastDecision {
    /// The border as a CSS value, `none` when absent.
    pub fn border_css(&self) -> String {
        self.border
            .map_or_else(|| "none".to_string(), |border| border.to_string())
    }
}

/// Picks text color and border for `background`.
///
/// The two thresholds are evaluated independently on the same luma.
pub fn contrast_decision(background: Color) -> ContrastDecision {
    let luma = background.luma();

    let text_color = if luma > TEXT_LUMA_THRESHOLD {
        DARK_TEXT
    } else {
        LIGHT_TEXT
    };
    let border = (luma > BORDER_LUMA_THRESHOLD).then(Border::default);

    ContrastDecision { text_color, border }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(v: u8) -> Color {
        Color::new(v, v, v)
    }

    #[test]
    fn neutral_brightness_is_identity() {
        for hex in ["#1a1f3c", "#FAF8F5", "#ff0000", "#010203", "#ffffff", "#000000"] {
            assert_eq!(adjust_brightness(hex, 50.0), hex.to_lowercase());
        }
    }

    #[test]
    fn brightness_scales_and_rounds() {
        // 0x1a * 1.5 = 39, 0x1f * 1.5 = 46.5 -> 47, 0x3c * 1.5 = 90
        assert_eq!(adjust_brightness("#1a1f3c", 75.0), "#272f5a");
        assert_eq!(adjust_brightness("#808080", 25.0), "#404040");
        assert_eq!(adjust_brightness("#123456", 0.0), "#000000");
    }

    #[test]
    fn half_way_products_round_up() {
        // 225 * 0.26 = 58.5, 75 * 0.42 = 31.5, 25 * 0.58 = 14.5, 45 * 0.7 = 31.5
        assert_eq!(adjust_brightness("#e10000", 13.0), "#3b0000");
        assert_eq!(adjust_brightness("#4b0000", 21.0), "#200000");
        assert_eq!(adjust_brightness("#190000", 29.0), "#0f0000");
        assert_eq!(adjust_brightness("#2d0000", 35.0), "#200000");
        assert_eq!(Brightness::new(13.0).apply(Color::new(225, 75, 45)), Color::new(59, 20, 12));
    }

    #[test]
    fn brightness_never_leaves_channel_range() {
        let samples = [
            Color::new(255, 255, 255),
            Color::new(255, 0, 128),
            Color::new(1, 2, 3),
            Color::new(200, 150, 100),
        ];
        for color in samples {
            for value in [0.0, 1.0, 49.5, 50.0, 99.0, 100.0, 250.0, 1000.0] {
                let adjusted = hex_to_rgb(&adjust_brightness(&color.to_hex(), value));
                assert_eq!(adjusted, Brightness::new(value).apply(color));
            }
        }
        assert_eq!(adjust_brightness("#ffffff", 100.0), "#ffffff");
        assert_eq!(adjust_brightness("#800000", 1000.0), "#ff0000");
    }

    #[test]
    fn negative_brightness_clamps_to_black() {
        assert_eq!(adjust_brightness("#ffffff", -20.0), "#000000");
    }

    #[test]
    fn malformed_hex_adjusts_as_black() {
        assert_eq!(adjust_brightness("nope", 100.0), "#000000");
    }

    #[test]
    fn text_threshold_at_128() {
        assert_eq!(contrast_decision(gray(128)).text_color, LIGHT_TEXT);
        assert_eq!(contrast_decision(gray(129)).text_color, DARK_TEXT);
    }

    #[test]
    fn border_threshold_at_200() {
        assert_eq!(contrast_decision(gray(200)).border, None);
        assert_eq!(contrast_decision(gray(201)).border, Some(Border::default()));
    }

    #[test]
    fn thresholds_are_independent() {
        let mid = contrast_decision(gray(150));
        assert_eq!(mid.text_color, DARK_TEXT);
        assert!(mid.border.is_none());
        assert_eq!(mid.border_css(), "none");
    }

    #[test]
    fn pure_red_gets_white_text_and_no_border() {
        let decision = contrast_decision(hex_to_rgb("#ff0000"));
        assert_eq!(decision.text_color, Color::WHITE);
        assert!(decision.border.is_none());
    }

    #[test]
    fn off_white_gets_dark_text_and_border() {
        let decision = contrast_decision(hex_to_rgb("#faf8f5"));
        assert_eq!(decision.text_color, DARK_TEXT);
        assert_eq!(decision.border_css(), "1px solid #e8e0d0");
    }
}
