//! The color engine.
//!
//! Four cooperating pieces, all communicating through plain [`Color`] and
//! [`Point`] values:
//!
//! - [`wheel`]: rasterizes the hue wheel onto a [`WheelSurface`](wheel::WheelSurface)
//! - [`sampler`]: reads a color back from the surface at a point
//! - [`codec`]: hex string <-> RGB conversion
//! - [`adjust`]: brightness scaling and contrast decisions
//!
//! # Data Flow
//!
//! ```text
//! render_wheel ──► WheelSurface ──► sample_at(point) ──► Color
//!                                                         │
//!                           hex <── rgb_to_hex <──────────┤
//!                                                         ▼
//!                                  adjust_brightness ──► contrast_decision
//! ```

pub mod adjust;
pub mod codec;
pub mod sampler;
pub mod wheel;

pub use adjust::{
    BORDER_COLOR, BORDER_LUMA_THRESHOLD, Border, Brightness, ContrastDecision, DARK_TEXT,
    LIGHT_TEXT, TEXT_LUMA_THRESHOLD, adjust_brightness, contrast_decision,
};
pub use codec::{hex_to_rgb, parse_hex, rgb_to_hex};
pub use sampler::sample_at;
pub use wheel::{WheelSurface, render_wheel};

use palette::{Hsl, IntoColor, Srgb};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

// ============================================================================
// Color
// ============================================================================

/// An opaque RGB color with 8-bit channels.
///
/// The canonical external form is a lowercase `#rrggbb` string, which is also
/// how the type serializes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from HSL components.
    ///
    /// `hue` is in degrees (any value, wrapped onto the circle), `saturation`
    /// and `lightness` are in `0.0..=1.0`.
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        let hsl: Hsl = Hsl::new(hue, saturation, lightness);
        let rgb: Srgb = hsl.into_color();
        Self::new(
            unit_to_channel(rgb.red),
            unit_to_channel(rgb.green),
            unit_to_channel(rgb.blue),
        )
    }

    /// Perceived brightness using the standard luma weights.
    ///
    /// Not gamma corrected. Ranges over `0.0..=255.0`; integer-weighted so
    /// that a gray `(v, v, v)` has a luma of exactly `v`.
    pub fn luma(&self) -> f64 {
        let weighted = u32::from(self.r) * 299 + u32::from(self.g) * 587 + u32::from(self.b) * 114;
        f64::from(weighted) / 1000.0
    }

    /// Multiplies every channel by `factor`, rounding to the nearest integer
    /// and clamping to `0..=255`.
    pub fn scaled(&self, factor: f64) -> Self {
        let scale = |c: u8| (f64::from(c) * factor).round().clamp(0.0, 255.0) as u8;
        Self::new(scale(self.r), scale(self.g), scale(self.b))
    }

    /// Returns the lowercase `#rrggbb` form.
    pub fn to_hex(&self) -> String {
        rgb_to_hex(self.r, self.g, self.b)
    }

    pub fn as_tuple(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Returns the largest per-channel difference to `other`.
    pub fn max_channel_distance(&self, other: &Self) -> u8 {
        let (a, b) = (self.as_tuple(), other.as_tuple());
        a.0.abs_diff(b.0).max(a.1.abs_diff(b.1)).max(a.2.abs_diff(b.2))
    }
}

fn unit_to_channel(v: f32) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_hex(&value)
    }
}

// ============================================================================
// Geometry
// ============================================================================

/// A position in surface-local pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Read-only geometry of a square wheel surface.
///
/// The wheel is the circle inscribed in the square. Nothing rejects points
/// outside of it; [`contains`](Self::contains) is informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelGeometry {
    pub size: u32,
}

impl WheelGeometry {
    pub fn new(size: u32) -> Self {
        Self { size }
    }

    pub fn center(&self) -> Point {
        let half = self.radius();
        Point::new(half, half)
    }

    pub fn radius(&self) -> f32 {
        self.size as f32 / 2.0
    }

    /// Returns true if `point` lies on or inside the wheel circle.
    pub fn contains(&self, point: Point) -> bool {
        point.distance_to(self.center()) <= self.radius()
    }

    /// The point at `angle_degrees` (clockwise from the positive x axis, as
    /// on screen) and `fraction` of the radius from the center.
    pub fn point_at(&self, angle_degrees: f32, fraction: f32) -> Point {
        let center = self.center();
        let distance = self.radius() * fraction;
        let theta = angle_degrees.to_radians();
        Point::new(
            center.x + distance * theta.cos(),
            center.y + distance * theta.sin(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_lowercase_hex() {
        assert_eq!(Color::new(0xAB, 0x0C, 0xFF).to_string(), "#ab0cff");
    }

    #[test]
    fn from_hsl_primaries() {
        assert_eq!(Color::from_hsl(0.0, 1.0, 0.5), Color::new(255, 0, 0));
        assert_eq!(Color::from_hsl(120.0, 1.0, 0.5), Color::new(0, 255, 0));
        assert_eq!(Color::from_hsl(240.0, 1.0, 0.5), Color::new(0, 0, 255));
        assert_eq!(Color::from_hsl(0.0, 1.0, 0.25), Color::new(128, 0, 0));
    }

    #[test]
    fn gray_luma_is_exact() {
        assert_eq!(Color::new(128, 128, 128).luma(), 128.0);
        assert_eq!(Color::new(201, 201, 201).luma(), 201.0);
        assert_eq!(Color::new(255, 0, 0).luma(), 76.245);
    }

    #[test]
    fn scaled_clamps_both_ends() {
        let c = Color::new(200, 100, 0);
        assert_eq!(c.scaled(2.0), Color::new(255, 200, 0));
        assert_eq!(c.scaled(-1.0), Color::BLACK);
        assert_eq!(c.scaled(1.0), c);
    }

    #[test]
    fn color_serializes_as_hex_string() {
        let json = serde_json::to_string(&Color::new(26, 31, 60)).unwrap();
        assert_eq!(json, "\"#1a1f3c\"");

        let back: Color = serde_json::from_str("\"#1A1F3C\"").unwrap();
        assert_eq!(back, Color::new(26, 31, 60));

        assert!(serde_json::from_str::<Color>("\"blue\"").is_err());
    }

    #[test]
    fn geometry_center_and_radius() {
        let geometry = WheelGeometry::new(300);
        assert_eq!(geometry.center(), Point::new(150.0, 150.0));
        assert_eq!(geometry.radius(), 150.0);
        assert!(geometry.contains(Point::new(150.0, 10.0)));
        assert!(!geometry.contains(Point::new(0.0, 0.0)));

        let p = geometry.point_at(0.0, 0.5);
        assert!((p.x - 225.0).abs() < 1e-4);
        assert!((p.y - 150.0).abs() < 1e-4);
    }
}
