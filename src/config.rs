//! Startup configuration for a configurator session.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::{Brightness, Color};
use crate::error::Result;
use crate::names::DEFAULT_FOOTER_COLOR;

/// Side of the square wheel surface used when none is configured.
pub const DEFAULT_WHEEL_SIZE: u32 = 300;

/// Settings supplied when a session starts.
///
/// Every field is optional in JSON:
///
/// ```json
/// { "wheelSize": 300, "brightness": 50.0, "footerColor": "#1a1f3c" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfiguratorConfig {
    /// Side of the square wheel surface in pixels.
    #[serde(default = "default_wheel_size")]
    pub wheel_size: u32,

    /// Initial slider position (0-100, 50 is neutral).
    #[serde(default = "default_brightness")]
    pub brightness: f64,

    /// Footer color before the user picks one.
    #[serde(default = "default_footer_color")]
    pub footer_color: Color,
}

fn default_wheel_size() -> u32 {
    DEFAULT_WHEEL_SIZE
}

fn default_brightness() -> f64 {
    Brightness::NEUTRAL.value()
}

fn default_footer_color() -> Color {
    DEFAULT_FOOTER_COLOR
}

impl Default for ConfiguratorConfig {
    fn default() -> Self {
        Self {
            wheel_size: default_wheel_size(),
            brightness: default_brightness(),
            footer_color: default_footer_color(),
        }
    }
}

impl ConfiguratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_wheel_size(mut self, size: u32) -> Self {
        self.wheel_size = size;
        self
    }

    pub fn with_brightness(mut self, brightness: f64) -> Self {
        self.brightness = brightness;
        self
    }

    pub fn with_footer_color(mut self, color: Color) -> Self {
        self.footer_color = color;
        self
    }

    /// Deserializes a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a JSON config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_config_uses_defaults() {
        let config = ConfiguratorConfig::from_json("{}").unwrap();
        assert_eq!(config, ConfiguratorConfig::default());
        assert_eq!(config.wheel_size, 300);
        assert_eq!(config.brightness, 50.0);
        assert_eq!(config.footer_color, DEFAULT_FOOTER_COLOR);
    }

    #[test]
    fn fields_override_defaults() {
        let config =
            ConfiguratorConfig::from_json(r##"{ "wheelSize": 200, "footerColor": "#FAF8F5" }"##)
                .unwrap();
        assert_eq!(config.wheel_size, 200);
        assert_eq!(config.brightness, 50.0);
        assert_eq!(config.footer_color, Color::new(0xfa, 0xf8, 0xf5));
    }

    #[test]
    fn bad_color_is_rejected() {
        let err = ConfiguratorConfig::from_json(r#"{ "footerColor": "red" }"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn builder_methods() {
        let config = ConfiguratorConfig::new()
            .with_wheel_size(120)
            .with_brightness(75.0)
            .with_footer_color(Color::WHITE);
        assert_eq!(config.wheel_size, 120);
        assert_eq!(config.brightness, 75.0);
        assert_eq!(config.footer_color, Color::WHITE);
    }
}
