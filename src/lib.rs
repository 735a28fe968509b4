//! moire-configurator: footer color, icon and font configurator
//!
//! This crate provides the color engine behind a visual configurator (a
//! rasterized hue wheel, pointer sampling, hex codec, brightness and contrast
//! decisions) together with the session state, live summary and JSON export
//! built on top of it.
//!
//! # Example
//!
//! ```
//! use moire_configurator::{adjust_brightness, contrast_decision, hex_to_rgb, rgb_to_hex, DARK_TEXT};
//!
//! assert_eq!(rgb_to_hex(255, 0, 0), "#ff0000");
//! assert_eq!(adjust_brightness("#402010", 100.0), "#804020");
//!
//! let decision = contrast_decision(hex_to_rgb("#faf8f5"));
//! assert_eq!(decision.text_color, DARK_TEXT);
//! assert_eq!(decision.border_css(), "1px solid #e8e0d0");
//! ```
//!
//! # Sampling the Wheel
//!
//! ```
//! use moire_configurator::{render_wheel, sample_at, Color};
//!
//! let wheel = render_wheel(300)?;
//! let red = sample_at(&wheel, wheel.geometry().point_at(0.0, 0.5));
//! assert!(red.max_channel_distance(&Color::new(255, 0, 0)) <= 12);
//! # Ok::<(), moire_configurator::Error>(())
//! ```
//!
//! # Sessions and Export
//!
//! [`Configurator`] owns one user's selections and turns input events into
//! engine calls:
//!
//! ```
//! use moire_configurator::{Configurator, ConfiguratorConfig};
//!
//! let mut session = Configurator::new(ConfiguratorConfig::default())?;
//! session.select_icon("social-media", "Globe", "<svg/>");
//! session.select_body_font("Inter");
//! session.select_preset("#faf8f5")?;
//!
//! let json = session.export().to_json_pretty()?;
//! assert!(json.contains("\"name\": \"Off White\""));
//! # Ok::<(), moire_configurator::Error>(())
//! ```

mod config;
mod engine;
mod error;
mod export;
mod names;
mod selection;
mod session;
mod summary;

#[cfg(feature = "canvas")]
mod canvas;

#[cfg(feature = "canvas")]
pub use canvas::CanvasConfigurator;
pub use config::{ConfiguratorConfig, DEFAULT_WHEEL_SIZE};
pub use engine::codec::parse_hex_entry;
pub use engine::{
    BORDER_COLOR, BORDER_LUMA_THRESHOLD, Border, Brightness, Color, ContrastDecision, DARK_TEXT,
    LIGHT_TEXT, Point, TEXT_LUMA_THRESHOLD, WheelGeometry, WheelSurface, adjust_brightness,
    contrast_decision, hex_to_rgb, parse_hex, render_wheel, rgb_to_hex, sample_at,
};
pub use error::{Error, Result};
pub use export::{EXPORT_FILE_NAME, ExportedIcon, FooterColor, SelectionExport, Typography};
pub use names::{
    CUSTOM_COLOR_NAME, DEFAULT_FOOTER_COLOR, NAMED_COLORS, NamedColor, color_name, preset_for,
};
pub use selection::{IconChoice, Selections, category_title};
pub use session::{Configurator, FooterPreview, PointerMarker};
pub use summary::{IconSummary, NOT_SELECTED, Summary};
