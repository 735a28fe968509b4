//! Configurator session: input events in, engine calls and state updates out.

use chrono::{DateTime, Utc};
use log::{debug, trace};

use crate::config::ConfiguratorConfig;
use crate::engine::codec::parse_hex_entry;
use crate::engine::{
    Border, Brightness, Color, ContrastDecision, Point, WheelSurface, contrast_decision,
    hex_to_rgb, parse_hex, render_wheel, sample_at,
};
use crate::error::Result;
use crate::export::SelectionExport;
use crate::names::{NamedColor, preset_for};
use crate::selection::{IconChoice, Selections};
use crate::summary::Summary;

// ============================================================================
// Display State
// ============================================================================

/// The marker drawn where the wheel was last sampled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerMarker {
    pub position: Point,
    /// The raw sampled color, before brightness is applied.
    pub color: Color,
}

/// How the footer preview is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterPreview {
    pub background: Color,
    pub text_color: Color,
    pub border: Option<Border>,
}

impl FooterPreview {
    pub fn for_color(background: Color) -> Self {
        let ContrastDecision { text_color, border } = contrast_decision(background);
        Self {
            background,
            text_color,
            border,
        }
    }

    /// The border as a CSS value, `none` when absent.
    pub fn border_css(&self) -> String {
        ContrastDecision {
            text_color: self.text_color,
            border: self.border,
        }
        .border_css()
    }
}

// ============================================================================
// Configurator
// ============================================================================

/// One user's configurator session.
///
/// Owns the rendered wheel, the brightness slider and the [`Selections`].
/// Each handler corresponds to one kind of input event and runs to
/// completion; the engine functions it calls are pure.
///
/// # Example
///
/// ```
/// use moire_configurator::{Configurator, ConfiguratorConfig, Point};
///
/// let mut session = Configurator::new(ConfiguratorConfig::new().with_wheel_size(100))?;
/// session.select_heading_font("Playfair Display");
/// let picked = session.wheel_click(Point::new(75.0, 50.0));
/// assert_eq!(session.footer().background, picked);
/// # Ok::<(), moire_configurator::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Configurator {
    wheel: WheelSurface,
    brightness: Brightness,
    selections: Selections,
    pointer: Option<PointerMarker>,
    preset: Option<&'static NamedColor>,
    footer: FooterPreview,
}

impl Configurator {
    /// Starts a session, rendering the wheel once.
    pub fn new(config: ConfiguratorConfig) -> Result<Self> {
        let wheel = render_wheel(config.wheel_size)?;
        let selections = Selections::with_footer_color(config.footer_color);

        Ok(Self {
            wheel,
            brightness: Brightness::new(config.brightness),
            pointer: None,
            preset: preset_for(config.footer_color),
            footer: FooterPreview::for_color(config.footer_color),
            selections,
        })
    }

    pub fn wheel(&self) -> &WheelSurface {
        &self.wheel
    }

    /// Re-renders the wheel for a new surface size.
    ///
    /// Returns true if the wheel was re-rendered; the same size is a no-op.
    /// The pointer marker is dropped since its position no longer applies.
    pub fn resize_wheel(&mut self, size: u32) -> Result<bool> {
        if size == self.wheel.size() {
            return Ok(false);
        }
        self.wheel = render_wheel(size)?;
        self.pointer = None;
        Ok(true)
    }

    // ---- Wheel ----

    /// Handles a click on the wheel.
    ///
    /// Samples the wheel at `point`, moves the pointer marker there, applies
    /// the current brightness and makes the result the footer color. Returns
    /// the adjusted color.
    pub fn wheel_click(&mut self, point: Point) -> Color {
        let sampled = sample_at(&self.wheel, point);
        self.pointer = Some(PointerMarker {
            position: point,
            color: sampled,
        });

        let adjusted = self.brightness.apply(sampled);
        trace!("wheel {sampled} at brightness {} -> {adjusted}", self.brightness.value());

        self.preset = None;
        self.apply_footer_color(adjusted);
        adjusted
    }

    /// Handles pointer movement over the wheel.
    ///
    /// Only samples while the primary button is held; every such event runs
    /// the full click pipeline.
    pub fn wheel_drag(&mut self, point: Point, primary_pressed: bool) -> Option<Color> {
        primary_pressed.then(|| self.wheel_click(point))
    }

    pub fn pointer(&self) -> Option<PointerMarker> {
        self.pointer
    }

    // ---- Brightness ----

    /// Moves the brightness slider. Takes effect on the next wheel sample.
    pub fn set_brightness(&mut self, value: f64) {
        self.brightness = Brightness::new(value);
    }

    pub fn brightness(&self) -> Brightness {
        self.brightness
    }

    // ---- Footer color ----

    /// Selects a preset swatch by its hex value.
    pub fn select_preset(&mut self, hex: &str) -> Result<Color> {
        let color = parse_hex(hex)?;
        self.preset = preset_for(color);
        self.apply_footer_color(color);
        Ok(color)
    }

    /// Applies a value from the native color input.
    ///
    /// The input always produces `#rrggbb`; anything else decodes as black.
    pub fn update_custom_color(&mut self, hex: &str) -> Color {
        let color = hex_to_rgb(hex);
        self.preset = None;
        self.apply_footer_color(color);
        color
    }

    /// Applies typed hex entry if it is a complete `#rrggbb` value.
    ///
    /// Partial or malformed entry is ignored and returns `None`.
    pub fn update_from_hex(&mut self, entry: &str) -> Option<Color> {
        let Some(color) = parse_hex_entry(entry) else {
            debug!("ignoring incomplete hex entry {entry:?}");
            return None;
        };
        self.preset = None;
        self.apply_footer_color(color);
        Some(color)
    }

    /// The currently highlighted preset, if the footer color came from one.
    pub fn selected_preset(&self) -> Option<&'static NamedColor> {
        self.preset
    }

    pub fn footer(&self) -> FooterPreview {
        self.footer
    }

    fn apply_footer_color(&mut self, color: Color) {
        self.footer = FooterPreview::for_color(color);
        self.selections.set_footer_color(color);
    }

    // ---- Icons and fonts ----

    pub fn select_icon(
        &mut self,
        category: impl Into<String>,
        name: impl Into<String>,
        svg: impl Into<String>,
    ) {
        self.selections.select_icon(category, IconChoice::new(name, svg));
    }

    pub fn select_heading_font(&mut self, font: impl Into<String>) {
        self.selections.set_heading_font(font);
    }

    pub fn select_body_font(&mut self, font: impl Into<String>) {
        self.selections.set_body_font(font);
    }

    // ---- Output ----

    pub fn selections(&self) -> &Selections {
        &self.selections
    }

    pub fn summary(&self) -> Summary {
        Summary::from_selections(&self.selections)
    }

    /// Exports the selections stamped with the current time.
    pub fn export(&self) -> SelectionExport {
        SelectionExport::now(&self.selections)
    }

    pub fn export_at(&self, at: DateTime<Utc>) -> SelectionExport {
        SelectionExport::from_selections(&self.selections, at)
    }
}

// ============================================================================
// Tests
// ============================================================================
