//! HTML Canvas adapter for WASM environments.
//!
//! This module provides [`CanvasConfigurator`], a wrapper around
//! [`Configurator`] that paints the hue wheel into an HTML canvas element and
//! forwards pointer, slider and selection events from the page.
//!
//! # Feature Flag
//!
//! This module is only available with the `canvas` feature enabled:
//!
//! ```toml
//! [dependencies]
//! moire-configurator = { version = "0.1", features = ["canvas"] }
//! ```
//!
//! # Example (JavaScript/TypeScript)
//!
//! ```javascript
//! import init, { CanvasConfigurator } from 'moire-configurator';
//!
//! await init();
//!
//! const canvas = document.getElementById('colorWheel');
//! const configurator = new CanvasConfigurator(canvas.width);
//! configurator.renderWheel(canvas);
//!
//! canvas.addEventListener('mousemove', (e) => {
//!     const rect = canvas.getBoundingClientRect();
//!     const hex = configurator.wheelDrag(e.clientX - rect.left, e.clientY - rect.top, e.buttons === 1);
//!     if (hex) footer.style.backgroundColor = hex;
//! });
//!
//! const json = configurator.exportJson();
//! ```

use wasm_bindgen::Clamped;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};

use crate::config::ConfiguratorConfig;
use crate::engine::Point;
use crate::session::Configurator;

// ============================================================================
// CanvasConfigurator
// ============================================================================

/// A [`Configurator`] exposed to JavaScript.
///
/// Colors cross the boundary as lowercase `#rrggbb` strings.
#[wasm_bindgen]
pub struct CanvasConfigurator {
    session: Configurator,
}

#[wasm_bindgen]
impl CanvasConfigurator {
    /// Creates a session with a `size` x `size` wheel.
    #[wasm_bindgen(constructor)]
    pub fn new(size: u32) -> Result<CanvasConfigurator, JsError> {
        let config = ConfiguratorConfig::new().with_wheel_size(size);
        Ok(Self {
            session: Configurator::new(config)?,
        })
    }

    /// Creates a session from a JSON config (see [`ConfiguratorConfig`]).
    #[wasm_bindgen(js_name = "fromConfigJson")]
    pub fn from_config_json(json: &str) -> Result<CanvasConfigurator, JsError> {
        let config = ConfiguratorConfig::from_json(json)?;
        Ok(Self {
            session: Configurator::new(config)?,
        })
    }

    // ---- Wheel ----

    /// Draws the rendered wheel into `canvas`, resizing it to match.
    #[wasm_bindgen(js_name = "renderWheel")]
    pub fn render_wheel(&self, canvas: &HtmlCanvasElement) -> Result<(), JsError> {
        let image = self.session.wheel().image();
        let (width, height) = image.dimensions();

        canvas.set_width(width);
        canvas.set_height(height);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .map_err(|_| JsError::new("Failed to get 2d context"))?
            .ok_or_else(|| JsError::new("Canvas 2d context is null"))?
            .dyn_into()
            .map_err(|_| JsError::new("Failed to cast to CanvasRenderingContext2d"))?;

        let raw_pixels = image.as_raw().as_slice();
        let image_data =
            ImageData::new_with_u8_clamped_array_and_sh(Clamped(raw_pixels), width, height)
                .map_err(|_| JsError::new("Failed to create ImageData"))?;

        ctx.put_image_data(&image_data, 0.0, 0.0)
            .map_err(|_| JsError::new("Failed to put image data"))?;

        Ok(())
    }

    /// Returns the wheel's raw RGBA pixels.
    #[wasm_bindgen(js_name = "wheelPixels")]
    pub fn wheel_pixels(&self) -> js_sys::Uint8Array {
        let raw = self.session.wheel().image().as_raw();
        let array = js_sys::Uint8Array::new_with_length(raw.len() as u32);
        array.copy_from(raw);
        array
    }

    /// Re-renders the wheel for a new size. Returns true if it changed.
    #[wasm_bindgen(js_name = "resizeWheel")]
    pub fn resize_wheel(&mut self, size: u32) -> Result<bool, JsError> {
        Ok(self.session.resize_wheel(size)?)
    }

    /// Handles a click at surface-local coordinates; returns the footer hex.
    #[wasm_bindgen(js_name = "wheelClick")]
    pub fn wheel_click(&mut self, x: f32, y: f32) -> String {
        self.session.wheel_click(Point::new(x, y)).to_hex()
    }

    /// Handles pointer movement; returns the footer hex if it was sampled.
    #[wasm_bindgen(js_name = "wheelDrag")]
    pub fn wheel_drag(&mut self, x: f32, y: f32, primary_pressed: bool) -> Option<String> {
        self.session
            .wheel_drag(Point::new(x, y), primary_pressed)
            .map(|color| color.to_hex())
    }

    /// The pointer marker's raw sampled color, if the wheel was sampled.
    #[wasm_bindgen(js_name = "pointerColor")]
    pub fn pointer_color(&self) -> Option<String> {
        self.session.pointer().map(|marker| marker.color.to_hex())
    }

    #[wasm_bindgen(js_name = "setBrightness")]
    pub fn set_brightness(&mut self, value: f64) {
        self.session.set_brightness(value);
    }

    // ---- Footer color ----

    #[wasm_bindgen(js_name = "selectPreset")]
    pub fn select_preset(&mut self, hex: &str) -> Result<String, JsError> {
        Ok(self.session.select_preset(hex)?.to_hex())
    }

    #[wasm_bindgen(js_name = "updateCustomColor")]
    pub fn update_custom_color(&mut self, hex: &str) -> String {
        self.session.update_custom_color(hex).to_hex()
    }

    /// Applies typed hex entry; returns `undefined` if it was ignored.
    #[wasm_bindgen(js_name = "updateFromHex")]
    pub fn update_from_hex(&mut self, entry: &str) -> Option<String> {
        self.session.update_from_hex(entry).map(|color| color.to_hex())
    }

    #[wasm_bindgen(js_name = "footerBackground")]
    pub fn footer_background(&self) -> String {
        self.session.footer().background.to_hex()
    }

    #[wasm_bindgen(js_name = "footerTextColor")]
    pub fn footer_text_color(&self) -> String {
        self.session.footer().text_color.to_hex()
    }

    /// The footer border as a CSS value (`none` when absent).
    #[wasm_bindgen(js_name = "footerBorder")]
    pub fn footer_border(&self) -> String {
        self.session.footer().border_css()
    }

    /// Hex of the highlighted preset swatch, if any.
    #[wasm_bindgen(js_name = "selectedPreset")]
    pub fn selected_preset(&self) -> Option<String> {
        self.session.selected_preset().map(|named| named.hex.to_string())
    }

    // ---- Icons and fonts ----

    #[wasm_bindgen(js_name = "selectIcon")]
    pub fn select_icon(&mut self, category: &str, name: &str, svg: &str) {
        self.session.select_icon(category, name, svg);
    }

    #[wasm_bindgen(js_name = "selectHeadingFont")]
    pub fn select_heading_font(&mut self, font: &str) {
        self.session.select_heading_font(font);
    }

    #[wasm_bindgen(js_name = "selectBodyFont")]
    pub fn select_body_font(&mut self, font: &str) {
        self.session.select_body_font(font);
    }

    // ---- Summary and export ----

    /// The summary's color line, e.g. `#faf8f5 (Off White)`.
    #[wasm_bindgen(js_name = "summaryColorLabel")]
    pub fn summary_color_label(&self) -> String {
        self.session.summary().color_label()
    }

    #[wasm_bindgen(js_name = "summaryHeadingFont")]
    pub fn summary_heading_font(&self) -> String {
        self.session.summary().heading_font
    }

    #[wasm_bindgen(js_name = "summaryBodyFont")]
    pub fn summary_body_font(&self) -> String {
        self.session.summary().body_font
    }

    /// Exports the selections as pretty-printed JSON.
    #[wasm_bindgen(js_name = "exportJson")]
    pub fn export_json(&self) -> Result<String, JsError> {
        Ok(self.session.export().to_json_pretty()?)
    }

    /// Exports the selections as a plain JS object.
    #[wasm_bindgen(js_name = "exportValue")]
    pub fn export_value(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.session.export())
            .map_err(|e| JsError::new(&format!("Failed to serialize export: {}", e)))
    }
}
