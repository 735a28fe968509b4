//! Serializable export of the user's selections.
//!
//! A [`SelectionExport`] is the document handed to the file-save mechanism.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "icons": [
//!     { "category": "Social Media", "selected": "Globe" }
//!   ],
//!   "typography": {
//!     "headingFont": "Playfair Display",
//!     "bodyFont": null
//!   },
//!   "footerColor": {
//!     "hex": "#faf8f5",
//!     "name": "Off White"
//!   },
//!   "exportDate": "2026-10-17T09:30:00.000Z"
//! }
//! ```

use std::fs;
use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use log::info;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::names::color_name;
use crate::selection::{Selections, category_title};

/// File name offered when saving an export.
pub const EXPORT_FILE_NAME: &str = "moire-selections.json";

// ============================================================================
// Document Parts
// ============================================================================

/// One chosen icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ExportedIcon {
    /// Title-cased category, e.g. `"Social Media"`.
    pub category: String,

    /// Display name of the chosen icon.
    pub selected: String,
}

/// Font choices. Unpicked fonts serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub heading_font: Option<String>,
    pub body_font: Option<String>,
}

/// The footer color with its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct FooterColor {
    /// Lowercase `#rrggbb`.
    pub hex: String,

    /// Name from the color table, or `"Custom"`.
    pub name: String,
}

// ============================================================================
// SelectionExport
// ============================================================================

/// The full export document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct SelectionExport {
    pub icons: Vec<ExportedIcon>,
    pub typography: Typography,
    pub footer_color: FooterColor,

    /// UTC timestamp, RFC 3339 with milliseconds.
    pub export_date: String,
}

impl SelectionExport {
    /// Builds the document from the selections, stamped with `at`.
    pub fn from_selections(selections: &Selections, at: DateTime<Utc>) -> Self {
        let icons = selections
            .icons()
            .map(|(category, choice)| ExportedIcon {
                category: category_title(category),
                selected: choice.name.clone(),
            })
            .collect();

        let hex = selections.footer_color().to_hex();
        let name = color_name(&hex).to_string();

        Self {
            icons,
            typography: Typography {
                heading_font: selections.heading_font().map(str::to_string),
                body_font: selections.body_font().map(str::to_string),
            },
            footer_color: FooterColor { hex, name },
            export_date: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Builds the document stamped with the current time.
    pub fn now(selections: &Selections) -> Self {
        Self::from_selections(selections, Utc::now())
    }

    /// Serializes the export to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the export to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes an export from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Writes the pretty-printed document to `path`.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json_pretty()?)?;
        info!("exported selections to {}", path.display());
        Ok(())
    }

    /// The JSON schema of the export document.
    #[cfg(feature = "jsonschema")]
    pub fn json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(SelectionExport)
    }
}

// ============================================================================
// Tests
// ============================================================================
