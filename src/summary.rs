//! Live summary of the current selections.

use std::fmt;

use crate::engine::Color;
use crate::names::color_name;
use crate::selection::{Selections, category_title};

/// Label shown for a font that has not been picked.
pub const NOT_SELECTED: &str = "Not selected";

/// Icon color baked into the catalog SVGs; the summary swaps it for
/// `currentColor` so icons follow the surrounding text color.
const CATALOG_ICON_COLOR: &str = "#1a1f3c";

/// One icon entry in the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSummary {
    /// Title-cased category.
    pub category: String,
    /// Recolored SVG markup.
    pub svg: String,
}

/// A snapshot of the selections, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub icons: Vec<IconSummary>,
    pub heading_font: String,
    pub body_font: String,
    pub color: Color,
    pub color_name: &'static str,
}

impl Summary {
    pub fn from_selections(selections: &Selections) -> Self {
        let icons = selections
            .icons()
            .map(|(category, choice)| IconSummary {
                category: category_title(category),
                svg: recolor_svg(&choice.svg),
            })
            .collect();

        let color = selections.footer_color();

        Self {
            icons,
            heading_font: selections.heading_font().unwrap_or(NOT_SELECTED).to_string(),
            body_font: selections.body_font().unwrap_or(NOT_SELECTED).to_string(),
            color,
            color_name: color_name(&color.to_hex()),
        }
    }

    /// The color line, e.g. `#faf8f5 (Off White)`.
    pub fn color_label(&self) -> String {
        format!("{} ({})", self.color, self.color_name)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.icons.is_empty() {
            let categories: Vec<_> = self.icons.iter().map(|i| i.category.as_str()).collect();
            writeln!(f, "Icons:        {}", categories.join(", "))?;
        }
        writeln!(f, "Heading font: {}", self.heading_font)?;
        writeln!(f, "Body font:    {}", self.body_font)?;
        write!(f, "Footer color: {}", self.color_label())
    }
}

/// Rewrites catalog-colored `stroke`/`fill` attributes to `currentColor`.
fn recolor_svg(svg: &str) -> String {
    let recolored = replace_attr_value(svg, "stroke", CATALOG_ICON_COLOR, "currentColor");
    replace_attr_value(&recolored, "fill", CATALOG_ICON_COLOR, "currentColor")
}

/// Replaces every `attr="from"` with `attr="to"`, leaving other values alone.
fn replace_attr_value(svg: &str, attr: &str, from: &str, to: &str) -> String {
    let mut result = String::with_capacity(svg.len());
    let pattern = format!("{attr}=\"");
    let mut remaining = svg;

    while let Some(start) = remaining.find(&pattern) {
        // Copy everything up to and including the attribute name and ="
        let value_start = start + pattern.len();
        result.push_str(&remaining[..value_start]);
        remaining = &remaining[value_start..];

        let Some(end) = remaining.find('"') else {
            break;
        };
        let value = &remaining[..end];
        result.push_str(if value == from { to } else { value });
        remaining = &remaining[end..];
    }

    result.push_str(remaining);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::IconChoice;

    #[test]
    fn empty_selections() {
        let summary = Summary::from_selections(&Selections::new());
        assert!(summary.icons.is_empty());
        assert_eq!(summary.heading_font, NOT_SELECTED);
        assert_eq!(summary.body_font, NOT_SELECTED);
        assert_eq!(summary.color_label(), "#1a1f3c (Dark Blue)");
    }

    #[test]
    fn icons_are_titled_and_recolored() {
        let mut selections = Selections::new();
        selections.select_icon(
            "social-media",
            IconChoice::new(
                "Globe",
                r##"<svg><path stroke="#1a1f3c" fill="none"/><circle fill="#1a1f3c"/></svg>"##,
            ),
        );

        let summary = Summary::from_selections(&selections);
        assert_eq!(summary.icons.len(), 1);
        assert_eq!(summary.icons[0].category, "Social Media");
        assert_eq!(
            summary.icons[0].svg,
            r#"<svg><path stroke="currentColor" fill="none"/><circle fill="currentColor"/></svg>"#
        );
    }

    #[test]
    fn other_colors_are_untouched() {
        let svg = r##"<path stroke="#ff0000" fill="#1A1F3C"/>"##;
        assert_eq!(recolor_svg(svg), svg);
    }

    #[test]
    fn unterminated_attribute_is_kept() {
        let svg = r##"<path stroke="#1a1f3c"##;
        assert_eq!(recolor_svg(svg), svg);
    }

    #[test]
    fn custom_color_label() {
        let selections = Selections::with_footer_color(Color::new(255, 0, 0));
        let summary = Summary::from_selections(&selections);
        assert_eq!(summary.color_label(), "#ff0000 (Custom)");
    }

    #[test]
    fn display_lists_everything() {
        let mut selections = Selections::new();
        selections.select_icon("phone", IconChoice::new("Handset", "<svg/>"));
        selections.set_body_font("Inter");

        let text = Summary::from_selections(&selections).to_string();
        assert!(text.contains("Icons:        Phone"));
        assert!(text.contains("Heading font: Not selected"));
        assert!(text.contains("Body font:    Inter"));
        assert!(text.ends_with("Footer color: #1a1f3c (Dark Blue)"));
    }
}
