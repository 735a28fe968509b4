//! Session-scoped selection state.
//!
//! [`Selections`] is the single source of truth for what the user picked.
//! It is owned by the [`Configurator`](crate::Configurator) and read by the
//! summary and the exporter; nothing here outlives the session.

use crate::engine::Color;
use crate::names::DEFAULT_FOOTER_COLOR;

/// An icon picked for a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconChoice {
    /// Display name shown under the icon.
    pub name: String,
    /// The icon's SVG markup.
    pub svg: String,
}

impl IconChoice {
    pub fn new(name: impl Into<String>, svg: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            svg: svg.into(),
        }
    }
}

/// Everything the user has selected so far.
///
/// Icons are keyed by kebab-case category and keep the order in which each
/// category was first chosen.
#[derive(Debug, Clone, PartialEq)]
pub struct Selections {
    icons: Vec<(String, IconChoice)>,
    heading_font: Option<String>,
    body_font: Option<String>,
    footer_color: Color,
}

impl Default for Selections {
    fn default() -> Self {
        Self::with_footer_color(DEFAULT_FOOTER_COLOR)
    }
}

impl Selections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_footer_color(footer_color: Color) -> Self {
        Self {
            icons: Vec::new(),
            heading_font: None,
            body_font: None,
            footer_color,
        }
    }

    /// Sets the icon for `category`, replacing any earlier choice in place.
    pub fn select_icon(&mut self, category: impl Into<String>, choice: IconChoice) {
        let category = category.into();
        match self.icons.iter_mut().find(|(key, _)| *key == category) {
            Some((_, existing)) => *existing = choice,
            None => self.icons.push((category, choice)),
        }
    }

    pub fn icon(&self, category: &str) -> Option<&IconChoice> {
        self.icons
            .iter()
            .find(|(key, _)| key == category)
            .map(|(_, choice)| choice)
    }

    /// Iterates `(category, choice)` pairs in first-selection order.
    pub fn icons(&self) -> impl Iterator<Item = (&str, &IconChoice)> {
        self.icons.iter().map(|(key, choice)| (key.as_str(), choice))
    }

    pub fn icon_count(&self) -> usize {
        self.icons.len()
    }

    pub fn set_heading_font(&mut self, font: impl Into<String>) {
        self.heading_font = Some(font.into());
    }

    pub fn heading_font(&self) -> Option<&str> {
        self.heading_font.as_deref()
    }

    pub fn set_body_font(&mut self, font: impl Into<String>) {
        self.body_font = Some(font.into());
    }

    pub fn body_font(&self) -> Option<&str> {
        self.body_font.as_deref()
    }

    pub fn set_footer_color(&mut self, color: Color) {
        self.footer_color = color;
    }

    pub fn footer_color(&self) -> Color {
        self.footer_color
    }
}

/// Turns a kebab-case key into space-separated Title Case words.
///
/// Only the first character of each segment is uppercased; the rest is kept
/// as written (`"social-media"` -> `"Social Media"`).
pub fn category_title(key: &str) -> String {
    key.split('-').map(capitalize).collect::<Vec<_>>().join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let selections = Selections::new();
        assert_eq!(selections.icon_count(), 0);
        assert_eq!(selections.heading_font(), None);
        assert_eq!(selections.body_font(), None);
        assert_eq!(selections.footer_color(), DEFAULT_FOOTER_COLOR);
    }

    #[test]
    fn reselecting_a_category_keeps_its_position() {
        let mut selections = Selections::new();
        selections.select_icon("phone", IconChoice::new("Handset", "<svg/>"));
        selections.select_icon("email", IconChoice::new("Envelope", "<svg/>"));
        selections.select_icon("phone", IconChoice::new("Mobile", "<svg/>"));

        let order: Vec<_> = selections.icons().map(|(k, c)| (k, c.name.as_str())).collect();
        assert_eq!(order, vec![("phone", "Mobile"), ("email", "Envelope")]);
        assert_eq!(selections.icon("email").unwrap().name, "Envelope");
        assert!(selections.icon("location").is_none());
    }

    #[test]
    fn fonts_are_replaced() {
        let mut selections = Selections::new();
        selections.set_heading_font("Playfair Display");
        selections.set_heading_font("Cormorant");
        selections.set_body_font("Inter");
        assert_eq!(selections.heading_font(), Some("Cormorant"));
        assert_eq!(selections.body_font(), Some("Inter"));
    }

    #[test]
    fn category_titles() {
        assert_eq!(category_title("social-media"), "Social Media");
        assert_eq!(category_title("phone"), "Phone");
        assert_eq!(category_title("opening-hOURS"), "Opening HOURS");
        assert_eq!(category_title("a--b"), "A  B");
        assert_eq!(category_title(""), "");
    }
}
