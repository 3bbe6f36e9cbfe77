//! Serializable document snapshot implementing the probe interface

use serde::{Deserialize, Serialize};

use super::DocumentProbe;
use super::named::resolve_named_color;
use crate::color::{Color, ColorScheme};

/// A captured view of a document's color-relevant state.
///
/// This is the probe implementation used by the CLI and the simulation
/// driver: instead of querying a live render tree it carries the already
/// computed values. Background fields hold computed-style strings
/// (`rgb(...)`, `rgba(...)`, `transparent`); an empty root background counts
/// as transparent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotDocument {
    /// Content of the `theme-color` meta tag, if the page has one
    #[serde(default)]
    pub theme_color: Option<String>,

    /// Computed background color of the body, None when no body exists
    #[serde(default)]
    pub body_background: Option<String>,

    /// Computed background color of the root element
    #[serde(default)]
    pub root_background: String,

    /// OS/browser color-scheme preference in effect for this document
    #[serde(default)]
    pub color_scheme: ColorScheme,

    /// Whether the document had already finished loading when captured
    #[serde(default)]
    pub load_complete: bool,
}

impl DocumentProbe for SnapshotDocument {
    fn theme_color_meta(&self) -> Option<String> {
        self.theme_color.clone()
    }

    /// Resolves named colors through the built-in table and normalizes
    /// hex/`rgb()` forms, standing in for a live computed-style lookup.
    fn resolve_css_color(&self, value: &str) -> Option<String> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("transparent") {
            return Some("rgba(0, 0, 0, 0)".to_string());
        }
        let color = resolve_named_color(value).or_else(|| Color::parse(value).ok())?;
        Some(format!("rgb({}, {}, {})", color.r, color.g, color.b))
    }

    fn body_background(&self) -> Option<String> {
        self.body_background.clone()
    }

    fn root_background(&self) -> String {
        self.root_background.clone()
    }

    fn preferred_color_scheme(&self) -> ColorScheme {
        self.color_scheme
    }

    fn is_load_complete(&self) -> bool {
        self.load_complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_passes_rgb_through() {
        let doc = SnapshotDocument::default();
        assert_eq!(
            doc.resolve_css_color("rgb(1, 2, 3)"),
            Some("rgb(1, 2, 3)".to_string())
        );
    }

    #[test]
    fn test_resolve_named_and_hex() {
        let doc = SnapshotDocument::default();
        assert_eq!(
            doc.resolve_css_color("navy"),
            Some("rgb(0, 0, 128)".to_string())
        );
        assert_eq!(
            doc.resolve_css_color("#ff0000"),
            Some("rgb(255, 0, 0)".to_string())
        );
        assert_eq!(doc.resolve_css_color("not-a-color"), None);
    }

    #[test]
    fn test_snapshot_deserializes_with_defaults() {
        let doc: SnapshotDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.theme_color.is_none());
        assert!(doc.body_background.is_none());
        assert_eq!(doc.root_background, "");
        assert_eq!(doc.color_scheme, ColorScheme::Light);
        assert!(!doc.load_complete);
    }
}
