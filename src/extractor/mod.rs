//! Background-color extraction heuristic

mod named;
mod snapshot;

pub use named::resolve_named_color;
pub use snapshot::SnapshotDocument;

use tracing::trace;

use crate::color::{Color, ColorScheme, is_transparent};

/// Read-only view of a loaded document, sufficient for color extraction.
///
/// Implementations that resolve CSS color keywords by probing the live render
/// tree must clean up any probe elements they create; extraction is otherwise
/// side-effect-free.
pub trait DocumentProbe {
    /// Content of the `theme-color` meta tag, if present.
    fn theme_color_meta(&self) -> Option<String>;

    /// Resolve an arbitrary CSS color value (named color, `rgb()`, hex) to a
    /// computed `rgb(...)`/`rgba(...)` string, or None if it does not name a
    /// color.
    fn resolve_css_color(&self, value: &str) -> Option<String>;

    /// Computed background color of the document body, or None when the body
    /// does not exist yet.
    fn body_background(&self) -> Option<String>;

    /// Computed background color of the document root element.
    fn root_background(&self) -> String;

    /// The OS/browser color-scheme preference.
    fn preferred_color_scheme(&self) -> ColorScheme;

    /// Whether the document has already finished loading.
    fn is_load_complete(&self) -> bool;
}

/// Extract the best-guess canonical background color of a document.
///
/// Priority order, first match wins:
/// 1. `theme-color` meta content that is a hex literal
/// 2. `theme-color` meta content resolved through computed style
/// 3. body computed background, if not transparent
/// 4. root element computed background, if not transparent
/// 5. the color-scheme default
///
/// Malformed values at any level count as "no match" and fall through; this
/// function never fails.
pub fn extract(probe: &dyn DocumentProbe) -> Color {
    if let Some(meta) = probe.theme_color_meta() {
        let meta = meta.trim();
        if meta.starts_with('#') {
            if let Ok(color) = Color::from_hex(meta) {
                return color;
            }
        }
        if let Some(resolved) = probe.resolve_css_color(meta) {
            if !is_transparent(&resolved) {
                if let Ok(color) = Color::from_rgb_string(&resolved) {
                    return color;
                }
            }
        }
        trace!(content = meta, "theme-color meta did not yield a color");
    }

    if let Some(body) = probe.body_background() {
        if !is_transparent(&body) {
            if let Ok(color) = Color::from_rgb_string(&body) {
                return color;
            }
        }
    }

    let root = probe.root_background();
    if !is_transparent(&root) {
        if let Ok(color) = Color::from_rgb_string(&root) {
            return color;
        }
    }

    let fallback = probe.preferred_color_scheme().default_color();
    trace!(%fallback, "no usable background found, using scheme default");
    fallback
}
