//! Color values and CSS color string parsing

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Matches the channel triple of `rgb(r, g, b)` or `rgba(r, g, b, a)`
static RGB_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"rgba?\((\d+),\s*(\d+),\s*(\d+)").unwrap());

/// Matches the alpha component of an `rgba(...)` value
static RGBA_ALPHA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"rgba\([^)]+,\s*([0-9.]+)\)").unwrap());

/// Error returned when a string cannot be interpreted as a color.
///
/// The extraction heuristic treats this as "no match" and moves on to the
/// next priority level; it is never surfaced as a fatal condition.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("not a recognized color value: {0:?}")]
    Unrecognized(String),
    #[error("color channel out of range in {0:?}")]
    ChannelOutOfRange(String),
}

/// An opaque RGB color.
///
/// The canonical textual form is lowercase `#rrggbb` with no alpha channel;
/// that is what [`Display`](std::fmt::Display) emits and what gets persisted
/// in the color store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` or `#rgb` hex literal.
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::Unrecognized(s.to_string()))?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::Unrecognized(s.to_string()));
        }
        match digits.len() {
            6 => {
                let r = u8::from_str_radix(&digits[0..2], 16).expect("checked hex");
                let g = u8::from_str_radix(&digits[2..4], 16).expect("checked hex");
                let b = u8::from_str_radix(&digits[4..6], 16).expect("checked hex");
                Ok(Self::new(r, g, b))
            }
            3 => {
                // #abc expands to #aabbcc
                let expand = |c: char| {
                    let v = c.to_digit(16).expect("checked hex") as u8;
                    v << 4 | v
                };
                let mut chars = digits.chars();
                Ok(Self::new(
                    expand(chars.next().expect("len 3")),
                    expand(chars.next().expect("len 3")),
                    expand(chars.next().expect("len 3")),
                ))
            }
            _ => Err(ColorParseError::Unrecognized(s.to_string())),
        }
    }

    /// Parse a computed-style `rgb(r, g, b)` / `rgba(r, g, b, a)` string.
    ///
    /// The alpha channel, if any, is ignored here; transparency is decided
    /// separately by [`is_transparent`].
    pub fn from_rgb_string(s: &str) -> Result<Self, ColorParseError> {
        let caps = RGB_RE
            .captures(s)
            .ok_or_else(|| ColorParseError::Unrecognized(s.to_string()))?;
        let channel = |i: usize| {
            caps[i]
                .parse::<u16>()
                .ok()
                .filter(|v| *v <= 255)
                .map(|v| v as u8)
                .ok_or_else(|| ColorParseError::ChannelOutOfRange(s.to_string()))
        };
        Ok(Self::new(channel(1)?, channel(2)?, channel(3)?))
    }

    /// Parse any supported color form: hex literal first, then `rgb()`/`rgba()`.
    pub fn parse(s: &str) -> Result<Self, ColorParseError> {
        let s = s.trim();
        if s.starts_with('#') {
            Self::from_hex(s)
        } else {
            Self::from_rgb_string(s)
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_string()
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Color::parse(&s)
    }
}

/// Whether a CSS color string counts as transparent for extraction purposes.
///
/// True for the literal `transparent` keyword and for `rgba(...)` values whose
/// alpha parses to exactly `0`. Partial alpha is treated as opaque; this is a
/// deliberate simplification rather than a rendering-accurate alpha blend.
pub fn is_transparent(color: &str) -> bool {
    let color = color.trim();
    if color.is_empty() || color == "transparent" {
        return true;
    }
    if color.contains("rgba") {
        if let Some(caps) = RGBA_ALPHA_RE.captures(color) {
            if let Ok(alpha) = caps[1].parse::<f64>() {
                return alpha == 0.0;
            }
        }
    }
    false
}

/// OS/browser color-scheme preference, used for the synchronous fallback color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    /// The default overlay color for this scheme, used before any page color
    /// is known.
    pub fn default_color(self) -> Color {
        match self {
            ColorScheme::Dark => Color::new(0x1a, 0x1a, 0x1a),
            ColorScheme::Light => Color::new(0xf5, 0xf5, 0xf5),
        }
    }
}
