//! CSS named-color lookup used by snapshot documents

use crate::color::Color;

/// The named colors a snapshot document can resolve.
///
/// Covers the CSS basic and extended names that show up in real `theme-color`
/// meta tags; an unknown name simply fails resolution and the extractor moves
/// on to the next priority level.
const NAMED_COLORS: &[(&str, Color)] = &[
    ("aliceblue", Color { r: 0xf0, g: 0xf8, b: 0xff }),
    ("aqua", Color { r: 0x00, g: 0xff, b: 0xff }),
    ("beige", Color { r: 0xf5, g: 0xf5, b: 0xdc }),
    ("black", Color { r: 0x00, g: 0x00, b: 0x00 }),
    ("blue", Color { r: 0x00, g: 0x00, b: 0xff }),
    ("brown", Color { r: 0xa5, g: 0x2a, b: 0x2a }),
    ("coral", Color { r: 0xff, g: 0x7f, b: 0x50 }),
    ("crimson", Color { r: 0xdc, g: 0x14, b: 0x3c }),
    ("cyan", Color { r: 0x00, g: 0xff, b: 0xff }),
    ("darkblue", Color { r: 0x00, g: 0x00, b: 0x8b }),
    ("darkgray", Color { r: 0xa9, g: 0xa9, b: 0xa9 }),
    ("darkgreen", Color { r: 0x00, g: 0x64, b: 0x00 }),
    ("darkslategray", Color { r: 0x2f, g: 0x4f, b: 0x4f }),
    ("dimgray", Color { r: 0x69, g: 0x69, b: 0x69 }),
    ("fuchsia", Color { r: 0xff, g: 0x00, b: 0xff }),
    ("gainsboro", Color { r: 0xdc, g: 0xdc, b: 0xdc }),
    ("ghostwhite", Color { r: 0xf8, g: 0xf8, b: 0xff }),
    ("gold", Color { r: 0xff, g: 0xd7, b: 0x00 }),
    ("gray", Color { r: 0x80, g: 0x80, b: 0x80 }),
    ("green", Color { r: 0x00, g: 0x80, b: 0x00 }),
    ("indigo", Color { r: 0x4b, g: 0x00, b: 0x82 }),
    ("ivory", Color { r: 0xff, g: 0xff, b: 0xf0 }),
    ("khaki", Color { r: 0xf0, g: 0xe6, b: 0x8c }),
    ("lavender", Color { r: 0xe6, g: 0xe6, b: 0xfa }),
    ("lightblue", Color { r: 0xad, g: 0xd8, b: 0xe6 }),
    ("lightgray", Color { r: 0xd3, g: 0xd3, b: 0xd3 }),
    ("lime", Color { r: 0x00, g: 0xff, b: 0x00 }),
    ("linen", Color { r: 0xfa, g: 0xf0, b: 0xe6 }),
    ("magenta", Color { r: 0xff, g: 0x00, b: 0xff }),
    ("maroon", Color { r: 0x80, g: 0x00, b: 0x00 }),
    ("midnightblue", Color { r: 0x19, g: 0x19, b: 0x70 }),
    ("navy", Color { r: 0x00, g: 0x00, b: 0x80 }),
    ("olive", Color { r: 0x80, g: 0x80, b: 0x00 }),
    ("orange", Color { r: 0xff, g: 0xa5, b: 0x00 }),
    ("orchid", Color { r: 0xda, g: 0x70, b: 0xd6 }),
    ("pink", Color { r: 0xff, g: 0xc0, b: 0xcb }),
    ("purple", Color { r: 0x80, g: 0x00, b: 0x80 }),
    ("rebeccapurple", Color { r: 0x66, g: 0x33, b: 0x99 }),
    ("red", Color { r: 0xff, g: 0x00, b: 0x00 }),
    ("salmon", Color { r: 0xfa, g: 0x80, b: 0x72 }),
    ("silver", Color { r: 0xc0, g: 0xc0, b: 0xc0 }),
    ("slategray", Color { r: 0x70, g: 0x80, b: 0x90 }),
    ("snow", Color { r: 0xff, g: 0xfa, b: 0xfa }),
    ("teal", Color { r: 0x00, g: 0x80, b: 0x80 }),
    ("tomato", Color { r: 0xff, g: 0x63, b: 0x47 }),
    ("white", Color { r: 0xff, g: 0xff, b: 0xff }),
    ("whitesmoke", Color { r: 0xf5, g: 0xf5, b: 0xf5 }),
    ("yellow", Color { r: 0xff, g: 0xff, b: 0x00 }),
];

/// Look up a CSS color name, case-insensitively.
pub fn resolve_named_color(name: &str) -> Option<Color> {
    let name = name.trim().to_ascii_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, c)| *c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(resolve_named_color("White"), Some(Color::new(255, 255, 255)));
        assert_eq!(resolve_named_color("BLACK"), Some(Color::new(0, 0, 0)));
    }

    #[test]
    fn test_unknown_name_is_none() {
        assert_eq!(resolve_named_color("notacolor"), None);
    }
}
