//! Color parsing: `#RGB`, `#RRGGBB` and a short list of named colors.
//!
//! Anything accepted here is safe to place in an SVG attribute verbatim: hex
//! forms are `#` plus hex digits, names come from a fixed table.

use core::fmt;

use crate::error::{BarcodeError, Result};

/// A validated fill color.
///
/// Keeps the caller's spelling (`"#ff0000"`, `"RED"`) for output and the
/// resolved sRGB triple for inspection.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    text: String,
    rgb: [u8; 3],
}

impl Color {
    /// Parse and validate a color string.
    ///
    /// Accepts:
    /// - `#RGB`: 3-digit hex
    /// - `#RRGGBB`: 6-digit hex
    /// - `red`, `blue`, `green`, `yellow`, `orange`, `purple`, `pink`, `brown`,
    ///   `black`, `white`, `gray`, `grey`, `cyan`, `magenta` (case-insensitive)
    ///
    /// Surrounding whitespace is not trimmed; `" red"` is rejected.
    pub fn parse(s: &str) -> Result<Self> {
        let rgb = match s.strip_prefix('#') {
            Some(hex) => parse_hex(hex),
            None => lookup_named(s),
        };
        rgb.map(|rgb| Self {
            text: String::from(s),
            rgb,
        })
        .ok_or_else(|| BarcodeError::InvalidColor {
            color: String::from(s),
        })
    }

    /// Whether `s` would be accepted by [`parse`](Self::parse).
    pub fn is_valid(s: &str) -> bool {
        Self::parse(s).is_ok()
    }

    /// White, `#FFFFFF`.
    pub fn white() -> Self {
        Self {
            text: String::from("#FFFFFF"),
            rgb: [255, 255, 255],
        }
    }

    /// Black, `#000000`.
    pub fn black() -> Self {
        Self {
            text: String::from("#000000"),
            rgb: [0, 0, 0],
        }
    }

    /// The color as written by the caller.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Resolved sRGB channels.
    pub fn rgb(&self) -> [u8; 3] {
        self.rgb
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn parse_hex(hex: &str) -> Option<[u8; 3]> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let b = hex.as_bytes();
    match b.len() {
        3 => Some([expand_nibble(b[0])?, expand_nibble(b[1])?, expand_nibble(b[2])?]),
        6 => Some([
            parse_byte(b[0], b[1])?,
            parse_byte(b[2], b[3])?,
            parse_byte(b[4], b[5])?,
        ]),
        _ => None,
    }
}

/// Expand a single hex nibble: 'f' → 0xFF, 'a' → 0xAA.
fn expand_nibble(ch: u8) -> Option<u8> {
    let n = hex_val(ch)?;
    Some(n << 4 | n)
}

fn hex_val(ch: u8) -> Option<u8> {
    match ch {
        b'0'..=b'9' => Some(ch - b'0'),
        b'a'..=b'f' => Some(ch - b'a' + 10),
        b'A'..=b'F' => Some(ch - b'A' + 10),
        _ => None,
    }
}

fn parse_byte(hi: u8, lo: u8) -> Option<u8> {
    Some(hex_val(hi)? << 4 | hex_val(lo)?)
}

fn lookup_named(name: &str) -> Option<[u8; 3]> {
    // Longest name is 7 bytes; anything longer can't match.
    if name.len() > 8 {
        return None;
    }
    let lower = name.to_ascii_lowercase();

    NAMED_COLORS
        .binary_search_by_key(&lower.as_str(), |&(n, _)| n)
        .ok()
        .map(|idx| NAMED_COLORS[idx].1)
}

/// Named colors, sorted alphabetically for binary search.
const NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("black", [0, 0, 0]),
    ("blue", [0, 0, 255]),
    ("brown", [165, 42, 42]),
    ("cyan", [0, 255, 255]),
    ("gray", [128, 128, 128]),
    ("green", [0, 128, 0]),
    ("grey", [128, 128, 128]),
    ("magenta", [255, 0, 255]),
    ("orange", [255, 165, 0]),
    ("pink", [255, 192, 203]),
    ("purple", [128, 0, 128]),
    ("red", [255, 0, 0]),
    ("white", [255, 255, 255]),
    ("yellow", [255, 255, 0]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colors_sorted() {
        for w in NAMED_COLORS.windows(2) {
            assert!(w[0].0 < w[1].0, "{:?} >= {:?}", w[0].0, w[1].0);
        }
    }

    #[test]
    fn hex_forms() {
        assert_eq!(Color::parse("#FFF").unwrap().rgb(), [255, 255, 255]);
        assert_eq!(Color::parse("#a1b").unwrap().rgb(), [0xaa, 0x11, 0xbb]);
        assert_eq!(Color::parse("#123456").unwrap().rgb(), [0x12, 0x34, 0x56]);
        assert_eq!(Color::parse("#ABCDEF").unwrap().as_str(), "#ABCDEF");
    }

    #[test]
    fn named_case_insensitive() {
        assert_eq!(Color::parse("red").unwrap().rgb(), [255, 0, 0]);
        assert_eq!(Color::parse("GREY").unwrap().rgb(), [128, 128, 128]);
        assert_eq!(Color::parse("Magenta").unwrap().as_str(), "Magenta");
    }

    #[test]
    fn rejects_malformed() {
        for bad in [
            "", "#", "#12", "#1234", "#12345", "#1234567", "#GGG", "FFFFFF", "rgb(0,0,0)",
            "aliceblue", " red", "red\"/><script>", "#fff\" onload=\"x",
        ] {
            assert!(
                matches!(Color::parse(bad), Err(BarcodeError::InvalidColor { .. })),
                "{bad:?} should be rejected"
            );
            assert!(!Color::is_valid(bad));
        }
    }

    #[test]
    fn defaults_match_config() {
        assert_eq!(Color::white(), Color::parse("#FFFFFF").unwrap());
        assert_eq!(Color::black(), Color::parse("#000000").unwrap());
        assert_eq!(Color::black().to_string(), "#000000");
    }
}
