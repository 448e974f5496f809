//! Color values.

use std::fmt;

use super::CssFunction;
use crate::render::{CssWriter, Render, display_via_render};

/// Function names whose values are colors.
pub const COLOR_FUNCTIONS: &[&str] = &[
    "rgb", "rgba", "hsl", "hsla", "hwb", "lab", "lch", "oklab", "oklch", "color",
];

/// A hex color or a color function.
///
/// Named colors (`red`, `transparent`) stay [`Value::Keyword`](super::Value::Keyword)s;
/// the shorthand engine recognizes them through its keyword tables.
#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    /// Hex digits without the leading `#`, lower-case.
    Hex(String),
    /// `rgb(...)`, `hsl(...)` and friends.
    Function(CssFunction),
}

impl Color {
    /// Create a hex color from `#rgb`, `rgb`, `#rrggbb`, ... text.
    ///
    /// Returns `None` unless the digits are 3, 4, 6 or 8 hex characters.
    pub fn hex(text: &str) -> Option<Self> {
        let digits = text.strip_prefix('#').unwrap_or(text);
        Self::is_hex_digits(digits).then(|| Color::Hex(digits.to_ascii_lowercase()))
    }

    /// Whether `digits` is a valid hex color body.
    pub fn is_hex_digits(digits: &str) -> bool {
        matches!(digits.len(), 3 | 4 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
    }

    /// Whether `name` is a color function name.
    pub fn is_color_function(name: &str) -> bool {
        COLOR_FUNCTIONS.iter().any(|f| f.eq_ignore_ascii_case(name))
    }

    /// Shortest equivalent hex digits (`ff0000` → `f00`).
    fn compacted(digits: &str) -> Option<String> {
        if digits.len() != 6 && digits.len() != 8 {
            return None;
        }
        let bytes = digits.as_bytes();
        let pairs_match = bytes.chunks(2).all(|pair| pair[0] == pair[1]);
        pairs_match.then(|| bytes.chunks(2).map(|pair| pair[0] as char).collect())
    }
}

impl Render for Color {
    fn write_css<W: fmt::Write>(&self, dest: &mut CssWriter<'_, W>) -> fmt::Result {
        match self {
            Color::Hex(digits) => {
                dest.write_str("#")?;
                match Self::compacted(digits) {
                    Some(short) if dest.format().compact_hex_colors => dest.write_str(&short),
                    _ => dest.write_str(digits),
                }
            }
            Color::Function(function) => function.write_css(dest),
        }
    }
}

display_via_render!(Color);
