//! Serialization of the object model back to CSS text.
//!
//! Every node implements [`Render`]. Rendering is a pure function of the
//! current tree: nothing is cached, so output always reflects the latest
//! mutation. `Display` on each node renders with [`OutputFormat::default`].

mod format;

pub use format::OutputFormat;

use std::fmt;
use std::sync::LazyLock;

static DEFAULT_FORMAT: LazyLock<OutputFormat> = LazyLock::new(OutputFormat::default);

/// The format used by `Display` implementations.
pub fn default_format() -> &'static OutputFormat {
    &DEFAULT_FORMAT
}

/// A node that can be written as CSS text.
pub trait Render {
    /// Write this node to `dest`.
    fn write_css<W: fmt::Write>(&self, dest: &mut CssWriter<'_, W>) -> fmt::Result;

    /// Render this node into a new string.
    fn render(&self, format: &OutputFormat) -> String {
        let mut out = String::new();
        let mut writer = CssWriter::new(&mut out, format);
        // Writing into a String cannot fail.
        let _ = self.write_css(&mut writer);
        out
    }
}

/// Output sink that knows the active format and nesting depth.
pub struct CssWriter<'a, W> {
    dest: &'a mut W,
    format: &'a OutputFormat,
    depth: usize,
}

impl<'a, W: fmt::Write> CssWriter<'a, W> {
    /// Create a writer at nesting depth zero.
    pub fn new(dest: &'a mut W, format: &'a OutputFormat) -> Self {
        Self {
            dest,
            format,
            depth: 0,
        }
    }

    /// The active output format.
    pub fn format(&self) -> &'a OutputFormat {
        self.format
    }

    /// Write text verbatim.
    pub fn write_str(&mut self, s: &str) -> fmt::Result {
        self.dest.write_str(s)
    }

    /// Write a spacing string, expanding `\n` into line ending plus
    /// indentation for the current depth.
    pub fn space(&mut self, spacing: &str) -> fmt::Result {
        let format = self.format;
        for (i, chunk) in spacing.split('\n').enumerate() {
            if i > 0 {
                self.dest.write_str(&format.line_ending)?;
                for _ in 0..self.depth {
                    self.dest.write_str(&format.indentation)?;
                }
            }
            self.dest.write_str(chunk)?;
        }
        Ok(())
    }

    /// Write a CSS string literal, quoted and escaped.
    pub fn write_quoted(&mut self, value: &str) -> fmt::Result {
        cssparser::serialize_string(value, self.dest)
    }

    /// Write an identifier, escaping what would not re-read as one.
    pub fn write_identifier(&mut self, name: &str) -> fmt::Result {
        cssparser::serialize_identifier(name, self.dest)
    }

    /// Write `items`, separated by `separator` spacing.
    pub fn join<T: Render>(&mut self, items: &[T], separator: &str) -> fmt::Result {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.space(separator)?;
            }
            item.write_css(self)?;
        }
        Ok(())
    }

    /// Run `f` one nesting level deeper.
    pub fn nested<F>(&mut self, f: F) -> fmt::Result
    where
        F: FnOnce(&mut Self) -> fmt::Result,
    {
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }
}

/// Implement `Display` through [`Render`] with the default format.
macro_rules! display_via_render {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    let mut writer = $crate::render::CssWriter::new(f, $crate::render::default_format());
                    $crate::render::Render::write_css(self, &mut writer)
                }
            }
        )+
    };
}

pub(crate) use display_via_render;

/// Shortest textual form of a number: integers without a fraction,
/// everything else in Rust's round-trip representation.
pub(crate) fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Word(&'static str);

    impl Render for Word {
        fn write_css<W: fmt::Write>(&self, dest: &mut CssWriter<'_, W>) -> fmt::Result {
            dest.write_str(self.0)
        }
    }

    #[test]
    fn spacing_expands_newlines_with_indentation() {
        let format = OutputFormat::pretty().indentation("  ");
        let mut out = String::new();
        let mut writer = CssWriter::new(&mut out, &format);
        writer
            .nested(|w| {
                w.write_str("a")?;
                w.space("\n")?;
                w.write_str("b")
            })
            .unwrap();
        assert_eq!(out, "a\n  b");
    }

    #[test]
    fn join_uses_separator() {
        let words = [Word("a"), Word("b"), Word("c")];
        let format = OutputFormat::default();
        let mut out = String::new();
        CssWriter::new(&mut out, &format).join(&words, ", ").unwrap();
        assert_eq!(out, "a, b, c");
    }

    #[test]
    fn identifiers_are_escaped() {
        let format = OutputFormat::default();
        let mut out = String::new();
        let mut writer = CssWriter::new(&mut out, &format);
        writer.write_identifier("Foo Bar").unwrap();
        writer.write_str(" ").unwrap();
        writer.write_identifier("123abc").unwrap();
        writer.write_str(" ").unwrap();
        writer.write_identifier("--Main-Color").unwrap();
        assert_eq!(out, "Foo\\ Bar \\31 23abc --Main-Color");
    }

    #[test]
    fn numbers_use_shortest_form() {
        assert_eq!(format_number(12.0), "12");
        assert_eq!(format_number(-10.0), "-10");
        assert_eq!(format_number(1.6), "1.6");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(-0.0), "0");
    }
}
