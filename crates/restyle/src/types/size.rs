//! Numeric values with an optional unit.

use std::fmt;

use crate::render::{CssWriter, Render, display_via_render, format_number};

/// A number with an optional unit (`%` counts as a unit).
///
/// ```
/// use restyle::prelude::Size;
///
/// assert_eq!(Size::px(-10.0).to_string(), "-10px");
/// assert_eq!(Size::percent(0.0).to_string(), "0%");
/// assert_eq!(Size::number(1.6).to_string(), "1.6");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Size {
    value: f64,
    unit: Option<String>,
}

impl Size {
    /// Create a size; units are stored lower-case.
    pub fn new(value: f64, unit: Option<&str>) -> Self {
        Self {
            value,
            unit: unit.map(str::to_ascii_lowercase),
        }
    }

    /// A unitless number.
    pub fn number(value: f64) -> Self {
        Self::new(value, None)
    }

    /// A pixel length.
    pub fn px(value: f64) -> Self {
        Self::new(value, Some("px"))
    }

    /// An em length.
    pub fn em(value: f64) -> Self {
        Self::new(value, Some("em"))
    }

    /// A percentage.
    pub fn percent(value: f64) -> Self {
        Self::new(value, Some("%"))
    }

    /// The numeric part.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The unit, if any.
    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    /// Whether the numeric part is zero.
    pub fn is_zero(&self) -> bool {
        self.value == 0.0
    }
}

impl Render for Size {
    fn write_css<W: fmt::Write>(&self, dest: &mut CssWriter<'_, W>) -> fmt::Result {
        dest.write_str(&format_number(self.value))?;
        if let Some(unit) = &self.unit {
            dest.write_str(unit)?;
        }
        Ok(())
    }
}

display_via_render!(Size);
