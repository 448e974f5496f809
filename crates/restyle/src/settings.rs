//! Parser settings.

use crate::render::OutputFormat;

/// Parse configuration.
///
/// # Example
///
/// ```
/// use restyle::Settings;
///
/// let settings = Settings::strict().multibyte(false);
/// assert!(!settings.lenient);
/// ```
#[derive(Debug, Clone)]
pub struct Settings {
    /// Recover from malformed input by skipping it and recording a warning.
    /// When `false`, the first error aborts the parse.
    pub lenient: bool,
    /// Accept non-ASCII characters in identifiers.
    pub multibyte: bool,
    /// Format used by [`ParseOutcome::render`](crate::ParseOutcome::render).
    pub output: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lenient: true,
            multibyte: true,
            output: OutputFormat::default(),
        }
    }
}

impl Settings {
    /// Lenient settings (the default).
    pub fn lenient() -> Self {
        Self::default()
    }

    /// Settings that abort on the first error.
    pub fn strict() -> Self {
        Self {
            lenient: false,
            ..Default::default()
        }
    }

    /// Set lenient recovery.
    pub fn with_lenient(mut self, lenient: bool) -> Self {
        self.lenient = lenient;
        self
    }

    /// Set multibyte identifier support.
    pub fn multibyte(mut self, multibyte: bool) -> Self {
        self.multibyte = multibyte;
        self
    }

    /// Set the output format.
    pub fn output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }
}
