//! Error types for the stylesheet object model.

use std::path::PathBuf;

/// Result type alias for stylesheet operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing or loading a stylesheet.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed token: unterminated string or comment, invalid escape,
    /// malformed `url(...)`.
    #[error("CSS lex error at line {line}, column {column}: {message}")]
    Lex {
        message: String,
        line: u32,
        column: u32,
    },

    /// Structural violation: unmatched `}`, missing `{` after a selector,
    /// declaration without a value, unterminated block.
    #[error("CSS syntax error at line {line}, column {column}: {message}")]
    Syntax {
        message: String,
        line: u32,
        column: u32,
    },

    /// Selector text that is not syntactically valid.
    #[error("Invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    /// File I/O error.
    #[error("Failed to read stylesheet '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a lex error.
    pub fn lex(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self::Lex {
            message: message.into(),
            line,
            column,
        }
    }

    /// Create a syntax error.
    pub fn syntax(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self::Syntax {
            message: message.into(),
            line,
            column,
        }
    }

    /// Create a selector error.
    pub fn invalid_selector(selector: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidSelector {
            selector: selector.into(),
            message: message.into(),
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Source position of a lex or syntax error.
    pub fn position(&self) -> Option<(u32, u32)> {
        match self {
            Error::Lex { line, column, .. } | Error::Syntax { line, column, .. } => {
                Some((*line, *column))
            }
            Error::InvalidSelector { .. } | Error::Io { .. } => None,
        }
    }
}
