//! CSS parsing diagnostics.

use std::fmt;

use crate::Error;

/// Which stage of the parser produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Malformed token.
    Lex,
    /// Structural violation.
    Syntax,
}

/// CSS parse error with location information.
///
/// In strict mode the first one aborts the parse (converted into [`Error`]);
/// in lenient mode they are collected as warnings next to the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Stage that detected the problem.
    pub kind: ParseErrorKind,
    /// The error message describing what went wrong.
    pub message: String,
    /// Line number where the error occurred (1-indexed).
    pub line: u32,
    /// Column number where the error occurred (1-indexed).
    pub column: u32,
}

impl ParseError {
    /// Create a lex diagnostic.
    pub fn lex(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            kind: ParseErrorKind::Lex,
            message: message.into(),
            line,
            column,
        }
    }

    /// Create a syntax diagnostic.
    pub fn syntax(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            kind: ParseErrorKind::Syntax,
            message: message.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match self.kind {
            ParseErrorKind::Lex => "lex",
            ParseErrorKind::Syntax => "syntax",
        };
        write!(f, "CSS {} error at {}:{}: {}", stage, self.line, self.column, self.message)
    }
}

impl std::error::Error for ParseError {}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        match e.kind {
            ParseErrorKind::Lex => Error::lex(e.message, e.line, e.column),
            ParseErrorKind::Syntax => Error::syntax(e.message, e.line, e.column),
        }
    }
}
