//! CSS parsing module.

mod context;
mod css_parser;
mod error;
mod lexer;
mod value_parser;

pub use css_parser::{ParseOutcome, parse, parse_with};
pub use error::{ParseError, ParseErrorKind};
pub use lexer::{Lexer, Token, TokenKind};

pub(crate) use value_parser::parse_value;
