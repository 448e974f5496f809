//! Stylesheet object model for CSS text.
//!
//! This crate parses CSS into an editable tree and writes it back out:
//!
//! - **Parsing**: strict or lenient, with recoverable problems reported as warnings
//! - **Object model**: documents, at-rules, declaration blocks, rules and typed values
//! - **Shorthands**: expand `border`, `font`, `background`, `margin` and friends
//!   into longhands and collapse them back
//! - **Rendering**: configurable output, from compact to pretty-printed
//!
//! # Example
//!
//! ```
//! use restyle::prelude::*;
//!
//! let mut document = parse("h1 { margin: 1em 2em; color: RED }").unwrap();
//! document.expand_shorthands();
//! assert_eq!(
//!     document.to_string(),
//!     "h1 {margin-top: 1em;margin-right: 2em;margin-bottom: 1em;margin-left: 2em;color: RED;}"
//! );
//!
//! document.create_shorthands();
//! assert_eq!(document.render(&OutputFormat::compact()), "h1{margin:1em 2em;color:RED}");
//! ```

pub mod document;
mod error;
pub mod parser;
pub mod render;
pub mod rules;
pub mod selector;
mod settings;
pub mod shorthand;
pub mod types;

pub use document::Document;
pub use error::{Error, Result};
pub use parser::{ParseOutcome, parse, parse_with};
pub use render::{OutputFormat, Render};
pub use settings::Settings;

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::document::{AtRuleBlock, AtRuleSet, AtRuleStatement, CssList, CssNode, DeclarationBlock, Document};
    pub use crate::parser::{ParseOutcome, parse, parse_with};
    pub use crate::render::{OutputFormat, Render};
    pub use crate::rules::{Rule, RuleId, RuleSet};
    pub use crate::selector::Selector;
    pub use crate::settings::Settings;
    pub use crate::types::{Color, CssFunction, Separator, Size, Value, ValueList};
    pub use crate::{Error, Result};
}
