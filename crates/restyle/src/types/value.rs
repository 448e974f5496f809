//! Property value tree.
//!
//! A declaration's value is a small tree: leaves are sizes, keywords,
//! colors, strings and URLs; functions carry their own argument value; lists
//! join items with a space or a comma; a [`Value::Pair`] is the dedicated
//! `a/b` form used by `font: 12px/1.5 ...` and friends.
//!
//! # Example
//!
//! ```
//! use restyle::prelude::*;
//!
//! let value = Value::parse("12px/1.5 Georgia, serif").unwrap();
//! let Value::List(families) = &value else { panic!("expected a comma list") };
//! assert_eq!(families.separator, Separator::Comma);
//! assert_eq!(value.to_string(), "12px/1.5 Georgia, serif");
//! ```

use std::fmt;

use super::{Color, Size};
use crate::render::{CssWriter, Render, display_via_render};

/// A property value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Number with optional unit (`12px`, `50%`, `1.6`).
    Size(Size),
    /// Identifier or other bare word (`solid`, `serif`, `inherit`).
    Keyword(String),
    /// Hex color or color function.
    Color(Color),
    /// Quoted string literal (decoded).
    String(String),
    /// `url(...)` target (decoded).
    Url(String),
    /// Non-color function such as `calc(...)` or `linear-gradient(...)`.
    Function(CssFunction),
    /// Two values joined by `/`.
    Pair(Box<Value>, Box<Value>),
    /// Space- or comma-separated list.
    List(ValueList),
}

impl Value {
    /// Create a keyword value.
    pub fn keyword(word: impl Into<String>) -> Self {
        Value::Keyword(word.into())
    }

    /// Create a `/` pair.
    pub fn pair(first: impl Into<Value>, second: impl Into<Value>) -> Self {
        Value::Pair(Box::new(first.into()), Box::new(second.into()))
    }

    /// Join `items` with spaces; a single item is returned as is.
    pub fn space_list(items: Vec<Value>) -> Self {
        ValueList::collapse(Separator::Space, items)
    }

    /// Join `items` with commas; a single item is returned as is.
    pub fn comma_list(items: Vec<Value>) -> Self {
        ValueList::collapse(Separator::Comma, items)
    }

    /// Parse value text such as `1px solid #000` or `-10px`.
    pub fn parse(text: &str) -> crate::Result<Self> {
        crate::parser::parse_value(text)
    }

    /// Whether this is the keyword `word` (ASCII case-insensitive).
    pub fn is_keyword(&self, word: &str) -> bool {
        matches!(self, Value::Keyword(k) if k.eq_ignore_ascii_case(word))
    }

    /// The keyword text, if this is a keyword.
    pub fn as_keyword(&self) -> Option<&str> {
        match self {
            Value::Keyword(k) => Some(k),
            _ => None,
        }
    }

    /// The size, if this is one.
    pub fn as_size(&self) -> Option<&Size> {
        match self {
            Value::Size(size) => Some(size),
            _ => None,
        }
    }

    /// The list, if this is one.
    pub fn as_list(&self) -> Option<&ValueList> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// Whether this is a comma-separated list.
    pub fn is_comma_list(&self) -> bool {
        matches!(self, Value::List(list) if list.separator == Separator::Comma)
    }

    /// Space-separated components: the items of a space list, or the value
    /// itself.
    pub fn components(&self) -> Vec<&Value> {
        match self {
            Value::List(list) if list.separator == Separator::Space => list.items.iter().collect(),
            other => vec![other],
        }
    }

    /// Visit this value and every nested value, depth-first.
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a Value)) {
        visit(self);
        match self {
            Value::List(list) => {
                for item in &list.items {
                    item.walk(visit);
                }
            }
            Value::Pair(first, second) => {
                first.walk(visit);
                second.walk(visit);
            }
            Value::Function(function) => {
                if let Some(arguments) = &function.arguments {
                    arguments.walk(visit);
                }
            }
            Value::Color(Color::Function(function)) => {
                if let Some(arguments) = &function.arguments {
                    arguments.walk(visit);
                }
            }
            Value::Size(_)
            | Value::Keyword(_)
            | Value::Color(Color::Hex(_))
            | Value::String(_)
            | Value::Url(_) => {}
        }
    }
}

impl From<Size> for Value {
    fn from(size: Size) -> Self {
        Value::Size(size)
    }
}

impl From<Color> for Value {
    fn from(color: Color) -> Self {
        Value::Color(color)
    }
}

impl From<ValueList> for Value {
    fn from(list: ValueList) -> Self {
        Value::List(list)
    }
}

impl From<CssFunction> for Value {
    fn from(function: CssFunction) -> Self {
        Value::Function(function)
    }
}

/// List separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Separator {
    Space,
    Comma,
}

/// An ordered list of values joined by one separator.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueList {
    /// How the items are joined.
    pub separator: Separator,
    /// The items, in source order.
    pub items: Vec<Value>,
}

impl ValueList {
    /// Create a list.
    pub fn new(separator: Separator, items: Vec<Value>) -> Self {
        Self { separator, items }
    }

    /// Wrap `items` in a list unless there is exactly one.
    pub fn collapse(separator: Separator, mut items: Vec<Value>) -> Value {
        if items.len() == 1
            && let Some(only) = items.pop()
        {
            return only;
        }
        Value::List(Self::new(separator, items))
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A function value: name plus parsed argument value.
#[derive(Debug, Clone, PartialEq)]
pub struct CssFunction {
    /// Function name as written (without the parenthesis).
    pub name: String,
    /// Arguments, `None` for `name()`.
    pub arguments: Option<Box<Value>>,
}

impl CssFunction {
    /// Create a function value.
    pub fn new(name: impl Into<String>, arguments: Option<Value>) -> Self {
        Self {
            name: name.into(),
            arguments: arguments.map(Box::new),
        }
    }
}

impl Render for Value {
    fn write_css<W: fmt::Write>(&self, dest: &mut CssWriter<'_, W>) -> fmt::Result {
        match self {
            Value::Size(size) => size.write_css(dest),
            Value::Keyword(word) if is_delimiter(word) => dest.write_str(word),
            Value::Keyword(word) => dest.write_identifier(word),
            Value::Color(color) => color.write_css(dest),
            Value::String(s) => dest.write_quoted(s),
            Value::Url(url) => {
                dest.write_str("url(")?;
                dest.write_quoted(url)?;
                dest.write_str(")")
            }
            Value::Function(function) => function.write_css(dest),
            Value::Pair(first, second) => {
                first.write_css(dest)?;
                dest.space(&dest.format().slash_separator)?;
                second.write_css(dest)
            }
            Value::List(list) => list.write_css(dest),
        }
    }
}

impl Render for ValueList {
    fn write_css<W: fmt::Write>(&self, dest: &mut CssWriter<'_, W>) -> fmt::Result {
        let format = dest.format();
        let separator = match self.separator {
            Separator::Space => &format.space_separator,
            Separator::Comma => &format.comma_separator,
        };
        dest.join(&self.items, separator)
    }
}

impl Render for CssFunction {
    fn write_css<W: fmt::Write>(&self, dest: &mut CssWriter<'_, W>) -> fmt::Result {
        dest.write_identifier(&self.name)?;
        dest.write_str("(")?;
        if let Some(arguments) = &self.arguments {
            arguments.write_css(dest)?;
        }
        dest.write_str(")")
    }
}

/// Keywords that stand for punctuation rather than a name: a single
/// non-identifier character (`+`, `*`, `:`) or a non-color hash (`#zzz`).
fn is_delimiter(word: &str) -> bool {
    let mut chars = word.chars();
    match (chars.next(), chars.next()) {
        (Some('#'), _) => true,
        (Some(c), None) => !(c.is_alphabetic() || c == '_' || !c.is_ascii()),
        _ => false,
    }
}

display_via_render!(Value, ValueList, CssFunction);
