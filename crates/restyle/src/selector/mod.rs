//! Selector text.
//!
//! Selectors are kept as opaque, whitespace-normalized text. Only syntactic
//! sanity is checked: the text must be non-empty, parentheses and brackets
//! must balance, and `{`, `}` or `;` may only appear inside strings.

use std::fmt;

use crate::render::{CssWriter, Render, display_via_render};
use crate::{Error, Result};

/// A single selector such as `div.note > p:first-child`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector(String);

impl Selector {
    /// Validate and normalize selector text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSelector`] if the text is empty, unbalanced,
    /// contains a block or statement delimiter, or contains a top-level
    /// comma (use [`Selector::parse_list`] for selector lists).
    pub fn new(text: &str) -> Result<Self> {
        let normalized = normalize(text);
        validate(text, &normalized)?;
        if split_top_level(&normalized).len() > 1 {
            return Err(Error::invalid_selector(text, "unexpected ',' in a single selector"));
        }
        Ok(Selector(normalized))
    }

    /// Split a comma-separated selector list and validate each entry.
    ///
    /// ```
    /// use restyle::selector::Selector;
    ///
    /// let list = Selector::parse_list("h1,\n  h2 > a").unwrap();
    /// assert_eq!(list, vec![Selector::new("h1").unwrap(), Selector::new("h2 > a").unwrap()]);
    /// ```
    pub fn parse_list(text: &str) -> Result<Vec<Self>> {
        let normalized = normalize(text);
        validate(text, &normalized)?;
        split_top_level(&normalized)
            .into_iter()
            .map(|part| {
                let part = part.trim();
                if part.is_empty() {
                    Err(Error::invalid_selector(text, "empty selector in list"))
                } else {
                    Ok(Selector(part.to_string()))
                }
            })
            .collect()
    }

    /// The selector text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Selector {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Selector {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Selector {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::str::FromStr for Selector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Selector::new(s)
    }
}

impl Render for Selector {
    fn write_css<W: fmt::Write>(&self, dest: &mut CssWriter<'_, W>) -> fmt::Result {
        dest.write_str(&self.0)
    }
}

display_via_render!(Selector);

/// Collapse whitespace runs outside strings into single spaces and trim.
fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut pending_space = false;

    for c in text.trim().chars() {
        if let Some(q) = quote {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        if c == '"' || c == '\'' {
            quote = Some(c);
        }
        out.push(c);
    }
    out
}

fn validate(original: &str, text: &str) -> Result<()> {
    if text.is_empty() {
        return Err(Error::invalid_selector(original, "empty selector"));
    }

    let mut stack = Vec::new();
    let mut quote: Option<char> = None;
    let mut escaped = false;
    for c in text.chars() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '\\' => escaped = !escaped,
            _ if escaped => escaped = false,
            '"' | '\'' => quote = Some(c),
            '(' | '[' => stack.push(c),
            ')' | ']' => {
                let open = if c == ')' { '(' } else { '[' };
                if stack.pop() != Some(open) {
                    return Err(Error::invalid_selector(original, format!("unbalanced '{}'", c)));
                }
            }
            '{' | '}' | ';' => {
                return Err(Error::invalid_selector(original, format!("unexpected '{}'", c)));
            }
            _ => {}
        }
    }

    if quote.is_some() {
        return Err(Error::invalid_selector(original, "unterminated string"));
    }
    if let Some(open) = stack.pop() {
        return Err(Error::invalid_selector(original, format!("unclosed '{}'", open)));
    }
    Ok(())
}

/// Split on commas that are not nested in parentheses, brackets or strings.
fn split_top_level(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut start = 0;

    for (i, c) in text.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        if c == '\\' {
            escaped = true;
            continue;
        }
        if let Some(q) = quote {
            if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => quote = Some(c),
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);
    parts
}
