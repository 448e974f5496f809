//! At-rule nodes.

use std::fmt;

use super::CssList;
use crate::render::{CssWriter, Render, display_via_render};
use crate::rules::RuleSet;

/// At-rules whose block holds declarations rather than nested rules.
pub const DECLARATION_AT_RULES: &[&str] = &["font-face", "page", "viewport", "counter-style", "property"];

/// Whether `@name { ... }` holds declarations.
pub fn holds_declarations(name: &str) -> bool {
    let name = name.trim_start_matches(|c| c == '-').to_ascii_lowercase();
    DECLARATION_AT_RULES.iter().any(|known| {
        name == *known || name.split_once('-').is_some_and(|(_vendor, rest)| rest == *known)
    })
}

/// `@name arguments;`, e.g. `@import url("a.css") screen;`.
#[derive(Debug, Clone, PartialEq)]
pub struct AtRuleStatement {
    name: String,
    arguments: String,
}

impl AtRuleStatement {
    pub fn new(name: impl Into<String>, arguments: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: arguments.into(),
        }
    }

    /// At-keyword without `@`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Prelude text after the name.
    pub fn arguments(&self) -> &str {
        &self.arguments
    }

    pub fn set_arguments(&mut self, arguments: impl Into<String>) {
        self.arguments = arguments.into();
    }
}

/// `@name arguments { declarations }`, e.g. `@font-face`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AtRuleSet {
    name: String,
    arguments: String,
    rules: RuleSet,
}

impl AtRuleSet {
    pub fn new(name: impl Into<String>, arguments: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: arguments.into(),
            rules: RuleSet::new(),
        }
    }

    pub(crate) fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arguments(&self) -> &str {
        &self.arguments
    }

    pub fn rule_set(&self) -> &RuleSet {
        &self.rules
    }

    pub fn rule_set_mut(&mut self) -> &mut RuleSet {
        &mut self.rules
    }
}

/// `@name arguments { nested rules }`, e.g. `@media`, `@supports`,
/// `@keyframes`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AtRuleBlock {
    name: String,
    arguments: String,
    contents: CssList,
}

impl AtRuleBlock {
    pub fn new(name: impl Into<String>, arguments: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: arguments.into(),
            contents: CssList::new(),
        }
    }

    pub(crate) fn with_contents(mut self, contents: CssList) -> Self {
        self.contents = contents;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arguments(&self) -> &str {
        &self.arguments
    }

    pub fn set_arguments(&mut self, arguments: impl Into<String>) {
        self.arguments = arguments.into();
    }

    /// Nested nodes.
    pub fn contents(&self) -> &CssList {
        &self.contents
    }

    pub fn contents_mut(&mut self) -> &mut CssList {
        &mut self.contents
    }
}

fn write_prelude<W: fmt::Write>(dest: &mut CssWriter<'_, W>, name: &str, arguments: &str) -> fmt::Result {
    dest.write_str("@")?;
    dest.write_identifier(name)?;
    if !arguments.is_empty() {
        dest.write_str(" ")?;
        dest.write_str(arguments)?;
    }
    Ok(())
}

/// Write `{`, the body one level deeper, and `}`.
pub(crate) fn write_body<W, F>(dest: &mut CssWriter<'_, W>, empty: bool, body: F) -> fmt::Result
where
    W: fmt::Write,
    F: FnOnce(&mut CssWriter<'_, W>) -> fmt::Result,
{
    let format = dest.format();
    dest.space(&format.space_before_opening_brace)?;
    dest.write_str("{")?;
    if !empty {
        dest.nested(|dest| {
            dest.space(&format.space_before_rules)?;
            body(dest)
        })?;
        dest.space(&format.space_after_rules)?;
    }
    dest.write_str("}")
}

impl Render for AtRuleStatement {
    fn write_css<W: fmt::Write>(&self, dest: &mut CssWriter<'_, W>) -> fmt::Result {
        write_prelude(dest, &self.name, &self.arguments)?;
        dest.write_str(";")
    }
}

impl Render for AtRuleSet {
    fn write_css<W: fmt::Write>(&self, dest: &mut CssWriter<'_, W>) -> fmt::Result {
        write_prelude(dest, &self.name, &self.arguments)?;
        write_body(dest, self.rules.is_empty(), |dest| self.rules.write_css(dest))
    }
}

impl Render for AtRuleBlock {
    fn write_css<W: fmt::Write>(&self, dest: &mut CssWriter<'_, W>) -> fmt::Result {
        write_prelude(dest, &self.name, &self.arguments)?;
        write_body(dest, self.contents.is_empty(), |dest| self.contents.write_css(dest))
    }
}

display_via_render!(AtRuleStatement, AtRuleSet, AtRuleBlock);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declaration_at_rules() {
        assert!(holds_declarations("font-face"));
        assert!(holds_declarations("-webkit-viewport"));
        assert!(holds_declarations("PAGE"));
        assert!(!holds_declarations("media"));
        assert!(!holds_declarations("keyframes"));
    }

    #[test]
    fn statement_rendering() {
        assert_eq!(AtRuleStatement::new("charset", "\"utf-8\"").to_string(), "@charset \"utf-8\";");
        assert_eq!(AtRuleBlock::new("media", "print").to_string(), "@media print {}");
    }
}
