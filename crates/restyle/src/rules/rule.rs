//! Single declaration (`name: value !important`).

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::render::{CssWriter, Render, display_via_render};
use crate::types::Value;

static NEXT_RULE_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a [`Rule`], unique within the process.
///
/// Positional operations on a [`RuleSet`](super::RuleSet) take a `RuleId`
/// instead of a reference so that the set can be mutated while the caller
/// still knows which rule it meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleId(u64);

impl RuleId {
    fn next() -> Self {
        RuleId(NEXT_RULE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A property declaration.
///
/// Each rule has:
/// - A property name (`margin-top`)
/// - An owned [`Value`] tree
/// - An `!important` flag
/// - The source position it was parsed from (diagnostic only)
///
/// Cloning a rule yields a distinct rule with its own [`RuleId`]. Equality
/// compares name, value and importance, never identity.
#[derive(Debug)]
pub struct Rule {
    id: RuleId,
    name: String,
    value: Value,
    important: bool,
    line: u32,
    column: u32,
}

impl Rule {
    /// Create a rule.
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            id: RuleId::next(),
            name: name.into(),
            value: value.into(),
            important: false,
            line: 0,
            column: 0,
        }
    }

    /// Set the importance flag (builder form).
    pub fn important(mut self, important: bool) -> Self {
        self.important = important;
        self
    }

    pub(crate) fn at(mut self, line: u32, column: u32) -> Self {
        self.line = line;
        self.column = column;
        self
    }

    /// A new rule that takes this rule's importance and source position.
    pub(crate) fn derive(&self, name: impl Into<String>, value: Value) -> Self {
        Rule::new(name, value)
            .important(self.important)
            .at(self.line, self.column)
    }

    /// This rule's identity.
    pub fn id(&self) -> RuleId {
        self.id
    }

    /// The property name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the property.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// The value tree.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Mutable access to the value tree.
    pub fn value_mut(&mut self) -> &mut Value {
        &mut self.value
    }

    /// Replace the value.
    pub fn set_value(&mut self, value: impl Into<Value>) {
        self.value = value.into();
    }

    /// Whether the declaration is `!important`.
    pub fn is_important(&self) -> bool {
        self.important
    }

    /// Set the `!important` flag.
    pub fn set_important(&mut self, important: bool) {
        self.important = important;
    }

    /// Source line (0 for rules built in code).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Source column (0 for rules built in code).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Write `name: value [!important]` without the terminating `;`.
    pub(crate) fn write_declaration<W: fmt::Write>(&self, dest: &mut CssWriter<'_, W>) -> fmt::Result {
        let format = dest.format();
        dest.write_identifier(&self.name)?;
        dest.write_str(":")?;
        dest.space(&format.space_after_rule_name)?;
        self.value.write_css(dest)?;
        if self.important {
            dest.space(&format.space_before_important)?;
            dest.write_str("!important")?;
        }
        Ok(())
    }
}

impl Clone for Rule {
    fn clone(&self) -> Self {
        Self {
            id: RuleId::next(),
            name: self.name.clone(),
            value: self.value.clone(),
            important: self.important,
            line: self.line,
            column: self.column,
        }
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.value == other.value && self.important == other.important
    }
}

impl Render for Rule {
    fn write_css<W: fmt::Write>(&self, dest: &mut CssWriter<'_, W>) -> fmt::Result {
        self.write_declaration(dest)?;
        dest.write_str(";")
    }
}

display_via_render!(Rule);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Size;

    #[test]
    fn rule_creation() {
        let rule = Rule::new("right", Size::px(-10.0));

        assert_eq!(rule.name(), "right");
        assert_eq!(rule.value(), &Value::Size(Size::px(-10.0)));
        assert!(!rule.is_important());
        assert_eq!(rule.to_string(), "right: -10px;");
    }

    #[test]
    fn important_rendering() {
        let rule = Rule::new("color", Value::keyword("red")).important(true);
        assert_eq!(rule.to_string(), "color: red !important;");
    }

    #[test]
    fn clones_get_fresh_identity() {
        let rule = Rule::new("left", Size::em(16.0));
        let copy = rule.clone();

        assert_eq!(rule, copy);
        assert_ne!(rule.id(), copy.id());
    }

    #[test]
    fn set_value_replaces_tree() {
        let mut rule = Rule::new("text-align", Value::keyword("left"));
        rule.set_value(Size::number(1.0));
        assert_eq!(rule.to_string(), "text-align: 1;");
    }
}
