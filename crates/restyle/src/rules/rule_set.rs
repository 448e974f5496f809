//! Ordered declaration list.

use std::fmt;

use indexmap::IndexMap;

use super::{Rule, RuleId};
use crate::render::{CssWriter, Render, display_via_render};

/// What [`RuleSet::remove_rule`] should remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleTarget<'a> {
    /// The rule with this identity.
    Id(RuleId),
    /// Every rule matching this name or family pattern (see
    /// [`RuleSet::get_rules`]).
    Name(&'a str),
}

impl From<RuleId> for RuleTarget<'_> {
    fn from(id: RuleId) -> Self {
        RuleTarget::Id(id)
    }
}

impl<'a> From<&'a str> for RuleTarget<'a> {
    fn from(name: &'a str) -> Self {
        RuleTarget::Name(name)
    }
}

impl From<&Rule> for RuleTarget<'_> {
    fn from(rule: &Rule) -> Self {
        RuleTarget::Id(rule.id())
    }
}

/// Whether `name` matches `pattern`.
///
/// A pattern ending in `-` is a family: it matches every name starting with
/// it, and the bare family name itself (`font-` matches `font` and
/// `font-size`). Any other pattern must match exactly.
pub fn matches_pattern(name: &str, pattern: &str) -> bool {
    match pattern.strip_suffix('-') {
        Some(family) if !family.is_empty() => name.starts_with(pattern) || name == family,
        _ => name == pattern,
    }
}

/// The ordered declarations of a block.
///
/// Order is insertion/parse order unless a position is requested
/// explicitly. Duplicate names are kept; for reads that need one winner the
/// later declaration wins ([`get_rules_assoc`](Self::get_rules_assoc),
/// [`get_rule`](Self::get_rule)).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `rule` directly before the rule identified by `before`, or
    /// append it when `before` is `None` or not in this set.
    pub fn add_rule(&mut self, rule: Rule, before: Option<RuleId>) -> RuleId {
        let id = rule.id();
        match before.and_then(|sibling| self.position(sibling)) {
            Some(index) => self.rules.insert(index, rule),
            None => self.rules.push(rule),
        }
        id
    }

    /// All rules in order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Iterate over rules in order.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Number of rules, duplicates included.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether there are no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules matching `pattern` in order; all rules when `pattern` is `None`.
    ///
    /// See [`matches_pattern`] for the family (`text-`) form.
    pub fn get_rules(&self, pattern: Option<&str>) -> Vec<&Rule> {
        self.rules
            .iter()
            .filter(|rule| pattern.is_none_or(|p| matches_pattern(rule.name(), p)))
            .collect()
    }

    /// Cascade-resolved view: the last rule for each name, keyed in order of
    /// each name's first occurrence.
    pub fn get_rules_assoc(&self, pattern: Option<&str>) -> IndexMap<&str, &Rule> {
        let mut assoc = IndexMap::new();
        for rule in self.get_rules(pattern) {
            assoc.insert(rule.name(), rule);
        }
        assoc
    }

    /// The winning (last) rule with exactly this name.
    pub fn get_rule(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().rev().find(|rule| rule.name() == name)
    }

    /// The rule with this identity.
    pub fn rule(&self, id: RuleId) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.id() == id)
    }

    /// Mutable access to the rule with this identity.
    pub fn rule_mut(&mut self, id: RuleId) -> Option<&mut Rule> {
        self.rules.iter_mut().find(|rule| rule.id() == id)
    }

    /// Index of the rule with this identity.
    pub fn position(&self, id: RuleId) -> Option<usize> {
        self.rules.iter().position(|rule| rule.id() == id)
    }

    /// Replace the whole sequence at once.
    pub fn set_rules(&mut self, rules: impl IntoIterator<Item = Rule>) {
        self.rules = rules.into_iter().collect();
    }

    /// Remove every rule matching `target`; returns how many were removed.
    pub fn remove_rule<'a>(&mut self, target: impl Into<RuleTarget<'a>>) -> usize {
        let before = self.rules.len();
        match target.into() {
            RuleTarget::Id(id) => self.rules.retain(|rule| rule.id() != id),
            RuleTarget::Name(pattern) => self.rules.retain(|rule| !matches_pattern(rule.name(), pattern)),
        }
        before - self.rules.len()
    }

    /// Replace the rule `id` with `replacements`, in place.
    ///
    /// Returns `false` (and changes nothing) if `id` is not in this set.
    pub fn splice_rule(&mut self, id: RuleId, replacements: Vec<Rule>) -> bool {
        match self.position(id) {
            Some(index) => {
                self.rules.splice(index..=index, replacements);
                true
            }
            None => false,
        }
    }

    /// Remove the rules in `ids` and insert `replacement` where the earliest
    /// of them stood.
    ///
    /// Returns `None` (and changes nothing) if none of `ids` is in this set.
    pub fn replace_rules(&mut self, ids: &[RuleId], replacement: Rule) -> Option<RuleId> {
        let index = self
            .rules
            .iter()
            .position(|rule| ids.contains(&rule.id()))?;
        self.rules.retain(|rule| !ids.contains(&rule.id()));
        let id = replacement.id();
        self.rules.insert(index, replacement);
        Some(id)
    }

    /// Consume the set, returning its rules.
    pub fn into_rules(self) -> Vec<Rule> {
        self.rules
    }
}

impl From<Vec<Rule>> for RuleSet {
    fn from(rules: Vec<Rule>) -> Self {
        Self { rules }
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl Render for RuleSet {
    fn write_css<W: fmt::Write>(&self, dest: &mut CssWriter<'_, W>) -> fmt::Result {
        let format = dest.format();
        let last = self.rules.len().saturating_sub(1);
        for (i, rule) in self.rules.iter().enumerate() {
            if i > 0 {
                dest.space(&format.space_between_rules)?;
            }
            rule.write_declaration(dest)?;
            if i < last || format.semicolon_after_last_rule {
                dest.write_str(";")?;
            }
        }
        Ok(())
    }
}

display_via_render!(RuleSet);
