//! Shorthand/longhand rewriting.
//!
//! Each family module has an `expand` (shorthand to longhands) and a
//! `create` (longhands to shorthand) transform over a [`RuleSet`]. The
//! transforms never fail: a value they cannot classify is left as it is.
//! Replacements always take the position of the first rule they replace,
//! so declarations that follow (and override) them keep their order.

pub mod background;
pub mod border;
pub mod dimensions;
pub mod font;
mod tables;

pub use dimensions::Sides;
pub use tables::KeywordTables;

use indexmap::IndexMap;

use crate::rules::{Rule, RuleId, RuleSet};
use crate::types::Value;

/// Expand border, dimensions, font and background shorthands, in that order.
pub fn expand_all(rules: &mut RuleSet, tables: &KeywordTables) {
    border::expand(rules, tables);
    dimensions::expand(rules, tables);
    font::expand(rules, tables);
    background::expand(rules, tables);
}

/// Create background, dimensions, border and font shorthands, in that order.
pub fn create_all(rules: &mut RuleSet, tables: &KeywordTables) {
    background::create(rules, tables);
    dimensions::create(rules, tables);
    border::create(rules, tables);
    font::create(rules, tables);
}

/// Replace every rule named in `names` by the rules `expand_one` returns for
/// it. `None` leaves the rule untouched.
pub(crate) fn expand_each<F>(rules: &mut RuleSet, names: &[&str], mut expand_one: F)
where
    F: FnMut(&Rule) -> Option<Vec<Rule>>,
{
    let targets: Vec<RuleId> = rules
        .iter()
        .filter(|rule| names.contains(&rule.name()))
        .map(Rule::id)
        .collect();

    for id in targets {
        let Some(replacement) = rules.rule(id).and_then(&mut expand_one) else {
            continue;
        };
        rules.splice_rule(id, replacement);
    }
}

pub(crate) fn left_untouched(rule: &Rule, reason: &str) {
    tracing::debug!(property = rule.name(), value = %rule.value(), reason, "shorthand not expanded");
}

/// The longhands a create transform would consume.
pub(crate) struct Longhands<'a> {
    /// Earliest consumed rule; the shorthand takes its place and flags.
    pub first: &'a Rule,
    pub ids: Vec<RuleId>,
    /// Winning value per name.
    pub values: IndexMap<&'a str, &'a Value>,
}

impl<'a> Longhands<'a> {
    pub fn get(&self, name: &str) -> Option<&'a Value> {
        self.values.get(name).copied()
    }

    pub fn any(&self, predicate: impl Fn(&Value) -> bool) -> bool {
        self.values.values().any(|value| predicate(value))
    }

    /// The shorthand rule that replaces these longhands.
    pub fn merge(&self, name: &str, value: Value) -> (Vec<RuleId>, Rule) {
        (self.ids.clone(), self.first.derive(name, value))
    }
}

/// Gather the rules named in `names`, if there are any and they agree on
/// importance.
pub(crate) fn collect_longhands<'a>(rules: &'a RuleSet, names: &[&str]) -> Option<Longhands<'a>> {
    let matched: Vec<&Rule> = rules.iter().filter(|rule| names.contains(&rule.name())).collect();
    let first = *matched.first()?;
    if matched.iter().any(|rule| rule.is_important() != first.is_important()) {
        tracing::debug!(property = first.name(), "longhands differ in importance, not merging");
        return None;
    }
    Some(Longhands {
        first,
        ids: matched.iter().map(|rule| rule.id()).collect(),
        values: matched.iter().map(|rule| (rule.name(), rule.value())).collect(),
    })
}

/// Apply a planned merge.
pub(crate) fn apply(rules: &mut RuleSet, plan: Option<(Vec<RuleId>, Rule)>) {
    if let Some((ids, replacement)) = plan {
        rules.replace_rules(&ids, replacement);
    }
}
