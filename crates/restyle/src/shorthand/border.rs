//! `border` and the per-side `border-top|right|bottom|left` shorthands.

use super::{KeywordTables, collect_longhands, expand_each, left_untouched};
use crate::rules::RuleSet;
use crate::types::Value;

/// Shorthands expanded by [`expand`].
pub const SHORTHANDS: &[&str] = &["border", "border-top", "border-right", "border-bottom", "border-left"];

/// Aspects in output order.
const ASPECTS: [&str; 3] = ["width", "style", "color"];

/// `border: 1px solid red` → `border-width`, `border-style`, `border-color`.
///
/// Only the aspects present in the value are emitted.
pub fn expand(rules: &mut RuleSet, tables: &KeywordTables) {
    expand_each(rules, SHORTHANDS, |rule| {
        let value = rule.value();
        if tables.is_css_wide(value) || value.is_comma_list() {
            left_untouched(rule, "not a single border value");
            return None;
        }

        let mut aspects: [Option<&Value>; 3] = [None; 3];
        for component in value.components() {
            let slot = if tables.is_border_style(component) {
                1
            } else if tables.is_color(component) {
                2
            } else if tables.is_border_width(component) {
                0
            } else {
                continue;
            };
            aspects[slot].get_or_insert(component);
        }

        if aspects.iter().all(Option::is_none) {
            left_untouched(rule, "no recognizable component");
            return None;
        }
        Some(
            ASPECTS
                .iter()
                .zip(aspects)
                .filter_map(|(aspect, value)| {
                    value.map(|value| rule.derive(format!("{}-{}", rule.name(), aspect), value.clone()))
                })
                .collect(),
        )
    });
}

/// `border-width`, `border-style`, `border-color` → `border`.
///
/// Each longhand must hold a single component; per-side lists stay as they
/// are.
pub fn create(rules: &mut RuleSet, tables: &KeywordTables) {
    const NAMES: [&str; 3] = ["border-width", "border-style", "border-color"];

    let plan = collect_longhands(rules, &NAMES).and_then(|longhands| {
        if longhands.any(|value| value.as_list().is_some() || tables.is_css_wide(value)) {
            return None;
        }
        let parts = NAMES
            .iter()
            .filter_map(|name| longhands.get(name).cloned())
            .collect();
        Some(longhands.merge("border", Value::space_list(parts)))
    });
    super::apply(rules, plan);
}
