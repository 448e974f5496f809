//! Four-sided box properties: `margin`, `padding`, `border-width`,
//! `border-style`, `border-color`.

use super::{KeywordTables, collect_longhands, expand_each, left_untouched};
use crate::rules::RuleSet;
use crate::types::Value;

/// Shorthands handled here.
pub const FAMILIES: &[&str] = &["margin", "padding", "border-width", "border-style", "border-color"];

/// Side names in CSS order.
pub const SIDES: [&str; 4] = ["top", "right", "bottom", "left"];

/// One value per side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sides<T> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

impl<T: Clone> Sides<T> {
    /// The same value on every side.
    pub fn uniform(value: T) -> Self {
        Self::symmetric(value.clone(), value)
    }

    /// Create symmetric sides (vertical, horizontal).
    pub fn symmetric(vertical: T, horizontal: T) -> Self {
        Self {
            top: vertical.clone(),
            right: horizontal.clone(),
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Create from 4 values (top, right, bottom, left).
    pub fn new(top: T, right: T, bottom: T, left: T) -> Self {
        Self { top, right, bottom, left }
    }

    /// Apply the 1-to-4 value rule of box shorthands.
    pub fn from_values(values: &[T]) -> Option<Self> {
        match values {
            [all] => Some(Self::uniform(all.clone())),
            [vertical, horizontal] => Some(Self::symmetric(vertical.clone(), horizontal.clone())),
            [top, horizontal, bottom] => Some(Self::new(top.clone(), horizontal.clone(), bottom.clone(), horizontal.clone())),
            [top, right, bottom, left] => Some(Self::new(top.clone(), right.clone(), bottom.clone(), left.clone())),
            _ => None,
        }
    }

    /// Values in top, right, bottom, left order.
    pub fn into_array(self) -> [T; 4] {
        [self.top, self.right, self.bottom, self.left]
    }
}

impl<T: Clone + PartialEq> Sides<T> {
    /// Shortest value list that [`from_values`](Self::from_values) maps
    /// back to these sides.
    pub fn minimal(&self) -> Vec<T> {
        let Self { top, right, bottom, left } = self;
        if right == left {
            if top == bottom {
                if top == right {
                    return vec![top.clone()];
                }
                return vec![top.clone(), right.clone()];
            }
            return vec![top.clone(), right.clone(), bottom.clone()];
        }
        vec![top.clone(), right.clone(), bottom.clone(), left.clone()]
    }
}

/// Longhand name for `side` of `family` (`margin-top`, `border-top-width`).
pub fn side_name(family: &str, side: &str) -> String {
    match family.strip_prefix("border-") {
        Some(aspect) => format!("border-{}-{}", side, aspect),
        None => format!("{}-{}", family, side),
    }
}

/// `margin: 1em 2em` → `margin-top: 1em; margin-right: 2em; ...`
pub fn expand(rules: &mut RuleSet, _tables: &KeywordTables) {
    expand_each(rules, FAMILIES, |rule| {
        let value = rule.value();
        if value.is_comma_list() {
            left_untouched(rule, "comma-separated value");
            return None;
        }
        let components: Vec<Value> = value.components().into_iter().cloned().collect();
        let Some(sides) = Sides::from_values(&components) else {
            left_untouched(rule, "more than four components");
            return None;
        };
        Some(
            SIDES
                .iter()
                .zip(sides.into_array())
                .map(|(side, value)| rule.derive(side_name(rule.name(), side), value))
                .collect(),
        )
    });
}

/// Four side longhands → the minimal shorthand, per family.
pub fn create(rules: &mut RuleSet, tables: &KeywordTables) {
    for family in FAMILIES {
        let names: Vec<String> = SIDES.iter().map(|side| side_name(family, side)).collect();
        let names: Vec<&str> = names.iter().map(String::as_str).collect();

        let plan = collect_longhands(rules, &names).and_then(|longhands| {
            let [top, right, bottom, left] = [names[0], names[1], names[2], names[3]].map(|name| longhands.get(name));
            let sides = Sides::new(top?, right?, bottom?, left?);
            if longhands.any(|value| value.as_list().is_some()) {
                return None;
            }
            let values: Vec<Value> = sides.minimal().into_iter().cloned().collect();
            if values.len() > 1 && values.iter().any(|value| tables.is_css_wide(value)) {
                return None;
            }
            Some(longhands.merge(family, Value::space_list(values)))
        });
        super::apply(rules, plan);
    }
}
