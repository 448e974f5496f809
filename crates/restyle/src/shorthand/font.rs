//! `font` ⇄ `font-style`, `font-variant`, `font-weight`, `font-size`,
//! `line-height`, `font-family`.

use super::{KeywordTables, collect_longhands, expand_each, left_untouched};
use crate::rules::RuleSet;
use crate::types::{Separator, Value};

/// Longhands in output order.
pub const LONGHANDS: [&str; 6] = [
    "font-style",
    "font-variant",
    "font-weight",
    "font-size",
    "line-height",
    "font-family",
];

/// Parsed `font` components.
struct FontParts {
    style: Option<Value>,
    variant: Option<Value>,
    weight: Option<Value>,
    size: Value,
    line_height: Option<Value>,
    family: Value,
}

impl FontParts {
    fn parse(value: &Value, tables: &KeywordTables) -> Option<Self> {
        // A comma list keeps every component up to the first family in its
        // first item; later items are fallback families.
        let (head, fallbacks): (Vec<&Value>, &[Value]) = match value.as_list() {
            Some(list) if list.separator == Separator::Comma => {
                let (first, rest) = list.items.split_first()?;
                (first.components(), rest)
            }
            _ => (value.components(), &[][..]),
        };

        let (mut style, mut variant, mut weight) = (None, None, None);
        let mut size = None;
        let mut rest = head.iter();
        for component in rest.by_ref() {
            if component.is_keyword("normal") {
                continue;
            }
            if tables.is_font_style(component) {
                style.get_or_insert_with(|| (*component).clone());
            } else if tables.is_font_variant(component) {
                variant.get_or_insert_with(|| (*component).clone());
            } else if tables.is_font_weight(component) {
                weight.get_or_insert_with(|| (*component).clone());
            } else if tables.is_font_size(component) {
                size = Some(((*component).clone(), None));
                break;
            } else if let Value::Pair(first, second) = component
                && tables.is_font_size(first)
            {
                size = Some(((**first).clone(), Some((**second).clone())));
                break;
            }
        }
        let (size, line_height) = size?;

        let first_family: Vec<Value> = rest.map(|component| (*component).clone()).collect();
        if first_family.is_empty() {
            return None;
        }
        let family = if fallbacks.is_empty() {
            Value::space_list(first_family)
        } else {
            let mut families = vec![Value::space_list(first_family)];
            families.extend(fallbacks.iter().cloned());
            Value::comma_list(families)
        };

        Some(Self {
            style,
            variant,
            weight,
            size,
            line_height,
            family,
        })
    }
}

/// `font: italic bold 12px/1.6 serif` → six longhands, absent parts `normal`.
pub fn expand(rules: &mut RuleSet, tables: &KeywordTables) {
    expand_each(rules, &["font"], |rule| {
        if tables.is_css_wide(rule.value()) {
            left_untouched(rule, "CSS-wide keyword");
            return None;
        }
        let Some(parts) = FontParts::parse(rule.value(), tables) else {
            left_untouched(rule, "missing font size or family");
            return None;
        };

        let normal = || Value::keyword("normal");
        let values = [
            parts.style.unwrap_or_else(normal),
            parts.variant.unwrap_or_else(normal),
            parts.weight.unwrap_or_else(normal),
            parts.size,
            parts.line_height.unwrap_or_else(normal),
            parts.family,
        ];
        Some(
            LONGHANDS
                .iter()
                .zip(values)
                .map(|(name, value)| rule.derive(*name, value))
                .collect(),
        )
    });
}

/// Six (or fewer) longhands → `font`. Needs `font-size` and `font-family`.
pub fn create(rules: &mut RuleSet, tables: &KeywordTables) {
    let plan = collect_longhands(rules, &LONGHANDS).and_then(|longhands| {
        let size = longhands.get("font-size")?;
        let family = longhands.get("font-family")?;
        if longhands.any(|value| tables.is_css_wide(value)) {
            return None;
        }

        let explicit = |name: &str| longhands.get(name).filter(|value| !value.is_keyword("normal"));
        let mut head: Vec<Value> = ["font-style", "font-variant", "font-weight"]
            .into_iter()
            .filter_map(explicit)
            .cloned()
            .collect();
        head.push(match explicit("line-height") {
            Some(line_height) => Value::pair(size.clone(), line_height.clone()),
            None => size.clone(),
        });

        let value = match family.as_list() {
            Some(list) if list.separator == Separator::Comma => {
                let (first, fallbacks) = list.items.split_first()?;
                head.extend(first.components().into_iter().cloned());
                let mut families = vec![Value::space_list(head)];
                families.extend(fallbacks.iter().cloned());
                Value::comma_list(families)
            }
            _ => {
                head.extend(family.components().into_iter().cloned());
                Value::space_list(head)
            }
        };
        Some(longhands.merge("font", value))
    });
    super::apply(rules, plan);
}
