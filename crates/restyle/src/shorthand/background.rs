//! `background` ⇄ `background-color`, `background-image`,
//! `background-repeat`, `background-attachment`, `background-position`.
//!
//! Only single-layer backgrounds are rewritten; a comma-separated
//! `background` is left as it is.

use super::{KeywordTables, collect_longhands, expand_each, left_untouched};
use crate::rules::RuleSet;
use crate::types::{Size, Value};

/// Longhands in output order.
pub const LONGHANDS: [&str; 5] = [
    "background-color",
    "background-image",
    "background-repeat",
    "background-attachment",
    "background-position",
];

fn default_position() -> Value {
    Value::space_list(vec![Size::percent(0.0).into(), Size::percent(0.0).into()])
}

fn is_default_position(value: &Value) -> bool {
    let components = value.components();
    components.len() == 2
        && components.iter().all(|component| {
            component
                .as_size()
                .is_some_and(|size| size.is_zero() && matches!(size.unit(), None | Some("%")))
        })
}

/// `background: #f00 url(x.png)` → five longhands, absent parts at their
/// initial values.
pub fn expand(rules: &mut RuleSet, tables: &KeywordTables) {
    expand_each(rules, &["background"], |rule| {
        let value = rule.value();
        if tables.is_css_wide(value) || value.is_comma_list() {
            left_untouched(rule, "not a single background layer");
            return None;
        }

        let (mut color, mut image, mut repeat, mut attachment) = (None, None, None, None);
        let mut position = Vec::new();
        for component in value.components() {
            if tables.is_color(component) {
                color.get_or_insert(component);
            } else if tables.is_image(component) {
                image.get_or_insert(component);
            } else if tables.is_background_repeat(component) {
                repeat.get_or_insert(component);
            } else if tables.is_background_attachment(component) {
                attachment.get_or_insert(component);
            } else if tables.is_background_position(component) {
                position.push(component.clone());
            }
        }

        if color.is_none() && image.is_none() && repeat.is_none() && attachment.is_none() && position.is_empty() {
            left_untouched(rule, "no recognizable component");
            return None;
        }
        if position.len() == 1 {
            position.push(position[0].clone());
        }
        let position = if position.is_empty() {
            default_position()
        } else {
            Value::space_list(position)
        };

        let or = |part: Option<&Value>, fallback: &str| part.cloned().unwrap_or_else(|| Value::keyword(fallback));
        let values = [
            or(color, "transparent"),
            or(image, "none"),
            or(repeat, "repeat"),
            or(attachment, "scroll"),
            position,
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

/// Background longhands → `background`, leaving out initial values.
pub fn create(rules: &mut RuleSet, tables: &KeywordTables) {
    let plan = collect_longhands(rules, &LONGHANDS).and_then(|longhands| {
        if longhands.any(|value| value.is_comma_list() || tables.is_css_wide(value)) {
            return None;
        }

        let mut parts = Vec::new();
        if let Some(color) = longhands.get("background-color") {
            parts.push(color.clone());
        }
        let non_initial = |name: &str, initial: &str| longhands.get(name).filter(|value| !value.is_keyword(initial));
        parts.extend(non_initial("background-image", "none").cloned());
        parts.extend(non_initial("background-repeat", "repeat").cloned());
        parts.extend(non_initial("background-attachment", "scroll").cloned());

        if let Some(position) = longhands.get("background-position")
            && !is_default_position(position)
        {
            let components = position.components();
            match components.as_slice() {
                [first, second] if first.is_keyword("center") && second.is_keyword("center") => {
                    parts.push(Value::keyword("center"));
                }
                _ => parts.extend(components.into_iter().cloned()),
            }
        }

        let value = if parts.is_empty() {
            Value::keyword("none")
        } else {
            Value::space_list(parts)
        };
        Some(longhands.merge("background", value))
    });
    super::apply(rules, plan);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DeclarationBlock;

    fn expanded(css: &str) -> String {
        let mut block = DeclarationBlock::from_css(css).unwrap();
        block.expand_background_shorthand();
        block.to_string()
    }

    fn created(css: &str) -> String {
        let mut block = DeclarationBlock::from_css(css).unwrap();
        block.create_background_shorthand();
        block.to_string()
    }

    #[test]
    fn expands_with_initial_values() {
        assert_eq!(
            expanded("div {background: url(a.png) fixed}"),
            "div {background-color: transparent;background-image: url(\"a.png\");background-repeat: repeat;background-attachment: fixed;background-position: 0% 0%;}"
        );
    }

    #[test]
    fn duplicates_a_single_position() {
        assert_eq!(
            expanded("div {background: red 10px}"),
            "div {background-color: red;background-image: none;background-repeat: repeat;background-attachment: scroll;background-position: 10px 10px;}"
        );
    }

    #[test]
    fn leaves_layers_and_css_wide_values() {
        assert_eq!(expanded("div {background: url(a.png), red}"), "div {background: url(\"a.png\"), red;}");
        assert_eq!(expanded("div {background: inherit}"), "div {background: inherit;}");
    }

    #[test]
    fn creates_from_initial_values_only() {
        assert_eq!(
            created("div {background-image: none;background-repeat: repeat;background-position: 0% 0%}"),
            "div {background: none;}"
        );
    }

    #[test]
    fn collapses_centered_position() {
        assert_eq!(
            created("div {background-position: center center;background-color: transparent}"),
            "div {background: transparent center;}"
        );
    }
}
