//! Tests for declaration block editing and shorthand rewriting.

use pretty_assertions::assert_eq;
use restyle::prelude::*;

fn first_block(document: &mut Document) -> &mut DeclarationBlock {
    document
        .all_declaration_blocks_mut()
        .into_iter()
        .next()
        .expect("document has a declaration block")
}

fn rewrite(css: &str, transform: fn(&mut DeclarationBlock)) -> String {
    let mut document = parse(css).expect("Failed to parse stylesheet");
    for block in document.all_declaration_blocks_mut() {
        transform(block);
    }
    document.to_string()
}

fn check(cases: &[(&str, &str)], transform: fn(&mut DeclarationBlock)) {
    for (css, expected) in cases {
        assert_eq!(rewrite(css, transform), *expected, "input: {}", css);
    }
}

#[test]
fn test_expand_border_shorthand() {
    check(
        &[
            ("body{ border: 2px solid #000 }", "body {border-width: 2px;border-style: solid;border-color: #000;}"),
            ("body{ border: none }", "body {border-style: none;}"),
            ("body{ border: 2px }", "body {border-width: 2px;}"),
            ("body{ border: #f00 }", "body {border-color: #f00;}"),
            ("body{ border: 1em solid }", "body {border-width: 1em;border-style: solid;}"),
            ("body{ margin: 1em; }", "body {margin: 1em;}"),
        ],
        DeclarationBlock::expand_border_shorthand,
    );
}

#[test]
fn test_expand_font_shorthand() {
    check(
        &[
            ("body{ margin: 1em; }", "body {margin: 1em;}"),
            (
                "body {font: 12px serif;}",
                "body {font-style: normal;font-variant: normal;font-weight: normal;font-size: 12px;line-height: normal;font-family: serif;}",
            ),
            (
                "body {font: italic 12px serif;}",
                "body {font-style: italic;font-variant: normal;font-weight: normal;font-size: 12px;line-height: normal;font-family: serif;}",
            ),
            (
                "body {font: italic bold 12px serif;}",
                "body {font-style: italic;font-variant: normal;font-weight: bold;font-size: 12px;line-height: normal;font-family: serif;}",
            ),
            (
                "body {font: italic bold 12px/1.6 serif;}",
                "body {font-style: italic;font-variant: normal;font-weight: bold;font-size: 12px;line-height: 1.6;font-family: serif;}",
            ),
            (
                "body {font: italic small-caps bold 12px/1.6 serif;}",
                "body {font-style: italic;font-variant: small-caps;font-weight: bold;font-size: 12px;line-height: 1.6;font-family: serif;}",
            ),
        ],
        DeclarationBlock::expand_font_shorthand,
    );
}

#[test]
fn test_expand_background_shorthand() {
    check(
        &[
            ("body {border: 1px;}", "body {border: 1px;}"),
            (
                "body {background: #f00;}",
                "body {background-color: #f00;background-image: none;background-repeat: repeat;background-attachment: scroll;background-position: 0% 0%;}",
            ),
            (
                "body {background: #f00 url(\"foobar.png\");}",
                "body {background-color: #f00;background-image: url(\"foobar.png\");background-repeat: repeat;background-attachment: scroll;background-position: 0% 0%;}",
            ),
            (
                "body {background: #f00 url(\"foobar.png\") no-repeat;}",
                "body {background-color: #f00;background-image: url(\"foobar.png\");background-repeat: no-repeat;background-attachment: scroll;background-position: 0% 0%;}",
            ),
            (
                "body {background: #f00 url(\"foobar.png\") no-repeat center;}",
                "body {background-color: #f00;background-image: url(\"foobar.png\");background-repeat: no-repeat;background-attachment: scroll;background-position: center center;}",
            ),
            (
                "body {background: #f00 url(\"foobar.png\") no-repeat top left;}",
                "body {background-color: #f00;background-image: url(\"foobar.png\");background-repeat: no-repeat;background-attachment: scroll;background-position: top left;}",
            ),
        ],
        DeclarationBlock::expand_background_shorthand,
    );
}

#[test]
fn test_expand_dimensions_shorthand() {
    check(
        &[
            ("body {border: 1px;}", "body {border: 1px;}"),
            ("body {margin-top: 1px;}", "body {margin-top: 1px;}"),
            (
                "body {margin: 1em;}",
                "body {margin-top: 1em;margin-right: 1em;margin-bottom: 1em;margin-left: 1em;}",
            ),
            (
                "body {margin: 1em 2em;}",
                "body {margin-top: 1em;margin-right: 2em;margin-bottom: 1em;margin-left: 2em;}",
            ),
            (
                "body {margin: 1em 2em 3em;}",
                "body {margin-top: 1em;margin-right: 2em;margin-bottom: 3em;margin-left: 2em;}",
            ),
        ],
        DeclarationBlock::expand_dimensions_shorthand,
    );
}

#[test]
fn test_create_border_shorthand() {
    check(
        &[
            ("body {border-width: 2px;border-style: solid;border-color: #000;}", "body {border: 2px solid #000;}"),
            ("body {border-style: none;}", "body {border: none;}"),
            ("body {border-width: 1em;border-style: solid;}", "body {border: 1em solid;}"),
            ("body {margin: 1em;}", "body {margin: 1em;}"),
        ],
        DeclarationBlock::create_border_shorthand,
    );
}

#[test]
fn test_create_font_shorthand() {
    check(
        &[
            ("body {font-size: 12px; font-family: serif}", "body {font: 12px serif;}"),
            ("body {font-size: 12px; font-family: serif; font-style: italic;}", "body {font: italic 12px serif;}"),
            (
                "body {font-size: 12px; font-family: serif; font-style: italic; font-weight: bold;}",
                "body {font: italic bold 12px serif;}",
            ),
            (
                "body {font-size: 12px; font-family: serif; font-style: italic; font-weight: bold; line-height: 1.6;}",
                "body {font: italic bold 12px/1.6 serif;}",
            ),
            (
                "body {font-size: 12px; font-family: serif; font-style: italic; font-weight: bold; line-height: 1.6; font-variant: small-caps;}",
                "body {font: italic small-caps bold 12px/1.6 serif;}",
            ),
            ("body {margin: 1em;}", "body {margin: 1em;}"),
        ],
        DeclarationBlock::create_font_shorthand,
    );
}

#[test]
fn test_create_dimensions_shorthand() {
    check(
        &[
            ("body {border: 1px;}", "body {border: 1px;}"),
            ("body {margin-top: 1px;}", "body {margin-top: 1px;}"),
            ("body {margin-top: 1em; margin-right: 1em; margin-bottom: 1em; margin-left: 1em;}", "body {margin: 1em;}"),
            ("body {margin-top: 1em; margin-right: 2em; margin-bottom: 1em; margin-left: 2em;}", "body {margin: 1em 2em;}"),
            (
                "body {margin-top: 1em; margin-right: 2em; margin-bottom: 3em; margin-left: 2em;}",
                "body {margin: 1em 2em 3em;}",
            ),
        ],
        DeclarationBlock::create_dimensions_shorthand,
    );
}

#[test]
fn test_create_background_shorthand() {
    check(
        &[
            ("body {border: 1px;}", "body {border: 1px;}"),
            ("body {background-color: #f00;}", "body {background: #f00;}"),
            (
                "body {background-color: #f00;background-image: url(foobar.png);}",
                "body {background: #f00 url(\"foobar.png\");}",
            ),
            (
                "body {background-color: #f00;background-image: url(foobar.png);background-repeat: no-repeat;}",
                "body {background: #f00 url(\"foobar.png\") no-repeat;}",
            ),
            (
                "body {background-color: #f00;background-image: url(foobar.png);background-repeat: no-repeat;background-position: center;}",
                "body {background: #f00 url(\"foobar.png\") no-repeat center;}",
            ),
            (
                "body {background-color: #f00;background-image: url(foobar.png);background-repeat: no-repeat;background-position: top left;}",
                "body {background: #f00 url(\"foobar.png\") no-repeat top left;}",
            ),
        ],
        DeclarationBlock::create_background_shorthand,
    );
}

#[test]
fn test_override_rules() {
    let mut document = parse(".wrapper { left: 10px; text-align: left; }").expect("Failed to parse stylesheet");
    let block = first_block(&mut document);
    block.set_rules([Rule::new("right", Value::parse("-10px").expect("valid value"))]);

    let rules = block.get_rules(None);
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].name(), "right");
    assert_eq!(document.to_string(), ".wrapper {right: -10px;}");
}

#[test]
fn test_rule_insertion() {
    let mut document = parse(".wrapper { left: 10px; text-align: left; }").expect("Failed to parse stylesheet");
    let block = first_block(&mut document);

    let left = block.get_rules(Some("left"));
    assert_eq!(left.len(), 1);
    let first_id = left[0].id();
    let text = block.get_rules(Some("text-"));
    assert_eq!(text.len(), 1);
    let second_id = text[0].id();

    block.add_rule(Rule::new("border-bottom-width", Size::px(1.0)), None);
    block.add_rule(Rule::new("left", Size::em(16.0)), Some(first_id));
    block.add_rule(Rule::new("text-align", Size::number(1.0)), Some(second_id));

    assert_eq!(
        document.to_string(),
        ".wrapper {left: 16em;left: 10px;text-align: 1;text-align: left;border-bottom-width: 1px;}"
    );
}

#[test]
fn test_expanded_rules_keep_override_order() {
    let mut document = parse(".rule{padding:5px;padding-top: 20px}").expect("Failed to parse stylesheet");
    let block = first_block(&mut document);
    block.expand_shorthands();

    let rules = block.get_rules_assoc(None);
    let names: Vec<&str> = rules.keys().copied().collect();
    assert_eq!(names, ["padding-top", "padding-right", "padding-bottom", "padding-left"]);
    assert_eq!(rules["padding-top"].to_string(), "padding-top: 20px;");
    assert_eq!(rules["padding-right"].to_string(), "padding-right: 5px;");
    assert_eq!(rules["padding-bottom"].to_string(), "padding-bottom: 5px;");
    assert_eq!(rules["padding-left"].to_string(), "padding-left: 5px;");
}

#[test]
fn test_remove_rule_by_family() {
    let mut block =
        DeclarationBlock::from_css("a {font: 12px serif;font-size: 14px;color: red;}").expect("Failed to parse block");
    assert_eq!(block.remove_rule("font-"), 2);
    assert_eq!(block.to_string(), "a {color: red;}");
}

#[test]
fn test_selector_editing() {
    let mut block = DeclarationBlock::from_css("h1 {color: red}").expect("Failed to parse block");
    block.set_selector_text("h2,  .title > em").expect("valid selectors");
    assert_eq!(block.to_string(), "h2, .title > em {color: red;}");
    assert!(block.set_selector_text("h3 {").is_err());
    assert_eq!(block.selectors().len(), 2);
}
