//! Tests for parsing stylesheets end to end.

use std::io::Write;

use pretty_assertions::assert_eq;
use restyle::parser::ParseErrorKind;
use restyle::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

#[test]
fn test_round_trip_default_format() {
    let css = "@charset \"utf-8\";\nh1, h2 {color: #abc;margin: 0 auto;}\n@media print {a {display: none;}}";
    let document = parse(css).expect("Failed to parse stylesheet");
    assert_eq!(document.to_string(), css);
}

fn selector_lists(document: &Document) -> Vec<Vec<Selector>> {
    document
        .all_declaration_blocks()
        .iter()
        .map(|block| block.selectors().to_vec())
        .collect()
}

fn assert_reparses(css: &str, format: &OutputFormat) {
    let document = parse(css).expect("Failed to parse stylesheet");
    let rendered = document.render(format);
    let reparsed = parse(&rendered).expect("Failed to parse rendered stylesheet");

    assert_eq!(reparsed.all_rule_sets(), document.all_rule_sets(), "rendered: {}", rendered);
    assert_eq!(selector_lists(&reparsed), selector_lists(&document), "rendered: {}", rendered);
    assert_eq!(reparsed.render(format), rendered);
}

#[test]
fn test_rendered_output_reparses_to_same_rules() {
    let inputs = [
        r#"p { font-family: Foo\ Bar, \31 23abc; content: "say \"hi\""; quotes: '«' '»' }"#,
        r#"p { background: url("a b.png") no-repeat; width: calc(100% - 2px); color: rgba(0, 0, 0, .5) !important }"#,
        r#"p { font: italic bold 12px/1.5 "Helvetica Neue", serif; margin: -1px 0 }"#,
        r#"@media screen { @supports (display: grid) { .g, .h > i { display: grid; größe: 1 } } }"#,
        r#"@charset "utf-8"; @font-face { font-family: "Foo"; src: url(foo.woff) } :root { --Main-Color: #FFF }"#,
    ];
    for css in inputs {
        assert_reparses(css, &OutputFormat::default());
        assert_reparses(css, &OutputFormat::pretty());
    }
}

#[test]
fn test_escaped_keywords_render_escaped() {
    let document = parse(r"p { font-family: Foo\ Bar, \31 23abc }").expect("Failed to parse stylesheet");
    assert_eq!(document.to_string(), r"p {font-family: Foo\ Bar, \31 23abc;}");
}

#[test]
fn test_whitespace_and_comments_are_normalized() {
    let document = parse("/* header */\nh1 ,\n h2   >  em {\n  color :  red ; /* note */\n}\n")
        .expect("Failed to parse stylesheet");
    assert_eq!(document.to_string(), "h1, h2 > em {color: red;}");
}

#[test]
fn test_custom_property_names_keep_case() {
    let document = parse(":root { --Main-Color: #FFF; COLOR: var(--Main-Color) }").expect("Failed to parse stylesheet");
    assert_eq!(document.to_string(), ":root {--Main-Color: #fff;color: var(--Main-Color);}");
}

#[test]
fn test_lenient_warnings_are_reported() {
    init_tracing();

    let outcome = parse_with("a { color: ; margin: 0 }\n; b { padding: 1px", &Settings::lenient())
        .expect("lenient parse never fails");
    assert_eq!(outcome.warnings.len(), 3);
    assert!(outcome.warnings.iter().all(|warning| warning.kind == ParseErrorKind::Syntax));
    assert_eq!(outcome.warnings[1].line, 2);
    assert_eq!(outcome.render(), "a {margin: 0;}\nb {padding: 1px;}");
}

#[test]
fn test_strict_errors_carry_positions() {
    let error = parse_with("a {\n  color red;\n}", &Settings::strict()).expect_err("strict parse should fail");
    assert!(matches!(error, Error::Syntax { .. }));
    assert_eq!(error.position().map(|(line, _)| line), Some(2));
}

#[test]
fn test_multibyte_identifiers() {
    let document = parse(".é { color: red }").expect("Failed to parse stylesheet");
    assert_eq!(document.to_string(), ".é {color: red;}");

    let ascii_only = Settings::strict().multibyte(false);
    let error = parse_with(".é { color: red }", &ascii_only).expect_err("non-ASCII should be rejected");
    assert!(matches!(error, Error::Lex { .. }));
}

#[test]
fn test_output_settings_are_used_for_rendering() {
    let settings = Settings::default().output(OutputFormat::compact());
    let outcome = parse_with("a { color: #aabbcc; margin: 0 }\nb { color: blue }", &settings)
        .expect("Failed to parse stylesheet");
    assert_eq!(outcome.render(), "a{color:#abc;margin:0}b{color:blue}");
}

#[test]
fn test_from_file() {
    init_tracing();

    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    write!(file, "@media screen {{ .nav {{ margin: 1em 2em }} }}").expect("Failed to write temp file");

    let document = Document::from_file(file.path(), &Settings::default()).expect("Failed to load stylesheet");
    assert_eq!(document.all_declaration_blocks().len(), 1);
    assert_eq!(document.to_string(), "@media screen {.nav {margin: 1em 2em;}}");
}

#[test]
fn test_all_values_flattens_lists() {
    let document = parse("a { font: 12px/1.5 Georgia, serif; color: red }").expect("Failed to parse stylesheet");
    let fonts: Vec<String> = document.all_values(Some("font")).iter().map(|value| value.to_string()).collect();
    assert_eq!(fonts, ["12px", "1.5", "Georgia", "serif"]);
    assert_eq!(document.all_values(None).len(), 5);
}

#[test]
fn test_remove_blocks_by_selector() {
    let mut document =
        parse("a, b { color: red }\n@media print { a, b { color: black } c { color: blue } }").expect("Failed to parse stylesheet");
    let selectors = Selector::parse_list("a,b").expect("valid selectors");
    assert_eq!(document.remove_declaration_blocks_by_selector(&selectors), 2);
    assert_eq!(document.to_string(), "@media print {c {color: blue;}}");
}

#[test]
fn test_edit_then_render() {
    let mut document = parse("@font-face { font-family: Foo }\np { margin: 0 }").expect("Failed to parse stylesheet");
    for set in document.all_rule_sets_mut() {
        set.add_rule(Rule::new("padding", Size::px(2.0)).important(true), None);
    }
    assert_eq!(
        document.render(&OutputFormat::pretty()),
        "@font-face {\n\tfont-family: Foo;\n\tpadding: 2px !important;\n}\np {\n\tmargin: 0;\n\tpadding: 2px !important;\n}"
    );
}
