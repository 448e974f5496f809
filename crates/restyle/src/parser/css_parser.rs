//! Recursive-descent stylesheet parser.
//!
//! This module turns source text into a [`Document`]. The parser pulls
//! tokens from the [`Lexer`](super::Lexer) through a [`ParseContext`] and
//! builds declaration blocks, at-rules and typed values.
//!
//! # Error Recovery
//!
//! With [`Settings::lenient`] (the default) a malformed declaration or
//! statement does not fail the parse. Instead the parser:
//! 1. Records a [`ParseError`] warning and logs it via `tracing::warn!`
//! 2. Skips to the next `;` or `}`
//! 3. Continues with the following declaration or rule
//!
//! Blocks left open at end of input are kept. With [`Settings::strict`] the
//! first problem aborts the parse and no document is produced.

use super::context::ParseContext;
use super::error::ParseError;
use super::lexer::{Token, TokenKind};
use super::value_parser;
use crate::document::{AtRuleBlock, AtRuleSet, AtRuleStatement, CssList, CssNode, DeclarationBlock, Document, holds_declarations};
use crate::render::Render;
use crate::rules::{Rule, RuleSet};
use crate::selector::Selector;
use crate::settings::Settings;
use crate::Result;

/// The result of [`parse_with`]: the document plus any recovered problems.
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    /// The parsed stylesheet.
    pub document: Document,
    /// Problems skipped in lenient mode, in source order.
    pub warnings: Vec<ParseError>,
    settings: Settings,
}

impl ParseOutcome {
    /// Whether anything was skipped.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Render the document with the output format of the parse settings.
    pub fn render(&self) -> String {
        self.document.render(&self.settings.output)
    }
}

/// Parse a stylesheet with the default (lenient) settings.
///
/// # Example
///
/// ```
/// let document = restyle::parse("body { font: 12px serif }").unwrap();
/// assert_eq!(document.to_string(), "body {font: 12px serif;}");
/// ```
pub fn parse(text: &str) -> Result<Document> {
    parse_with(text, &Settings::default()).map(|outcome| outcome.document)
}

/// Parse a stylesheet with explicit settings.
///
/// # Errors
///
/// In strict mode, returns the first [`Error::Lex`](crate::Error::Lex) or
/// [`Error::Syntax`](crate::Error::Syntax). In lenient mode problems are
/// returned as [`ParseOutcome::warnings`] instead and this only fails if
/// recovery itself is impossible (it currently never is).
pub fn parse_with(text: &str, settings: &Settings) -> Result<ParseOutcome> {
    tracing::trace!(bytes = text.len(), lenient = settings.lenient, "parsing stylesheet");

    let mut ctx = ParseContext::new(text, settings);
    let contents = parse_list(&mut ctx, false)?;
    let warnings = ctx.into_warnings();

    tracing::trace!(nodes = contents.len(), warnings = warnings.len(), "parsed stylesheet");
    Ok(ParseOutcome {
        document: Document::from_list(contents),
        warnings,
        settings: settings.clone(),
    })
}

/// Parse nodes until end of input, or until the `}` closing a nested
/// container.
fn parse_list(ctx: &mut ParseContext<'_>, nested: bool) -> Result<CssList> {
    let mut list = CssList::new();
    loop {
        ctx.skip_whitespace()?;
        let token = ctx.peek_token()?;
        match &token.kind {
            TokenKind::Eof => {
                if nested {
                    ctx.recover(unterminated(&token))?;
                }
                return Ok(list);
            }
            TokenKind::CloseBrace => {
                ctx.next()?;
                if nested {
                    return Ok(list);
                }
                ctx.recover(ParseError::syntax("unmatched '}'", token.line, token.column))?;
            }
            TokenKind::Semicolon => {
                ctx.next()?;
                ctx.recover(ParseError::syntax("unexpected ';'", token.line, token.column))?;
            }
            TokenKind::AtKeyword(name) => {
                ctx.next()?;
                if let Some(node) = parse_at_rule(ctx, name)? {
                    list.append(node);
                }
            }
            _ => {
                if let Some(block) = parse_declaration_block(ctx)? {
                    list.append(block);
                }
            }
        }
    }
}

/// Parse an at-rule; the at-keyword has been consumed.
///
/// Returns `None` when a malformed token was dropped from the prelude; the
/// whole at-rule, block included, is discarded.
fn parse_at_rule(ctx: &mut ParseContext<'_>, name: &str) -> Result<Option<CssNode>> {
    let name = name.to_ascii_lowercase();
    let warnings = ctx.warning_count();
    let mut prelude = String::new();
    loop {
        let token = ctx.peek_token()?;
        match token.kind {
            TokenKind::Semicolon | TokenKind::CloseBrace | TokenKind::Eof => {
                // A statement may also end with its enclosing block or the input.
                if matches!(token.kind, TokenKind::Semicolon) {
                    ctx.next()?;
                }
                if ctx.warning_count() != warnings {
                    tracing::debug!(name = %name, "dropping at-rule with malformed prelude");
                    return Ok(None);
                }
                return Ok(Some(AtRuleStatement::new(name, prelude.trim()).into()));
            }
            TokenKind::OpenBrace => {
                ctx.next()?;
                if ctx.warning_count() != warnings {
                    tracing::debug!(name = %name, "dropping at-rule with malformed prelude");
                    ctx.skip_block()?;
                    return Ok(None);
                }
                break;
            }
            kind => {
                ctx.next()?;
                prelude.push_str(&kind.to_string());
            }
        }
    }

    let arguments = prelude.trim();
    tracing::trace!(name = %name, arguments, "at-rule block");
    if holds_declarations(&name) {
        let rules = parse_declarations(ctx)?;
        Ok(Some(AtRuleSet::new(name, arguments).with_rules(rules).into()))
    } else {
        let contents = parse_list(ctx, true)?;
        Ok(Some(AtRuleBlock::new(name, arguments).with_contents(contents).into()))
    }
}

/// Parse `selectors { declarations }`.
///
/// Returns `None` when the rule was malformed and skipped.
fn parse_declaration_block(ctx: &mut ParseContext<'_>) -> Result<Option<DeclarationBlock>> {
    let start = ctx.peek_token()?;
    let warnings = ctx.warning_count();
    let mut prelude = String::new();
    loop {
        let token = ctx.peek_token()?;
        match token.kind {
            TokenKind::OpenBrace => {
                ctx.next()?;
                break;
            }
            TokenKind::Semicolon | TokenKind::CloseBrace | TokenKind::Eof => {
                if matches!(token.kind, TokenKind::Semicolon) {
                    ctx.next()?;
                }
                ctx.recover(ParseError::syntax(
                    format!("expected '{{' after selector '{}'", prelude.trim()),
                    token.line,
                    token.column,
                ))?;
                return Ok(None);
            }
            kind => {
                ctx.next()?;
                prelude.push_str(&kind.to_string());
            }
        }
    }

    if ctx.warning_count() != warnings {
        tracing::debug!(selector = prelude.trim(), "dropping block with malformed selector");
        ctx.skip_block()?;
        return Ok(None);
    }

    let selectors = match Selector::parse_list(&prelude) {
        Ok(selectors) => selectors,
        Err(e) => {
            ctx.recover(ParseError::syntax(e.to_string(), start.line, start.column))?;
            ctx.skip_block()?;
            return Ok(None);
        }
    };

    let rules = parse_declarations(ctx)?;
    Ok(Some(DeclarationBlock::new(selectors).with_rules(rules).at_line(start.line)))
}

/// Parse declarations up to and including the closing `}`.
fn parse_declarations(ctx: &mut ParseContext<'_>) -> Result<RuleSet> {
    let mut rules = RuleSet::new();
    loop {
        ctx.skip_whitespace()?;
        let token = ctx.peek_token()?;
        match token.kind {
            TokenKind::CloseBrace => {
                ctx.next()?;
                return Ok(rules);
            }
            TokenKind::Eof => {
                ctx.recover(unterminated(&token))?;
                return Ok(rules);
            }
            TokenKind::Semicolon => {
                ctx.next()?;
            }
            _ => {
                if let Some(rule) = parse_declaration(ctx)? {
                    rules.add_rule(rule, None);
                }
            }
        }
    }
}

/// Parse `name: value [!important]`, consuming the terminating `;` if any.
fn parse_declaration(ctx: &mut ParseContext<'_>) -> Result<Option<Rule>> {
    let start = ctx.peek_token()?;
    let name = match &start.kind {
        TokenKind::Ident(name) if name.starts_with("--") => name.clone(),
        TokenKind::Ident(name) => name.to_ascii_lowercase(),
        other => {
            ctx.recover(ParseError::syntax(
                format!("expected property name, found '{}'", other),
                start.line,
                start.column,
            ))?;
            ctx.skip_declaration()?;
            return Ok(None);
        }
    };
    ctx.next()?;

    ctx.skip_whitespace()?;
    let colon = ctx.peek_token()?;
    if !matches!(colon.kind, TokenKind::Colon) {
        ctx.recover(ParseError::syntax(
            format!("expected ':' after property name '{}'", name),
            colon.line,
            colon.column,
        ))?;
        ctx.skip_declaration()?;
        return Ok(None);
    }
    ctx.next()?;

    let warnings = ctx.warning_count();
    let mut tokens = Vec::new();
    let end = loop {
        let token = ctx.peek_token()?;
        match token.kind {
            TokenKind::Semicolon => {
                ctx.next()?;
                break token;
            }
            TokenKind::CloseBrace | TokenKind::Eof => break token,
            TokenKind::OpenBrace => {
                ctx.recover(ParseError::syntax(
                    format!("unexpected '{{' in value of '{}'", name),
                    token.line,
                    token.column,
                ))?;
                ctx.skip_declaration()?;
                return Ok(None);
            }
            _ => tokens.push(ctx.next()?),
        }
    };

    if ctx.warning_count() != warnings {
        tracing::debug!(property = %name, "dropping declaration with malformed value");
        return Ok(None);
    }

    let important = strip_important(&mut tokens);
    trim_whitespace(&mut tokens);
    if tokens.is_empty() {
        ctx.recover(ParseError::syntax(
            format!("empty value for property '{}'", name),
            end.line,
            end.column,
        ))?;
        return Ok(None);
    }

    match value_parser::parse_tokens(&tokens, (end.line, end.column)) {
        Ok(value) => Ok(Some(Rule::new(name, value).important(important).at(start.line, start.column))),
        Err(e) => {
            ctx.recover(e)?;
            Ok(None)
        }
    }
}

/// Remove a trailing `! important` (any case, any inner whitespace).
fn strip_important(tokens: &mut Vec<Token>) -> bool {
    trim_whitespace(tokens);
    let Some(last) = tokens.last() else {
        return false;
    };
    if !matches!(&last.kind, TokenKind::Ident(word) if word.eq_ignore_ascii_case("important")) {
        return false;
    }
    let bang = tokens[..tokens.len() - 1].iter().rposition(|t| !t.is_whitespace());
    match bang {
        Some(index) if tokens[index].kind.is_delim('!') => {
            tokens.truncate(index);
            true
        }
        _ => false,
    }
}

fn trim_whitespace(tokens: &mut Vec<Token>) {
    while tokens.last().is_some_and(Token::is_whitespace) {
        tokens.pop();
    }
    let leading = tokens.iter().take_while(|t| t.is_whitespace()).count();
    tokens.drain(..leading);
}

fn unterminated(token: &Token) -> ParseError {
    ParseError::syntax("unterminated block: expected '}'", token.line, token.column)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::parser::ParseErrorKind;
    use crate::types::{Size, Value};

    #[test]
    fn test_parse_simple_block() {
        let document = parse("body{ margin: 1em; }").unwrap();
        let blocks = document.all_declaration_blocks();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].selectors()[0], "body");
        assert_eq!(blocks[0].get_rule("margin").map(Rule::value), Some(&Value::Size(Size::em(1.0))));
        assert_eq!(document.to_string(), "body {margin: 1em;}");
    }

    #[test]
    fn test_last_semicolon_optional() {
        let document = parse(".a { left: 10px; text-align: left }").unwrap();
        assert_eq!(document.to_string(), ".a {left: 10px;text-align: left;}");
    }

    #[test]
    fn test_property_names_lowercased_except_custom() {
        let document = parse("a { COLOR: Red; --Accent: #ABC }").unwrap();
        let rules = document.all_declaration_blocks()[0].get_rules(None);
        assert_eq!(rules[0].name(), "color");
        assert_eq!(rules[0].value(), &Value::keyword("Red"));
        assert_eq!(rules[1].name(), "--Accent");
    }

    #[test]
    fn test_important() {
        let document = parse("a { color: red ! IMPORTANT; margin: 0 }").unwrap();
        let rules = document.all_declaration_blocks()[0].get_rules(None);
        assert!(rules[0].is_important());
        assert!(!rules[1].is_important());
        assert_eq!(document.to_string(), "a {color: red !important;margin: 0;}");
    }

    #[test]
    fn test_rule_positions() {
        let document = parse("a {\n  color: red;\n}").unwrap();
        let block = document.all_declaration_blocks()[0];
        let rule = &block.rule_set().rules()[0];
        assert_eq!((rule.line(), rule.column()), (2, 3));
        assert_eq!(block.line(), 1);
    }

    #[test]
    fn test_at_rules() {
        let css = "@charset \"utf-8\";\n@import url(\"a.css\") screen;\n@media screen and (max-width: 600px) { a { color: red } }\n@font-face { font-family: Foo; src: url(foo.woff) }";
        let document = parse(css).unwrap();
        let nodes = document.contents().nodes();
        assert!(matches!(&nodes[0], CssNode::AtRuleStatement(s) if s.name() == "charset"));
        assert!(matches!(&nodes[1], CssNode::AtRuleStatement(s) if s.arguments() == "url(\"a.css\") screen"));
        assert!(matches!(&nodes[2], CssNode::AtRuleBlock(b) if b.arguments() == "screen and (max-width: 600px)"));
        assert!(matches!(&nodes[3], CssNode::AtRuleSet(s) if s.rule_set().len() == 2));
        assert_eq!(
            document.to_string(),
            "@charset \"utf-8\";\n@import url(\"a.css\") screen;\n@media screen and (max-width: 600px) {a {color: red;}}\n@font-face {font-family: Foo;src: url(\"foo.woff\");}"
        );
    }

    #[test]
    fn test_strict_mode_aborts() {
        let strict = Settings::strict();
        let err = parse_with("a { color red; } b { margin: 0 }", &strict).unwrap_err();
        assert!(matches!(err, Error::Syntax { line: 1, .. }));

        let err = parse_with("a { content: \"open\n }", &strict).unwrap_err();
        assert!(matches!(err, Error::Lex { .. }));

        assert!(parse_with("a { color: red; } }", &strict).is_err());
        assert!(parse_with("a { color: red;", &strict).is_err());
    }

    #[test]
    fn test_lenient_mode_recovers() {
        let outcome = parse_with("a { color red; margin: 0 } } b { padding: 1px }", &Settings::lenient()).unwrap();
        assert_eq!(outcome.warnings.len(), 2);
        assert!(outcome.warnings.iter().all(|w| w.kind == ParseErrorKind::Syntax));
        assert_eq!(outcome.render(), "a {margin: 0;}\nb {padding: 1px;}");
    }

    #[test]
    fn test_lenient_keeps_truncated_block() {
        let outcome = parse_with("a { color: red", &Settings::lenient()).unwrap();
        assert!(outcome.has_warnings());
        assert_eq!(outcome.render(), "a {color: red;}");
    }

    #[test]
    fn test_invalid_selector_skips_block() {
        let outcome = parse_with("a) { color: red } b { color: blue }", &Settings::lenient()).unwrap();
        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(outcome.render(), "b {color: blue;}");
    }

    #[test]
    fn test_nested_block_in_declarations_is_skipped() {
        let outcome = parse_with("a { color: red; b { x: 1 } margin: 0 }", &Settings::lenient()).unwrap();
        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(outcome.render(), "a {color: red;margin: 0;}");
    }

    #[test]
    fn test_lex_error_drops_whole_declaration() {
        let outcome = parse_with(
            "a { background: red url(a b.png) no-repeat; color: blue }",
            &Settings::lenient(),
        )
        .unwrap();
        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(outcome.warnings[0].kind, ParseErrorKind::Lex);
        assert_eq!(outcome.render(), "a {color: blue;}");

        let outcome = parse_with("a { font-family: Arial \"Open\n; color: blue }", &Settings::lenient()).unwrap();
        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(outcome.render(), "a {color: blue;}");
    }

    #[test]
    fn test_lex_error_drops_selector_and_at_rule() {
        let outcome = parse_with("a[title=\"x\n] { color: red }\nb { color: blue }", &Settings::lenient()).unwrap();
        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(outcome.render(), "b {color: blue;}");

        let outcome = parse_with("@import \"a.css\n;\nb { color: red }", &Settings::lenient()).unwrap();
        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(outcome.render(), "b {color: red;}");
    }

    #[test]
    fn test_huge_numbers_are_rejected() {
        let outcome = parse_with(".a { width: 1e400px; height: 1px }", &Settings::lenient()).unwrap();
        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(outcome.warnings[0].kind, ParseErrorKind::Lex);
        assert_eq!(outcome.render(), ".a {height: 1px;}");
        assert!(parse_with(".a { width: 1e400px }", &Settings::strict()).is_err());
    }
}
