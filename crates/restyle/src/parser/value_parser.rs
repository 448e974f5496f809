//! Declaration values: token run to [`Value`] tree.
//!
//! Components are built first, then grouped by separator precedence:
//! commas bind loosest, then whitespace, then `/`.

use super::error::ParseError;
use super::lexer::{Lexer, Token, TokenKind};
use crate::Error;
use crate::types::{Color, CssFunction, Size, Value};

/// A component or separator in source order.
#[derive(Debug)]
enum Piece {
    Value(Value),
    Space,
    Comma,
    Slash,
}

/// Positioned piece.
#[derive(Debug)]
struct Item {
    piece: Piece,
    line: u32,
    column: u32,
}

/// Parse a complete value from text.
pub(crate) fn parse_value(text: &str) -> crate::Result<Value> {
    let mut lexer = Lexer::new(text);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        if token.is_eof() {
            break;
        }
        tokens.push(token);
    }
    parse_tokens(&tokens, lexer.position()).map_err(Error::from)
}

/// Parse a bounded token run into a value.
///
/// `end` is the position reported when the run is empty.
pub(crate) fn parse_tokens(tokens: &[Token], end: (u32, u32)) -> Result<Value, ParseError> {
    let items = components(tokens, end)?;
    group(items, end)
}

/// Turn tokens into components and separators. Function arguments are parsed
/// recursively.
fn components(tokens: &[Token], end: (u32, u32)) -> Result<Vec<Item>, ParseError> {
    let mut items = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        let piece = match &token.kind {
            TokenKind::Whitespace => Piece::Space,
            TokenKind::Comma => Piece::Comma,
            TokenKind::Slash => Piece::Slash,
            TokenKind::Number { value, unit, .. } => Piece::Value(Size::new(*value, unit.as_deref()).into()),
            TokenKind::Ident(word) => Piece::Value(Value::Keyword(word.clone())),
            TokenKind::Hash(name) => Piece::Value(match Color::hex(name) {
                Some(color) => color.into(),
                None => Value::Keyword(format!("#{}", name)),
            }),
            TokenKind::String(s) => Piece::Value(Value::String(s.clone())),
            TokenKind::Url(url) => Piece::Value(Value::Url(url.clone())),
            TokenKind::Function(_) | TokenKind::OpenParen => {
                let close = matching_paren(tokens, i)?;
                let arguments = &tokens[i + 1..close];
                let arguments = if arguments.iter().all(Token::is_whitespace) {
                    None
                } else {
                    let closing = &tokens[close];
                    Some(parse_tokens(trim(arguments), (closing.line, closing.column))?)
                };
                i = close;
                let name = match &token.kind {
                    TokenKind::Function(name) => name.as_str(),
                    _ => "",
                };
                let function = CssFunction::new(name, arguments);
                Piece::Value(if Color::is_color_function(name) {
                    Color::Function(function).into()
                } else {
                    function.into()
                })
            }
            TokenKind::Colon => Piece::Value(Value::keyword(":")),
            TokenKind::Delim(c) => Piece::Value(Value::Keyword(c.to_string())),
            TokenKind::AtKeyword(_)
            | TokenKind::Semicolon
            | TokenKind::OpenBrace
            | TokenKind::CloseBrace
            | TokenKind::CloseParen
            | TokenKind::Eof => {
                return Err(ParseError::syntax(
                    format!("unexpected '{}' in value", token.kind),
                    token.line,
                    token.column,
                ));
            }
        };
        items.push(Item {
            piece,
            line: token.line,
            column: token.column,
        });
        i += 1;
    }

    if items.is_empty() {
        return Err(ParseError::syntax("empty value", end.0, end.1));
    }
    Ok(items)
}

/// Index of the `)` closing the function or parenthesis at `open`.
fn matching_paren(tokens: &[Token], open: usize) -> Result<usize, ParseError> {
    let mut depth = 0usize;
    for (i, token) in tokens.iter().enumerate().skip(open) {
        match token.kind {
            TokenKind::Function(_) | TokenKind::OpenParen => depth += 1,
            TokenKind::CloseParen => {
                depth -= 1;
                if depth == 0 {
                    return Ok(i);
                }
            }
            _ => {}
        }
    }
    let token = &tokens[open];
    Err(ParseError::syntax(
        format!("unclosed '{}' in value", token.kind),
        token.line,
        token.column,
    ))
}

fn trim(tokens: &[Token]) -> &[Token] {
    let start = tokens.iter().position(|t| !t.is_whitespace()).unwrap_or(tokens.len());
    let end = tokens.iter().rposition(|t| !t.is_whitespace()).map_or(start, |i| i + 1);
    &tokens[start..end]
}

/// Apply separator precedence to a flat component sequence.
fn group(items: Vec<Item>, end: (u32, u32)) -> Result<Value, ParseError> {
    let groups = split(normalize(items), ',', end)?
        .into_iter()
        .map(|group| {
            let words = split(group, ' ', end)?
                .into_iter()
                .map(|word| fold_pairs(split(word, '/', end)?, end))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Value::space_list(words))
        })
        .collect::<Result<Vec<_>, ParseError>>()?;
    Ok(Value::comma_list(groups))
}

/// Drop whitespace that separates nothing (at either end, or next to `,` or
/// `/`) and make adjacent components two words.
fn normalize(items: Vec<Item>) -> Vec<Item> {
    let mut normalized: Vec<Item> = Vec::with_capacity(items.len());
    for item in items {
        let after_value = matches!(normalized.last(), Some(Item { piece: Piece::Value(_), .. }));
        match item.piece {
            Piece::Space if after_value => normalized.push(item),
            Piece::Space => {}
            Piece::Comma | Piece::Slash => {
                if matches!(normalized.last(), Some(Item { piece: Piece::Space, .. })) {
                    normalized.pop();
                }
                normalized.push(item);
            }
            Piece::Value(_) => {
                if after_value {
                    normalized.push(Item {
                        piece: Piece::Space,
                        line: item.line,
                        column: item.column,
                    });
                }
                normalized.push(item);
            }
        }
    }
    if matches!(normalized.last(), Some(Item { piece: Piece::Space, .. })) {
        normalized.pop();
    }
    normalized
}

fn is_separator(piece: &Piece, separator: char) -> bool {
    matches!(
        (piece, separator),
        (Piece::Comma, ',') | (Piece::Space, ' ') | (Piece::Slash, '/')
    )
}

/// Split on one separator kind. Every segment must be non-empty.
fn split(items: Vec<Item>, separator: char, end: (u32, u32)) -> Result<Vec<Vec<Item>>, ParseError> {
    let mut segments = Vec::new();
    let mut current = Vec::new();
    let mut last = end;
    for item in items {
        if is_separator(&item.piece, separator) {
            if current.is_empty() {
                return Err(ParseError::syntax(
                    format!("empty value before '{}'", separator),
                    item.line,
                    item.column,
                ));
            }
            last = (item.line, item.column);
            segments.push(std::mem::take(&mut current));
        } else {
            current.push(item);
        }
    }
    if current.is_empty() {
        return Err(ParseError::syntax("empty value group", last.0, last.1));
    }
    segments.push(current);
    Ok(segments)
}

/// Fold the slash-separated parts of one word into left-nested pairs.
fn fold_pairs(parts: Vec<Vec<Item>>, end: (u32, u32)) -> Result<Value, ParseError> {
    parts
        .into_iter()
        .flatten()
        .filter_map(|item| match item.piece {
            Piece::Value(value) => Some(value),
            Piece::Space | Piece::Comma | Piece::Slash => None,
        })
        .reduce(Value::pair)
        .ok_or_else(|| ParseError::syntax("empty value group", end.0, end.1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Separator, ValueList};

    fn parse(text: &str) -> Value {
        parse_value(text).unwrap()
    }

    #[test]
    fn single_components() {
        assert_eq!(parse("-10px"), Value::Size(Size::px(-10.0)));
        assert_eq!(parse("solid"), Value::keyword("solid"));
        assert_eq!(parse("#F00"), Value::Color(Color::Hex("f00".into())));
        assert_eq!(parse("#zzz"), Value::keyword("#zzz"));
        assert_eq!(parse("url(foobar.png)"), Value::Url("foobar.png".into()));
    }

    #[test]
    fn space_list_of_mixed_components() {
        assert_eq!(
            parse("1px solid #000"),
            Value::List(ValueList::new(
                Separator::Space,
                vec![Size::px(1.0).into(), Value::keyword("solid"), Color::Hex("000".into()).into()]
            ))
        );
    }

    #[test]
    fn comma_binds_looser_than_space() {
        let value = parse("\"Times New Roman\", Georgia serif");
        let list = value.as_list().unwrap();
        assert_eq!(list.separator, Separator::Comma);
        assert_eq!(list.items[0], Value::String("Times New Roman".into()));
        assert_eq!(list.items[1].as_list().map(ValueList::len), Some(2));
    }

    #[test]
    fn slash_binds_tighter_than_space() {
        let value = parse("italic 12px / 1.6 serif");
        let items = &value.as_list().unwrap().items;
        assert_eq!(items.len(), 3);
        assert_eq!(items[1], Value::pair(Size::px(12.0), Size::number(1.6)));
        assert_eq!(value.to_string(), "italic 12px/1.6 serif");
    }

    #[test]
    fn slash_pairs_fold_left() {
        assert_eq!(
            parse("1/2/3"),
            Value::pair(Value::pair(Size::number(1.0), Size::number(2.0)), Size::number(3.0))
        );
    }

    #[test]
    fn functions_parse_their_arguments() {
        let value = parse("rgba(0, 0, 0, 0.5)");
        let Value::Color(Color::Function(function)) = &value else {
            panic!("expected a color function, got {:?}", value);
        };
        assert_eq!(function.name, "rgba");
        assert_eq!(function.arguments.as_deref().and_then(Value::as_list).map(ValueList::len), Some(4));

        let calc = parse("calc(100% - (2 * 10px))");
        assert!(matches!(&calc, Value::Function(f) if f.name == "calc"));
        assert_eq!(calc.to_string(), "calc(100% - (2 * 10px))");
    }

    #[test]
    fn empty_groups_are_errors() {
        for text in ["", "a,,b", "a,", ",a", "a /", "/ a"] {
            assert!(parse_value(text).is_err(), "{:?} should not parse", text);
        }
        assert!(parse_value("rgb(1, 2").is_err());
    }
}
