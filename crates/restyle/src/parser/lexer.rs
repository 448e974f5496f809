//! Pull-based CSS tokenizer.
//!
//! The lexer turns source text into classified [`Token`]s on demand. Comments
//! never surface as tokens; runs of whitespace (and comments between them)
//! collapse into a single [`TokenKind::Whitespace`]. Every token carries the
//! 1-indexed line and column where it starts.
//!
//! Malformed input (unterminated strings or comments, invalid escapes,
//! malformed `url(...)`) is reported as a [`ParseError`] of kind
//! [`ParseErrorKind::Lex`](super::ParseErrorKind::Lex). After an error the
//! lexer has already moved past the offending text, so the caller can keep
//! pulling tokens to resynchronize.

use std::fmt;

use super::error::ParseError;

/// A token together with its source position.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What was scanned.
    pub kind: TokenKind,
    /// Line where the token starts (1-indexed).
    pub line: u32,
    /// Column where the token starts (1-indexed, in characters).
    pub column: u32,
}

impl Token {
    /// Whether this is the end-of-input marker.
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Whether this is a whitespace run.
    pub fn is_whitespace(&self) -> bool {
        matches!(self.kind, TokenKind::Whitespace)
    }
}

/// Token classification.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// Identifier or keyword (`color`, `-webkit-box`, `--accent`).
    Ident(String),
    /// Identifier immediately followed by `(`; the parenthesis is consumed.
    Function(String),
    /// `@` followed by an identifier.
    AtKeyword(String),
    /// `#` followed by name characters (hex colors, id selectors).
    Hash(String),
    /// Numeric literal with an optional unit (`%` counts as a unit).
    Number {
        value: f64,
        unit: Option<String>,
        /// The numeric part exactly as written.
        repr: String,
    },
    /// Quoted string with escapes decoded.
    String(String),
    /// `url(...)` in quoted or bare form; holds the decoded target.
    Url(String),
    /// One or more whitespace characters and/or comments.
    Whitespace,
    Colon,
    Semicolon,
    Comma,
    Slash,
    OpenBrace,
    CloseBrace,
    OpenParen,
    CloseParen,
    /// Any other single character (`!`, `>`, `+`, `.`, `[`, ...).
    Delim(char),
    /// End of input.
    Eof,
}

impl TokenKind {
    /// Whether this is the given delimiter character.
    pub fn is_delim(&self, c: char) -> bool {
        matches!(self, TokenKind::Delim(d) if *d == c)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Ident(name) => cssparser::serialize_identifier(name, f),
            TokenKind::Function(name) => {
                cssparser::serialize_identifier(name, f)?;
                f.write_str("(")
            }
            TokenKind::AtKeyword(name) => {
                f.write_str("@")?;
                cssparser::serialize_identifier(name, f)
            }
            TokenKind::Hash(name) => {
                f.write_str("#")?;
                cssparser::serialize_name(name, f)
            }
            TokenKind::Number { unit, repr, .. } => {
                f.write_str(repr)?;
                match unit {
                    Some(unit) => f.write_str(unit),
                    None => Ok(()),
                }
            }
            TokenKind::String(s) => cssparser::serialize_string(s, f),
            TokenKind::Url(url) => {
                f.write_str("url(")?;
                cssparser::serialize_string(url, f)?;
                f.write_str(")")
            }
            TokenKind::Whitespace => f.write_str(" "),
            TokenKind::Colon => f.write_str(":"),
            TokenKind::Semicolon => f.write_str(";"),
            TokenKind::Comma => f.write_str(","),
            TokenKind::Slash => f.write_str("/"),
            TokenKind::OpenBrace => f.write_str("{"),
            TokenKind::CloseBrace => f.write_str("}"),
            TokenKind::OpenParen => f.write_str("("),
            TokenKind::CloseParen => f.write_str(")"),
            TokenKind::Delim(c) => write!(f, "{}", c),
            TokenKind::Eof => Ok(()),
        }
    }
}

/// CSS tokenizer with single-token lookahead.
#[derive(Debug)]
pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: u32,
    column: u32,
    multibyte: bool,
    peeked: Option<Result<Token, ParseError>>,
}

impl Lexer {
    /// Create a lexer over `input`.
    ///
    /// Line endings (`\r\n`, `\r`, form feed) are normalized to `\n` first.
    pub fn new(input: &str) -> Self {
        let mut chars = Vec::with_capacity(input.len());
        let mut iter = input.chars().peekable();
        while let Some(c) = iter.next() {
            match c {
                '\r' => {
                    if iter.peek() == Some(&'\n') {
                        iter.next();
                    }
                    chars.push('\n');
                }
                '\u{c}' => chars.push('\n'),
                c => chars.push(c),
            }
        }

        Self {
            chars,
            pos: 0,
            line: 1,
            column: 1,
            multibyte: true,
            peeked: None,
        }
    }

    /// Accept (or reject) non-ASCII code points as identifier characters.
    pub fn multibyte(mut self, enabled: bool) -> Self {
        self.multibyte = enabled;
        self
    }

    /// Look at the next token without consuming it.
    ///
    /// Repeated calls return the same token (or the same error).
    pub fn peek(&mut self) -> Result<&Token, ParseError> {
        let scanned = match self.peeked.take() {
            Some(result) => result,
            None => self.scan(),
        };
        match self.peeked.insert(scanned) {
            Ok(token) => Ok(&*token),
            Err(e) => Err(e.clone()),
        }
    }

    /// Consume and return the next token.
    pub fn next_token(&mut self) -> Result<Token, ParseError> {
        match self.peeked.take() {
            Some(result) => result,
            None => self.scan(),
        }
    }

    /// Current scan position as `(line, column)`.
    pub fn position(&self) -> (u32, u32) {
        (self.line, self.column)
    }

    fn char_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn current(&self) -> Option<char> {
        self.char_at(0)
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.current()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn scan(&mut self) -> Result<Token, ParseError> {
        let (line, column) = self.position();
        let token = |kind| Token { kind, line, column };

        let Some(c) = self.current() else {
            return Ok(token(TokenKind::Eof));
        };

        if c.is_whitespace() || self.at_comment_start() {
            if self.consume_whitespace_and_comments()? {
                return Ok(token(TokenKind::Whitespace));
            }
            // A comment with no surrounding whitespace separates nothing.
            return self.scan();
        }

        let kind = match c {
            '"' | '\'' => TokenKind::String(self.consume_string(c)?),
            '#' => {
                self.advance();
                if self.current().is_some_and(|c| self.is_name_char(c)) || self.valid_escape_at(0) {
                    TokenKind::Hash(self.consume_name()?)
                } else {
                    TokenKind::Delim('#')
                }
            }
            '@' => {
                self.advance();
                if self.starts_ident(0) {
                    TokenKind::AtKeyword(self.consume_name()?)
                } else {
                    TokenKind::Delim('@')
                }
            }
            '+' | '.' if self.starts_number(0) => self.consume_number()?,
            '-' if self.starts_number(0) => self.consume_number()?,
            '-' if self.starts_ident(0) => self.consume_ident_like()?,
            '0'..='9' => self.consume_number()?,
            '\\' => {
                if self.valid_escape_at(0) {
                    self.consume_ident_like()?
                } else {
                    self.advance();
                    return Err(ParseError::lex("invalid escape", line, column));
                }
            }
            ':' => self.single(TokenKind::Colon),
            ';' => self.single(TokenKind::Semicolon),
            ',' => self.single(TokenKind::Comma),
            '/' => self.single(TokenKind::Slash),
            '{' => self.single(TokenKind::OpenBrace),
            '}' => self.single(TokenKind::CloseBrace),
            '(' => self.single(TokenKind::OpenParen),
            ')' => self.single(TokenKind::CloseParen),
            c if self.is_name_start(c) => self.consume_ident_like()?,
            c if !c.is_ascii() && !self.multibyte => {
                self.advance();
                return Err(ParseError::lex(
                    format!("unexpected non-ASCII character '{}'", c),
                    line,
                    column,
                ));
            }
            c => self.single(TokenKind::Delim(c)),
        };

        Ok(token(kind))
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.advance();
        kind
    }

    fn at_comment_start(&self) -> bool {
        self.current() == Some('/') && self.char_at(1) == Some('*')
    }

    /// Returns whether any actual whitespace was consumed.
    fn consume_whitespace_and_comments(&mut self) -> Result<bool, ParseError> {
        let mut saw_space = false;
        loop {
            match self.current() {
                Some(c) if c.is_whitespace() => {
                    saw_space = true;
                    self.advance();
                }
                Some('/') if self.char_at(1) == Some('*') => {
                    let (line, column) = self.position();
                    self.advance();
                    self.advance();
                    loop {
                        match self.current() {
                            None => {
                                return Err(ParseError::lex("unterminated comment", line, column));
                            }
                            Some('*') if self.char_at(1) == Some('/') => {
                                self.advance();
                                self.advance();
                                break;
                            }
                            Some(_) => {
                                self.advance();
                            }
                        }
                    }
                }
                _ => return Ok(saw_space),
            }
        }
    }

    fn is_name_start(&self, c: char) -> bool {
        c.is_ascii_alphabetic() || c == '_' || (!c.is_ascii() && self.multibyte)
    }

    fn is_name_char(&self, c: char) -> bool {
        self.is_name_start(c) || c.is_ascii_digit() || c == '-'
    }

    fn valid_escape_at(&self, offset: usize) -> bool {
        self.char_at(offset) == Some('\\')
            && self.char_at(offset + 1).is_some_and(|c| c != '\n')
    }

    fn starts_ident(&self, offset: usize) -> bool {
        match self.char_at(offset) {
            Some('-') => match self.char_at(offset + 1) {
                Some('-') => true,
                Some(c) if self.is_name_start(c) => true,
                _ => self.valid_escape_at(offset + 1),
            },
            Some('\\') => self.valid_escape_at(offset),
            Some(c) => self.is_name_start(c),
            None => false,
        }
    }

    fn starts_number(&self, offset: usize) -> bool {
        let digit = |o: usize| self.char_at(o).is_some_and(|c| c.is_ascii_digit());
        match self.char_at(offset) {
            Some('+') | Some('-') => {
                digit(offset + 1) || (self.char_at(offset + 1) == Some('.') && digit(offset + 2))
            }
            Some('.') => digit(offset + 1),
            Some(c) => c.is_ascii_digit(),
            None => false,
        }
    }

    /// Decode an escape; the backslash has already been consumed.
    fn consume_escape(&mut self) -> Result<char, ParseError> {
        let (line, column) = self.position();
        let Some(c) = self.current() else {
            return Err(ParseError::lex("invalid escape at end of input", line, column));
        };

        if c.is_ascii_hexdigit() {
            let mut hex = String::new();
            while hex.len() < 6 {
                match self.current() {
                    Some(h) if h.is_ascii_hexdigit() => {
                        hex.push(h);
                        self.advance();
                    }
                    _ => break,
                }
            }
            if self.current().is_some_and(char::is_whitespace) {
                self.advance();
            }
            let code = u32::from_str_radix(&hex, 16).unwrap_or(0xFFFD);
            return Ok(match char::from_u32(code) {
                Some(ch) if code != 0 => ch,
                _ => char::REPLACEMENT_CHARACTER,
            });
        }

        self.advance();
        Ok(c)
    }

    fn consume_name(&mut self) -> Result<String, ParseError> {
        let mut name = String::new();
        loop {
            match self.current() {
                Some(c) if self.is_name_char(c) => {
                    name.push(c);
                    self.advance();
                }
                Some('\\') if self.valid_escape_at(0) => {
                    self.advance();
                    name.push(self.consume_escape()?);
                }
                _ => return Ok(name),
            }
        }
    }

    fn consume_ident_like(&mut self) -> Result<TokenKind, ParseError> {
        let (line, column) = self.position();
        let name = self.consume_name()?;

        if self.current() != Some('(') {
            return Ok(TokenKind::Ident(name));
        }
        self.advance();

        if name.eq_ignore_ascii_case("url") {
            return self.consume_url(line, column).map(TokenKind::Url);
        }
        Ok(TokenKind::Function(name))
    }

    /// Consume the rest of a `url(` form, quoted or bare.
    fn consume_url(&mut self, line: u32, column: u32) -> Result<String, ParseError> {
        while self.current().is_some_and(char::is_whitespace) {
            self.advance();
        }

        if let Some(quote @ ('"' | '\'')) = self.current() {
            let target = self.consume_string(quote)?;
            while self.current().is_some_and(char::is_whitespace) {
                self.advance();
            }
            return match self.current() {
                Some(')') => {
                    self.advance();
                    Ok(target)
                }
                None => Err(ParseError::lex("unterminated url", line, column)),
                Some(_) => {
                    self.consume_bad_url_remnants();
                    Err(ParseError::lex("malformed url", line, column))
                }
            };
        }

        let mut target = String::new();
        loop {
            match self.current() {
                None => return Err(ParseError::lex("unterminated url", line, column)),
                Some(')') => {
                    self.advance();
                    return Ok(target);
                }
                Some(c) if c.is_whitespace() => {
                    while self.current().is_some_and(char::is_whitespace) {
                        self.advance();
                    }
                    if self.current() == Some(')') {
                        self.advance();
                        return Ok(target);
                    }
                    self.consume_bad_url_remnants();
                    return Err(ParseError::lex("malformed url", line, column));
                }
                Some('"' | '\'' | '(') => {
                    self.consume_bad_url_remnants();
                    return Err(ParseError::lex("malformed url", line, column));
                }
                Some('\\') => {
                    if !self.valid_escape_at(0) {
                        self.consume_bad_url_remnants();
                        return Err(ParseError::lex("invalid escape in url", line, column));
                    }
                    self.advance();
                    target.push(self.consume_escape()?);
                }
                Some(c) => {
                    target.push(c);
                    self.advance();
                }
            }
        }
    }

    fn consume_bad_url_remnants(&mut self) {
        while let Some(c) = self.advance() {
            if c == ')' {
                return;
            }
        }
    }

    fn consume_string(&mut self, quote: char) -> Result<String, ParseError> {
        let (line, column) = self.position();
        self.advance();

        let mut value = String::new();
        loop {
            match self.current() {
                None | Some('\n') => {
                    return Err(ParseError::lex("unterminated string", line, column));
                }
                Some(c) if c == quote => {
                    self.advance();
                    return Ok(value);
                }
                Some('\\') => {
                    self.advance();
                    match self.current() {
                        // End of input right after a backslash: reported as
                        // unterminated on the next iteration.
                        None => {}
                        Some('\n') => {
                            self.advance();
                        }
                        Some(_) => value.push(self.consume_escape()?),
                    }
                }
                Some(c) => {
                    value.push(c);
                    self.advance();
                }
            }
        }
    }

    fn consume_number(&mut self) -> Result<TokenKind, ParseError> {
        let (line, column) = self.position();
        let mut repr = String::new();

        if let Some(sign @ ('+' | '-')) = self.current() {
            repr.push(sign);
            self.advance();
        }
        self.consume_digits(&mut repr);

        if self.current() == Some('.') && self.char_at(1).is_some_and(|c| c.is_ascii_digit()) {
            repr.push('.');
            self.advance();
            self.consume_digits(&mut repr);
        }

        if let Some(e @ ('e' | 'E')) = self.current() {
            let digit_at = |o: usize| self.char_at(o).is_some_and(|c| c.is_ascii_digit());
            let signed = matches!(self.char_at(1), Some('+' | '-')) && digit_at(2);
            if digit_at(1) || signed {
                repr.push(e);
                self.advance();
                if signed && let Some(sign) = self.advance() {
                    repr.push(sign);
                }
                self.consume_digits(&mut repr);
            }
        }

        let value = repr
            .parse::<f64>()
            .map_err(|_| ParseError::lex(format!("invalid number '{}'", repr), line, column))?;

        let unit = if self.current() == Some('%') {
            self.advance();
            Some("%".to_string())
        } else if self.starts_ident(0) {
            Some(self.consume_name()?.to_ascii_lowercase())
        } else {
            None
        };

        // Checked after the unit so the whole dimension is consumed.
        if !value.is_finite() {
            return Err(ParseError::lex(format!("number '{}' is out of range", repr), line, column));
        }

        Ok(TokenKind::Number { value, unit, repr })
    }

    fn consume_digits(&mut self, into: &mut String) {
        while let Some(c) = self.current() {
            if !c.is_ascii_digit() {
                break;
            }
            into.push(c);
            self.advance();
        }
    }
}
