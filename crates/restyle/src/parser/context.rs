//! Per-parse state: token stream, settings and collected warnings.

use super::error::ParseError;
use super::lexer::{Lexer, Token, TokenKind};
use crate::settings::Settings;
use crate::{Error, Result};

/// State shared by the structural parser for the duration of one parse.
pub(crate) struct ParseContext<'s> {
    lexer: Lexer,
    settings: &'s Settings,
    warnings: Vec<ParseError>,
}

impl<'s> ParseContext<'s> {
    pub(crate) fn new(text: &str, settings: &'s Settings) -> Self {
        Self {
            lexer: Lexer::new(text).multibyte(settings.multibyte),
            settings,
            warnings: Vec::new(),
        }
    }

    /// Look at the next well-formed token.
    ///
    /// Malformed tokens go through [`recover`](Self::recover) and are dropped.
    pub(crate) fn peek(&mut self) -> Result<&Token> {
        loop {
            let error = match self.lexer.peek() {
                Ok(_) => break,
                Err(e) => e,
            };
            // The lexer is already past the malformed text.
            let _ = self.lexer.next_token();
            self.recover(error)?;
        }
        self.lexer.peek().map_err(Error::from)
    }

    /// Like [`peek`](Self::peek), but owned.
    pub(crate) fn peek_token(&mut self) -> Result<Token> {
        self.peek().cloned()
    }

    /// Consume the next well-formed token.
    pub(crate) fn next(&mut self) -> Result<Token> {
        self.peek()?;
        self.lexer.next_token().map_err(Error::from)
    }

    pub(crate) fn skip_whitespace(&mut self) -> Result<()> {
        while self.peek()?.is_whitespace() {
            self.next()?;
        }
        Ok(())
    }

    /// Handle a diagnostic according to the settings.
    ///
    /// Strict: the diagnostic becomes the parse error. Lenient: it is logged,
    /// recorded as a warning, and parsing continues.
    pub(crate) fn recover(&mut self, error: ParseError) -> Result<()> {
        if !self.settings.lenient {
            return Err(error.into());
        }
        tracing::warn!(line = error.line, column = error.column, "{}", error.message);
        self.warnings.push(error);
        Ok(())
    }

    /// Discard the rest of a malformed declaration.
    ///
    /// Stops after the next `;`, after a nested `{...}` block, or before the
    /// `}` that closes the enclosing block.
    pub(crate) fn skip_declaration(&mut self) -> Result<()> {
        loop {
            match self.peek()?.kind {
                TokenKind::Eof | TokenKind::CloseBrace => return Ok(()),
                TokenKind::Semicolon => {
                    self.next()?;
                    return Ok(());
                }
                TokenKind::OpenBrace => {
                    self.next()?;
                    return self.skip_block();
                }
                _ => {
                    self.next()?;
                }
            }
        }
    }

    /// Discard tokens up to and including the `}` matching an already
    /// consumed `{`.
    pub(crate) fn skip_block(&mut self) -> Result<()> {
        let mut depth = 1usize;
        loop {
            match self.next()?.kind {
                TokenKind::Eof => return Ok(()),
                TokenKind::OpenBrace => depth += 1,
                TokenKind::CloseBrace => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(());
                    }
                }
                _ => {}
            }
        }
    }

    /// Number of warnings recorded so far.
    ///
    /// Callers compare it across a token run to notice that a malformed
    /// token was dropped from that run.
    pub(crate) fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    pub(crate) fn into_warnings(self) -> Vec<ParseError> {
        self.warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_recover_fails() {
        let settings = Settings::strict();
        let mut ctx = ParseContext::new("", &settings);
        assert!(ctx.recover(ParseError::syntax("boom", 1, 1)).is_err());
    }

    #[test]
    fn lenient_drops_malformed_tokens() {
        let settings = Settings::lenient();
        let mut ctx = ParseContext::new("\"open\nnext", &settings);

        assert_eq!(ctx.next().unwrap().kind, TokenKind::Whitespace);
        assert_eq!(ctx.next().unwrap().kind, TokenKind::Ident("next".into()));
        assert_eq!(ctx.warning_count(), 1);
        assert_eq!(ctx.into_warnings().len(), 1);
    }

    #[test]
    fn skip_declaration_stops_before_close_brace() {
        let settings = Settings::lenient();
        let mut ctx = ParseContext::new("a b c } d", &settings);
        ctx.skip_declaration().unwrap();
        assert_eq!(ctx.next().unwrap().kind, TokenKind::CloseBrace);
    }

    #[test]
    fn skip_declaration_passes_nested_blocks() {
        let settings = Settings::lenient();
        let mut ctx = ParseContext::new("x { y { } } z", &settings);
        ctx.skip_declaration().unwrap();
        ctx.skip_whitespace().unwrap();
        assert_eq!(ctx.next().unwrap().kind, TokenKind::Ident("z".into()));
    }
}
