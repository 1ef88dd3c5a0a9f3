//! Token cursor for navigating the lexed stream.
//!
//! Scaled down from `ori_parse::cursor::Cursor` (which tracks a parallel
//! discriminant-tag array for O(1) dispatch and supports snapshot/restore
//! for speculative parsing). LA's grammar never needs backtracking, so
//! this cursor is a plain index into the token slice.

use crate::error::ParseError;
use la_ir::LineIndex;
use la_lexer::{Token, TokenKind};

pub struct Cursor<'a> {
    tokens: &'a [Token],
    lines: &'a LineIndex,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token], lines: &'a LineIndex) -> Self {
        Cursor {
            tokens,
            lines,
            pos: 0,
        }
    }

    #[inline]
    pub fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    pub fn current_line(&self) -> u32 {
        self.lines.line(self.current().span.start)
    }

    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Look `offset` tokens ahead without consuming anything. Clamped to
    /// the trailing `Eof` token past the end of the stream.
    pub fn peek_kind(&self, offset: usize) -> Option<TokenKind> {
        self.tokens.get(self.pos + offset).map(|t| t.kind)
    }

    pub fn advance(&mut self) -> Token {
        let tok = *self.current();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    pub fn check(&self, kind: TokenKind) -> bool {
        std::mem::discriminant(&self.current_kind()) == std::mem::discriminant(&kind)
    }

    /// Consume the current token if it matches `kind`, otherwise leave the
    /// cursor untouched and return `false`.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume the current token if it matches `kind`, otherwise raise a
    /// syntactic error at the current position.
    pub fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected())
        }
    }

    pub fn unexpected(&self) -> ParseError {
        ParseError::UnexpectedToken {
            line: self.current_line(),
            token_text: self.current_text(),
        }
    }

    /// Render the current token's text for an `erro sintatico` message.
    /// Keywords/punctuation render as their fixed spelling; `Eof` renders
    /// as the literal `<EOF>` the caller rewrites to `EOF`.
    fn current_text(&self) -> String {
        match self.current_kind() {
            TokenKind::NumInt(n) => n.to_string(),
            TokenKind::NumReal(bits) => f64::from_bits(bits).to_string(),
            TokenKind::Cadeia(_) | TokenKind::Ident(_) => "identificador".to_string(),
            other => other.fixed_text().unwrap_or("?").to_string(),
        }
    }
}
