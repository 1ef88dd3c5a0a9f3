//! Internal parse error type.
//!
//! Scaled down from `ori_parse::error::ParseError` (which carries an
//! `ErrorCode`, contextual hints, and educational notes for IDE-grade
//! diagnostics). LA has exactly one syntactic diagnostic shape
//! (`erro sintatico proximo a <token-text>`), so this type only needs to
//! carry what that one message needs.

use thiserror::Error;

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum ParseError {
    #[error("erro sintatico proximo a {token_text} (linha {line})")]
    UnexpectedToken { line: u32, token_text: String },
}

impl ParseError {
    pub fn line(&self) -> u32 {
        match self {
            ParseError::UnexpectedToken { line, .. } => *line,
        }
    }

    pub fn token_text(&self) -> &str {
        match self {
            ParseError::UnexpectedToken { token_text, .. } => token_text,
        }
    }
}
