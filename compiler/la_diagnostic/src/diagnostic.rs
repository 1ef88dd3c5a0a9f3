//! Core diagnostic type.
//!
//! Scaled down from the teacher's `ori_diagnostic::Diagnostic` (which
//! carries an `ErrorCode`, a primary span, secondary labels, notes and
//! suggestions for `ariadne`-rendered terminal output). SPEC_FULL §4.1 pins
//! the LA compiler to one exact plain-text line format with no error
//! codes, so there is nothing here for those fields to describe — keeping
//! them would be unused ceremony, not fidelity.

use std::fmt;

/// Which phase produced a diagnostic.
///
/// Distinguishes fatal (lexical/syntactic) from recoverable (semantic)
/// diagnostics, and lets the queue apply the same-line deduplication the
/// teacher's queue applies to syntax-error cascades (see `queue.rs`).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Kind {
    Lexical,
    Syntactic,
    Semantic,
}

impl Kind {
    /// Lexical and syntactic diagnostics are fatal: the pipeline terminates
    /// after reporting the first one. Semantic diagnostics accumulate.
    pub fn is_fatal(self) -> bool {
        matches!(self, Kind::Lexical | Kind::Syntactic)
    }
}

/// One diagnostic line: `Linha <line>: <message>`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub kind: Kind,
    pub line: u32,
    pub message: String,
}

impl Diagnostic {
    pub fn lexical(line: u32, message: impl Into<String>) -> Self {
        Diagnostic {
            kind: Kind::Lexical,
            line,
            message: message.into(),
        }
    }

    pub fn syntactic(line: u32, message: impl Into<String>) -> Self {
        Diagnostic {
            kind: Kind::Syntactic,
            line,
            message: message.into(),
        }
    }

    pub fn semantic(line: u32, message: impl Into<String>) -> Self {
        Diagnostic {
            kind: Kind::Semantic,
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Linha {}: {}", self.line, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_spec_format() {
        let diag = Diagnostic::semantic(2, "identificador x ja declarado anteriormente");
        assert_eq!(
            diag.to_string(),
            "Linha 2: identificador x ja declarado anteriormente"
        );
    }

    #[test]
    fn lexical_and_syntactic_are_fatal() {
        assert!(Kind::Lexical.is_fatal());
        assert!(Kind::Syntactic.is_fatal());
        assert!(!Kind::Semantic.is_fatal());
    }
}
