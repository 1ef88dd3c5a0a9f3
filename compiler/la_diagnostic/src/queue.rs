//! Diagnostic queue: ordering and same-line deduplication.
//!
//! Grounded on `ori_diagnostic::queue::DiagnosticQueue`, scaled to what LA
//! actually needs. The teacher's queue sorts by (line, column), caps total
//! errors, and filters "follow-on" errors derived from a prior one. LA's
//! fatal errors (lexical/syntactic) always terminate the pipeline on the
//! first hit (SPEC_FULL §7), so there is never more than one to sort or
//! cap — the one piece of the teacher's queue that still does real work
//! here is same-line syntax-error deduplication, kept for the case where a
//! caller retries parsing after a soft recovery and would otherwise emit
//! the same diagnostic twice for one line.

use crate::{Diagnostic, Kind};

#[derive(Default)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    last_syntax_line: Option<u32>,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a diagnostic, returning `true` if it was kept.
    ///
    /// Syntactic diagnostics on the same line as the previous syntactic
    /// diagnostic are dropped as noise; everything else is always kept,
    /// preserving the append-only order SPEC_FULL §4.1 specifies for
    /// semantic diagnostics.
    pub fn push(&mut self, diag: Diagnostic) -> bool {
        if diag.kind == Kind::Syntactic {
            if self.last_syntax_line == Some(diag.line) {
                return false;
            }
            self.last_syntax_line = Some(diag.line);
        }
        self.diagnostics.push(diag);
        true
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// True once any fatal (lexical/syntactic) diagnostic has been queued.
    pub fn has_fatal(&self) -> bool {
        self.diagnostics.iter().any(|d| d.kind.is_fatal())
    }

    /// Drain the queue in insertion order.
    pub fn drain(&mut self) -> Vec<Diagnostic> {
        self.last_syntax_line = None;
        self.diagnostics.drain(..).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keeps_diagnostics_in_insertion_order() {
        let mut q = DiagnosticQueue::new();
        q.push(Diagnostic::semantic(3, "third"));
        q.push(Diagnostic::semantic(1, "first"));
        q.push(Diagnostic::semantic(2, "second"));
        let drained: Vec<_> = q.drain().into_iter().map(|d| d.message).collect();
        assert_eq!(drained, vec!["third", "first", "second"]);
    }

    #[test]
    fn dedupes_repeated_syntax_error_on_same_line() {
        let mut q = DiagnosticQueue::new();
        assert!(q.push(Diagnostic::syntactic(1, "erro sintatico proximo a x")));
        assert!(!q.push(Diagnostic::syntactic(1, "erro sintatico proximo a y")));
        assert!(q.push(Diagnostic::syntactic(2, "erro sintatico proximo a z")));
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn semantic_diagnostics_on_same_line_are_never_deduped() {
        let mut q = DiagnosticQueue::new();
        q.push(Diagnostic::semantic(1, "a"));
        q.push(Diagnostic::semantic(1, "b"));
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn has_fatal_detects_lexical_and_syntactic() {
        let mut q = DiagnosticQueue::new();
        assert!(!q.has_fatal());
        q.push(Diagnostic::semantic(1, "a"));
        assert!(!q.has_fatal());
        q.push(Diagnostic::lexical(1, "b"));
        assert!(q.has_fatal());
    }
}
