//! Wires the four compiler phases together: lex, parse, check, emit.
//!
//! Grounded on `oric::commands::compile`'s shape (read source, run each
//! phase, stop at the first fatal result) applied to SPEC_FULL §4's linear
//! lex -> parse -> check -> emit pipeline, with the check-only/emit mode
//! selection resolved in DESIGN.md's Open Question 2.

use la_diagnostic::{errors, render_report, DiagnosticQueue};
use la_ir::Interner;

/// What a compile run produced: C source, or a diagnostic report.
pub enum Outcome {
    Code(String),
    Report(String),
}

/// Runs the full pipeline on `source`. `force_check` mirrors the CLI's
/// trailing `--check` flag: even a semantically clean program is reported
/// as a check-only trailer instead of emitted as C.
///
/// Every diagnostic, from every phase, passes through one
/// `DiagnosticQueue` before being rendered (SPEC_FULL §4.1's "Ambient
/// expansion: diagnostic queue and tracing") rather than being rendered
/// straight from the phase's own `Vec<Diagnostic>`.
pub fn compile(source: &str, force_check: bool) -> Outcome {
    let mut interner = Interner::new();
    let mut queue = DiagnosticQueue::new();

    let (tokens, lex_diags) = la_lexer::lex(source, &mut interner);
    for diag in lex_diags {
        queue.push(diag);
    }
    if queue.has_fatal() {
        return Outcome::Report(render_report(&queue.drain()));
    }

    let program = match la_parse::parse_program(&tokens, source) {
        Ok(program) => program,
        Err(err) => {
            queue.push(errors::erro_sintatico(err.line(), err.token_text()));
            return Outcome::Report(render_report(&queue.drain()));
        }
    };

    let (env, diagnostics) = la_types::check_program(&program, &interner);
    for diag in diagnostics {
        queue.push(diag);
    }
    if !queue.is_empty() {
        return Outcome::Report(render_report(&queue.drain()));
    }

    if force_check {
        return Outcome::Report(render_report(&[]));
    }

    let mut ctx = la_codegen::CodegenContext::new(&interner, &env);
    Outcome::Code(la_codegen::emit_program(&mut ctx, &program))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn outcome_text(outcome: Outcome) -> (bool, String) {
        match outcome {
            Outcome::Code(text) => (true, text),
            Outcome::Report(text) => (false, text),
        }
    }

    #[test]
    fn clean_program_emits_c_by_default() {
        let source = "declare x : inteiro; inicio x <- 1; fim";
        let (is_code, text) = outcome_text(compile(source, false));
        assert!(is_code);
        assert!(text.contains("#include <stdio.h>"));
        assert!(text.contains("int main() {"));
    }

    #[test]
    fn force_check_reports_trailer_even_when_clean() {
        let source = "declare x : inteiro; inicio x <- 1; fim";
        let (is_code, text) = outcome_text(compile(source, true));
        assert!(!is_code);
        assert_eq!(text, "Fim da compilacao\n");
    }

    #[test]
    fn semantic_errors_always_yield_a_report() {
        let source = "inicio x <- 1; fim";
        let (is_code, text) = outcome_text(compile(source, false));
        assert!(!is_code);
        assert!(text.contains("identificador x nao declarado"));
        assert!(text.ends_with("Fim da compilacao\n"));
    }

    #[test]
    fn lexical_error_short_circuits_everything_else() {
        let source = "declare x : inteiro; inicio x <- @; fim";
        let (is_code, text) = outcome_text(compile(source, false));
        assert!(!is_code);
        assert!(text.contains("simbolo nao identificado"));
    }
}
