//! Rendering the final check-only diagnostic report.
//!
//! SPEC_FULL §4.1: "every error is a single line"; the report ends with
//! `Fim da compilacao\n` whenever it is the whole output (after a fatal
//! lexical/syntactic error, or as the trailer of a clean or dirty
//! check-only run).

use crate::Diagnostic;

pub const TRAILER: &str = "Fim da compilacao\n";

/// Render diagnostics as the spec's line-oriented report, followed by the
/// mandatory trailer.
pub fn render_report(diagnostics: &[Diagnostic]) -> String {
    let mut out = String::new();
    for diag in diagnostics {
        out.push_str(&diag.to_string());
        out.push('\n');
    }
    out.push_str(TRAILER);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_report_is_just_the_trailer() {
        assert_eq!(render_report(&[]), "Fim da compilacao\n");
    }

    #[test]
    fn report_matches_scenario_one() {
        let diags = vec![Diagnostic::semantic(
            2,
            "identificador x ja declarado anteriormente",
        )];
        assert_eq!(
            render_report(&diags),
            "Linha 2: identificador x ja declarado anteriormente\nFim da compilacao\n"
        );
    }

    #[test]
    fn report_preserves_order_for_multiple_diagnostics() {
        let diags = vec![
            Diagnostic::semantic(1, "a"),
            Diagnostic::semantic(1, "b"),
            Diagnostic::semantic(3, "c"),
        ];
        assert_eq!(
            render_report(&diags),
            "Linha 1: a\nLinha 1: b\nLinha 3: c\nFim da compilacao\n"
        );
    }
}
