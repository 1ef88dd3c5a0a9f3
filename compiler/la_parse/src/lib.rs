//! Recursive-descent parser for LA.
//!
//! Grounded on `ori_parse`'s shape (a `Cursor` over a pre-lexed token
//! stream, grammar functions one per production, a dedicated error type)
//! without the speculative-parsing/snapshot machinery Ori's larger and more
//! ambiguous grammar needs — LA's grammar is small enough to parse with a
//! single token of lookahead throughout.

mod cursor;
mod decl;
mod error;
mod expr;
mod stmt;
mod ty;

pub use error::ParseError;

use cursor::Cursor;
use la_ir::ast::Program;
use la_ir::LineIndex;
use la_lexer::{Token, TokenKind};

/// Parse a full program: leading `declare`/`tipo`/`constante` items,
/// `funcao`/`procedimento` definitions, and exactly one `inicio ... fim`
/// main block.
pub fn parse_program(tokens: &[Token], source: &str) -> Result<Program, ParseError> {
    let lines = LineIndex::new(source);
    let mut cur = Cursor::new(tokens, &lines);

    let mut decls = Vec::new();
    while decl::at_decl_start(&cur) {
        decls.push(decl::parse_decl(&mut cur)?);
    }

    let mut functions = Vec::new();
    while decl::at_func_start(&cur) {
        functions.push(decl::parse_func_decl(&mut cur)?);
    }

    cur.expect(TokenKind::Inicio)?;
    let main = stmt::parse_block(&mut cur, &[TokenKind::Fim])?;
    cur.expect(TokenKind::Fim)?;

    if !cur.is_at_end() {
        return Err(cur.unexpected());
    }

    Ok(Program {
        decls,
        functions,
        main,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use la_ir::Interner;
    use la_lexer::lex;
    use pretty_assertions::assert_eq;

    fn parse(source: &str) -> Program {
        let mut interner = Interner::new();
        let (tokens, diags) = lex(source, &mut interner);
        assert!(diags.is_empty(), "lexer diagnostics: {diags:?}");
        parse_program(&tokens, source).expect("program should parse")
    }

    #[test]
    fn parses_a_minimal_program() {
        let program = parse("inicio fim");
        assert!(program.decls.is_empty());
        assert!(program.functions.is_empty());
        assert!(program.main.is_empty());
    }

    #[test]
    fn parses_global_declarations() {
        let program = parse("declare x : inteiro declare p : ^inteiro inicio fim");
        assert_eq!(program.decls.len(), 2);
    }

    #[test]
    fn parses_a_procedure_with_retorne() {
        let program = parse("procedimento p() inicio retorne 1 fim inicio fim");
        assert_eq!(program.functions.len(), 1);
        assert!(program.functions[0].is_procedure());
    }

    #[test]
    fn parses_the_case_statement_worked_example() {
        let program = parse(
            "declare x : inteiro inicio caso x seja 1..3 faca escreva(\"a\") senao escreva(\"b\") fimcaso fim",
        );
        assert_eq!(program.main.len(), 1);
    }

    #[test]
    fn rejects_a_trailing_token_after_fim() {
        let mut interner = Interner::new();
        let (tokens, _) = lex("inicio fim declare", &mut interner);
        let err = parse_program(&tokens, "inicio fim declare").unwrap_err();
        assert_eq!(err.token_text(), "declare");
    }

    #[test]
    fn syntax_error_reports_the_offending_line() {
        let mut interner = Interner::new();
        let source = "declare x inteiro\ninicio fim";
        let (tokens, _) = lex(source, &mut interner);
        let err = parse_program(&tokens, source).unwrap_err();
        assert_eq!(err.line(), 1);
    }
}
