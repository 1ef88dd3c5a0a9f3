//! Type grammar: basic types, `^T` pointers, `vetor[dim] de T`, named
//! aliases, and anonymous `registro ... fimregistro` bodies.

use crate::cursor::Cursor;
use crate::error::ParseError;
use la_ir::ast::{ArrayDim, BasicType, FieldDecl, TypeRef};
use la_lexer::TokenKind;

pub fn parse_type(cur: &mut Cursor<'_>) -> Result<TypeRef, ParseError> {
    match cur.current_kind() {
        TokenKind::Inteiro => {
            cur.advance();
            Ok(TypeRef::Basic(BasicType::Inteiro))
        }
        TokenKind::Real => {
            cur.advance();
            Ok(TypeRef::Basic(BasicType::Real))
        }
        TokenKind::Literal => {
            cur.advance();
            Ok(TypeRef::Basic(BasicType::Literal))
        }
        TokenKind::Logico => {
            cur.advance();
            Ok(TypeRef::Basic(BasicType::Logico))
        }
        TokenKind::Caret => {
            cur.advance();
            let inner = parse_type(cur)?;
            Ok(TypeRef::Pointer(Box::new(inner)))
        }
        TokenKind::Vetor => {
            cur.advance();
            cur.expect(TokenKind::LBracket)?;
            let dim = parse_array_dim(cur)?;
            cur.expect(TokenKind::RBracket)?;
            expect_keyword_de(cur)?;
            let elem = parse_type(cur)?;
            Ok(TypeRef::Array {
                dim,
                elem: Box::new(elem),
            })
        }
        TokenKind::Registro => parse_record_body(cur).map(TypeRef::Record),
        TokenKind::Ident(name) => {
            cur.advance();
            Ok(TypeRef::Named(name))
        }
        _ => Err(cur.unexpected()),
    }
}

fn parse_array_dim(cur: &mut Cursor<'_>) -> Result<ArrayDim, ParseError> {
    match cur.current_kind() {
        TokenKind::NumInt(n) => {
            cur.advance();
            Ok(ArrayDim::Literal(n))
        }
        TokenKind::Ident(name) => {
            cur.advance();
            Ok(ArrayDim::Constant(name))
        }
        _ => Err(cur.unexpected()),
    }
}

/// `de` is not a distinct punctuation token, just the keyword between a
/// `vetor[dim]` and its element type.
fn expect_keyword_de(cur: &mut Cursor<'_>) -> Result<(), ParseError> {
    cur.expect(TokenKind::De)?;
    Ok(())
}

pub fn parse_record_body(cur: &mut Cursor<'_>) -> Result<Vec<FieldDecl>, ParseError> {
    cur.expect(TokenKind::Registro)?;
    let mut fields = Vec::new();
    while !cur.check(TokenKind::Fimregistro) {
        let line = cur.current_line();
        let name = match cur.current_kind() {
            TokenKind::Ident(name) => {
                cur.advance();
                name
            }
            _ => return Err(cur.unexpected()),
        };
        cur.expect(TokenKind::Colon)?;
        let ty = parse_type(cur)?;
        cur.expect(TokenKind::Semicolon)?;
        fields.push(FieldDecl { name, ty, line });
    }
    cur.expect(TokenKind::Fimregistro)?;
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use la_ir::{Interner, LineIndex};
    use la_lexer::lex;

    fn parse(source: &str) -> TypeRef {
        let mut interner = Interner::new();
        let (tokens, diags) = lex(source, &mut interner);
        assert!(diags.is_empty(), "{diags:?}");
        let lines = LineIndex::new(source);
        let mut cur = Cursor::new(&tokens, &lines);
        parse_type(&mut cur).expect("type should parse")
    }

    #[test]
    fn pointer_to_basic() {
        assert_eq!(parse("^inteiro"), TypeRef::Pointer(Box::new(TypeRef::Basic(BasicType::Inteiro))));
    }

    #[test]
    fn array_with_literal_dim() {
        match parse("vetor[10] de real") {
            TypeRef::Array { dim: ArrayDim::Literal(10), elem } => {
                assert_eq!(*elem, TypeRef::Basic(BasicType::Real));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn array_with_constant_dim() {
        let mut interner = Interner::new();
        let n = interner.intern("N");
        match parse("vetor[N] de inteiro") {
            TypeRef::Array { dim: ArrayDim::Constant(name), .. } => assert_eq!(name, n),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn anonymous_record_body() {
        match parse("registro campo : inteiro; fimregistro") {
            TypeRef::Record(fields) => assert_eq!(fields.len(), 1),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
