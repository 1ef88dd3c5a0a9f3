//! Expression grammar: precedence-climbing recursive descent over
//! `ou` / `e` / relational / additive / multiplicative / unary / primary,
//! the usual shape for a small imperative language with no user-defined
//! operators to worry about.

use crate::cursor::Cursor;
use crate::error::ParseError;
use la_ir::ast::{BinaryOp, Expr, ExprKind, Place, Projection, UnaryOp};
use la_lexer::TokenKind;

pub fn parse_expr(cur: &mut Cursor<'_>) -> Result<Expr, ParseError> {
    parse_or(cur)
}

fn parse_or(cur: &mut Cursor<'_>) -> Result<Expr, ParseError> {
    let mut lhs = parse_and(cur)?;
    while cur.check(TokenKind::Ou) {
        let line = cur.current_line();
        cur.advance();
        let rhs = parse_and(cur)?;
        lhs = combine(BinaryOp::Or, lhs, rhs, line);
    }
    Ok(lhs)
}

fn parse_and(cur: &mut Cursor<'_>) -> Result<Expr, ParseError> {
    let mut lhs = parse_relational(cur)?;
    while cur.check(TokenKind::E) {
        let line = cur.current_line();
        cur.advance();
        let rhs = parse_relational(cur)?;
        lhs = combine(BinaryOp::And, lhs, rhs, line);
    }
    Ok(lhs)
}

fn parse_relational(cur: &mut Cursor<'_>) -> Result<Expr, ParseError> {
    let lhs = parse_additive(cur)?;
    let op = match cur.current_kind() {
        TokenKind::Eq => BinaryOp::Eq,
        TokenKind::Ne => BinaryOp::Ne,
        TokenKind::Lt => BinaryOp::Lt,
        TokenKind::Gt => BinaryOp::Gt,
        TokenKind::Le => BinaryOp::Le,
        TokenKind::Ge => BinaryOp::Ge,
        _ => return Ok(lhs),
    };
    let line = cur.current_line();
    cur.advance();
    let rhs = parse_additive(cur)?;
    Ok(combine(op, lhs, rhs, line))
}

fn parse_additive(cur: &mut Cursor<'_>) -> Result<Expr, ParseError> {
    let mut lhs = parse_multiplicative(cur)?;
    loop {
        let op = match cur.current_kind() {
            TokenKind::Plus => BinaryOp::Add,
            TokenKind::Minus => BinaryOp::Sub,
            _ => break,
        };
        let line = cur.current_line();
        cur.advance();
        let rhs = parse_multiplicative(cur)?;
        lhs = combine(op, lhs, rhs, line);
    }
    Ok(lhs)
}

fn parse_multiplicative(cur: &mut Cursor<'_>) -> Result<Expr, ParseError> {
    let mut lhs = parse_unary(cur)?;
    loop {
        let op = match cur.current_kind() {
            TokenKind::Star => BinaryOp::Mul,
            TokenKind::Slash => BinaryOp::Div,
            _ => break,
        };
        let line = cur.current_line();
        cur.advance();
        let rhs = parse_unary(cur)?;
        lhs = combine(op, lhs, rhs, line);
    }
    Ok(lhs)
}

fn parse_unary(cur: &mut Cursor<'_>) -> Result<Expr, ParseError> {
    let line = cur.current_line();
    match cur.current_kind() {
        TokenKind::Minus => {
            cur.advance();
            let operand = parse_unary(cur)?;
            let span = operand.span;
            Ok(Expr::new(
                ExprKind::Unary {
                    op: UnaryOp::Neg,
                    operand: Box::new(operand),
                },
                span,
                line,
            ))
        }
        TokenKind::Nao => {
            cur.advance();
            let operand = parse_unary(cur)?;
            let span = operand.span;
            Ok(Expr::new(
                ExprKind::Unary {
                    op: UnaryOp::Not,
                    operand: Box::new(operand),
                },
                span,
                line,
            ))
        }
        TokenKind::Caret => {
            cur.advance();
            let operand = parse_unary(cur)?;
            let span = operand.span;
            Ok(Expr::new(ExprKind::Deref(Box::new(operand)), span, line))
        }
        TokenKind::Amp => {
            cur.advance();
            let operand = parse_unary(cur)?;
            let span = operand.span;
            Ok(Expr::new(ExprKind::Ref(Box::new(operand)), span, line))
        }
        _ => parse_primary(cur),
    }
}

fn parse_primary(cur: &mut Cursor<'_>) -> Result<Expr, ParseError> {
    let line = cur.current_line();
    let span = cur.current().span;
    match cur.current_kind() {
        TokenKind::NumInt(n) => {
            cur.advance();
            Ok(Expr::new(ExprKind::NumInt(n), span, line))
        }
        TokenKind::NumReal(bits) => {
            cur.advance();
            Ok(Expr::new(ExprKind::NumReal(bits), span, line))
        }
        TokenKind::Cadeia(name) => {
            cur.advance();
            Ok(Expr::new(ExprKind::Cadeia(name), span, line))
        }
        TokenKind::Verdadeiro => {
            cur.advance();
            Ok(Expr::new(ExprKind::Verdadeiro, span, line))
        }
        TokenKind::Falso => {
            cur.advance();
            Ok(Expr::new(ExprKind::Falso, span, line))
        }
        TokenKind::LParen => {
            cur.advance();
            let inner = parse_expr(cur)?;
            cur.expect(TokenKind::RParen)?;
            Ok(inner)
        }
        TokenKind::Ident(name) => {
            cur.advance();
            if cur.eat(TokenKind::LParen) {
                let args = parse_arg_list(cur)?;
                cur.expect(TokenKind::RParen)?;
                let end = cur.current().span;
                return Ok(Expr::new(
                    ExprKind::Call { callee: name, args },
                    span.merge(end),
                    line,
                ));
            }
            let place = parse_place_tail(cur, name)?;
            Ok(Expr::new(ExprKind::Place(place), span, line))
        }
        _ => Err(cur.unexpected()),
    }
}

/// Parse the `.field` / `[index]` chain following a base identifier.
pub fn parse_place_tail(
    cur: &mut Cursor<'_>,
    base: la_ir::Name,
) -> Result<Place, ParseError> {
    let mut projections = Vec::new();
    loop {
        if cur.eat(TokenKind::Dot) {
            let field = expect_ident(cur)?;
            projections.push(Projection::Field(field));
        } else if cur.eat(TokenKind::LBracket) {
            let index = parse_expr(cur)?;
            cur.expect(TokenKind::RBracket)?;
            projections.push(Projection::Index(Box::new(index)));
        } else {
            break;
        }
    }
    Ok(Place { base, projections })
}

fn expect_ident(cur: &mut Cursor<'_>) -> Result<la_ir::Name, ParseError> {
    match cur.current_kind() {
        TokenKind::Ident(name) => {
            cur.advance();
            Ok(name)
        }
        _ => Err(cur.unexpected()),
    }
}

pub fn parse_arg_list(cur: &mut Cursor<'_>) -> Result<Vec<Expr>, ParseError> {
    let mut args = Vec::new();
    if cur.check(TokenKind::RParen) {
        return Ok(args);
    }
    args.push(parse_expr(cur)?);
    while cur.eat(TokenKind::Comma) {
        args.push(parse_expr(cur)?);
    }
    Ok(args)
}

fn combine(op: BinaryOp, lhs: Expr, rhs: Expr, line: u32) -> Expr {
    let span = lhs.span.merge(rhs.span);
    Expr::new(
        ExprKind::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        },
        span,
        line,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use la_ir::{Interner, LineIndex};
    use la_lexer::lex;

    fn parse(source: &str) -> Expr {
        let mut interner = Interner::new();
        let (tokens, diags) = lex(source, &mut interner);
        assert!(diags.is_empty(), "{diags:?}");
        let lines = LineIndex::new(source);
        let mut cur = Cursor::new(&tokens, &lines);
        parse_expr(&mut cur).expect("expression should parse")
    }

    #[test]
    fn multiplicative_binds_tighter_than_additive() {
        let expr = parse("1 + 2 * 3");
        match expr.kind {
            ExprKind::Binary { op: BinaryOp::Add, rhs, .. } => {
                assert!(matches!(rhs.kind, ExprKind::Binary { op: BinaryOp::Mul, .. }));
            }
            other => panic!("expected Add at top, got {other:?}"),
        }
    }

    #[test]
    fn relational_binds_looser_than_additive() {
        let expr = parse("1 + 1 = 2");
        assert!(matches!(
            expr.kind,
            ExprKind::Binary { op: BinaryOp::Eq, .. }
        ));
    }

    #[test]
    fn parens_override_precedence() {
        let expr = parse("(1 + 2) * 3");
        match expr.kind {
            ExprKind::Binary { op: BinaryOp::Mul, lhs, .. } => {
                assert!(matches!(lhs.kind, ExprKind::Binary { op: BinaryOp::Add, .. }));
            }
            other => panic!("expected Mul at top, got {other:?}"),
        }
    }

    #[test]
    fn indexed_and_dotted_place_chain() {
        let expr = parse("registros[1].campo");
        match expr.kind {
            ExprKind::Place(place) => {
                assert_eq!(place.projections.len(), 2);
                assert!(matches!(place.projections[0], Projection::Index(_)));
                assert!(matches!(place.projections[1], Projection::Field(_)));
            }
            other => panic!("expected Place, got {other:?}"),
        }
    }

    #[test]
    fn function_call_in_expression_position() {
        let expr = parse("soma(1, 2)");
        match expr.kind {
            ExprKind::Call { args, .. } => assert_eq!(args.len(), 2),
            other => panic!("expected Call, got {other:?}"),
        }
    }
}
