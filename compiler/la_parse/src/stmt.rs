//! Statement grammar.

use crate::cursor::Cursor;
use crate::decl;
use crate::error::ParseError;
use crate::expr::{parse_arg_list, parse_expr, parse_place_tail};
use la_ir::ast::{AssignTarget, CaseArm, CaseLabel, Stmt};
use la_lexer::TokenKind;

/// Parse statements until the cursor sits on one of `terminators`.
pub fn parse_block(cur: &mut Cursor<'_>, terminators: &[TokenKind]) -> Result<Vec<Stmt>, ParseError> {
    let mut stmts = Vec::new();
    while !terminators.iter().any(|t| cur.check(*t)) {
        stmts.push(parse_stmt(cur)?);
    }
    Ok(stmts)
}

pub fn parse_stmt(cur: &mut Cursor<'_>) -> Result<Stmt, ParseError> {
    if decl::at_decl_start(cur) {
        return Ok(Stmt::LocalDecl(decl::parse_decl(cur)?));
    }
    match cur.current_kind() {
        TokenKind::Leia => parse_leia(cur),
        TokenKind::Escreva => parse_escreva(cur),
        TokenKind::Se => parse_se(cur),
        TokenKind::Caso => parse_caso(cur),
        TokenKind::Para => parse_para(cur),
        TokenKind::Enquanto => parse_enquanto(cur),
        TokenKind::Faca => parse_faca_ate(cur),
        TokenKind::Retorne => parse_retorne(cur),
        TokenKind::Caret => parse_assign_or_call(cur),
        TokenKind::Ident(_) => parse_assign_or_call(cur),
        _ => Err(cur.unexpected()),
    }
}

fn parse_assign_target(cur: &mut Cursor<'_>) -> Result<AssignTarget, ParseError> {
    let deref = cur.eat(TokenKind::Caret);
    let base = match cur.current_kind() {
        TokenKind::Ident(name) => {
            cur.advance();
            name
        }
        _ => return Err(cur.unexpected()),
    };
    let place = parse_place_tail(cur, base)?;
    Ok(AssignTarget { deref, place })
}

/// `^`/identifier leads either an assignment (`... <- expr`) or a bare
/// procedure call statement (`nome(args)`); both start the same way, so
/// they share one entry point and branch on what follows the target.
fn parse_assign_or_call(cur: &mut Cursor<'_>) -> Result<Stmt, ParseError> {
    let line = cur.current_line();
    if !cur.check(TokenKind::Caret) {
        if let TokenKind::Ident(name) = cur.current_kind() {
            let is_call = matches!(cur.peek_kind(1), Some(TokenKind::LParen));
            if is_call {
                cur.advance();
                cur.expect(TokenKind::LParen)?;
                let args = parse_arg_list(cur)?;
                cur.expect(TokenKind::RParen)?;
                cur.expect(TokenKind::Semicolon)?;
                return Ok(Stmt::CallStmt { callee: name, args, line });
            }
        }
    }
    let target = parse_assign_target(cur)?;
    cur.expect(TokenKind::Assign)?;
    let value = parse_expr(cur)?;
    cur.expect(TokenKind::Semicolon)?;
    Ok(Stmt::Assign { target, value, line })
}

fn parse_leia(cur: &mut Cursor<'_>) -> Result<Stmt, ParseError> {
    let line = cur.current_line();
    cur.expect(TokenKind::Leia)?;
    cur.expect(TokenKind::LParen)?;
    let target = parse_assign_target(cur)?;
    cur.expect(TokenKind::RParen)?;
    cur.expect(TokenKind::Semicolon)?;
    Ok(Stmt::Leia { target, line })
}

fn parse_escreva(cur: &mut Cursor<'_>) -> Result<Stmt, ParseError> {
    let line = cur.current_line();
    cur.expect(TokenKind::Escreva)?;
    cur.expect(TokenKind::LParen)?;
    let value = parse_expr(cur)?;
    cur.expect(TokenKind::RParen)?;
    cur.expect(TokenKind::Semicolon)?;
    Ok(Stmt::Escreva { value, line })
}

fn parse_se(cur: &mut Cursor<'_>) -> Result<Stmt, ParseError> {
    let line = cur.current_line();
    cur.expect(TokenKind::Se)?;
    let cond = parse_expr(cur)?;
    cur.expect(TokenKind::Entao)?;
    let then_branch = parse_block(cur, &[TokenKind::Senao, TokenKind::Fimse])?;
    let else_branch = if cur.eat(TokenKind::Senao) {
        parse_block(cur, &[TokenKind::Fimse])?
    } else {
        Vec::new()
    };
    cur.expect(TokenKind::Fimse)?;
    Ok(Stmt::Se {
        cond,
        then_branch,
        else_branch,
        line,
    })
}

fn parse_caso(cur: &mut Cursor<'_>) -> Result<Stmt, ParseError> {
    let line = cur.current_line();
    cur.expect(TokenKind::Caso)?;
    let discriminant = parse_expr(cur)?;
    cur.expect(TokenKind::Seja)?;
    let mut arms = Vec::new();
    while is_case_label_start(cur) {
        arms.push(parse_case_arm(cur)?);
    }
    let else_branch = if cur.eat(TokenKind::Senao) {
        parse_block(cur, &[TokenKind::Fimcaso])?
    } else {
        Vec::new()
    };
    cur.expect(TokenKind::Fimcaso)?;
    Ok(Stmt::Caso {
        discriminant,
        arms,
        else_branch,
        line,
    })
}

fn parse_case_arm(cur: &mut Cursor<'_>) -> Result<CaseArm, ParseError> {
    let mut labels = vec![parse_case_label(cur)?];
    while cur.eat(TokenKind::Comma) {
        labels.push(parse_case_label(cur)?);
    }
    cur.expect(TokenKind::Faca)?;
    let mut body = Vec::new();
    while !matches!(cur.current_kind(), TokenKind::Senao | TokenKind::Fimcaso)
        && !is_case_label_start(cur)
    {
        body.push(parse_stmt(cur)?);
    }
    Ok(CaseArm { labels, body })
}

/// A bare integer or a unary-negated integer can only appear, at
/// statement-start position inside a `caso` arm, as the start of the next
/// arm's label list — no LA statement otherwise begins with one.
fn is_case_label_start(cur: &Cursor<'_>) -> bool {
    matches!(cur.current_kind(), TokenKind::NumInt(_) | TokenKind::Minus)
}

fn parse_case_label(cur: &mut Cursor<'_>) -> Result<CaseLabel, ParseError> {
    let lo = parse_signed_int(cur)?;
    if cur.eat(TokenKind::DotDot) {
        let hi = parse_signed_int(cur)?;
        Ok(CaseLabel::Range(lo, hi))
    } else {
        Ok(CaseLabel::Value(lo))
    }
}

fn parse_signed_int(cur: &mut Cursor<'_>) -> Result<i64, ParseError> {
    let negative = cur.eat(TokenKind::Minus);
    match cur.current_kind() {
        TokenKind::NumInt(n) => {
            cur.advance();
            Ok(if negative { -n } else { n })
        }
        _ => Err(cur.unexpected()),
    }
}

fn parse_para(cur: &mut Cursor<'_>) -> Result<Stmt, ParseError> {
    let line = cur.current_line();
    cur.expect(TokenKind::Para)?;
    let var = match cur.current_kind() {
        TokenKind::Ident(name) => {
            cur.advance();
            name
        }
        _ => return Err(cur.unexpected()),
    };
    cur.expect(TokenKind::De)?;
    let from = parse_expr(cur)?;
    cur.expect(TokenKind::Ate)?;
    let to = parse_expr(cur)?;
    cur.expect(TokenKind::Faca)?;
    let body = parse_block(cur, &[TokenKind::Fimpara])?;
    cur.expect(TokenKind::Fimpara)?;
    Ok(Stmt::Para {
        var,
        from,
        to,
        body,
        line,
    })
}

fn parse_enquanto(cur: &mut Cursor<'_>) -> Result<Stmt, ParseError> {
    let line = cur.current_line();
    cur.expect(TokenKind::Enquanto)?;
    let cond = parse_expr(cur)?;
    cur.expect(TokenKind::Faca)?;
    let body = parse_block(cur, &[TokenKind::Fimenquanto])?;
    cur.expect(TokenKind::Fimenquanto)?;
    Ok(Stmt::Enquanto { cond, body, line })
}

/// `faca ... ate E;` — repeat-until. Unlike the other loop forms, the
/// body is terminated by `ate`, not by a dedicated `fim...` keyword.
fn parse_faca_ate(cur: &mut Cursor<'_>) -> Result<Stmt, ParseError> {
    let line = cur.current_line();
    cur.expect(TokenKind::Faca)?;
    let body = parse_block(cur, &[TokenKind::Ate])?;
    cur.expect(TokenKind::Ate)?;
    let cond = parse_expr(cur)?;
    cur.expect(TokenKind::Semicolon)?;
    Ok(Stmt::FacaAte { body, cond, line })
}

fn parse_retorne(cur: &mut Cursor<'_>) -> Result<Stmt, ParseError> {
    let line = cur.current_line();
    cur.expect(TokenKind::Retorne)?;
    let value = parse_expr(cur)?;
    cur.expect(TokenKind::Semicolon)?;
    Ok(Stmt::Retorne { value, line })
}
