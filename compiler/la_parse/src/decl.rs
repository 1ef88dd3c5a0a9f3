//! `declare` / `tipo` / `constante` declarations and function/procedure
//! definitions.

use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::ty::{parse_record_body, parse_type};
use la_ir::ast::{ConstLiteral, FuncDecl, Param, VarDecl};
use la_lexer::TokenKind;

/// Whether the current token could start a `declare`/`tipo`/`constante`.
pub fn at_decl_start(cur: &Cursor<'_>) -> bool {
    matches!(
        cur.current_kind(),
        TokenKind::Declare | TokenKind::Tipo | TokenKind::Constante
    )
}

pub fn parse_decl(cur: &mut Cursor<'_>) -> Result<VarDecl, ParseError> {
    match cur.current_kind() {
        TokenKind::Declare => parse_var_decl(cur),
        TokenKind::Tipo => parse_tipo_decl(cur),
        TokenKind::Constante => parse_constante_decl(cur),
        _ => Err(cur.unexpected()),
    }
}

fn parse_var_decl(cur: &mut Cursor<'_>) -> Result<VarDecl, ParseError> {
    let line = cur.current_line();
    cur.expect(TokenKind::Declare)?;
    let mut names = vec![expect_ident(cur)?];
    while cur.eat(TokenKind::Comma) {
        names.push(expect_ident(cur)?);
    }
    cur.expect(TokenKind::Colon)?;
    let ty = parse_type(cur)?;
    cur.expect(TokenKind::Semicolon)?;
    Ok(VarDecl::Var { names, ty, line })
}

fn parse_tipo_decl(cur: &mut Cursor<'_>) -> Result<VarDecl, ParseError> {
    let line = cur.current_line();
    cur.expect(TokenKind::Tipo)?;
    let name = expect_ident(cur)?;
    cur.expect(TokenKind::Colon)?;
    let fields = parse_record_body(cur)?;
    cur.expect(TokenKind::Semicolon)?;
    Ok(VarDecl::TipoAlias { name, fields, line })
}

fn parse_constante_decl(cur: &mut Cursor<'_>) -> Result<VarDecl, ParseError> {
    let line = cur.current_line();
    cur.expect(TokenKind::Constante)?;
    let name = expect_ident(cur)?;
    cur.expect(TokenKind::Colon)?;
    let ty = parse_type(cur)?;
    cur.expect(TokenKind::Assign)?;
    let value = parse_const_literal(cur)?;
    cur.expect(TokenKind::Semicolon)?;
    Ok(VarDecl::Constante {
        name,
        ty,
        value,
        line,
    })
}

fn parse_const_literal(cur: &mut Cursor<'_>) -> Result<ConstLiteral, ParseError> {
    match cur.current_kind() {
        TokenKind::NumInt(n) => {
            cur.advance();
            Ok(ConstLiteral::Int(n))
        }
        TokenKind::NumReal(bits) => {
            cur.advance();
            Ok(ConstLiteral::Real(bits))
        }
        TokenKind::Cadeia(name) => {
            cur.advance();
            Ok(ConstLiteral::Cadeia(name))
        }
        TokenKind::Verdadeiro => {
            cur.advance();
            Ok(ConstLiteral::Bool(true))
        }
        TokenKind::Falso => {
            cur.advance();
            Ok(ConstLiteral::Bool(false))
        }
        _ => Err(cur.unexpected()),
    }
}

/// Whether the current token starts a `funcao`/`procedimento` definition.
pub fn at_func_start(cur: &Cursor<'_>) -> bool {
    matches!(
        cur.current_kind(),
        TokenKind::Funcao | TokenKind::Procedimento
    )
}

pub fn parse_func_decl(cur: &mut Cursor<'_>) -> Result<FuncDecl, ParseError> {
    let line = cur.current_line();
    let is_function = match cur.current_kind() {
        TokenKind::Funcao => true,
        TokenKind::Procedimento => false,
        _ => return Err(cur.unexpected()),
    };
    cur.advance();
    let name = expect_ident(cur)?;
    cur.expect(TokenKind::LParen)?;
    let params = parse_param_list(cur)?;
    cur.expect(TokenKind::RParen)?;
    let return_ty = if is_function {
        cur.expect(TokenKind::Colon)?;
        Some(parse_type(cur)?)
    } else {
        None
    };
    cur.expect(TokenKind::Inicio)?;
    let body = crate::stmt::parse_block(cur, &[TokenKind::Fim])?;
    cur.expect(TokenKind::Fim)?;
    Ok(FuncDecl {
        name,
        params,
        return_ty,
        body,
        line,
    })
}

fn parse_param_list(cur: &mut Cursor<'_>) -> Result<Vec<Param>, ParseError> {
    let mut params = Vec::new();
    if cur.check(TokenKind::RParen) {
        return Ok(params);
    }
    params.push(parse_param(cur)?);
    while cur.eat(TokenKind::Comma) {
        params.push(parse_param(cur)?);
    }
    Ok(params)
}

fn parse_param(cur: &mut Cursor<'_>) -> Result<Param, ParseError> {
    let name = expect_ident(cur)?;
    cur.expect(TokenKind::Colon)?;
    let ty = parse_type(cur)?;
    Ok(Param { name, ty })
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
