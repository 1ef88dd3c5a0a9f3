//! Lexer for LA using logos.
//!
//! Produces a flat token stream for the parser, plus any lexical
//! diagnostics raised along the way. Grounded on `ori_lexer`: a `logos`
//! `RawToken` enum for the mechanical part of scanning, converted to the
//! public `TokenKind` by a separate pass that interns identifiers and
//! string literals.

mod token;

pub use token::{Token, TokenKind};

use la_diagnostic::{errors, Diagnostic};
use la_ir::{Interner, Span};
use logos::Logos;

/// Raw token from logos, before conversion to [`TokenKind`].
///
/// `{ ... }` comments and `"..."` strings are handled by callbacks that
/// scan `lexer.remainder()` by hand rather than by regex, because an
/// unterminated comment/string must still be classified and reported
/// rather than silently falling through to "simbolo nao identificado".
/// Each callback returns whether it found its closing delimiter.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
enum RawToken {
    #[token("{", scan_comment)]
    Comment(bool),

    #[token("\"", scan_string)]
    Str(bool),

    #[token("declare")]
    Declare,
    #[token("tipo")]
    Tipo,
    #[token("registro")]
    Registro,
    #[token("fimregistro")]
    Fimregistro,
    #[token("constante")]
    Constante,
    #[token("funcao")]
    Funcao,
    #[token("procedimento")]
    Procedimento,
    #[token("inicio")]
    Inicio,
    #[token("fim")]
    Fim,
    #[token("se")]
    Se,
    #[token("entao")]
    Entao,
    #[token("senao")]
    Senao,
    #[token("fimse")]
    Fimse,
    #[token("enquanto")]
    Enquanto,
    #[token("faca")]
    Faca,
    #[token("fimenquanto")]
    Fimenquanto,
    #[token("para")]
    Para,
    #[token("de")]
    De,
    #[token("ate")]
    Ate,
    #[token("fimpara")]
    Fimpara,
    #[token("caso")]
    Caso,
    #[token("seja")]
    Seja,
    #[token("fimcaso")]
    Fimcaso,
    #[token("leia")]
    Leia,
    #[token("escreva")]
    Escreva,
    #[token("retorne")]
    Retorne,
    #[token("vetor")]
    Vetor,
    #[token("e")]
    E,
    #[token("ou")]
    Ou,
    #[token("nao")]
    Nao,
    #[token("inteiro")]
    Inteiro,
    #[token("real")]
    Real,
    #[token("literal")]
    Literal,
    #[token("logico")]
    Logico,
    #[token("verdadeiro")]
    Verdadeiro,
    #[token("falso")]
    Falso,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token("..")]
    DotDot,
    #[token(".")]
    Dot,
    #[token("<-")]
    Assign,
    #[token("<=")]
    Le,
    #[token(">=")]
    Ge,
    #[token("<>")]
    Ne,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("=")]
    Eq,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("^")]
    Caret,
    #[token("&")]
    Amp,

    #[regex(r"[0-9]+\.[0-9]+")]
    NumReal,
    #[regex(r"[0-9]+")]
    NumInt,
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
}

/// Scan past a `{` looking for the closing `}`. Returns `true` if found.
fn scan_comment(lex: &mut logos::Lexer<'_, RawToken>) -> bool {
    let rest = lex.remainder();
    match rest.find('}') {
        Some(idx) => {
            lex.bump(idx + 1);
            true
        }
        None => {
            lex.bump(rest.len());
            false
        }
    }
}

/// Scan past a `"` looking for the closing `"`. LA strings have no escape
/// processing, so the first subsequent `"` always closes the literal.
fn scan_string(lex: &mut logos::Lexer<'_, RawToken>) -> bool {
    let rest = lex.remainder();
    match rest.find('"') {
        Some(idx) => {
            lex.bump(idx + 1);
            true
        }
        None => {
            lex.bump(rest.len());
            false
        }
    }
}

/// Lex `source` into a token stream and any lexical diagnostics.
///
/// Stops at the first lexical error (SPEC_FULL §7: lexical failures are
/// fatal) and returns the diagnostics collected so far alongside the
/// tokens scanned up to that point.
pub fn lex(source: &str, interner: &mut Interner) -> (Vec<Token>, Vec<Diagnostic>) {
    let mut tokens = Vec::new();
    let mut diagnostics = Vec::new();
    let mut raw = RawToken::lexer(source);

    while let Some(result) = raw.next() {
        let range = raw.span();
        let span = Span::new(range.start as u32, range.end as u32);
        let line = line_of(source, range.start);
        let slice = raw.slice();

        match result {
            Ok(RawToken::Comment(true)) => {}
            Ok(RawToken::Comment(false)) => {
                diagnostics.push(errors::comentario_nao_fechado(line));
                break;
            }
            Ok(RawToken::Str(true)) => {
                let content = &slice[1..slice.len() - 1];
                tokens.push(Token::new(TokenKind::Cadeia(interner.intern(content)), span));
            }
            Ok(RawToken::Str(false)) => {
                diagnostics.push(errors::cadeia_nao_fechada(line));
                break;
            }
            Ok(raw_kind) => {
                let kind = convert(raw_kind, slice, interner);
                tokens.push(Token::new(kind, span));
            }
            Err(()) => {
                diagnostics.push(errors::simbolo_nao_identificado(line, slice));
                break;
            }
        }
    }

    let eof_pos = source.len() as u32;
    tokens.push(Token::new(TokenKind::Eof, Span::point(eof_pos)));
    (tokens, diagnostics)
}

fn line_of(source: &str, byte_offset: usize) -> u32 {
    source
        .as_bytes()
        .iter()
        .take(byte_offset)
        .filter(|&&b| b == b'\n')
        .count() as u32
        + 1
}

fn convert(raw: RawToken, slice: &str, interner: &mut Interner) -> TokenKind {
    match raw {
        RawToken::NumInt => TokenKind::NumInt(slice.parse().unwrap_or(0)),
        RawToken::NumReal => TokenKind::NumReal(slice.parse::<f64>().unwrap_or(0.0).to_bits()),
        RawToken::Ident => TokenKind::Ident(interner.intern(slice)),

        RawToken::Declare => TokenKind::Declare,
        RawToken::Tipo => TokenKind::Tipo,
        RawToken::Registro => TokenKind::Registro,
        RawToken::Fimregistro => TokenKind::Fimregistro,
        RawToken::Constante => TokenKind::Constante,
        RawToken::Funcao => TokenKind::Funcao,
        RawToken::Procedimento => TokenKind::Procedimento,
        RawToken::Inicio => TokenKind::Inicio,
        RawToken::Fim => TokenKind::Fim,
        RawToken::Se => TokenKind::Se,
        RawToken::Entao => TokenKind::Entao,
        RawToken::Senao => TokenKind::Senao,
        RawToken::Fimse => TokenKind::Fimse,
        RawToken::Enquanto => TokenKind::Enquanto,
        RawToken::Faca => TokenKind::Faca,
        RawToken::Fimenquanto => TokenKind::Fimenquanto,
        RawToken::Para => TokenKind::Para,
        RawToken::De => TokenKind::De,
        RawToken::Ate => TokenKind::Ate,
        RawToken::Fimpara => TokenKind::Fimpara,
        RawToken::Caso => TokenKind::Caso,
        RawToken::Seja => TokenKind::Seja,
        RawToken::Fimcaso => TokenKind::Fimcaso,
        RawToken::Leia => TokenKind::Leia,
        RawToken::Escreva => TokenKind::Escreva,
        RawToken::Retorne => TokenKind::Retorne,
        RawToken::Vetor => TokenKind::Vetor,
        RawToken::E => TokenKind::E,
        RawToken::Ou => TokenKind::Ou,
        RawToken::Nao => TokenKind::Nao,
        RawToken::Inteiro => TokenKind::Inteiro,
        RawToken::Real => TokenKind::Real,
        RawToken::Literal => TokenKind::Literal,
        RawToken::Logico => TokenKind::Logico,
        RawToken::Verdadeiro => TokenKind::Verdadeiro,
        RawToken::Falso => TokenKind::Falso,

        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Dot => TokenKind::Dot,
        RawToken::DotDot => TokenKind::DotDot,
        RawToken::Assign => TokenKind::Assign,
        RawToken::Le => TokenKind::Le,
        RawToken::Ge => TokenKind::Ge,
        RawToken::Ne => TokenKind::Ne,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,
        RawToken::Eq => TokenKind::Eq,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Caret => TokenKind::Caret,
        RawToken::Amp => TokenKind::Amp,

        RawToken::Comment(_) | RawToken::Str(_) => {
            unreachable!("comment/string tokens are handled before convert()")
        }
    }
}
