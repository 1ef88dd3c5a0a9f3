//! Post-conversion token type handed to the parser.
//!
//! Mirrors `ori_ir::token::Token` (kind + span) minus everything that only
//! exists for Salsa incremental reuse — tags, flags, whitespace-context
//! bits. LA is lexed fresh on every invocation, so there is nothing to
//! cut over.

use la_ir::{Name, Span};

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum TokenKind {
    // Literals
    NumInt(i64),
    NumReal(u64), // f64::to_bits, for Eq/Hash
    Cadeia(Name),
    Ident(Name),

    // Keywords
    Declare,
    Tipo,
    Registro,
    Fimregistro,
    Constante,
    Funcao,
    Procedimento,
    Inicio,
    Fim,
    Se,
    Entao,
    Senao,
    Fimse,
    Enquanto,
    Faca,
    Fimenquanto,
    Para,
    De,
    Ate,
    Fimpara,
    Caso,
    Seja,
    Fimcaso,
    Leia,
    Escreva,
    Retorne,
    Vetor,
    E,
    Ou,
    Nao,
    Inteiro,
    Real,
    Literal,
    Logico,
    Verdadeiro,
    Falso,

    // Punctuation
    LParen,
    RParen,
    LBracket,
    RBracket,
    Comma,
    Colon,
    Semicolon,
    Dot,
    DotDot,
    Assign, // `<-`
    Le,     // `<=`
    Ge,     // `>=`
    Ne,     // `<>`
    Lt,
    Gt,
    Eq,
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    Amp,

    Eof,
}

impl TokenKind {
    /// Text used to render `erro sintatico proximo a <token-text>`
    /// diagnostics, for kinds whose text is fixed rather than sourced from
    /// the original slice.
    pub fn fixed_text(self) -> Option<&'static str> {
        use TokenKind::*;
        Some(match self {
            Declare => "declare",
            Tipo => "tipo",
            Registro => "registro",
            Fimregistro => "fimregistro",
            Constante => "constante",
            Funcao => "funcao",
            Procedimento => "procedimento",
            Inicio => "inicio",
            Fim => "fim",
            Se => "se",
            Entao => "entao",
            Senao => "senao",
            Fimse => "fimse",
            Enquanto => "enquanto",
            Faca => "faca",
            Fimenquanto => "fimenquanto",
            Para => "para",
            De => "de",
            Ate => "ate",
            Fimpara => "fimpara",
            Caso => "caso",
            Seja => "seja",
            Fimcaso => "fimcaso",
            Leia => "leia",
            Escreva => "escreva",
            Retorne => "retorne",
            Vetor => "vetor",
            E => "e",
            Ou => "ou",
            Nao => "nao",
            Inteiro => "inteiro",
            Real => "real",
            Literal => "literal",
            Logico => "logico",
            Verdadeiro => "verdadeiro",
            Falso => "falso",
            LParen => "(",
            RParen => ")",
            LBracket => "[",
            RBracket => "]",
            Comma => ",",
            Colon => ":",
            Semicolon => ";",
            Dot => ".",
            DotDot => "..",
            Assign => "<-",
            Le => "<=",
            Ge => ">=",
            Ne => "<>",
            Lt => "<",
            Gt => ">",
            Eq => "=",
            Plus => "+",
            Minus => "-",
            Star => "*",
            Slash => "/",
            Caret => "^",
            Amp => "&",
            Eof => "<EOF>",
            NumInt(_) | NumReal(_) | Cadeia(_) | Ident(_) => return None,
        })
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}
