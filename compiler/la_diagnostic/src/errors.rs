//! Typed diagnostic constructors.
//!
//! Grounded on `ori_diagnostic::errors` (which exposes one function per
//! diagnostic shape — `type_mismatch`, `unexpected_token`, etc. — instead
//! of letting call sites format message strings ad hoc). Every distinct
//! message shape named in SPEC_FULL §4.1/§4.3 gets its own constructor
//! here so the exact wording lives in one place.

use crate::Diagnostic;

/// Lexical error: a fragment of length <= 1 that matches no token rule.
pub fn simbolo_nao_identificado(line: u32, fragment: &str) -> Diagnostic {
    Diagnostic::lexical(line, format!("{fragment} - simbolo nao identificado"))
}

/// Lexical error: a `{ ... }` comment with no closing brace before EOF.
pub fn comentario_nao_fechado(line: u32) -> Diagnostic {
    Diagnostic::lexical(line, "comentario nao fechado")
}

/// Lexical error: a `"..."` string with no closing quote before EOF.
pub fn cadeia_nao_fechada(line: u32) -> Diagnostic {
    Diagnostic::lexical(line, "cadeia literal nao fechada")
}

/// Syntactic error: parser could not continue at `token_text`.
///
/// The literal token `<EOF>` is rewritten to `EOF`, matching the original
/// `ParserErrorListener`'s handling of ANTLR's end-of-file token text.
pub fn erro_sintatico(line: u32, token_text: &str) -> Diagnostic {
    let text = if token_text == "<EOF>" { "EOF" } else { token_text };
    Diagnostic::syntactic(line, format!("erro sintatico proximo a {text}"))
}

/// Semantic error: a name was declared twice in the same flat namespace.
pub fn ja_declarado(line: u32, name: &str) -> Diagnostic {
    Diagnostic::semantic(
        line,
        format!("identificador {name} ja declarado anteriormente"),
    )
}

/// Semantic error: a name was used but never resolved.
pub fn identificador_nao_declarado(line: u32, name: &str) -> Diagnostic {
    Diagnostic::semantic(line, format!("identificador {name} nao declarado"))
}

/// Semantic error: a type name was used but is neither basic, `^basic`,
/// nor a member of `customTipos`.
pub fn tipo_nao_declarado(line: u32, type_name: &str) -> Diagnostic {
    Diagnostic::semantic(line, format!("tipo {type_name} nao declarado"))
}

/// Semantic error: an assignment leaf is incompatible with its LHS type.
pub fn atribuicao_nao_compativel(line: u32, lhs_text: &str) -> Diagnostic {
    Diagnostic::semantic(
        line,
        format!("atribuicao nao compativel para {lhs_text}"),
    )
}

/// Semantic error: a `retorne` appears in a procedure body.
pub fn retorne_nao_permitido(line: u32) -> Diagnostic {
    Diagnostic::semantic(line, "comando retorne nao permitido nesse escopo")
}

/// Semantic error: a call site's argument count/types don't match the
/// callee's parameter list.
pub fn incompatibilidade_de_parametros(line: u32, callee: &str) -> Diagnostic {
    Diagnostic::semantic(
        line,
        format!("incompatibilidade de parametros na chamada de {callee}"),
    )
}
