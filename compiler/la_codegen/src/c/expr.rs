//! Expression lowering and the read-only type inference the emitter needs
//! for format-string selection.
//!
//! Grounded on `ori_codegen::c::expr::emit_expr`'s per-`ExprKind` dispatch,
//! building a C expression string bottom-up from already-lowered operand
//! strings. Unlike the teacher's original source (which rewrote raw
//! expression *text*, textually guarding `<=`/`>=` against its own
//! `=`->`==` rewrite, per SPEC_FULL's Design Notes), this emitter already
//! has a typed `BinaryOp` from the parser — `Eq` and `Le` are distinct
//! variants, never substrings of each other, so the textual edge case the
//! original had to guard against does not exist here; the operator table
//! is just a match over `BinaryOp`.

use la_ir::ast::{AssignTarget, BinaryOp, Expr, ExprKind, Place, Projection, UnaryOp};

use crate::context::CodegenContext;

use super::types::CTypeMapper;

/// How an `escreva` argument should be printed: a `printf` conversion, or
/// (for a bare string literal) inline text with no conversion at all.
pub enum Fmt {
    Spec(&'static str),
    Inline(String),
}

/// Lower an expression to the C text that reproduces its value.
pub fn emit_expr(ctx: &CodegenContext<'_>, expr: &Expr) -> String {
    match &expr.kind {
        ExprKind::NumInt(n) => n.to_string(),
        ExprKind::NumReal(bits) => format_real(f64::from_bits(*bits)),
        ExprKind::Cadeia(name) => quote(ctx.text(*name)),
        ExprKind::Verdadeiro => "1".to_string(),
        ExprKind::Falso => "0".to_string(),
        ExprKind::Place(place) => emit_place(ctx, place),
        ExprKind::Deref(inner) => format!("(*{})", emit_expr(ctx, inner)),
        ExprKind::Ref(inner) => format!("(&{})", emit_expr(ctx, inner)),
        ExprKind::Call { callee, args } => {
            let arg_exprs: Vec<String> = args.iter().map(|a| emit_expr(ctx, a)).collect();
            format!("{}({})", ctx.mangle(*callee), arg_exprs.join(", "))
        }
        ExprKind::Unary { op: UnaryOp::Neg, operand } => format!("(-{})", emit_expr(ctx, operand)),
        ExprKind::Unary { op: UnaryOp::Not, operand } => format!("(!{})", emit_expr(ctx, operand)),
        ExprKind::Binary { op, lhs, rhs } => {
            format!("({} {} {})", emit_expr(ctx, lhs), binary_op_text(*op), emit_expr(ctx, rhs))
        }
    }
}

pub(crate) fn emit_place(ctx: &CodegenContext<'_>, place: &Place) -> String {
    let mut text = ctx.mangle(place.base);
    for proj in &place.projections {
        match proj {
            Projection::Field(field) => {
                text.push('.');
                text.push_str(&ctx.mangle(*field));
            }
            Projection::Index(index_expr) => {
                text.push('[');
                text.push_str(&emit_expr(ctx, index_expr));
                text.push(']');
            }
        }
    }
    text
}

fn binary_op_text(op: BinaryOp) -> &'static str {
    match op {
        BinaryOp::Add => "+",
        BinaryOp::Sub => "-",
        BinaryOp::Mul => "*",
        BinaryOp::Div => "/",
        BinaryOp::Eq => "==",
        BinaryOp::Ne => "!=",
        BinaryOp::Lt => "<",
        BinaryOp::Gt => ">",
        BinaryOp::Le => "<=",
        BinaryOp::Ge => ">=",
        BinaryOp::And => "&&",
        BinaryOp::Or => "||",
    }
}

fn is_relational_or_logical(op: BinaryOp) -> bool {
    !matches!(op, BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div)
}

/// Reproduces an `f64` as a C float literal with enough precision to round
/// trip, matching the teacher's own `{f:?}` debug-format approach in
/// `ori_codegen::c::expr::emit_expr`.
fn format_real(f: f64) -> String {
    format!("{f:?}")
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Resolves an expression's type against the checked environment, for
/// `escreva`'s format-string selection and for `leia`/assignment emission.
/// This duplicates a slice of `la_types::Checker::infer_type`'s dispatch —
/// deliberately: the checker's version also raises diagnostics and mutates
/// the environment it walks, neither of which the emitter is allowed to do
/// (SPEC_FULL §4.4: "the emitter... does not itself emit diagnostics").
pub fn infer_type(ctx: &CodegenContext<'_>, expr: &Expr) -> Option<la_types::Type> {
    use la_types::Type;
    match &expr.kind {
        ExprKind::NumInt(_) => Some(Type::Inteiro),
        ExprKind::NumReal(_) => Some(Type::Real),
        ExprKind::Cadeia(_) => Some(Type::Literal),
        ExprKind::Verdadeiro | ExprKind::Falso => Some(Type::Logico),
        ExprKind::Place(place) => resolve_place_type(ctx, place),
        ExprKind::Deref(inner) => match infer_type(ctx, inner)? {
            Type::Pointer(pointee) => Some(*pointee),
            _ => None,
        },
        ExprKind::Ref(inner) => infer_type(ctx, inner).map(|ty| Type::Pointer(Box::new(ty))),
        ExprKind::Call { callee, .. } => ctx.env.funcoes.get(callee).and_then(|f| f.return_ty.clone()),
        ExprKind::Unary { op: UnaryOp::Not, .. } => Some(Type::Logico),
        ExprKind::Unary { op: UnaryOp::Neg, operand } => infer_type(ctx, operand),
        ExprKind::Binary { op, lhs, rhs } => {
            if is_relational_or_logical(*op) {
                Some(Type::Logico)
            } else {
                infer_type(ctx, lhs).or_else(|| infer_type(ctx, rhs))
            }
        }
    }
}

pub(crate) fn resolve_place_type(ctx: &CodegenContext<'_>, place: &Place) -> Option<la_types::Type> {
    let mut current = ctx.env.identificadores.get(&place.base)?.clone();
    for proj in &place.projections {
        match proj {
            Projection::Field(field) => current = current.field(*field)?.clone(),
            Projection::Index(_) => current = current.element()?.clone(),
        }
    }
    Some(current)
}

/// The C text of an assignment/`leia` target: the place chain, wrapped in a
/// deref for a `^`-prefixed target.
pub(crate) fn target_text(ctx: &CodegenContext<'_>, target: &AssignTarget) -> String {
    let place_text = emit_place(ctx, &target.place);
    if target.deref {
        format!("(*{place_text})")
    } else {
        place_text
    }
}

/// The target's type, with one pointer layer stripped for a `^`-prefixed
/// target — mirrors `la_types::Checker::lhs_type`, minus the diagnostics
/// that function also raises (the emitter trusts the checked tree).
pub(crate) fn target_type(ctx: &CodegenContext<'_>, target: &AssignTarget) -> Option<la_types::Type> {
    let place_ty = resolve_place_type(ctx, &target.place)?;
    if target.deref {
        match place_ty {
            la_types::Type::Pointer(inner) => Some(*inner),
            _ => None,
        }
    } else {
        Some(place_ty)
    }
}

/// True if any `Place`/`Call` leaf reachable from `expr` resolves to `real`
/// — SPEC_FULL §4.4's "arithmetic -> `%f` if any participating
/// identifier/parameter is `real`, else `%d`" rule.
fn contains_real_leaf(ctx: &CodegenContext<'_>, expr: &Expr) -> bool {
    match &expr.kind {
        ExprKind::NumReal(_) => true,
        ExprKind::Place(_) | ExprKind::Call { .. } => infer_type(ctx, expr) == Some(la_types::Type::Real),
        ExprKind::Deref(inner) | ExprKind::Ref(inner) => contains_real_leaf(ctx, inner),
        ExprKind::Unary { operand, .. } => contains_real_leaf(ctx, operand),
        ExprKind::Binary { lhs, rhs, .. } => contains_real_leaf(ctx, lhs) || contains_real_leaf(ctx, rhs),
        ExprKind::NumInt(_) | ExprKind::Cadeia(_) | ExprKind::Verdadeiro | ExprKind::Falso => false,
    }
}

/// Picks how an `escreva` argument prints, per SPEC_FULL §4.4: a bare
/// string literal prints inline with no conversion; everything else gets a
/// `%d`/`%f`/`%s` conversion selected from its resolved type (bare
/// identifier, dotted field, function call) or, for a composite
/// arithmetic/relational expression, from whether a `real` leaf
/// participates.
pub fn classify_fmt(ctx: &CodegenContext<'_>, expr: &Expr) -> Fmt {
    match &expr.kind {
        ExprKind::Cadeia(name) => Fmt::Inline(quote(ctx.text(*name))),
        ExprKind::Binary { op, .. } if is_relational_or_logical(*op) => Fmt::Spec("%d"),
        ExprKind::Unary { op: UnaryOp::Not, .. } | ExprKind::Verdadeiro | ExprKind::Falso => Fmt::Spec("%d"),
        ExprKind::Binary { .. } | ExprKind::Unary { .. } | ExprKind::NumInt(_) | ExprKind::NumReal(_) => {
            if contains_real_leaf(ctx, expr) {
                Fmt::Spec("%f")
            } else {
                Fmt::Spec("%d")
            }
        }
        ExprKind::Place(_) | ExprKind::Call { .. } | ExprKind::Deref(_) | ExprKind::Ref(_) => {
            match infer_type(ctx, expr) {
                Some(ty) => Fmt::Spec(CTypeMapper::fmt_specifier(&ty)),
                None => Fmt::Spec("%d"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use la_ir::{Interner, Span};
    use la_types::{SymbolEnv, Type};

    fn lit(kind: ExprKind) -> Expr {
        Expr::new(kind, Span::DUMMY, 1)
    }

    #[test]
    fn arithmetic_translates_with_parens_and_no_rewriting_edge_case() {
        let interner = Interner::new();
        let env = SymbolEnv::new();
        let ctx = CodegenContext::new(&interner, &env);
        let e = Expr::new(
            ExprKind::Binary {
                op: BinaryOp::Le,
                lhs: Box::new(lit(ExprKind::NumInt(1))),
                rhs: Box::new(lit(ExprKind::NumInt(2))),
            },
            Span::DUMMY,
            1,
        );
        assert_eq!(emit_expr(&ctx, &e), "(1 <= 2)");
    }

    #[test]
    fn string_literal_is_quoted_and_escaped() {
        let mut interner = Interner::new();
        let name = interner.intern("say \"hi\"");
        let env = SymbolEnv::new();
        let ctx = CodegenContext::new(&interner, &env);
        assert_eq!(emit_expr(&ctx, &lit(ExprKind::Cadeia(name))), "\"say \\\"hi\\\"\"");
    }

    #[test]
    fn bare_string_literal_argument_prints_inline_with_no_conversion() {
        let mut interner = Interner::new();
        let name = interner.intern("ola");
        let env = SymbolEnv::new();
        let ctx = CodegenContext::new(&interner, &env);
        match classify_fmt(&ctx, &lit(ExprKind::Cadeia(name))) {
            Fmt::Inline(text) => assert_eq!(text, "\"ola\""),
            Fmt::Spec(_) => panic!("expected inline text"),
        }
    }

    #[test]
    fn real_identifier_forces_float_format_even_inside_a_sum() {
        let mut interner = Interner::new();
        let x = interner.intern("x");
        let mut env = SymbolEnv::new();
        env.insert_identificador(x, Type::Real);
        let ctx = CodegenContext::new(&interner, &env);
        let e = Expr::new(
            ExprKind::Binary {
                op: BinaryOp::Add,
                lhs: Box::new(Expr::new(
                    ExprKind::Place(Place { base: x, projections: vec![] }),
                    Span::DUMMY,
                    1,
                )),
                rhs: Box::new(lit(ExprKind::NumInt(1))),
            },
            Span::DUMMY,
            1,
        );
        assert!(matches!(classify_fmt(&ctx, &e), Fmt::Spec("%f")));
    }

    #[test]
    fn relational_expression_always_formats_as_int() {
        let interner = Interner::new();
        let env = SymbolEnv::new();
        let ctx = CodegenContext::new(&interner, &env);
        let e = Expr::new(
            ExprKind::Binary {
                op: BinaryOp::Gt,
                lhs: Box::new(lit(ExprKind::NumReal(0))),
                rhs: Box::new(lit(ExprKind::NumInt(0))),
            },
            Span::DUMMY,
            1,
        );
        assert!(matches!(classify_fmt(&ctx, &e), Fmt::Spec("%d")));
    }
}
