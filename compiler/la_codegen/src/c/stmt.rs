//! Per-statement emission: `leia`/`escreva`, assignment, the three
//! conditional/loop forms, `retorne`, and procedure-call statements.
//!
//! Grounded on `ori_codegen::c::function::emit_body`'s shape (a dispatch
//! function that writes lines through `ctx.writeln`, recursing into nested
//! blocks with `ctx.indent()`/`ctx.dedent()` around them) scaled from
//! Ori's ARC-aware statement lowering down to LA's much smaller command
//! set.

use la_ir::ast::{AssignTarget, CaseLabel, ConstLiteral, Expr, Stmt, VarDecl};
use la_ir::Name;
use la_types::Type;

use crate::context::CodegenContext;

use super::expr::{self, emit_expr, Fmt};
use super::types::CTypeMapper;

pub fn emit_block(ctx: &mut CodegenContext<'_>, stmts: &[Stmt]) {
    for stmt in stmts {
        emit_stmt(ctx, stmt);
    }
}

pub fn emit_stmt(ctx: &mut CodegenContext<'_>, stmt: &Stmt) {
    match stmt {
        Stmt::LocalDecl(decl) => emit_var_decl(ctx, decl),
        Stmt::Assign { target, value, .. } => emit_assign(ctx, target, value),
        Stmt::Leia { target, .. } => emit_leia(ctx, target),
        Stmt::Escreva { value, .. } => emit_escreva(ctx, value),
        Stmt::Se { cond, then_branch, else_branch, .. } => {
            ctx.writeln(&format!("if ({}) {{", emit_expr(ctx, cond)));
            ctx.indent();
            emit_block(ctx, then_branch);
            ctx.dedent();
            if else_branch.is_empty() {
                ctx.writeln("}");
            } else {
                ctx.writeln("} else {");
                ctx.indent();
                emit_block(ctx, else_branch);
                ctx.dedent();
                ctx.writeln("}");
            }
        }
        Stmt::Caso { discriminant, arms, else_branch, .. } => {
            ctx.writeln(&format!("switch ({}) {{", emit_expr(ctx, discriminant)));
            ctx.indent();
            for arm in arms {
                for label in &arm.labels {
                    match label {
                        CaseLabel::Value(v) => ctx.writeln(&format!("case {v}:")),
                        CaseLabel::Range(lo, hi) => {
                            for k in (*lo).min(*hi)..=(*lo).max(*hi) {
                                ctx.writeln(&format!("case {k}:"));
                            }
                        }
                    }
                }
                ctx.indent();
                emit_block(ctx, &arm.body);
                ctx.writeln("break;");
                ctx.dedent();
            }
            if !else_branch.is_empty() {
                ctx.writeln("default:");
                ctx.indent();
                emit_block(ctx, else_branch);
                ctx.writeln("break;");
                ctx.dedent();
            }
            ctx.dedent();
            ctx.writeln("}");
        }
        Stmt::Para { var, from, to, body, .. } => {
            let v = ctx.mangle(*var);
            let from_text = emit_expr(ctx, from);
            let to_text = emit_expr(ctx, to);
            ctx.writeln(&format!("for ({v} = {from_text}; {v} <= {to_text}; {v}++) {{"));
            ctx.indent();
            emit_block(ctx, body);
            ctx.dedent();
            ctx.writeln("}");
        }
        Stmt::Enquanto { cond, body, .. } => {
            ctx.writeln(&format!("while ({}) {{", emit_expr(ctx, cond)));
            ctx.indent();
            emit_block(ctx, body);
            ctx.dedent();
            ctx.writeln("}");
        }
        Stmt::FacaAte { body, cond, .. } => {
            ctx.writeln("do {");
            ctx.indent();
            emit_block(ctx, body);
            ctx.dedent();
            ctx.writeln(&format!("}} while ({});", emit_expr(ctx, cond)));
        }
        Stmt::Retorne { value, .. } => ctx.writeln(&format!("return {};", emit_expr(ctx, value))),
        Stmt::CallStmt { callee, args, .. } => {
            let arg_exprs: Vec<String> = args.iter().map(|a| emit_expr(ctx, a)).collect();
            ctx.writeln(&format!("{}({});", ctx.mangle(*callee), arg_exprs.join(", ")));
        }
    }
}

fn emit_assign(ctx: &mut CodegenContext<'_>, target: &AssignTarget, value: &Expr) {
    let lhs_text = expr::target_text(ctx, target);
    let lhs_ty = expr::target_type(ctx, target);
    let rhs_text = emit_expr(ctx, value);
    if lhs_ty == Some(Type::Literal) {
        ctx.writeln(&format!("strcpy({lhs_text}, {rhs_text});"));
    } else {
        ctx.writeln(&format!("{lhs_text} = {rhs_text};"));
    }
}

fn emit_leia(ctx: &mut CodegenContext<'_>, target: &AssignTarget) {
    let place_text = expr::emit_place(ctx, &target.place);
    let ty = expr::target_type(ctx, target);
    if ty == Some(Type::Literal) {
        // A `^literal` target is already pointer-shaped in C (see
        // `CTypeMapper::declare`'s pointer case), so `gets` on the bare
        // place text covers both the plain and the `^`-prefixed form.
        ctx.writeln(&format!("gets({place_text});"));
        return;
    }
    let fmt = ty.as_ref().map_or("%d", CTypeMapper::fmt_specifier);
    let addr = if target.deref { place_text } else { format!("&{place_text}") };
    ctx.writeln(&format!("scanf(\"{fmt}\", {addr});"));
}

fn emit_escreva(ctx: &mut CodegenContext<'_>, value: &Expr) {
    match expr::classify_fmt(ctx, value) {
        Fmt::Inline(text) => ctx.writeln(&format!("printf({text});")),
        Fmt::Spec(fmt) => {
            let text = emit_expr(ctx, value);
            ctx.writeln(&format!("printf(\"{fmt}\", {text});"));
        }
    }
}

/// A `declare`/`tipo`/`constante` block, whether at the top level or as a
/// `Stmt::LocalDecl` inside a function body. Types are read back from the
/// checked environment (already resolved by `la_types::check_program`)
/// rather than re-resolved here.
pub fn emit_var_decl(ctx: &mut CodegenContext<'_>, decl: &VarDecl) {
    match decl {
        VarDecl::Var { names, .. } => {
            for name in names {
                let ty = ctx.env.identificadores[name].clone();
                let text = CTypeMapper::declare(ctx, &ctx.mangle(*name), &ty);
                ctx.writeln(&format!("{text};"));
            }
        }
        VarDecl::TipoAlias { name, .. } => {
            let fields = ctx.env.custom_tipos[name].clone();
            let text = CTypeMapper::typedef(ctx, &ctx.mangle(*name), &fields);
            ctx.writeln(&text);
        }
        VarDecl::Constante { name, .. } => {
            let entry_text = emit_const_literal(ctx, name);
            ctx.writeln(&format!("#define {} {}", ctx.mangle(*name), entry_text));
        }
    }
}

fn emit_const_literal(ctx: &CodegenContext<'_>, name: &Name) -> String {
    match &ctx.env.constantes[name].value {
        ConstLiteral::Int(n) => n.to_string(),
        ConstLiteral::Real(bits) => format!("{:?}", f64::from_bits(*bits)),
        ConstLiteral::Cadeia(s) => format!("\"{}\"", ctx.text(*s)),
        ConstLiteral::Bool(b) => i32::from(*b).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use la_ir::{
        ast::{AssignTarget, Expr, ExprKind, Place},
        Interner, Span,
    };
    use la_types::SymbolEnv;

    fn place(base: la_ir::Name) -> AssignTarget {
        AssignTarget { deref: false, place: Place { base, projections: vec![] } }
    }

    #[test]
    fn literal_assignment_uses_strcpy() {
        let mut interner = Interner::new();
        let x = interner.intern("nome");
        let mut env = SymbolEnv::new();
        env.insert_identificador(x, Type::Literal);
        let mut ctx = CodegenContext::new(&interner, &env);
        emit_assign(&mut ctx, &place(x), &Expr::new(ExprKind::Cadeia(x), Span::DUMMY, 1));
        assert_eq!(ctx.take_output(), "strcpy(la_nome, \"nome\");\n");
    }

    #[test]
    fn pointer_assignment_dereferences_the_target() {
        let mut interner = Interner::new();
        let p = interner.intern("p");
        let mut env = SymbolEnv::new();
        env.insert_identificador(p, Type::Pointer(Box::new(Type::Inteiro)));
        let mut ctx = CodegenContext::new(&interner, &env);
        let target = AssignTarget { deref: true, place: Place { base: p, projections: vec![] } };
        emit_assign(&mut ctx, &target, &Expr::new(ExprKind::NumInt(5), Span::DUMMY, 1));
        assert_eq!(ctx.take_output(), "(*la_p) = 5;\n");
    }

    #[test]
    fn case_range_expands_to_consecutive_labels_with_one_break() {
        let interner = Interner::new();
        let env = SymbolEnv::new();
        let mut ctx = CodegenContext::new(&interner, &env);
        let stmt = Stmt::Caso {
            discriminant: Expr::new(ExprKind::NumInt(1), Span::DUMMY, 1),
            arms: vec![la_ir::ast::CaseArm {
                labels: vec![CaseLabel::Range(1, 3)],
                body: vec![],
            }],
            else_branch: vec![],
            line: 1,
        };
        emit_stmt(&mut ctx, &stmt);
        let out = ctx.take_output();
        assert!(out.contains("case 1:"));
        assert!(out.contains("case 2:"));
        assert!(out.contains("case 3:"));
        assert!(out.contains("break;"));
        assert!(!out.contains("default:"));
    }

    #[test]
    fn leia_on_a_literal_target_emits_gets() {
        let mut interner = Interner::new();
        let nome = interner.intern("nome");
        let mut env = SymbolEnv::new();
        env.insert_identificador(nome, Type::Literal);
        let mut ctx = CodegenContext::new(&interner, &env);
        emit_leia(&mut ctx, &place(nome));
        assert_eq!(ctx.take_output(), "gets(la_nome);\n");
    }

    #[test]
    fn leia_on_an_integer_target_emits_scanf_with_address() {
        let mut interner = Interner::new();
        let x = interner.intern("x");
        let mut env = SymbolEnv::new();
        env.insert_identificador(x, Type::Inteiro);
        let mut ctx = CodegenContext::new(&interner, &env);
        emit_leia(&mut ctx, &place(x));
        assert_eq!(ctx.take_output(), "scanf(\"%d\", &la_x);\n");
    }
}
