//! Per-function emission: signature line, parameter list, body.
//!
//! Grounded on `ori_codegen::c::function`'s split of a function into
//! prologue/body/epilogue emitters; LA has no ARC cleanup to run on scope
//! exit, so the "epilogue" collapses to the closing brace and this module
//! is correspondingly smaller than the teacher's.

use la_ir::ast::FuncDecl;

use crate::context::CodegenContext;

use super::stmt::emit_block;
use super::types::CTypeMapper;

pub fn emit_function(ctx: &mut CodegenContext<'_>, func: &FuncDecl) {
    let sig = &ctx.env.funcoes[&func.name];
    let ret_text = CTypeMapper::return_type(ctx, sig.return_ty.as_ref());
    let params: Vec<String> = sig
        .params
        .iter()
        .map(|(name, ty)| CTypeMapper::declare_param(ctx, &ctx.mangle(*name), ty))
        .collect();
    let name = ctx.mangle(func.name);

    ctx.writeln(&format!("{ret_text} {name}({}) {{", params.join(", ")));
    ctx.indent();
    emit_block(ctx, &func.body);
    ctx.dedent();
    ctx.writeln("}");
    ctx.newline();
}

#[cfg(test)]
mod tests {
    use super::*;
    use la_ir::Interner;
    use la_types::{FuncSig, SymbolEnv, Type};

    #[test]
    fn procedure_emits_a_void_signature() {
        let mut interner = Interner::new();
        let p = interner.intern("p");
        let mut env = SymbolEnv::new();
        env.insert_funcao(p, FuncSig { return_ty: None, params: vec![] });
        let mut ctx = CodegenContext::new(&interner, &env);
        let func = FuncDecl { name: p, params: vec![], return_ty: None, body: vec![], line: 1 };
        emit_function(&mut ctx, &func);
        let out = ctx.take_output();
        assert!(out.starts_with("void la_p() {\n"));
    }

    #[test]
    fn function_with_a_literal_parameter_uses_char_star() {
        let mut interner = Interner::new();
        let f = interner.intern("f");
        let a = interner.intern("a");
        let mut env = SymbolEnv::new();
        env.insert_funcao(
            f,
            FuncSig { return_ty: Some(Type::Inteiro), params: vec![(a, Type::Literal)] },
        );
        let mut ctx = CodegenContext::new(&interner, &env);
        let func = FuncDecl {
            name: f,
            params: vec![la_ir::ast::Param { name: a, ty: la_ir::ast::TypeRef::Basic(la_ir::ast::BasicType::Literal) }],
            return_ty: Some(la_ir::ast::TypeRef::Basic(la_ir::ast::BasicType::Inteiro)),
            body: vec![],
            line: 1,
        };
        emit_function(&mut ctx, &func);
        assert!(ctx.take_output().starts_with("int la_f(char* la_a) {\n"));
    }
}
