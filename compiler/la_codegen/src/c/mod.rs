//! The C backend: type mapping, expression lowering, and per-function /
//! per-program emission, split the way `ori_codegen::c` splits its own
//! (much larger) C backend into `types.rs`/`expr.rs`/`function.rs`.

mod expr;
mod function;
mod stmt;
mod types;

pub use types::CTypeMapper;

use la_ir::ast::Program;

use crate::context::CodegenContext;

/// Emits a full C translation unit for a semantically-analysed program:
/// the `#include` preamble, every top-level `declare`/`tipo`/`constante`,
/// every function/procedure, and `main` wrapping the program body.
///
/// SPEC_FULL §4.4: runs only on a tree the checker already validated, and
/// never raises diagnostics of its own.
pub fn emit_program(ctx: &mut CodegenContext<'_>, program: &Program) -> String {
    ctx.writeln("#include <stdio.h>");
    ctx.writeln("#include <stdlib.h>");
    ctx.writeln("#include <string.h>");
    ctx.newline();

    for decl in &program.decls {
        stmt::emit_var_decl(ctx, decl);
    }
    ctx.newline();

    for func in &program.functions {
        function::emit_function(ctx, func);
    }

    ctx.writeln("int main() {");
    ctx.indent();
    stmt::emit_block(ctx, &program.main);
    ctx.writeln("return 0;");
    ctx.dedent();
    ctx.writeln("}");

    ctx.take_output()
}

#[cfg(test)]
mod tests {
    use super::*;
    use la_ir::Interner;
    use la_types::SymbolEnv;

    #[test]
    fn empty_program_gets_the_includes_and_an_empty_main() {
        let interner = Interner::new();
        let env = SymbolEnv::new();
        let mut ctx = CodegenContext::new(&interner, &env);
        let program = Program { decls: vec![], functions: vec![], main: vec![] };
        let out = emit_program(&mut ctx, &program);
        assert!(out.contains("#include <stdio.h>"));
        assert!(out.contains("int main() {"));
        assert!(out.contains("return 0;"));
    }
}
