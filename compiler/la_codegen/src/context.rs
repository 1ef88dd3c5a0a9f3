//! Code generation context and output buffer.
//!
//! Grounded on `ori_codegen::context::CodegenContext`: a single struct
//! carrying the read-only inputs an emit pass needs (here, the interner and
//! the checked symbol environment) plus the mutable output buffer and
//! indentation tracker every `emit_*` function writes through.

use la_ir::{Interner, Name};
use la_types::SymbolEnv;

/// Code generation context threaded through every `emit_*` function.
pub struct CodegenContext<'a> {
    interner: &'a Interner,
    /// The fully-populated, read-only environment handed over by the
    /// checker (SPEC_FULL §5: no aliasing mutation during this pass).
    pub env: &'a SymbolEnv,
    indent: usize,
    output: String,
}

impl<'a> CodegenContext<'a> {
    pub fn new(interner: &'a Interner, env: &'a SymbolEnv) -> Self {
        CodegenContext {
            interner,
            env,
            indent: 0,
            output: String::with_capacity(4096),
        }
    }

    pub fn text(&self, name: Name) -> &str {
        self.interner.resolve(name)
    }

    /// C identifiers can collide with C keywords LA does not reserve (a
    /// variable named `int` or `return` is legal LA). Every emitted name is
    /// prefixed to sidestep that, mirroring `ori_codegen`'s own `mangle`.
    pub fn mangle(&self, name: Name) -> String {
        format!("la_{}", self.text(name))
    }

    pub fn indent(&mut self) {
        self.indent += 1;
    }

    pub fn dedent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.output.push_str("    ");
        }
    }

    pub fn writeln(&mut self, line: &str) {
        self.write_indent();
        self.output.push_str(line);
        self.output.push('\n');
    }

    pub fn newline(&mut self) {
        self.output.push('\n');
    }

    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mangle_prefixes_every_name() {
        let mut interner = Interner::new();
        let name = interner.intern("int");
        let env = SymbolEnv::new();
        let ctx = CodegenContext::new(&interner, &env);
        assert_eq!(ctx.mangle(name), "la_int");
    }

    #[test]
    fn indent_tracks_writeln_prefix() {
        let interner = Interner::new();
        let env = SymbolEnv::new();
        let mut ctx = CodegenContext::new(&interner, &env);
        ctx.writeln("a");
        ctx.indent();
        ctx.writeln("b");
        ctx.dedent();
        ctx.writeln("c");
        assert_eq!(ctx.take_output(), "a\n    b\nc\n");
    }
}
