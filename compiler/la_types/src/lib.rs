//! Symbol environment and semantic checker for LA.
//!
//! Grounded on `ori_types`'s split between symbol registration
//! (`check/registration/*`) and per-expression inference (`infer/expr/*`),
//! scaled from Ori's generic, trait-aware, Salsa-backed type system down to
//! LA's flat four-partition namespace with no generics and no scopes.

mod decl;
mod env;
mod expr;
mod stmt;
mod ty;

pub use env::{ConstEntry, FuncSig, SymbolEnv};
pub use ty::Type;

use la_diagnostic::Diagnostic;
use la_ir::ast::Program;
use la_ir::Interner;

/// Walks a parsed program once, populating a [`SymbolEnv`] and collecting
/// every semantic diagnostic along the way. The environment is handed
/// back for the emitter to consume; it is not mutated after this call.
pub fn check_program(program: &Program, interner: &Interner) -> (SymbolEnv, Vec<Diagnostic>) {
    let mut checker = Checker::new(interner);
    for decl in &program.decls {
        checker.check_decl(decl);
    }
    for func in &program.functions {
        checker.check_function(func);
    }
    for stmt in &program.main {
        checker.check_stmt(stmt);
    }
    (checker.env, checker.diagnostics)
}

/// Carries the environment under construction, the interner needed to
/// render identifier text into diagnostics, and whether the statement
/// currently being walked sits inside a `procedimento` body (for the
/// `retorne` scope check).
pub(crate) struct Checker<'a> {
    interner: &'a Interner,
    env: SymbolEnv,
    diagnostics: Vec<Diagnostic>,
    in_procedure: bool,
}

impl<'a> Checker<'a> {
    fn new(interner: &'a Interner) -> Self {
        Checker {
            interner,
            env: SymbolEnv::new(),
            diagnostics: Vec::new(),
            in_procedure: false,
        }
    }

    pub(crate) fn text(&self, name: la_ir::Name) -> &str {
        self.interner.resolve(name)
    }
}
