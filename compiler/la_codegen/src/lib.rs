//! C emitter for LA.
//!
//! The second tree walker of the pipeline: consumes the `SymbolEnv` the
//! checker built and the parsed `Program`, and writes an equivalent C
//! source file. Grounded on `ori_codegen`'s split of its C backend into
//! `context`/`c::types`/`c::expr`/`c::function`, scaled from a
//! multi-backend, ARC-aware, generics-heavy code generator down to LA's
//! single fixed backend with no ownership analysis to run.

mod c;
mod context;

pub use c::{emit_program, CTypeMapper};
pub use context::CodegenContext;
