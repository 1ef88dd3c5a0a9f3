//! Shared IR types for the LA compiler.
//!
//! Provides the source-location and identifier-interning primitives used
//! by every later stage (lexer, parser, checker, emitter). Mirrors the
//! role the teacher's `ori_ir` crate plays for the Ori compiler, scaled
//! down to what a single-file, single-threaded front end needs.

pub mod ast;
mod line_index;
mod name;
mod span;

pub use line_index::LineIndex;
pub use name::{Interner, Name};
pub use span::Span;
