//! Syntax tree produced by the parser and consumed by the checker and
//! emitter. Neither later pass mutates it.

mod expr;
mod item;
mod stmt;
mod ty;

pub use expr::{BinaryOp, Expr, ExprKind, Place, Projection, UnaryOp};
pub use item::{ConstLiteral, FuncDecl, Param, Program, VarDecl};
pub use stmt::{AssignTarget, CaseArm, CaseLabel, Stmt};
pub use ty::{ArrayDim, BasicType, FieldDecl, TypeRef};
