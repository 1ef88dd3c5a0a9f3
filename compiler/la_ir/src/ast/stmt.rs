//! Statement nodes.

use super::expr::{Expr, Place};
use super::item::VarDecl;
use crate::Name;

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Stmt {
    /// A `declare`/`tipo`/`constante` appearing inside a block, not just at
    /// the top level.
    LocalDecl(VarDecl),

    Assign {
        target: AssignTarget,
        value: Expr,
        line: u32,
    },

    Leia {
        target: AssignTarget,
        line: u32,
    },

    Escreva {
        value: Expr,
        line: u32,
    },

    Se {
        cond: Expr,
        then_branch: Vec<Stmt>,
        else_branch: Vec<Stmt>,
        line: u32,
    },

    Caso {
        discriminant: Expr,
        arms: Vec<CaseArm>,
        else_branch: Vec<Stmt>,
        line: u32,
    },

    Para {
        var: Name,
        from: Expr,
        to: Expr,
        body: Vec<Stmt>,
        line: u32,
    },

    Enquanto {
        cond: Expr,
        body: Vec<Stmt>,
        line: u32,
    },

    /// `faca ... ate E` — repeat-until, translated verbatim to
    /// `do { ... } while (E);` by the emitter (the `ate`/until condition is
    /// not negated; see the design note this preserves).
    FacaAte {
        body: Vec<Stmt>,
        cond: Expr,
        line: u32,
    },

    Retorne {
        value: Expr,
        line: u32,
    },

    /// A procedure call used as a standalone statement.
    CallStmt {
        callee: Name,
        args: Vec<Expr>,
        line: u32,
    },
}

/// An assignment or `leia` target: `^`-prefixed for a pointer deref, with
/// the usual dotted/indexed place chain underneath.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct AssignTarget {
    pub deref: bool,
    pub place: Place,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct CaseArm {
    pub labels: Vec<CaseLabel>,
    pub body: Vec<Stmt>,
}

/// A single `caso` label: a bare integer or an inclusive `lo..hi` range,
/// each bound optionally negated.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum CaseLabel {
    Value(i64),
    Range(i64, i64),
}
