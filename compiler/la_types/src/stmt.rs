//! Statement tree walk: §4.3's contracts for assignment, `leia`, `se`,
//! `caso`, the three loop forms, `retorne`, and procedure-call statements.

use la_diagnostic::errors;
use la_ir::ast::{AssignTarget, Stmt};

use crate::ty::Type;
use crate::Checker;

impl Checker<'_> {
    pub(crate) fn check_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::LocalDecl(decl) => self.check_decl(decl),
            Stmt::Assign {
                target,
                value,
                line,
            } => {
                let lhs_ty = self.lhs_type(target, *line);
                if let Some(lhs_ty) = lhs_ty {
                    let lhs_text = self.render_target(target);
                    self.check_assignment_leaf(value, &lhs_ty, &lhs_text);
                }
            }
            Stmt::Leia { target, line } => {
                self.resolve_place(&target.place, *line);
            }
            Stmt::Escreva { value, .. } => self.check_expr(value),
            Stmt::Se {
                cond,
                then_branch,
                else_branch,
                ..
            } => {
                self.check_expr(cond);
                self.check_stmts(then_branch);
                self.check_stmts(else_branch);
            }
            Stmt::Caso {
                discriminant,
                arms,
                else_branch,
                ..
            } => {
                self.check_expr(discriminant);
                for arm in arms {
                    self.check_stmts(&arm.body);
                }
                self.check_stmts(else_branch);
            }
            Stmt::Para {
                var,
                from,
                to,
                body,
                line,
            } => {
                if !self.env.identificadores.contains_key(var) {
                    let text = self.text(*var).to_string();
                    self.diagnostics
                        .push(errors::identificador_nao_declarado(*line, &text));
                }
                self.check_expr(from);
                self.check_expr(to);
                self.check_stmts(body);
            }
            Stmt::Enquanto { cond, body, .. } => {
                self.check_expr(cond);
                self.check_stmts(body);
            }
            Stmt::FacaAte { body, cond, .. } => {
                self.check_stmts(body);
                self.check_expr(cond);
            }
            Stmt::Retorne { value, line } => {
                if self.in_procedure {
                    self.diagnostics.push(errors::retorne_nao_permitido(*line));
                }
                self.check_expr(value);
            }
            Stmt::CallStmt {
                callee,
                args,
                line,
            } => self.check_call(*callee, args, *line),
        }
    }

    fn check_stmts(&mut self, stmts: &[Stmt]) {
        for stmt in stmts {
            self.check_stmt(stmt);
        }
    }

    /// Resolves the assignment target's type, stripping one pointer layer
    /// for a `^`-prefixed target. `None` (place unresolved, or a `^`
    /// target whose place isn't actually a pointer) suppresses the whole
    /// compatibility check for that statement, per §4.3.
    fn lhs_type(&mut self, target: &AssignTarget, line: u32) -> Option<Type> {
        let place_ty = self.resolve_place(&target.place, line)?;
        if target.deref {
            match place_ty {
                Type::Pointer(inner) => Some(*inner),
                _ => None,
            }
        } else {
            Some(place_ty)
        }
    }

    fn render_target(&self, target: &AssignTarget) -> String {
        let mut text = String::new();
        if target.deref {
            text.push('^');
        }
        text.push_str(&self.render_place(&target.place));
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use la_ir::{ast::Place, Interner};

    #[test]
    fn an_unresolved_target_suppresses_the_whole_assignment_check() {
        let mut interner = Interner::new();
        let missing = interner.intern("y");
        let mut checker = Checker::new(&interner);
        let target = AssignTarget {
            deref: false,
            place: Place {
                base: missing,
                projections: vec![],
            },
        };
        // Only the place-resolution diagnostic should appear; no
        // "atribuicao nao compativel" for the (unreachable) leaf walk.
        assert!(checker.lhs_type(&target, 1).is_none());
        assert_eq!(checker.diagnostics.len(), 1);
        assert_eq!(
            checker.diagnostics[0].message,
            "identificador y nao declarado"
        );
    }
}
