//! Type resolution and the declaration-registering operations of §4.2:
//! `declare_var`, `declare_custom_type`, `declare_constant`,
//! `declare_function` (the record/array cases fall out of `resolve_type`
//! rather than needing their own entry points, see below).

use la_diagnostic::errors;
use la_ir::ast::{ArrayDim, BasicType, FuncDecl, Param, TypeRef, VarDecl};
use la_ir::Name;

use crate::env::{ConstEntry, FuncSig};
use crate::ty::Type;
use crate::Checker;

impl Checker<'_> {
    /// Resolves a syntactic `TypeRef` to a concrete `Type`, validating
    /// every named reference along the way. A `Named` type not found in
    /// `customTipos` reports `tipo X nao declarado` and resolves as
    /// `inteiro` so the caller always gets a usable type back.
    ///
    /// This single function covers every case §4.2 lists as a separate
    /// "declare" operation: an anonymous record body is just
    /// `TypeRef::Record` resolved inline, a named alias's field map is
    /// copied in by the `Named` branch, and an array's element/dimension
    /// are resolved recursively.
    pub(crate) fn resolve_type(&mut self, ty: &TypeRef, line: u32) -> Type {
        match ty {
            TypeRef::Basic(BasicType::Inteiro) => Type::Inteiro,
            TypeRef::Basic(BasicType::Real) => Type::Real,
            TypeRef::Basic(BasicType::Literal) => Type::Literal,
            TypeRef::Basic(BasicType::Logico) => Type::Logico,
            TypeRef::Pointer(inner) => Type::Pointer(Box::new(self.resolve_type(inner, line))),
            TypeRef::Named(name) => match self.env.custom_tipos.get(name) {
                Some(fields) => Type::Record(fields.clone()),
                None => {
                    let text = self.text(*name).to_string();
                    self.diagnostics.push(errors::tipo_nao_declarado(line, &text));
                    Type::Inteiro
                }
            },
            TypeRef::Array { dim, elem } => {
                let elem_ty = self.resolve_type(elem, line);
                let len = self.resolve_array_dim(dim);
                Type::Array {
                    elem: Box::new(elem_ty),
                    len,
                }
            }
            TypeRef::Record(fields) => {
                let resolved = fields
                    .iter()
                    .map(|f| (f.name, self.resolve_type(&f.ty, f.line)))
                    .collect();
                Type::Record(resolved)
            }
        }
    }

    /// A literal dimension resolves directly; a constant-name dimension
    /// resolves through `constantes`. A non-numeric or unresolved constant
    /// yields dimension 0 with no diagnostic — a preserved quirk, not an
    /// oversight (see DESIGN.md).
    fn resolve_array_dim(&self, dim: &ArrayDim) -> usize {
        match dim {
            ArrayDim::Literal(n) => usize::try_from(*n).unwrap_or(0),
            ArrayDim::Constant(name) => self
                .env
                .constantes
                .get(name)
                .and_then(crate::env::ConstEntry::numeric_value)
                .and_then(|n| usize::try_from(n).ok())
                .unwrap_or(0),
        }
    }

    pub(crate) fn check_decl(&mut self, decl: &VarDecl) {
        match decl {
            VarDecl::Var { names, ty, line } => {
                let resolved = self.resolve_type(ty, *line);
                for name in names {
                    self.declare_identificador(*name, resolved.clone(), *line);
                }
            }
            VarDecl::TipoAlias { name, fields, line } => {
                let name = *name;
                let resolved_fields: Vec<(Name, Type)> = fields
                    .iter()
                    .map(|f| (f.name, self.resolve_type(&f.ty, f.line)))
                    .collect();
                self.declare_if_free(name, *line, move |checker| {
                    checker.env.insert_custom_tipo(name, resolved_fields);
                });
            }
            VarDecl::Constante {
                name,
                ty,
                value,
                line,
            } => {
                let name = *name;
                let resolved = self.resolve_type(ty, *line);
                let value = value.clone();
                self.declare_if_free(name, *line, move |checker| {
                    checker.env.insert_constante(
                        name,
                        ConstEntry {
                            ty: resolved,
                            value,
                        },
                    );
                });
            }
        }
    }

    pub(crate) fn declare_identificador(&mut self, name: Name, ty: Type, line: u32) {
        if self.env.is_taken(name) {
            let text = self.text(name).to_string();
            self.diagnostics
                .push(errors::ja_declarado(line, &text));
        } else {
            self.env.insert_identificador(name, ty);
        }
    }

    /// Shared collision-check/insert shape for the two partitions
    /// (`customTipos`, `constantes`) whose own insertion closure needs
    /// `self` mutably but whose collision test must happen first.
    fn declare_if_free(&mut self, name: Name, line: u32, insert: impl FnOnce(&mut Self)) {
        if self.env.is_taken(name) {
            let text = self.text(name).to_string();
            self.diagnostics
                .push(errors::ja_declarado(line, &text));
        } else {
            insert(self);
        }
    }

    pub(crate) fn check_function(&mut self, func: &FuncDecl) {
        let return_ty = func
            .return_ty
            .as_ref()
            .map(|t| self.resolve_type(t, func.line));
        let params = resolve_params(self, &func.params, func.line);

        self.declare_if_free(func.name, func.line, move |checker| {
            checker.env.insert_funcao(
                func.name,
                FuncSig {
                    return_ty,
                    params: params.clone(),
                },
            );
            for (name, ty) in params {
                checker.declare_identificador(name, ty, func.line);
            }
        });

        let was_procedure = self.in_procedure;
        self.in_procedure = func.is_procedure();
        for stmt in &func.body {
            self.check_stmt(stmt);
        }
        self.in_procedure = was_procedure;
    }
}

fn resolve_params(checker: &mut Checker<'_>, params: &[Param], line: u32) -> Vec<(Name, Type)> {
    params
        .iter()
        .map(|p| (p.name, checker.resolve_type(&p.ty, line)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use la_ir::Interner;

    #[test]
    fn basic_types_resolve_without_diagnostics() {
        let interner = Interner::new();
        let mut checker = Checker::new(&interner);
        assert_eq!(
            checker.resolve_type(&TypeRef::Basic(BasicType::Inteiro), 1),
            Type::Inteiro
        );
        assert!(checker.diagnostics.is_empty());
    }

    #[test]
    fn unknown_named_type_reports_and_falls_back() {
        let mut interner = Interner::new();
        let missing = interner.intern("Foo");
        let mut checker = Checker::new(&interner);
        let ty = checker.resolve_type(&TypeRef::Named(missing), 3);
        assert_eq!(ty, Type::Inteiro);
        assert_eq!(checker.diagnostics.len(), 1);
        assert_eq!(checker.diagnostics[0].message, "tipo Foo nao declarado");
    }
}
