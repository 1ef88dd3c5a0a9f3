//! The flat, four-partition symbol environment.
//!
//! Grounded on `ori_types::check::registration` (a pass that pre-populates
//! a `TypeRegistry` before the rest of the checker runs), scaled down from
//! Ori's generics/trait-aware registry to LA's flat namespace: no scopes,
//! no generics, no trait resolution, just four name tables.

use la_ir::{ast::ConstLiteral, Name};
use rustc_hash::FxHashMap;

use crate::ty::Type;

pub struct FuncSig {
    /// `None` for a `procedimento`.
    pub return_ty: Option<Type>,
    pub params: Vec<(Name, Type)>,
}

pub struct ConstEntry {
    pub ty: Type,
    pub value: ConstLiteral,
}

impl ConstEntry {
    /// The integer value backing this constant, for array-dimension
    /// resolution. Only `ConstLiteral::Int` resolves; every other literal
    /// kind is "non-numeric" (see `declare_array`'s dimension-0 fallback).
    pub fn numeric_value(&self) -> Option<i64> {
        match self.value {
            ConstLiteral::Int(n) => Some(n),
            _ => None,
        }
    }
}

#[derive(Default)]
pub struct SymbolEnv {
    pub identificadores: FxHashMap<Name, Type>,
    pub custom_tipos: FxHashMap<Name, Vec<(Name, Type)>>,
    pub funcoes: FxHashMap<Name, FuncSig>,
    pub constantes: FxHashMap<Name, ConstEntry>,
}

impl SymbolEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// The collision set named by the data-model invariant: a name
    /// inserted into *any* of the four partitions collides only with a
    /// prior name in `identificadores ∪ funcoes ∪ constantes` —
    /// `customTipos` is deliberately excluded, so a `tipo` alias never
    /// collides with anything by this check.
    pub fn is_taken(&self, name: Name) -> bool {
        self.identificadores.contains_key(&name)
            || self.funcoes.contains_key(&name)
            || self.constantes.contains_key(&name)
    }

    pub fn insert_identificador(&mut self, name: Name, ty: Type) {
        self.identificadores.insert(name, ty);
    }

    pub fn insert_custom_tipo(&mut self, name: Name, fields: Vec<(Name, Type)>) {
        self.custom_tipos.insert(name, fields);
    }

    pub fn insert_funcao(&mut self, name: Name, sig: FuncSig) {
        self.funcoes.insert(name, sig);
    }

    pub fn insert_constante(&mut self, name: Name, entry: ConstEntry) {
        self.constantes.insert(name, entry);
    }
}
