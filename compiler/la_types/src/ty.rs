//! Resolved types, as distinct from `la_ir::ast::TypeRef` (the as-written
//! syntax). A `TypeRef::Named` alias is expanded to its field map here, so
//! nothing downstream ever has to chase a name back into `customTipos`.

use la_ir::Name;

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Type {
    Inteiro,
    Real,
    Literal,
    Logico,
    Pointer(Box<Type>),
    /// Ordered so the emitter can print fields in declaration order.
    Record(Vec<(Name, Type)>),
    Array { elem: Box<Type>, len: usize },
}

impl Type {
    pub fn is_numeric(&self) -> bool {
        matches!(self, Type::Inteiro | Type::Real)
    }

    pub fn field(&self, name: Name) -> Option<&Type> {
        match self {
            Type::Record(fields) => fields.iter().find(|(n, _)| *n == name).map(|(_, t)| t),
            _ => None,
        }
    }

    pub fn element(&self) -> Option<&Type> {
        match self {
            Type::Array { elem, .. } => Some(elem),
            _ => None,
        }
    }
}
