//! LA -> C type mapping.
//!
//! Grounded on `ori_codegen::c::types::CTypeMapper`'s static-method, no-self
//! shape (the teacher's version maps a much richer `TypeData` — generics,
//! unboxed Option/Result unions, SSO strings — down to C; LA's table is the
//! four-row one in SPEC_FULL §4.4 plus pointer/record/array composition).

use la_types::Type;

use crate::context::CodegenContext;

pub struct CTypeMapper;

impl CTypeMapper {
    /// The C keyword(s) for a scalar LA type, or the prefix used ahead of a
    /// `*` for a pointer target. Records render as an inline anonymous
    /// struct body; arrays have no meaning as a bare type prefix (their
    /// dimension has to wrap the declared name, see [`Self::declare`]).
    pub(crate) fn type_prefix(ctx: &CodegenContext<'_>, ty: &Type) -> String {
        match ty {
            Type::Inteiro => "int".to_string(),
            Type::Real => "float".to_string(),
            Type::Logico => "int".to_string(),
            Type::Literal => "char".to_string(),
            Type::Pointer(inner) => format!("{} *", Self::type_prefix(ctx, inner)),
            Type::Record(fields) => Self::anonymous_struct(ctx, fields),
            Type::Array { elem, .. } => Self::type_prefix(ctx, elem),
        }
    }

    fn anonymous_struct(ctx: &CodegenContext<'_>, fields: &[(la_ir::Name, Type)]) -> String {
        let body: String = fields
            .iter()
            .map(|(name, ty)| format!("{}; ", Self::declare(ctx, &ctx.mangle(*name), ty)))
            .collect();
        format!("struct {{ {body}}}")
    }

    /// The full C declaration for `name : ty`, without a trailing `;`.
    /// `vetor`/`literal` dimensions wrap the declared name (`v[10]`,
    /// `nome[80]`) rather than the type prefix, so an array of `literal`
    /// declares correctly as `char v[10][80]`.
    pub fn declare(ctx: &CodegenContext<'_>, name: &str, ty: &Type) -> String {
        match ty {
            Type::Literal => format!("char {name}[80]"),
            Type::Pointer(inner) => format!("{} *{name}", Self::type_prefix(ctx, inner)),
            Type::Record(fields) => format!("{} {name}", Self::anonymous_struct(ctx, fields)),
            Type::Array { elem, len } => Self::declare(ctx, &format!("{name}[{len}]"), elem),
            Type::Inteiro | Type::Real | Type::Logico => {
                format!("{} {name}", Self::type_prefix(ctx, ty))
            }
        }
    }

    /// A `typedef struct { ... } Name;` for a `tipo` alias.
    pub fn typedef(ctx: &CodegenContext<'_>, c_name: &str, fields: &[(la_ir::Name, Type)]) -> String {
        format!("typedef {} {c_name};", Self::anonymous_struct(ctx, fields))
    }

    /// `printf`/`scanf` format specifier for a scalar type (SPEC_FULL §4.4's
    /// `leia` fmt table, extended to `%s` for `escreva`'s `literal` case).
    pub fn fmt_specifier(ty: &Type) -> &'static str {
        match ty {
            Type::Real => "%f",
            Type::Literal => "%s",
            Type::Inteiro | Type::Logico | Type::Pointer(_) | Type::Record(_) | Type::Array { .. } => "%d",
        }
    }

    /// The parameter-declaration form of SPEC_FULL §4.4: a `literal`
    /// parameter is `char* p`, everything else is its ordinary declaration.
    pub fn declare_param(ctx: &CodegenContext<'_>, name: &str, ty: &Type) -> String {
        match ty {
            Type::Literal => format!("char* {name}"),
            _ => Self::declare(ctx, name, ty),
        }
    }

    /// A function's return-type text, following the same `literal` ->
    /// `char*` special case the parameter rule uses (a record/array return
    /// type is not a case SPEC_FULL gives a worked example for; it falls
    /// back to the bare type prefix rather than inventing new syntax).
    pub fn return_type(ctx: &CodegenContext<'_>, ty: Option<&Type>) -> String {
        match ty {
            None => "void".to_string(),
            Some(Type::Literal) => "char*".to_string(),
            Some(ty) => Self::type_prefix(ctx, ty),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use la_ir::Interner;

    #[test]
    fn scalar_types_map_directly() {
        let interner = Interner::new();
        let env = la_types::SymbolEnv::new();
        let ctx = CodegenContext::new(&interner, &env);
        assert_eq!(CTypeMapper::declare(&ctx, "x", &Type::Inteiro), "int x");
        assert_eq!(CTypeMapper::declare(&ctx, "x", &Type::Real), "float x");
        assert_eq!(CTypeMapper::declare(&ctx, "x", &Type::Logico), "int x");
    }

    #[test]
    fn literal_scalar_is_a_fixed_size_char_buffer() {
        let interner = Interner::new();
        let env = la_types::SymbolEnv::new();
        let ctx = CodegenContext::new(&interner, &env);
        assert_eq!(CTypeMapper::declare(&ctx, "nome", &Type::Literal), "char nome[80]");
    }

    #[test]
    fn pointer_to_basic_strips_to_the_mapped_scalar_star() {
        let interner = Interner::new();
        let env = la_types::SymbolEnv::new();
        let ctx = CodegenContext::new(&interner, &env);
        let ty = Type::Pointer(Box::new(Type::Inteiro));
        assert_eq!(CTypeMapper::declare(&ctx, "p", &ty), "int *p");
    }

    #[test]
    fn array_of_literal_puts_the_array_dimension_before_the_char_buffer() {
        let interner = Interner::new();
        let env = la_types::SymbolEnv::new();
        let ctx = CodegenContext::new(&interner, &env);
        let ty = Type::Array {
            elem: Box::new(Type::Literal),
            len: 5,
        };
        assert_eq!(CTypeMapper::declare(&ctx, "v", &ty), "char v[5][80]");
    }

    #[test]
    fn literal_parameter_is_a_char_pointer() {
        let interner = Interner::new();
        let env = la_types::SymbolEnv::new();
        let ctx = CodegenContext::new(&interner, &env);
        assert_eq!(CTypeMapper::declare_param(&ctx, "p", &Type::Literal), "char* p");
    }
}
