//! Type references and the symbol-to-text name renderer.
//!
//! A [`TypeRef`] is an immutable descriptor of a named type usage site:
//! namespace path, simple name, generic arguments and nullability. It is
//! the narrowed shape in which host compiler symbols cross into the
//! emission core, and it renders in two flavors: code syntax
//! (`global::A.B.Foo<int>`) and documentation-comment syntax
//! (`A.B.Foo{int}`).

use serde::Serialize;

/// Language keyword aliases for the built-in primitive types.
///
/// Each keyword also knows its CLR type name (`Int32`, `String`, ...) so
/// that rendering can fall back to the qualified spelling when keyword
/// aliasing is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Keyword {
    Bool,
    Byte,
    SByte,
    Short,
    UShort,
    Int,
    UInt,
    Long,
    ULong,
    Float,
    Double,
    Decimal,
    Char,
    String,
    Object,
    Void,
}

impl Keyword {
    /// The short built-in spelling (`int`, `string`, ...).
    pub fn alias(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Byte => "byte",
            Self::SByte => "sbyte",
            Self::Short => "short",
            Self::UShort => "ushort",
            Self::Int => "int",
            Self::UInt => "uint",
            Self::Long => "long",
            Self::ULong => "ulong",
            Self::Float => "float",
            Self::Double => "double",
            Self::Decimal => "decimal",
            Self::Char => "char",
            Self::String => "string",
            Self::Object => "object",
            Self::Void => "void",
        }
    }

    /// The CLR type name inside the `System` namespace.
    pub fn clr_name(&self) -> &'static str {
        match self {
            Self::Bool => "Boolean",
            Self::Byte => "Byte",
            Self::SByte => "SByte",
            Self::Short => "Int16",
            Self::UShort => "UInt16",
            Self::Int => "Int32",
            Self::UInt => "UInt32",
            Self::Long => "Int64",
            Self::ULong => "UInt64",
            Self::Float => "Single",
            Self::Double => "Double",
            Self::Decimal => "Decimal",
            Self::Char => "Char",
            Self::String => "String",
            Self::Object => "Object",
            Self::Void => "Void",
        }
    }
}

/// Rendering flavor for [`TypeRef::render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Substitute keyword aliases for the built-in primitives.
    pub alias_keywords: bool,
    /// Documentation-comment syntax: no `global::` prefix, curly braces
    /// around generic arguments.
    pub doc_mode: bool,
}

impl RenderOptions {
    /// Code syntax with keyword aliases (`int`, `global::A.B.Foo<int>`).
    pub fn code() -> Self {
        Self {
            alias_keywords: true,
            doc_mode: false,
        }
    }

    /// Code syntax with qualified names even for keyword primitives
    /// (`global::System.Int32`).
    pub fn code_verbatim() -> Self {
        Self {
            alias_keywords: false,
            doc_mode: false,
        }
    }

    /// Documentation-comment syntax (`A.B.Foo{int}`).
    pub fn doc() -> Self {
        Self {
            alias_keywords: true,
            doc_mode: true,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::code()
    }
}

/// A named type: namespace path, simple name, generic arguments,
/// nullability and optional keyword classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedType {
    /// Namespace segments, outermost first. Empty means the global
    /// namespace, which renders as nothing.
    pub namespace: Vec<String>,
    /// Simple type name without namespace or arity markers.
    pub name: String,
    /// Generic arguments, in declaration order.
    pub args: Vec<TypeRef>,
    /// Nullable annotation (`?` suffix).
    pub nullable: bool,
    /// Keyword classification for the built-in primitives.
    pub keyword: Option<Keyword>,
}

/// An immutable descriptor of a type usage site.
///
/// Supplied by the external symbol source and never mutated by the
/// emission core. The nullable-value wrapper and arrays are dedicated
/// variants, so a multi-dimensional array cannot be expressed at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TypeRef {
    /// A named type, possibly generic, possibly a keyword primitive.
    Named(NamedType),
    /// A generic type parameter; renders as its bare name.
    TypeParameter(String),
    /// The nullable-value wrapper (`Nullable<T>`); renders as `T?`.
    Nullable(Box<TypeRef>),
    /// A single-dimensional array; renders as `T[]`.
    Array {
        element: Box<TypeRef>,
        nullable: bool,
    },
}

impl TypeRef {
    /// Create a named type reference. The namespace is a dot-separated
    /// path; an empty string means the global namespace.
    pub fn named(namespace: &str, name: impl Into<String>) -> Self {
        Self::Named(NamedType {
            namespace: split_namespace(namespace),
            name: name.into(),
            args: Vec::new(),
            nullable: false,
            keyword: None,
        })
    }

    /// Create a generic named type reference.
    pub fn generic(namespace: &str, name: impl Into<String>, args: Vec<TypeRef>) -> Self {
        Self::Named(NamedType {
            namespace: split_namespace(namespace),
            name: name.into(),
            args,
            nullable: false,
            keyword: None,
        })
    }

    /// Create a keyword primitive reference (`System.Int32` with the
    /// `int` alias, and so on).
    pub fn keyword(keyword: Keyword) -> Self {
        Self::Named(NamedType {
            namespace: vec!["System".to_string()],
            name: keyword.clr_name().to_string(),
            args: Vec::new(),
            nullable: false,
            keyword: Some(keyword),
        })
    }

    /// Create a generic type parameter reference.
    pub fn type_parameter(name: impl Into<String>) -> Self {
        Self::TypeParameter(name.into())
    }

    /// Wrap a value type in the nullable-value wrapper (`T?`).
    pub fn nullable_value(inner: TypeRef) -> Self {
        Self::Nullable(Box::new(inner))
    }

    /// Create a single-dimensional array reference (`T[]`).
    pub fn array(element: TypeRef) -> Self {
        Self::Array {
            element: Box::new(element),
            nullable: false,
        }
    }

    /// Convenience: `bool`.
    pub fn bool() -> Self {
        Self::keyword(Keyword::Bool)
    }

    /// Convenience: `int`.
    pub fn int() -> Self {
        Self::keyword(Keyword::Int)
    }

    /// Convenience: `long`.
    pub fn long() -> Self {
        Self::keyword(Keyword::Long)
    }

    /// Convenience: `double`.
    pub fn double() -> Self {
        Self::keyword(Keyword::Double)
    }

    /// Convenience: `string`.
    pub fn string() -> Self {
        Self::keyword(Keyword::String)
    }

    /// Convenience: `object`.
    pub fn object() -> Self {
        Self::keyword(Keyword::Object)
    }

    /// Convenience: `void`.
    pub fn void() -> Self {
        Self::keyword(Keyword::Void)
    }

    /// Mark this reference nullable.
    ///
    /// Type parameters and the nullable-value wrapper are unchanged; the
    /// wrapper already renders its own `?`.
    pub fn nullable(self) -> Self {
        match self {
            Self::Named(mut named) => {
                named.nullable = true;
                Self::Named(named)
            }
            Self::Array { element, .. } => Self::Array {
                element,
                nullable: true,
            },
            other @ (Self::TypeParameter(_) | Self::Nullable(_)) => other,
        }
    }

    /// Whether this reference carries a nullable annotation.
    pub fn is_nullable(&self) -> bool {
        match self {
            Self::Named(named) => named.nullable,
            Self::Nullable(_) => true,
            Self::Array { nullable, .. } => *nullable,
            Self::TypeParameter(_) => false,
        }
    }

    /// Render this reference to canonical text.
    ///
    /// Deterministic: the same value always yields identical output.
    pub fn render(&self, opts: RenderOptions) -> String {
        let mut out = String::new();
        self.render_into(&mut out, opts);
        out
    }

    /// Render in code syntax with keyword aliases.
    pub fn render_code(&self) -> String {
        self.render(RenderOptions::code())
    }

    /// Render in documentation-comment syntax.
    pub fn render_doc(&self) -> String {
        self.render(RenderOptions::doc())
    }

    /// Render a documentation cross-reference to `member` on this type,
    /// quoted for embedding inside a documentation attribute value.
    pub fn doc_reference(&self, member: &str) -> String {
        format!("\"{}.{}\"", self.render_doc(), member)
    }

    fn render_into(&self, out: &mut String, opts: RenderOptions) {
        match self {
            Self::TypeParameter(name) => out.push_str(name),
            Self::Nullable(inner) => {
                inner.render_into(out, opts);
                out.push('?');
            }
            Self::Array { element, nullable } => {
                element.render_into(out, opts);
                out.push_str("[]");
                if *nullable {
                    out.push('?');
                }
            }
            Self::Named(named) => {
                if opts.alias_keywords {
                    if let Some(keyword) = named.keyword {
                        out.push_str(keyword.alias());
                        if named.nullable {
                            out.push('?');
                        }
                        return;
                    }
                }
                if !named.namespace.is_empty() {
                    if !opts.doc_mode {
                        out.push_str("global::");
                    }
                    for segment in &named.namespace {
                        out.push_str(segment);
                        out.push('.');
                    }
                }
                out.push_str(&named.name);
                if named.nullable {
                    out.push('?');
                }
                if !named.args.is_empty() {
                    out.push(if opts.doc_mode { '{' } else { '<' });
                    for (i, arg) in named.args.iter().enumerate() {
                        if i > 0 {
                            out.push_str(", ");
                        }
                        arg.render_into(out, opts);
                    }
                    out.push(if opts.doc_mode { '}' } else { '>' });
                }
            }
        }
    }
}

fn split_namespace(namespace: &str) -> Vec<String> {
    if namespace.is_empty() {
        Vec::new()
    } else {
        namespace.split('.').map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_alias() {
        assert_eq!(TypeRef::int().render_code(), "int");
        assert_eq!(TypeRef::string().render_code(), "string");
        assert_eq!(TypeRef::void().render_code(), "void");
    }

    #[test]
    fn test_nullable_keyword_alias() {
        assert_eq!(TypeRef::int().nullable().render_code(), "int?");
        assert_eq!(TypeRef::string().nullable().render_code(), "string?");
    }

    #[test]
    fn test_keyword_verbatim_qualifies() {
        assert_eq!(
            TypeRef::int().render(RenderOptions::code_verbatim()),
            "global::System.Int32"
        );
    }

    #[test]
    fn test_named_type_code_and_doc_modes() {
        let foo = TypeRef::named("A.B", "Foo");
        assert_eq!(foo.render_code(), "global::A.B.Foo");
        assert_eq!(foo.render_doc(), "A.B.Foo");
    }

    #[test]
    fn test_global_namespace_renders_bare() {
        let foo = TypeRef::named("", "Foo");
        assert_eq!(foo.render_code(), "Foo");
        assert_eq!(foo.render_doc(), "Foo");
    }

    #[test]
    fn test_generic_rendering() {
        let list = TypeRef::generic(
            "System.Collections.Generic",
            "List",
            vec![TypeRef::string()],
        );
        assert_eq!(
            list.render_code(),
            "global::System.Collections.Generic.List<string>"
        );
        assert_eq!(
            list.render_doc(),
            "System.Collections.Generic.List{string}"
        );
    }

    #[test]
    fn test_generic_arguments_recurse_with_mode() {
        let dict = TypeRef::generic(
            "System.Collections.Generic",
            "Dictionary",
            vec![TypeRef::string(), TypeRef::named("A.B", "Foo")],
        );
        assert_eq!(
            dict.render_code(),
            "global::System.Collections.Generic.Dictionary<string, global::A.B.Foo>"
        );
        assert_eq!(
            dict.render_doc(),
            "System.Collections.Generic.Dictionary{string, A.B.Foo}"
        );
    }

    #[test]
    fn test_type_parameter_renders_bare() {
        let param = TypeRef::type_parameter("TResponse");
        assert_eq!(param.render_code(), "TResponse");
        assert_eq!(param.render_doc(), "TResponse");
    }

    #[test]
    fn test_nullable_value_wrapper() {
        let nullable_int = TypeRef::nullable_value(TypeRef::int());
        assert_eq!(nullable_int.render_code(), "int?");

        let nullable_named = TypeRef::nullable_value(TypeRef::named("A", "Money"));
        assert_eq!(nullable_named.render_code(), "global::A.Money?");
    }

    #[test]
    fn test_array_rendering() {
        let ints = TypeRef::array(TypeRef::int());
        assert_eq!(ints.render_code(), "int[]");
        assert_eq!(ints.nullable().render_code(), "int[]?");
    }

    #[test]
    fn test_render_is_deterministic() {
        let ty = TypeRef::generic("A.B", "Foo", vec![TypeRef::int().nullable()]);
        assert_eq!(ty.render_code(), ty.render_code());
        assert_eq!(ty.render_doc(), ty.render_doc());
    }

    #[test]
    fn test_doc_reference() {
        let foo = TypeRef::named("A.B", "Foo");
        assert_eq!(foo.doc_reference("Bar"), "\"A.B.Foo.Bar\"");
    }

    #[test]
    fn test_clr_names() {
        assert_eq!(Keyword::Int.clr_name(), "Int32");
        assert_eq!(Keyword::Float.clr_name(), "Single");
        assert_eq!(Keyword::Bool.clr_name(), "Boolean");
    }
}
