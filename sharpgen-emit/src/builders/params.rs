//! The method parameter-list builder.

use serde::Serialize;

use crate::builders::body::MethodBodyBuilder;
use crate::types::TypeRef;
use crate::writer::SourceWriter;

/// By-reference passing kind of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum RefKind {
    #[default]
    None,
    In,
    Out,
    Ref,
}

impl RefKind {
    fn keyword(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::In => Some("in"),
            Self::Out => Some("out"),
            Self::Ref => Some("ref"),
        }
    }
}

/// A declared default value.
///
/// `Null` is the explicit-default-without-value case and renders as the
/// `null` token; `Text` renders its literal verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DefaultArg {
    Null,
    Text(String),
}

impl DefaultArg {
    /// The default-value literal text.
    pub fn render(&self) -> &str {
        match self {
            Self::Null => "null",
            Self::Text(text) => text,
        }
    }
}

/// A parameter descriptor for bulk copies from external symbol data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamSpec {
    pub name: String,
    pub ty: TypeRef,
    pub ref_kind: RefKind,
    pub variadic: bool,
    pub default: Option<DefaultArg>,
}

impl ParamSpec {
    /// Create a plain by-value parameter.
    pub fn new(ty: TypeRef, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty,
            ref_kind: RefKind::None,
            variadic: false,
            default: None,
        }
    }

    /// Set the by-reference kind.
    pub fn ref_kind(mut self, kind: RefKind) -> Self {
        self.ref_kind = kind;
        self
    }

    /// Mark the parameter variadic (`params`).
    pub fn variadic(mut self) -> Self {
        self.variadic = true;
        self
    }

    /// Set the declared default.
    pub fn default_value(mut self, default: DefaultArg) -> Self {
        self.default = Some(default);
        self
    }
}

/// Accumulates comma-separated parameters, then closes the list with one
/// of three terminals: a braced body, an abstract `);`, or an
/// expression body `) => <expr>;`.
#[derive(Debug)]
pub struct MethodParamsBuilder<'w> {
    writer: &'w mut SourceWriter,
    count: usize,
}

impl<'w> MethodParamsBuilder<'w> {
    pub(crate) fn new(writer: &'w mut SourceWriter) -> Self {
        Self { writer, count: 0 }
    }

    /// Append a plain parameter.
    pub fn with_param(mut self, ty: TypeRef, name: &str) -> Self {
        self.push_spec(&ParamSpec::new(ty, name));
        self
    }

    /// Append a parameter with a declared default.
    pub fn with_default(mut self, ty: TypeRef, name: &str, default: DefaultArg) -> Self {
        self.push_spec(&ParamSpec::new(ty, name).default_value(default));
        self
    }

    /// Append an `in` parameter.
    pub fn with_in(mut self, ty: TypeRef, name: &str) -> Self {
        self.push_spec(&ParamSpec::new(ty, name).ref_kind(RefKind::In));
        self
    }

    /// Append an `out` parameter.
    pub fn with_out(mut self, ty: TypeRef, name: &str) -> Self {
        self.push_spec(&ParamSpec::new(ty, name).ref_kind(RefKind::Out));
        self
    }

    /// Append a `ref` parameter.
    pub fn with_ref(mut self, ty: TypeRef, name: &str) -> Self {
        self.push_spec(&ParamSpec::new(ty, name).ref_kind(RefKind::Ref));
        self
    }

    /// Append a variadic (`params`) parameter.
    pub fn with_variadic(mut self, ty: TypeRef, name: &str) -> Self {
        self.push_spec(&ParamSpec::new(ty, name).variadic());
        self
    }

    /// Bulk-copy an existing parameter list, preserving reference kinds,
    /// variadic flags and declared defaults.
    pub fn with_params_from(mut self, params: impl IntoIterator<Item = ParamSpec>) -> Self {
        for param in params {
            self.push_spec(&param);
        }
        self
    }

    /// Close the list and open a braced body one indentation level in.
    pub fn open_body(self) -> MethodBodyBuilder<'w> {
        let Self { writer, .. } = self;
        writer.push_str(")");
        writer.newline();
        MethodBodyBuilder::new(writer)
    }

    /// Close the list with `);` — no body, for abstract and interface
    /// declarations.
    pub fn commit_abstract(self) {
        let Self { writer, .. } = self;
        writer.push_str(");");
        writer.newline();
    }

    /// Close the list with an expression body: `) => <expr>;`.
    pub fn commit_expression(self, expression: &str) {
        let Self { writer, .. } = self;
        writer.push_str(") => ");
        writer.push_str(expression);
        writer.push_str(";");
        writer.newline();
    }

    fn push_spec(&mut self, param: &ParamSpec) {
        if self.count > 0 {
            self.writer.push_str(", ");
        }
        self.count += 1;

        if param.variadic {
            self.writer.push_str("params ");
        }
        if let Some(keyword) = param.ref_kind.keyword() {
            self.writer.push_str(keyword);
            self.writer.push_char(' ');
        }
        let rendered = param.ty.render_code();
        self.writer.push_str(&rendered);
        self.writer.push_char(' ');
        self.writer.push_str(&param.name);
        if let Some(default) = &param.default {
            self.writer.push_str(" = ");
            self.writer.push_str(default.render());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(writer: &mut SourceWriter) -> MethodParamsBuilder<'_> {
        writer.push_str("void M(");
        MethodParamsBuilder::new(writer)
    }

    #[test]
    fn test_plain_params_comma_separated() {
        let mut writer = SourceWriter::csharp();
        params(&mut writer)
            .with_param(TypeRef::int(), "x")
            .with_param(TypeRef::int(), "y")
            .commit_abstract();
        assert_eq!(writer.finish(), "void M(int x, int y);\n");
    }

    #[test]
    fn test_ref_kinds_and_variadic() {
        let mut writer = SourceWriter::csharp();
        params(&mut writer)
            .with_in(TypeRef::int(), "a")
            .with_out(TypeRef::string(), "b")
            .with_ref(TypeRef::bool(), "c")
            .with_variadic(TypeRef::array(TypeRef::object()), "rest")
            .commit_abstract();
        assert_eq!(
            writer.finish(),
            "void M(in int a, out string b, ref bool c, params object[] rest);\n"
        );
    }

    #[test]
    fn test_defaults() {
        let mut writer = SourceWriter::csharp();
        params(&mut writer)
            .with_default(TypeRef::string().nullable(), "name", DefaultArg::Null)
            .with_default(TypeRef::int(), "count", DefaultArg::Text("1".into()))
            .commit_abstract();
        assert_eq!(
            writer.finish(),
            "void M(string? name = null, int count = 1);\n"
        );
    }

    #[test]
    fn test_bulk_copy_preserves_shape() {
        let source = vec![
            ParamSpec::new(TypeRef::int(), "x").ref_kind(RefKind::Ref),
            ParamSpec::new(TypeRef::string(), "tag").default_value(DefaultArg::Null),
            ParamSpec::new(TypeRef::array(TypeRef::int()), "more").variadic(),
        ];

        let mut writer = SourceWriter::csharp();
        params(&mut writer)
            .with_params_from(source)
            .commit_abstract();
        assert_eq!(
            writer.finish(),
            "void M(ref int x, string tag = null, params int[] more);\n"
        );
    }

    #[test]
    fn test_expression_terminal() {
        let mut writer = SourceWriter::csharp();
        params(&mut writer)
            .with_param(TypeRef::int(), "x")
            .commit_expression("x * 2");
        assert_eq!(writer.finish(), "void M(int x) => x * 2;\n");
    }

    #[test]
    fn test_empty_list_body_terminal() {
        let mut writer = SourceWriter::csharp();
        params(&mut writer).open_body().close();
        assert_eq!(writer.finish(), "void M()\n{\n}\n");
    }
}
