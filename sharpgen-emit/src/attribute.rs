//! Attribute descriptors.

use serde::Serialize;

use crate::types::TypeRef;

/// An attribute annotation: attribute type plus literal-constant
/// arguments already rendered as text.
///
/// Read-only input to the builders; the core never interprets the
/// argument text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeSpec {
    /// The attribute type.
    pub ty: TypeRef,
    /// Pre-rendered argument literals, in order.
    pub args: Vec<String>,
}

impl AttributeSpec {
    /// Create an argument-less attribute descriptor.
    pub fn new(ty: TypeRef) -> Self {
        Self {
            ty,
            args: Vec::new(),
        }
    }

    /// Add a pre-rendered argument literal.
    pub fn arg(mut self, text: impl Into<String>) -> Self {
        self.args.push(text.into());
        self
    }

    /// Add multiple pre-rendered argument literals.
    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Render as an annotation line body, e.g.
    /// `[global::A.B.MyAttribute("x", 1)]`.
    pub fn render(&self) -> String {
        let ty = self.ty.render_code();
        if self.args.is_empty() {
            format!("[{}]", ty)
        } else {
            format!("[{}({})]", ty, self.args.join(", "))
        }
    }
}
