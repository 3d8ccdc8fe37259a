//! The property builder.

use crate::attribute::AttributeSpec;
use crate::builders::modifiers::{Accessibility, Virtuality};
use crate::types::TypeRef;
use crate::writer::SourceWriter;

/// The implicit-setter flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetterKind {
    Set,
    Init,
}

impl SetterKind {
    fn keyword(&self) -> &'static str {
        match self {
            Self::Set => "set",
            Self::Init => "init",
        }
    }
}

/// Accumulates a property's configuration, then emits the whole
/// declaration on [`commit`](PropertyBuilder::commit).
///
/// At least one accessor must be configured (implicit getter, implicit
/// setter, or an explicit getter expression); committing with none
/// configured emits nothing at all. An initializer combined with an
/// explicit getter expression is dropped. Both are deliberate leniency,
/// not diagnosed here.
#[derive(Debug)]
pub struct PropertyBuilder<'w> {
    writer: &'w mut SourceWriter,
    ty: TypeRef,
    name: String,
    inherit_doc: Option<String>,
    attributes: Vec<AttributeSpec>,
    accessibility: Option<Accessibility>,
    is_static: bool,
    required: bool,
    new_modifier: bool,
    virtuality: Virtuality,
    getter: bool,
    setter: Option<SetterKind>,
    getter_expression: Option<String>,
    initializer: Option<String>,
}

impl<'w> PropertyBuilder<'w> {
    pub(crate) fn new(writer: &'w mut SourceWriter, ty: TypeRef, name: String) -> Self {
        Self {
            writer,
            ty,
            name,
            inherit_doc: None,
            attributes: Vec::new(),
            accessibility: None,
            is_static: false,
            required: false,
            new_modifier: false,
            virtuality: Virtuality::None,
            getter: false,
            setter: None,
            getter_expression: None,
            initializer: None,
        }
    }

    /// Inherit documentation from `member` on the owning type.
    pub fn inherit_doc(mut self, owner: &TypeRef, member: &str) -> Self {
        self.inherit_doc = Some(owner.doc_reference(member));
        self
    }

    /// Add an attribute annotation.
    pub fn attribute(mut self, attribute: AttributeSpec) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Add attribute annotations in bulk.
    pub fn attributes(mut self, attributes: impl IntoIterator<Item = AttributeSpec>) -> Self {
        self.attributes.extend(attributes);
        self
    }

    /// Set the declared accessibility.
    pub fn accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = Some(accessibility);
        self
    }

    /// Mark the property `static`.
    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Mark the property `required`.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Add the `new` (member-hiding) modifier.
    pub fn new_modifier(mut self) -> Self {
        self.new_modifier = true;
        self
    }

    /// Set the virtual/abstract/override modifier. Last write wins.
    pub fn virtuality(mut self, virtuality: Virtuality) -> Self {
        self.virtuality = virtuality;
        self
    }

    /// Remove any virtual/abstract/override modifier.
    pub fn clear_virtuality(mut self) -> Self {
        self.virtuality = Virtuality::None;
        self
    }

    /// Add an implicit getter (`get;`).
    pub fn with_getter(mut self) -> Self {
        self.getter = true;
        self
    }

    /// Add an implicit setter (`set;`).
    pub fn with_setter(mut self) -> Self {
        self.setter = Some(SetterKind::Set);
        self
    }

    /// Add an init-only implicit setter (`init;`).
    pub fn with_init_setter(mut self) -> Self {
        self.setter = Some(SetterKind::Init);
        self
    }

    /// Use an explicit getter expression (`=> <expr>;`). Mutually
    /// exclusive with implicit accessors and the initializer.
    pub fn getter_expression(mut self, expression: impl Into<String>) -> Self {
        self.getter_expression = Some(expression.into());
        self
    }

    /// Set an initializer expression (` = <expr>;`).
    pub fn initializer(mut self, expression: impl Into<String>) -> Self {
        self.initializer = Some(expression.into());
        self
    }

    /// Emit the property declaration.
    pub fn commit(self) {
        let Self {
            writer,
            ty,
            name,
            inherit_doc,
            attributes,
            accessibility,
            is_static,
            required,
            new_modifier,
            virtuality,
            getter,
            setter,
            getter_expression,
            initializer,
        } = self;

        // No accessor configured: nothing to emit.
        if getter_expression.is_none() && !getter && setter.is_none() {
            return;
        }

        if let Some(cref) = inherit_doc {
            writer.line(&format!("/// <inheritdoc cref={cref}/>"));
        }
        for attribute in &attributes {
            writer.line(&attribute.render());
        }

        let mut declaration = String::new();
        if let Some(accessibility) = accessibility {
            declaration.push_str(accessibility.keyword());
            declaration.push(' ');
        }
        if is_static {
            declaration.push_str("static ");
        }
        if required {
            declaration.push_str("required ");
        }
        if new_modifier {
            declaration.push_str("new ");
        }
        if let Some(keyword) = virtuality.keyword() {
            declaration.push_str(keyword);
            declaration.push(' ');
        }
        declaration.push_str(&ty.render_code());
        declaration.push(' ');
        declaration.push_str(&name);

        if let Some(expression) = getter_expression {
            // The explicit getter forbids an initializer; a configured
            // one is dropped.
            declaration.push_str(" => ");
            declaration.push_str(&expression);
            declaration.push(';');
        } else {
            declaration.push_str(" { ");
            if getter {
                declaration.push_str("get; ");
            }
            if let Some(kind) = setter {
                declaration.push_str(kind.keyword());
                declaration.push_str("; ");
            }
            declaration.push('}');
            if let Some(expression) = initializer {
                declaration.push_str(" = ");
                declaration.push_str(&expression);
                declaration.push(';');
            }
        }

        writer.line(&declaration);
    }
}
