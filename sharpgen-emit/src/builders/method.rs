//! The method builder.

use crate::attribute::AttributeSpec;
use crate::builders::modifiers::{Accessibility, Virtuality};
use crate::builders::params::MethodParamsBuilder;
use crate::types::TypeRef;
use crate::writer::SourceWriter;

/// Accumulates a method's documentation, attributes and modifiers;
/// [`open_parameters`](MethodBuilder::open_parameters) flushes the
/// signature head and hands over to the parameter-list builder.
#[derive(Debug)]
pub struct MethodBuilder<'w> {
    writer: &'w mut SourceWriter,
    name: String,
    return_type: Option<TypeRef>,
    inherit_doc: Option<String>,
    attributes: Vec<AttributeSpec>,
    accessibility: Option<Accessibility>,
    is_static: bool,
    new_modifier: bool,
    virtuality: Virtuality,
    is_async: bool,
    partial: bool,
}

impl<'w> MethodBuilder<'w> {
    pub(crate) fn new(writer: &'w mut SourceWriter, name: String) -> Self {
        Self {
            writer,
            name,
            return_type: None,
            inherit_doc: None,
            attributes: Vec::new(),
            accessibility: None,
            is_static: false,
            new_modifier: false,
            virtuality: Virtuality::None,
            is_async: false,
            partial: false,
        }
    }

    /// Set the return type. Absent means `void`.
    pub fn returns(mut self, ty: TypeRef) -> Self {
        self.return_type = Some(ty);
        self
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

    /// Set the declared accessibility.
    pub fn accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = Some(accessibility);
        self
    }

    /// Mark the method `static`.
    pub fn static_(mut self) -> Self {
        self.is_static = true;
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

    /// Mark the method `async`.
    pub fn async_(mut self) -> Self {
        self.is_async = true;
        self
    }

    /// Mark the method `partial`.
    pub fn partial(mut self) -> Self {
        self.partial = true;
        self
    }

    /// Flush documentation, attributes, modifiers, return type and name,
    /// open the parameter list and hand over to its builder.
    pub fn open_parameters(self) -> MethodParamsBuilder<'w> {
        let Self {
            writer,
            name,
            return_type,
            inherit_doc,
            attributes,
            accessibility,
            is_static,
            new_modifier,
            virtuality,
            is_async,
            partial,
        } = self;

        if let Some(cref) = inherit_doc {
            writer.line(&format!("/// <inheritdoc cref={cref}/>"));
        }
        for attribute in &attributes {
            writer.line(&attribute.render());
        }

        let mut head = String::new();
        if let Some(accessibility) = accessibility {
            head.push_str(accessibility.keyword());
            head.push(' ');
        }
        if is_static {
            head.push_str("static ");
        }
        if new_modifier {
            head.push_str("new ");
        }
        if let Some(keyword) = virtuality.keyword() {
            head.push_str(keyword);
            head.push(' ');
        }
        if is_async {
            head.push_str("async ");
        }
        if partial {
            head.push_str("partial ");
        }
        match &return_type {
            Some(ty) => head.push_str(&ty.render_code()),
            None => head.push_str("void"),
        }
        head.push(' ');
        head.push_str(&name);
        head.push('(');
        writer.push_str(&head);

        MethodParamsBuilder::new(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_void_method_head() {
        let mut writer = SourceWriter::csharp();
        MethodBuilder::new(&mut writer, "Run".to_string())
            .accessibility(Accessibility::Public)
            .open_parameters()
            .commit_abstract();
        assert_eq!(writer.finish(), "public void Run();\n");
    }

    #[test]
    fn test_full_modifier_head() {
        let mut writer = SourceWriter::csharp();
        MethodBuilder::new(&mut writer, "HandleAsync".to_string())
            .accessibility(Accessibility::Public)
            .static_()
            .virtuality(Virtuality::Override)
            .async_()
            .returns(TypeRef::generic(
                "System.Threading.Tasks",
                "Task",
                vec![TypeRef::int()],
            ))
            .open_parameters()
            .commit_abstract();
        assert_eq!(
            writer.finish(),
            "public static override async global::System.Threading.Tasks.Task<int> HandleAsync();\n"
        );
    }

    #[test]
    fn test_partial_method() {
        let mut writer = SourceWriter::csharp();
        MethodBuilder::new(&mut writer, "OnCreated".to_string())
            .partial()
            .open_parameters()
            .commit_abstract();
        assert_eq!(writer.finish(), "partial void OnCreated();\n");
    }

    #[test]
    fn test_attributes_and_doc_precede_signature() {
        let mut writer = SourceWriter::csharp();
        MethodBuilder::new(&mut writer, "Get".to_string())
            .inherit_doc(&TypeRef::named("A", "IRepo"), "Get")
            .attribute(AttributeSpec::new(TypeRef::named("A", "PureAttribute")))
            .returns(TypeRef::string())
            .open_parameters()
            .commit_abstract();
        assert_eq!(
            writer.finish(),
            "/// <inheritdoc cref=\"A.IRepo.Get\"/>\n\
             [global::A.PureAttribute]\n\
             string Get();\n"
        );
    }
}
