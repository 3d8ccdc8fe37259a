//! The inheritance-list builder.

use crate::builders::members::TypeBuilder;
use crate::types::TypeRef;
use crate::writer::SourceWriter;

/// Appends base-type and interface references after the type header.
///
/// The first reference is preceded by ` : `, every subsequent one by
/// `, `. No check is made that a reference is actually an interface or a
/// legal base class; that is the caller's contract.
#[derive(Debug)]
pub struct InheritanceBuilder<'w> {
    writer: &'w mut SourceWriter,
    count: usize,
}

impl<'w> InheritanceBuilder<'w> {
    pub(crate) fn new(writer: &'w mut SourceWriter) -> Self {
        Self { writer, count: 0 }
    }

    /// Append a base-type or interface reference.
    pub fn with_base(mut self, base: &TypeRef) -> Self {
        self.separator();
        let rendered = base.render_code();
        self.writer.push_str(&rendered);
        self
    }

    /// Append a raw namespace + name pair, unvalidated.
    pub fn with_raw(mut self, namespace: &str, name: &str) -> Self {
        self.separator();
        if namespace.is_empty() {
            self.writer.push_str(name);
        } else {
            self.writer.push_str("global::");
            self.writer.push_str(namespace);
            self.writer.push_char('.');
            self.writer.push_str(name);
        }
        self
    }

    /// Append every element of `items` that `project` maps to a
    /// reference, skipping the rest. Supports bulk copy-with-filter from
    /// the external symbol data.
    pub fn with_bases_from<T, I, F>(mut self, items: I, project: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(T) -> Option<TypeRef>,
    {
        for item in items {
            if let Some(base) = project(item) {
                self = self.with_base(&base);
            }
        }
        self
    }

    /// End the header line, open the type body and step one indentation
    /// level in.
    pub fn open_body(self) -> TypeBuilder<'w> {
        let Self { writer, .. } = self;
        writer.newline();
        writer.line("{");
        writer.indent();
        TypeBuilder::new(writer)
    }

    fn separator(&mut self) {
        if self.count == 0 {
            self.writer.push_str(" : ");
        } else {
            self.writer.push_str(", ");
        }
        self.count += 1;
    }
}
