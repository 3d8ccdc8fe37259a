//! The opening-type builder: accessibility, partial flag and kind.

use crate::builders::inheritance::InheritanceBuilder;
use crate::builders::modifiers::{Accessibility, TypeKind};
use crate::writer::SourceWriter;

impl SourceWriter {
    /// Start declaring a type with the given name.
    ///
    /// This is the entry point into the builder chain; one `declare` per
    /// top-level type in the emitted file.
    pub fn declare(&mut self, name: impl Into<String>) -> TypeHeaderBuilder<'_> {
        TypeHeaderBuilder {
            writer: self,
            name: name.into(),
            kind: TypeKind::Class,
            accessibility: None,
            partial: false,
        }
    }
}

/// Builds the type header: `[accessibility] [partial] <kind> <name>`.
#[derive(Debug)]
pub struct TypeHeaderBuilder<'w> {
    writer: &'w mut SourceWriter,
    name: String,
    kind: TypeKind,
    accessibility: Option<Accessibility>,
    partial: bool,
}

impl<'w> TypeHeaderBuilder<'w> {
    /// Set the declared accessibility.
    pub fn accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = Some(accessibility);
        self
    }

    /// Mark the declaration `partial`.
    pub fn partial(mut self) -> Self {
        self.partial = true;
        self
    }

    /// Set the declared kind (class, interface, struct, record, record
    /// struct). Defaults to class.
    pub fn kind(mut self, kind: TypeKind) -> Self {
        self.kind = kind;
        self
    }

    /// Write the header and move on to the inheritance list.
    pub fn commit(self) -> InheritanceBuilder<'w> {
        let Self {
            writer,
            name,
            kind,
            accessibility,
            partial,
        } = self;

        if let Some(accessibility) = accessibility {
            writer.push_str(accessibility.keyword());
            writer.push_char(' ');
        }
        if partial {
            writer.push_str("partial ");
        }
        writer.push_str(kind.keyword());
        writer.push_char(' ');
        writer.push_str(&name);

        InheritanceBuilder::new(writer)
    }
}
