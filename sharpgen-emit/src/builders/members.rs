//! The type-members builder.

use crate::builders::method::MethodBuilder;
use crate::builders::property::PropertyBuilder;
use crate::types::TypeRef;
use crate::writer::SourceWriter;

/// Dispenses property and method builders inside an open type body.
///
/// Members are separated by exactly one blank line; nothing precedes the
/// first member. Closing the builder releases the indentation level taken
/// by [`InheritanceBuilder::open_body`](crate::builders::InheritanceBuilder::open_body)
/// and writes the closing brace.
#[derive(Debug)]
pub struct TypeBuilder<'w> {
    writer: &'w mut SourceWriter,
    members: usize,
}

impl<'w> TypeBuilder<'w> {
    pub(crate) fn new(writer: &'w mut SourceWriter) -> Self {
        Self { writer, members: 0 }
    }

    /// Start a property member with the given declared type and name.
    pub fn property(&mut self, ty: TypeRef, name: impl Into<String>) -> PropertyBuilder<'_> {
        self.separate();
        PropertyBuilder::new(&mut *self.writer, ty, name.into())
    }

    /// Start a method member with the given name.
    pub fn method(&mut self, name: impl Into<String>) -> MethodBuilder<'_> {
        self.separate();
        MethodBuilder::new(&mut *self.writer, name.into())
    }

    /// Close the type body: step back out one indentation level and
    /// write the closing brace.
    pub fn close(self) {
        let Self { writer, .. } = self;
        writer.dedent();
        writer.line("}");
    }

    fn separate(&mut self) {
        if self.members > 0 {
            self.writer.newline();
        }
        self.members += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::modifiers::Accessibility;

    #[test]
    fn test_single_blank_line_between_members() {
        let mut writer = SourceWriter::csharp();
        let mut body = writer.declare("Pair").commit().open_body();
        body.property(TypeRef::int(), "First")
            .accessibility(Accessibility::Public)
            .with_getter()
            .commit();
        body.property(TypeRef::int(), "Second")
            .accessibility(Accessibility::Public)
            .with_getter()
            .commit();
        body.close();

        assert_eq!(
            writer.finish(),
            "class Pair\n\
             {\n\
             \x20   public int First { get; }\n\
             \n\
             \x20   public int Second { get; }\n\
             }\n"
        );
    }

    #[test]
    fn test_no_blank_line_before_first_member() {
        let mut writer = SourceWriter::csharp();
        let mut body = writer.declare("One").commit().open_body();
        body.property(TypeRef::string(), "Name")
            .with_getter()
            .commit();
        body.close();

        assert_eq!(
            writer.finish(),
            "class One\n{\n    string Name { get; }\n}\n"
        );
    }

    #[test]
    fn test_closing_brace_matches_opening_level() {
        let mut writer = SourceWriter::csharp();
        let mut body = writer.declare("Depth").commit().open_body();
        body.property(TypeRef::int(), "X").with_getter().commit();
        body.close();
        let text = writer.finish();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.first(), Some(&"class Depth"));
        assert_eq!(lines.get(1), Some(&"{"));
        assert_eq!(lines.last(), Some(&"}"));
    }
}
