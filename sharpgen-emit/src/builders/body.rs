//! The method-body builder.

use crate::writer::SourceWriter;

/// A braced, indentation-scoped method body.
///
/// Construction writes the opening brace and steps one indentation level
/// in; [`close`](MethodBodyBuilder::close) steps back out and writes the
/// closing brace.
#[derive(Debug)]
pub struct MethodBodyBuilder<'w> {
    writer: &'w mut SourceWriter,
}

impl<'w> MethodBodyBuilder<'w> {
    pub(crate) fn new(writer: &'w mut SourceWriter) -> Self {
        writer.line("{");
        writer.indent();
        Self { writer }
    }

    /// Append one statement line.
    pub fn line(self, text: &str) -> Self {
        self.writer.line(text);
        self
    }

    /// Append a blank line.
    pub fn blank(self) -> Self {
        self.writer.newline();
        self
    }

    /// Append `return <expr>;`.
    pub fn return_expr(self, expression: &str) -> Self {
        self.writer.line(&format!("return {expression};"));
        self
    }

    /// Append `throw <expr>;`.
    pub fn throw_expr(self, expression: &str) -> Self {
        self.writer.line(&format!("throw {expression};"));
        self
    }

    /// Close the body: release the indentation level and write the
    /// closing brace.
    pub fn close(self) {
        let Self { writer } = self;
        writer.dedent();
        writer.line("}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(writer: &mut SourceWriter) -> MethodBodyBuilder<'_> {
        writer.line("void M()");
        MethodBodyBuilder::new(writer)
    }

    #[test]
    fn test_statements_are_indented() {
        let mut writer = SourceWriter::csharp();
        open(&mut writer)
            .line("var total = x + y;")
            .return_expr("total")
            .close();
        assert_eq!(
            writer.finish(),
            "void M()\n{\n    var total = x + y;\n    return total;\n}\n"
        );
    }

    #[test]
    fn test_throw_and_blank() {
        let mut writer = SourceWriter::csharp();
        open(&mut writer)
            .blank()
            .throw_expr("new global::System.NotSupportedException()")
            .close();
        assert_eq!(
            writer.finish(),
            "void M()\n{\n\n    throw new global::System.NotSupportedException();\n}\n"
        );
    }

    #[test]
    fn test_close_restores_brace_level() {
        let mut writer = SourceWriter::csharp();
        open(&mut writer).close();
        assert_eq!(writer.finish(), "void M()\n{\n}\n");
    }
}
