//! The indentation-tracking text sink that every builder writes through.

use crate::indent::Indent;

/// Append-only source buffer with indentation tracking.
///
/// One `SourceWriter` is created per emitted file. Builders obtained from
/// [`SourceWriter::declare`] all write into the same linear stream; once
/// the outermost builder is closed, [`SourceWriter::finish`] yields the
/// finished text blob.
///
/// # Example
///
/// ```
/// use sharpgen_emit::SourceWriter;
///
/// let mut writer = SourceWriter::csharp();
/// writer.line("namespace Demo;");
/// writer.newline();
/// writer.line("// body");
/// assert_eq!(writer.finish(), "namespace Demo;\n\n// body\n");
/// ```
#[derive(Debug, Clone)]
pub struct SourceWriter {
    buffer: String,
    indent: Indent,
    level: usize,
    at_line_start: bool,
}

impl SourceWriter {
    /// Create a new writer with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            buffer: String::new(),
            indent,
            level: 0,
            at_line_start: true,
        }
    }

    /// Create a new writer with 4-space indentation (C# convention).
    pub fn csharp() -> Self {
        Self::new(Indent::CSHARP)
    }

    /// Append text at the cursor.
    ///
    /// If the cursor is at the start of a fresh line and `text` is
    /// non-empty, the current indentation prefix is written first.
    pub fn push_str(&mut self, text: &str) -> &mut Self {
        if text.is_empty() {
            return self;
        }
        self.write_indent();
        self.buffer.push_str(text);
        self
    }

    /// Append a single character at the cursor.
    pub fn push_char(&mut self, c: char) -> &mut Self {
        self.write_indent();
        self.buffer.push(c);
        self
    }

    /// Append text followed by a line terminator.
    pub fn line(&mut self, text: &str) -> &mut Self {
        self.push_str(text);
        self.newline()
    }

    /// Append a line terminator and reset the cursor to a fresh line.
    ///
    /// Blank lines carry no trailing indentation.
    pub fn newline(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self.at_line_start = true;
        self
    }

    /// Increase the indentation level.
    pub fn indent(&mut self) -> &mut Self {
        self.level += 1;
        self
    }

    /// Decrease the indentation level.
    pub fn dedent(&mut self) -> &mut Self {
        self.level = self.level.saturating_sub(1);
        self
    }

    /// Run `f` one indentation level deeper.
    ///
    /// The level is restored when `f` returns, so acquire and release are
    /// always paired.
    pub fn indented<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.indent();
        f(self);
        self.dedent()
    }

    /// Get the current indentation level.
    pub fn level(&self) -> usize {
        self.level
    }

    /// Get a reference to the buffered text.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the writer and return the emitted text.
    pub fn finish(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        if !self.at_line_start {
            return;
        }
        let indent = self.indent;
        for _ in 0..self.level {
            indent.write_to(&mut self.buffer);
        }
        self.at_line_start = false;
    }
}

impl Default for SourceWriter {
    fn default() -> Self {
        Self::csharp()
    }
}
