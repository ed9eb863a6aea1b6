//! Explicit output targets for template code
//!
//! Template functions take a `&mut impl LineSink` instead of writing to an
//! implicit current output. The collected lines are then handed to the merge
//! engine as a single forward-only stream.

use crate::lines::lines;

/// Destination for generated lines
pub trait LineSink {
    /// Emit one line (without terminator)
    fn emit(&mut self, line: String);

    /// Emit every line of a multi-line text block
    fn emit_text(&mut self, text: &str) {
        for line in lines(text) {
            self.emit(line);
        }
    }
}

/// In-memory line sink
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
}

impl LineBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines collected so far
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines collected
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether nothing was emitted
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl LineSink for LineBuffer {
    fn emit(&mut self, line: String) {
        self.lines.push(line);
    }
}

impl LineSink for Vec<String> {
    fn emit(&mut self, line: String) {
        self.push(line);
    }
}

impl IntoIterator for LineBuffer {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class_declaration(out: &mut impl LineSink, name: &str) {
        out.emit_text(&format!("public class {} {{", name));
        out.emit_text("\n    private int foo;");
        out.emit("}".to_string());
    }

    #[test]
    fn test_template_writes_to_explicit_sink() {
        let mut buffer = LineBuffer::new();
        class_declaration(&mut buffer, "HelloWorld");

        assert_eq!(
            buffer.lines(),
            ["public class HelloWorld {", "", "    private int foo;", "}"]
        );
    }

    #[test]
    fn test_emit_text_agrees_with_lines() {
        let text = "a\n\nb\r\nc\n";
        let mut buffer = LineBuffer::new();
        buffer.emit_text(text);

        let expected: Vec<String> = lines(text).collect();
        assert_eq!(buffer.into_iter().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_vec_is_a_sink() {
        let mut out: Vec<String> = Vec::new();
        out.emit_text("x\ny");
        assert_eq!(out, vec!["x", "y"]);
    }
}
