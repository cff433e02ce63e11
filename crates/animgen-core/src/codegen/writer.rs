//! Indentation-aware text buffer used by every emitter.

/// Spaces per indentation level
pub const INDENT_WIDTH: usize = 4;

/// Mutable output buffer plus the current indentation depth.
///
/// Block pairing is the caller's job. [`CodeWriter::block`] and
/// [`CodeWriter::indented`] pair the open and close calls structurally and
/// are what the emitters use.
#[derive(Debug, Default)]
pub struct CodeWriter {
    buf: String,
    depth: usize,
}

impl CodeWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current indentation depth
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Write the current indentation followed by `text`, without a newline.
    pub fn write_indented(&mut self, text: &str) {
        self.push_indent();
        self.buf.push_str(text);
    }

    /// Write an indented line.
    pub fn line(&mut self, text: &str) {
        self.write_indented(text);
        self.buf.push('\n');
    }

    /// Write an empty line. Never indented.
    pub fn blank_line(&mut self) {
        self.buf.push('\n');
    }

    /// End the current line, then open a brace block on its own line.
    pub fn open_block(&mut self) {
        self.buf.push('\n');
        self.push_indent();
        self.buf.push_str("{\n");
        self.depth += 1;
    }

    /// Close the innermost block.
    pub fn close_block(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.push_indent();
        self.buf.push_str("}\n");
    }

    /// Write `header`, then a brace block whose body is produced by `body`.
    pub fn block<R>(&mut self, header: &str, body: impl FnOnce(&mut Self) -> R) -> R {
        self.write_indented(header);
        self.open_block();
        let result = body(self);
        self.close_block();
        result
    }

    /// Run `body` one level deeper, without braces.
    pub fn indented<R>(&mut self, body: impl FnOnce(&mut Self) -> R) -> R {
        self.depth += 1;
        let result = body(self);
        self.depth -= 1;
        result
    }

    /// Consume the writer and return the text written so far.
    pub fn finish(self) -> String {
        self.buf
    }

    fn push_indent(&mut self) {
        self.buf
            .extend(std::iter::repeat(' ').take(self.depth * INDENT_WIDTH));
    }
}
