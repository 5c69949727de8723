//! Append-only output buffer with indent tracking.

use crate::indent::Indent;

/// The text buffer the emission pipeline writes into.
///
/// Append-only: phases only ever add to the end, never read back or rewrite
/// earlier text. Whether anything "real" was emitted is not tracked here; the
/// composer owns that flag per phase.
#[derive(Debug, Clone)]
pub struct EmissionBuffer {
    buffer: String,
    depth: usize,
    indent: Indent,
}

impl EmissionBuffer {
    /// Create an empty buffer at depth zero.
    pub fn new(indent: Indent) -> Self {
        Self {
            buffer: String::new(),
            depth: 0,
            indent,
        }
    }

    /// Append a full line: current indentation, the text, a newline.
    pub fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.buffer.push_str(self.indent.as_str());
        }
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    /// Append a blank separator line, with no indent whitespace.
    pub fn blank(&mut self) {
        self.buffer.push('\n');
    }

    /// Append raw text verbatim, with no indentation or newline.
    pub fn append(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    /// Increase the indent depth by one level.
    pub fn indent(&mut self) {
        self.depth += 1;
    }

    /// Decrease the indent depth by one level.
    pub fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// The current indent depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// View the buffered text.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the buffer and return the text.
    pub fn build(self) -> String {
        self.buffer
    }
}

impl Default for EmissionBuffer {
    fn default() -> Self {
        Self::new(Indent::ASPECTJ)
    }
}
