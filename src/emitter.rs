//! Line-oriented output accumulator.
//!
//! One emitter is reused sequentially across artifacts: the generator
//! appends lines while walking a file, then drains the finished text.

/// Append-only text accumulator for one artifact at a time.
#[derive(Debug, Default)]
pub struct Emitter {
    buf: String,
}

impl Emitter {
    /// Create an empty emitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the fragments with no separator, followed by a single line
    /// terminator. An empty fragment list emits a blank line.
    pub fn emit(&mut self, fragments: &[&str]) {
        for fragment in fragments {
            self.buf.push_str(fragment);
        }
        self.buf.push('\n');
    }

    /// Return the accumulated text and reset the buffer, ready for the
    /// next artifact.
    pub fn drain(&mut self) -> String {
        std::mem::take(&mut self.buf)
    }

    /// Check whether anything has been emitted since the last drain.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}
