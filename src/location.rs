//! Line/column tracking over the bytes fed to the tokenizer.
//!
//! `quick_xml::Reader` reports a byte offset (`buffer_position`) but not
//! line/column, unlike tokenizers (e.g. expat) that expose a current
//! line/column pair directly. This tracker is the small adapter that
//! fills the gap: it watches the same bytes the reader consumes and
//! turns a byte offset into a 1-based line/column pair.

#[derive(Debug, Clone, Default)]
pub struct LocationTracker {
    consumed: usize,
    line: u64,
    column: u64,
    newline_offsets: Vec<usize>,
}

impl LocationTracker {
    pub fn new() -> Self {
        Self {
            consumed: 0,
            line: 1,
            column: 1,
            newline_offsets: Vec::new(),
        }
    }

    /// Record a chunk of bytes as having been consumed by the tokenizer.
    pub fn feed(&mut self, bytes: &[u8]) {
        for (i, b) in bytes.iter().enumerate() {
            if *b == b'\n' {
                self.newline_offsets.push(self.consumed + i);
            }
        }
        self.consumed += bytes.len();
    }

    /// Line/column (both 1-based) for an absolute byte offset already
    /// fed via [`Self::feed`].
    pub fn position_at(&self, offset: usize) -> (u64, u64) {
        let line_index = self
            .newline_offsets
            .partition_point(|&nl_offset| nl_offset < offset);
        let line = (line_index as u64) + 1;
        let column_start = if line_index == 0 {
            0
        } else {
            self.newline_offsets[line_index - 1] + 1
        };
        let column = (offset - column_start) as u64 + 1;
        (line, column)
    }

    /// Line/column of the most recently fed byte.
    pub fn current_position(&self) -> (u64, u64) {
        self.position_at(self.consumed.saturating_sub(1).max(0))
    }

    pub fn reset(&mut self) {
        self.consumed = 0;
        self.line = 1;
        self.column = 1;
        self.newline_offsets.clear();
    }
}
