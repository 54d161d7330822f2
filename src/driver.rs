//! The parser driver: wires `quick_xml`'s tokenizer to the dispatcher
//! and tracks source position for diagnostics.

use std::cell::RefCell;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::rc::Rc;

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::context::ParseContext;
use crate::dispatcher::{on_end, on_start, on_text};
use crate::error::CompsError;
use crate::location::LocationTracker;
use crate::log::ParseLog;
use crate::model::Document;

/// `BufReader` is given a 1024-byte capacity so the underlying `Read`
/// is driven in fixed-size pulls, while `quick_xml` owns the actual
/// incremental tokenization.
const READ_CHUNK_SIZE: usize = 1024;

/// Outcome of a completed parse: clean, warnings-only, or fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOutcome {
    Clean,
    Warnings,
    Fatal,
}

impl ParseOutcome {
    /// Integer convention used by callers expecting a C-style tri-state
    /// exit code: `0` clean, `1` warnings, `-1` fatal.
    pub fn as_code(self) -> i8 {
        match self {
            ParseOutcome::Clean => 0,
            ParseOutcome::Warnings => 1,
            ParseOutcome::Fatal => -1,
        }
    }
}

/// `Read` wrapper that mirrors every byte pulled through it into a
/// shared [`LocationTracker`]. `quick_xml` exposes a byte offset
/// (`Reader::buffer_position`) but nothing upstream of that offset, so
/// this is what lets the driver turn that offset into line/column.
///
/// Feeding ahead of what `quick_xml` has logically consumed (due to
/// `BufReader`'s own read-ahead) is harmless: [`LocationTracker::position_at`]
/// is a pure lookup over whatever has been fed so far, not a stateful
/// cursor, so querying an offset that's already been fed is always
/// correct regardless of how far ahead feeding has gone.
struct CountingReader<R> {
    inner: R,
    tracker: Rc<RefCell<LocationTracker>>,
}

impl<R: Read> Read for CountingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.tracker.borrow_mut().feed(&buf[..n]);
        Ok(n)
    }
}

/// A streaming parser for the comps XML dialect.
///
/// `CompsParser` owns the event loop: it drives a `quick_xml::Reader`
/// chunk by chunk, classifies each element, and threads the resulting
/// events through the dispatcher into a [`Document`]. Non-fatal
/// findings accumulate in a [`ParseLog`]; anything that aborts the
/// underlying tokenizer surfaces as a [`CompsError`].
pub struct CompsParser {
    ctx: ParseContext,
}

impl CompsParser {
    pub fn new() -> Self {
        Self {
            ctx: ParseContext::new("UTF-8"),
        }
    }

    /// Construct a parser that preserves a known read-from-Category,
    /// write-to-Group `langonly` quirk instead of the corrected
    /// Group-consistent behavior.
    pub fn with_lang_only_compat(mut self) -> Self {
        self.ctx.lang_only_compat = true;
        self
    }

    /// Discard any parsed state and any accumulated diagnostics, ready
    /// for a fresh parse. Does not affect `lang_only_compat`.
    pub fn reinit(&mut self) {
        let compat = self.ctx.lang_only_compat;
        self.ctx.reinit();
        self.ctx.lang_only_compat = compat;
    }

    pub fn document(&self) -> &Document {
        &self.ctx.document
    }

    pub fn log(&self) -> &ParseLog {
        &self.ctx.log
    }

    /// Consume the parser, returning the parsed document and its
    /// diagnostics log together.
    pub fn into_parts(self) -> (Document, ParseLog) {
        (self.ctx.document, self.ctx.log)
    }

    pub fn parse_file(&mut self, path: impl AsRef<Path>) -> Result<ParseOutcome, CompsError> {
        let file = File::open(path)?;
        self.parse_reader(file)
    }

    pub fn parse_bytes(&mut self, bytes: &[u8]) -> Result<ParseOutcome, CompsError> {
        self.parse_reader(bytes)
    }

    #[tracing::instrument(skip(self, input))]
    pub fn parse_reader<R: Read>(&mut self, input: R) -> Result<ParseOutcome, CompsError> {
        let tracker = Rc::new(RefCell::new(LocationTracker::new()));
        let counting = CountingReader {
            inner: input,
            tracker: tracker.clone(),
        };
        let buffered = BufReader::with_capacity(READ_CHUNK_SIZE, counting);
        let mut reader = Reader::from_reader(buffered);
        // Deliberately not `trim_text(true)`: spec.md's `on_text` discards
        // only chunks that are *entirely* whitespace and otherwise buffers
        // text verbatim (matching `__comps_is_whitespace_only` in the
        // ground-truth C parser). Trimming here would silently strip
        // deliberate leading/trailing whitespace from element content.
        reader.expand_empty_elements(true);

        let mut buf = Vec::new();

        loop {
            let event = reader.read_event(&mut buf)?;
            let (line, column) = tracker.borrow().position_at(reader.buffer_position());

            match event {
                Event::Start(e) => {
                    let tag = std::str::from_utf8(e.name())?.to_owned();
                    let mut attrs = indexmap::IndexMap::new();
                    for attr in e.attributes() {
                        let attr = attr?;
                        let key = std::str::from_utf8(attr.key)?.to_owned();
                        let value = attr.unescape_and_decode_value(&reader)?;
                        attrs.insert(key, value);
                    }
                    on_start(&mut self.ctx, &tag, attrs, line, column);
                }
                Event::Text(e) => {
                    let text = e.unescape_and_decode(&reader)?;
                    on_text(&mut self.ctx, &text);
                }
                Event::CData(e) => {
                    let text = e.unescape_and_decode(&reader)?;
                    on_text(&mut self.ctx, &text);
                }
                Event::End(e) => {
                    let tag = std::str::from_utf8(e.name())?.to_owned();
                    on_end(&mut self.ctx, &tag, line, column);
                }
                Event::Eof => break,
                _ => {}
            }

            buf.clear();
        }

        // `fatal` is a hook for a future structural-invariant violation;
        // nothing sets it today since I/O and tokenizer failures already
        // abort the parse via `?` and surface as `CompsError`.
        if self.ctx.fatal {
            return Ok(ParseOutcome::Fatal);
        }
        if self.ctx.log.is_empty() {
            Ok(ParseOutcome::Clean)
        } else {
            Ok(ParseOutcome::Warnings)
        }
    }
}

impl Default for CompsParser {
    fn default() -> Self {
        Self::new()
    }
}
