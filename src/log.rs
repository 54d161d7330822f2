//! Diagnostics log: an append-only, ordered record of non-fatal parse
//! findings, keyed by source position.
//!
//! This is distinct from [`crate::error::CompsError`]: entries recorded
//! here never abort a parse. They are returned to the caller alongside
//! the document once parsing completes.

use std::fmt;

/// Severity of a single diagnostic entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// Stable diagnostic codes covering the non-fatal findings a parse can
/// report. Allocation, I/O, and tokenizer failures are not represented
/// here because those are fatal conditions carried by
/// [`crate::error::CompsError`] instead (see DESIGN.md for the rationale).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Code {
    /// Non-whitespace character data appeared outside any element expecting text.
    TextBetween,
    /// An element that required text content had none.
    NoContent,
    /// A required child element or property was missing at end-of-parent.
    ElemRequired,
    /// An element or property appeared more than once where uniqueness was expected.
    ElemAlreadySet,
    /// An unrecognized element tag was encountered.
    ElemUnknown,
    /// An element appeared under a disallowed parent.
    NoParent,
    /// A list-container element closed with no valid children.
    ListEmpty,
    /// A `packagereq` `type` attribute was unrecognized.
    PackageUnknown,
    /// A `<default>` literal was neither `"true"` nor `"false"`.
    DefaultParam,
    /// A `<uservisible>` literal was neither `"true"` nor `"false"`.
    UserVisibleParam,
    /// A `<groupid>` appeared under `<grouplist>` without its container being open.
    GroupListNotSet,
    /// A `<groupid>` appeared under `<optionlist>` without its container being open.
    OptionListNotSet,
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Code::TextBetween => "text data between elements",
            Code::NoContent => "element requires text content",
            Code::ElemRequired => "required element or property missing",
            Code::ElemAlreadySet => "element or property already set",
            Code::ElemUnknown => "unrecognized element",
            Code::NoParent => "element appeared under disallowed parent",
            Code::ListEmpty => "list container has no children",
            Code::PackageUnknown => "unrecognized packagereq type",
            Code::DefaultParam => "invalid boolean literal for default",
            Code::UserVisibleParam => "invalid boolean literal for uservisible",
            Code::GroupListNotSet => "groupid appeared without an open grouplist",
            Code::OptionListNotSet => "groupid appeared without an open optionlist",
        };
        f.write_str(s)
    }
}

/// A single diagnostics entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub severity: Severity,
    pub subject: Option<String>,
    pub code: Code,
    pub line: u64,
    pub column: u64,
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{severity}: {} ({}:{})", self.code, self.line, self.column)?;
        if let Some(subject) = &self.subject {
            write!(f, " [{subject}]")?;
        }
        Ok(())
    }
}

/// Append-only ordered sequence of diagnostics produced during a parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseLog {
    records: Vec<LogRecord>,
}

impl ParseLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(
        &mut self,
        severity: Severity,
        subject: Option<&str>,
        code: Code,
        line: u64,
        column: u64,
    ) {
        let record = LogRecord {
            severity,
            subject: subject.map(str::to_owned),
            code,
            line,
            column,
        };
        match record.severity {
            Severity::Warning => tracing::warn!(code = ?record.code, line, column, subject = record.subject.as_deref(), "comps diagnostic"),
            Severity::Error => tracing::warn!(code = ?record.code, line, column, subject = record.subject.as_deref(), "comps diagnostic (error)"),
        }
        self.records.push(record);
    }

    pub fn error(&mut self, subject: Option<&str>, code: Code, line: u64, column: u64) {
        self.emit(Severity::Error, subject, code, line, column);
    }

    pub fn warning(&mut self, subject: Option<&str>, code: Code, line: u64, column: u64) {
        self.emit(Severity::Warning, subject, code, line, column);
    }

    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
