//! A library for parsing the comps XML dialect used by RPM-based
//! distributions to describe installable package groups, categories,
//! environments, langpacks, and dependency overrides.
//!
//! The entry point is [`CompsParser`]: feed it a byte slice, a reader,
//! or a file path, and it returns both a [`Document`] and a
//! [`ParseLog`] of non-fatal findings. Malformed or merely unusual
//! input never aborts the parse on its own; only I/O and tokenization
//! failures surface as [`CompsError`].

mod classify;
mod context;
mod dispatcher;
mod dtd;
mod error;
mod location;
mod log;
mod model;

mod driver;

pub use classify::{classify, classify_package, ElementKind, PackageKind};
pub use dtd::{validate_against_dtd, DtdError, DtdValidator};
pub use driver::{CompsParser, ParseOutcome};
pub use error::CompsError;
pub use log::{Code, LogRecord, ParseLog, Severity};
pub use model::{
    BlacklistEntry, Category, CategoryProperties, Document, Environment, EnvProperties, Group,
    GroupId, GroupProperties, LangpackMatch, PackageRef, ScalarProp, WhiteoutEntry,
};
