//! DTD validation seam.
//!
//! This crate's own parser is schema-free: it accepts any well-formed
//! XML and relies on the dispatcher's grammar rules to flag structural
//! problems. Validating a document against the formal comps DTD is
//! treated as an external collaborator: callers who need it supply
//! their own [`DtdValidator`] rather than this crate bundling a
//! bespoke DTD engine.

use thiserror::Error;

/// A DTD (or schema) validation failure, independent of [`crate::error::CompsError`]
/// since it reports on document *shape* after a successful parse, not on
/// tokenization.
#[derive(Error, Debug)]
pub enum DtdError {
    #[error("document failed DTD validation: {0}")]
    Invalid(String),
    #[error("failed to read DTD resource")]
    Io(#[from] std::io::Error),
}

/// Implemented by a caller-supplied DTD/schema backend. This crate does
/// not bundle one; `libxml2`-backed validation or a hand-rolled
/// structural checker are both reasonable implementations.
pub trait DtdValidator {
    fn validate(&self, document: &crate::model::Document) -> Result<(), DtdError>;
}

/// Validate `document` against `validator`. A thin passthrough so
/// callers can write `validate_against_dtd(&doc, &my_validator)?` rather
/// than reaching into the trait directly.
pub fn validate_against_dtd(
    document: &crate::model::Document,
    validator: &dyn DtdValidator,
) -> Result<(), DtdError> {
    validator.validate(document)
}
