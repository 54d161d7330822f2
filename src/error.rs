//! Fatal parse errors.
//!
//! Distinct from [`crate::log::ParseLog`]: everything here aborts the
//! parse in progress, mirroring `Malloc`/`ReadFd`/`Parser`
//! codes. An allocation failure (`Malloc`) has no Rust analogue worth
//! modeling: the global allocator already aborts the process on OOM, so
//! there is no fallible path that would ever construct such a variant
//! (see DESIGN.md).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompsError {
    #[error("failed to read input")]
    Io(#[from] std::io::Error),
    #[error("XML tokenization error")]
    Xml(#[from] quick_xml::Error),
    #[error("element or attribute name was not valid UTF-8")]
    Utf8(#[from] std::str::Utf8Error),
}
