use thiserror::Error;

use crate::codec::FormatError;

/// Errors from loading or storing a properties table.
///
/// Either kind aborts the whole call. A failed store may have written
/// part of the output already; discarding it is the caller's
/// responsibility.
#[derive(Debug, Error)]
pub enum PropertiesError {
    /// The stream held a malformed escape sequence.
    #[error("format error: {0}")]
    Format(#[from] FormatError),

    /// The underlying stream could not be read or written.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
