use thiserror::Error;

/// Errors raised while decoding properties text.
///
/// Only `\u` escapes can be malformed; blank lines, comments, missing
/// delimiters, and keys without values are all legal input. Positions
/// are 1-based: `line` is the physical line the logical line started
/// on, `column` counts characters of the logical line after any
/// continuation joins.
#[derive(Debug, Error)]
pub enum FormatError {
    /// A `\u` escape was not followed by exactly four hex digits.
    #[error("invalid unicode escape at line {line}, column {column}: expected four hex digits")]
    InvalidUnicodeEscape { line: usize, column: usize },

    /// A UTF-16 surrogate escape had no matching partner, so no code
    /// point can be formed from it.
    #[error("unpaired surrogate escape at line {line}, column {column}")]
    UnpairedSurrogate { line: usize, column: usize },
}
