//! Java `.properties` text format encoding and decoding.
//!
//! A properties file is a sequence of lines holding string key/value
//! pairs, in the format used by `java.util.Properties` since the 1990s.
//! Files are read and written in the single-byte ISO-8859-1 encoding;
//! everything outside that range travels as `\uHHHH` escapes.
//!
//! # Line Forms
//!
//! After joining backslash-continued lines, every logical line is one of:
//!
//! | Form | Example | Result |
//! |------|---------|--------|
//! | Property | `name=value` | one [`Entry`] |
//! | Comment | `# text` or `! text` | skipped |
//! | Blank | whitespace only | skipped |
//!
//! A key ends at the first unescaped `=`, `:`, space, tab, or form feed.
//! The separator itself is optional: `key value`, `key=value`, and
//! `key: value` all parse, and a key standing alone has the empty string
//! as its value.
//!
//! # Escape Sequences
//!
//! | Escape | Meaning |
//! |--------|---------|
//! | `\\` | backslash |
//! | `\t` `\n` `\r` `\f` | tab, line feed, carriage return, form feed |
//! | `\uHHHH` | the code point `U+HHHH` (four hex digits) |
//! | `\=` `\:` `\ ` etc. | the character itself, shielded from delimiter scanning |
//!
//! # Examples
//!
//! ## Decoding properties text
//!
//! ```
//! use jprops::codec::{decode, Entry};
//!
//! let entries = decode("greeting=hello\n# a comment\nname: world\n").unwrap();
//! assert_eq!(entries, vec![
//!     Entry::new("greeting", "hello"),
//!     Entry::new("name", "world"),
//! ]);
//! ```
//!
//! ## Encoding properties text
//!
//! ```
//! use jprops::codec::encode;
//!
//! let text = encode([("greeting", "hello"), ("accent", "café")]);
//! assert_eq!(text, "greeting=hello\naccent=caf\\u00e9\n");
//! ```
//!
//! # Error Handling
//!
//! Only `\u` escapes can fail to decode:
//!
//! - [`FormatError::InvalidUnicodeEscape`] - fewer than four hex digits
//! - [`FormatError::UnpairedSurrogate`] - a UTF-16 surrogate escape with
//!   no matching partner
//!
//! Every other line shape is legal, so decoding never fails on blank
//! lines, comments, or keys without values.

mod decode;
mod encode;
mod entry;
mod error;
mod escape;

pub use decode::decode;
pub use encode::encode;
pub use entry::Entry;
pub use error::FormatError;
pub use escape::escape;
