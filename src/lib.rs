//! jprops - a Java `.properties` reader and writer
//!
//! This library decodes and encodes the line-based `.properties` text
//! format: an ordered mapping of string keys to string values with
//! comments, line continuations, several key/value delimiters, and
//! backslash escape sequences including `\uHHHH` code-point escapes.
//! Streams are read and written in ISO-8859-1, the encoding the format
//! has always used on disk.
//!
//! # Modules
//!
//! - [`codec`] - Text format encoding/decoding
//! - [`properties`] - The insertion-ordered table with stream entry points
//!
//! # Examples
//!
//! ```
//! use jprops::Properties;
//!
//! let mut properties = Properties::new();
//! properties.load(&b"host=localhost\nport: 8080\n"[..]).unwrap();
//! assert_eq!(properties.get("port"), Some("8080"));
//!
//! properties.set("motd", "café");
//! let mut out = Vec::new();
//! properties.store(&mut out).unwrap();
//! ```

pub mod codec;
pub mod properties;

pub use codec::{decode, encode, escape, Entry, FormatError};
pub use properties::{Properties, PropertiesError};
