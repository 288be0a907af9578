//! The properties table and its stream entry points.
//!
//! [`Properties`] owns an insertion-ordered string map and knows how to
//! fill itself from a `.properties` stream and write itself back out,
//! delegating the text format itself to [`codec`](crate::codec).
//! Streams are read and written as ISO-8859-1, every byte mapping to
//! the Unicode code point of equal value.
//!
//! # Examples
//!
//! ## Loading from a stream
//!
//! ```
//! use jprops::Properties;
//!
//! let text = b"# server settings\nhost=localhost\nport: 8080\n";
//!
//! let mut properties = Properties::new();
//! properties.load(&text[..]).unwrap();
//!
//! assert_eq!(properties.get("host"), Some("localhost"));
//! assert_eq!(properties.get("port"), Some("8080"));
//! ```
//!
//! ## Storing to a stream
//!
//! ```
//! use jprops::Properties;
//!
//! let mut properties = Properties::new();
//! properties.set("host", "localhost");
//! properties.set("motd", "café");
//!
//! let mut out = Vec::new();
//! properties.store(&mut out).unwrap();
//! assert_eq!(out, b"host=localhost\nmotd=caf\\u00e9\n".to_vec());
//! ```

mod error;
mod latin1;
mod table;

pub use error::PropertiesError;
pub use table::Properties;

#[cfg(test)]
mod tests;
