use std::io::{Read, Write};

use indexmap::IndexMap;
use tracing::debug;

use super::error::PropertiesError;
use super::latin1;
use crate::codec;

/// An insertion-ordered table of string properties.
///
/// Keys are unique; setting or loading a key that already exists
/// replaces its value while keeping its original position. Iteration
/// and [`store`](Properties::store) follow insertion order.
///
/// The table is not internally synchronized. Mutation goes through
/// `&mut self`, and callers wanting shared access across threads wrap
/// the table in their own lock.
///
/// # Examples
///
/// ```
/// use jprops::Properties;
///
/// let mut properties = Properties::new();
/// properties.set("host", "localhost");
/// properties.set("port", "8080");
///
/// assert_eq!(properties.get("host"), Some("localhost"));
/// assert_eq!(properties.len(), 2);
///
/// for (key, value) in properties.iter() {
///     println!("{key} = {value}");
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: IndexMap<String, String>,
}

impl Properties {
    /// Creates an empty table.
    pub fn new() -> Self {
        Properties::default()
    }

    /// Creates a table pre-populated with another table's entries.
    ///
    /// The defaults are copied up front; later changes to either table
    /// never affect the other.
    ///
    /// # Examples
    ///
    /// ```
    /// use jprops::Properties;
    ///
    /// let mut defaults = Properties::new();
    /// defaults.set("color", "blue");
    ///
    /// let mut properties = Properties::with_defaults(&defaults);
    /// properties.set("color", "red");
    ///
    /// assert_eq!(defaults.get("color"), Some("blue"));
    /// assert_eq!(properties.get("color"), Some("red"));
    /// ```
    pub fn with_defaults(defaults: &Properties) -> Self {
        defaults.clone()
    }

    /// Decodes a table from an in-memory ISO-8859-1 buffer.
    ///
    /// # Errors
    ///
    /// Fails on a malformed `\u` escape in the buffer.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PropertiesError> {
        let mut properties = Properties::new();
        properties.load(bytes)?;
        Ok(properties)
    }

    /// Returns the value stored for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Inserts or overwrites a property, returning the replaced value.
    ///
    /// Overwriting keeps the key's original position in the iteration
    /// order.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Removes a property, returning its value. The order of the
    /// remaining entries is preserved.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.shift_remove(key)
    }

    /// Returns true if the table holds `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of properties in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table holds no properties.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates over values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.values().map(String::as_str)
    }

    /// Reads properties text from an ISO-8859-1 stream into the table.
    ///
    /// The stream is read to its end and every byte interpreted as the
    /// Unicode code point of equal value. Decoded entries are inserted
    /// in input order, so a key defined more than once keeps its last
    /// value. Entries already in the table are overwritten when the
    /// stream redefines them and kept otherwise; loading over a table
    /// built from defaults is how defaults-chaining composes.
    ///
    /// # Errors
    ///
    /// Fails when the stream cannot be read or holds a malformed `\u`
    /// escape. The table is not modified on failure.
    pub fn load<R: Read>(&mut self, mut reader: R) -> Result<(), PropertiesError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let text = latin1::decode(&bytes);
        let entries = codec::decode(&text)?;
        debug!("loaded {} entries from {} bytes", entries.len(), bytes.len());
        for entry in entries {
            self.entries.insert(entry.key, entry.value);
        }
        Ok(())
    }

    /// Writes the table as properties text, one `key=value` line per
    /// entry in insertion order, encoded as ISO-8859-1.
    ///
    /// # Errors
    ///
    /// Fails when the stream cannot be written. Whatever was already
    /// written stays in the stream and is the caller's to discard.
    pub fn store<W: Write>(&self, mut writer: W) -> Result<(), PropertiesError> {
        let text = codec::encode(self.iter());
        // escaped text is plain ASCII, whose bytes coincide with its
        // ISO-8859-1 encoding
        writer.write_all(text.as_bytes())?;
        debug!("stored {} entries as {} bytes", self.entries.len(), text.len());
        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut properties = Properties::new();
        properties.extend(iter);
        properties
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Properties {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.entries.insert(key.into(), value.into());
        }
    }
}

impl IntoIterator for Properties {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Properties {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
