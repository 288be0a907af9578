/// One decoded property: a key and its value.
///
/// Entries come out of [`decode`](super::decode()) in the order their
/// defining lines appear in the input. Duplicate keys each get their own
/// entry; resolving them (last one wins) is the owning table's job.
///
/// # Examples
///
/// ```
/// use jprops::codec::Entry;
///
/// let entry = Entry::new("host", "localhost");
/// assert_eq!(entry.key, "host");
/// assert_eq!(entry.value, "localhost");
///
/// let entry: Entry = ("host", "localhost").into();
/// assert_eq!(entry, Entry::new("host", "localhost"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// The property key, after escape resolution.
    pub key: String,
    /// The property value, after escape resolution. Empty when the
    /// defining line had no value.
    pub value: String,
}

impl Entry {
    /// Creates an entry from a key and a value.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Entry {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl From<(String, String)> for Entry {
    fn from((key, value): (String, String)) -> Self {
        Entry { key, value }
    }
}

impl From<(&str, &str)> for Entry {
    fn from((key, value): (&str, &str)) -> Self {
        Entry::new(key, value)
    }
}
