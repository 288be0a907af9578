use super::escape::escape;

/// Encodes key/value pairs as properties text, one `key=value` line per
/// pair, each terminated by a single `\n` (the last included).
///
/// Keys and values pass through [`escape`]: non-ASCII code points and
/// CR/LF become escapes, while `=`, `:`, `#`, `!`, and backslashes are
/// written untouched. The format never escapes delimiters on output, so
/// a key holding a literal delimiter will not read back intact; this
/// read/write asymmetry is a long-standing quirk of the format itself.
///
/// Accepts any iterator of string pairs, such as
/// [`Properties::iter`](crate::Properties::iter) or an array of tuples.
///
/// # Examples
///
/// ```
/// use jprops::codec::encode;
///
/// let text = encode([("host", "localhost"), ("motd", "hello\nworld")]);
/// assert_eq!(text, "host=localhost\nmotd=hello\\nworld\n");
/// ```
pub fn encode<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut out = String::new();
    for (key, value) in entries {
        out.push_str(&escape(key));
        out.push('=');
        out.push_str(&escape(value));
        out.push('\n');
    }
    out
}
