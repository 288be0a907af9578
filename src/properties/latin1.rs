//! ISO-8859-1 transcoding.

/// Decodes ISO-8859-1 bytes, each byte standing for the Unicode code
/// point of equal value. Total: every byte sequence is valid.
pub(crate) fn decode(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}
