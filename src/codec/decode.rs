use super::entry::Entry;
use super::error::FormatError;
use super::escape::unescape;

/// Decodes properties text into its entries, in input order.
///
/// The input is expected to hold characters already transcoded from the
/// file's ISO-8859-1 bytes. Duplicate keys are all emitted, each in the
/// position its defining line appeared; collapsing them is left to the
/// caller's map insertion.
///
/// # Errors
///
/// Returns an error only for a malformed `\u` escape; see
/// [`FormatError`].
///
/// # Examples
///
/// ```
/// use jprops::codec::{decode, Entry};
///
/// let entries = decode("a=1\nb : 2\nc 3\n").unwrap();
/// assert_eq!(entries, vec![
///     Entry::new("a", "1"),
///     Entry::new("b", "2"),
///     Entry::new("c", "3"),
/// ]);
/// ```
pub fn decode(input: &str) -> Result<Vec<Entry>, FormatError> {
    let mut entries = Vec::new();
    for line in logical_lines(input) {
        if let Some(entry) = parse_line(&line)? {
            entries.push(entry);
        }
    }
    Ok(entries)
}

/// One property-definition or comment unit, after joining any
/// backslash-continued physical lines. `number` is the 1-based physical
/// line the unit started on.
struct LogicalLine {
    chars: Vec<char>,
    number: usize,
}

/// Space, tab, and form feed pad line starts and separate keys from
/// values. Line terminators are not blanks; they end physical lines.
fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\u{000C}'
}

/// Splits the input on `\n`, `\r`, or `\r\n`, none of which reach the
/// line content. The last line may end at end of input instead.
fn physical_lines(input: &str) -> Vec<(Vec<char>, usize)> {
    let chars: Vec<char> = input.chars().collect();
    let mut lines = Vec::new();
    let mut current = Vec::new();
    let mut number = 1;
    let mut pos = 0;
    while pos < chars.len() {
        match chars[pos] {
            '\n' => {
                lines.push((std::mem::take(&mut current), number));
                number += 1;
                pos += 1;
            }
            '\r' => {
                lines.push((std::mem::take(&mut current), number));
                number += 1;
                pos += 1;
                if pos < chars.len() && chars[pos] == '\n' {
                    pos += 1;
                }
            }
            c => {
                current.push(c);
                pos += 1;
            }
        }
    }
    if !current.is_empty() {
        lines.push((current, number));
    }
    lines
}

/// Joins continued physical lines into logical lines. A terminator is a
/// continuation marker when an odd number of backslashes immediately
/// precede it; the marker backslash is dropped and the next line is
/// appended minus its leading blanks. A marker at end of input is
/// dropped with nothing to append.
fn logical_lines(input: &str) -> Vec<LogicalLine> {
    let mut lines = Vec::new();
    let mut physical = physical_lines(input).into_iter();
    while let Some((mut chars, number)) = physical.next() {
        while ends_in_continuation(&chars) {
            chars.pop();
            match physical.next() {
                Some((next, _)) => {
                    let skip = next.iter().take_while(|c| is_blank(**c)).count();
                    chars.extend_from_slice(&next[skip..]);
                }
                None => break,
            }
        }
        lines.push(LogicalLine { chars, number });
    }
    lines
}

/// An even backslash count means they all pair up into escaped
/// backslashes and the terminator is real.
fn ends_in_continuation(chars: &[char]) -> bool {
    let trailing = chars.iter().rev().take_while(|&&c| c == '\\').count();
    trailing % 2 == 1
}

/// Classifies one logical line and extracts its entry, if any.
///
/// The key runs to the first unescaped `=`, `:`, or blank; a backslash
/// shields the following character from the delimiter scan. After the
/// key, blanks and at most one `=` or `:` separator are skipped and the
/// rest of the line is the raw value.
fn parse_line(line: &LogicalLine) -> Result<Option<Entry>, FormatError> {
    let chars = &line.chars;
    let mut pos = 0;
    while pos < chars.len() && is_blank(chars[pos]) {
        pos += 1;
    }
    if pos == chars.len() {
        return Ok(None);
    }
    if chars[pos] == '#' || chars[pos] == '!' {
        return Ok(None);
    }

    let key_start = pos;
    while pos < chars.len() {
        let c = chars[pos];
        if c == '\\' {
            // skip the escaped character; a trailing backslash has
            // nothing to consume
            pos += if pos + 1 < chars.len() { 2 } else { 1 };
        } else if c == '=' || c == ':' || is_blank(c) {
            break;
        } else {
            pos += 1;
        }
    }
    let raw_key = &chars[key_start..pos];

    while pos < chars.len() && is_blank(chars[pos]) {
        pos += 1;
    }
    if pos < chars.len() && (chars[pos] == '=' || chars[pos] == ':') {
        pos += 1;
        while pos < chars.len() && is_blank(chars[pos]) {
            pos += 1;
        }
    }

    let key = unescape(raw_key, line.number, key_start)?;
    let value = unescape(&chars[pos..], line.number, pos)?;
    Ok(Some(Entry { key, value }))
}
