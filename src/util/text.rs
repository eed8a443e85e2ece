use std::borrow::Cow;

/// Ellipsis string appended to truncated text
const ELLIPSIS: &str = "...";

/// Truncates a string to at most `max_chars` characters, appending "..." when
/// text was cut off.
///
/// Counts Unicode scalar values, not bytes, so multi-byte characters are never
/// split mid-codepoint. A string of exactly `max_chars` characters passes
/// through untouched; the ellipsis appears only when at least one character
/// was dropped, so a truncated result is always `max_chars` characters plus
/// the 3-character suffix.
///
/// # Returns
///
/// - `Cow::Borrowed(s)` when the string already fits (no allocation)
/// - `Cow::Owned` with the first `max_chars` characters and "..." appended
///
/// # Examples
///
/// ```
/// use newswire::util::truncate_chars;
///
/// assert_eq!(truncate_chars("Short", 10), "Short");
/// assert_eq!(truncate_chars("Hello World", 5), "Hello...");
/// assert_eq!(truncate_chars("exact", 5), "exact");
/// ```
pub fn truncate_chars(s: &str, max_chars: usize) -> Cow<'_, str> {
    // nth(max_chars) is the first character past the limit; None means the
    // string has at most max_chars characters and needs no work.
    match s.char_indices().nth(max_chars) {
        None => Cow::Borrowed(s),
        Some((byte_end, _)) => Cow::Owned(format!("{}{}", &s[..byte_end], ELLIPSIS)),
    }
}
