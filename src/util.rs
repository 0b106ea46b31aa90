//! Utility functions for the `Solace` lexer.

use std::borrow::Cow;

/// Escapes `"`, `\`, and line breaks in a string.
#[must_use]
pub fn escape_str(s: &str) -> Cow<'_, str> {
    if s.contains(['"', '\\', '\n', '\r']) {
        let mut escaped = String::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '"' => escaped.push_str("\\\""),
                '\\' => escaped.push_str("\\\\"),
                '\n' => escaped.push_str("\\n"),
                '\r' => escaped.push_str("\\r"),
                _ => escaped.push(c),
            }
        }
        Cow::Owned(escaped)
    } else {
        Cow::Borrowed(s)
    }
}

/// Returns at most the first `max_chars` characters of a string.
#[must_use]
pub fn preview(s: &str, max_chars: usize) -> &str {
    s.char_indices()
        .nth(max_chars)
        .map_or(s, |(index, _)| &s[..index])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_str() {
        assert_eq!(escape_str("Hello, world!"), "Hello, world!");
        assert_eq!(escape_str(r#"Hello, "world"!"#), r#"Hello, \"world\"!"#);
        assert_eq!(escape_str(r"Hello, \world\!"), r"Hello, \\world\\!");
        assert_eq!(escape_str("two\nlines"), r"two\nlines");
    }

    #[test]
    fn test_preview() {
        assert_eq!(preview("unterminated string", 15), "unterminated st");
        assert_eq!(preview("short", 15), "short");
        assert_eq!(preview("", 15), "");
        assert_eq!(preview("ünïcödé", 3), "ünï");
        assert_eq!(preview("anything", 0), "");
    }
}
