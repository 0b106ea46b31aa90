//! Contains the [`Cursor`] that walks a source file for the tokenizer.

use std::sync::Arc;

use getset::CopyGetters;

use crate::base::source_file::{SourceFile, SourceIterator, Span};

/// Forward-only position tracker over a [`SourceFile`] with one character of pushback.
///
/// The cursor counts lines as it goes: consuming a `\n` increments [`Cursor::line`] before the
/// next character is handed out.
#[derive(Debug, Clone, CopyGetters)]
pub struct Cursor<'a> {
    iter: SourceIterator<'a>,
    pushed_back: Option<(usize, char)>,
    /// Get the current line number (starts at 1).
    #[get_copy = "pub"]
    line: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at the start of the given source file.
    #[must_use]
    pub fn new(source_file: &'a Arc<SourceFile>) -> Self {
        Self {
            iter: source_file.iter(),
            pushed_back: None,
            line: 1,
        }
    }

    /// Get the source file the cursor walks over.
    #[must_use]
    pub fn source_file(&self) -> &'a Arc<SourceFile> {
        self.iter.source_file()
    }

    /// Consumes and returns the next character with its byte offset, or [`None`] at the end of
    /// the source.
    pub fn advance(&mut self) -> Option<(usize, char)> {
        let item = self.pushed_back.take().or_else(|| self.iter.next())?;

        if item.1 == '\n' {
            self.line += 1;
        }

        Some(item)
    }

    /// Returns the next character without consuming it.
    pub fn peek(&mut self) -> Option<(usize, char)> {
        self.pushed_back.or_else(|| self.iter.peek())
    }

    /// Returns a consumed character to the cursor so the next [`Cursor::advance`] yields it again.
    ///
    /// Only one character can be pushed back at a time.
    pub fn push_back(&mut self, item: (usize, char)) {
        debug_assert!(
            self.pushed_back.is_none(),
            "cursor pushback slot is already occupied"
        );

        if item.1 == '\n' {
            self.line -= 1;
        }

        self.pushed_back = Some(item);
    }

    /// Byte offset of the next unconsumed character, or the source length at the end.
    pub fn offset(&mut self) -> usize {
        self.peek()
            .map_or_else(|| self.source_file().content().len(), |(index, _)| index)
    }

    /// Creates a span from `start` up to the current offset of the cursor.
    pub fn span_from(&mut self, start: usize) -> Span {
        let end = self.offset();
        Span::new(self.source_file().clone(), start, end)
            .expect("cursor offsets lie on char boundaries")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_and_peek() {
        let source_file = SourceFile::from_content("test.solace", "ab");
        let mut cursor = Cursor::new(&source_file);

        assert_eq!(cursor.peek(), Some((0, 'a')));
        assert_eq!(cursor.peek(), Some((0, 'a')));
        assert_eq!(cursor.advance(), Some((0, 'a')));
        assert_eq!(cursor.offset(), 1);
        assert_eq!(cursor.advance(), Some((1, 'b')));
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.offset(), 2);
    }

    #[test]
    fn test_push_back_is_yielded_first() {
        let source_file = SourceFile::from_content("test.solace", "12)");
        let mut cursor = Cursor::new(&source_file);

        cursor.advance();
        cursor.advance();
        let paren = cursor.advance().unwrap();
        assert_eq!(paren, (2, ')'));

        cursor.push_back(paren);
        assert_eq!(cursor.peek(), Some((2, ')')));
        assert_eq!(cursor.offset(), 2);
        assert_eq!(cursor.advance(), Some((2, ')')));
        assert_eq!(cursor.advance(), None);
    }

    #[test]
    fn test_line_counting() {
        let source_file = SourceFile::from_content("test.solace", "a\nb\n");
        let mut cursor = Cursor::new(&source_file);

        assert_eq!(cursor.line(), 1);
        cursor.advance();
        assert_eq!(cursor.line(), 1);
        let newline = cursor.advance().unwrap();
        assert_eq!(cursor.line(), 2);

        cursor.push_back(newline);
        assert_eq!(cursor.line(), 1);
        cursor.advance();
        assert_eq!(cursor.line(), 2);

        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.line(), 3);
    }

    #[test]
    fn test_span_from() {
        let source_file = SourceFile::from_content("test.solace", "foo bar");
        let mut cursor = Cursor::new(&source_file);

        cursor.advance();
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.span_from(0).str(), "foo");
    }
}
