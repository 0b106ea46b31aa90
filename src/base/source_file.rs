//! Named source units and the byte ranges that point into them.

use std::{
    cmp::Ordering,
    fmt::Debug,
    hash::{Hash, Hasher},
    iter::Peekable,
    ops::Range,
    path::Path,
    str::CharIndices,
    sync::Arc,
};

use getset::{CopyGetters, Getters};

use super::{file_provider::FileProvider, Error};

/// A named unit of source text together with the byte ranges of its lines.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Getters)]
pub struct SourceFile {
    /// Get the identifier of the source file, used as its name in diagnostics.
    #[get = "pub"]
    identifier: String,
    /// Get the source text.
    #[get = "pub"]
    content: String,
    lines: Vec<Range<usize>>,
}

impl Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("identifier", &self.identifier)
            .field("bytes", &self.content.len())
            .field("lines", &self.lines.len())
            .finish()
    }
}

impl SourceFile {
    /// Create a source file from in-memory source text.
    #[must_use]
    pub fn from_content(identifier: impl Into<String>, content: impl Into<String>) -> Arc<Self> {
        let content = content.into();
        let lines = line_ranges(&content);

        Arc::new(Self {
            identifier: identifier.into(),
            content,
            lines,
        })
    }

    /// Read the source file at `path` through the given provider.
    ///
    /// # Errors
    /// - [`Error::SourceUnavailable`]: the file could not be read or is not valid UTF-8.
    pub fn load(
        path: &Path,
        identifier: String,
        provider: &impl FileProvider,
    ) -> Result<Arc<Self>, Error> {
        let content = provider.read_str(path)?;
        Ok(Self::from_content(identifier, content.into_owned()))
    }

    /// Get the text of a line (starts at 1), including its `\n`.
    #[must_use]
    pub fn get_line(&self, number: usize) -> Option<&str> {
        let range = self.lines.get(number.checked_sub(1)?)?;
        Some(&self.content[range.clone()])
    }

    /// Get a peekable iterator over the characters of the source file.
    #[must_use]
    pub fn iter<'a>(self: &'a Arc<Self>) -> SourceIterator<'a> {
        SourceIterator {
            source_file: self,
            chars: self.content.char_indices().peekable(),
        }
    }

    /// Get the [`Location`] of a byte index.
    ///
    /// The index one past the last byte is located at the end of the last line.
    #[must_use]
    pub fn get_location(&self, byte_index: usize) -> Option<Location> {
        if !self.content.is_char_boundary(byte_index) {
            return None;
        }

        let line = self
            .lines
            .partition_point(|range| range.end <= byte_index)
            .min(self.lines.len() - 1);
        let column = self.content[self.lines[line].start..byte_index]
            .chars()
            .count()
            + 1;

        Some(Location {
            line: line + 1,
            column,
        })
    }

    /// Whether both files carry the same identifier and text.
    fn same_source(&self, other: &Self) -> bool {
        self.identifier == other.identifier && self.content == other.content
    }
}

/// A byte range within a [`SourceFile`].
///
/// Spans compare by the identifier and text of their source file and by their byte range, so
/// spans taken from two separate loads of the same source are equal.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Getters, CopyGetters)]
pub struct Span {
    /// Get the start byte index of the span.
    #[get_copy = "pub"]
    start: usize,

    /// Get the end byte index of the span (exclusive).
    #[get_copy = "pub"]
    end: usize,

    /// Get the source file that the span is located in.
    #[get = "pub"]
    source_file: Arc<SourceFile>,
}

impl Debug for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}[{}..{}] {:?}",
            self.source_file.identifier,
            self.start,
            self.end,
            self.str()
        )
    }
}

impl PartialEq for Span {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start
            && self.end == other.end
            && (Arc::ptr_eq(&self.source_file, &other.source_file)
                || self.source_file.same_source(&other.source_file))
    }
}

impl Eq for Span {}

impl PartialOrd for Span {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Span {
    fn cmp(&self, other: &Self) -> Ordering {
        self.source_file
            .identifier
            .cmp(&other.source_file.identifier)
            .then(self.start.cmp(&other.start))
            .then(self.end.cmp(&other.end))
            .then_with(|| {
                if Arc::ptr_eq(&self.source_file, &other.source_file) {
                    Ordering::Equal
                } else {
                    self.source_file.content.cmp(&other.source_file.content)
                }
            })
    }
}

impl Hash for Span {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source_file.identifier.hash(state);
        self.start.hash(state);
        self.end.hash(state);
    }
}

impl Span {
    /// Create a span over `start..end` of the source file.
    ///
    /// Returns [`None`] if the range is reversed, out of bounds or splits a character.
    #[must_use]
    pub fn new(source_file: Arc<SourceFile>, start: usize, end: usize) -> Option<Self> {
        let content = source_file.content();
        let valid = start <= end
            && end <= content.len()
            && content.is_char_boundary(start)
            && content.is_char_boundary(end);

        valid.then_some(Self {
            start,
            end,
            source_file,
        })
    }

    /// Get the source text covered by the span.
    #[must_use]
    pub fn str(&self) -> &str {
        &self.source_file.content[self.start..self.end]
    }

    /// Get the [`Location`] the span starts at.
    #[must_use]
    pub fn start_location(&self) -> Location {
        self.source_file
            .get_location(self.start)
            .expect("span start lies on a char boundary of its source file")
    }
}

/// Line and column of a position in a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Location {
    /// Line number of the location (starts at 1).
    pub line: usize,

    /// Column number of the location, counted in characters (starts at 1).
    pub column: usize,
}

/// Peekable iterator over the `(byte_offset, char)` pairs of a source file.
#[derive(Debug, Clone, CopyGetters)]
pub struct SourceIterator<'a> {
    /// Get the source file being iterated over.
    #[get_copy = "pub"]
    source_file: &'a Arc<SourceFile>,
    chars: Peekable<CharIndices<'a>>,
}

impl SourceIterator<'_> {
    /// Look at the next character without consuming it.
    pub fn peek(&mut self) -> Option<(usize, char)> {
        self.chars.peek().copied()
    }
}

impl Iterator for SourceIterator<'_> {
    type Item = (usize, char);

    fn next(&mut self) -> Option<Self::Item> {
        self.chars.next()
    }
}

/// Split `text` into line ranges. Only `\n` ends a line and stays part of the line it ends.
fn line_ranges(text: &str) -> Vec<Range<usize>> {
    let mut start = 0;
    let mut lines = text
        .match_indices('\n')
        .map(|(newline, _)| {
            let line = start..newline + 1;
            start = newline + 1;
            line
        })
        .collect::<Vec<_>>();
    lines.push(start..text.len());
    lines
}
