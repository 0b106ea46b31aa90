//! Runtime options of a tokenization pass.

/// Options controlling a single tokenization pass.
///
/// ```
/// use solace::lexical::LexerConfig;
///
/// let config = LexerConfig::default().with_end_of_line_tokens(true);
/// assert!(config.emit_end_of_line());
/// assert_eq!(config.preview_length(), 15);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LexerConfig {
    /// Emit an end-of-line token for every newline instead of only counting lines.
    ///
    /// Default: `false`
    emit_end_of_line: bool,

    /// Maximum number of characters of a partial string literal quoted in diagnostics.
    ///
    /// Default: 15
    preview_length: usize,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            emit_end_of_line: false,
            preview_length: 15,
        }
    }
}

impl LexerConfig {
    /// Whether newlines are materialized as end-of-line tokens.
    #[must_use]
    pub fn emit_end_of_line(&self) -> bool {
        self.emit_end_of_line
    }

    /// Maximum number of characters quoted from an unterminated string literal.
    #[must_use]
    pub fn preview_length(&self) -> usize {
        self.preview_length
    }

    /// Sets whether newlines are materialized as end-of-line tokens.
    #[must_use]
    pub fn with_end_of_line_tokens(mut self, emit: bool) -> Self {
        self.emit_end_of_line = emit;
        self
    }

    /// Sets the maximum number of characters quoted from an unterminated string literal.
    #[must_use]
    pub fn with_preview_length(mut self, preview_length: usize) -> Self {
        self.preview_length = preview_length;
        self
    }
}
