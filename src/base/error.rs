/// An error that occurred while reading or lexing a source unit.
#[allow(missing_docs)]
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("could not read source `{source_name}`: {reason}")]
    SourceUnavailable { source_name: String, reason: String },
    #[error("An error occurred while lexing the source code: {0}")]
    LexicalError(#[from] crate::lexical::Error),
}

impl Error {
    /// Creates a [`Error::SourceUnavailable`] for the given source name.
    pub(crate) fn source_unavailable(source_name: impl Into<String>, reason: impl ToString) -> Self {
        Self::SourceUnavailable {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }
}

/// A specialized [`Result`] type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
