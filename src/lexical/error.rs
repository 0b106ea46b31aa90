use std::fmt::Display;

use enum_as_inner::EnumAsInner;
use getset::{CopyGetters, Getters};

use crate::{
    base::{
        log::{Message, Severity, SourceCodeDisplay},
        source_file::Span,
    },
    util::escape_str,
};

/// Represents an error that occurred during the lexical analysis of the source code.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    UnterminatedLiteral(#[from] UnterminatedLiteral),
    #[error(transparent)]
    MalformedNumber(#[from] MalformedNumber),
    #[error(transparent)]
    UnrecognizedCharacter(#[from] UnrecognizedCharacter),
}

impl Error {
    /// Whether the error aborts the whole tokenization pass.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::UnterminatedLiteral(..))
    }

    /// Line number (starts at 1) the error was found on.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Self::UnterminatedLiteral(err) => err.line,
            Self::MalformedNumber(err) => err.line,
            Self::UnrecognizedCharacter(err) => err.line,
        }
    }

    /// Span of the source code the error points at.
    #[must_use]
    pub fn span(&self) -> &Span {
        match self {
            Self::UnterminatedLiteral(err) => &err.span,
            Self::MalformedNumber(err) => &err.span,
            Self::UnrecognizedCharacter(err) => &err.span,
        }
    }

    /// Identifier of the source file the error was found in.
    #[must_use]
    pub fn source_name(&self) -> &str {
        self.span().source_file().identifier()
    }
}

/// Source code contains a `"` that is never closed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters, CopyGetters)]
pub struct UnterminatedLiteral {
    /// Span of the opening `"`.
    #[get = "pub"]
    pub(crate) span: Span,

    /// Line the literal starts on.
    #[get_copy = "pub"]
    pub(crate) line: usize,

    /// The first characters of the unclosed literal.
    #[get = "pub"]
    pub(crate) preview: String,
}

impl Display for UnterminatedLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = format!(
            "unclosed string literal in `{}` starting on line {}",
            self.span.source_file().identifier(),
            self.line
        );

        write!(
            f,
            "{}\n{}",
            Message::new(Severity::Error, message),
            SourceCodeDisplay::new(
                &self.span,
                Some(format!(
                    "the string starting with \"{}\" is never closed by a matching `\"`",
                    escape_str(&self.preview)
                ))
            )
        )
    }
}

impl std::error::Error for UnterminatedLiteral {}

/// Ways in which a numeric literal can be malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MalformedNumberKind {
    /// The literal contains more than one decimal point, e.g. `1.2.3`.
    MultipleDecimalPoints,

    /// The literal ends with its decimal point, e.g. `12.`.
    MissingFractionalDigits,
}

impl MalformedNumberKind {
    fn help(self) -> &'static str {
        match self {
            Self::MultipleDecimalPoints => "a number can contain at most one decimal point",
            Self::MissingFractionalDigits => "a decimal point must be followed by at least one digit",
        }
    }
}

/// A numeric literal has a structurally invalid shape.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters, CopyGetters)]
pub struct MalformedNumber {
    /// Span of the whole offending literal.
    #[get = "pub"]
    pub(crate) span: Span,

    /// Line the literal is on.
    #[get_copy = "pub"]
    pub(crate) line: usize,

    /// What is wrong with the literal.
    #[get_copy = "pub"]
    pub(crate) kind: MalformedNumberKind,
}

impl Display for MalformedNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = format!("malformed number literal `{}`", self.span.str());

        write!(
            f,
            "{}\n{}",
            Message::new(Severity::Warning, message),
            SourceCodeDisplay::new(&self.span, Some(self.kind.help()))
        )
    }
}

impl std::error::Error for MalformedNumber {}

/// Source code contains a character that no token starts with.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters, CopyGetters)]
pub struct UnrecognizedCharacter {
    /// Span of the character.
    #[get = "pub"]
    pub(crate) span: Span,

    /// Line the character is on.
    #[get_copy = "pub"]
    pub(crate) line: usize,

    /// The unrecognized character.
    #[get_copy = "pub"]
    pub(crate) character: char,
}

impl Display for UnrecognizedCharacter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(
                Severity::Warning,
                format!("unexpected character `{}`", self.character.escape_debug())
            ),
            SourceCodeDisplay::new(&self.span, Option::<u8>::None)
        )
    }
}

impl std::error::Error for UnrecognizedCharacter {}
