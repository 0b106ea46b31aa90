//! Contains the [`Token`] struct and its related types.

use std::{collections::HashMap, sync::OnceLock};

use enum_as_inner::EnumAsInner;
use getset::{CopyGetters, Getters};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::{
    base::{
        source_file::Span,
        Handler,
    },
    util,
};

use super::{
    config::LexerConfig,
    cursor::Cursor,
    error::{MalformedNumber, MalformedNumberKind, UnrecognizedCharacter, UnterminatedLiteral},
    Error,
};

/// Is an enumeration representing the single-character punctuation of Solace.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum PunctuationKind {
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    OpenBrace,
    CloseBrace,
    Tilde,
    Pipe,
    Comma,
    Semicolon,
    Colon,
    Dot,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Equals,
    Less,
    Greater,
    Bang,
    Ampersand,
}

/// Is an error that is returned when a character does not map to a [`PunctuationKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error)]
#[error("`{0}` is not a punctuation character.")]
pub struct PunctuationParseError(pub char);

impl TryFrom<char> for PunctuationKind {
    type Error = PunctuationParseError;

    fn try_from(character: char) -> Result<Self, Self::Error> {
        static CHAR_PUNCTUATION_MAP: OnceLock<HashMap<char, PunctuationKind>> = OnceLock::new();
        let map = CHAR_PUNCTUATION_MAP.get_or_init(|| {
            let mut map = HashMap::new();

            for punctuation in Self::iter() {
                map.insert(punctuation.as_char(), punctuation);
            }

            map
        });

        map.get(&character)
            .copied()
            .ok_or(PunctuationParseError(character))
    }
}

impl PunctuationKind {
    /// Gets the character the punctuation is written as.
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::OpenParen => '(',
            Self::CloseParen => ')',
            Self::OpenBracket => '[',
            Self::CloseBracket => ']',
            Self::OpenBrace => '{',
            Self::CloseBrace => '}',
            Self::Tilde => '~',
            Self::Pipe => '|',
            Self::Comma => ',',
            Self::Semicolon => ';',
            Self::Colon => ':',
            Self::Dot => '.',
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Star => '*',
            Self::Slash => '/',
            Self::Percent => '%',
            Self::Equals => '=',
            Self::Less => '<',
            Self::Greater => '>',
            Self::Bang => '!',
            Self::Ampersand => '&',
        }
    }
}

/// Is an enumeration containing all kinds of tokens in the Solace programming language.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner)]
pub enum TokenKind {
    /// Text enclosed in double quotes.
    StringLiteral,
    /// A sequence of digits.
    IntLiteral,
    /// A sequence of digits containing one decimal point followed by digits.
    FloatLiteral,
    /// A word made of ASCII letters, digits and underscores, not starting with a digit.
    Identifier,
    /// A single punctuation character.
    Punctuation(PunctuationKind),
    /// A newline, only produced when [`LexerConfig::emit_end_of_line`] is enabled.
    EndOfLine,
    /// A numeric literal with an invalid shape, see [`MalformedNumber`].
    Malformed,
}

/// A classified, line-stamped unit of source text.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters, CopyGetters)]
pub struct Token {
    /// Get the kind of the token.
    #[get_copy = "pub"]
    kind: TokenKind,

    /// Get the captured text of the token. String literals exclude their quotes.
    #[get = "pub"]
    lexeme: String,

    /// Get the line (starts at 1) the token starts on.
    #[get_copy = "pub"]
    line: usize,

    /// Get the span that makes up the token, delimiters included.
    #[get = "pub"]
    span: Span,
}

/// Is an error that can occur when invoking the [`Token::tokenize`] method.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error)]
#[allow(missing_docs)]
pub enum TokenizeError {
    #[error("encountered a fatal lexical error that causes the process to stop: {0}")]
    FatalLexicalError(Error),

    #[error("the cursor argument is at the end of the source code.")]
    EndOfSourceCodeCursorArgument,
}

/// Category of the character a token starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharacterClass {
    Newline,
    Quote,
    Digit,
    WordStart,
    Other,
}

impl CharacterClass {
    fn of(character: char) -> Self {
        match character {
            '\n' => Self::Newline,
            '"' => Self::Quote,
            '0'..='9' => Self::Digit,
            'a'..='z' | 'A'..='Z' | '_' => Self::WordStart,
            _ => Self::Other,
        }
    }
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: String, line: usize, span: Span) -> Self {
        Self {
            kind,
            lexeme,
            line,
            span,
        }
    }

    /// Get the identifier of the source file the token comes from.
    #[must_use]
    pub fn source_name(&self) -> &str {
        self.span.source_file().identifier()
    }

    /// Checks if the given character can continue a word.
    fn is_word_character(character: char) -> bool {
        character.is_ascii_alphanumeric() || character == '_'
    }

    /// Handles a newline that was already consumed by the cursor.
    fn handle_newline(cursor: &mut Cursor, start: usize, config: &LexerConfig) -> Option<Self> {
        config.emit_end_of_line().then(|| {
            // the cursor already moved to the next line
            let line = cursor.line() - 1;
            Self::new(
                TokenKind::EndOfLine,
                "\n".to_string(),
                line,
                cursor.span_from(start),
            )
        })
    }

    /// Handles a sequence of characters that are enclosed in double quotes.
    ///
    /// There are no escape sequences; the first `"` after the opening one closes the literal.
    fn handle_string_literal(
        cursor: &mut Cursor,
        start: usize,
        config: &LexerConfig,
    ) -> Result<Self, TokenizeError> {
        let line = cursor.line();
        let mut content = String::new();

        while let Some((_, character)) = cursor.advance() {
            if character == '"' {
                return Ok(Self::new(
                    TokenKind::StringLiteral,
                    content,
                    line,
                    cursor.span_from(start),
                ));
            }

            content.push(character);
        }

        let span = Span::new(cursor.source_file().clone(), start, start + 1)
            .expect("opening quote is a single byte");

        Err(TokenizeError::FatalLexicalError(
            UnterminatedLiteral {
                span,
                line,
                preview: util::preview(&content, config.preview_length()).to_string(),
            }
            .into(),
        ))
    }

    /// Handles a sequence of digits and decimal points.
    fn handle_numeric_literal(
        cursor: &mut Cursor,
        start: usize,
        first_digit: char,
        handler: &impl Handler<Error>,
    ) -> Self {
        let line = cursor.line();
        let mut literal = String::from(first_digit);
        let mut has_decimal_point = false;
        let mut malformed = None;

        while let Some((index, character)) = cursor.advance() {
            match character {
                '0'..='9' => literal.push(character),
                '.' => {
                    if has_decimal_point {
                        malformed.get_or_insert(MalformedNumberKind::MultipleDecimalPoints);
                    }
                    has_decimal_point = true;
                    literal.push(character);
                }
                _ => {
                    cursor.push_back((index, character));
                    break;
                }
            }
        }

        if literal.ends_with('.') {
            malformed.get_or_insert(MalformedNumberKind::MissingFractionalDigits);
        }

        let span = cursor.span_from(start);

        let kind = if let Some(kind) = malformed {
            handler.receive(
                MalformedNumber {
                    span: span.clone(),
                    line,
                    kind,
                }
                .into(),
            );
            TokenKind::Malformed
        } else if has_decimal_point {
            TokenKind::FloatLiteral
        } else {
            TokenKind::IntLiteral
        };

        Self::new(kind, literal, line, span)
    }

    /// Handles a contiguous sequence of characters that are valid in a word.
    fn handle_word(cursor: &mut Cursor, start: usize, first_character: char) -> Self {
        let line = cursor.line();
        let mut word = String::from(first_character);

        while let Some((index, character)) = cursor.advance() {
            if !Self::is_word_character(character) {
                cursor.push_back((index, character));
                break;
            }

            word.push(character);
        }

        Self::new(TokenKind::Identifier, word, line, cursor.span_from(start))
    }

    /// Handles every character that does not start a literal or a word.
    ///
    /// Whitespace is skipped and unknown characters are reported without producing a token.
    fn handle_punctuation(
        cursor: &mut Cursor,
        start: usize,
        character: char,
        handler: &impl Handler<Error>,
    ) -> Option<Self> {
        let span = cursor.span_from(start);

        if let Ok(punctuation) = PunctuationKind::try_from(character) {
            Some(Self::new(
                TokenKind::Punctuation(punctuation),
                character.to_string(),
                cursor.line(),
                span,
            ))
        } else if character.is_whitespace() {
            None
        } else {
            handler.receive(
                UnrecognizedCharacter {
                    span,
                    line: cursor.line(),
                    character,
                }
                .into(),
            );
            None
        }
    }

    /// Lexes the source code from the given cursor.
    ///
    /// The function consumes at least one character. It returns `Ok(None)` when the consumed
    /// characters produce no token (whitespace, newlines, unrecognized characters). After a
    /// token is made, the cursor is left at the next character that is not part of the token.
    ///
    /// Non-fatal problems are reported to the `handler` and scanning can continue.
    ///
    /// # Errors
    /// - [`TokenizeError::EndOfSourceCodeCursorArgument`] - The cursor is at the end of the
    ///   source code.
    /// - [`TokenizeError::FatalLexicalError`] - A fatal lexical error occurred.
    pub fn tokenize(
        cursor: &mut Cursor,
        handler: &impl Handler<Error>,
        config: &LexerConfig,
    ) -> Result<Option<Self>, TokenizeError> {
        let (start, character) = cursor
            .advance()
            .ok_or(TokenizeError::EndOfSourceCodeCursorArgument)?;

        match CharacterClass::of(character) {
            CharacterClass::Newline => Ok(Self::handle_newline(cursor, start, config)),
            CharacterClass::Quote => Self::handle_string_literal(cursor, start, config).map(Some),
            CharacterClass::Digit => Ok(Some(Self::handle_numeric_literal(
                cursor, start, character, handler,
            ))),
            CharacterClass::WordStart => Ok(Some(Self::handle_word(cursor, start, character))),
            CharacterClass::Other => Ok(Self::handle_punctuation(
                cursor, start, character, handler,
            )),
        }
    }
}
