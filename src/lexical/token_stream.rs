//! Contains the [`TokenStream`] struct and its related types.

use std::{cell::RefCell, fmt::Debug, sync::Arc};

use derive_more::Deref;
use getset::Getters;

use crate::{
    base::{self, source_file::SourceFile, Handler},
    lexical::Error,
};

use super::{
    config::LexerConfig,
    cursor::Cursor,
    token::{Token, TokenizeError},
};

/// Is the ordered list of [`Token`]s of one source file.
///
/// This struct is the final output of the lexical analysis phase and is meant to be used by the
/// next stage of the compilation process. Tokens are in source order and their line numbers never
/// decrease.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, PartialEq, Eq, Hash, Deref, Getters)]
pub struct TokenStream {
    #[deref]
    tokens: Vec<Token>,

    /// Get the non-fatal diagnostics reported while tokenizing, in the order they were found.
    #[cfg_attr(feature = "serde", serde(skip))]
    #[get = "pub"]
    diagnostics: Vec<Error>,
}

impl Debug for TokenStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.tokens.iter()).finish()
    }
}

/// Records every diagnostic passing through on its way to the outer handler.
struct DiagnosticCollector<'a, H> {
    handler: &'a H,
    diagnostics: RefCell<Vec<Error>>,
}

impl<'a, H: Handler<base::Error>> Handler<Error> for DiagnosticCollector<'a, H> {
    fn receive(&self, error: Error) {
        tracing::trace!(line = error.line(), "Lexical diagnostic: {error:?}");

        self.diagnostics.borrow_mut().push(error.clone());
        self.handler.receive(error.into());
    }
}

impl TokenStream {
    /// Tokenizes the given source code.
    ///
    /// This function tokenizes the given source file by calling [`Token::tokenize()`]
    /// repeatedly until the source is exhausted. Non-fatal diagnostics are delivered to the
    /// `handler` and kept in [`TokenStream::diagnostics`].
    ///
    /// # Errors
    /// - [`base::Error::LexicalError`] - A fatal lexical error aborted the pass. The error is
    ///   also delivered to the `handler`.
    #[tracing::instrument(level = "debug", skip_all, fields(source_file = %source_file.identifier()))]
    pub fn tokenize(
        source_file: &Arc<SourceFile>,
        handler: &impl Handler<base::Error>,
        config: &LexerConfig,
    ) -> base::Result<Self> {
        let collector = DiagnosticCollector {
            handler,
            diagnostics: RefCell::new(Vec::new()),
        };

        let mut tokens = Vec::new();
        let mut cursor = Cursor::new(source_file);

        loop {
            match Token::tokenize(&mut cursor, &collector, config) {
                Ok(Some(token)) => tokens.push(token),
                Ok(None) => {}
                Err(TokenizeError::EndOfSourceCodeCursorArgument) => break,
                Err(TokenizeError::FatalLexicalError(err)) => {
                    tracing::error!(
                        line = err.line(),
                        "Fatal lexical error encountered while tokenizing source code"
                    );
                    handler.receive(err.clone().into());
                    return Err(err.into());
                }
            }
        }

        let diagnostics = collector.diagnostics.into_inner();

        tracing::debug!(
            tokens = tokens.len(),
            diagnostics = diagnostics.len(),
            "Tokenized source code"
        );

        Ok(Self {
            tokens,
            diagnostics,
        })
    }

    /// Get the tokens in source order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Whether any non-fatal diagnostic was reported while tokenizing.
    #[must_use]
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Dissolves this struct into a tuple of its components.
    #[must_use]
    pub fn dissolve(self) -> (Vec<Token>, Vec<Error>) {
        (self.tokens, self.diagnostics)
    }
}
