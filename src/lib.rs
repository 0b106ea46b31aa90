//! The lexical analysis stage of the `Solace` compiler.
//!
//! Converts Solace source text into a [`TokenStream`] of line-stamped string, number,
//! identifier and punctuation tokens for the parser to consume.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod base;
pub mod lexical;
pub mod util;

use std::path::Path;

use base::{source_file::SourceFile, FileProvider, Handler, Result};
use lexical::LexerConfig;

use crate::lexical::token_stream::TokenStream;

/// Converts the source file at the given path to tokens, using the default [`LexerConfig`].
///
/// The path doubles as the source name stamped onto diagnostics.
///
/// # Errors
/// - If an error occurs while reading the file.
/// - If a fatal lexical error occurs while tokenizing the source code.
pub fn tokenize(
    handler: &impl Handler<base::Error>,
    file_provider: &impl FileProvider,
    path: &Path,
) -> Result<TokenStream> {
    tokenize_with_config(handler, file_provider, path, &LexerConfig::default())
}

/// Converts the source file at the given path to tokens.
///
/// # Errors
/// - If an error occurs while reading the file.
/// - If a fatal lexical error occurs while tokenizing the source code.
pub fn tokenize_with_config(
    handler: &impl Handler<base::Error>,
    file_provider: &impl FileProvider,
    path: &Path,
    config: &LexerConfig,
) -> Result<TokenStream> {
    tracing::info!("Tokenizing source file at {}", path.display());

    let source_file = SourceFile::load(path, path.display().to_string(), file_provider)
        .map_err(|err| {
            handler.receive(err.clone());
            err
        })?;

    TokenStream::tokenize(&source_file, handler, config)
}
