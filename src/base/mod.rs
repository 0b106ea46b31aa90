//! The base module contains the shared infrastructure of the `Solace` lexer: source files,
//! file providers, diagnostic handlers and message rendering.

pub mod source_file;

mod error;
#[doc(inline)]
pub use error::{Error, Result};

mod diagnostic;
pub use diagnostic::{Handler, PrintHandler, SilentHandler, VoidHandler};

mod file_provider;
#[cfg(feature = "fs_access")]
pub use file_provider::FsProvider;
pub use file_provider::{FileProvider, MemoryProvider};

pub mod log;
