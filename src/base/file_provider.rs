use std::{
    borrow::Cow,
    collections::HashMap,
    path::{Path, PathBuf},
};

use super::Error;

/// A trait for providing file contents.
pub trait FileProvider {
    /// Reads the contents of the file at the given path as bytes.
    ///
    /// # Errors
    /// - If an error occurs while reading the file.
    /// - If the file does not exist.
    fn read_bytes<P: AsRef<Path>>(&self, path: P) -> Result<Cow<'_, [u8]>, Error>;

    /// Reads the contents of the file at the given path.
    ///
    /// # Errors
    /// - If an error occurs while reading the file.
    /// - If the file does not exist.
    /// - If the file is not valid UTF-8.
    fn read_str<P: AsRef<Path>>(&self, path: P) -> Result<Cow<'_, str>, Error> {
        let bytes = self.read_bytes(path.as_ref())?;
        let string = std::str::from_utf8(&bytes)
            .map_err(|err| Error::source_unavailable(path.as_ref().display().to_string(), err))?
            .to_string();
        Ok(Cow::Owned(string))
    }
}

/// Provides file contents from the file system.
#[cfg(feature = "fs_access")]
#[derive(Debug, Clone)]
pub struct FsProvider {
    /// The root directory to base paths off of.
    root: PathBuf,
}

#[cfg(feature = "fs_access")]
impl Default for FsProvider {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
        }
    }
}

#[cfg(feature = "fs_access")]
impl<P> From<P> for FsProvider
where
    P: Into<PathBuf>,
{
    fn from(root: P) -> Self {
        Self { root: root.into() }
    }
}

#[cfg(feature = "fs_access")]
impl FileProvider for FsProvider {
    fn read_bytes<P: AsRef<Path>>(&self, path: P) -> Result<Cow<'_, [u8]>, Error> {
        let full_path = self.root.join(path);
        std::fs::read(&full_path)
            .map(Cow::Owned)
            .map_err(|err| Error::source_unavailable(full_path.display().to_string(), err))
    }

    fn read_str<P: AsRef<Path>>(&self, path: P) -> Result<Cow<'_, str>, Error> {
        let full_path = self.root.join(path);
        std::fs::read_to_string(&full_path)
            .map(Cow::Owned)
            .map_err(|err| Error::source_unavailable(full_path.display().to_string(), err))
    }
}

/// Provides file contents from an in-memory map of normalized paths to source text.
///
/// Paths are normalized on insertion and lookup, so `./a/../b.solace` and `b.solace` refer to
/// the same file.
#[derive(Debug, Clone, Default)]
pub struct MemoryProvider {
    files: HashMap<String, String>,
}

impl MemoryProvider {
    /// Creates an empty [`MemoryProvider`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file with the given contents, replacing any previous file at the same path.
    ///
    /// Returns `false` if the path escapes the provider root and was not added.
    pub fn add_file<P: AsRef<Path>>(&mut self, path: P, contents: impl Into<String>) -> bool {
        normalize_path_str(path).map_or(false, |path| {
            self.files.insert(path, contents.into());
            true
        })
    }
}

impl FileProvider for MemoryProvider {
    fn read_bytes<P: AsRef<Path>>(&self, path: P) -> Result<Cow<'_, [u8]>, Error> {
        self.read_str(path)
            .map(|contents| Cow::Owned(contents.into_owned().into_bytes()))
    }

    fn read_str<P: AsRef<Path>>(&self, path: P) -> Result<Cow<'_, str>, Error> {
        let display = path.as_ref().display().to_string();
        normalize_path_str(path).map_or_else(
            || Err(Error::source_unavailable(display.clone(), "Invalid path")),
            |path| {
                self.files
                    .get(&path)
                    .map(|contents| Cow::Borrowed(contents.as_str()))
                    .ok_or_else(|| Error::source_unavailable(display.clone(), "File not found"))
            },
        )
    }
}

fn normalize_path_str<P: AsRef<Path>>(path: P) -> Option<String> {
    let mut err = false;
    let res = path
        .as_ref()
        .to_str()?
        .split('/')
        .fold(Vec::new(), |mut acc, el| match el {
            "." | "" => acc,
            ".." => {
                let popped = acc.pop();
                if popped.is_none() {
                    err = true;
                }
                acc
            }
            _ => {
                acc.push(el);
                acc
            }
        })
        .join("/");

    if err {
        None
    } else {
        Some(res)
    }
}
