//! Where document text comes from.

use std::fs;
use std::io;
use std::path::PathBuf;

/// A readable document.
///
/// Implementations are moved onto a worker thread, so they must be `Send`.
pub trait DocumentSource: Send {
    /// Name used in reports and error messages.
    fn describe(&self) -> String;

    /// Read the whole document.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the document cannot be read or is
    /// not valid UTF-8.
    fn read_to_string(&self) -> io::Result<String>;
}

/// A document stored in a file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read_to_string(&self) -> io::Result<String> {
        fs::read_to_string(&self.path)
    }
}

/// A document held in memory under a label.
#[derive(Debug, Clone)]
pub struct InlineSource {
    label: String,
    text: String,
}

impl InlineSource {
    /// Create a source named `label` holding `text`.
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

impl DocumentSource for InlineSource {
    fn describe(&self) -> String {
        self.label.clone()
    }

    fn read_to_string(&self) -> io::Result<String> {
        Ok(self.text.clone())
    }
}
