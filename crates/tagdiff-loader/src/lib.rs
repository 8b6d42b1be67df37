//! Document loading for tagdiff.
//!
//! # Scope
//!
//! This crate provides:
//! - **Sources** - where a document's text comes from (a file, or a string)
//! - **Loader** - read, tokenize and build one document
//! - **Orchestrator** - load two documents on two threads and wait for both
//!
//! Results are always attributed by [`DocumentId`], never by the order in
//! which the workers happen to finish.

pub mod error;
pub mod orchestrator;
pub mod source;

pub use error::LoadError;
pub use orchestrator::{LoadOptions, load_pair};
pub use source::{DocumentSource, FileSource, InlineSource};

use strum_macros::Display;
use tagdiff_common::warning::debug;
use tagdiff_html::{BuildIssue, Node, Tokenizer, TreeBuilder};

/// Which of the two compared documents a result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DocumentId {
    /// Document 1, the left side of the comparison.
    #[strum(serialize = "document 1")]
    First,
    /// Document 2, the right side of the comparison.
    #[strum(serialize = "document 2")]
    Second,
}

impl DocumentId {
    /// 1 or 2.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
        }
    }

    /// Slot index for this document (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}

/// A fully loaded document: its original lines and the tree built from them.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    /// Which side of the comparison this is.
    pub id: DocumentId,
    /// Human-readable name of the source (usually the path).
    pub name: String,
    /// Original lines, without line terminators.
    pub lines: Vec<String>,
    /// Tree built from the lines.
    pub tree: Node,
    /// Structural oddities the builder tolerated.
    pub issues: Vec<BuildIssue>,
}

impl LoadedDocument {
    /// Text of the 1-indexed `line`, or `None` past the end of the document.
    #[must_use]
    pub fn line_text(&self, line: usize) -> Option<&str> {
        line.checked_sub(1)
            .and_then(|index| self.lines.get(index))
            .map(String::as_str)
    }
}

/// Read, tokenize and build one document.
///
/// # Errors
///
/// Returns [`LoadError::Read`] if the source cannot be read.
pub fn load_document(
    id: DocumentId,
    source: &dyn DocumentSource,
) -> Result<LoadedDocument, LoadError> {
    let name = source.describe();
    debug("Loader", &format!("{id}: reading {name}"));

    let text = source.read_to_string().map_err(|err| LoadError::Read {
        name: name.clone(),
        source: err,
    })?;
    let lines: Vec<String> = text.lines().map(str::to_string).collect();

    let tokens: Vec<_> = Tokenizer::new(lines.iter()).collect();
    debug(
        "Loader",
        &format!("{id}: {} lines, {} tokens", lines.len(), tokens.len()),
    );
    let (tree, issues) = TreeBuilder::new(tokens).run_with_issues(lines.len() + 1);

    Ok(LoadedDocument {
        id,
        name,
        lines,
        tree,
        issues,
    })
}
