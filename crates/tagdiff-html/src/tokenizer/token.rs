use std::fmt;

use serde::Serialize;
use strum_macros::Display;

/// Value carried by the synthetic end-of-input token.
pub const END_OF_INPUT: &str = "EOF";

/// The closed set of token kinds.
///
/// Displayed (and serialized) in kebab-case: `open-tag`, `close-tag`,
/// `void-tag`, `text`, `end-of-input`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    /// `<name>`
    OpenTag,
    /// `</name>`
    CloseTag,
    /// `<name/>` or `<name />`
    VoidTag,
    /// A coalesced run of character data.
    Text,
    /// The sentinel appended to every tree root.
    EndOfInput,
}

/// A single token with the 1-indexed line it starts on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Line of the token, or of the first fragment for coalesced text.
    pub line: usize,
    /// What kind of token this is.
    pub kind: TokenKind,
    /// Bare tag name for tags, trimmed text for text, [`END_OF_INPUT`] for the sentinel.
    pub value: String,
}

impl Token {
    /// Create a token of any kind.
    #[must_use]
    pub fn new(line: usize, kind: TokenKind, value: impl Into<String>) -> Self {
        Self {
            line,
            kind,
            value: value.into(),
        }
    }

    /// Create an opening tag token.
    #[must_use]
    pub fn open_tag(line: usize, name: impl Into<String>) -> Self {
        Self::new(line, TokenKind::OpenTag, name)
    }

    /// Create a closing tag token.
    #[must_use]
    pub fn close_tag(line: usize, name: impl Into<String>) -> Self {
        Self::new(line, TokenKind::CloseTag, name)
    }

    /// Create a self-closing tag token.
    #[must_use]
    pub fn void_tag(line: usize, name: impl Into<String>) -> Self {
        Self::new(line, TokenKind::VoidTag, name)
    }

    /// Create a text token.
    #[must_use]
    pub fn text(line: usize, data: impl Into<String>) -> Self {
        Self::new(line, TokenKind::Text, data)
    }

    /// Create the end-of-input sentinel token.
    #[must_use]
    pub fn end_of_input(line: usize) -> Self {
        Self::new(line, TokenKind::EndOfInput, END_OF_INPUT)
    }

    /// Kind equality, ignoring value and line.
    #[must_use]
    pub fn same_kind(&self, other: &Self) -> bool {
        self.kind == other.kind
    }

    /// Value equality, ignoring kind and line.
    #[must_use]
    pub fn same_value(&self, other: &Self) -> bool {
        self.value == other.value
    }

    /// Returns true if this is a text token.
    #[must_use]
    pub fn is_text(&self) -> bool {
        self.kind == TokenKind::Text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::OpenTag => write!(f, "<{}>", self.value),
            TokenKind::CloseTag => write!(f, "</{}>", self.value),
            TokenKind::VoidTag => write!(f, "<{}/>", self.value),
            TokenKind::Text => write!(f, "\"{}\"", self.value),
            TokenKind::EndOfInput => write!(f, "{}", self.value),
        }
    }
}
