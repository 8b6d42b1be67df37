//! Tag tokenizer and tree builder for tagdiff.
//!
//! # Scope
//!
//! This crate implements:
//! - **Tokenizer** - a lazy, line-oriented scanner producing open, close,
//!   void and text tokens, with text coalesced across line breaks
//! - **Tree Builder** - depth-based nesting of a token list into an owned
//!   tree, terminated by an end-of-input sentinel
//!
//! # Not Supported
//!
//! - Attributes, comments, DOCTYPE, CDATA
//! - Character references
//! - Checking that a closing tag's name matches its opener

/// Tree construction from a token list.
pub mod parser;
/// Tokenizer for converting document lines into tokens.
pub mod tokenizer;

pub use parser::{BuildIssue, Node, TreeBuilder, dump_tree};
pub use tokenizer::{END_OF_INPUT, Token, TokenKind, Tokenizer, tokenize};

/// Tokenize and build a whole document held in memory.
///
/// The sentinel is placed on the line after the last physical line.
#[must_use]
pub fn parse_str(text: &str) -> Node {
    let end_line = text.lines().count() + 1;
    TreeBuilder::new(tokenize(text)).run(end_line)
}
