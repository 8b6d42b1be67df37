//! Tokenizer module.
//!
//! Turns document lines into [`Token`]s. Scanning is driven by an ordered
//! list of matchers tried at the current position; the first match wins.

/// Ordered matchers used at each scan position.
pub mod helpers;
/// The tokenizer itself: line iteration and text coalescing.
pub mod lexer;
/// Token types produced by the tokenizer.
pub mod token;

pub use lexer::{Tokenizer, tokenize};
pub use token::{END_OF_INPUT, Token, TokenKind};
