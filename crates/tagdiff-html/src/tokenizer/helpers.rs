//! Matchers for the tokenizer.
//!
//! Each matcher looks at the remainder of the current line and either
//! recognizes a lexeme at its very start or declines. [`MATCHERS`] holds
//! them in priority order:
//! - Whitespace run
//! - Opening tag `<name>`
//! - Closing tag `</name>`
//! - Void tag `<name/>`, `<name />`
//! - Text run (always matches on non-empty input)

/// A lexeme recognized at the start of a line remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lexeme<'a> {
    /// One or more whitespace characters. Never emitted.
    Whitespace,
    /// Opening tag name.
    OpenTag(&'a str),
    /// Closing tag name.
    CloseTag(&'a str),
    /// Self-closing tag name.
    VoidTag(&'a str),
    /// A text fragment, up to the next `<` or the end of the line.
    Text(&'a str),
}

/// A recognized lexeme together with the number of bytes it consumed.
pub type Match<'a> = (Lexeme<'a>, usize);

/// A single alternative of the scanner.
pub type Matcher = for<'a> fn(&'a str) -> Option<Match<'a>>;

/// The alternatives, in priority order. The first one to match wins.
pub const MATCHERS: [Matcher; 5] = [
    match_whitespace,
    match_open_tag,
    match_close_tag,
    match_void_tag,
    match_text,
];

/// Recognize the lexeme at the start of `rest`.
///
/// Returns `None` only for empty input, since the text alternative accepts
/// any non-empty remainder.
#[must_use]
pub fn next_lexeme(rest: &str) -> Option<Match<'_>> {
    MATCHERS.iter().find_map(|matcher| matcher(rest))
}

/// Word characters as understood by tag names: Unicode alphanumerics and `_`.
#[must_use]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Byte length of the leading run of word characters.
fn word_len(input: &str) -> usize {
    input
        .char_indices()
        .find(|&(_, c)| !is_word_char(c))
        .map_or(input.len(), |(i, _)| i)
}

/// Byte length of the leading run of whitespace.
fn whitespace_len(input: &str) -> usize {
    input.len() - input.trim_start().len()
}

/// Whitespace run.
#[must_use]
pub fn match_whitespace(input: &str) -> Option<Match<'_>> {
    let len = whitespace_len(input);
    (len > 0).then_some((Lexeme::Whitespace, len))
}

/// `<` word+ `>`
#[must_use]
pub fn match_open_tag(input: &str) -> Option<Match<'_>> {
    let after_lt = input.strip_prefix('<')?;
    let name_len = word_len(after_lt);
    if name_len == 0 || !after_lt[name_len..].starts_with('>') {
        return None;
    }
    Some((Lexeme::OpenTag(&after_lt[..name_len]), name_len + 2))
}

/// `</` word+ `>`
#[must_use]
pub fn match_close_tag(input: &str) -> Option<Match<'_>> {
    let after_slash = input.strip_prefix("</")?;
    let name_len = word_len(after_slash);
    if name_len == 0 || !after_slash[name_len..].starts_with('>') {
        return None;
    }
    Some((Lexeme::CloseTag(&after_slash[..name_len]), name_len + 3))
}

/// `<` word+ whitespace* `/>`
#[must_use]
pub fn match_void_tag(input: &str) -> Option<Match<'_>> {
    let after_lt = input.strip_prefix('<')?;
    let name_len = word_len(after_lt);
    if name_len == 0 {
        return None;
    }
    let gap = whitespace_len(&after_lt[name_len..]);
    let tail = &after_lt[name_len + gap..];
    if !tail.starts_with("/>") {
        return None;
    }
    Some((Lexeme::VoidTag(&after_lt[..name_len]), 1 + name_len + gap + 2))
}

/// One or more characters up to the next `<`, or the rest of the line.
///
/// The first character is always taken, so a `<` that did not start a tag
/// begins a text run instead of stalling the scanner.
#[must_use]
pub fn match_text(input: &str) -> Option<Match<'_>> {
    let first = input.chars().next()?.len_utf8();
    let end = input[first..].find('<').map_or(input.len(), |i| first + i);
    Some((Lexeme::Text(&input[..end]), end))
}
