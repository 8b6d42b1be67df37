use std::collections::VecDeque;
use std::iter::Enumerate;

use super::helpers::{Lexeme, next_lexeme};
use super::token::{Token, TokenKind};

/// Lazy, line-oriented tokenizer.
///
/// Pulls one physical line at a time from the underlying iterator and yields
/// the tokens found on it. Text is buffered across lines and only flushed
/// when a tag is seen or the lines run out, so a paragraph wrapped over
/// several lines becomes a single text token carrying the line number of
/// its first fragment.
///
/// The tokenizer is consumed as it runs; it cannot be restarted.
pub struct Tokenizer<I> {
    lines: Enumerate<I>,
    /// Tokens recognized on the current line but not yet handed out.
    pending: VecDeque<Token>,
    /// Text fragments waiting to be joined into one token.
    text_buffer: Vec<String>,
    /// Line of the first buffered fragment.
    text_line: Option<usize>,
    lines_read: usize,
    finished: bool,
}

impl<I, S> Tokenizer<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    /// Create a tokenizer over an ordered sequence of lines.
    pub fn new<L>(lines: L) -> Self
    where
        L: IntoIterator<IntoIter = I>,
    {
        Self {
            lines: lines.into_iter().enumerate(),
            pending: VecDeque::new(),
            text_buffer: Vec::new(),
            text_line: None,
            lines_read: 0,
            finished: false,
        }
    }

    /// Number of physical lines consumed so far.
    #[must_use]
    pub const fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Scan one physical line left to right, queueing every token found.
    fn scan_line(&mut self, line_number: usize, line: &str) {
        let mut pos = 0;
        while let Some((lexeme, consumed)) = next_lexeme(&line[pos..]) {
            match lexeme {
                // Skipped, and does not break a text run.
                Lexeme::Whitespace => {}
                Lexeme::OpenTag(name) => self.emit_tag(line_number, TokenKind::OpenTag, name),
                Lexeme::CloseTag(name) => self.emit_tag(line_number, TokenKind::CloseTag, name),
                Lexeme::VoidTag(name) => self.emit_tag(line_number, TokenKind::VoidTag, name),
                Lexeme::Text(fragment) => self.buffer_text(line_number, fragment),
            }
            pos += consumed;
        }
    }

    fn emit_tag(&mut self, line_number: usize, kind: TokenKind, name: &str) {
        self.flush_text();
        self.pending
            .push_back(Token::new(line_number, kind, name.trim()));
    }

    fn buffer_text(&mut self, line_number: usize, fragment: &str) {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            return;
        }
        if self.text_line.is_none() {
            self.text_line = Some(line_number);
        }
        self.text_buffer.push(fragment.to_string());
    }

    /// Emit buffered text as one token, fragments joined with a single space.
    fn flush_text(&mut self) {
        if let Some(line) = self.text_line.take() {
            let data = self.text_buffer.join(" ");
            self.text_buffer.clear();
            self.pending.push_back(Token::text(line, data));
        }
    }
}

impl<I, S> Iterator for Tokenizer<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(token);
            }
            if self.finished {
                return None;
            }
            match self.lines.next() {
                Some((index, line)) => {
                    self.lines_read = index + 1;
                    self.scan_line(index + 1, line.as_ref());
                }
                None => {
                    self.flush_text();
                    self.finished = true;
                }
            }
        }
    }
}

/// Tokenize a whole document held in memory.
#[must_use]
pub fn tokenize(text: &str) -> Vec<Token> {
    Tokenizer::new(text.lines()).collect()
}
