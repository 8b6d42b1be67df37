//! Integration tests for the tokenizer.

use tagdiff_html::{END_OF_INPUT, Token, TokenKind, Tokenizer, tokenize};

#[test]
fn test_plain_text() {
    let tokens = tokenize("Hello");
    assert_eq!(tokens, vec![Token::text(1, "Hello")]);
}

#[test]
fn test_open_and_close_tags() {
    let tokens = tokenize("<div></div>");
    assert_eq!(
        tokens,
        vec![Token::open_tag(1, "div"), Token::close_tag(1, "div")]
    );
}

#[test]
fn test_void_tag_with_and_without_space() {
    let tokens = tokenize("<br/><hr />");
    assert_eq!(
        tokens,
        vec![Token::void_tag(1, "br"), Token::void_tag(1, "hr")]
    );
}

#[test]
fn test_text_between_tags_is_trimmed() {
    let tokens = tokenize("<p>   hello world   </p>");
    assert_eq!(
        tokens,
        vec![
            Token::open_tag(1, "p"),
            Token::text(1, "hello world"),
            Token::close_tag(1, "p"),
        ]
    );
}

#[test]
fn test_inner_whitespace_is_not_normalized() {
    let tokens = tokenize("<p>a   b</p>");
    assert_eq!(tokens[1], Token::text(1, "a   b"));
}

#[test]
fn test_text_coalesced_across_lines() {
    let tokens = tokenize("<p>\n  first line\n  second line\n</p>");
    assert_eq!(
        tokens,
        vec![
            Token::open_tag(1, "p"),
            Token::text(2, "first line second line"),
            Token::close_tag(4, "p"),
        ]
    );
}

#[test]
fn test_text_flushed_at_end_of_input() {
    let tokens = tokenize("<p>\nunterminated\nparagraph");
    assert_eq!(
        tokens,
        vec![
            Token::open_tag(1, "p"),
            Token::text(2, "unterminated paragraph"),
        ]
    );
}

#[test]
fn test_blank_lines_do_not_split_text() {
    let tokens = tokenize("alpha\n\n\nbeta");
    assert_eq!(tokens, vec![Token::text(1, "alpha beta")]);
}

#[test]
fn test_tag_lines_are_one_indexed() {
    let tokens = tokenize("\n\n<a>\n</a>");
    assert_eq!(tokens[0].line, 3);
    assert_eq!(tokens[1].line, 4);
}

#[test]
fn test_heart_is_text_not_a_tag() {
    let tokens = tokenize("<p>I <3 Rust</p>");
    assert_eq!(
        tokens,
        vec![
            Token::open_tag(1, "p"),
            Token::text(1, "I <3 Rust"),
            Token::close_tag(1, "p"),
        ]
    );
}

#[test]
fn test_stray_angle_bracket_splits_text_with_a_space() {
    // "a" stops at the `<`, "<3 b" starts a new fragment, and fragments are
    // always joined with one space.
    let tokens = tokenize("<p>a<3 b</p>");
    assert_eq!(
        tokens,
        vec![
            Token::open_tag(1, "p"),
            Token::text(1, "a <3 b"),
            Token::close_tag(1, "p"),
        ]
    );
}

#[test]
fn test_tag_like_text_with_word_is_a_tag() {
    // A literal `<b>` inside prose is indistinguishable from markup.
    let tokens = tokenize("use <b> for bold");
    assert_eq!(tokens[1], Token::open_tag(1, "b"));
}

#[test]
fn test_attributes_are_not_tags() {
    let tokens = tokenize("<a href=x>link</a>");
    assert_eq!(tokens[0], Token::text(1, "<a href=x>link"));
    assert_eq!(tokens[1], Token::close_tag(1, "a"));
}

#[test]
fn test_crlf_line_endings() {
    let tokens = tokenize("<a>\r\nx\r\n</a>\r\n");
    assert_eq!(
        tokens,
        vec![
            Token::open_tag(1, "a"),
            Token::text(2, "x"),
            Token::close_tag(3, "a"),
        ]
    );
}

#[test]
fn test_tokenizer_over_owned_lines() {
    let lines = vec!["<ul>".to_string(), "<li/>".to_string(), "</ul>".to_string()];
    let kinds: Vec<TokenKind> = Tokenizer::new(lines).map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::OpenTag, TokenKind::VoidTag, TokenKind::CloseTag]
    );
}

#[test]
fn test_empty_input() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("   \n\t\n").is_empty());
}

#[test]
fn test_token_kind_display() {
    assert_eq!(TokenKind::OpenTag.to_string(), "open-tag");
    assert_eq!(TokenKind::CloseTag.to_string(), "close-tag");
    assert_eq!(TokenKind::VoidTag.to_string(), "void-tag");
    assert_eq!(TokenKind::Text.to_string(), "text");
    assert_eq!(TokenKind::EndOfInput.to_string(), "end-of-input");
}

#[test]
fn test_token_display() {
    assert_eq!(Token::open_tag(1, "a").to_string(), "<a>");
    assert_eq!(Token::close_tag(1, "a").to_string(), "</a>");
    assert_eq!(Token::void_tag(1, "br").to_string(), "<br/>");
    assert_eq!(Token::text(1, "hi").to_string(), "\"hi\"");
    assert_eq!(Token::end_of_input(9).to_string(), END_OF_INPUT);
}
