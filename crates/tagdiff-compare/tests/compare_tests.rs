//! Integration tests for the tree comparator.

use tagdiff_compare::{Comparison, Severity, Side, compare};
use tagdiff_html::{TokenKind, parse_str};

/// Helper to parse both documents and compare them.
fn diff(left: &str, right: &str) -> Comparison {
    compare(&parse_str(left), &parse_str(right))
}

#[test]
fn test_identical_documents_match() {
    let doc = "<html>\n<body>\n<p>hello</p>\n<br/>\n</body>\n</html>";
    let result = diff(doc, doc);
    assert!(result.matched);
    assert!(result.mismatches.is_empty());
}

#[test]
fn test_layout_differences_are_ignored() {
    let result = diff("<p>hello world</p>", "<p>\n  hello\n  world\n</p>");
    assert!(result.matched, "{result:?}");
}

#[test]
fn test_text_difference_is_soft() {
    let result = diff("<a>hi</a>", "<a>bye</a>");
    assert!(!result.matched);
    assert_eq!(result.mismatches.len(), 1);

    let mismatch = &result.mismatches[0];
    assert_eq!(mismatch.severity, Severity::Soft);
    assert_eq!(
        mismatch.left,
        Side {
            line: 1,
            kind: TokenKind::Text,
            value: "hi".to_string()
        }
    );
    assert_eq!(mismatch.right.value, "bye");
}

#[test]
fn test_soft_mismatch_keeps_visiting_siblings() {
    let result = diff(
        "<ul><li>one</li><li>two</li><li>three</li></ul>",
        "<ul><li>uno</li><li>two</li><li>tres</li></ul>",
    );
    assert!(!result.matched);
    assert_eq!(result.soft_count(), 2);
    assert_eq!(result.hard_count(), 0);
    assert_eq!(result.mismatches[0].left.value, "one");
    assert_eq!(result.mismatches[1].left.value, "three");
}

#[test]
fn test_top_level_tag_difference_is_hard_and_stops() {
    let result = diff("<a>x</a>", "<b>y</b>");
    assert!(!result.matched);
    assert_eq!(result.mismatches.len(), 1);

    let mismatch = &result.mismatches[0];
    assert_eq!(mismatch.severity, Severity::Hard);
    assert_eq!(mismatch.left.kind, TokenKind::OpenTag);
    assert_eq!(mismatch.left.value, "a");
    assert_eq!(mismatch.right.value, "b");
}

#[test]
fn test_empty_elements_differing_by_name() {
    let result = diff("<a></a>", "<b></b>");
    assert_eq!(result.hard_count(), 1);
    assert_eq!(result.mismatches.len(), 1);
}

#[test]
fn test_hard_mismatch_skips_later_siblings_at_same_level() {
    // <b> vs <i> is hard; the later text difference on this level is never seen.
    let result = diff("<p><b>x</b>later</p>", "<p><i>x</i>other</p>");
    assert_eq!(result.mismatches.len(), 1);
    assert_eq!(result.mismatches[0].severity, Severity::Hard);
}

#[test]
fn test_hard_mismatch_keeps_earlier_siblings() {
    let result = diff("<p>one<b/>two</p>", "<p>uno<i/>dos</p>");
    assert_eq!(result.mismatches.len(), 2);
    assert_eq!(result.mismatches[0].severity, Severity::Soft);
    assert_eq!(result.mismatches[1].severity, Severity::Hard);
}

#[test]
fn test_hard_mismatch_only_stops_its_own_level() {
    // The hard mismatch inside the first <div> does not stop the walk of the root.
    let result = diff(
        "<div><b/></div><p>left</p>",
        "<div><i/></div><p>right</p>",
    );
    assert_eq!(result.hard_count(), 1);
    assert_eq!(result.soft_count(), 1);
    assert_eq!(result.mismatches[1].left.value, "left");
}

#[test]
fn test_kind_difference_is_hard() {
    let result = diff("<p>text</p>", "<p><br/></p>");
    assert_eq!(result.mismatches.len(), 1);
    assert_eq!(result.mismatches[0].severity, Severity::Hard);
    assert_eq!(result.mismatches[0].left.kind, TokenKind::Text);
    assert_eq!(result.mismatches[0].right.kind, TokenKind::VoidTag);
}

#[test]
fn test_extra_trailing_sibling_is_ignored() {
    // Inside <div>: [<a/>, <b/>, </div>] vs [<a/>, </div>].
    // Position 1 pairs <b/> with </div>, which is a hard mismatch.
    let nested = diff("<div><a/><b/></div>", "<div><a/></div>");
    assert_eq!(nested.hard_count(), 1);

    // At the root the sentinel is the last child, so an extra element shifts it.
    let root = diff("<a/><b/>", "<a/>");
    assert_eq!(root.hard_count(), 1);
    assert_eq!(root.mismatches[0].left.kind, TokenKind::VoidTag);
    assert_eq!(root.mismatches[0].right.kind, TokenKind::EndOfInput);
}

#[test]
fn test_trailing_children_of_longer_list_are_not_visited() {
    use tagdiff_html::{Node, Token};

    // Hand-built trees without a sentinel isolate the truncation rule.
    let mut left = Node::root();
    left.children.push(Node::leaf(Token::void_tag(1, "a")));
    left.children.push(Node::leaf(Token::void_tag(1, "b")));
    let mut right = Node::root();
    right.children.push(Node::leaf(Token::void_tag(1, "a")));

    let result = compare(&left, &right);
    assert!(result.matched);
    assert!(result.mismatches.is_empty());
}

#[test]
fn test_mismatched_closer_names_surface_as_hard_mismatch() {
    let result = diff("<a>text</a>", "<a>text</b>");
    assert_eq!(result.mismatches.len(), 1);
    assert_eq!(result.mismatches[0].severity, Severity::Hard);
    assert_eq!(result.mismatches[0].left.kind, TokenKind::CloseTag);
    assert_eq!(result.mismatches[0].right.value, "b");
}

#[test]
fn test_sentinel_lines_differ_but_still_match() {
    let result = diff("<a/>", "<a/>\n\n\n");
    assert!(result.matched);
}

#[test]
fn test_comparison_serializes_to_json() {
    let result = diff("<a>hi</a>", "<a>bye</a>");
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["matched"], false);
    assert_eq!(json["mismatches"][0]["severity"], "soft");
    assert_eq!(json["mismatches"][0]["left"]["kind"], "text");
    assert_eq!(json["mismatches"][0]["right"]["value"], "bye");
}

#[test]
fn test_deeply_nested_text_difference_is_found() {
    let depth = 100_000;
    let left = format!("{}x{}", "<a>".repeat(depth), "</a>".repeat(depth));
    let right = left.replace('x', "y");

    let result = diff(&left, &right);
    assert!(!result.matched);
    assert_eq!(result.soft_count(), 1);
    assert_eq!(result.hard_count(), 0);
    assert_eq!(result.mismatches[0].left.value, "x");

    let same = diff(&left, &left);
    assert!(same.matched);
}
