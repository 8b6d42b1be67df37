//! Lockstep comparison of two document trees.
//!
//! # Algorithm
//!
//! Both trees are walked depth-first, pre-order. At each level the children
//! are paired by position only, and only as many pairs as the shorter list
//! holds are looked at; trailing extra children are never visited.
//!
//! For each pair:
//! - **Soft mismatch** - both are text and the text differs. Recorded, and
//!   the walk moves on to the next pair.
//! - **Hard mismatch** - the kinds differ, or two tags have different names.
//!   Recorded, and the rest of this level is abandoned.
//! - **Match** - the walk descends into both nodes' children.
//!
//! Any mismatch turns the verdict to "do not match" for good.

use serde::Serialize;
use strum_macros::Display;
use tagdiff_html::{Node, Token, TokenKind};

/// How a mismatch affects the rest of the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Text differs; the walk continues with the next sibling pair.
    Soft,
    /// Kind or tag name differs; remaining siblings at this level are skipped.
    Hard,
}

impl Severity {
    /// Word used in reports for what the walk did next.
    #[must_use]
    pub const fn outcome(self) -> &'static str {
        match self {
            Self::Soft => "continuing",
            Self::Hard => "aborting",
        }
    }
}

/// One document's side of a mismatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Side {
    /// 1-indexed line of the token.
    pub line: usize,
    /// Kind of the token.
    pub kind: TokenKind,
    /// Tag name or text.
    pub value: String,
}

impl From<&Token> for Side {
    fn from(token: &Token) -> Self {
        Self {
            line: token.line,
            kind: token.kind,
            value: token.value.clone(),
        }
    }
}

/// A single point where the two trees diverge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    /// Soft (text) or hard (structure).
    pub severity: Severity,
    /// The first document's token.
    pub left: Side,
    /// The second document's token.
    pub right: Side,
}

/// Result of comparing two trees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    /// True only if no mismatch was found anywhere in the walk.
    pub matched: bool,
    /// Mismatches in the order the walk found them.
    pub mismatches: Vec<Mismatch>,
}

impl Default for Comparison {
    fn default() -> Self {
        Self {
            matched: true,
            mismatches: Vec::new(),
        }
    }
}

impl Comparison {
    /// Number of soft mismatches.
    #[must_use]
    pub fn soft_count(&self) -> usize {
        self.count(Severity::Soft)
    }

    /// Number of hard mismatches.
    #[must_use]
    pub fn hard_count(&self) -> usize {
        self.count(Severity::Hard)
    }

    fn count(&self, severity: Severity) -> usize {
        self.mismatches
            .iter()
            .filter(|m| m.severity == severity)
            .count()
    }

    fn record(&mut self, severity: Severity, left: &Token, right: &Token) {
        self.matched = false;
        self.mismatches.push(Mismatch {
            severity,
            left: left.into(),
            right: right.into(),
        });
    }
}

/// Classify a pair of tokens. `None` means they match.
#[must_use]
pub fn classify(left: &Token, right: &Token) -> Option<Severity> {
    if left.is_text() && right.is_text() {
        return (!left.same_value(right)).then_some(Severity::Soft);
    }
    if left.same_kind(right) && left.same_value(right) {
        None
    } else {
        Some(Severity::Hard)
    }
}

/// Compare two trees from their roots.
#[must_use]
pub fn compare(left: &Node, right: &Node) -> Comparison {
    let mut comparison = Comparison::default();
    walk(&mut comparison, left, right);
    comparison
}

/// Pre-order walk with an explicit stack of sibling pairings, one per open
/// level, so nesting depth never grows the call stack.
fn walk(comparison: &mut Comparison, left: &Node, right: &Node) {
    let mut levels = vec![left.children.iter().zip(&right.children)];
    while let Some(pairs) = levels.last_mut() {
        let Some((l, r)) = pairs.next() else {
            let _ = levels.pop();
            continue;
        };
        let (Some(left_token), Some(right_token)) = (&l.token, &r.token) else {
            // Only the root lacks a token, and roots are never children.
            continue;
        };
        match classify(left_token, right_token) {
            None => levels.push(l.children.iter().zip(&r.children)),
            Some(Severity::Soft) => {
                // Text nodes are leaves, so the walk just moves to the next pair.
                comparison.record(Severity::Soft, left_token, right_token);
            }
            Some(Severity::Hard) => {
                comparison.record(Severity::Hard, left_token, right_token);
                let _ = levels.pop();
            }
        }
    }
}
