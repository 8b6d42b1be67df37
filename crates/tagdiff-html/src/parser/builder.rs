use std::fmt::{self, Write as _};

use tagdiff_common::warning::warn_once;

use crate::tokenizer::{Token, TokenKind};

/// A node of the document tree.
///
/// The root carries no token. Every other node wraps exactly one token, and
/// only nodes built from an opening tag ever have children. A node owns its
/// children outright; there are no parent links.
///
/// Nesting depth is bounded only by the input, so cloning, comparing and
/// dropping walk the tree with an explicit stack instead of recursing.
#[derive(Debug, Default)]
pub struct Node {
    /// The token this node was built from, `None` for the root.
    pub token: Option<Token>,
    /// Children in document order.
    pub children: Vec<Self>,
}

impl Node {
    /// Create an empty root node.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            token: None,
            children: Vec::new(),
        }
    }

    /// Create a childless node wrapping `token`.
    #[must_use]
    pub const fn leaf(token: Token) -> Self {
        Self {
            token: Some(token),
            children: Vec::new(),
        }
    }

    /// Kind of the wrapped token, `None` for the root.
    #[must_use]
    pub fn kind(&self) -> Option<TokenKind> {
        self.token.as_ref().map(|token| token.kind)
    }

    /// Returns true if this node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of levels in the tree, counting this node as level one.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1)];
        while let Some((node, level)) = pending.pop() {
            deepest = deepest.max(level);
            pending.extend(node.children.iter().map(|child| (child, level + 1)));
        }
        deepest
    }
}

impl Clone for Node {
    fn clone(&self) -> Self {
        let shell = |node: &Self| Self {
            token: node.token.clone(),
            children: Vec::with_capacity(node.children.len()),
        };
        // Each frame: source node, index of its next child to copy, the copy.
        let mut frames = vec![(self, 0, shell(self))];
        while let Some(frame) = frames.last_mut() {
            let source: &Self = frame.0;
            if let Some(child) = source.children.get(frame.1) {
                frame.1 += 1;
                frames.push((child, 0, shell(child)));
            } else if let Some((_, _, copy)) = frames.pop() {
                match frames.last_mut() {
                    Some((_, _, parent)) => parent.children.push(copy),
                    None => return copy,
                }
            }
        }
        Self::root()
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((left, right)) = pending.pop() {
            if left.token != right.token || left.children.len() != right.children.len() {
                return false;
            }
            pending.extend(left.children.iter().zip(&right.children));
        }
        true
    }
}

impl Eq for Node {}

impl Drop for Node {
    fn drop(&mut self) {
        // Detach every descendant first so no drop ever recurses.
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Something structurally odd the builder noticed and tolerated.
///
/// These never change the tree that gets built; they are reported so the
/// caller can explain why two trees have different shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildIssue {
    /// A closing tag at the top level with nothing open to close.
    UnmatchedClose {
        /// Line of the closing tag.
        line: usize,
        /// Its tag name.
        name: String,
    },
    /// An opening tag still open when the tokens ran out.
    Unclosed {
        /// Line of the opening tag.
        line: usize,
        /// Its tag name.
        name: String,
    },
}

impl fmt::Display for BuildIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnmatchedClose { line, name } => {
                write!(f, "line {line}: closing tag </{name}> has no matching opener")
            }
            Self::Unclosed { line, name } => {
                write!(f, "line {line}: tag <{name}> is never closed")
            }
        }
    }
}

/// Builds a [`Node`] tree from a token list.
///
/// Nesting is purely depth-based: an opening tag starts a new level and the
/// next closing tag, whatever its name, ends it. The closing tag itself is
/// kept as the last child of the level it ends.
pub struct TreeBuilder {
    tokens: Vec<Token>,
    /// Index of the next token to pull.
    cursor: usize,
    /// Levels still open, the root at the bottom.
    open: Vec<Node>,
    issues: Vec<BuildIssue>,
}

impl TreeBuilder {
    /// Create a builder over a materialized token list.
    #[must_use]
    pub const fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            cursor: 0,
            open: Vec::new(),
            issues: Vec::new(),
        }
    }

    /// Build the tree, placing the end-of-input sentinel on `end_line`.
    #[must_use]
    pub fn run(self, end_line: usize) -> Node {
        self.run_with_issues(end_line).0
    }

    /// Build the tree and return it with any tolerated structural issues.
    #[must_use]
    pub fn run_with_issues(mut self, end_line: usize) -> (Node, Vec<BuildIssue>) {
        self.open.push(Node::root());
        while let Some(token) = self.next_token() {
            match token.kind {
                TokenKind::OpenTag => self.open.push(Node::leaf(token)),
                TokenKind::CloseTag => self.close_level(token),
                TokenKind::VoidTag | TokenKind::Text | TokenKind::EndOfInput => {
                    self.current().children.push(Node::leaf(token));
                }
            }
        }

        // Whatever is still open at the end is folded back into its parent.
        while self.open.len() > 1 {
            let Some(unclosed) = self.open.pop() else {
                break;
            };
            if let Some(opener) = &unclosed.token {
                self.issues.push(BuildIssue::Unclosed {
                    line: opener.line,
                    name: opener.value.clone(),
                });
            }
            self.current().children.push(unclosed);
        }

        let mut root = self.open.pop().unwrap_or_default();
        root.children.push(Node::leaf(Token::end_of_input(end_line)));
        (root, self.issues)
    }

    fn next_token(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.cursor)?.clone();
        self.cursor += 1;
        Some(token)
    }

    /// The innermost open level. The root is pushed before any token is
    /// pulled and never popped until the end, so the stack is never empty
    /// while tokens remain.
    fn current(&mut self) -> &mut Node {
        if self.open.is_empty() {
            self.open.push(Node::root());
        }
        let last = self.open.len() - 1;
        &mut self.open[last]
    }

    /// A closing tag ends the innermost level. The top level never unwinds:
    /// a closing tag with nothing open is kept as a leaf of the root and
    /// building carries on with the next token.
    fn close_level(&mut self, token: Token) {
        if self.open.len() <= 1 {
            warn_once(
                "Tree Builder",
                &format!(
                    "line {}: closing tag </{}> has no matching opener",
                    token.line, token.value
                ),
            );
            self.issues.push(BuildIssue::UnmatchedClose {
                line: token.line,
                name: token.value.clone(),
            });
            self.current().children.push(Node::leaf(token));
            return;
        }

        self.current().children.push(Node::leaf(token));
        if let Some(closed) = self.open.pop() {
            self.current().children.push(closed);
        }
    }
}

/// Render a tree as indented text, one node per line.
#[must_use]
pub fn dump_tree(node: &Node) -> String {
    let mut out = String::new();
    let mut pending = vec![(node, 0)];
    while let Some((node, indent)) = pending.pop() {
        let prefix = "  ".repeat(indent);
        let _ = match &node.token {
            None => writeln!(out, "{prefix}Document"),
            Some(token) => writeln!(out, "{prefix}{token} @{}", token.line),
        };
        pending.extend(node.children.iter().rev().map(|child| (child, indent + 1)));
    }
    out
}
