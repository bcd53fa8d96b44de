//! Immutable syntax nodes with persistent rewrites.

use crate::{SyntaxKind, SyntaxToken, Trivia};
use std::fmt;
use std::sync::Arc;

/// A child slot of a node: either a nested node or a token.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum SyntaxElement {
    Node(SyntaxNode),
    Token(SyntaxToken),
}

impl SyntaxElement {
    /// The kind tag of the element.
    pub fn kind(&self) -> SyntaxKind {
        match self {
            SyntaxElement::Node(node) => node.kind(),
            SyntaxElement::Token(token) => token.kind(),
        }
    }

    pub fn as_node(&self) -> Option<&SyntaxNode> {
        match self {
            SyntaxElement::Node(node) => Some(node),
            SyntaxElement::Token(_) => None,
        }
    }

    pub fn as_token(&self) -> Option<&SyntaxToken> {
        match self {
            SyntaxElement::Token(token) => Some(token),
            SyntaxElement::Node(_) => None,
        }
    }
}

impl From<SyntaxNode> for SyntaxElement {
    fn from(node: SyntaxNode) -> Self {
        SyntaxElement::Node(node)
    }
}

impl From<SyntaxToken> for SyntaxElement {
    fn from(token: SyntaxToken) -> Self {
        SyntaxElement::Token(token)
    }
}

/// A kind-tagged, immutable syntax node.
///
/// Nodes are shared behind an `Arc`; clones are cheap handles. Rewrites
/// (`replace_child`, `with_children`) allocate a new node and share every
/// untouched child with the original, so old handles keep observing the
/// tree they were created from.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct SyntaxNode(Arc<NodeData>);

#[derive(Eq, PartialEq, Hash)]
struct NodeData {
    kind: SyntaxKind,
    children: Box<[SyntaxElement]>,
}

impl SyntaxNode {
    /// Create a node from its children.
    pub fn new(kind: SyntaxKind, children: Vec<SyntaxElement>) -> Self {
        SyntaxNode(Arc::new(NodeData {
            kind,
            children: children.into_boxed_slice(),
        }))
    }

    #[inline]
    pub fn kind(&self) -> SyntaxKind {
        self.0.kind
    }

    /// Safe downcast-by-kind: `Some(self)` iff the kind matches.
    pub fn cast(&self, kind: SyntaxKind) -> Option<&SyntaxNode> {
        (self.0.kind == kind).then_some(self)
    }

    /// All children in order.
    pub fn children(&self) -> &[SyntaxElement] {
        &self.0.children
    }

    /// Child nodes only, skipping tokens.
    pub fn child_nodes(&self) -> impl Iterator<Item = &SyntaxNode> {
        self.0.children.iter().filter_map(SyntaxElement::as_node)
    }

    /// Child tokens only, skipping nodes.
    pub fn child_tokens(&self) -> impl Iterator<Item = &SyntaxToken> {
        self.0.children.iter().filter_map(SyntaxElement::as_token)
    }

    /// First direct child (node or token) with the given kind.
    pub fn child_of_kind(&self, kind: SyntaxKind) -> Option<&SyntaxElement> {
        self.0.children.iter().find(|c| c.kind() == kind)
    }

    /// First direct child node with the given kind.
    pub fn child_node(&self, kind: SyntaxKind) -> Option<&SyntaxNode> {
        self.child_nodes().find(|n| n.kind() == kind)
    }

    /// First direct child token with the given kind.
    pub fn child_token(&self, kind: SyntaxKind) -> Option<&SyntaxToken> {
        self.child_tokens().find(|t| t.kind() == kind)
    }

    /// Index of the first direct child with the given kind.
    pub fn child_index(&self, kind: SyntaxKind) -> Option<usize> {
        self.0.children.iter().position(|c| c.kind() == kind)
    }

    /// The first token in this subtree, in source order.
    pub fn first_token(&self) -> Option<&SyntaxToken> {
        for child in self.0.children.iter() {
            match child {
                SyntaxElement::Token(token) => return Some(token),
                SyntaxElement::Node(node) => {
                    if let Some(token) = node.first_token() {
                        return Some(token);
                    }
                }
            }
        }
        None
    }

    /// The last token in this subtree, in source order.
    pub fn last_token(&self) -> Option<&SyntaxToken> {
        for child in self.0.children.iter().rev() {
            match child {
                SyntaxElement::Token(token) => return Some(token),
                SyntaxElement::Node(node) => {
                    if let Some(token) = node.last_token() {
                        return Some(token);
                    }
                }
            }
        }
        None
    }

    /// Exact source text of this subtree, trivia included.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.write_text(&mut out);
        out
    }

    fn write_text(&self, out: &mut String) {
        for child in self.0.children.iter() {
            match child {
                SyntaxElement::Token(token) => {
                    out.push_str(&token.leading_trivia().text());
                    out.push_str(token.text());
                    out.push_str(&token.trailing_trivia().text());
                }
                SyntaxElement::Node(node) => node.write_text(out),
            }
        }
    }

    /// Source text with the subtree's outer trivia stripped.
    ///
    /// Interior trivia between tokens is preserved; only the leading trivia
    /// of the first token and the trailing trivia of the last are dropped.
    pub fn trimmed_text(&self) -> String {
        let mut tokens = Vec::new();
        self.collect_tokens(&mut tokens);
        let mut out = String::new();
        let last = tokens.len().saturating_sub(1);
        for (i, token) in tokens.iter().enumerate() {
            if i != 0 {
                out.push_str(&token.leading_trivia().text());
            }
            out.push_str(token.text());
            if i != last {
                out.push_str(&token.trailing_trivia().text());
            }
        }
        out
    }

    fn collect_tokens<'a>(&'a self, out: &mut Vec<&'a SyntaxToken>) {
        for child in self.0.children.iter() {
            match child {
                SyntaxElement::Token(token) => out.push(token),
                SyntaxElement::Node(node) => node.collect_tokens(out),
            }
        }
    }

    /// Persistent single-slot rewrite: a new node with the child at `index`
    /// replaced. All other children are shared with the original.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds; child indices come from the same
    /// node, so an out-of-bounds index is a caller bug.
    pub fn replace_child(&self, index: usize, element: impl Into<SyntaxElement>) -> SyntaxNode {
        assert!(
            index < self.0.children.len(),
            "child index {index} out of bounds for {:?}",
            self.0.kind
        );
        let mut children = self.0.children.to_vec();
        children[index] = element.into();
        SyntaxNode::new(self.0.kind, children)
    }

    /// A new node of the same kind with entirely new children.
    pub fn with_children(&self, children: Vec<SyntaxElement>) -> SyntaxNode {
        SyntaxNode::new(self.0.kind, children)
    }

    /// A new node with `element` inserted at `index`.
    pub fn insert_child(&self, index: usize, element: impl Into<SyntaxElement>) -> SyntaxNode {
        let mut children = self.0.children.to_vec();
        children.insert(index, element.into());
        SyntaxNode::new(self.0.kind, children)
    }

    /// A new node with the child at `index` removed.
    pub fn remove_child(&self, index: usize) -> SyntaxNode {
        let mut children = self.0.children.to_vec();
        children.remove(index);
        SyntaxNode::new(self.0.kind, children)
    }

    /// The same subtree with outer trivia replaced.
    ///
    /// Used when splicing a parsed fragment into a synthesized tree.
    pub fn with_outer_trivia(&self, leading: Trivia, trailing: Trivia) -> SyntaxNode {
        let node = self.map_first_token(&|t| t.with_leading_trivia(leading.clone()));
        node.map_last_token(&|t| t.with_trailing_trivia(trailing.clone()))
    }

    fn map_first_token(&self, f: &dyn Fn(&SyntaxToken) -> SyntaxToken) -> SyntaxNode {
        for (i, child) in self.0.children.iter().enumerate() {
            match child {
                SyntaxElement::Token(token) => {
                    return self.replace_child(i, f(token));
                }
                SyntaxElement::Node(node) => {
                    if node.first_token().is_some() {
                        return self.replace_child(i, node.map_first_token(f));
                    }
                }
            }
        }
        self.clone()
    }

    fn map_last_token(&self, f: &dyn Fn(&SyntaxToken) -> SyntaxToken) -> SyntaxNode {
        for (i, child) in self.0.children.iter().enumerate().rev() {
            match child {
                SyntaxElement::Token(token) => {
                    return self.replace_child(i, f(token));
                }
                SyntaxElement::Node(node) => {
                    if node.last_token().is_some() {
                        return self.replace_child(i, node.map_last_token(f));
                    }
                }
            }
        }
        self.clone()
    }
}

impl fmt::Debug for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0.kind)?;
        f.debug_list().entries(self.0.children.iter()).finish()
    }
}

impl fmt::Display for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}
