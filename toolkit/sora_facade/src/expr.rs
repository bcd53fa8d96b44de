//! Typed expression facades.
//!
//! Covers the shapes the property walk and codegen inspect. Literal cases
//! decode their values through `sora_literal`; a prefix `-` wrapping a
//! numeric literal is folded into the literal's sign during classification
//! rather than surfacing as a prefix-operator case.

use crate::UnsupportedShape;
use sora_literal::{decode_boolean, decode_float, decode_integer, decode_string};
use sora_syntax::{SyntaxKind, SyntaxNode, SyntaxToken};

/// A classified expression.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Expr {
    IntegerLiteral(IntegerLiteralExpr),
    FloatLiteral(FloatLiteralExpr),
    StringLiteral(StringLiteralExpr),
    BooleanLiteral(BooleanLiteralExpr),
    NilLiteral(NilLiteralExpr),
    RegexLiteral(RegexLiteralExpr),
    Array(ArrayExpr),
    Tuple(TupleExpr),
    Prefix(PrefixExpr),
    MemberAccess(MemberAccessExpr),
    Call(CallExpr),
    Identifier(IdentifierExpr),
    /// Token soup the facade does not model further.
    Other(SyntaxNode),
}

impl Expr {
    /// Classify a raw node into an expression shape.
    pub fn classify(node: &SyntaxNode) -> Option<Expr> {
        match node.kind() {
            SyntaxKind::IntegerLiteralExpr => Some(Expr::IntegerLiteral(IntegerLiteralExpr {
                node: node.clone(),
                negated: false,
            })),
            SyntaxKind::FloatLiteralExpr => Some(Expr::FloatLiteral(FloatLiteralExpr {
                node: node.clone(),
                negated: false,
            })),
            SyntaxKind::StringLiteralExpr => {
                Some(Expr::StringLiteral(StringLiteralExpr { node: node.clone() }))
            }
            SyntaxKind::BooleanLiteralExpr => {
                Some(Expr::BooleanLiteral(BooleanLiteralExpr { node: node.clone() }))
            }
            SyntaxKind::NilLiteralExpr => {
                Some(Expr::NilLiteral(NilLiteralExpr { node: node.clone() }))
            }
            SyntaxKind::RegexLiteralExpr => {
                Some(Expr::RegexLiteral(RegexLiteralExpr { node: node.clone() }))
            }
            SyntaxKind::PrefixOpExpr => Some(classify_prefix(node)),
            SyntaxKind::ArrayExpr => Some(Expr::Array(ArrayExpr { node: node.clone() })),
            SyntaxKind::TupleExpr => Some(Expr::Tuple(TupleExpr { node: node.clone() })),
            SyntaxKind::MemberAccessExpr => {
                Some(Expr::MemberAccess(MemberAccessExpr { node: node.clone() }))
            }
            SyntaxKind::CallExpr => Some(Expr::Call(CallExpr { node: node.clone() })),
            SyntaxKind::IdentifierExpr => {
                Some(Expr::Identifier(IdentifierExpr { node: node.clone() }))
            }
            SyntaxKind::UnknownExpr => Some(Expr::Other(node.clone())),
            _ => None,
        }
    }

    /// Like [`Expr::classify`], with a typed error for the miss.
    pub fn try_classify(node: &SyntaxNode) -> Result<Expr, UnsupportedShape> {
        Expr::classify(node).ok_or(UnsupportedShape { kind: node.kind() })
    }

    pub fn syntax(&self) -> &SyntaxNode {
        match self {
            Expr::IntegerLiteral(e) => &e.node,
            Expr::FloatLiteral(e) => &e.node,
            Expr::StringLiteral(e) => &e.node,
            Expr::BooleanLiteral(e) => &e.node,
            Expr::NilLiteral(e) => &e.node,
            Expr::RegexLiteral(e) => &e.node,
            Expr::Array(e) => &e.node,
            Expr::Tuple(e) => &e.node,
            Expr::Prefix(e) => &e.node,
            Expr::MemberAccess(e) => &e.node,
            Expr::Call(e) => &e.node,
            Expr::Identifier(e) => &e.node,
            Expr::Other(node) => node,
        }
    }

    /// Source text with outer trivia stripped.
    pub fn description(&self) -> String {
        self.syntax().trimmed_text()
    }
}

fn classify_prefix(node: &SyntaxNode) -> Expr {
    let is_minus = node
        .first_token()
        .is_some_and(|t| t.kind() == SyntaxKind::Minus);
    if is_minus {
        // Fold a single leading negation into the literal's sign.
        match node.child_nodes().next().map(SyntaxNode::kind) {
            Some(SyntaxKind::IntegerLiteralExpr) => {
                return Expr::IntegerLiteral(IntegerLiteralExpr {
                    node: node.clone(),
                    negated: true,
                });
            }
            Some(SyntaxKind::FloatLiteralExpr) => {
                return Expr::FloatLiteral(FloatLiteralExpr {
                    node: node.clone(),
                    negated: true,
                });
            }
            _ => {}
        }
    }
    Expr::Prefix(PrefixExpr { node: node.clone() })
}

/// Classify a child node that must be an expression, panicking otherwise.
pub(crate) fn expect_expr(node: &SyntaxNode) -> Expr {
    Expr::classify(node)
        .unwrap_or_else(|| panic!("unsupported expression shape: {:?}", node.kind()))
}

fn literal_token(node: &SyntaxNode) -> &SyntaxToken {
    // For a negated literal the node is the prefix wrapper; the literal
    // token is the last token either way.
    match node.last_token() {
        Some(token) => token,
        None => panic!("literal expression without a token"),
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct IntegerLiteralExpr {
    node: SyntaxNode,
    negated: bool,
}

impl IntegerLiteralExpr {
    pub fn syntax(&self) -> &SyntaxNode {
        &self.node
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// The denoted value.
    pub fn value(&self) -> i64 {
        decode_integer(literal_token(&self.node).text(), self.negated)
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FloatLiteralExpr {
    node: SyntaxNode,
    negated: bool,
}

impl FloatLiteralExpr {
    pub fn syntax(&self) -> &SyntaxNode {
        &self.node
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    pub fn value(&self) -> f64 {
        decode_float(literal_token(&self.node).text(), self.negated)
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct StringLiteralExpr {
    node: SyntaxNode,
}

impl StringLiteralExpr {
    pub fn syntax(&self) -> &SyntaxNode {
        &self.node
    }

    /// The decoded value, or `None` when the literal interpolates.
    pub fn value(&self) -> Option<String> {
        decode_string(literal_token(&self.node).text())
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct BooleanLiteralExpr {
    node: SyntaxNode,
}

impl BooleanLiteralExpr {
    pub fn syntax(&self) -> &SyntaxNode {
        &self.node
    }

    pub fn value(&self) -> bool {
        decode_boolean(literal_token(&self.node).text())
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct NilLiteralExpr {
    node: SyntaxNode,
}

impl NilLiteralExpr {
    pub fn syntax(&self) -> &SyntaxNode {
        &self.node
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct RegexLiteralExpr {
    node: SyntaxNode,
}

impl RegexLiteralExpr {
    pub fn syntax(&self) -> &SyntaxNode {
        &self.node
    }

    /// The pattern between the slash delimiters.
    pub fn pattern(&self) -> String {
        let text = literal_token(&self.node).text();
        text.trim_start_matches('/').trim_end_matches('/').to_owned()
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ArrayExpr {
    node: SyntaxNode,
}

impl ArrayExpr {
    pub fn syntax(&self) -> &SyntaxNode {
        &self.node
    }

    pub fn elements(&self) -> Vec<Expr> {
        self.node
            .child_nodes()
            .filter(|n| n.kind() == SyntaxKind::ArrayElement)
            .map(first_child_expr)
            .collect()
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TupleExpr {
    node: SyntaxNode,
}

impl TupleExpr {
    pub fn syntax(&self) -> &SyntaxNode {
        &self.node
    }

    pub fn elements(&self) -> Vec<TupleExprElement> {
        self.node
            .child_nodes()
            .filter(|n| n.kind() == SyntaxKind::TupleExprElement)
            .map(|n| TupleExprElement { node: n.clone() })
            .collect()
    }
}

/// One element of a tuple or parenthesized expression.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TupleExprElement {
    node: SyntaxNode,
}

impl TupleExprElement {
    pub fn syntax(&self) -> &SyntaxNode {
        &self.node
    }

    pub fn label(&self) -> Option<String> {
        leading_label(&self.node)
    }

    pub fn value(&self) -> Expr {
        first_child_expr(&self.node)
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct PrefixExpr {
    node: SyntaxNode,
}

impl PrefixExpr {
    pub fn syntax(&self) -> &SyntaxNode {
        &self.node
    }

    pub fn operator(&self) -> String {
        match self.node.first_token() {
            Some(token) => token.text().to_owned(),
            None => panic!("prefix expression without an operator"),
        }
    }

    pub fn operand(&self) -> Expr {
        first_child_expr(&self.node)
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct MemberAccessExpr {
    node: SyntaxNode,
}

impl MemberAccessExpr {
    pub fn syntax(&self) -> &SyntaxNode {
        &self.node
    }

    pub fn base(&self) -> Expr {
        first_child_expr(&self.node)
    }

    pub fn name(&self) -> String {
        match self.node.child_token(SyntaxKind::Identifier) {
            Some(token) => token.text().to_owned(),
            None => panic!("member access without a member name"),
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct CallExpr {
    node: SyntaxNode,
}

impl CallExpr {
    pub fn syntax(&self) -> &SyntaxNode {
        &self.node
    }

    pub fn callee(&self) -> Expr {
        first_child_expr(&self.node)
    }

    pub fn arguments(&self) -> Vec<CallArgument> {
        self.node
            .child_nodes()
            .filter(|n| n.kind() == SyntaxKind::CallArgument)
            .map(|n| CallArgument { node: n.clone() })
            .collect()
    }
}

/// One labeled or bare call argument.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct CallArgument {
    node: SyntaxNode,
}

impl CallArgument {
    pub fn syntax(&self) -> &SyntaxNode {
        &self.node
    }

    pub fn label(&self) -> Option<String> {
        leading_label(&self.node)
    }

    pub fn value(&self) -> Expr {
        first_child_expr(&self.node)
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct IdentifierExpr {
    node: SyntaxNode,
}

impl IdentifierExpr {
    pub fn syntax(&self) -> &SyntaxNode {
        &self.node
    }

    pub fn name(&self) -> String {
        match self.node.first_token() {
            Some(token) => token.text().to_owned(),
            None => panic!("identifier expression without a token"),
        }
    }
}

fn first_child_expr(node: &SyntaxNode) -> Expr {
    match node.child_nodes().next() {
        Some(child) => expect_expr(child),
        None => panic!("{:?} node without a child expression", node.kind()),
    }
}

fn leading_label(node: &SyntaxNode) -> Option<String> {
    match node.children().first()?.as_token() {
        Some(token) if token.kind() == SyntaxKind::Identifier => Some(token.text().to_owned()),
        _ => None,
    }
}

#[cfg(test)]
mod tests;
