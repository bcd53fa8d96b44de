//! Immutable rewriting helpers on [`FunctionDecl`].
//!
//! Every helper returns a new declaration; the receiver and every node it
//! shares with the result stay untouched. Synthesized tokens carry minimal
//! trivia (a single space where the grammar needs separation); tokens and
//! subtrees reused from the input keep their original trivia.

use crate::attr::AttributeListElement;
use crate::decl::{FunctionDecl, FunctionParameter};
use crate::types::Type;
use sora_syntax::{SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken, Trivia};

impl FunctionDecl {
    /// A copy with the parameter clause rebuilt from `parameters`.
    ///
    /// The original parentheses are kept; parameters are separated by
    /// synthesized `, ` tokens, with their own outer trivia stripped.
    ///
    /// # Panics
    ///
    /// Panics when the declaration has no parameter clause, which the
    /// parser never produces.
    pub fn with_parameters(&self, parameters: &[FunctionParameter]) -> FunctionDecl {
        let Some(index) = self.node.child_index(SyntaxKind::ParameterClause) else {
            panic!("function declaration without a parameter clause");
        };
        let Some(SyntaxElement::Node(clause)) = self.node.children().get(index) else {
            panic!("function declaration without a parameter clause");
        };
        let mut children: Vec<SyntaxElement> = Vec::new();
        if let Some(lparen) = clause.child_token(SyntaxKind::LeftParen) {
            children.push(lparen.clone().into());
        }
        for (i, parameter) in parameters.iter().enumerate() {
            if i > 0 {
                let comma = SyntaxToken::detached(SyntaxKind::Comma, ",")
                    .with_trailing_trivia(Trivia::space());
                children.push(comma.into());
            }
            children.push(
                parameter
                    .syntax()
                    .with_outer_trivia(Trivia::new(), Trivia::new())
                    .into(),
            );
        }
        if let Some(rparen) = clause.child_token(SyntaxKind::RightParen) {
            children.push(rparen.clone().into());
        }
        FunctionDecl {
            node: self.node.replace_child(index, clause.with_children(children)),
        }
    }

    /// A copy with the return clause replaced, added, or (`None`) removed.
    /// The type's attributed wrapper travels with it.
    pub fn with_return_type(&self, return_type: Option<&Type>) -> FunctionDecl {
        let mut children: Vec<SyntaxElement> = self.node.children().to_vec();
        if let Some(index) = self.node.child_index(SyntaxKind::ReturnClause) {
            children.remove(index);
        }
        if let Some(ty) = return_type {
            // Preceding tokens already carry a trailing space; the clause
            // supplies its own separation on the right.
            let arrow = SyntaxToken::detached(SyntaxKind::Arrow, "->")
                .with_trailing_trivia(Trivia::space());
            let ty_node = ty
                .syntax()
                .outermost()
                .with_outer_trivia(Trivia::new(), Trivia::space());
            let clause = SyntaxNode::new(
                SyntaxKind::ReturnClause,
                vec![arrow.into(), ty_node.into()],
            );
            let slot = slot_after(&children, &[
                SyntaxKind::ParameterClause,
                SyntaxKind::EffectSpecifiers,
            ]);
            children.insert(slot, clause.into());
        }
        FunctionDecl {
            node: self.node.with_children(children),
        }
    }

    /// A copy with the body replaced (or appended when the declaration has
    /// none). `body` must be a `CodeBlock` node.
    pub fn with_body(&self, body: &SyntaxNode) -> FunctionDecl {
        let node = match self.node.child_index(SyntaxKind::CodeBlock) {
            Some(index) => self.node.replace_child(index, body.clone()),
            None => {
                let end = self.node.children().len();
                self.node.insert_child(end, body.clone())
            }
        };
        FunctionDecl { node }
    }

    /// A copy with the attribute list rebuilt from `elements`. An empty
    /// slice removes the list entirely.
    pub fn with_attributes(&self, elements: &[AttributeListElement]) -> FunctionDecl {
        let mut children: Vec<SyntaxElement> = self.node.children().to_vec();
        let nodes: Vec<SyntaxElement> = elements
            .iter()
            .map(|el| el.syntax().clone().into())
            .collect();
        match self.node.child_index(SyntaxKind::AttributeList) {
            Some(index) if elements.is_empty() => {
                children.remove(index);
            }
            Some(index) => {
                children[index] = SyntaxNode::new(SyntaxKind::AttributeList, nodes).into();
            }
            None if elements.is_empty() => {}
            None => {
                children.insert(0, SyntaxNode::new(SyntaxKind::AttributeList, nodes).into());
            }
        }
        FunctionDecl {
            node: self.node.with_children(children),
        }
    }

    /// A copy with the `async` effect set or cleared.
    pub fn with_async(&self, is_async: bool) -> FunctionDecl {
        self.with_effects(is_async, self.is_throws())
    }

    /// A copy with the `throws` effect set or cleared.
    pub fn with_throws(&self, throws: bool) -> FunctionDecl {
        self.with_effects(self.is_async(), throws)
    }

    fn with_effects(&self, is_async: bool, throws: bool) -> FunctionDecl {
        let mut children: Vec<SyntaxElement> = self.node.children().to_vec();
        if let Some(index) = self.node.child_index(SyntaxKind::EffectSpecifiers) {
            children.remove(index);
        }
        if is_async || throws {
            let mut tokens: Vec<SyntaxElement> = Vec::new();
            if is_async {
                let token = SyntaxToken::detached(SyntaxKind::AsyncKeyword, "async")
                    .with_trailing_trivia(Trivia::space());
                tokens.push(token.into());
            }
            if throws {
                let token = SyntaxToken::detached(SyntaxKind::ThrowsKeyword, "throws")
                    .with_trailing_trivia(Trivia::space());
                tokens.push(token.into());
            }
            let effects = SyntaxNode::new(SyntaxKind::EffectSpecifiers, tokens);
            let slot = slot_after(&children, &[SyntaxKind::ParameterClause]);
            children.insert(slot, effects.into());
        }
        FunctionDecl {
            node: self.node.with_children(children),
        }
    }
}

/// The insertion index just after the last child of any of `kinds`, or the
/// end of the child list when none is present.
fn slot_after(children: &[SyntaxElement], kinds: &[SyntaxKind]) -> usize {
    let mut slot = children.len();
    for (i, child) in children.iter().enumerate() {
        if kinds.contains(&child.kind()) {
            slot = i + 1;
        }
    }
    slot
}

#[cfg(test)]
mod tests;
