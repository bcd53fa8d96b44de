//! Attribute-list elements and structural-identity filtering.
//!
//! New trees are produced by value, so two occurrences of the same
//! attribute are never pointer-identical. Removal and lookup therefore
//! compare by canonical text (name plus argument content, outer trivia
//! stripped).

use sora_syntax::{SyntaxKind, SyntaxNode};

/// A single `@name(...)` attribute.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Attribute {
    node: SyntaxNode,
}

impl Attribute {
    pub fn classify(node: &SyntaxNode) -> Option<Attribute> {
        node.cast(SyntaxKind::Attribute)
            .map(|n| Attribute { node: n.clone() })
    }

    pub fn syntax(&self) -> &SyntaxNode {
        &self.node
    }

    /// The attribute name, without the `@`.
    pub fn name(&self) -> String {
        match self.node.child_token(SyntaxKind::Identifier) {
            Some(token) => token.text().to_owned(),
            None => panic!("attribute without a name"),
        }
    }

    /// Canonical text used for structural identity.
    pub fn description(&self) -> String {
        self.node.trimmed_text()
    }
}

/// One element of an attribute list: a plain attribute or a
/// conditional-compilation block.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum AttributeListElement {
    Attribute(Attribute),
    IfConfig(SyntaxNode),
}

impl AttributeListElement {
    pub fn classify(node: &SyntaxNode) -> Option<AttributeListElement> {
        match node.kind() {
            SyntaxKind::Attribute => {
                Attribute::classify(node).map(AttributeListElement::Attribute)
            }
            SyntaxKind::IfConfigDecl => Some(AttributeListElement::IfConfig(node.clone())),
            _ => None,
        }
    }

    pub fn syntax(&self) -> &SyntaxNode {
        match self {
            AttributeListElement::Attribute(attr) => attr.syntax(),
            AttributeListElement::IfConfig(node) => node,
        }
    }

    /// Whether this element is `attribute` by structural identity.
    pub fn matches(&self, attribute: &Attribute) -> bool {
        match self {
            AttributeListElement::Attribute(attr) => {
                attr.description() == attribute.description()
            }
            AttributeListElement::IfConfig(_) => false,
        }
    }
}

/// The elements of an `AttributeList` node, in source order.
pub fn attribute_list_elements(list: &SyntaxNode) -> Vec<AttributeListElement> {
    list.child_nodes()
        .filter_map(AttributeListElement::classify)
        .collect()
}

/// A copy of `elements` with every occurrence of `attribute` removed.
/// Order is preserved; an absent attribute leaves the list unchanged.
pub fn removing(
    elements: &[AttributeListElement],
    attribute: &Attribute,
) -> Vec<AttributeListElement> {
    elements
        .iter()
        .filter(|el| !el.matches(attribute))
        .cloned()
        .collect()
}

/// The first plain attribute named `name`, skipping conditional blocks.
pub fn first_called(elements: &[AttributeListElement], name: &str) -> Option<Attribute> {
    elements.iter().find_map(|el| match el {
        AttributeListElement::Attribute(attr) if attr.name() == name => Some(attr.clone()),
        _ => None,
    })
}

#[cfg(test)]
mod tests;
