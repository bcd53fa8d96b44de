//! The fifteen type shapes and their accessors.

use crate::UnsupportedShape;
use sora_syntax::{parse_type, ParseError, SyntaxKind, SyntaxNode};

/// A classified type's nodes: the shape's own node plus the optional
/// enclosing `AttributedType` wrapper carrying `@attr`/specifier modifiers.
///
/// Centralizing the pair here is what keeps attributes from being dropped:
/// every rewrite that re-spells a type goes through [`TypeSyntax`] and must
/// decide what happens to the wrapper explicitly.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeSyntax {
    base: SyntaxNode,
    attributed: Option<SyntaxNode>,
}

impl TypeSyntax {
    /// The shape's own node, inside any attributed wrapper.
    pub fn base(&self) -> &SyntaxNode {
        &self.base
    }

    /// The enclosing `AttributedType` node, when one wraps the base.
    pub fn attributed(&self) -> Option<&SyntaxNode> {
        self.attributed.as_ref()
    }

    /// The outermost node: the attributed wrapper if present, else the base.
    pub fn outermost(&self) -> &SyntaxNode {
        self.attributed.as_ref().unwrap_or(&self.base)
    }

    /// Source text with outer trivia stripped, wrapper included.
    pub fn description(&self) -> String {
        self.outermost().trimmed_text()
    }

    /// The wrapper's modifier prefix text, with a trailing space so it can
    /// be prepended to a synthesized spelling. Empty when unattributed.
    pub fn attribute_text(&self) -> String {
        let Some(attributed) = &self.attributed else {
            return String::new();
        };
        let children = attributed.children();
        let prefix = children[..children.len().saturating_sub(1)].to_vec();
        let text = SyntaxNode::new(SyntaxKind::AttributedType, prefix).trimmed_text();
        if text.is_empty() {
            text
        } else {
            format!("{text} ")
        }
    }
}

macro_rules! type_variants {
    ($($case:ident => $wrapper:ident),* $(,)?) => {
        /// A classified type. One case per shape in the accepted grammar.
        #[derive(Clone, Eq, PartialEq, Hash, Debug)]
        pub enum Type {
            $($case($wrapper),)*
        }

        $(
            #[derive(Clone, Eq, PartialEq, Hash, Debug)]
            pub struct $wrapper {
                syntax: TypeSyntax,
            }

            impl $wrapper {
                pub fn syntax(&self) -> &TypeSyntax {
                    &self.syntax
                }

                pub fn description(&self) -> String {
                    self.syntax.description()
                }
            }
        )*

        impl Type {
            /// Classify a raw node into a type shape.
            ///
            /// An `AttributedType` wrapper is peeled first and carried in the
            /// result's [`TypeSyntax`]; the base node then selects the case.
            /// Returns `None` when the node is not a type the facade models.
            pub fn classify(node: &SyntaxNode) -> Option<Type> {
                let (attributed, base) = split_attributed(node);
                let syntax = TypeSyntax { base, attributed };
                match syntax.base.kind() {
                    $(SyntaxKind::$wrapper => Some(Type::$case($wrapper { syntax })),)*
                    _ => None,
                }
            }

            pub fn syntax(&self) -> &TypeSyntax {
                match self {
                    $(Type::$case(ty) => ty.syntax(),)*
                }
            }
        }
    };
}

type_variants! {
    Array => ArrayType,
    ClassRestriction => ClassRestrictionType,
    Composition => CompositionType,
    Dictionary => DictionaryType,
    Function => FunctionType,
    ImplicitlyUnwrappedOptional => ImplicitlyUnwrappedOptionalType,
    Member => MemberType,
    Metatype => MetatypeType,
    Missing => MissingType,
    Optional => OptionalType,
    PackExpansion => PackExpansionType,
    PackReference => PackReferenceType,
    Simple => SimpleType,
    SomeOrAny => SomeOrAnyType,
    Suppressed => SuppressedType,
    Tuple => TupleType,
}

fn split_attributed(node: &SyntaxNode) -> (Option<SyntaxNode>, SyntaxNode) {
    if node.kind() != SyntaxKind::AttributedType {
        return (None, node.clone());
    }
    // The wrapped base is the last type-kinded child; attribute arguments
    // are `Attribute` nodes and never type-kinded.
    match node.child_nodes().filter(|n| n.kind().is_type()).last() {
        Some(base) => (Some(node.clone()), base.clone()),
        None => (None, node.clone()),
    }
}

/// Classify a node that must be a type, panicking on anything else.
///
/// Used for children the parser guarantees are type nodes; a miss here is
/// an incomplete case list, not user input.
pub(crate) fn expect_type(node: &SyntaxNode) -> Type {
    Type::classify(node)
        .unwrap_or_else(|| panic!("unsupported type shape: {:?}", node.kind()))
}

impl Type {
    /// Like [`Type::classify`], with a typed error for the miss.
    pub fn try_classify(node: &SyntaxNode) -> Result<Type, UnsupportedShape> {
        Type::classify(node).ok_or(UnsupportedShape { kind: node.kind() })
    }

    /// Parse and classify a standalone type spelling.
    pub fn parse(source: &str) -> Result<Type, ParseError> {
        let node = parse_type(source)?;
        // The type parser only emits the shapes classified above.
        Ok(expect_type(&node))
    }

    /// Source text with outer trivia stripped, attributed wrapper included.
    pub fn description(&self) -> String {
        self.syntax().description()
    }

    /// The attributed wrapper's modifier prefix text, or empty.
    pub fn attribute_text(&self) -> String {
        self.syntax().attribute_text()
    }
}

fn first_child_type(node: &SyntaxNode) -> Type {
    match node.child_nodes().next() {
        Some(child) => expect_type(child),
        None => panic!("{:?} node without a child type", node.kind()),
    }
}

impl ArrayType {
    /// The element type of `[T]`.
    pub fn element(&self) -> Type {
        first_child_type(self.syntax.base())
    }
}

impl DictionaryType {
    /// The key type of `[K: V]`.
    pub fn key(&self) -> Type {
        first_child_type(self.syntax.base())
    }

    /// The value type of `[K: V]`.
    pub fn value(&self) -> Type {
        match self.syntax.base().child_nodes().nth(1) {
            Some(child) => expect_type(child),
            None => panic!("dictionary type without a value type"),
        }
    }
}

impl OptionalType {
    /// The wrapped type of `T?`.
    pub fn wrapped(&self) -> Type {
        first_child_type(self.syntax.base())
    }
}

impl ImplicitlyUnwrappedOptionalType {
    /// The wrapped type of `T!`.
    pub fn wrapped(&self) -> Type {
        first_child_type(self.syntax.base())
    }
}

impl SomeOrAnyType {
    /// `"some"` or `"any"`.
    pub fn keyword(&self) -> String {
        match self.syntax.base().first_token() {
            Some(token) => token.text().to_owned(),
            None => panic!("some-or-any type without a keyword"),
        }
    }

    pub fn constraint(&self) -> Type {
        first_child_type(self.syntax.base())
    }
}

impl SuppressedType {
    /// The suppressed conformance of `~T`.
    pub fn inner(&self) -> Type {
        first_child_type(self.syntax.base())
    }
}

impl PackExpansionType {
    /// The repeated pattern of `repeat T`.
    pub fn pattern(&self) -> Type {
        first_child_type(self.syntax.base())
    }
}

impl PackReferenceType {
    /// The referenced pack of `each T`.
    pub fn inner(&self) -> Type {
        first_child_type(self.syntax.base())
    }
}

impl SimpleType {
    /// The type name.
    pub fn name(&self) -> String {
        match self.syntax.base().first_token() {
            Some(token) => token.text().to_owned(),
            None => panic!("simple type without a name"),
        }
    }

    /// Generic arguments, empty when the spelling carries none.
    pub fn generic_arguments(&self) -> Vec<Type> {
        generic_arguments_of(self.syntax.base())
    }
}

impl MemberType {
    /// The qualifying type of `Base.Name`.
    pub fn parent(&self) -> Type {
        first_child_type(self.syntax.base())
    }

    /// The member name.
    pub fn name(&self) -> String {
        match self.syntax.base().child_token(SyntaxKind::Identifier) {
            Some(token) => token.text().to_owned(),
            None => panic!("member type without a name"),
        }
    }

    pub fn generic_arguments(&self) -> Vec<Type> {
        generic_arguments_of(self.syntax.base())
    }
}

impl MetatypeType {
    /// The instance type of `Base.Type` / `Base.Protocol`.
    pub fn parent(&self) -> Type {
        first_child_type(self.syntax.base())
    }

    /// `"Type"` or `"Protocol"`.
    pub fn specifier(&self) -> String {
        match self.syntax.base().child_token(SyntaxKind::Identifier) {
            Some(token) => token.text().to_owned(),
            None => panic!("metatype without a specifier"),
        }
    }
}

impl CompositionType {
    /// The conjoined types of `A & B & C`, in order.
    pub fn elements(&self) -> Vec<Type> {
        self.syntax.base().child_nodes().map(expect_type).collect()
    }
}

impl TupleType {
    pub fn elements(&self) -> Vec<TupleElement> {
        tuple_elements_of(self.syntax.base())
    }
}

impl FunctionType {
    /// Parameter elements with labels and ellipses preserved.
    pub fn parameters(&self) -> Vec<TupleElement> {
        match self.syntax.base().child_node(SyntaxKind::FunctionTypeParameterList) {
            Some(list) => tuple_elements_of(list),
            None => panic!("function type without a parameter list"),
        }
    }

    pub fn return_type(&self) -> Type {
        // Children: parameter list, optional effects, arrow token, return
        // type. The last child node is always the return type.
        match self.syntax.base().child_nodes().last() {
            Some(node) => expect_type(node),
            None => panic!("function type without a return type"),
        }
    }

    pub fn is_async(&self) -> bool {
        self.has_effect(SyntaxKind::AsyncKeyword)
    }

    pub fn is_throws(&self) -> bool {
        self.has_effect(SyntaxKind::ThrowsKeyword)
            || self.has_effect(SyntaxKind::RethrowsKeyword)
    }

    fn has_effect(&self, kind: SyntaxKind) -> bool {
        self.syntax
            .base()
            .child_node(SyntaxKind::EffectSpecifiers)
            .is_some_and(|effects| effects.child_token(kind).is_some())
    }
}

/// One element of a tuple type or function-type parameter list.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TupleElement {
    node: SyntaxNode,
}

impl TupleElement {
    pub fn syntax(&self) -> &SyntaxNode {
        &self.node
    }

    /// The element label, `_` included, when one is written.
    pub fn label(&self) -> Option<String> {
        match self.node.children().first()?.as_token() {
            Some(token)
                if matches!(
                    token.kind(),
                    SyntaxKind::Identifier | SyntaxKind::Underscore
                ) =>
            {
                Some(token.text().to_owned())
            }
            _ => None,
        }
    }

    pub fn ty(&self) -> Type {
        first_child_type(&self.node)
    }

    /// Whether the element carries a variadic `...` marker.
    pub fn has_ellipsis(&self) -> bool {
        self.node.child_token(SyntaxKind::Ellipsis).is_some()
    }

    pub fn description(&self) -> String {
        self.node.trimmed_text()
    }
}

fn tuple_elements_of(node: &SyntaxNode) -> Vec<TupleElement> {
    node.child_nodes()
        .filter(|n| n.kind() == SyntaxKind::TupleTypeElement)
        .map(|n| TupleElement { node: n.clone() })
        .collect()
}

fn generic_arguments_of(node: &SyntaxNode) -> Vec<Type> {
    let Some(list) = node.child_node(SyntaxKind::GenericArgumentList) else {
        return Vec::new();
    };
    list.child_nodes()
        .filter(|n| n.kind() == SyntaxKind::GenericArgument)
        .map(first_child_type)
        .collect()
}

#[cfg(test)]
mod tests;
