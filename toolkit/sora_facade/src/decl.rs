//! Declaration facades: groups, variables, functions.

use crate::attr::{attribute_list_elements, AttributeListElement};
use crate::expr::{expect_expr, Expr};
use crate::types::{expect_type, Type};
use crate::UnsupportedShape;
use sora_syntax::{SyntaxKind, SyntaxNode};

/// An access-level modifier.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum AccessLevel {
    Private,
    Fileprivate,
    Internal,
    Package,
    Public,
    Open,
}

impl AccessLevel {
    fn from_kind(kind: SyntaxKind) -> Option<AccessLevel> {
        match kind {
            SyntaxKind::PrivateKeyword => Some(AccessLevel::Private),
            SyntaxKind::FileprivateKeyword => Some(AccessLevel::Fileprivate),
            SyntaxKind::InternalKeyword => Some(AccessLevel::Internal),
            SyntaxKind::PackageKeyword => Some(AccessLevel::Package),
            SyntaxKind::PublicKeyword => Some(AccessLevel::Public),
            SyntaxKind::OpenKeyword => Some(AccessLevel::Open),
            _ => None,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            AccessLevel::Private => "private",
            AccessLevel::Fileprivate => "fileprivate",
            AccessLevel::Internal => "internal",
            AccessLevel::Package => "package",
            AccessLevel::Public => "public",
            AccessLevel::Open => "open",
        }
    }
}

/// The declaration-context modifier of a member.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DeclContext {
    Instance,
    Static,
    Class,
}

fn access_level_of(node: &SyntaxNode) -> Option<AccessLevel> {
    let modifiers = node.child_node(SyntaxKind::ModifierList)?;
    modifiers
        .child_tokens()
        .find_map(|t| AccessLevel::from_kind(t.kind()))
}

fn decl_context_of(node: &SyntaxNode) -> DeclContext {
    let Some(modifiers) = node.child_node(SyntaxKind::ModifierList) else {
        return DeclContext::Instance;
    };
    for token in modifiers.child_tokens() {
        match token.kind() {
            SyntaxKind::StaticKeyword => return DeclContext::Static,
            SyntaxKind::ClassKeyword => return DeclContext::Class,
            _ => {}
        }
    }
    DeclContext::Instance
}

fn attributes_of(node: &SyntaxNode) -> Vec<AttributeListElement> {
    match node.child_node(SyntaxKind::AttributeList) {
        Some(list) => attribute_list_elements(list),
        None => Vec::new(),
    }
}

macro_rules! decl_groups {
    ($($case:ident => $wrapper:ident),* $(,)?) => {
        /// A classified declaration group.
        #[derive(Clone, Eq, PartialEq, Hash, Debug)]
        pub enum DeclGroup {
            $($case($wrapper),)*
        }

        $(
            #[derive(Clone, Eq, PartialEq, Hash, Debug)]
            pub struct $wrapper {
                node: SyntaxNode,
            }

            impl $wrapper {
                pub fn syntax(&self) -> &SyntaxNode {
                    &self.node
                }
            }
        )*

        impl DeclGroup {
            /// Classify a raw node into a declaration group.
            pub fn classify(node: &SyntaxNode) -> Option<DeclGroup> {
                match node.kind() {
                    $(SyntaxKind::$wrapper => {
                        Some(DeclGroup::$case($wrapper { node: node.clone() }))
                    })*
                    _ => None,
                }
            }

            pub fn syntax(&self) -> &SyntaxNode {
                match self {
                    $(DeclGroup::$case(group) => group.syntax(),)*
                }
            }
        }
    };
}

decl_groups! {
    Struct => StructDecl,
    Class => ClassDecl,
    Enum => EnumDecl,
    Actor => ActorDecl,
    Extension => ExtensionDecl,
    Protocol => ProtocolDecl,
}

impl ExtensionDecl {
    /// The type the extension extends.
    pub fn extended_type(&self) -> Type {
        match self.node.child_nodes().find(|n| n.kind().is_type()) {
            Some(node) => expect_type(node),
            None => panic!("extension without an extended type"),
        }
    }
}

impl DeclGroup {
    /// Like [`DeclGroup::classify`], with a typed error for the miss.
    pub fn try_classify(node: &SyntaxNode) -> Result<DeclGroup, UnsupportedShape> {
        DeclGroup::classify(node).ok_or(UnsupportedShape { kind: node.kind() })
    }

    /// The declared name; for an extension, the extended type's spelling.
    pub fn identifier(&self) -> String {
        match self {
            DeclGroup::Extension(ext) => ext.extended_type().description(),
            _ => match self.syntax().child_token(SyntaxKind::Identifier) {
                Some(token) => token.text().to_owned(),
                None => panic!("declaration group without a name"),
            },
        }
    }

    /// Member declarations, in source order.
    pub fn members(&self) -> Vec<Decl> {
        let Some(block) = self.syntax().child_node(SyntaxKind::MemberBlock) else {
            return Vec::new();
        };
        block
            .child_nodes()
            .map(|n| Decl::classify(n).unwrap_or_else(|| Decl::Other(n.clone())))
            .collect()
    }

    /// The inheritance clause's types, in source order.
    pub fn inherited_types(&self) -> Vec<Type> {
        let Some(clause) = self.syntax().child_node(SyntaxKind::InheritanceClause) else {
            return Vec::new();
        };
        clause
            .child_nodes()
            .filter(|n| n.kind() == SyntaxKind::InheritedType)
            .filter_map(|n| n.child_nodes().next())
            .map(expect_type)
            .collect()
    }

    pub fn access_level(&self) -> Option<AccessLevel> {
        access_level_of(self.syntax())
    }

    pub fn decl_context(&self) -> DeclContext {
        decl_context_of(self.syntax())
    }

    pub fn attributes(&self) -> Vec<AttributeListElement> {
        attributes_of(self.syntax())
    }
}

/// A classified member declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Decl {
    Variable(VariableDecl),
    Function(FunctionDecl),
    Group(DeclGroup),
    EnumCase(SyntaxNode),
    Import(SyntaxNode),
    IfConfig(SyntaxNode),
    /// A declaration the facade does not model, kept as soup.
    Other(SyntaxNode),
}

impl Decl {
    pub fn classify(node: &SyntaxNode) -> Option<Decl> {
        match node.kind() {
            SyntaxKind::VariableDecl => {
                Some(Decl::Variable(VariableDecl { node: node.clone() }))
            }
            SyntaxKind::FunctionDecl => {
                Some(Decl::Function(FunctionDecl { node: node.clone() }))
            }
            SyntaxKind::EnumCaseDecl => Some(Decl::EnumCase(node.clone())),
            SyntaxKind::ImportDecl => Some(Decl::Import(node.clone())),
            SyntaxKind::IfConfigDecl => Some(Decl::IfConfig(node.clone())),
            SyntaxKind::UnknownDecl => Some(Decl::Other(node.clone())),
            _ => DeclGroup::classify(node).map(Decl::Group),
        }
    }

    pub fn syntax(&self) -> &SyntaxNode {
        match self {
            Decl::Variable(decl) => decl.syntax(),
            Decl::Function(decl) => decl.syntax(),
            Decl::Group(group) => group.syntax(),
            Decl::EnumCase(node)
            | Decl::Import(node)
            | Decl::IfConfig(node)
            | Decl::Other(node) => node,
        }
    }
}

/// A `var`/`let` declaration with one or more bindings.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct VariableDecl {
    node: SyntaxNode,
}

impl VariableDecl {
    pub fn classify(node: &SyntaxNode) -> Option<VariableDecl> {
        node.cast(SyntaxKind::VariableDecl)
            .map(|n| VariableDecl { node: n.clone() })
    }

    pub fn syntax(&self) -> &SyntaxNode {
        &self.node
    }

    pub fn is_let(&self) -> bool {
        self.node.child_token(SyntaxKind::LetKeyword).is_some()
    }

    /// The comma-separated bindings, in source order.
    pub fn bindings(&self) -> Vec<PatternBinding> {
        self.node
            .child_nodes()
            .filter(|n| n.kind() == SyntaxKind::PatternBinding)
            .map(|n| PatternBinding { node: n.clone() })
            .collect()
    }

    pub fn access_level(&self) -> Option<AccessLevel> {
        access_level_of(&self.node)
    }

    pub fn decl_context(&self) -> DeclContext {
        decl_context_of(&self.node)
    }

    pub fn attributes(&self) -> Vec<AttributeListElement> {
        attributes_of(&self.node)
    }
}

/// One pattern binding of a variable declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct PatternBinding {
    node: SyntaxNode,
}

impl PatternBinding {
    pub fn syntax(&self) -> &SyntaxNode {
        &self.node
    }

    /// The binding's pattern node (identifier, wildcard, or tuple).
    pub fn pattern(&self) -> &SyntaxNode {
        match self.node.child_nodes().next() {
            Some(node) => node,
            None => panic!("pattern binding without a pattern"),
        }
    }

    /// The explicit type annotation, when present and not a recovery
    /// placeholder.
    pub fn type_annotation(&self) -> Option<Type> {
        let annotation = self.node.child_node(SyntaxKind::TypeAnnotation)?;
        let ty = annotation.child_nodes().find(|n| n.kind().is_type())?;
        if ty.kind() == SyntaxKind::MissingType {
            return None;
        }
        Some(expect_type(ty))
    }

    /// The initializer expression, when present.
    pub fn initializer(&self) -> Option<Expr> {
        let clause = self.node.child_node(SyntaxKind::InitializerClause)?;
        clause.child_nodes().next().map(expect_expr)
    }

    pub fn accessor_block(&self) -> Option<&SyntaxNode> {
        self.node.child_node(SyntaxKind::AccessorBlock)
    }
}

/// A `func` declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FunctionDecl {
    pub(crate) node: SyntaxNode,
}

impl FunctionDecl {
    pub fn classify(node: &SyntaxNode) -> Option<FunctionDecl> {
        node.cast(SyntaxKind::FunctionDecl)
            .map(|n| FunctionDecl { node: n.clone() })
    }

    pub fn syntax(&self) -> &SyntaxNode {
        &self.node
    }

    pub fn name(&self) -> String {
        match self.node.child_token(SyntaxKind::Identifier) {
            Some(token) => token.text().to_owned(),
            None => panic!("function declaration without a name"),
        }
    }

    /// Parameters of the parameter clause, in source order.
    pub fn parameters(&self) -> Vec<FunctionParameter> {
        let Some(clause) = self.node.child_node(SyntaxKind::ParameterClause) else {
            return Vec::new();
        };
        clause
            .child_nodes()
            .filter(|n| n.kind() == SyntaxKind::FunctionParameter)
            .map(|n| FunctionParameter { node: n.clone() })
            .collect()
    }

    /// The declared return type, when a return clause is written.
    pub fn return_type(&self) -> Option<Type> {
        let clause = self.node.child_node(SyntaxKind::ReturnClause)?;
        clause.child_nodes().next().map(expect_type)
    }

    pub fn is_async(&self) -> bool {
        self.has_effect(SyntaxKind::AsyncKeyword)
    }

    pub fn is_throws(&self) -> bool {
        self.has_effect(SyntaxKind::ThrowsKeyword)
            || self.has_effect(SyntaxKind::RethrowsKeyword)
    }

    fn has_effect(&self, kind: SyntaxKind) -> bool {
        self.node
            .child_node(SyntaxKind::EffectSpecifiers)
            .is_some_and(|effects| effects.child_token(kind).is_some())
    }

    /// The brace-delimited body, when present.
    pub fn body(&self) -> Option<&SyntaxNode> {
        self.node.child_node(SyntaxKind::CodeBlock)
    }

    pub fn access_level(&self) -> Option<AccessLevel> {
        access_level_of(&self.node)
    }

    pub fn decl_context(&self) -> DeclContext {
        decl_context_of(&self.node)
    }

    pub fn attributes(&self) -> Vec<AttributeListElement> {
        attributes_of(&self.node)
    }
}

/// One parameter of a function declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FunctionParameter {
    node: SyntaxNode,
}

impl FunctionParameter {
    pub fn syntax(&self) -> &SyntaxNode {
        &self.node
    }

    /// The external argument label (`_` included).
    pub fn label(&self) -> String {
        match self.node.first_token() {
            Some(token) => token.text().to_owned(),
            None => panic!("function parameter without a name"),
        }
    }

    /// The internal name: the second name when two are written, else the
    /// label.
    pub fn name(&self) -> String {
        let names: Vec<&str> = self
            .node
            .child_tokens()
            .take_while(|t| t.kind() != SyntaxKind::Colon)
            .map(|t| t.text())
            .collect();
        match names.as_slice() {
            [only] => (*only).to_owned(),
            [_, second, ..] => (*second).to_owned(),
            [] => panic!("function parameter without a name"),
        }
    }

    pub fn ty(&self) -> Type {
        match self.node.child_nodes().find(|n| n.kind().is_type()) {
            Some(node) => expect_type(node),
            None => panic!("function parameter without a type"),
        }
    }

    pub fn is_variadic(&self) -> bool {
        self.node.child_token(SyntaxKind::Ellipsis).is_some()
    }

    pub fn default_value(&self) -> Option<Expr> {
        let clause = self.node.child_node(SyntaxKind::InitializerClause)?;
        clause.child_nodes().next().map(expect_expr)
    }

    pub fn description(&self) -> String {
        self.node.trimmed_text()
    }
}

#[cfg(test)]
mod tests;
