//! Strongly-typed facades over the Sora concrete syntax tree.
//!
//! The syntax crate hands out loosely-typed nodes identified only by a kind
//! tag. This crate classifies those nodes into closed tagged unions with
//! semantic accessors:
//! - [`Type`]: the fifteen type shapes, with the attributed wrapper carried
//!   alongside the base node so modifiers survive rewrites
//! - [`Expr`]: the expression shapes the property walk and codegen inspect,
//!   with literal values decoded through `sora_literal`
//! - [`DeclGroup`] / [`Decl`]: declaration groups, their members, and the
//!   stored/computed property derivation
//! - attribute-list utilities and immutable rewriting helpers on
//!   [`FunctionDecl`]
//!
//! Classification misses are `None`; [`Type::try_classify`] and friends
//! return [`UnsupportedShape`] when the caller wants a typed error instead.
//! All facade values are cheap views: they hold `Arc`-shared nodes and never
//! mutate the tree they were classified from.

mod attr;
mod builder;
mod decl;
mod error;
mod expr;
mod properties;
mod types;

pub use attr::{attribute_list_elements, first_called, removing, Attribute, AttributeListElement};
pub use decl::{
    AccessLevel, ActorDecl, ClassDecl, Decl, DeclContext, DeclGroup, EnumDecl, ExtensionDecl,
    FunctionDecl, FunctionParameter, PatternBinding, ProtocolDecl, StructDecl, VariableDecl,
};
pub use error::UnsupportedShape;
pub use expr::{
    ArrayExpr, BooleanLiteralExpr, CallArgument, CallExpr, Expr, FloatLiteralExpr, IdentifierExpr,
    IntegerLiteralExpr, MemberAccessExpr, NilLiteralExpr, PrefixExpr, RegexLiteralExpr,
    StringLiteralExpr, TupleExpr, TupleExprElement,
};
pub use properties::Property;
pub use types::{
    ArrayType, ClassRestrictionType, CompositionType, DictionaryType, FunctionType,
    ImplicitlyUnwrappedOptionalType, MemberType, MetatypeType, MissingType, OptionalType,
    PackExpansionType, PackReferenceType, SimpleType, SomeOrAnyType, SuppressedType, TupleElement,
    TupleType, Type, TypeSyntax,
};
