#![allow(clippy::unwrap_used)]

use crate::types::{Type, TypeSyntax};
use pretty_assertions::assert_eq;
use sora_syntax::parse_type;

fn parse(source: &str) -> Type {
    Type::parse(source).unwrap()
}

#[test]
fn test_classify_simple() {
    let Type::Simple(simple) = parse("Int") else {
        panic!("expected a simple type");
    };
    assert_eq!(simple.name(), "Int");
    assert!(simple.generic_arguments().is_empty());
}

#[test]
fn test_classify_simple_generic() {
    let Type::Simple(simple) = parse("Dictionary<Int, String>") else {
        panic!("expected a simple type");
    };
    assert_eq!(simple.name(), "Dictionary");
    let arguments = simple.generic_arguments();
    assert_eq!(arguments.len(), 2);
    assert_eq!(arguments[0].description(), "Int");
    assert_eq!(arguments[1].description(), "String");
}

#[test]
fn test_classify_array_and_dictionary() {
    let Type::Array(array) = parse("[Int]") else {
        panic!("expected an array type");
    };
    assert_eq!(array.element().description(), "Int");

    let Type::Dictionary(dict) = parse("[Int: String]") else {
        panic!("expected a dictionary type");
    };
    assert_eq!(dict.key().description(), "Int");
    assert_eq!(dict.value().description(), "String");
}

#[test]
fn test_classify_optionals() {
    let Type::Optional(optional) = parse("Int?") else {
        panic!("expected an optional type");
    };
    assert_eq!(optional.wrapped().description(), "Int");

    let Type::ImplicitlyUnwrappedOptional(iuo) = parse("String!") else {
        panic!("expected an implicitly-unwrapped optional");
    };
    assert_eq!(iuo.wrapped().description(), "String");
}

#[test]
fn test_classify_function() {
    let Type::Function(function) = parse("(Int, label: String) async throws -> Bool") else {
        panic!("expected a function type");
    };
    let parameters = function.parameters();
    assert_eq!(parameters.len(), 2);
    assert_eq!(parameters[0].label(), None);
    assert_eq!(parameters[0].ty().description(), "Int");
    assert_eq!(parameters[1].label().as_deref(), Some("label"));
    assert!(function.is_async());
    assert!(function.is_throws());
    assert_eq!(function.return_type().description(), "Bool");
}

#[test]
fn test_classify_tuple() {
    let Type::Tuple(tuple) = parse("(Int, name: String)") else {
        panic!("expected a tuple type");
    };
    let elements = tuple.elements();
    assert_eq!(elements.len(), 2);
    assert_eq!(elements[0].label(), None);
    assert_eq!(elements[1].label().as_deref(), Some("name"));
    assert_eq!(elements[1].ty().description(), "String");
}

#[test]
fn test_classify_member_and_metatype() {
    let Type::Member(member) = parse("Foo.Bar<Int>") else {
        panic!("expected a member type");
    };
    assert_eq!(member.parent().description(), "Foo");
    assert_eq!(member.name(), "Bar");
    assert_eq!(member.generic_arguments().len(), 1);

    let Type::Metatype(meta) = parse("Foo.Type") else {
        panic!("expected a metatype");
    };
    assert_eq!(meta.parent().description(), "Foo");
    assert_eq!(meta.specifier(), "Type");
}

#[test]
fn test_classify_composition_some_any() {
    let Type::Composition(composition) = parse("Codable & Hashable") else {
        panic!("expected a composition");
    };
    assert_eq!(composition.elements().len(), 2);

    let Type::SomeOrAny(some) = parse("some Collection") else {
        panic!("expected some-or-any");
    };
    assert_eq!(some.keyword(), "some");
    assert_eq!(some.constraint().description(), "Collection");
}

#[test]
fn test_classify_pack_and_suppressed() {
    let Type::PackExpansion(expansion) = parse("repeat each T") else {
        panic!("expected a pack expansion");
    };
    assert_eq!(expansion.pattern().description(), "each T");

    let Type::PackReference(reference) = parse("each T") else {
        panic!("expected a pack reference");
    };
    assert_eq!(reference.inner().description(), "T");

    let Type::Suppressed(suppressed) = parse("~Copyable") else {
        panic!("expected a suppressed type");
    };
    assert_eq!(suppressed.inner().description(), "Copyable");
}

#[test]
fn test_classify_class_restriction() {
    assert!(matches!(parse("class"), Type::ClassRestriction(_)));
}

#[test]
fn test_attributed_wrapper_is_peeled_and_kept() {
    let ty = parse("@escaping (Bool) -> Void");
    let Type::Function(function) = &ty else {
        panic!("expected a function type under the wrapper");
    };
    assert!(function.syntax().attributed().is_some());
    assert_eq!(ty.attribute_text(), "@escaping ");
    assert_eq!(ty.description(), "@escaping (Bool) -> Void");
}

#[test]
fn test_inout_specifier_wrapper() {
    let ty = parse("inout Int");
    assert!(matches!(ty, Type::Simple(_)));
    assert_eq!(ty.attribute_text(), "inout ");
}

#[test]
fn test_unattributed_type_has_empty_attribute_text() {
    assert_eq!(parse("Int").attribute_text(), "");
}

#[test]
fn test_classify_rejects_non_type_nodes() {
    let node = sora_syntax::parse_expr("42").unwrap();
    assert_eq!(Type::classify(&node), None);
    assert!(Type::try_classify(&node).is_err());
}

#[test]
fn test_description_strips_outer_trivia_only() {
    let node = parse_type("  [Int:  String] ").unwrap();
    let ty = Type::classify(&node).unwrap();
    assert_eq!(ty.description(), "[Int:  String]");
}

#[test]
fn test_type_syntax_outermost() {
    let node = parse_type("@escaping () -> Void").unwrap();
    let ty = Type::classify(&node).unwrap();
    let syntax: &TypeSyntax = ty.syntax();
    assert_eq!(syntax.outermost(), &node);
    assert_ne!(syntax.base(), &node);
}
