#![allow(clippy::unwrap_used)]

use crate::{parse_expr, parse_source, parse_type, SyntaxKind};
use pretty_assertions::assert_eq;

#[test]
fn test_simple_type() {
    let ty = parse_type("Int").unwrap();
    assert_eq!(ty.kind(), SyntaxKind::SimpleType);
    assert_eq!(ty.trimmed_text(), "Int");
}

#[test]
fn test_generic_simple_type() {
    let ty = parse_type("Dictionary<Int, String>").unwrap();
    assert_eq!(ty.kind(), SyntaxKind::SimpleType);
    let args = ty.child_node(SyntaxKind::GenericArgumentList).unwrap();
    assert_eq!(args.child_nodes().count(), 2);
}

#[test]
fn test_sugar_type_shapes() {
    assert_eq!(parse_type("[Int]").unwrap().kind(), SyntaxKind::ArrayType);
    assert_eq!(
        parse_type("[Int: String]").unwrap().kind(),
        SyntaxKind::DictionaryType
    );
    assert_eq!(parse_type("Int?").unwrap().kind(), SyntaxKind::OptionalType);
    assert_eq!(
        parse_type("Int!").unwrap().kind(),
        SyntaxKind::ImplicitlyUnwrappedOptionalType
    );
}

#[test]
fn test_nested_generics() {
    let ty = parse_type("Array<Array<Int>>").unwrap();
    assert_eq!(ty.kind(), SyntaxKind::SimpleType);
    assert_eq!(ty.trimmed_text(), "Array<Array<Int>>");
}

#[test]
fn test_function_type() {
    let ty = parse_type("(Int, Bool) -> String").unwrap();
    assert_eq!(ty.kind(), SyntaxKind::FunctionType);
    let params = ty.child_node(SyntaxKind::FunctionTypeParameterList).unwrap();
    assert_eq!(
        params
            .child_nodes()
            .filter(|n| n.kind() == SyntaxKind::TupleTypeElement)
            .count(),
        2
    );
}

#[test]
fn test_function_type_with_effects() {
    let ty = parse_type("(Int) async throws -> Void").unwrap();
    assert_eq!(ty.kind(), SyntaxKind::FunctionType);
    assert!(ty.child_node(SyntaxKind::EffectSpecifiers).is_some());
}

#[test]
fn test_tuple_and_parenthesized() {
    assert_eq!(parse_type("()").unwrap().kind(), SyntaxKind::TupleType);
    assert_eq!(parse_type("(Int, String)").unwrap().kind(), SyntaxKind::TupleType);
    assert_eq!(parse_type("(Int)").unwrap().kind(), SyntaxKind::TupleType);
}

#[test]
fn test_member_and_metatype() {
    let member = parse_type("Foo.Element").unwrap();
    assert_eq!(member.kind(), SyntaxKind::MemberType);
    let meta = parse_type("Foo.Type").unwrap();
    assert_eq!(meta.kind(), SyntaxKind::MetatypeType);
    let proto = parse_type("Foo.Protocol").unwrap();
    assert_eq!(proto.kind(), SyntaxKind::MetatypeType);
}

#[test]
fn test_prefix_type_shapes() {
    assert_eq!(parse_type("some Collection").unwrap().kind(), SyntaxKind::SomeOrAnyType);
    assert_eq!(parse_type("any Error").unwrap().kind(), SyntaxKind::SomeOrAnyType);
    assert_eq!(parse_type("~Copyable").unwrap().kind(), SyntaxKind::SuppressedType);
    assert_eq!(parse_type("repeat each T").unwrap().kind(), SyntaxKind::PackExpansionType);
    assert_eq!(parse_type("each T").unwrap().kind(), SyntaxKind::PackReferenceType);
    assert_eq!(parse_type("A & B").unwrap().kind(), SyntaxKind::CompositionType);
    assert_eq!(parse_type("class").unwrap().kind(), SyntaxKind::ClassRestrictionType);
}

#[test]
fn test_attributed_type() {
    let ty = parse_type("@escaping (Bool) -> Void").unwrap();
    assert_eq!(ty.kind(), SyntaxKind::AttributedType);
    let base = ty.child_node(SyntaxKind::FunctionType);
    assert!(base.is_some());
}

#[test]
fn test_type_round_trip() {
    for source in [
        "[Int: [String]]",
        "(x: Int, y: Int) -> Bool",
        "@escaping (Bool) -> Void",
        "Optional<Array<Int>>",
        "A & B & C",
    ] {
        let ty = parse_type(source).unwrap();
        assert_eq!(ty.text(), source);
    }
}

#[test]
fn test_trailing_tokens_rejected() {
    assert!(parse_type("Int Int").is_err());
    assert!(parse_type("").is_err());
}

#[test]
fn test_literal_expressions() {
    assert_eq!(parse_expr("42").unwrap().kind(), SyntaxKind::IntegerLiteralExpr);
    assert_eq!(parse_expr("3.14").unwrap().kind(), SyntaxKind::FloatLiteralExpr);
    assert_eq!(parse_expr(r#""hi""#).unwrap().kind(), SyntaxKind::StringLiteralExpr);
    assert_eq!(parse_expr("true").unwrap().kind(), SyntaxKind::BooleanLiteralExpr);
    assert_eq!(parse_expr("nil").unwrap().kind(), SyntaxKind::NilLiteralExpr);
    assert_eq!(parse_expr("-42").unwrap().kind(), SyntaxKind::PrefixOpExpr);
    assert_eq!(parse_expr("[1, 2, 3]").unwrap().kind(), SyntaxKind::ArrayExpr);
}

#[test]
fn test_struct_declaration() {
    let file = parse_source("struct Point { var x: Int\n var y: Int }").unwrap();
    assert_eq!(file.kind(), SyntaxKind::SourceFile);
    let decl = file.child_node(SyntaxKind::StructDecl).unwrap();
    let members = decl.child_node(SyntaxKind::MemberBlock).unwrap();
    assert_eq!(
        members
            .child_nodes()
            .filter(|n| n.kind() == SyntaxKind::VariableDecl)
            .count(),
        2
    );
}

#[test]
fn test_multi_binding_variable() {
    let file = parse_source("var a, b: Int").unwrap();
    let decl = file.child_node(SyntaxKind::VariableDecl).unwrap();
    let bindings: Vec<_> = decl
        .child_nodes()
        .filter(|n| n.kind() == SyntaxKind::PatternBinding)
        .collect();
    assert_eq!(bindings.len(), 2);
    assert!(bindings[0].child_node(SyntaxKind::TypeAnnotation).is_none());
    assert!(bindings[1].child_node(SyntaxKind::TypeAnnotation).is_some());
}

#[test]
fn test_computed_property() {
    let file = parse_source("var total: Int { count * 2 }").unwrap();
    let decl = file.child_node(SyntaxKind::VariableDecl).unwrap();
    let binding = decl.child_node(SyntaxKind::PatternBinding).unwrap();
    let block = binding.child_node(SyntaxKind::AccessorBlock).unwrap();
    assert_eq!(block.child_nodes().count(), 1);
}

#[test]
fn test_explicit_accessors() {
    let file = parse_source("var x: Int { get { 1 } set { } }").unwrap();
    let decl = file.child_node(SyntaxKind::VariableDecl).unwrap();
    let binding = decl.child_node(SyntaxKind::PatternBinding).unwrap();
    let block = binding.child_node(SyntaxKind::AccessorBlock).unwrap();
    assert_eq!(
        block
            .child_nodes()
            .filter(|n| n.kind() == SyntaxKind::AccessorDecl)
            .count(),
        2
    );
}

#[test]
fn test_function_declaration() {
    let file =
        parse_source("public func greet(name: String, loudly: Bool = false) -> String { name }")
            .unwrap();
    let decl = file.child_node(SyntaxKind::FunctionDecl).unwrap();
    let params = decl.child_node(SyntaxKind::ParameterClause).unwrap();
    assert_eq!(
        params
            .child_nodes()
            .filter(|n| n.kind() == SyntaxKind::FunctionParameter)
            .count(),
        2
    );
    assert!(decl.child_node(SyntaxKind::ReturnClause).is_some());
    assert!(decl.child_node(SyntaxKind::CodeBlock).is_some());
}

#[test]
fn test_source_round_trip() {
    let source = "// header\nstruct S: Equatable {\n    var items: [Int] = []\n\n    func sum() -> Int { items.reduce(0, +) }\n}\n";
    let file = parse_source(source).unwrap();
    assert_eq!(file.text(), source);
}

#[test]
fn test_attribute_on_declaration() {
    let file = parse_source("@discardableResult func f() -> Int { 1 }").unwrap();
    let decl = file.child_node(SyntaxKind::FunctionDecl).unwrap();
    let attrs = decl.child_node(SyntaxKind::AttributeList).unwrap();
    let attr = attrs.child_node(SyntaxKind::Attribute).unwrap();
    assert_eq!(attr.trimmed_text(), "@discardableResult");
}

#[test]
fn test_replace_child_is_persistent() {
    let ty = parse_type("[Int]").unwrap();
    let index = ty.child_index(SyntaxKind::SimpleType).unwrap();
    let replacement = parse_type("String").unwrap();
    let rewritten = ty.replace_child(index, replacement);
    assert_eq!(rewritten.trimmed_text(), "[String]");
    // The original is untouched.
    assert_eq!(ty.trimmed_text(), "[Int]");
}
