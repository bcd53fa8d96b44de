#![allow(clippy::unwrap_used)]

use crate::decl::{AccessLevel, Decl, DeclContext, DeclGroup};
use pretty_assertions::assert_eq;
use sora_syntax::parse_source;

fn first_group(source: &str) -> DeclGroup {
    let file = parse_source(source).unwrap();
    let node = file.child_nodes().next().unwrap();
    DeclGroup::classify(node).unwrap()
}

#[test]
fn test_group_identifier_and_members() {
    let group = first_group(
        "struct Point {\n    var x: Int\n    var y: Int\n    func norm() -> Double { 0 }\n}\n",
    );
    assert!(matches!(group, DeclGroup::Struct(_)));
    assert_eq!(group.identifier(), "Point");

    let members = group.members();
    assert_eq!(members.len(), 3);
    assert!(matches!(members[0], Decl::Variable(_)));
    assert!(matches!(members[2], Decl::Function(_)));
}

#[test]
fn test_inherited_types() {
    let group = first_group("struct Point: Equatable, CustomStringConvertible {}\n");
    let inherited = group.inherited_types();
    assert_eq!(inherited.len(), 2);
    assert_eq!(inherited[0].description(), "Equatable");
    assert_eq!(inherited[1].description(), "CustomStringConvertible");
}

#[test]
fn test_access_level_and_context() {
    let group = first_group("public final class Box {\n    static var shared = 1\n}\n");
    assert_eq!(group.access_level(), Some(AccessLevel::Public));
    assert_eq!(group.decl_context(), DeclContext::Instance);

    let Decl::Variable(member) = group.members().remove(0) else {
        panic!("expected a variable member");
    };
    assert_eq!(member.decl_context(), DeclContext::Static);
    assert_eq!(member.access_level(), None);
}

#[test]
fn test_extension_identifier_is_extended_type() {
    let group = first_group("extension Array<Int> {}\n");
    let DeclGroup::Extension(ext) = &group else {
        panic!("expected an extension");
    };
    assert_eq!(ext.extended_type().description(), "Array<Int>");
    assert_eq!(group.identifier(), "Array<Int>");
}

#[test]
fn test_enum_members_include_cases() {
    let group = first_group("enum Direction {\n    case north\n    case south\n}\n");
    let members = group.members();
    assert_eq!(members.len(), 2);
    assert!(matches!(members[0], Decl::EnumCase(_)));
}

#[test]
fn test_function_signature_accessors() {
    let group = first_group(
        "actor Worker {\n    func run(_ job: Job, retries count: Int = 3) async throws -> Bool {\n        true\n    }\n}\n",
    );
    let Decl::Function(function) = group.members().remove(0) else {
        panic!("expected a function member");
    };
    assert_eq!(function.name(), "run");
    assert!(function.is_async());
    assert!(function.is_throws());
    assert_eq!(function.return_type().unwrap().description(), "Bool");
    assert!(function.body().is_some());

    let parameters = function.parameters();
    assert_eq!(parameters.len(), 2);
    assert_eq!(parameters[0].label(), "_");
    assert_eq!(parameters[0].name(), "job");
    assert_eq!(parameters[0].ty().description(), "Job");
    assert_eq!(parameters[1].label(), "retries");
    assert_eq!(parameters[1].name(), "count");
    assert!(parameters[1].default_value().is_some());
}

#[test]
fn test_variadic_parameter() {
    let group = first_group("struct S {\n    func sum(_ values: Int...) -> Int { 0 }\n}\n");
    let Decl::Function(function) = group.members().remove(0) else {
        panic!("expected a function member");
    };
    assert!(function.parameters()[0].is_variadic());
}

#[test]
fn test_variable_bindings_and_annotations() {
    let group = first_group("struct S {\n    var a, b: Int, c = 1\n}\n");
    let Decl::Variable(variable) = group.members().remove(0) else {
        panic!("expected a variable member");
    };
    let bindings = variable.bindings();
    assert_eq!(bindings.len(), 3);
    assert!(bindings[0].type_annotation().is_none());
    assert_eq!(
        bindings[1].type_annotation().unwrap().description(),
        "Int"
    );
    assert!(bindings[2].initializer().is_some());
}

#[test]
fn test_let_and_var() {
    let group = first_group("struct S {\n    let fixed = 1\n    var mobile = 2\n}\n");
    let members = group.members();
    let Decl::Variable(fixed) = &members[0] else {
        panic!("expected a variable");
    };
    let Decl::Variable(mobile) = &members[1] else {
        panic!("expected a variable");
    };
    assert!(fixed.is_let());
    assert!(!mobile.is_let());
}

#[test]
fn test_classify_rejects_non_group() {
    let file = parse_source("import Foundation\n").unwrap();
    let node = file.child_nodes().next().unwrap();
    assert!(DeclGroup::classify(node).is_none());
    assert!(DeclGroup::try_classify(node).is_err());
    assert!(matches!(Decl::classify(node), Some(Decl::Import(_))));
}
