#![allow(clippy::unwrap_used)]

use crate::normalize::{is_void, normalize, NormalizedShape, NormalizedType};
use pretty_assertions::assert_eq;
use sora_facade::Type;

fn norm(source: &str) -> NormalizedType {
    normalize(&Type::parse(source).unwrap())
}

#[test]
fn test_sugar_canonicalization() {
    assert_eq!(norm("Int?"), norm("Optional<Int>"));
    assert_eq!(norm("[Int]"), norm("Array<Int>"));
    assert_eq!(norm("[Int: String]"), norm("Dictionary<Int, String>"));
}

#[test]
fn test_canonical_spellings() {
    assert_eq!(norm("Int?").description(), "Optional<Int>");
    assert_eq!(norm("[[Int]]").description(), "Array<Array<Int>>");
    assert_eq!(
        norm("[String: [Int]]").description(),
        "Dictionary<String, Array<Int>>"
    );
    assert_eq!(norm("[Int]?").description(), "Optional<Array<Int>>");
}

#[test]
fn test_void_collapse() {
    assert_eq!(norm("Void"), norm("()"));
    assert_eq!(norm("(Void)"), norm("()"));
    assert!(norm("Void").is_void());
    assert_eq!(norm("Void").description(), "()");
}

#[test]
fn test_is_void_on_classified_types() {
    assert!(is_void(&Type::parse("Void").unwrap()));
    assert!(is_void(&Type::parse("()").unwrap()));
    assert!(is_void(&Type::parse("((Void))").unwrap()));
    assert!(!is_void(&Type::parse("(Int)").unwrap()));
    assert!(!is_void(&Type::parse("Int").unwrap()));
}

#[test]
fn test_idempotence() {
    let spellings = [
        "Int?",
        "[Int]",
        "[Int: String]",
        "Void",
        "(Void)",
        "(Int)",
        "(Int, label: String)",
        "(Int) async throws -> [String]",
        "Foo.Bar<Int?>",
        "Foo.Type",
        "some Collection",
        "~Copyable",
        "String!",
        "Codable & Hashable",
        "@escaping ([Int]) -> Void",
        "repeat each T",
    ];
    for spelling in spellings {
        let once = norm(spelling);
        let again = norm(&once.description());
        assert_eq!(once, again, "{spelling}");
    }
}

#[test]
fn test_one_element_tuple_is_not_collapsed() {
    let once = norm("(Int)");
    assert_eq!(once.description(), "(Int)");
    assert_ne!(once, norm("Int"));
}

#[test]
fn test_nested_tuple_flattens() {
    assert_eq!(norm("((Int, Bool))"), norm("(Int, Bool)"));
    assert_eq!(norm("((Int, Bool))").description(), "(Int, Bool)");
}

#[test]
fn test_tuple_elements_normalize_in_place() {
    let normalized = norm("(x: [Int], String?)");
    assert_eq!(
        normalized.description(),
        "(x: Array<Int>, Optional<String>)"
    );
}

#[test]
fn test_function_normalizes_parameters_and_return() {
    let normalized = norm("([Int], label: Bool?) async throws -> Void");
    assert_eq!(
        normalized.description(),
        "(Array<Int>, label: Optional<Bool>) async throws -> ()"
    );
    let NormalizedShape::Function {
        parameters,
        is_async,
        is_throws,
        return_type,
    } = normalized.shape()
    else {
        panic!("expected a function shape");
    };
    assert_eq!(parameters.len(), 2);
    assert_eq!(parameters[1].label.as_deref(), Some("label"));
    assert!(*is_async);
    assert!(*is_throws);
    assert!(return_type.is_void());
}

#[test]
fn test_variadic_element_is_preserved() {
    assert_eq!(norm("(Int...) -> Void").description(), "(Int...) -> ()");
}

#[test]
fn test_metatype_folds_into_member() {
    let normalized = norm("Foo.Type");
    let NormalizedShape::Member { parent, name, .. } = normalized.shape() else {
        panic!("expected a member shape");
    };
    assert_eq!(parent.description(), "Foo");
    assert_eq!(name, "Type");
    assert_eq!(normalized.description(), "Foo.Type");
}

#[test]
fn test_member_normalizes_base_only() {
    assert_eq!(norm("[Int].Element").description(), "Array<Int>.Element");
}

#[test]
fn test_generic_arguments_normalize_recursively() {
    assert_eq!(norm("Set<[Int]>").description(), "Set<Array<Int>>");
}

#[test]
fn test_attributes_survive_canonicalization() {
    let normalized = norm("@escaping [Int]");
    assert_eq!(normalized.attributes(), "@escaping ");
    assert_eq!(normalized.description(), "@escaping Array<Int>");
}

#[test]
fn test_attributed_function_parameter_keeps_wrapper() {
    let normalized = norm("(@escaping (Bool) -> Void) -> Void");
    assert_eq!(
        normalized.description(),
        "(@escaping (Bool) -> ()) -> ()"
    );
}

#[test]
fn test_wrapped_types_normalize_inner() {
    assert_eq!(
        norm("(some Collection)?").description(),
        "Optional<(some Collection)>"
    );
    assert_eq!(norm("[Int]!").description(), "Array<Int>!");
    assert_eq!(norm("~Copyable").description(), "~Copyable");
}

#[test]
fn test_opaque_shapes_pass_through() {
    assert_eq!(norm("Codable & Hashable").description(), "Codable & Hashable");
    assert_eq!(norm("repeat each T").description(), "repeat each T");
    assert_eq!(norm("class").description(), "class");
}
