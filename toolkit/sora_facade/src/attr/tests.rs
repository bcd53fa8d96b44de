#![allow(clippy::unwrap_used)]

use crate::attr::{first_called, removing, AttributeListElement};
use crate::decl::{Decl, DeclGroup};
use pretty_assertions::assert_eq;
use sora_syntax::parse_source;

fn function_attributes(source: &str) -> Vec<AttributeListElement> {
    let file = parse_source(source).unwrap();
    let node = file.child_nodes().next().unwrap();
    let Some(Decl::Function(function)) = Decl::classify(node) else {
        panic!("expected a function declaration");
    };
    function.attributes()
}

#[test]
fn test_attribute_names() {
    let elements = function_attributes("@discardableResult @inline(never)\nfunc f() {}\n");
    assert_eq!(elements.len(), 2);
    let AttributeListElement::Attribute(first) = &elements[0] else {
        panic!("expected a plain attribute");
    };
    assert_eq!(first.name(), "discardableResult");
    let AttributeListElement::Attribute(second) = &elements[1] else {
        panic!("expected a plain attribute");
    };
    assert_eq!(second.name(), "inline");
    assert_eq!(second.description(), "@inline(never)");
}

#[test]
fn test_removing_preserves_order() {
    let elements = function_attributes("@a @x @b\nfunc f() {}\n");
    let target = first_called(&elements, "x").unwrap();
    let remaining = removing(&elements, &target);
    let names: Vec<String> = remaining
        .iter()
        .map(|el| match el {
            AttributeListElement::Attribute(attr) => attr.name(),
            AttributeListElement::IfConfig(_) => panic!("unexpected conditional block"),
        })
        .collect();
    assert_eq!(names, ["a", "b"]);
}

#[test]
fn test_removing_absent_attribute_is_identity() {
    let elements = function_attributes("@a @b\nfunc f() {}\n");
    let other = function_attributes("@c\nfunc f() {}\n");
    let AttributeListElement::Attribute(absent) = &other[0] else {
        panic!("expected a plain attribute");
    };
    assert_eq!(removing(&elements, absent), elements);
}

#[test]
fn test_removal_is_structural_not_referential() {
    // The same spelling parsed twice matches despite distinct nodes.
    let elements = function_attributes("@a @b\nfunc f() {}\n");
    let twin = function_attributes("@a\nfunc g() {}\n");
    let AttributeListElement::Attribute(twin) = &twin[0] else {
        panic!("expected a plain attribute");
    };
    let remaining = removing(&elements, twin);
    assert_eq!(remaining.len(), 1);
}

#[test]
fn test_first_called_skips_conditional_blocks() {
    let elements =
        function_attributes("@a\n#if DEBUG\n@traced\n#endif\n@b\nfunc f() {}\n");
    assert!(elements
        .iter()
        .any(|el| matches!(el, AttributeListElement::IfConfig(_))));
    assert_eq!(first_called(&elements, "b").unwrap().name(), "b");
    assert!(first_called(&elements, "traced").is_none());
}

#[test]
fn test_group_attributes() {
    let file = parse_source("@frozen\npublic struct S {}\n").unwrap();
    let node = file.child_nodes().next().unwrap();
    let group = DeclGroup::classify(node).unwrap();
    let elements = group.attributes();
    assert_eq!(elements.len(), 1);
    let AttributeListElement::Attribute(attr) = &elements[0] else {
        panic!("expected a plain attribute");
    };
    assert_eq!(attr.name(), "frozen");
}
