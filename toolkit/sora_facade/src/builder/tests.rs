#![allow(clippy::unwrap_used)]

use crate::decl::{Decl, FunctionDecl};
use crate::types::Type;
use pretty_assertions::assert_eq;
use sora_syntax::parse_source;

fn parse_function(source: &str) -> FunctionDecl {
    let file = parse_source(source).unwrap();
    let node = file.child_nodes().next().unwrap();
    let Some(Decl::Function(function)) = Decl::classify(node) else {
        panic!("expected a function declaration");
    };
    function
}

#[test]
fn test_with_parameters_drops_one() {
    let function = parse_function("func f(x: Int, y: String) {}\n");
    let kept: Vec<_> = function
        .parameters()
        .into_iter()
        .filter(|p| p.label() != "y")
        .collect();
    let rewritten = function.with_parameters(&kept);
    assert_eq!(rewritten.syntax().text(), "func f(x: Int) {}\n");
    // The receiver is untouched.
    assert_eq!(function.parameters().len(), 2);
}

#[test]
fn test_with_parameters_reorders_with_synthesized_commas() {
    let function = parse_function("func f(x: Int, y: String) {}\n");
    let mut parameters = function.parameters();
    parameters.reverse();
    let rewritten = function.with_parameters(&parameters);
    assert_eq!(rewritten.syntax().text(), "func f(y: String, x: Int) {}\n");
}

#[test]
fn test_with_return_type_adds_clause() {
    let function = parse_function("func f(x: Int) {}\n");
    let ty = Type::parse("Bool").unwrap();
    let rewritten = function.with_return_type(Some(&ty));
    assert_eq!(rewritten.syntax().text(), "func f(x: Int) -> Bool {}\n");
}

#[test]
fn test_with_return_type_replaces_clause() {
    let function = parse_function("func f() -> Int {}\n");
    let ty = Type::parse("String").unwrap();
    let rewritten = function.with_return_type(Some(&ty));
    assert_eq!(rewritten.syntax().text(), "func f() -> String {}\n");
}

#[test]
fn test_with_return_type_none_removes_clause() {
    let function = parse_function("func f() -> Int {}\n");
    let rewritten = function.with_return_type(None);
    assert_eq!(rewritten.syntax().text(), "func f() {}\n");
}

#[test]
fn test_return_clause_lands_after_effects() {
    let function = parse_function("func f() async throws {}\n");
    let ty = Type::parse("Int").unwrap();
    let rewritten = function.with_return_type(Some(&ty));
    assert_eq!(
        rewritten.syntax().text(),
        "func f() async throws -> Int {}\n"
    );
}

#[test]
fn test_attributed_return_type_keeps_wrapper() {
    let function = parse_function("func f() {}\n");
    let ty = Type::parse("@escaping () -> Void").unwrap();
    let rewritten = function.with_return_type(Some(&ty));
    assert_eq!(
        rewritten.syntax().text(),
        "func f() -> @escaping () -> Void {}\n"
    );
}

#[test]
fn test_with_body_replaces_block() {
    let function = parse_function("func f() { old() }\n");
    let donor = parse_function("func g() { new() }\n");
    let rewritten = function.with_body(donor.body().unwrap());
    assert_eq!(rewritten.syntax().text(), "func f() { new() }\n");
}

#[test]
fn test_with_attributes_removes_list() {
    let function = parse_function("@discardableResult\nfunc f() {}\n");
    let rewritten = function.with_attributes(&[]);
    assert_eq!(rewritten.syntax().text(), "\nfunc f() {}\n");
}

#[test]
fn test_with_attributes_keeps_subset() {
    let function = parse_function("@a @b\nfunc f() {}\n");
    let elements = function.attributes();
    let rewritten = function.with_attributes(&elements[..1]);
    assert_eq!(rewritten.syntax().text(), "@a \nfunc f() {}\n");
}

#[test]
fn test_with_effects() {
    let function = parse_function("func f() {}\n");
    let rewritten = function.with_async(true).with_throws(true);
    assert_eq!(rewritten.syntax().text(), "func f() async throws {}\n");

    let cleared = rewritten.with_async(false).with_throws(false);
    assert_eq!(cleared.syntax().text(), "func f() {}\n");
}
