#![allow(clippy::unwrap_used)]

use crate::expr::Expr;
use pretty_assertions::assert_eq;
use sora_syntax::parse_expr;

fn classify(source: &str) -> Expr {
    Expr::classify(&parse_expr(source).unwrap()).unwrap()
}

#[test]
fn test_integer_literal_value() {
    let Expr::IntegerLiteral(literal) = classify("0xFF") else {
        panic!("expected an integer literal");
    };
    assert!(!literal.is_negated());
    assert_eq!(literal.value(), 255);
}

#[test]
fn test_negation_folds_into_integer_literal() {
    let Expr::IntegerLiteral(literal) = classify("-42") else {
        panic!("expected an integer literal");
    };
    assert!(literal.is_negated());
    assert_eq!(literal.value(), -42);
}

#[test]
fn test_negation_folds_into_float_literal() {
    let Expr::FloatLiteral(literal) = classify("-2.5e2") else {
        panic!("expected a float literal");
    };
    assert_eq!(literal.value(), -250.0);
}

#[test]
fn test_string_literal_value() {
    let Expr::StringLiteral(literal) = classify(r#""a\tb""#) else {
        panic!("expected a string literal");
    };
    assert_eq!(literal.value().as_deref(), Some("a\tb"));
}

#[test]
fn test_interpolated_string_has_no_value() {
    let Expr::StringLiteral(literal) = classify(r#""x \(y)""#) else {
        panic!("expected a string literal");
    };
    assert_eq!(literal.value(), None);
}

#[test]
fn test_boolean_and_nil_literals() {
    let Expr::BooleanLiteral(literal) = classify("true") else {
        panic!("expected a boolean literal");
    };
    assert!(literal.value());
    assert!(matches!(classify("nil"), Expr::NilLiteral(_)));
}

#[test]
fn test_regex_literal_pattern() {
    let Expr::RegexLiteral(literal) = classify("/[a-z]+/") else {
        panic!("expected a regex literal");
    };
    assert_eq!(literal.pattern(), "[a-z]+");
}

#[test]
fn test_array_elements() {
    let Expr::Array(array) = classify("[1, 2, 3]") else {
        panic!("expected an array literal");
    };
    let elements = array.elements();
    assert_eq!(elements.len(), 3);
    let Expr::IntegerLiteral(first) = &elements[0] else {
        panic!("expected an integer element");
    };
    assert_eq!(first.value(), 1);
}

#[test]
fn test_tuple_elements_and_labels() {
    let Expr::Tuple(tuple) = classify(r#"(1, name: "x")"#) else {
        panic!("expected a tuple expression");
    };
    let elements = tuple.elements();
    assert_eq!(elements.len(), 2);
    assert_eq!(elements[0].label(), None);
    assert_eq!(elements[1].label().as_deref(), Some("name"));
    assert!(matches!(elements[1].value(), Expr::StringLiteral(_)));
}

#[test]
fn test_member_access_and_call() {
    let Expr::Call(call) = classify("Foo.bar(x: 1)") else {
        panic!("expected a call");
    };
    let Expr::MemberAccess(member) = call.callee() else {
        panic!("expected a member access callee");
    };
    assert_eq!(member.name(), "bar");
    let Expr::Identifier(base) = member.base() else {
        panic!("expected an identifier base");
    };
    assert_eq!(base.name(), "Foo");

    let arguments = call.arguments();
    assert_eq!(arguments.len(), 1);
    assert_eq!(arguments[0].label().as_deref(), Some("x"));
}

#[test]
fn test_prefix_over_non_literal_stays_prefix() {
    let Expr::Prefix(prefix) = classify("-x") else {
        panic!("expected a prefix expression");
    };
    assert_eq!(prefix.operator(), "-");
    assert!(matches!(prefix.operand(), Expr::Identifier(_)));
}

#[test]
fn test_description_round_trip() {
    assert_eq!(classify("[1, 2.0]").description(), "[1, 2.0]");
}
