#![allow(clippy::unwrap_used)]

use crate::destructured::{destructure, DestructuredType};
use pretty_assertions::assert_eq;
use sora_facade::Type;

fn parse(source: &str) -> Type {
    Type::parse(source).unwrap()
}

#[test]
fn test_nominal_two_arguments() {
    let ty = parse("Dictionary<Int, String>");
    let Some(DestructuredType::Nominal {
        name,
        arguments: (key, value),
    }) = destructure::<(Type, Type)>(&ty)
    else {
        panic!("expected a nominal match");
    };
    assert_eq!(name, "Dictionary");
    assert_eq!(key.description(), "Int");
    assert_eq!(value.description(), "String");
}

#[test]
fn test_nominal_single_argument() {
    let ty = parse("Array<Int>");
    let Some(DestructuredType::Nominal { name, arguments }) = destructure::<Type>(&ty) else {
        panic!("expected a nominal match");
    };
    assert_eq!(name, "Array");
    assert_eq!(arguments.description(), "Int");
}

#[test]
fn test_nominal_zero_arguments() {
    let ty = parse("Int");
    assert!(destructure::<()>(&ty).is_some());
    assert!(destructure::<Type>(&ty).is_none());
}

#[test]
fn test_nominal_arity_mismatch_is_none() {
    let ty = parse("Dictionary<Int, String>");
    assert!(destructure::<Type>(&ty).is_none());
    assert!(destructure::<(Type, Type, Type)>(&ty).is_none());
}

#[test]
fn test_function_single_parameter() {
    let ty = parse("(Bool) -> Void");
    let Some(DestructuredType::Function {
        parameters,
        return_type,
    }) = destructure::<Type>(&ty)
    else {
        panic!("expected a function match");
    };
    assert_eq!(parameters.description(), "Bool");
    assert_eq!(return_type.description(), "Void");
}

#[test]
fn test_function_arity_mismatch_is_none() {
    let ty = parse("(Bool, Int) -> Void");
    assert!(destructure::<Type>(&ty).is_none());
    assert!(destructure::<(Type, Type)>(&ty).is_some());
}

#[test]
fn test_other_shapes_never_match() {
    assert!(destructure::<()>(&parse("[Int]")).is_none());
    assert!(destructure::<Type>(&parse("Int?")).is_none());
    assert!(destructure::<()>(&parse("(Int, Bool)")).is_none());
}
