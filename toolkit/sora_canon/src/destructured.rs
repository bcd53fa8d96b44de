//! Structural type destructuring at a fixed arity.

use crate::arity::{
    destructure0, destructure2, destructure3, destructure4, destructure5, destructure6,
    destructure_single,
};
use sora_facade::{Type, TupleElement};

/// A type list matched at a fixed arity: a nominal type's generic
/// arguments or a function type's parameter list.
///
/// `T` is the arity: `()`, a bare [`Type`] for arity 1, or a tuple of
/// types up to arity 6.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum DestructuredType<T> {
    Nominal { name: String, arguments: T },
    Function { parameters: T, return_type: Type },
}

/// A fixed arity a type list can be matched against.
///
/// Implemented for `()` and for type tuples up to six elements; arity 1 is
/// the bare [`Type`] itself.
pub trait TypeArity: Sized {
    fn from_types(types: Vec<Type>) -> Option<Self>;
}

impl TypeArity for () {
    fn from_types(types: Vec<Type>) -> Option<Self> {
        destructure0(types)
    }
}

impl TypeArity for Type {
    fn from_types(types: Vec<Type>) -> Option<Self> {
        destructure_single(types)
    }
}

impl TypeArity for (Type, Type) {
    fn from_types(types: Vec<Type>) -> Option<Self> {
        destructure2(types)
    }
}

impl TypeArity for (Type, Type, Type) {
    fn from_types(types: Vec<Type>) -> Option<Self> {
        destructure3(types)
    }
}

impl TypeArity for (Type, Type, Type, Type) {
    fn from_types(types: Vec<Type>) -> Option<Self> {
        destructure4(types)
    }
}

impl TypeArity for (Type, Type, Type, Type, Type) {
    fn from_types(types: Vec<Type>) -> Option<Self> {
        destructure5(types)
    }
}

impl TypeArity for (Type, Type, Type, Type, Type, Type) {
    fn from_types(types: Vec<Type>) -> Option<Self> {
        destructure6(types)
    }
}

/// Match a nominal type's generic arguments or a function type's
/// parameters against the arity `T`.
///
/// Any other shape, or a list whose length misses the arity, is `None` —
/// never a partial match.
pub fn destructure<T: TypeArity>(ty: &Type) -> Option<DestructuredType<T>> {
    match ty {
        Type::Simple(simple) => {
            let arguments = T::from_types(simple.generic_arguments())?;
            Some(DestructuredType::Nominal {
                name: simple.name(),
                arguments,
            })
        }
        Type::Function(function) => {
            let parameters: Vec<Type> = function
                .parameters()
                .iter()
                .map(TupleElement::ty)
                .collect();
            let parameters = T::from_types(parameters)?;
            Some(DestructuredType::Function {
                parameters,
                return_type: function.return_type(),
            })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests;
