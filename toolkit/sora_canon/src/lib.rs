//! Type canonicalization and fixed-arity destructuring.
//!
//! The normalization engine reduces sugared type spellings to one normal
//! form: `[T]`, `[K: V]` and `T?` become `Array<T>`, `Dictionary<K, V>`
//! and `Optional<T>`; every spelling of "no value" (`Void`, `()`, `(Void)`)
//! becomes the empty tuple. Canonical spellings are synthesized textually
//! and re-parsed through `sora_syntax`, with any attributed-wrapper prefix
//! carried along so modifiers are never dropped.
//!
//! The destructuring half matches variable-length syntactic lists against
//! a fixed arity: [`destructure2`] and friends over arbitrary iterators,
//! and [`destructure`] over classified types, producing a
//! [`DestructuredType`] only on an exact arity match.

mod arity;
mod destructured;
mod normalize;

pub use arity::{
    destructure0, destructure2, destructure3, destructure4, destructure5, destructure6,
    destructure_single,
};
pub use destructured::{destructure, DestructuredType, TypeArity};
pub use normalize::{is_void, normalize, NormalizedElement, NormalizedShape, NormalizedType};
