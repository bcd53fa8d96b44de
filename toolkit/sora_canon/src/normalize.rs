//! The type normalization engine.
//!
//! `normalize` is total over the classified type shapes and recurses
//! structurally. Sugar (`[T]`, `[K: V]`, `T?`, `Void`) has no shape of its
//! own in the normalized model: those spellings are synthesized as
//! `Array<…>` / `Dictionary<…, …>` / `Optional<…>` text, re-parsed, and
//! classified again, which keeps synthesis honest against the grammar.
//! The attributed wrapper's prefix is prepended to synthesized text so
//! modifiers survive canonicalization.

use sora_facade::{Type, TupleElement};
use sora_syntax::parse_type;
use std::fmt;
use tracing::trace;

/// A canonicalized type: the attributed prefix (possibly empty) plus the
/// normalized shape. Equality is structural; every child is itself
/// normalized.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct NormalizedType {
    attributes: String,
    shape: NormalizedShape,
}

/// The shape half of a [`NormalizedType`].
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum NormalizedShape {
    /// `Name` / `Name<A, B>`. Canonical home of `Array`, `Dictionary`,
    /// `Optional`, and every other nominal spelling.
    Nominal {
        name: String,
        arguments: Vec<NormalizedType>,
    },
    /// `(A, b: B)`. The empty tuple is the canonical `Void`.
    Tuple { elements: Vec<NormalizedElement> },
    /// `(A, B) async throws -> R`, labels and ellipses preserved.
    Function {
        parameters: Vec<NormalizedElement>,
        is_async: bool,
        is_throws: bool,
        return_type: Box<NormalizedType>,
    },
    /// `Base.Name<A>`. Metatypes fold in here with `Type` / `Protocol`
    /// as the member name.
    Member {
        parent: Box<NormalizedType>,
        name: String,
        arguments: Vec<NormalizedType>,
    },
    /// `some T` / `any T`.
    SomeOrAny {
        keyword: String,
        constraint: Box<NormalizedType>,
    },
    /// `T!`.
    ImplicitlyUnwrapped { wrapped: Box<NormalizedType> },
    /// `~T`.
    Suppressed { inner: Box<NormalizedType> },
    /// Shapes with no sugar of their own, kept as their trimmed spelling:
    /// compositions, pack expansions, pack references, class restrictions,
    /// and missing placeholders.
    Opaque { text: String },
}

/// One normalized tuple or function-parameter element.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct NormalizedElement {
    pub label: Option<String>,
    pub ty: NormalizedType,
    pub ellipsis: bool,
}

impl NormalizedType {
    /// The attributed prefix, trailing space included; empty when none.
    pub fn attributes(&self) -> &str {
        &self.attributes
    }

    pub fn shape(&self) -> &NormalizedShape {
        &self.shape
    }

    /// Whether this is the canonical `Void` (the empty tuple).
    pub fn is_void(&self) -> bool {
        matches!(&self.shape, NormalizedShape::Tuple { elements } if elements.is_empty())
    }

    /// The canonical spelling.
    pub fn description(&self) -> String {
        format!("{}{}", self.attributes, self.shape)
    }
}

impl fmt::Display for NormalizedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.attributes, self.shape)
    }
}

impl fmt::Display for NormalizedShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizedShape::Nominal { name, arguments } => {
                f.write_str(name)?;
                write_generics(f, arguments)
            }
            NormalizedShape::Tuple { elements } => {
                f.write_str("(")?;
                write_elements(f, elements)?;
                f.write_str(")")
            }
            NormalizedShape::Function {
                parameters,
                is_async,
                is_throws,
                return_type,
            } => {
                f.write_str("(")?;
                write_elements(f, parameters)?;
                f.write_str(")")?;
                if *is_async {
                    f.write_str(" async")?;
                }
                if *is_throws {
                    f.write_str(" throws")?;
                }
                write!(f, " -> {return_type}")
            }
            NormalizedShape::Member {
                parent,
                name,
                arguments,
            } => {
                write!(f, "{parent}.{name}")?;
                write_generics(f, arguments)
            }
            NormalizedShape::SomeOrAny {
                keyword,
                constraint,
            } => write!(f, "{keyword} {constraint}"),
            NormalizedShape::ImplicitlyUnwrapped { wrapped } => write!(f, "{wrapped}!"),
            NormalizedShape::Suppressed { inner } => write!(f, "~{inner}"),
            NormalizedShape::Opaque { text } => f.write_str(text),
        }
    }
}

fn write_generics(f: &mut fmt::Formatter<'_>, arguments: &[NormalizedType]) -> fmt::Result {
    if arguments.is_empty() {
        return Ok(());
    }
    f.write_str("<")?;
    for (i, argument) in arguments.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{argument}")?;
    }
    f.write_str(">")
}

fn write_elements(f: &mut fmt::Formatter<'_>, elements: &[NormalizedElement]) -> fmt::Result {
    for (i, element) in elements.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        if let Some(label) = &element.label {
            write!(f, "{label}: ")?;
        }
        write!(f, "{}", element.ty)?;
        if element.ellipsis {
            f.write_str("...")?;
        }
    }
    Ok(())
}

/// Canonicalize a classified type.
///
/// Total over the closed set of shapes, idempotent, and purely syntactic:
/// no semantic resolution happens here.
pub fn normalize(ty: &Type) -> NormalizedType {
    trace!(ty = %ty.description(), "normalize");
    let attributes = ty.attribute_text();
    let shape = match ty {
        Type::Array(array) => {
            let element = normalize(&array.element());
            return resynthesize(&format!("{attributes}Array<{element}>"));
        }
        Type::Dictionary(dictionary) => {
            let key = normalize(&dictionary.key());
            let value = normalize(&dictionary.value());
            return resynthesize(&format!("{attributes}Dictionary<{key}, {value}>"));
        }
        Type::Optional(optional) => {
            let wrapped = normalize(&optional.wrapped());
            return resynthesize(&format!("{attributes}Optional<{wrapped}>"));
        }
        Type::Simple(simple) => {
            let arguments = simple.generic_arguments();
            if simple.name() == "Void" && arguments.is_empty() {
                // The single ground truth for "no value".
                NormalizedShape::Tuple {
                    elements: Vec::new(),
                }
            } else {
                NormalizedShape::Nominal {
                    name: simple.name(),
                    arguments: arguments.iter().map(normalize).collect(),
                }
            }
        }
        Type::Tuple(tuple) => {
            let elements = tuple.elements();
            if let [only] = elements.as_slice() {
                if only.label().is_none() && !only.has_ellipsis() {
                    let inner = normalize(&only.ty());
                    if matches!(inner.shape, NormalizedShape::Tuple { .. }) {
                        // Tuple-in-tuple flattens; `(Void)` lands here too.
                        return NormalizedType {
                            attributes: format!("{attributes}{}", inner.attributes),
                            shape: inner.shape,
                        };
                    }
                    // A one-element non-tuple stays a one-element tuple.
                    return NormalizedType {
                        attributes,
                        shape: NormalizedShape::Tuple {
                            elements: vec![NormalizedElement {
                                label: None,
                                ty: inner,
                                ellipsis: false,
                            }],
                        },
                    };
                }
            }
            NormalizedShape::Tuple {
                elements: normalize_elements(&elements),
            }
        }
        Type::Function(function) => NormalizedShape::Function {
            parameters: normalize_elements(&function.parameters()),
            is_async: function.is_async(),
            is_throws: function.is_throws(),
            return_type: Box::new(normalize(&function.return_type())),
        },
        Type::Member(member) => NormalizedShape::Member {
            parent: Box::new(normalize(&member.parent())),
            name: member.name(),
            arguments: member.generic_arguments().iter().map(normalize).collect(),
        },
        Type::Metatype(metatype) => NormalizedShape::Member {
            parent: Box::new(normalize(&metatype.parent())),
            name: metatype.specifier(),
            arguments: Vec::new(),
        },
        Type::SomeOrAny(some_or_any) => NormalizedShape::SomeOrAny {
            keyword: some_or_any.keyword(),
            constraint: Box::new(normalize(&some_or_any.constraint())),
        },
        Type::ImplicitlyUnwrappedOptional(iuo) => NormalizedShape::ImplicitlyUnwrapped {
            wrapped: Box::new(normalize(&iuo.wrapped())),
        },
        Type::Suppressed(suppressed) => NormalizedShape::Suppressed {
            inner: Box::new(normalize(&suppressed.inner())),
        },
        Type::Composition(_)
        | Type::PackExpansion(_)
        | Type::PackReference(_)
        | Type::ClassRestriction(_)
        | Type::Missing(_) => NormalizedShape::Opaque {
            text: ty.syntax().base().trimmed_text(),
        },
    };
    NormalizedType { attributes, shape }
}

fn normalize_elements(elements: &[TupleElement]) -> Vec<NormalizedElement> {
    elements
        .iter()
        .map(|element| NormalizedElement {
            label: element.label(),
            ty: normalize(&element.ty()),
            ellipsis: element.has_ellipsis(),
        })
        .collect()
}

/// Re-parse a synthesized canonical spelling and normalize the result.
///
/// The synthesized children are already canonical, so this terminates and
/// a parse failure means the template itself is wrong.
fn resynthesize(text: &str) -> NormalizedType {
    trace!(%text, "resynthesize");
    let node = parse_type(text)
        .unwrap_or_else(|err| panic!("synthesized spelling {text:?} failed to re-parse: {err}"));
    let ty = Type::classify(&node)
        .unwrap_or_else(|| panic!("synthesized spelling {text:?} did not classify"));
    normalize(&ty)
}

/// Whether a type spells "no value" (`Void`, `()`, `(Void)`, …).
pub fn is_void(ty: &Type) -> bool {
    normalize(ty).is_void()
}

#[cfg(test)]
mod tests;
