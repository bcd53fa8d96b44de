//! Stored/computed property derivation from variable declarations.
//!
//! Each binding maps to zero or more properties: one per identifier leaf of
//! its pattern. A declaration like `var a, b: Int` types both `a` and `b`:
//! annotations propagate backward over untyped, initializer-less bindings.
//! When neither an annotation nor a propagated type exists, the type is
//! inferred from the initializer's literal kind.

use crate::decl::{Decl, DeclGroup, PatternBinding, VariableDecl};
use crate::expr::Expr;
use crate::types::Type;
use sora_syntax::{SyntaxKind, SyntaxNode};

/// One derived property of a declaration group.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Property {
    identifier: String,
    ty: Option<Type>,
    value: Option<Expr>,
    is_stored: bool,
}

impl Property {
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The declared, propagated, or inferred type.
    pub fn ty(&self) -> Option<&Type> {
        self.ty.as_ref()
    }

    pub fn type_description(&self) -> Option<String> {
        self.ty.as_ref().map(Type::description)
    }

    pub fn value(&self) -> Option<&Expr> {
        self.value.as_ref()
    }

    /// Whether the property is stored. A binding with any getter accessor
    /// (explicit `get` or an implicit getter body) is computed; observers
    /// alone keep it stored.
    pub fn is_stored(&self) -> bool {
        self.is_stored
    }
}

impl DeclGroup {
    /// All properties declared by the group's variable members.
    pub fn properties(&self) -> Vec<Property> {
        self.members()
            .iter()
            .filter_map(|member| match member {
                Decl::Variable(decl) => Some(decl.properties()),
                _ => None,
            })
            .flatten()
            .collect()
    }
}

impl VariableDecl {
    /// Properties derived from this declaration's bindings.
    pub fn properties(&self) -> Vec<Property> {
        let bindings = self.bindings();
        let mut annotations: Vec<Option<Type>> =
            bindings.iter().map(PatternBinding::type_annotation).collect();

        // Backward propagation: `var a, b: Int` types `a` from `b`. A
        // binding with its own initializer infers instead of inheriting.
        let mut following: Option<Type> = None;
        for (i, binding) in bindings.iter().enumerate().rev() {
            match &annotations[i] {
                Some(ty) => following = Some(ty.clone()),
                None => {
                    if binding.initializer().is_none() {
                        annotations[i].clone_from(&following);
                    }
                }
            }
        }

        let mut out = Vec::new();
        for (binding, annotation) in bindings.iter().zip(annotations) {
            let is_stored = !binding.accessor_block().is_some_and(block_has_getter);
            walk_pattern(
                binding.pattern(),
                annotation,
                binding.initializer(),
                is_stored,
                false,
                &mut out,
            );
        }
        out
    }
}

fn walk_pattern(
    pattern: &SyntaxNode,
    annotation: Option<Type>,
    value: Option<Expr>,
    is_stored: bool,
    in_tuple: bool,
    out: &mut Vec<Property>,
) {
    match pattern.kind() {
        SyntaxKind::IdentifierPattern => {
            let Some(token) = pattern.first_token() else {
                return;
            };
            let ty = annotation
                .or_else(|| value.as_ref().and_then(|v| infer_type(v, in_tuple)));
            out.push(Property {
                identifier: token.text().to_owned(),
                ty,
                value,
                is_stored,
            });
        }
        SyntaxKind::WildcardPattern => {}
        SyntaxKind::TuplePattern => {
            let elements: Vec<&SyntaxNode> = pattern
                .child_nodes()
                .filter(|n| n.kind() == SyntaxKind::TuplePatternElement)
                .filter_map(|n| n.child_nodes().next())
                .collect();

            let annotations = match &annotation {
                Some(Type::Tuple(tuple)) => {
                    let tuple_elements = tuple.elements();
                    if tuple_elements.len() == elements.len() {
                        tuple_elements.iter().map(|el| Some(el.ty())).collect()
                    } else {
                        vec![None; elements.len()]
                    }
                }
                _ => vec![None; elements.len()],
            };

            let values = match &value {
                Some(Expr::Tuple(tuple)) => {
                    let tuple_elements = tuple.elements();
                    if tuple_elements.len() == elements.len() {
                        tuple_elements.iter().map(|el| Some(el.value())).collect()
                    } else {
                        vec![None; elements.len()]
                    }
                }
                _ => vec![None; elements.len()],
            };

            for ((element, annotation), value) in
                elements.into_iter().zip(annotations).zip(values)
            {
                walk_pattern(element, annotation, value, is_stored, true, out);
            }
        }
        _ => {}
    }
}

/// Whether an accessor block contains a getter. Any accessor that is not a
/// `set`/`willSet`/`didSet` counts: an implicit getter body has no intro
/// keyword at all.
fn block_has_getter(block: &SyntaxNode) -> bool {
    block
        .child_nodes()
        .filter(|n| n.kind() == SyntaxKind::AccessorDecl)
        .any(|accessor| match accessor.child_tokens().next() {
            Some(intro) => !matches!(intro.text(), "set" | "willSet" | "didSet"),
            None => false,
        })
}

fn infer_type(value: &Expr, in_tuple: bool) -> Option<Type> {
    let text = infer_type_text(value, in_tuple)?;
    Type::parse(&text).ok()
}

/// The canonical spelling a literal initializer implies, or `None` when the
/// expression carries no inferable literal type.
fn infer_type_text(value: &Expr, in_tuple: bool) -> Option<String> {
    match value {
        Expr::IntegerLiteral(_) => Some("Int".to_owned()),
        Expr::FloatLiteral(_) => Some("Double".to_owned()),
        Expr::StringLiteral(_) => Some("String".to_owned()),
        Expr::BooleanLiteral(_) => Some("Bool".to_owned()),
        Expr::RegexLiteral(_) => Some("Regex".to_owned()),
        Expr::Array(array) => {
            let elements = array.elements();
            if elements.is_empty() {
                // Only a tuple-destructuring context pins an element type.
                return in_tuple.then(|| "Array<Any>".to_owned());
            }
            let mut inferred = Vec::with_capacity(elements.len());
            for element in &elements {
                inferred.push(infer_type_text(element, false)?);
            }
            if inferred.iter().all(|ty| ty == &inferred[0]) {
                Some(format!("Array<{}>", inferred[0]))
            } else if inferred.iter().all(|ty| ty == "Int" || ty == "Double") {
                // Mixed numeric literals widen to Double.
                Some("Array<Double>".to_owned())
            } else {
                None
            }
        }
        _ => None,
    }
}
