use sora_syntax::SyntaxKind;
use std::error::Error;
use std::fmt;

/// A node whose kind falls outside the closed set a classifier accepts.
///
/// The accepted grammar is closed, so hitting this on a node that should
/// belong to the family means the case list is incomplete. Callers choose
/// between propagating and aborting; the facade never swallows it.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct UnsupportedShape {
    pub kind: SyntaxKind,
}

impl fmt::Display for UnsupportedShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported syntax shape: {:?}", self.kind)
    }
}

impl Error for UnsupportedShape {}
