//! Source-faithful tokens.

use crate::{Span, SyntaxKind, Trivia};
use std::fmt;
use std::sync::Arc;

/// A token with its exact source text and attached trivia.
///
/// Tokens are cheap to clone: the payload is shared behind an `Arc`.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct SyntaxToken(Arc<TokenData>);

#[derive(Eq, PartialEq, Hash)]
struct TokenData {
    kind: SyntaxKind,
    text: Box<str>,
    leading: Trivia,
    trailing: Trivia,
    span: Span,
}

impl SyntaxToken {
    /// Create a token with trivia.
    pub fn new(
        kind: SyntaxKind,
        text: impl Into<Box<str>>,
        leading: Trivia,
        trailing: Trivia,
        span: Span,
    ) -> Self {
        SyntaxToken(Arc::new(TokenData {
            kind,
            text: text.into(),
            leading,
            trailing,
            span,
        }))
    }

    /// Create a trivia-less token for synthesized trees.
    pub fn detached(kind: SyntaxKind, text: impl Into<Box<str>>) -> Self {
        SyntaxToken::new(kind, text, Trivia::new(), Trivia::new(), Span::DUMMY)
    }

    #[inline]
    pub fn kind(&self) -> SyntaxKind {
        self.0.kind
    }

    /// The token text without trivia.
    #[inline]
    pub fn text(&self) -> &str {
        &self.0.text
    }

    #[inline]
    pub fn leading_trivia(&self) -> &Trivia {
        &self.0.leading
    }

    #[inline]
    pub fn trailing_trivia(&self) -> &Trivia {
        &self.0.trailing
    }

    /// Byte span in the original source; `Span::DUMMY` for synthesized tokens.
    #[inline]
    pub fn span(&self) -> Span {
        self.0.span
    }

    /// Full text: leading trivia + token text + trailing trivia.
    pub fn full_text(&self) -> String {
        let mut out = self.0.leading.text();
        out.push_str(&self.0.text);
        out.push_str(&self.0.trailing.text());
        out
    }

    /// The same token with different leading trivia.
    pub fn with_leading_trivia(&self, leading: Trivia) -> SyntaxToken {
        SyntaxToken::new(
            self.0.kind,
            self.0.text.clone(),
            leading,
            self.0.trailing.clone(),
            self.0.span,
        )
    }

    /// The same token with different trailing trivia.
    pub fn with_trailing_trivia(&self, trailing: Trivia) -> SyntaxToken {
        SyntaxToken::new(
            self.0.kind,
            self.0.text.clone(),
            self.0.leading.clone(),
            trailing,
            self.0.span,
        )
    }
}

impl fmt::Debug for SyntaxToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} @ {}", self.0.kind, self.0.text, self.0.span)
    }
}
