//! Parse error types.

use crate::{Span, SyntaxKind};
use std::fmt;

/// Error produced by the lexer or parser.
///
/// These are recoverable signals for callers feeding text into the
/// substrate (template synthesis, tests); the facade layer treats a parse
/// failure of its own synthesized text as a bug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A token that fits no lexical rule.
    InvalidToken { span: Span },
    /// A string literal without a matching closing delimiter.
    UnterminatedString { span: Span },
    /// A token of the wrong kind where `expected` was required.
    Unexpected {
        expected: &'static str,
        found: SyntaxKind,
        span: Span,
    },
    /// Input ended where `expected` was required.
    UnexpectedEof { expected: &'static str },
    /// Trailing tokens after a complete fragment parse.
    TrailingTokens { span: Span },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidToken { span } => {
                write!(f, "invalid token at {span}")
            }
            ParseError::UnterminatedString { span } => {
                write!(f, "unterminated string literal at {span}")
            }
            ParseError::Unexpected {
                expected,
                found,
                span,
            } => {
                write!(f, "expected {expected}, found {found:?} at {span}")
            }
            ParseError::UnexpectedEof { expected } => {
                write!(f, "expected {expected}, found end of input")
            }
            ParseError::TrailingTokens { span } => {
                write!(f, "trailing tokens after fragment at {span}")
            }
        }
    }
}

impl std::error::Error for ParseError {}
