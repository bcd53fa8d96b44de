//! Concrete syntax tree substrate for the Sora syntax toolkit.
//!
//! This crate provides the loosely-typed tree the facade crates wrap:
//! - `SyntaxKind`: one closed kind tag over tokens and nodes
//! - `SyntaxToken` / `Trivia`: source-faithful tokens with attached trivia
//! - `SyntaxNode`: immutable, `Arc`-shared nodes with persistent rewrites
//! - a logos lexer and a recursive-descent parser for the accepted grammar
//!
//! # Design Philosophy
//!
//! - **Immutable Everything**: nodes never mutate; `replace_child` produces
//!   a new node sharing untouched children with the original.
//! - **Byte-for-byte fidelity**: `text()` reproduces the consumed source
//!   exactly, trivia included. Subtrees the toolkit does not rewrite pass
//!   through untouched.
//! - **Closed grammar**: `SyntaxKind` enumerates every shape the toolkit
//!   accepts; unknown syntax is preserved as token-soup nodes.

mod error;
mod kind;
mod lexer;
mod node;
mod parser;
mod span;
mod token;
mod trivia;

pub use error::ParseError;
pub use kind::SyntaxKind;
pub use lexer::lex;
pub use node::{SyntaxElement, SyntaxNode};
pub use parser::{parse_expr, parse_source, parse_type};
pub use span::Span;
pub use token::SyntaxToken;
pub use trivia::{Trivia, TriviaPiece, TriviaPieceKind};
