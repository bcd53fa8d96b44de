//! Leading/trailing trivia attached to tokens.
//!
//! Trivia is non-semantic source text (whitespace, newlines, comments).
//! It is preserved byte-for-byte so untouched subtrees serialize exactly
//! as they were consumed.

use smallvec::SmallVec;
use std::fmt;

/// The kind of a single trivia piece.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TriviaPieceKind {
    /// Horizontal whitespace (spaces and tabs).
    Whitespace,
    /// One or more newlines (with any `\r`s).
    Newlines,
    /// `// ...` to end of line.
    LineComment,
    /// `/* ... */`
    BlockComment,
}

/// One contiguous run of trivia text.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct TriviaPiece {
    pub kind: TriviaPieceKind,
    pub text: Box<str>,
}

impl TriviaPiece {
    pub fn new(kind: TriviaPieceKind, text: impl Into<Box<str>>) -> Self {
        TriviaPiece {
            kind,
            text: text.into(),
        }
    }
}

impl fmt::Debug for TriviaPiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?})", self.kind, self.text)
    }
}

/// An ordered sequence of trivia pieces.
///
/// Most tokens carry zero or one piece, so the pieces are stored inline.
#[derive(Clone, Eq, PartialEq, Hash, Default)]
pub struct Trivia {
    pieces: SmallVec<[TriviaPiece; 1]>,
}

impl Trivia {
    /// Empty trivia.
    pub fn new() -> Self {
        Trivia::default()
    }

    /// Trivia consisting of a single whitespace run.
    pub fn space() -> Self {
        let mut trivia = Trivia::new();
        trivia.push(TriviaPiece::new(TriviaPieceKind::Whitespace, " "));
        trivia
    }

    /// Append a piece.
    pub fn push(&mut self, piece: TriviaPiece) {
        self.pieces.push(piece);
    }

    /// Concatenate another trivia sequence onto this one.
    pub fn extend(&mut self, other: &Trivia) {
        self.pieces.extend(other.pieces.iter().cloned());
    }

    /// Whether there are no pieces.
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Iterate the pieces in order.
    pub fn pieces(&self) -> impl Iterator<Item = &TriviaPiece> {
        self.pieces.iter()
    }

    /// The exact source text of the trivia.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for piece in &self.pieces {
            out.push_str(&piece.text);
        }
        out
    }

    /// Whether any piece contains a newline.
    pub fn has_newline(&self) -> bool {
        self.pieces
            .iter()
            .any(|p| p.kind == TriviaPieceKind::Newlines)
    }
}

impl fmt::Debug for Trivia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.pieces.iter()).finish()
    }
}
