//! Lexer for Sora source text using logos.
//!
//! Produces trivia-attached `SyntaxToken`s. Trivia attachment rule:
//! horizontal whitespace and comments directly after a token (before any
//! newline) become its trailing trivia; everything else becomes leading
//! trivia of the next token. Concatenating every token's full text
//! reproduces the input byte-for-byte.

use crate::{ParseError, Span, SyntaxKind, SyntaxToken, Trivia, TriviaPiece, TriviaPieceKind};
use logos::Logos;

/// Raw token from logos (before trivia attachment).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawToken {
    // === Trivia ===
    #[regex(r"[ \t]+")]
    Whitespace,
    #[regex(r"(\r?\n)+")]
    Newlines,
    #[regex(r"//[^\n]*")]
    LineComment,
    #[regex(r"/\*[^*]*\*+([^/*][^*]*\*+)*/")]
    BlockComment,

    // === Keywords ===
    #[token("struct")]
    Struct,
    #[token("class")]
    Class,
    #[token("enum")]
    Enum,
    #[token("actor")]
    Actor,
    #[token("extension")]
    Extension,
    #[token("protocol")]
    Protocol,
    #[token("func")]
    Func,
    #[token("var")]
    Var,
    #[token("let")]
    Let,
    #[token("case")]
    Case,
    #[token("import")]
    Import,
    #[token("some")]
    Some,
    #[token("any")]
    Any,
    #[token("each")]
    Each,
    #[token("repeat")]
    Repeat,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("nil")]
    Nil,
    #[token("async")]
    Async,
    #[token("throws")]
    Throws,
    #[token("rethrows")]
    Rethrows,
    #[token("inout")]
    Inout,
    #[token("static")]
    Static,
    #[token("public")]
    Public,
    #[token("private")]
    Private,
    #[token("internal")]
    Internal,
    #[token("fileprivate")]
    Fileprivate,
    #[token("package")]
    Package,
    #[token("open")]
    Open,
    #[token("final")]
    Final,
    #[token("where")]
    Where,

    // === Punctuation ===
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("[")]
    LeftBracket,
    #[token("]")]
    RightBracket,
    #[token("{")]
    LeftBrace,
    #[token("}")]
    RightBrace,
    #[token("<")]
    LeftAngle,
    #[token(">")]
    RightAngle,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token("...")]
    Ellipsis,
    #[token(".")]
    Period,
    #[token("?")]
    Question,
    #[token("!")]
    Bang,
    #[token("->")]
    Arrow,
    #[token("@")]
    At,
    #[token("&")]
    Ampersand,
    #[token("~")]
    Tilde,
    #[token("=")]
    Equals,
    #[token("-")]
    Minus,
    #[token("#if")]
    PoundIf,
    #[token("#elseif")]
    PoundElseif,
    #[token("#else")]
    PoundElse,
    #[token("#endif")]
    PoundEndif,

    // === Literals ===
    // Hex float (before hex int so the DFA prefers the longer match)
    #[regex(
        r"0x[0-9a-fA-F][0-9a-fA-F_]*(\.[0-9a-fA-F][0-9a-fA-F_]*)?[pP][+-]?[0-9][0-9_]*"
    )]
    HexFloat,
    #[regex(r"0x[0-9a-fA-F][0-9a-fA-F_]*")]
    HexInt,
    #[regex(r"0b[01][01_]*")]
    BinInt,
    #[regex(r"0o[0-7][0-7_]*")]
    OctInt,
    #[regex(r"[0-9][0-9_]*\.[0-9][0-9_]*([eE][+-]?[0-9][0-9_]*)?")]
    Float,
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9][0-9_]*")]
    ExpFloat,
    #[regex(r"[0-9][0-9_]*")]
    Int,

    // String literals: the opening delimiter is matched here and the
    // callback scans to the matching close, honoring escape/interpolation
    // sequences and the raw-string pound count.
    #[token("\"", |lex| scan_string_tail(lex, 0))]
    Str,
    #[regex(r####"#+""####, scan_raw_string)]
    RawStr,

    // Regex literal. The first character after `/` may not be whitespace,
    // `/` or `*`, which keeps comments and this rule disjoint.
    #[regex(r"/[^ \t\n/*][^/\n]*/")]
    Regex,

    // === Identifier ===
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    // Operator soup for passthrough token subtrees (function bodies,
    // attribute arguments). Excludes the characters that carry structure
    // in type syntax (`< > ? ! . -` etc. have their own tokens).
    #[regex(r"[+*/%^|=~&-][+*/%^|=~&]*", priority = 1)]
    #[regex(r"[\\$'`]", priority = 1)]
    #[regex(r"#[a-zA-Z_]*", priority = 1)]
    OpSoup,
}

fn scan_raw_string(lex: &mut logos::Lexer<RawToken>) -> bool {
    let pounds = lex.slice().len() - 1;
    scan_string_tail(lex, pounds)
}

/// Scan from just past the opening quote to the matching closing delimiter.
///
/// Handles `\`+pounds escape sequences and `\(`-style interpolations with
/// balanced parentheses. Returns false on an unterminated literal.
fn scan_string_tail(lex: &mut logos::Lexer<RawToken>, pounds: usize) -> bool {
    let rem = lex.remainder();
    let bytes = rem.as_bytes();
    let mut i = 0usize;
    while i < bytes.len() {
        match bytes[i] {
            b'"' => {
                if has_pounds(bytes, i + 1, pounds) {
                    lex.bump(i + 1 + pounds);
                    return true;
                }
                i += 1;
            }
            b'\\' => {
                if has_pounds(bytes, i + 1, pounds) {
                    let j = i + 1 + pounds;
                    if bytes.get(j).copied() == Some(b'(') {
                        // Interpolation: skip to the balancing `)`.
                        let mut depth = 1usize;
                        let mut k = j + 1;
                        while k < bytes.len() && depth > 0 {
                            match bytes[k] {
                                b'(' => depth += 1,
                                b')' => depth -= 1,
                                _ => {}
                            }
                            k += 1;
                        }
                        i = k;
                    } else {
                        // Escaped character (only ASCII delimiters matter
                        // below, so a byte-wise skip is safe mid-codepoint).
                        i = j + 1;
                    }
                } else {
                    i += 1;
                }
            }
            b'\n' => return false,
            _ => i += 1,
        }
    }
    false
}

fn has_pounds(bytes: &[u8], at: usize, pounds: usize) -> bool {
    bytes.len() >= at + pounds && bytes[at..at + pounds].iter().all(|&b| b == b'#')
}

/// Classification of a raw token: trivia piece or syntactic token.
enum Classified {
    Trivia(TriviaPieceKind),
    Token(SyntaxKind),
}

fn classify(raw: RawToken, slice: &str) -> Classified {
    use Classified::{Token, Trivia};
    match raw {
        RawToken::Whitespace => Trivia(TriviaPieceKind::Whitespace),
        RawToken::Newlines => Trivia(TriviaPieceKind::Newlines),
        RawToken::LineComment => Trivia(TriviaPieceKind::LineComment),
        RawToken::BlockComment => Trivia(TriviaPieceKind::BlockComment),

        RawToken::Struct => Token(SyntaxKind::StructKeyword),
        RawToken::Class => Token(SyntaxKind::ClassKeyword),
        RawToken::Enum => Token(SyntaxKind::EnumKeyword),
        RawToken::Actor => Token(SyntaxKind::ActorKeyword),
        RawToken::Extension => Token(SyntaxKind::ExtensionKeyword),
        RawToken::Protocol => Token(SyntaxKind::ProtocolKeyword),
        RawToken::Func => Token(SyntaxKind::FuncKeyword),
        RawToken::Var => Token(SyntaxKind::VarKeyword),
        RawToken::Let => Token(SyntaxKind::LetKeyword),
        RawToken::Case => Token(SyntaxKind::CaseKeyword),
        RawToken::Import => Token(SyntaxKind::ImportKeyword),
        RawToken::Some => Token(SyntaxKind::SomeKeyword),
        RawToken::Any => Token(SyntaxKind::AnyKeyword),
        RawToken::Each => Token(SyntaxKind::EachKeyword),
        RawToken::Repeat => Token(SyntaxKind::RepeatKeyword),
        RawToken::True => Token(SyntaxKind::TrueKeyword),
        RawToken::False => Token(SyntaxKind::FalseKeyword),
        RawToken::Nil => Token(SyntaxKind::NilKeyword),
        RawToken::Async => Token(SyntaxKind::AsyncKeyword),
        RawToken::Throws => Token(SyntaxKind::ThrowsKeyword),
        RawToken::Rethrows => Token(SyntaxKind::RethrowsKeyword),
        RawToken::Inout => Token(SyntaxKind::InoutKeyword),
        RawToken::Static => Token(SyntaxKind::StaticKeyword),
        RawToken::Public => Token(SyntaxKind::PublicKeyword),
        RawToken::Private => Token(SyntaxKind::PrivateKeyword),
        RawToken::Internal => Token(SyntaxKind::InternalKeyword),
        RawToken::Fileprivate => Token(SyntaxKind::FileprivateKeyword),
        RawToken::Package => Token(SyntaxKind::PackageKeyword),
        RawToken::Open => Token(SyntaxKind::OpenKeyword),
        RawToken::Final => Token(SyntaxKind::FinalKeyword),
        RawToken::Where => Token(SyntaxKind::WhereKeyword),

        RawToken::LeftParen => Token(SyntaxKind::LeftParen),
        RawToken::RightParen => Token(SyntaxKind::RightParen),
        RawToken::LeftBracket => Token(SyntaxKind::LeftBracket),
        RawToken::RightBracket => Token(SyntaxKind::RightBracket),
        RawToken::LeftBrace => Token(SyntaxKind::LeftBrace),
        RawToken::RightBrace => Token(SyntaxKind::RightBrace),
        RawToken::LeftAngle => Token(SyntaxKind::LeftAngle),
        RawToken::RightAngle => Token(SyntaxKind::RightAngle),
        RawToken::Comma => Token(SyntaxKind::Comma),
        RawToken::Colon => Token(SyntaxKind::Colon),
        RawToken::Semicolon => Token(SyntaxKind::Semicolon),
        RawToken::Ellipsis => Token(SyntaxKind::Ellipsis),
        RawToken::Period => Token(SyntaxKind::Period),
        RawToken::Question => Token(SyntaxKind::Question),
        RawToken::Bang => Token(SyntaxKind::Bang),
        RawToken::Arrow => Token(SyntaxKind::Arrow),
        RawToken::At => Token(SyntaxKind::At),
        RawToken::Ampersand => Token(SyntaxKind::Ampersand),
        RawToken::Tilde => Token(SyntaxKind::Tilde),
        RawToken::Equals => Token(SyntaxKind::Equals),
        RawToken::Minus => Token(SyntaxKind::Minus),
        RawToken::PoundIf => Token(SyntaxKind::PoundIf),
        RawToken::PoundElseif => Token(SyntaxKind::PoundElseif),
        RawToken::PoundElse => Token(SyntaxKind::PoundElse),
        RawToken::PoundEndif => Token(SyntaxKind::PoundEndif),

        RawToken::HexFloat | RawToken::Float | RawToken::ExpFloat => {
            Token(SyntaxKind::FloatLiteral)
        }
        RawToken::HexInt | RawToken::BinInt | RawToken::OctInt | RawToken::Int => {
            Token(SyntaxKind::IntegerLiteral)
        }
        RawToken::Str | RawToken::RawStr => Token(SyntaxKind::StringLiteral),
        RawToken::Regex => Token(SyntaxKind::RegexLiteral),

        RawToken::Ident if slice == "_" => Token(SyntaxKind::Underscore),
        RawToken::Ident => Token(SyntaxKind::Identifier),
        RawToken::OpSoup => Token(SyntaxKind::UnknownToken),
    }
}

/// A token under construction during trivia attachment.
struct TokenBuilder {
    kind: SyntaxKind,
    text: Box<str>,
    span: Span,
    leading: Trivia,
    trailing: Trivia,
}

/// Lex source text into trivia-attached tokens.
#[allow(
    clippy::cast_possible_truncation,
    reason = "source offsets bounded by u32 for the inputs this toolkit sees"
)]
pub fn lex(source: &str) -> Result<Vec<SyntaxToken>, ParseError> {
    let mut logos = RawToken::lexer(source);
    let mut builders: Vec<TokenBuilder> = Vec::new();
    let mut pending = Trivia::new();
    // True right after a token, until a newline or the next token.
    let mut attach_trailing = false;

    while let Some(result) = logos.next() {
        let range = logos.span();
        let span = Span::new(range.start as u32, range.end as u32);
        let slice = logos.slice();
        let raw = match result {
            Ok(raw) => raw,
            Err(()) => {
                if slice.starts_with('"') || slice.starts_with('#') {
                    return Err(ParseError::UnterminatedString { span });
                }
                return Err(ParseError::InvalidToken { span });
            }
        };
        match classify(raw, slice) {
            Classified::Trivia(kind) => {
                let piece = TriviaPiece::new(kind, slice);
                if attach_trailing && kind != TriviaPieceKind::Newlines {
                    if let Some(last) = builders.last_mut() {
                        last.trailing.push(piece);
                        continue;
                    }
                }
                attach_trailing = false;
                pending.push(piece);
            }
            Classified::Token(kind) => {
                builders.push(TokenBuilder {
                    kind,
                    text: slice.into(),
                    span,
                    leading: std::mem::take(&mut pending),
                    trailing: Trivia::new(),
                });
                attach_trailing = true;
            }
        }
    }

    // Leftover trivia at end of input rides on the last token's trailing.
    if !pending.is_empty() {
        if let Some(last) = builders.last_mut() {
            for piece in pending.pieces() {
                last.trailing.push(piece.clone());
            }
        }
    }

    Ok(builders
        .into_iter()
        .map(|b| SyntaxToken::new(b.kind, b.text, b.leading, b.trailing, b.span))
        .collect())
}
