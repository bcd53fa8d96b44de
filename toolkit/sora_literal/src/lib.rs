//! Literal-value decoding for the Sora syntax toolkit.
//!
//! Pure, stateless functions that turn literal token text into the value it
//! denotes under Sora's Swift-like lexical rules. Inputs are token texts the
//! lexer already accepted; malformed digit or escape text therefore means an
//! upstream tooling bug, and the decoders fail loudly (`panic!`) rather than
//! substituting a default that would flow into generated code.
//!
//! Interpolated strings are the one soft failure: they cannot be evaluated
//! statically, so `decode_string` returns `None` for them.

mod float;
mod integer;
mod string;

pub use float::decode_float;
pub use integer::decode_integer;
pub use string::decode_string;

/// Decode a boolean literal's token text.
///
/// # Panics
///
/// Panics if the text is neither `true` nor `false`.
pub fn decode_boolean(text: &str) -> bool {
    match text {
        "true" => true,
        "false" => false,
        _ => panic!("malformed boolean literal: {text:?}"),
    }
}

/// Split a literal's radix prefix, returning `(radix, digits)`.
///
/// `0b` is binary, `0o` octal, `0x` hexadecimal; anything else is decimal
/// with nothing stripped.
pub(crate) fn split_radix_prefix(text: &str) -> (u32, &str) {
    match text.get(..2) {
        Some("0b") => (2, &text[2..]),
        Some("0o") => (8, &text[2..]),
        Some("0x") => (16, &text[2..]),
        _ => (10, text),
    }
}
