//! Integer literal decoding.

use crate::split_radix_prefix;

/// Decode an integer literal's token text into the value it denotes.
///
/// `negated` reflects a single unary `-` the caller detected wrapping the
/// literal; the token text itself never carries a sign. Digit-group `_`
/// separators are stripped (the lexer guarantees a literal never starts
/// with one).
///
/// # Panics
///
/// Panics on digit text invalid for the detected radix, or on a value
/// outside `i64`. Both are unreachable for tokens produced by the lexer.
pub fn decode_integer(text: &str, negated: bool) -> i64 {
    let (radix, digits) = split_radix_prefix(text);
    let mut magnitude: i128 = 0;
    for c in digits.chars() {
        if c == '_' {
            continue;
        }
        let Some(digit) = c.to_digit(radix) else {
            panic!("malformed integer literal {text:?}: {c:?} is not a base-{radix} digit");
        };
        magnitude = magnitude
            .checked_mul(i128::from(radix))
            .and_then(|m| m.checked_add(i128::from(digit)))
            .unwrap_or_else(|| panic!("integer literal {text:?} overflows"));
    }
    let signed = if negated { -magnitude } else { magnitude };
    i64::try_from(signed)
        .unwrap_or_else(|_| panic!("integer literal {text:?} does not fit in 64 bits"))
}
