//! Float literal decoding.
//!
//! Decimal literals use an `e` exponent with base 10; hex-float literals
//! (`0x` prefix) use a `p` exponent with base 2 per the usual hex-float
//! convention, with the significand digits themselves base 16.

/// Decode a float literal's token text into the value it denotes.
///
/// `negated` reflects a single unary `-` the caller detected wrapping the
/// literal. Digit-group separators are stripped before any digit counting,
/// so the fractional divisor depends only on the digits present.
///
/// # Panics
///
/// Panics on text that does not follow the float lexical grammar. This is
/// unreachable for tokens produced by the lexer.
pub fn decode_float(text: &str, negated: bool) -> f64 {
    let hex = text.starts_with("0x");
    let (radix, body, exponent_base): (u32, &str, f64) =
        if hex { (16, &text[2..], 2.0) } else { (10, text, 10.0) };

    let mut parts = if hex {
        body.splitn(2, ['p', 'P'])
    } else {
        body.splitn(2, ['e', 'E'])
    };
    let mantissa = parts.next().unwrap_or_default();
    let exponent = parts.next();

    let mut mantissa_parts = mantissa.splitn(2, '.');
    let integer_digits = strip_separators(mantissa_parts.next().unwrap_or_default());
    let fraction_digits = mantissa_parts.next().map(strip_separators);

    let mut value = parse_digits(&integer_digits, radix, text);
    if let Some(fraction) = fraction_digits {
        let numerator = parse_digits(&fraction, radix, text);
        let digit_count = i32::try_from(fraction.len())
            .unwrap_or_else(|_| panic!("float literal {text:?} has too many digits"));
        value += numerator / f64::from(radix).powi(digit_count);
    }
    if let Some(exponent) = exponent {
        let exponent = strip_separators(exponent);
        let power: i32 = exponent
            .parse()
            .unwrap_or_else(|_| panic!("malformed float exponent in {text:?}"));
        value *= exponent_base.powi(power);
    }
    if negated {
        -value
    } else {
        value
    }
}

fn strip_separators(digits: &str) -> String {
    digits.chars().filter(|&c| c != '_').collect()
}

fn parse_digits(digits: &str, radix: u32, literal: &str) -> f64 {
    if digits.is_empty() {
        return 0.0;
    }
    let mut value = 0.0f64;
    for c in digits.chars() {
        let Some(digit) = c.to_digit(radix) else {
            panic!("malformed float literal {literal:?}: {c:?} is not a base-{radix} digit");
        };
        value = value * f64::from(radix) + f64::from(digit);
    }
    value
}
