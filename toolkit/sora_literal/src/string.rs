//! String literal decoding.

/// Decode a string literal's full token text (delimiters included).
///
/// Returns `None` when the literal contains an interpolation segment, since
/// its value cannot be evaluated statically. Raw strings (`#"..."#`) use
/// pound-extended delimiters: only a backslash followed by exactly the
/// opening pound count introduces an escape; shorter runs are literal text.
///
/// # Panics
///
/// Panics on malformed delimiters or escape sequences, which are
/// unreachable for tokens produced by the lexer.
pub fn decode_string(text: &str) -> Option<String> {
    let pounds = text.chars().take_while(|&c| c == '#').count();
    let wellformed = text.len() >= 2 * pounds + 2
        && text[pounds..].starts_with('"')
        && text[..text.len() - pounds].ends_with('"')
        && text[text.len() - pounds..].chars().all(|c| c == '#');
    assert!(wellformed, "malformed string literal delimiters: {text:?}");
    let body = &text[pounds + 1..text.len() - pounds - 1];

    let marker = "#".repeat(pounds);
    let mut out = String::with_capacity(body.len());
    let mut chars = body.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let rest = &body[i + 1..];
        if !rest.starts_with(marker.as_str()) {
            // Shorter pound run than the delimiter: literal backslash.
            out.push('\\');
            continue;
        }
        // Consume the pound marker.
        for _ in 0..pounds {
            chars.next();
        }
        let Some((_, escape)) = chars.next() else {
            panic!("dangling escape at end of string literal: {text:?}");
        };
        match escape {
            '(' => return None, // interpolation segment
            '\\' => out.push('\\'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            '0' => out.push('\0'),
            '"' => out.push('"'),
            '\'' => out.push('\''),
            'u' => out.push(decode_unicode_escape(&mut chars, text)),
            other => panic!("invalid escape sequence \\{other} in string literal: {text:?}"),
        }
    }
    Some(out)
}

/// Decode the `{HEX}` tail of a `\u{...}` escape: 1 to 8 hex digits.
fn decode_unicode_escape(
    chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>,
    literal: &str,
) -> char {
    match chars.next() {
        Some((_, '{')) => {}
        _ => panic!("\\u escape without {{ in string literal: {literal:?}"),
    }
    let mut value: u32 = 0;
    let mut count = 0usize;
    loop {
        match chars.next() {
            Some((_, '}')) => break,
            Some((_, c)) => {
                let Some(digit) = c.to_digit(16) else {
                    panic!("non-hex digit {c:?} in \\u escape: {literal:?}");
                };
                count += 1;
                assert!(count <= 8, "\\u escape longer than 8 digits: {literal:?}");
                value = value * 16 + digit;
            }
            None => panic!("unterminated \\u escape in string literal: {literal:?}"),
        }
    }
    assert!(count >= 1, "empty \\u escape in string literal: {literal:?}");
    char::from_u32(value)
        .unwrap_or_else(|| panic!("\\u escape is not a unicode scalar: {literal:?}"))
}
