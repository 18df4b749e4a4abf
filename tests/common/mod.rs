//! Test helpers shared by the integration suites.
//!
//! `eval_js_string` evaluates a JavaScript string literal the way an ES5 engine
//! would, including the rule that U+2028 and U+2029 are line terminators and may not
//! appear raw inside a literal. It returns UTF-16 code units so lone surrogates
//! survive the round trip.

#![allow(dead_code)]

pub fn eval_js_string(literal: &str) -> Result<Vec<u16>, String> {
    let mut chars = literal.chars().peekable();
    let quote = match chars.next() {
        Some(q @ ('"' | '\'')) => q,
        other => return Err(format!("literal must start with a quote, found {:?}", other)),
    };

    let mut units = Vec::new();
    let mut buf = [0u16; 2];
    loop {
        let ch = chars
            .next()
            .ok_or_else(|| "unterminated string literal".to_string())?;
        match ch {
            c if c == quote => break,
            '\n' | '\r' | '\u{2028}' | '\u{2029}' => {
                return Err(format!("raw line terminator {:?} in literal", ch));
            }
            '\\' => {
                let escaped = chars
                    .next()
                    .ok_or_else(|| "dangling backslash".to_string())?;
                match escaped {
                    'b' => units.push(0x08),
                    'f' => units.push(0x0C),
                    'n' => units.push(0x0A),
                    'r' => units.push(0x0D),
                    't' => units.push(0x09),
                    'v' => units.push(0x0B),
                    '0' if !chars.peek().map_or(false, char::is_ascii_digit) => units.push(0),
                    'x' => units.push(read_hex(&mut chars, 2)?),
                    'u' => units.push(read_hex(&mut chars, 4)?),
                    '1'..='9' => return Err("octal escapes are not allowed".to_string()),
                    '\n' | '\r' | '\u{2028}' | '\u{2029}' => {}
                    other => units.extend_from_slice(other.encode_utf16(&mut buf)),
                }
            }
            other => units.extend_from_slice(other.encode_utf16(&mut buf)),
        }
    }

    match chars.next() {
        None => Ok(units),
        Some(extra) => Err(format!("trailing input after literal: {:?}", extra)),
    }
}

fn read_hex<I: Iterator<Item = char>>(chars: &mut I, digits: usize) -> Result<u16, String> {
    let mut value = 0u16;
    for _ in 0..digits {
        let digit = chars
            .next()
            .and_then(|c| c.to_digit(16))
            .ok_or_else(|| "malformed hex escape".to_string())?;
        value = value * 16 + digit as u16;
    }
    Ok(value)
}

/// Decodes a literal with a strict JSON parser.
pub fn eval_json_string(literal: &str) -> Result<String, String> {
    serde_json::from_str::<String>(literal).map_err(|e| e.to_string())
}

pub fn utf16(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}
