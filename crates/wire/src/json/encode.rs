//! JSON encoding of strings, string sequences and string maps
//!
//! Escaping rules:
//! - `\` and `"` are backslash-escaped
//! - backspace, form-feed, newline, carriage return and tab use their short
//!   escapes (`\b`, `\f`, `\n`, `\r`, `\t`)
//! - every other byte in 0x00-0x1F becomes `\u00XX` with upper-case hex
//! - `/` is left alone
//! - bytes 0x80-0xFF are copied verbatim; they belong to multi-byte UTF-8
//!   sequences and must not be re-encoded one byte at a time

use std::collections::BTreeMap;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// How a single input byte is written out
enum Escape {
    Short(&'static str),
    Control(u8),
}

#[inline]
fn escape_for(byte: u8) -> Option<Escape> {
    match byte {
        b'\\' => Some(Escape::Short("\\\\")),
        b'"' => Some(Escape::Short("\\\"")),
        0x08 => Some(Escape::Short("\\b")),
        0x0C => Some(Escape::Short("\\f")),
        b'\n' => Some(Escape::Short("\\n")),
        b'\r' => Some(Escape::Short("\\r")),
        b'\t' => Some(Escape::Short("\\t")),
        0x00..=0x1F => Some(Escape::Control(byte)),
        _ => None,
    }
}

#[inline]
fn control_escape(byte: u8) -> [u8; 6] {
    [
        b'\\',
        b'u',
        b'0',
        b'0',
        HEX_DIGITS[(byte >> 4) as usize],
        HEX_DIGITS[(byte & 0x0F) as usize],
    ]
}

/// Append the escaped form of `s` (without surrounding quotes)
///
/// Unescaped runs are copied as slices. Every escaped byte is ASCII, so the
/// slice bounds always fall on character boundaries.
pub(crate) fn push_escaped(out: &mut String, s: &str) {
    let bytes = s.as_bytes();
    let mut start = 0;

    for (i, &byte) in bytes.iter().enumerate() {
        let Some(escape) = escape_for(byte) else {
            continue;
        };
        out.push_str(&s[start..i]);
        match escape {
            Escape::Short(text) => out.push_str(text),
            Escape::Control(b) => {
                for c in control_escape(b) {
                    out.push(c as char);
                }
            }
        }
        start = i + 1;
    }
    out.push_str(&s[start..]);
}

/// Encode a string as a JSON string literal
pub fn encode_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');
    push_escaped(&mut result, s);
    result.push('"');
    result
}

/// Encode raw bytes as a JSON string literal
///
/// For text read back from storage that was never validated as UTF-8. The
/// escaping is identical to [`encode_string`]; bytes at or above 0x80 are
/// passed through untouched, so the output is exactly as valid as the input.
pub fn encode_raw_string(bytes: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(bytes.len() + 2);
    result.push(b'"');
    let mut start = 0;

    for (i, &byte) in bytes.iter().enumerate() {
        let Some(escape) = escape_for(byte) else {
            continue;
        };
        result.extend_from_slice(&bytes[start..i]);
        match escape {
            Escape::Short(text) => result.extend_from_slice(text.as_bytes()),
            Escape::Control(b) => result.extend_from_slice(&control_escape(b)),
        }
        start = i + 1;
    }
    result.extend_from_slice(&bytes[start..]);
    result.push(b'"');
    result
}

/// Encode an ordered sequence of strings as a JSON array
pub fn encode_array<S: AsRef<str>>(items: &[S]) -> String {
    let elements: Vec<String> = items.iter().map(|s| encode_string(s.as_ref())).collect();
    format!("[{}]", elements.join(","))
}

/// Encode a string map as a JSON object
///
/// Pairs come out in the map's key order, which keeps the output
/// deterministic.
pub fn encode_object(map: &BTreeMap<String, String>) -> String {
    let pairs: Vec<String> = map
        .iter()
        .map(|(k, v)| format!("{}:{}", encode_string(k), encode_string(v)))
        .collect();

    format!("{{{}}}", pairs.join(","))
}
