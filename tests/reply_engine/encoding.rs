//! Encoding Tests
//!
//! Bodies built with the wire encoders, checked byte for byte and through a
//! conformant parser.

use std::collections::BTreeMap;

use ctxbroker::wire::{digits_needed, encode_float, iso8601, PRECISION_DIGITS};

use crate::*;

// =============================================================================
// SCALARS
// =============================================================================

#[test]
fn test_string_escapes() {
    assert_eq!(encode_string("a\"b\\c"), r#""a\"b\\c""#);
    assert_eq!(encode_string("line\nnext\ttab"), r#""line\nnext\ttab""#);
    assert_eq!(encode_string("\u{1}"), r#""\u0001""#);
    assert_eq!(encode_string("\u{1f}"), r#""\u001F""#);
    assert_eq!(encode_string("/v2/entities"), r#""/v2/entities""#);
}

#[test]
fn test_non_ascii_passes_through() {
    assert_eq!(encode_string("Zürich ☀"), "\"Zürich ☀\"");
    assert_eq!(parse(&encode_string("Zürich ☀")), "Zürich ☀");
}

#[test]
fn test_every_control_character_parses_back() {
    let all: String = (0u8..0x20).map(char::from).collect();
    assert_eq!(parse(&encode_string(&all)), all.as_str());
}

// =============================================================================
// SEQUENCES AND MAPS
// =============================================================================

#[test]
fn test_array_and_object() {
    assert_eq!(encode_array::<&str>(&[]), "[]");
    assert_eq!(encode_array(&["a", "b"]), r#"["a","b"]"#);

    let mut map = BTreeMap::new();
    assert_eq!(encode_object(&map), "{}");
    map.insert("k2".to_string(), "v2".to_string());
    map.insert("k1".to_string(), "v\"1".to_string());
    assert_eq!(encode_object(&map), r#"{"k1":"v\"1","k2":"v2"}"#);
}

// =============================================================================
// FLOATS
// =============================================================================

#[test]
fn test_float_digits() {
    assert_eq!(digits_needed(42.9), 1);
    assert_eq!(digits_needed(42.0), 0);
    assert_eq!(digits_needed(42.99), 2);
    for v in [0.1, 1.0 / 3.0, 2.0_f64.sqrt(), -7.123_456_789_123] {
        assert!(digits_needed(v) <= PRECISION_DIGITS);
    }
}

#[test]
fn test_float_text_has_no_exponent() {
    for v in [1e-9, 1e15, 123_456.789, -0.5] {
        let text = encode_float(v);
        assert!(!text.contains('e') && !text.contains('E'), "{}", text);
        assert!(parse(&text).is_number());
    }
}

// =============================================================================
// BUILDER
// =============================================================================

#[test]
fn test_builder_example() {
    let mut obj = JsonObjectBuilder::new();
    obj.add_string("a", "b").add_bool("c", true);
    assert_eq!(obj.finalize(), r#"{"a":"b","c":true}"#);
}

#[test]
fn test_builder_mixed_fields() {
    let mut obj = JsonObjectBuilder::new();
    obj.add_string("id", "Room1")
        .add_number("floor", -2)
        .add_float("temperature", 21.5)
        .add_date("dateModified", 1_500_000_000)
        .add_raw("tags", &encode_array(&["a", "b"]));
    let text = obj.finalize();
    assert_eq!(
        text,
        r#"{"id":"Room1","floor":-2,"temperature":21.5,"dateModified":"2017-07-14T02:40:00.00Z","tags":["a","b"]}"#
    );
    let v = parse(&text);
    assert_eq!(v["temperature"], 21.5);
}

#[test]
fn test_builder_empty() {
    assert_eq!(JsonObjectBuilder::new().finalize(), "{}");
}

#[test]
fn test_dates() {
    assert_eq!(iso8601(0), "1970-01-01T00:00:00.00Z");
}
