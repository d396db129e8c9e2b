//! Incremental JSON object construction
//!
//! Response renderers assemble their payloads field by field:
//!
//! ```
//! use ctxbroker_wire::JsonObjectBuilder;
//!
//! let mut obj = JsonObjectBuilder::new();
//! obj.add_string("id", "Room1");
//! obj.add_float("temperature", 23.5);
//! obj.add_bool("active", true);
//! assert_eq!(obj.finalize(), r#"{"id":"Room1","temperature":23.5,"active":true}"#);
//! ```
//!
//! Each `add_*` call renders one `"key":value` fragment immediately; the
//! separators are only placed by [`JsonObjectBuilder::finalize`]. Fields keep
//! insertion order and duplicate keys are not detected.

use super::date::iso8601;
use super::encode::{encode_string, push_escaped};
use super::float::encode_float;

/// Accumulates the fields of one JSON object
///
/// `finalize` consumes the builder, so an object can only be closed once.
#[derive(Debug, Clone, Default)]
pub struct JsonObjectBuilder {
    fields: Vec<String>,
}

impl JsonObjectBuilder {
    /// Start an empty object
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    fn push_field(&mut self, key: &str, value: &str) -> &mut Self {
        let mut field = String::with_capacity(key.len() + value.len() + 3);
        field.push('"');
        push_escaped(&mut field, key);
        field.push_str("\":");
        field.push_str(value);
        self.fields.push(field);
        self
    }

    /// Add a string field; the value is escaped
    pub fn add_string(&mut self, key: &str, value: &str) -> &mut Self {
        self.push_field(key, &encode_string(value))
    }

    /// Add a field whose value is already valid JSON
    ///
    /// Used for numbers, literals and sub-objects rendered elsewhere. The
    /// value is embedded verbatim.
    pub fn add_raw(&mut self, key: &str, raw_json: &str) -> &mut Self {
        self.push_field(key, raw_json)
    }

    /// Add an integral number field
    pub fn add_number(&mut self, key: &str, value: i64) -> &mut Self {
        self.push_field(key, &value.to_string())
    }

    /// Add a floating point field with adaptive precision
    ///
    /// See [`digits_needed`](super::float::digits_needed).
    pub fn add_float(&mut self, key: &str, value: f64) -> &mut Self {
        self.push_field(key, &encode_float(value))
    }

    /// Add an epoch timestamp rendered as an ISO-8601 string
    pub fn add_date(&mut self, key: &str, epoch_seconds: i64) -> &mut Self {
        self.push_field(key, &encode_string(&iso8601(epoch_seconds)))
    }

    /// Add a `true`/`false` literal
    pub fn add_bool(&mut self, key: &str, value: bool) -> &mut Self {
        self.push_field(key, if value { "true" } else { "false" })
    }

    /// Number of fields added so far
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True until the first field is added
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Close the object and return its text
    pub fn finalize(self) -> String {
        let body_len: usize = self.fields.iter().map(|f| f.len() + 1).sum();
        let mut out = String::with_capacity(body_len + 2);
        out.push('{');
        out.push_str(&self.fields.join(","));
        out.push('}');
        out
    }
}
