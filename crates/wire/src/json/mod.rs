//! JSON wire encoding for broker payloads
//!
//! This is a serializer only; nothing here parses JSON. Every function is
//! total: any input produces valid output.
//!
//! - [`encode`]: string literals, string arrays and string maps
//! - [`float`]: adaptive fractional precision for numbers
//! - [`date`]: ISO-8601 timestamps
//! - [`builder`]: field-by-field object assembly

pub mod builder;
pub mod date;
pub mod encode;
pub mod float;

pub use builder::JsonObjectBuilder;
pub use date::iso8601;
pub use encode::{encode_array, encode_object, encode_raw_string, encode_string};
pub use float::{digits_needed, encode_float, format_float, PRECISION, PRECISION_DIGITS};
