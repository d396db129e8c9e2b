//! Wire encoding for ctxbroker
//!
//! This crate produces the JSON text of every broker response. It never
//! builds an intermediate tree: values are escaped and concatenated directly.
//!
//! ## Wire Encoding Rules
//!
//! | Input | JSON Encoding |
//! |-------|--------------|
//! | string | `"..."`, escaped per RFC 8259, `/` left alone |
//! | raw bytes | as string, bytes >= 0x80 copied verbatim |
//! | string sequence | `["a","b"]` |
//! | string map | `{"k":"v"}` in key order |
//! | integer | decimal |
//! | float | fixed point, adaptive number of decimals |
//! | bool | `true`/`false` |
//! | timestamp | `"YYYY-MM-DDThh:mm:ss.00Z"` |
//!
//! ## Examples
//!
//! ```
//! use ctxbroker_wire::{encode_array, encode_string, JsonObjectBuilder};
//!
//! assert_eq!(encode_string("a\"b"), r#""a\"b""#);
//! assert_eq!(encode_array(&["a", "b"]), r#"["a","b"]"#);
//!
//! let mut obj = JsonObjectBuilder::new();
//! obj.add_string("type", "Room");
//! obj.add_float("pressure", 720.25);
//! assert_eq!(obj.finalize(), r#"{"type":"Room","pressure":720.25}"#);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod json;

// Re-export main types
pub use json::{
    digits_needed, encode_array, encode_float, encode_object, encode_raw_string, encode_string,
    format_float, iso8601, JsonObjectBuilder, PRECISION, PRECISION_DIGITS,
};
