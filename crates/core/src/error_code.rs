//! The uniform error carried inside NGSI payloads
//!
//! V1 responses report failures in-band, as a nested object:
//! ```json
//! "errorCode": {
//!   "code": "400",
//!   "reasonPhrase": "Bad Request",
//!   "details": "service path length greater than one"
//! }
//! ```
//! The key the object sits under depends on the response shape
//! (`errorCode`, `statusCode` or `responseCode`), so it travels with the code.

use crate::status::HttpStatus;

/// Key name used by most error envelopes
pub const ERROR_CODE_KEY: &str = "errorCode";

/// An in-payload status: code, free-text details and the key it renders under.
///
/// Built once per error reply and handed to exactly one response variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorCode {
    /// Numeric status
    pub code: HttpStatus,
    /// Human-readable details; omitted from the payload when empty
    pub details: String,
    /// Key the object is rendered under
    pub key_name: &'static str,
}

impl ErrorCode {
    /// Create an error code rendered under [`ERROR_CODE_KEY`]
    pub fn new(code: HttpStatus, details: impl Into<String>) -> Self {
        Self {
            code,
            details: details.into(),
            key_name: ERROR_CODE_KEY,
        }
    }

    /// Same code rendered under a different key
    pub fn with_key_name(mut self, key_name: &'static str) -> Self {
        self.key_name = key_name;
        self
    }

    /// Reason phrase for the code
    pub fn reason_phrase(&self) -> &'static str {
        self.code.reason_phrase()
    }
}
