//! Generic error envelope
//!
//! Used when no operation-specific envelope applies. Unlike the NGSI9/NGSI10
//! envelopes it reports the failure on the HTTP status line as well.
//!
//! | API | Payload |
//! |-----|---------|
//! | V1 | `{"orionError":{"code":"400","reasonPhrase":"Bad Request","details":"..."}}` |
//! | V2 | `{"error":"BadRequest","description":"..."}` |

use ctxbroker_core::{ApiVersion, ErrorCode, HttpStatus};
use ctxbroker_wire::JsonObjectBuilder;

use crate::render::error_code_json;

/// A failure rendered without an operation envelope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrionError {
    pub code: HttpStatus,
    pub details: String,
}

impl OrionError {
    pub fn new(code: HttpStatus, details: impl Into<String>) -> Self {
        Self {
            code,
            details: details.into(),
        }
    }

    /// Status to put on the HTTP status line
    ///
    /// V2 has no use for the NGSI-only 47x codes and reports them as 400.
    pub fn http_status(&self, api_version: ApiVersion) -> HttpStatus {
        match api_version {
            ApiVersion::V2 if self.code.is_ngsi_specific() => HttpStatus::BAD_REQUEST,
            _ => self.code,
        }
    }

    /// Render for the given API version
    pub fn render(&self, api_version: ApiVersion) -> String {
        let mut obj = JsonObjectBuilder::new();
        match api_version {
            ApiVersion::V1 => {
                let ec = ErrorCode::new(self.code, self.details.clone());
                obj.add_raw("orionError", &error_code_json(&ec));
            }
            ApiVersion::V2 => {
                obj.add_string("error", self.code.error_name());
                obj.add_string("description", &self.details);
            }
        }
        obj.finalize()
    }

    /// Resolve the HTTP status and render, in one step
    pub fn status_and_render(&self, api_version: ApiVersion) -> (HttpStatus, String) {
        (self.http_status(api_version), self.render(api_version))
    }
}

impl From<ErrorCode> for OrionError {
    fn from(error_code: ErrorCode) -> Self {
        Self {
            code: error_code.code,
            details: error_code.details,
        }
    }
}
