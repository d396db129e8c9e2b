//! Rendering capabilities shared by all response envelopes

use ctxbroker_core::{ApiVersion, ErrorCode, HttpStatus};
use ctxbroker_wire::JsonObjectBuilder;

/// Placeholder identifier used when an error reply needs an id field
pub const NO_ID: &str = "000000000000000000000000";

/// A response that renders the same way regardless of request details
pub trait Render {
    /// Render to JSON text
    fn render(&self) -> String;
}

/// A response whose layout depends on the API version and on whether
/// attributes are requested as a JSON object keyed by name
pub trait RenderVersioned {
    /// Render to JSON text
    fn render_versioned(&self, api_version: ApiVersion, attrs_as_object: bool) -> String;
}

/// Render an [`ErrorCode`] as its V1 object (without the key)
///
/// ```json
/// {"code":"400","reasonPhrase":"Bad Request","details":"..."}
/// ```
/// `details` is left out when empty.
pub fn error_code_json(error_code: &ErrorCode) -> String {
    let mut obj = JsonObjectBuilder::new();
    obj.add_string("code", &error_code.code.code().to_string());
    obj.add_string("reasonPhrase", error_code.reason_phrase());
    if !error_code.details.is_empty() {
        obj.add_string("details", &error_code.details);
    }
    obj.finalize()
}

/// Add `error_code` under its own key name
pub fn add_error_code(obj: &mut JsonObjectBuilder, error_code: &ErrorCode) {
    obj.add_raw(error_code.key_name, &error_code_json(error_code));
}

/// True when the code reports a failure
pub(crate) fn is_failure(error_code: &ErrorCode) -> bool {
    error_code.code != HttpStatus::OK
}
