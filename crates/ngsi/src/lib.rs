//! NGSI response envelopes for ctxbroker
//!
//! Each NGSI operation answers with its own payload shape. This crate holds
//! those shapes and the renderer that picks the right one for an error:
//!
//! - [`ngsi9`]: context availability envelopes
//! - [`ngsi10`]: context information envelopes
//! - [`orion_error`]: the generic envelope for unrecognized requests
//! - [`error_reply`]: request type to envelope dispatch
//!
//! ```
//! use ctxbroker_core::{ApiVersion, HttpStatus, MimeType, RequestType};
//! use ctxbroker_ngsi::{render_error, ErrorReplyContext};
//!
//! let ctx = ErrorReplyContext::new(ApiVersion::V1, MimeType::Json);
//! let reply = render_error(RequestType::DiscoverContextAvailability, HttpStatus::BAD_REQUEST, "", &ctx);
//! assert_eq!(reply.status, HttpStatus::OK);
//! assert_eq!(reply.body, r#"{"errorCode":{"code":"400","reasonPhrase":"Bad Request"}}"#);
//! ```

pub mod context;
pub mod error_reply;
pub mod ngsi10;
pub mod ngsi9;
pub mod orion_error;
pub mod render;

pub use context::{AttributeValue, ContextAttribute, ContextElement};
pub use error_reply::{
    render_error, ErrorReply, ErrorReplyContext, ErrorResponse, URI_PARAM_ATTRIBUTE_FORMAT,
};
pub use orion_error::OrionError;
pub use render::{add_error_code, error_code_json, Render, RenderVersioned, NO_ID};
