//! Core vocabulary for the ctxbroker reply engine
//!
//! Defines the protocol facts every layer agrees on:
//! - [`ApiVersion`], [`Verb`], [`MimeType`]: what the request negotiated
//! - [`HttpStatus`]: HTTP and NGSI status codes
//! - [`RequestType`]: which NGSI operation produced the request
//! - [`ErrorCode`]: the uniform in-payload error

pub mod error_code;
pub mod request_type;
pub mod status;
pub mod types;

pub use error_code::{ErrorCode, ERROR_CODE_KEY};
pub use request_type::RequestType;
pub use status::HttpStatus;
pub use types::{ApiVersion, MimeType, ParseError, Verb};
