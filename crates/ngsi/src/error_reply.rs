//! Error reply rendering
//!
//! NGSI operations report failures inside their own response envelope, so an
//! error found anywhere while serving a request has to be rendered in the
//! shape of the operation that was requested. The HTTP status of such replies
//! is `200 OK`: the failure travels in the payload. Requests that match no
//! operation get the generic [`OrionError`] envelope, which sets a real HTTP
//! error status.

use ctxbroker_core::{ApiVersion, ErrorCode, HttpStatus, MimeType, RequestType};

use crate::ngsi10::{
    NotifyContextResponse, QueryContextResponse, SubscribeContextResponse,
    UnsubscribeContextResponse, UpdateContextResponse, UpdateContextSubscriptionResponse,
};
use crate::ngsi9::{
    DiscoverContextAvailabilityResponse, NotifyContextAvailabilityResponse,
    RegisterContextResponse, SubscribeContextAvailabilityResponse,
    UnsubscribeContextAvailabilityResponse, UpdateContextAvailabilitySubscriptionResponse,
};
use crate::orion_error::OrionError;
use crate::render::{Render, RenderVersioned, NO_ID};

/// URI parameter selecting the attribute layout
pub const URI_PARAM_ATTRIBUTE_FORMAT: &str = "attrsFormat";

/// Request facts the error renderer needs
#[derive(Debug, Clone, Copy)]
pub struct ErrorReplyContext<'a> {
    pub api_version: ApiVersion,
    pub mime_type: MimeType,
    /// Value of the `attrsFormat` URI parameter, if given
    pub attrs_format: Option<&'a str>,
}

impl<'a> ErrorReplyContext<'a> {
    pub fn new(api_version: ApiVersion, mime_type: MimeType) -> Self {
        Self {
            api_version,
            mime_type,
            attrs_format: None,
        }
    }

    pub fn with_attrs_format(mut self, attrs_format: &'a str) -> Self {
        self.attrs_format = Some(attrs_format);
        self
    }

    /// `attrsFormat=object` only applies to JSON output
    pub fn attrs_as_object(&self) -> bool {
        self.attrs_format == Some("object") && self.mime_type == MimeType::Json
    }
}

/// A rendered error body and the HTTP status to send it with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReply {
    pub body: String,
    pub status: HttpStatus,
}

/// The response envelope chosen for an error, one variant per request type
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorResponse {
    RegisterContext(RegisterContextResponse),
    DiscoverContextAvailability(DiscoverContextAvailabilityResponse),
    SubscribeContextAvailability(SubscribeContextAvailabilityResponse),
    UpdateContextAvailabilitySubscription(UpdateContextAvailabilitySubscriptionResponse),
    UnsubscribeContextAvailability(UnsubscribeContextAvailabilityResponse),
    NotifyContextAvailability(NotifyContextAvailabilityResponse),
    QueryContext(QueryContextResponse),
    SubscribeContext(SubscribeContextResponse),
    UpdateContextSubscription(UpdateContextSubscriptionResponse),
    UnsubscribeContext(UnsubscribeContextResponse),
    UpdateContext(UpdateContextResponse),
    NotifyContext(NotifyContextResponse),
    Generic(OrionError),
}

impl ErrorResponse {
    /// Build the envelope for `request_type` carrying `error_code`
    pub fn for_request(request_type: RequestType, error_code: ErrorCode) -> Self {
        match request_type {
            RequestType::RegisterContext => {
                Self::RegisterContext(RegisterContextResponse::new(NO_ID, error_code))
            }
            RequestType::DiscoverContextAvailability => Self::DiscoverContextAvailability(
                DiscoverContextAvailabilityResponse::new(error_code),
            ),
            RequestType::SubscribeContextAvailability => Self::SubscribeContextAvailability(
                SubscribeContextAvailabilityResponse::new(NO_ID, error_code),
            ),
            RequestType::UpdateContextAvailabilitySubscription => {
                Self::UpdateContextAvailabilitySubscription(
                    UpdateContextAvailabilitySubscriptionResponse::new(error_code),
                )
            }
            RequestType::UnsubscribeContextAvailability => Self::UnsubscribeContextAvailability(
                UnsubscribeContextAvailabilityResponse::new(error_code),
            ),
            RequestType::NotifyContextAvailability => Self::NotifyContextAvailability(
                NotifyContextAvailabilityResponse::new(error_code),
            ),
            RequestType::QueryContext => Self::QueryContext(QueryContextResponse::new(error_code)),
            RequestType::SubscribeContext => {
                Self::SubscribeContext(SubscribeContextResponse::new(error_code))
            }
            RequestType::UpdateContextSubscription => Self::UpdateContextSubscription(
                UpdateContextSubscriptionResponse::new(error_code),
            ),
            RequestType::UnsubscribeContext => {
                Self::UnsubscribeContext(UnsubscribeContextResponse::new(error_code))
            }
            RequestType::UpdateContext => {
                Self::UpdateContext(UpdateContextResponse::new(error_code))
            }
            RequestType::NotifyContext => {
                Self::NotifyContext(NotifyContextResponse::new(error_code))
            }
            RequestType::Unrecognized => Self::Generic(OrionError::from(error_code)),
        }
    }

    /// Render the envelope and resolve the HTTP status
    pub fn render(&self, ctx: &ErrorReplyContext<'_>) -> ErrorReply {
        let body = match self {
            Self::RegisterContext(r) => r.render(),
            Self::DiscoverContextAvailability(r) => r.render(),
            Self::SubscribeContextAvailability(r) => r.render(),
            Self::UpdateContextAvailabilitySubscription(r) => r.render(),
            Self::UnsubscribeContextAvailability(r) => r.render(),
            Self::NotifyContextAvailability(r) => r.render(),
            Self::QueryContext(r) => r.render_versioned(ctx.api_version, ctx.attrs_as_object()),
            Self::SubscribeContext(r) => r.render(),
            Self::UpdateContextSubscription(r) => r.render(),
            Self::UnsubscribeContext(r) => r.render(),
            Self::UpdateContext(r) => r.render_versioned(ctx.api_version, ctx.attrs_as_object()),
            Self::NotifyContext(r) => r.render(),
            Self::Generic(oe) => {
                let (status, body) = oe.status_and_render(ctx.api_version);
                return ErrorReply { body, status };
            }
        };

        ErrorReply {
            body,
            status: HttpStatus::OK,
        }
    }
}

/// Render an error for `request_type` in the envelope that operation uses
pub fn render_error(
    request_type: RequestType,
    status: HttpStatus,
    details: &str,
    ctx: &ErrorReplyContext<'_>,
) -> ErrorReply {
    let error_code = ErrorCode::new(status, details);
    let reply = ErrorResponse::for_request(request_type, error_code).render(ctx);

    tracing::debug!(
        request_type = %request_type,
        error_code = %status,
        http_status = %reply.status,
        "rendered error reply"
    );

    reply
}
