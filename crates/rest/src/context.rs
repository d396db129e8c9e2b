//! Per-request facts needed to send a reply

use ctxbroker_core::{ApiVersion, HttpStatus, MimeType, Verb};

/// What the composer needs to know about the request being answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyContext {
    pub status: HttpStatus,
    pub verb: Verb,
    pub api_version: ApiVersion,
    /// Negotiated output type
    pub mime_type: MimeType,
    /// Extra response headers, sent in this order
    pub headers: Vec<(String, String)>,
    /// Request `Origin` header
    pub origin: Option<String>,
    pub tenant: String,
    /// First service path of the request, empty for the root
    pub service_path: String,
}

impl ReplyContext {
    pub fn new(verb: Verb, api_version: ApiVersion) -> Self {
        Self {
            status: HttpStatus::OK,
            verb,
            api_version,
            mime_type: MimeType::None,
            headers: Vec::new(),
            origin: None,
            tenant: String::new(),
            service_path: String::new(),
        }
    }

    pub fn status(mut self, status: HttpStatus) -> Self {
        self.status = status;
        self
    }

    pub fn mime_type(mut self, mime_type: MimeType) -> Self {
        self.mime_type = mime_type;
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn tenant(mut self, tenant: impl Into<String>) -> Self {
        self.tenant = tenant.into();
        self
    }

    pub fn service_path(mut self, service_path: impl Into<String>) -> Self {
        self.service_path = service_path.into();
        self
    }

    /// The request origin, treating an empty header as absent
    pub fn request_origin(&self) -> Option<&str> {
        self.origin.as_deref().filter(|o| !o.is_empty())
    }
}
