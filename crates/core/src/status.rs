//! HTTP and NGSI status codes
//!
//! NGSI reuses the HTTP status space and extends it with a few codes in the
//! 47x range that only make sense inside a V1 payload. V2 never puts those on
//! the wire; they collapse to `400 BadRequest`.

use std::fmt;

/// A status code as used on the HTTP status line and inside NGSI payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HttpStatus(u16);

impl HttpStatus {
    pub const OK: HttpStatus = HttpStatus(200);
    pub const CREATED: HttpStatus = HttpStatus(201);
    pub const NO_CONTENT: HttpStatus = HttpStatus(204);
    pub const BAD_REQUEST: HttpStatus = HttpStatus(400);
    pub const UNAUTHORIZED: HttpStatus = HttpStatus(401);
    pub const FORBIDDEN: HttpStatus = HttpStatus(403);
    pub const NOT_FOUND: HttpStatus = HttpStatus(404);
    /// Verb not supported for the resource; CORS headers are never added
    pub const BAD_VERB: HttpStatus = HttpStatus(405);
    pub const NOT_ACCEPTABLE: HttpStatus = HttpStatus(406);
    pub const CONFLICT: HttpStatus = HttpStatus(409);
    pub const LENGTH_REQUIRED: HttpStatus = HttpStatus(411);
    pub const REQUEST_ENTITY_TOO_LARGE: HttpStatus = HttpStatus(413);
    pub const UNSUPPORTED_MEDIA_TYPE: HttpStatus = HttpStatus(415);
    pub const UNPROCESSABLE: HttpStatus = HttpStatus(422);
    pub const SUBSCRIPTION_ID_NOT_FOUND: HttpStatus = HttpStatus(470);
    pub const MISSING_PARAMETER: HttpStatus = HttpStatus(471);
    pub const INVALID_PARAMETER: HttpStatus = HttpStatus(472);
    pub const INVALID_MODIFICATION: HttpStatus = HttpStatus(473);
    pub const INTERNAL_ERROR: HttpStatus = HttpStatus(500);
    pub const NOT_IMPLEMENTED: HttpStatus = HttpStatus(501);
    pub const SERVICE_UNAVAILABLE: HttpStatus = HttpStatus(503);

    /// Wrap a raw numeric code
    pub const fn new(code: u16) -> Self {
        HttpStatus(code)
    }

    /// Numeric value
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Codes in the NGSI extension range (47x)
    pub const fn is_ngsi_specific(&self) -> bool {
        self.0 >= 470 && self.0 <= 479
    }

    /// 2xx
    pub const fn is_success(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }

    /// Reason phrase used in V1 `reasonPhrase` fields
    pub const fn reason_phrase(&self) -> &'static str {
        match self.0 {
            200 => "OK",
            201 => "Created",
            204 => "No Content",
            400 => "Bad Request",
            401 => "Unauthorized",
            403 => "Forbidden",
            404 => "No context element found",
            405 => "Method Not Allowed",
            406 => "Not Acceptable",
            409 => "Conflict",
            411 => "Length Required",
            413 => "Request Entity Too Large",
            415 => "Unsupported Media Type",
            422 => "Unprocessable Entity",
            470 => "Subscription ID not found",
            471 => "Missing Parameter",
            472 => "request parameter is invalid/not allowed",
            473 => "Invalid Modification",
            500 => "Internal Server Error",
            501 => "Not Implemented",
            503 => "Service Unavailable",
            _ => "Undefined",
        }
    }

    /// Error name used in V2 `{"error": ...}` payloads
    pub const fn error_name(&self) -> &'static str {
        match self.0 {
            400 | 470..=479 => "BadRequest",
            401 => "Unauthorized",
            403 => "Forbidden",
            404 => "NotFound",
            405 => "MethodNotAllowed",
            406 => "NotAcceptable",
            409 => "Conflict",
            411 => "LengthRequired",
            413 => "RequestEntityTooLarge",
            415 => "UnsupportedMediaType",
            422 => "Unprocessable",
            500 => "InternalServerError",
            501 => "NotImplemented",
            503 => "ServiceUnavailable",
            _ => "InternalServerError",
        }
    }
}

impl Default for HttpStatus {
    fn default() -> Self {
        HttpStatus::OK
    }
}

impl From<u16> for HttpStatus {
    fn from(code: u16) -> Self {
        HttpStatus(code)
    }
}

impl fmt::Display for HttpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
