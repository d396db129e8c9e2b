//! Protocol types shared by every layer of the broker
//!
//! This module defines the per-request protocol facts decided before a reply
//! is rendered:
//! - [`ApiVersion`]: which NGSI generation the request used
//! - [`Verb`]: the HTTP method
//! - [`MimeType`]: the negotiated response encoding

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Failure to parse a protocol token from its textual form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown API version: {0}")]
    ApiVersion(String),

    #[error("unknown HTTP verb: {0}")]
    Verb(String),

    #[error("unknown mime type: {0}")]
    MimeType(String),
}

/// NGSI API generation
///
/// V1 and V2 differ in payload shapes and in CORS scope: V1 only honours
/// CORS for GET.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    V1,
    V2,
}

impl ApiVersion {
    /// URL path segment (`v1`, `v2`)
    pub const fn as_str(&self) -> &'static str {
        match self {
            ApiVersion::V1 => "v1",
            ApiVersion::V2 => "v2",
        }
    }
}

impl FromStr for ApiVersion {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "v1" => Ok(ApiVersion::V1),
            "v2" => Ok(ApiVersion::V2),
            _ => Err(ParseError::ApiVersion(s.to_string())),
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// HTTP method of the request being answered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Options,
}

impl Verb {
    /// Canonical upper-case method token
    pub const fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Patch => "PATCH",
            Verb::Delete => "DELETE",
            Verb::Options => "OPTIONS",
        }
    }
}

impl FromStr for Verb {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(Verb::Get),
            "POST" => Ok(Verb::Post),
            "PUT" => Ok(Verb::Put),
            "PATCH" => Ok(Verb::Patch),
            "DELETE" => Ok(Verb::Delete),
            "OPTIONS" => Ok(Verb::Options),
            _ => Err(ParseError::Verb(s.to_string())),
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Negotiated response encoding
///
/// `None` means negotiation did not settle on anything; no `Content-Type`
/// header is emitted in that case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MimeType {
    Json,
    Text,
    #[default]
    None,
}

impl MimeType {
    /// Value for the `Content-Type` header, if any
    pub const fn content_type(&self) -> Option<&'static str> {
        match self {
            MimeType::Json => Some("application/json"),
            MimeType::Text => Some("text/plain"),
            MimeType::None => None,
        }
    }
}

impl FromStr for MimeType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Parameters such as `; charset=utf-8` do not change the encoding
        let essence = s.split(';').next().unwrap_or("").trim();
        match essence {
            "application/json" => Ok(MimeType::Json),
            "text/plain" => Ok(MimeType::Text),
            "" => Ok(MimeType::None),
            _ => Err(ParseError::MimeType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_version_parse() {
        assert_eq!("v1".parse::<ApiVersion>().unwrap(), ApiVersion::V1);
        assert_eq!("V2".parse::<ApiVersion>().unwrap(), ApiVersion::V2);
        assert!(matches!(
            "v3".parse::<ApiVersion>(),
            Err(ParseError::ApiVersion(_))
        ));
    }

    #[test]
    fn test_verb_parse_is_case_sensitive() {
        assert_eq!("OPTIONS".parse::<Verb>().unwrap(), Verb::Options);
        assert!("get".parse::<Verb>().is_err());
    }

    #[test]
    fn test_verb_roundtrip() {
        for v in [
            Verb::Get,
            Verb::Post,
            Verb::Put,
            Verb::Patch,
            Verb::Delete,
            Verb::Options,
        ] {
            assert_eq!(v.as_str().parse::<Verb>().unwrap(), v);
        }
    }

    #[test]
    fn test_mime_content_type() {
        assert_eq!(MimeType::Json.content_type(), Some("application/json"));
        assert_eq!(MimeType::Text.content_type(), Some("text/plain"));
        assert_eq!(MimeType::None.content_type(), None);
    }

    #[test]
    fn test_mime_parse_ignores_parameters() {
        assert_eq!(
            "application/json; charset=utf-8".parse::<MimeType>().unwrap(),
            MimeType::Json
        );
        assert_eq!("".parse::<MimeType>().unwrap(), MimeType::None);
        assert!("application/xml".parse::<MimeType>().is_err());
    }
}
