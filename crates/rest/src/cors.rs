//! Cross-origin response headers

use ctxbroker_core::{ApiVersion, HttpStatus, Verb};

use crate::config::CorsConfig;
use crate::context::ReplyContext;

pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
pub const ACCESS_CONTROL_EXPOSE_HEADERS: &str = "Access-Control-Expose-Headers";
pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
pub const ACCESS_CONTROL_MAX_AGE: &str = "Access-Control-Max-Age";

/// Response headers a browser script may read
pub const CORS_EXPOSED_HEADERS: &str = "Fiware-Correlator, Fiware-Total-Count, Location";

/// Request headers a preflighted request may send
pub const CORS_ALLOWED_HEADERS: &str = "Content-Type, Fiware-Service, Fiware-Servicepath, \
     Ngsiv2-AttrsFormat, Fiware-Correlator, X-Forwarded-For, X-Real-IP, X-Auth-Token";

/// CORS headers to add to a reply, in send order
///
/// Empty unless CORS is enabled, the request named an origin, the reply is
/// not a bad-verb rejection, and the request is V2 or a V1 `GET`. V1 only
/// supports CORS on reads.
pub fn cors_headers(cors: &CorsConfig, ctx: &ReplyContext) -> Vec<(&'static str, String)> {
    let mut headers = Vec::new();

    if !cors.enabled || ctx.status == HttpStatus::BAD_VERB {
        return headers;
    }
    let Some(origin) = ctx.request_origin() else {
        return headers;
    };
    let version_allows = match ctx.api_version {
        ApiVersion::V2 => true,
        ApiVersion::V1 => ctx.verb == Verb::Get,
    };
    if !version_allows {
        return headers;
    }
    let Some(allow_origin) = cors.allowed_origin.header_value(origin) else {
        return headers;
    };

    headers.push((ACCESS_CONTROL_ALLOW_ORIGIN, allow_origin.to_string()));
    headers.push((ACCESS_CONTROL_EXPOSE_HEADERS, CORS_EXPOSED_HEADERS.to_string()));
    if ctx.verb == Verb::Options {
        headers.push((ACCESS_CONTROL_ALLOW_HEADERS, CORS_ALLOWED_HEADERS.to_string()));
        headers.push((ACCESS_CONTROL_MAX_AGE, cors.max_age.to_string()));
    }
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(headers: &[(&'static str, String)]) -> Vec<&'static str> {
        headers.iter().map(|(n, _)| *n).collect()
    }

    fn wildcard() -> CorsConfig {
        CorsConfig::new().enabled(true)
    }

    #[test]
    fn test_disabled_adds_nothing() {
        let ctx = ReplyContext::new(Verb::Get, ApiVersion::V2).origin("https://a");
        assert!(cors_headers(&CorsConfig::new(), &ctx).is_empty());
    }

    #[test]
    fn test_missing_origin_adds_nothing() {
        let ctx = ReplyContext::new(Verb::Get, ApiVersion::V2);
        assert!(cors_headers(&wildcard(), &ctx).is_empty());
        let ctx = ctx.origin("");
        assert!(cors_headers(&wildcard(), &ctx).is_empty());
    }

    #[test]
    fn test_bad_verb_adds_nothing() {
        let ctx = ReplyContext::new(Verb::Get, ApiVersion::V2)
            .origin("https://a")
            .status(HttpStatus::BAD_VERB);
        assert!(cors_headers(&wildcard(), &ctx).is_empty());
    }

    #[test]
    fn test_v1_only_for_get() {
        let get = ReplyContext::new(Verb::Get, ApiVersion::V1).origin("https://a");
        assert_eq!(cors_headers(&wildcard(), &get).len(), 2);
        let post = ReplyContext::new(Verb::Post, ApiVersion::V1).origin("https://a");
        assert!(cors_headers(&wildcard(), &post).is_empty());
    }

    #[test]
    fn test_wildcard_sends_star() {
        let ctx = ReplyContext::new(Verb::Patch, ApiVersion::V2).origin("https://a");
        let headers = cors_headers(&wildcard(), &ctx);
        assert_eq!(
            names(&headers),
            vec![ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_EXPOSE_HEADERS]
        );
        assert_eq!(headers[0].1, "*");
        assert_eq!(headers[1].1, CORS_EXPOSED_HEADERS);
    }

    #[test]
    fn test_exact_origin_echoed_or_refused() {
        let cors = wildcard().allowed_origin("https://a");
        let ok = ReplyContext::new(Verb::Get, ApiVersion::V2).origin("https://a");
        assert_eq!(cors_headers(&cors, &ok)[0].1, "https://a");
        let other = ReplyContext::new(Verb::Get, ApiVersion::V2).origin("https://b");
        assert!(cors_headers(&cors, &other).is_empty());
    }

    #[test]
    fn test_options_preflight() {
        let cors = wildcard().max_age(600);
        let ctx = ReplyContext::new(Verb::Options, ApiVersion::V2).origin("https://a");
        let headers = cors_headers(&cors, &ctx);
        assert_eq!(
            names(&headers),
            vec![
                ACCESS_CONTROL_ALLOW_ORIGIN,
                ACCESS_CONTROL_EXPOSE_HEADERS,
                ACCESS_CONTROL_ALLOW_HEADERS,
                ACCESS_CONTROL_MAX_AGE,
            ]
        );
        assert_eq!(headers[3].1, "600");
    }

    #[test]
    fn test_v1_options_not_allowed() {
        let ctx = ReplyContext::new(Verb::Options, ApiVersion::V1).origin("https://a");
        assert!(cors_headers(&wildcard(), &ctx).is_empty());
    }
}
