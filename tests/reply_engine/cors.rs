//! CORS Tests
//!
//! The cross-origin scenarios a browser client can hit, through the engine.

use ctxbroker::rest::{CORS_ALLOWED_HEADERS, CORS_EXPOSED_HEADERS};

use crate::*;

fn send(engine: &ReplyEngine, ctx: &ReplyContext) -> ctxbroker::rest::QueuedResponse {
    let mut sink = engine.memory_sink();
    engine.reply("{}", ctx, &mut sink);
    sink.last().cloned().unwrap()
}

// =============================================================================
// SCENARIOS
// =============================================================================

#[test]
fn test_wildcard_v2_get() {
    let engine = create_cors_engine("__ALL");
    let ctx = json_context(Verb::Get, ApiVersion::V2).origin("https://dashboard.example");
    let sent = send(&engine, &ctx);
    assert_eq!(sent.header("Access-Control-Allow-Origin"), Some("*"));
    assert_eq!(sent.header("Access-Control-Expose-Headers"), Some(CORS_EXPOSED_HEADERS));
    assert!(sent.header("Access-Control-Max-Age").is_none());
}

#[test]
fn test_exact_origin_match_is_echoed() {
    let engine = create_cors_engine("https://dashboard.example");
    let ctx = json_context(Verb::Get, ApiVersion::V2).origin("https://dashboard.example");
    let sent = send(&engine, &ctx);
    assert_eq!(
        sent.header("Access-Control-Allow-Origin"),
        Some("https://dashboard.example")
    );
}

#[test]
fn test_exact_origin_mismatch_adds_nothing() {
    let engine = create_cors_engine("https://dashboard.example");
    let ctx = json_context(Verb::Get, ApiVersion::V2).origin("https://evil.example");
    let sent = send(&engine, &ctx);
    assert!(sent.header("Access-Control-Allow-Origin").is_none());
    assert!(sent.header("Access-Control-Expose-Headers").is_none());
}

#[test]
fn test_v1_post_adds_nothing() {
    let engine = create_cors_engine("__ALL");
    let ctx = json_context(Verb::Post, ApiVersion::V1).origin("https://dashboard.example");
    let sent = send(&engine, &ctx);
    assert!(sent.header("Access-Control-Allow-Origin").is_none());
}

#[test]
fn test_options_preflight_v2() {
    let engine = create_cors_engine("__ALL");
    let ctx = json_context(Verb::Options, ApiVersion::V2).origin("https://dashboard.example");
    let sent = send(&engine, &ctx);
    assert_eq!(sent.header("Access-Control-Allow-Origin"), Some("*"));
    assert_eq!(sent.header("Access-Control-Allow-Headers"), Some(CORS_ALLOWED_HEADERS));
    assert_eq!(sent.header("Access-Control-Max-Age"), Some("86400"));
}

#[test]
fn test_bad_verb_adds_nothing() {
    let engine = create_cors_engine("__ALL");
    let ctx = json_context(Verb::Put, ApiVersion::V2)
        .origin("https://dashboard.example")
        .status(HttpStatus::BAD_VERB);
    let sent = send(&engine, &ctx);
    assert_eq!(sent.status, HttpStatus::BAD_VERB);
    assert!(sent.header("Access-Control-Allow-Origin").is_none());
}

#[test]
fn test_disabled_by_default() {
    let engine = create_engine();
    let ctx = json_context(Verb::Get, ApiVersion::V2).origin("https://dashboard.example");
    let sent = send(&engine, &ctx);
    assert!(sent.header("Access-Control-Allow-Origin").is_none());
}

#[test]
fn test_policy_from_toml() {
    let config = RestConfig::from_toml_str(
        "[cors]\nenabled = true\nallowed_origin = \"https://a.example\"\nmax_age = 60\n",
    )
    .unwrap();
    let engine = ReplyEngine::new(config);
    let ctx = json_context(Verb::Options, ApiVersion::V2).origin("https://a.example");
    let sent = send(&engine, &ctx);
    assert_eq!(sent.header("Access-Control-Allow-Origin"), Some("https://a.example"));
    assert_eq!(sent.header("Access-Control-Max-Age"), Some("60"));
}

#[test]
fn test_policy_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ctxbroker.toml");
    std::fs::write(&path, "[cors]\nenabled = true\n").unwrap();

    let engine = ReplyEngine::from_file(&path).unwrap();
    let ctx = json_context(Verb::Get, ApiVersion::V1).origin("https://a.example");
    let sent = send(&engine, &ctx);
    assert_eq!(sent.header("Access-Control-Allow-Origin"), Some("*"));
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = ReplyEngine::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.is_config());
}
