//! Error Reply Tests
//!
//! Errors rendered in each operation's envelope and sent through the engine.

use crate::*;

// =============================================================================
// OPERATION ENVELOPES
// =============================================================================

#[test]
fn test_known_operations_reply_200_with_error_payload() {
    let engine = create_engine();
    let mut sink = engine.memory_sink();
    let ctx = json_context(Verb::Post, ApiVersion::V1);

    for request_type in RequestType::ALL {
        if request_type == RequestType::Unrecognized {
            continue;
        }
        engine.reply_error(
            request_type,
            HttpStatus::BAD_REQUEST,
            "service not found",
            None,
            &ctx,
            &mut sink,
        );
        let sent = sink.last().unwrap();
        assert_eq!(sent.status, HttpStatus::OK, "{}", request_type);
        assert!(parse(&sent.body).is_object(), "{}", request_type);
        assert!(sent.body.contains("service not found"), "{}", request_type);
    }
    assert_eq!(sink.queued().len(), 12);
}

#[test]
fn test_placeholder_ids() {
    let engine = create_engine();
    let mut sink = engine.memory_sink();
    let ctx = json_context(Verb::Post, ApiVersion::V1);

    engine.reply_error(RequestType::RegisterContext, HttpStatus::BAD_REQUEST, "", None, &ctx, &mut sink);
    let v = parse(&sink.last().unwrap().body);
    assert_eq!(v["registrationId"], "000000000000000000000000");

    engine.reply_error(
        RequestType::SubscribeContextAvailability,
        HttpStatus::BAD_REQUEST,
        "",
        None,
        &ctx,
        &mut sink,
    );
    let v = parse(&sink.last().unwrap().body);
    assert_eq!(v["subscriptionId"], "000000000000000000000000");
}

#[test]
fn test_envelope_keys() {
    let engine = create_engine();
    let mut sink = engine.memory_sink();
    let ctx = json_context(Verb::Post, ApiVersion::V1);

    let cases = [
        (RequestType::SubscribeContext, "subscribeError"),
        (RequestType::UpdateContextSubscription, "subscribeError"),
        (RequestType::UnsubscribeContext, "statusCode"),
        (RequestType::UnsubscribeContextAvailability, "statusCode"),
        (RequestType::NotifyContext, "responseCode"),
        (RequestType::NotifyContextAvailability, "responseCode"),
        (RequestType::QueryContext, "errorCode"),
        (RequestType::UpdateContext, "errorCode"),
        (RequestType::DiscoverContextAvailability, "errorCode"),
    ];
    for (request_type, key) in cases {
        engine.reply_error(request_type, HttpStatus::NOT_FOUND, "", None, &ctx, &mut sink);
        let v = parse(&sink.last().unwrap().body);
        assert!(v.get(key).is_some(), "{} missing {}", request_type, key);
    }
}

#[test]
fn test_query_context_attrs_format_object() {
    let engine = create_engine();
    let mut sink = engine.memory_sink();
    let ctx = json_context(Verb::Post, ApiVersion::V2);

    engine.reply_error(
        RequestType::QueryContext,
        HttpStatus::NOT_FOUND,
        "",
        Some("object"),
        &ctx,
        &mut sink,
    );
    let sent = sink.last().unwrap();
    assert_eq!(sent.status, HttpStatus::OK);
    assert_eq!(parse(&sent.body)["errorCode"]["code"], "404");
}

// =============================================================================
// GENERIC FALLBACK
// =============================================================================

#[test]
fn test_unrecognized_v1_keeps_status() {
    let engine = create_engine();
    let mut sink = engine.memory_sink();
    let ctx = json_context(Verb::Get, ApiVersion::V1);

    engine.reply_error(
        RequestType::Unrecognized,
        HttpStatus::INVALID_PARAMETER,
        "bad param",
        None,
        &ctx,
        &mut sink,
    );
    let sent = sink.last().unwrap();
    assert_eq!(sent.status, HttpStatus::INVALID_PARAMETER);
    let v = parse(&sent.body);
    assert_eq!(v["orionError"]["code"], "472");
    assert_eq!(v["orionError"]["details"], "bad param");
}

#[test]
fn test_unrecognized_v2_resolves_own_status() {
    let engine = create_engine();
    let mut sink = engine.memory_sink();
    let ctx = json_context(Verb::Get, ApiVersion::V2);

    engine.reply_error(
        RequestType::Unrecognized,
        HttpStatus::INVALID_PARAMETER,
        "bad param",
        None,
        &ctx,
        &mut sink,
    );
    let sent = sink.last().unwrap();
    assert_eq!(sent.status, HttpStatus::BAD_REQUEST);
    assert_eq!(sent.body, r#"{"error":"BadRequest","description":"bad param"}"#);
    assert_eq!(sent.header("Content-Type"), Some("application/json"));
}

#[test]
fn test_request_type_names_resolve() {
    assert_eq!(RequestType::from_name("queryContext"), RequestType::QueryContext);
    assert_eq!(RequestType::from_name("nonsense"), RequestType::Unrecognized);
}
