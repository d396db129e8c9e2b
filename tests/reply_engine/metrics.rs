//! Metrics Tests
//!
//! Side effects of composing replies on the transaction counters.

use std::thread;

use crate::*;

// =============================================================================
// RESPONSE SIZE / ERRORS
// =============================================================================

#[test]
fn test_response_size_per_tenant() {
    let (engine, metrics) = create_engine_with_metrics();
    let mut sink = engine.memory_sink();

    let a = json_context(Verb::Get, ApiVersion::V2)
        .tenant("smartcity")
        .service_path("/parking");
    let b = json_context(Verb::Get, ApiVersion::V2).tenant("farm");

    engine.reply("{\"a\":1}", &a, &mut sink);
    engine.reply("{}", &b, &mut sink);
    engine.reply("", &b, &mut sink);

    assert_eq!(metrics.get("smartcity", "/parking", Metric::ResponseSize), 7);
    assert_eq!(metrics.get("farm", "", Metric::ResponseSize), 2);
}

#[test]
fn test_allocation_failure_is_metered_and_dropped() {
    let metrics = Arc::new(MetricsManager::new());
    let engine = ReplyEngine::builder()
        .max_response_size(4)
        .metrics(Arc::clone(&metrics))
        .build();
    let mut sink = engine.memory_sink();
    let ctx = json_context(Verb::Get, ApiVersion::V2).tenant("t").service_path("/p");

    let outcome = engine.reply("{\"too\":\"long\"}", &ctx, &mut sink);

    assert!(matches!(outcome, ReplyOutcome::Dropped { .. }));
    assert!(sink.queued().is_empty());
    assert_eq!(metrics.get("t", "/p", Metric::Errors), 1);
    assert_eq!(metrics.get("t", "/p", Metric::ResponseSize), 0);
}

// =============================================================================
// REPORT
// =============================================================================

#[test]
fn test_report_parses() {
    let (engine, metrics) = create_engine_with_metrics();
    let mut sink = engine.memory_sink();
    engine.reply("abc", &json_context(Verb::Get, ApiVersion::V2), &mut sink);

    let v = parse(&metrics.to_json());
    assert_eq!(
        v["services"]["default-service"]["subservs"]["root-subserv"]["incomingTransactionResponseSize"],
        3
    );
    assert_eq!(v["sum"]["incomingTransactionResponseSize"], 3);
}

// =============================================================================
// CONCURRENCY
// =============================================================================

#[test]
fn test_concurrent_workers_share_engine() {
    let (engine, metrics) = create_engine_with_metrics();
    let engine = Arc::new(engine);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                let mut sink = engine.memory_sink();
                let ctx = json_context(Verb::Get, ApiVersion::V2).tenant("t");
                let mut ids = Vec::new();
                for _ in 0..250 {
                    ids.push(engine.reply("{}", &ctx, &mut sink).reply_id());
                }
                assert_eq!(sink.outstanding(), 0);
                ids
            })
        })
        .collect();

    let mut ids: Vec<u64> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    ids.sort_unstable();
    ids.dedup();

    assert_eq!(ids.len(), 1000);
    assert_eq!(metrics.get("t", "", Metric::ResponseSize), 2000);
}
