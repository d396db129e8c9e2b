//! Reply Engine Test Suite
//!
//! End-to-end checks of the public facade: bodies are built with the wire
//! encoders, errors are rendered through the NGSI envelopes, and replies are
//! composed into an in-memory transport.
//!
//! ## Running Tests
//!
//! ```bash
//! # Run the whole suite
//! cargo test --test reply_engine
//!
//! # Run CORS tests only
//! cargo test --test reply_engine cors::
//! ```

use std::sync::Arc;

use ctxbroker::prelude::*;

// Test modules
pub mod cors;
pub mod encoding;
pub mod errors;
pub mod metrics;

// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

/// Route engine logs to the test harness output
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

/// Engine with default configuration
pub fn create_engine() -> ReplyEngine {
    init_tracing();
    ReplyEngine::new(RestConfig::default())
}

/// Engine with CORS enabled for the given origin setting
pub fn create_cors_engine(allowed_origin: &str) -> ReplyEngine {
    init_tracing();
    ReplyEngine::builder()
        .cors(
            CorsConfig::new()
                .enabled(true)
                .allowed_origin(allowed_origin)
                .max_age(86_400),
        )
        .build()
}

/// Engine plus a handle on its metrics store
pub fn create_engine_with_metrics() -> (ReplyEngine, Arc<MetricsManager>) {
    let metrics = Arc::new(MetricsManager::new());
    let engine = ReplyEngine::builder().metrics(Arc::clone(&metrics)).build();
    (engine, metrics)
}

/// JSON reply context for a verb and API version
pub fn json_context(verb: Verb, api_version: ApiVersion) -> ReplyContext {
    ReplyContext::new(verb, api_version).mime_type(MimeType::Json)
}

/// Parse a rendered body, failing the test on invalid JSON
pub fn parse(body: &str) -> serde_json::Value {
    serde_json::from_str(body).unwrap_or_else(|e| panic!("invalid JSON {:?}: {}", body, e))
}
