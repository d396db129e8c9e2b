//! HTTP reply composition for ctxbroker
//!
//! This crate turns rendered bodies into transport responses:
//! - [`config`]: TOML-backed configuration (CORS policy, transport limits)
//! - [`context`]: per-request reply facts
//! - [`cors`]: cross-origin header evaluation
//! - [`sink`]: the transport seam and an in-memory implementation
//! - [`reply`]: the composer tying them together
//!
//! ```
//! use std::sync::Arc;
//! use ctxbroker_core::{ApiVersion, MimeType, Verb};
//! use ctxbroker_metrics::NoopMetrics;
//! use ctxbroker_rest::{CorsConfig, MemorySink, ReplyComposer, ReplyContext};
//!
//! let composer = ReplyComposer::new(CorsConfig::new(), Arc::new(NoopMetrics));
//! let mut sink = MemorySink::new();
//! let ctx = ReplyContext::new(Verb::Get, ApiVersion::V2).mime_type(MimeType::Json);
//! composer.compose("{}", &ctx, &mut sink);
//! assert_eq!(sink.last().unwrap().header("Content-Type"), Some("application/json"));
//! ```

pub mod config;
pub mod context;
pub mod cors;
pub mod reply;
pub mod sink;

pub use config::{
    AllowedOrigin, ConfigError, CorsConfig, RestConfig, TransportConfig, ALL_ORIGINS,
    DEFAULT_MAX_AGE, DEFAULT_MAX_RESPONSE_SIZE,
};
pub use context::ReplyContext;
pub use cors::{cors_headers, CORS_ALLOWED_HEADERS, CORS_EXPOSED_HEADERS};
pub use reply::{ReplyComposer, ReplyOutcome, CONTENT_TYPE};
pub use sink::{MemoryHandle, MemorySink, QueuedResponse, SinkError, TransportSink};
