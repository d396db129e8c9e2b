//! Convenient imports for ctxbroker.
//!
//! ```
//! use ctxbroker::prelude::*;
//!
//! let engine = ReplyEngine::new(RestConfig::default());
//! assert!(!engine.config().cors.enabled);
//! ```

// Main entry point
pub use crate::engine::{ReplyEngine, ReplyEngineBuilder};

// Error handling
pub use crate::error::{Error, Result};

// Protocol vocabulary
pub use ctxbroker_core::{ApiVersion, ErrorCode, HttpStatus, MimeType, RequestType, Verb};

// Encoding
pub use ctxbroker_wire::{encode_array, encode_object, encode_string, JsonObjectBuilder};

// Error rendering
pub use ctxbroker_ngsi::{render_error, ErrorReply, ErrorReplyContext};

// Metrics
pub use ctxbroker_metrics::{Metric, MetricsManager, MetricsSink};

// Replies
pub use ctxbroker_rest::{
    CorsConfig, MemorySink, ReplyContext, ReplyOutcome, RestConfig, TransportSink,
};
