//! # ctxbroker
//!
//! Response rendering for an NGSI context broker.
//!
//! Everything a request worker needs to answer: byte-exact JSON encoding,
//! the NGSI error envelopes, and an HTTP reply composer that applies content
//! negotiation, CORS, and transaction metrics.
//!
//! ## Quick Start
//!
//! ```
//! use ctxbroker::prelude::*;
//!
//! let engine = ReplyEngine::new(RestConfig::default());
//! let mut sink = engine.memory_sink();
//!
//! let mut body = JsonObjectBuilder::new();
//! body.add_string("id", "Room1").add_float("temperature", 23.84);
//!
//! let ctx = ReplyContext::new(Verb::Get, ApiVersion::V2).mime_type(MimeType::Json);
//! engine.reply(&body.finalize(), &ctx, &mut sink);
//!
//! assert_eq!(sink.last().unwrap().body, r#"{"id":"Room1","temperature":23.84}"#);
//! ```
//!
//! ## Layers
//!
//! - [`types`] - protocol vocabulary: versions, verbs, statuses, request types
//! - [`wire`] - JSON encoders and the incremental object builder
//! - [`ngsi`] - operation response envelopes and error rendering
//! - [`metrics`] - per-tenant transaction counters
//! - [`rest`] - configuration, CORS, transport seam, reply composer

#![warn(missing_docs)]

mod engine;
mod error;

pub mod prelude;

// Re-export main entry points
pub use engine::{ReplyEngine, ReplyEngineBuilder};
pub use error::{Error, Result};

// Re-export the layers
pub use ctxbroker_core as types;
pub use ctxbroker_metrics as metrics;
pub use ctxbroker_ngsi as ngsi;
pub use ctxbroker_rest as rest;
pub use ctxbroker_wire as wire;
