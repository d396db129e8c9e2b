//! Reply composition
//!
//! The last step of every request: a rendered body plus the request's
//! [`ReplyContext`] become one queued transport response.
//!
//! | Step | Effect |
//! |------|--------|
//! | allocate | failure counts `incomingTransactionErrors` and ends the reply |
//! | size | non-empty body adds to `incomingTransactionResponseSize` |
//! | headers | context headers, then `Content-Type`, then CORS |
//! | queue | sent with the context status, handle always released |

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use ctxbroker_core::HttpStatus;
use ctxbroker_metrics::{Metric, MetricsSink};
use tracing::{debug, error, trace};

use crate::config::CorsConfig;
use crate::context::ReplyContext;
use crate::cors::cors_headers;
use crate::sink::{ResponseGuard, TransportSink};

pub const CONTENT_TYPE: &str = "Content-Type";

/// What happened to a composed reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyOutcome {
    Queued {
        reply_id: u64,
        status: HttpStatus,
        bytes: usize,
    },
    /// The transport could not allocate the response; nothing was sent
    Dropped { reply_id: u64 },
}

impl ReplyOutcome {
    pub fn reply_id(&self) -> u64 {
        match self {
            ReplyOutcome::Queued { reply_id, .. } | ReplyOutcome::Dropped { reply_id } => *reply_id,
        }
    }

    pub fn is_queued(&self) -> bool {
        matches!(self, ReplyOutcome::Queued { .. })
    }
}

/// Turns bodies into transport responses
///
/// Shared by all request workers; `compose` takes `&self`.
pub struct ReplyComposer {
    cors: CorsConfig,
    metrics: Arc<dyn MetricsSink>,
    next_reply: AtomicU64,
}

impl ReplyComposer {
    pub fn new(cors: CorsConfig, metrics: Arc<dyn MetricsSink>) -> Self {
        Self {
            cors,
            metrics,
            next_reply: AtomicU64::new(1),
        }
    }

    pub fn cors(&self) -> &CorsConfig {
        &self.cors
    }

    /// Send `body` as the reply described by `ctx`
    pub fn compose<S: TransportSink>(
        &self,
        body: &str,
        ctx: &ReplyContext,
        sink: &mut S,
    ) -> ReplyOutcome {
        let reply_id = self.next_reply.fetch_add(1, Ordering::Relaxed);
        let bytes = body.len();

        debug!(reply_id, bytes, status = %ctx.status, "responding");
        trace!(reply_id, payload = body, "response payload");

        let mut response = match ResponseGuard::allocate(sink, body) {
            Ok(response) => response,
            Err(e) => {
                self.metrics
                    .add(&ctx.tenant, &ctx.service_path, Metric::Errors, 1);
                error!(reply_id, error = %e, "cannot create response");
                return ReplyOutcome::Dropped { reply_id };
            }
        };

        if bytes > 0 {
            self.metrics.add(
                &ctx.tenant,
                &ctx.service_path,
                Metric::ResponseSize,
                bytes as u64,
            );
        }

        for (name, value) in &ctx.headers {
            response.add_header(name, value);
        }

        if bytes > 0 {
            if let Some(content_type) = ctx.mime_type.content_type() {
                response.add_header(CONTENT_TYPE, content_type);
            }
        }

        for (name, value) in cors_headers(&self.cors, ctx) {
            response.add_header(name, &value);
        }

        response.queue(ctx.status);

        ReplyOutcome::Queued {
            reply_id,
            status: ctx.status,
            bytes,
        }
    }
}

impl std::fmt::Debug for ReplyComposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReplyComposer")
            .field("cors", &self.cors)
            .field("next_reply", &self.next_reply.load(Ordering::Relaxed))
            .finish()
    }
}
