use std::path::Path;
use std::sync::Arc;

use ctxbroker_core::{ApiVersion, HttpStatus, MimeType, RequestType, Verb};
use ctxbroker_metrics::MetricsManager;
use ctxbroker_ngsi::{render_error, ErrorReplyContext};
use ctxbroker_rest::{
    CorsConfig, MemorySink, ReplyComposer, ReplyContext, ReplyOutcome, RestConfig, TransportSink,
};
use tracing::debug;

use crate::error::Result;

/// The reply engine.
///
/// Holds the startup configuration, the metrics store, and the composer that
/// every request worker shares. Create one with [`ReplyEngine::new`],
/// [`ReplyEngine::from_file`] or [`ReplyEngine::builder`].
///
/// # Example
///
/// ```
/// use ctxbroker::prelude::*;
///
/// let engine = ReplyEngine::new(RestConfig::default());
/// let mut sink = engine.memory_sink();
/// let ctx = ReplyEngine::context_for("GET", "v2", "application/json")?;
///
/// engine.reply_error(RequestType::Unrecognized, HttpStatus::NOT_FOUND, "no such entity", None, &ctx, &mut sink);
///
/// let sent = sink.last().unwrap();
/// assert_eq!(sent.status, HttpStatus::NOT_FOUND);
/// assert_eq!(sent.body, r#"{"error":"NotFound","description":"no such entity"}"#);
/// # Ok::<(), ctxbroker::Error>(())
/// ```
pub struct ReplyEngine {
    config: RestConfig,
    metrics: Arc<MetricsManager>,
    composer: ReplyComposer,
}

impl ReplyEngine {
    /// Create an engine from an already loaded configuration.
    pub fn new(config: RestConfig) -> Self {
        Self::builder().config(config).build()
    }

    /// Load the configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(RestConfig::from_file(path)?))
    }

    /// Create a builder for engine configuration.
    pub fn builder() -> ReplyEngineBuilder {
        ReplyEngineBuilder::new()
    }

    /// The configuration this engine was built with.
    pub fn config(&self) -> &RestConfig {
        &self.config
    }

    /// Transaction counters accumulated by this engine.
    pub fn metrics(&self) -> &MetricsManager {
        &self.metrics
    }

    /// An in-memory transport honouring the configured response size limit.
    pub fn memory_sink(&self) -> MemorySink {
        MemorySink::with_max_response_size(self.config.transport.max_response_size)
    }

    /// Interpret raw request facts into a reply context.
    ///
    /// An empty `mime_type` means no output type was negotiated.
    pub fn context_for(verb: &str, api_version: &str, mime_type: &str) -> Result<ReplyContext> {
        let verb: Verb = verb.parse()?;
        let api_version: ApiVersion = api_version.parse()?;
        let mime_type: MimeType = mime_type.parse()?;
        Ok(ReplyContext::new(verb, api_version).mime_type(mime_type))
    }

    /// Send a successful body.
    pub fn reply<S: TransportSink>(
        &self,
        body: &str,
        ctx: &ReplyContext,
        sink: &mut S,
    ) -> ReplyOutcome {
        self.composer.compose(body, ctx, sink)
    }

    /// Render an error in the envelope of `request_type` and send it.
    ///
    /// The reply goes out with the status the error renderer resolves, not
    /// the one in `ctx`.
    pub fn reply_error<S: TransportSink>(
        &self,
        request_type: RequestType,
        status: HttpStatus,
        details: &str,
        attrs_format: Option<&str>,
        ctx: &ReplyContext,
        sink: &mut S,
    ) -> ReplyOutcome {
        let error_ctx = ErrorReplyContext {
            api_version: ctx.api_version,
            mime_type: ctx.mime_type,
            attrs_format,
        };
        let rendered = render_error(request_type, status, details, &error_ctx);
        debug!(
            request_type = %request_type,
            status = %rendered.status,
            "sending error reply"
        );

        let ctx = ReplyContext {
            status: rendered.status,
            ..ctx.clone()
        };
        self.composer.compose(&rendered.body, &ctx, sink)
    }
}

impl std::fmt::Debug for ReplyEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReplyEngine")
            .field("config", &self.config)
            .field("metrics", &self.metrics)
            .finish()
    }
}

/// Builder for engine configuration.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use ctxbroker::prelude::*;
///
/// let metrics = Arc::new(MetricsManager::new());
/// let engine = ReplyEngine::builder()
///     .cors(CorsConfig::new().enabled(true))
///     .metrics(metrics.clone())
///     .build();
/// assert!(engine.config().cors.enabled);
/// ```
#[derive(Debug, Default)]
pub struct ReplyEngineBuilder {
    config: RestConfig,
    metrics: Option<Arc<MetricsManager>>,
}

impl ReplyEngineBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: RestConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the CORS policy.
    pub fn cors(mut self, cors: CorsConfig) -> Self {
        self.config.cors = cors;
        self
    }

    /// Set the largest body the transport accepts, in bytes.
    pub fn max_response_size(mut self, bytes: usize) -> Self {
        self.config.transport.max_response_size = bytes;
        self
    }

    /// Share an existing metrics store.
    pub fn metrics(mut self, metrics: Arc<MetricsManager>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Build the engine, creating a metrics store if none was shared.
    pub fn build(self) -> ReplyEngine {
        let metrics = self.metrics.unwrap_or_default();
        let composer = ReplyComposer::new(self.config.cors.clone(), metrics.clone());
        ReplyEngine {
            config: self.config,
            metrics,
            composer,
        }
    }
}
