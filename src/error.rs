//! Unified error types for ctxbroker.
//!
//! Encoding and rendering never fail; errors come from loading configuration,
//! interpreting request facts, and the transport.

use ctxbroker_core::ParseError;
use ctxbroker_rest::{ConfigError, SinkError};
use thiserror::Error;

/// All ctxbroker errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A request fact (verb, API version, mime type) was not understood
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A [`TransportSink`](ctxbroker_rest::TransportSink) refused an allocation
    ///
    /// Only produced when driving a sink directly. Composed replies report
    /// allocation failure as [`ReplyOutcome::Dropped`](ctxbroker_rest::ReplyOutcome::Dropped).
    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Result type for ctxbroker operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a configuration error.
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config(_))
    }

    /// Check if this error came from request facts.
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse(_))
    }

    /// Check if a transport sink refused the response.
    pub fn is_sink(&self) -> bool {
        matches!(self, Error::Sink(_))
    }
}
