//! Reply engine configuration
//!
//! Loaded once at startup and immutable afterwards.
//!
//! ```toml
//! [cors]
//! enabled = true
//! allowed_origin = "__ALL"
//! max_age = 86400
//!
//! [transport]
//! max_response_size = 8388608
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

/// Setting value that allows any origin
pub const ALL_ORIGINS: &str = "__ALL";

/// Default preflight cache lifetime, in seconds
pub const DEFAULT_MAX_AGE: u64 = 86_400;

/// Default ceiling for a single response body, in bytes
pub const DEFAULT_MAX_RESPONSE_SIZE: usize = 8 * 1024 * 1024;

/// Configuration loading failures
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Which request origins CORS replies may name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigin {
    /// Any origin; replies carry `*`
    Any,
    /// Exactly this origin
    Exact(String),
}

impl AllowedOrigin {
    /// Interpret a configured value, where `__ALL` means any origin
    pub fn from_setting(value: &str) -> Self {
        if value == ALL_ORIGINS {
            AllowedOrigin::Any
        } else {
            AllowedOrigin::Exact(value.to_string())
        }
    }

    /// `Access-Control-Allow-Origin` value for a request origin, if allowed
    pub fn header_value<'a>(&'a self, origin: &str) -> Option<&'a str> {
        match self {
            AllowedOrigin::Any => Some("*"),
            AllowedOrigin::Exact(allowed) if allowed == origin => Some(allowed),
            AllowedOrigin::Exact(_) => None,
        }
    }
}

impl Default for AllowedOrigin {
    fn default() -> Self {
        AllowedOrigin::Any
    }
}

impl fmt::Display for AllowedOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllowedOrigin::Any => f.write_str(ALL_ORIGINS),
            AllowedOrigin::Exact(origin) => f.write_str(origin),
        }
    }
}

/// Cross-origin policy
///
/// ```
/// use ctxbroker_rest::{AllowedOrigin, CorsConfig};
///
/// let cors = CorsConfig::new().enabled(true).allowed_origin("https://app.example");
/// assert_eq!(cors.allowed_origin, AllowedOrigin::Exact("https://app.example".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    pub enabled: bool,
    pub allowed_origin: AllowedOrigin,
    /// Seconds a preflight answer may be cached
    pub max_age: u64,
}

impl CorsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn allowed_origin(mut self, origin: &str) -> Self {
        self.allowed_origin = AllowedOrigin::from_setting(origin);
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.max_age = seconds;
        self
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            allowed_origin: AllowedOrigin::Any,
            max_age: DEFAULT_MAX_AGE,
        }
    }
}

/// Limits applied when handing bodies to the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    pub max_response_size: usize,
}

impl TransportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_response_size(mut self, bytes: usize) -> Self {
        self.max_response_size = bytes;
        self
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            max_response_size: DEFAULT_MAX_RESPONSE_SIZE,
        }
    }
}

/// Complete reply engine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestConfig {
    pub cors: CorsConfig,
    pub transport: TransportConfig,
}

impl RestConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cors(mut self, cors: CorsConfig) -> Self {
        self.cors = cors;
        self
    }

    pub fn transport(mut self, transport: TransportConfig) -> Self {
        self.transport = transport;
        self
    }

    /// Parse TOML text; missing sections and keys take defaults
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(text)?;
        let config = raw.validate()?;
        info!(
            cors_enabled = config.cors.enabled,
            allowed_origin = %config.cors.allowed_origin,
            max_age = config.cors.max_age,
            max_response_size = config.transport.max_response_size,
            "loaded reply configuration"
        );
        Ok(config)
    }

    /// Read and parse a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    cors: RawCors,
    transport: RawTransport,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawCors {
    enabled: bool,
    allowed_origin: String,
    max_age: i64,
}

impl Default for RawCors {
    fn default() -> Self {
        Self {
            enabled: false,
            allowed_origin: ALL_ORIGINS.to_string(),
            max_age: DEFAULT_MAX_AGE as i64,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawTransport {
    max_response_size: usize,
}

impl Default for RawTransport {
    fn default() -> Self {
        Self {
            max_response_size: DEFAULT_MAX_RESPONSE_SIZE,
        }
    }
}

impl RawConfig {
    fn validate(self) -> Result<RestConfig, ConfigError> {
        if self.cors.allowed_origin.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "cors.allowed_origin",
                reason: "must not be empty".to_string(),
            });
        }
        let max_age = u64::try_from(self.cors.max_age).map_err(|_| ConfigError::InvalidValue {
            field: "cors.max_age",
            reason: format!("{} is negative", self.cors.max_age),
        })?;

        Ok(RestConfig {
            cors: CorsConfig {
                enabled: self.cors.enabled,
                allowed_origin: AllowedOrigin::from_setting(&self.cors.allowed_origin),
                max_age,
            },
            transport: TransportConfig {
                max_response_size: self.transport.max_response_size,
            },
        })
    }
}
