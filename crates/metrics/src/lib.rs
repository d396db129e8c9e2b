//! Transaction metrics for ctxbroker
//!
//! Counters are kept per (tenant, service path) and accumulated from many
//! request workers at once.
//!
//! # Design
//!
//! - DashMap: sharded by (tenant, service path), concurrent inserts
//! - AtomicU64 counters: `add` on an existing entry only read-locks its shard
//! - Snapshot on render: `to_json` reads a consistent-enough view, sorted
//!
//! ```
//! use ctxbroker_metrics::{Metric, MetricsManager, MetricsSink};
//!
//! let metrics = MetricsManager::new();
//! metrics.add("smartcity", "/parking", Metric::ResponseSize, 128);
//! assert_eq!(metrics.get("smartcity", "/parking", Metric::ResponseSize), 128);
//! ```

pub mod manager;
pub mod metric;

pub use manager::{MetricsManager, NoopMetrics, DEFAULT_SERVICE, ROOT_SUBSERVICE};
pub use metric::Metric;

/// Destination for metric updates
///
/// The reply composer only ever adds to counters; how they are stored and
/// reported is up to the implementation.
pub trait MetricsSink: Send + Sync {
    /// Add `amount` to `metric` for the tenant and service path
    fn add(&self, tenant: &str, service_path: &str, metric: Metric, amount: u64);
}
