//! Concurrent metrics store

use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use ctxbroker_wire::JsonObjectBuilder;
use dashmap::DashMap;
use tracing::trace;

use crate::metric::Metric;
use crate::MetricsSink;

/// Report name for the empty tenant
pub const DEFAULT_SERVICE: &str = "default-service";

/// Report name for the empty service path
pub const ROOT_SUBSERVICE: &str = "root-subserv";

const METRIC_COUNT: usize = Metric::ALL.len();

type Totals = [u64; METRIC_COUNT];

/// Counters for one (tenant, service path)
#[derive(Debug, Default)]
struct Counters {
    values: [AtomicU64; METRIC_COUNT],
}

impl Counters {
    fn add(&self, metric: Metric, amount: u64) {
        self.values[metric.index()].fetch_add(amount, Ordering::Relaxed);
    }

    fn get(&self, metric: Metric) -> u64 {
        self.values[metric.index()].load(Ordering::Relaxed)
    }

    fn snapshot(&self) -> Totals {
        let mut totals = [0; METRIC_COUNT];
        for m in Metric::ALL {
            totals[m.index()] = self.get(m);
        }
        totals
    }
}

/// Per-tenant, per-service-path metrics
///
/// # Thread Safety
///
/// All operations take `&self`:
/// - add(): read-locks the shard; write-locks only for a new (tenant, service path)
/// - get(): read-only shard access
/// - to_json(): iterates shards one at a time
pub struct MetricsManager {
    services: DashMap<(String, String), Counters>,
}

impl MetricsManager {
    pub fn new() -> Self {
        Self {
            services: DashMap::new(),
        }
    }

    /// Current value of a counter, 0 when never written
    pub fn get(&self, tenant: &str, service_path: &str, metric: Metric) -> u64 {
        self.services
            .get(&(tenant.to_string(), service_path.to_string()))
            .map(|c| c.get(metric))
            .unwrap_or(0)
    }

    /// Number of (tenant, service path) pairs with counters
    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Drop every counter
    pub fn reset(&self) {
        self.services.clear();
    }

    /// Render all counters as a JSON report
    ///
    /// Tenants and service paths are sorted; zero counters are left out.
    ///
    /// ```text
    /// {"services":{"<tenant>":{"subservs":{"<path>":{...}},"sum":{...}}},"sum":{...}}
    /// ```
    pub fn to_json(&self) -> String {
        let mut tenants: BTreeMap<String, BTreeMap<String, Totals>> = BTreeMap::new();
        for entry in self.services.iter() {
            let (tenant, service_path) = entry.key();
            let tenant = if tenant.is_empty() {
                DEFAULT_SERVICE
            } else {
                tenant.as_str()
            };
            let service_path = if service_path.is_empty() {
                ROOT_SUBSERVICE
            } else {
                service_path.as_str()
            };
            let totals = tenants
                .entry(tenant.to_string())
                .or_default()
                .entry(service_path.to_string())
                .or_insert([0; METRIC_COUNT]);
            accumulate(totals, &entry.value().snapshot());
        }

        let mut grand_total = [0; METRIC_COUNT];
        let mut services = JsonObjectBuilder::new();
        for (tenant, paths) in &tenants {
            let mut tenant_total = [0; METRIC_COUNT];
            let mut subservs = JsonObjectBuilder::new();
            for (path, totals) in paths {
                accumulate(&mut tenant_total, totals);
                subservs.add_raw(path, &render_totals(totals));
            }
            accumulate(&mut grand_total, &tenant_total);

            let mut service = JsonObjectBuilder::new();
            service.add_raw("subservs", &subservs.finalize());
            service.add_raw("sum", &render_totals(&tenant_total));
            services.add_raw(tenant, &service.finalize());
        }

        let mut report = JsonObjectBuilder::new();
        report.add_raw("services", &services.finalize());
        report.add_raw("sum", &render_totals(&grand_total));
        report.finalize()
    }
}

fn accumulate(into: &mut Totals, from: &Totals) {
    for (acc, v) in into.iter_mut().zip(from) {
        *acc = acc.saturating_add(*v);
    }
}

fn render_totals(totals: &Totals) -> String {
    let mut obj = JsonObjectBuilder::new();
    for m in Metric::ALL {
        let v = totals[m.index()];
        if v != 0 {
            obj.add_raw(m.name(), &v.to_string());
        }
    }
    obj.finalize()
}

impl MetricsSink for MetricsManager {
    fn add(&self, tenant: &str, service_path: &str, metric: Metric, amount: u64) {
        let key = (tenant.to_string(), service_path.to_string());

        // Existing entries only need a shard read lock
        if let Some(counters) = self.services.get(&key) {
            counters.add(metric, amount);
            return;
        }

        self.services
            .entry(key)
            .or_insert_with(|| {
                trace!(tenant, service_path, "new metrics entry");
                Counters::default()
            })
            .add(metric, amount);
    }
}

impl Default for MetricsManager {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MetricsManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetricsManager")
            .field("services", &self.services.len())
            .finish()
    }
}

/// Sink that discards every update
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMetrics;

impl MetricsSink for NoopMetrics {
    fn add(&self, _tenant: &str, _service_path: &str, _metric: Metric, _amount: u64) {}
}
