//! Canonical data model for parsed benchmark reports.
//!
//! Every numeric field that a report may omit is an `Option`, so callers can
//! see at the type level which values might be absent. Records are built once
//! by the parser and never mutated afterwards; the aggregator only regroups
//! and reorders them.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Workload category exercised by a report.
///
/// Classification is total: every report resolves to exactly one variant,
/// falling back to `Unknown` when no marker matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Workload {
    Read,
    Write,
    Mixed,
    Unknown,
}

impl Workload {
    /// Canonical display label, also the grouping key in output artifacts.
    pub fn label(&self) -> &'static str {
        match self {
            Workload::Read => "Read",
            Workload::Write => "Write",
            Workload::Mixed => "Mixed",
            Workload::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Workload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// Groups are iterated lexically by label so repeated runs over the same
// input produce byte-identical artifact ordering.
impl Ord for Workload {
    fn cmp(&self, other: &Self) -> Ordering {
        self.label().cmp(other.label())
    }
}

impl PartialOrd for Workload {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Latency distribution figures in milliseconds, each independently optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LatencyStats {
    pub mean: Option<f64>,
    pub median: Option<f64>,
    pub p95: Option<f64>,
    pub p99: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl LatencyStats {
    /// True when no latency figure was extracted at all.
    pub fn is_empty(&self) -> bool {
        self.mean.is_none()
            && self.median.is_none()
            && self.p95.is_none()
            && self.p99.is_none()
            && self.min.is_none()
            && self.max.is_none()
    }
}

/// One parsed report: the canonical extraction of a single benchmark run
/// at a fixed load level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    /// Originating file name or path, kept for diagnostics only.
    pub source_name: String,
    /// Concurrent client count, the independent variable. Zero when the
    /// report carried no thread information; the aggregator decides whether
    /// such a record is usable, not the parser.
    pub load_level: u32,
    pub workload: Workload,
    pub duration_seconds: Option<u64>,
    pub total_requests: Option<u64>,
    pub successful_requests: Option<u64>,
    pub failed_requests: Option<u64>,
    pub throughput_req_per_sec: Option<f64>,
    pub effective_throughput_req_per_sec: Option<f64>,
    pub latency_ms: LatencyStats,
    pub cpu_usage_pct: Option<f64>,
    pub disk_util_pct: Option<f64>,
    pub io_await_ms: Option<f64>,
    pub memory_usage_mb: Option<f64>,
}

impl MetricsRecord {
    /// A record with every optional field absent, attributed to `source_name`.
    pub fn empty(source_name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            load_level: 0,
            workload: Workload::Unknown,
            duration_seconds: None,
            total_requests: None,
            successful_requests: None,
            failed_requests: None,
            throughput_req_per_sec: None,
            effective_throughput_req_per_sec: None,
            latency_ms: LatencyStats::default(),
            cpu_usage_pct: None,
            disk_util_pct: None,
            io_await_ms: None,
            memory_usage_mb: None,
        }
    }

    /// True when nothing beyond the degenerate defaults was extracted.
    /// Such records still flow into the aggregator; exclusion is a
    /// per-output decision made there.
    pub fn is_degenerate(&self) -> bool {
        self.load_level == 0
            && self.workload == Workload::Unknown
            && self.duration_seconds.is_none()
            && self.total_requests.is_none()
            && self.successful_requests.is_none()
            && self.failed_requests.is_none()
            && self.throughput_req_per_sec.is_none()
            && self.effective_throughput_req_per_sec.is_none()
            && self.latency_ms.is_empty()
            && self.cpu_usage_pct.is_none()
            && self.disk_util_pct.is_none()
            && self.io_await_ms.is_none()
            && self.memory_usage_mb.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workload_labels() {
        assert_eq!(Workload::Read.to_string(), "Read");
        assert_eq!(Workload::Write.to_string(), "Write");
        assert_eq!(Workload::Mixed.to_string(), "Mixed");
        assert_eq!(Workload::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn test_workload_ordering_is_lexical() {
        let mut all = vec![
            Workload::Write,
            Workload::Unknown,
            Workload::Read,
            Workload::Mixed,
        ];
        all.sort();
        assert_eq!(
            all,
            vec![
                Workload::Mixed,
                Workload::Read,
                Workload::Unknown,
                Workload::Write,
            ]
        );
    }

    #[test]
    fn test_empty_record_is_degenerate() {
        let record = MetricsRecord::empty("noise.txt");
        assert!(record.is_degenerate());
        assert_eq!(record.source_name, "noise.txt");
        assert_eq!(record.load_level, 0);
        assert_eq!(record.workload, Workload::Unknown);
    }

    #[test]
    fn test_latency_stats_empty() {
        let mut stats = LatencyStats::default();
        assert!(stats.is_empty());
        stats.p99 = Some(12.5);
        assert!(!stats.is_empty());
    }
}
