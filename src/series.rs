//! Grouping and ordering of parsed records into plottable series.
//!
//! Records are grouped by the parser's canonical workload label and each
//! group is stable-sorted ascending by load level; repeated load levels are
//! kept in discovery order so repeated runs can be compared side by side.
//! Groups iterate lexically by label, making the full output ordering
//! deterministic. Records are never mutated here, only regrouped.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::ReportError;
use crate::record::{MetricsRecord, Workload};

/// The ordered records for one workload, sorted ascending by load level.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSeries {
    pub workload: Workload,
    pub records: Vec<MetricsRecord>,
}

impl MetricsSeries {
    /// `(load_level, value)` pairs for the records where `select` yields a
    /// value. Each chart picks only the records carrying its metric; the
    /// aggregator itself drops nothing.
    pub fn points<F>(&self, select: F) -> Vec<(u32, f64)>
    where
        F: Fn(&MetricsRecord) -> Option<f64>,
    {
        self.records
            .iter()
            .filter_map(|r| select(r).map(|v| (r.load_level, v)))
            .collect()
    }

    /// Like [`points`](Self::points), but additionally drops non-positive
    /// values. Zero resource readings mean "not measured" in monitoring
    /// summaries and are excluded rather than plotted as zero.
    pub fn positive_points<F>(&self, select: F) -> Vec<(u32, f64)>
    where
        F: Fn(&MetricsRecord) -> Option<f64>,
    {
        self.points(select)
            .into_iter()
            .filter(|(_, v)| *v > 0.0)
            .collect()
    }
}

/// One row of the flattened summary table. Missing numerics are rendered
/// as zero here, and only here; series membership keeps them absent.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryRow {
    pub workload: Workload,
    pub load_level: u32,
    pub throughput_req_per_sec: f64,
    pub mean_latency_ms: f64,
    pub p95_latency_ms: f64,
}

/// All workload groups for one batch of reports.
#[derive(Debug, Clone, Serialize)]
pub struct SeriesSet {
    groups: BTreeMap<Workload, MetricsSeries>,
}

impl SeriesSet {
    /// Fold parsed records into grouped, sorted series.
    ///
    /// Returns [`ReportError::NoData`] when `records` is empty; a caller
    /// that parsed files but kept none has nothing to render and must halt.
    pub fn collect(records: Vec<MetricsRecord>) -> Result<Self, ReportError> {
        if records.is_empty() {
            return Err(ReportError::NoData);
        }

        let mut groups: BTreeMap<Workload, MetricsSeries> = BTreeMap::new();
        for record in records {
            groups
                .entry(record.workload)
                .or_insert_with(|| MetricsSeries {
                    workload: record.workload,
                    records: Vec::new(),
                })
                .records
                .push(record);
        }

        for series in groups.values_mut() {
            // Stable: equal load levels keep their discovery order.
            series.records.sort_by_key(|r| r.load_level);
        }

        Ok(Self { groups })
    }

    /// Workload groups in lexical label order.
    pub fn iter(&self) -> impl Iterator<Item = &MetricsSeries> {
        self.groups.values()
    }

    pub fn get(&self, workload: Workload) -> Option<&MetricsSeries> {
        self.groups.get(&workload)
    }

    pub fn workload_count(&self) -> usize {
        self.groups.len()
    }

    pub fn record_count(&self) -> usize {
        self.groups.values().map(|s| s.records.len()).sum()
    }

    /// Flattened table: workload (lexical), then ascending load level.
    pub fn summary_rows(&self) -> Vec<SummaryRow> {
        self.iter()
            .flat_map(|series| {
                series.records.iter().map(|r| SummaryRow {
                    workload: r.workload,
                    load_level: r.load_level,
                    throughput_req_per_sec: r.throughput_req_per_sec.unwrap_or(0.0),
                    mean_latency_ms: r.latency_ms.mean.unwrap_or(0.0),
                    p95_latency_ms: r.latency_ms.p95.unwrap_or(0.0),
                })
            })
            .collect()
    }
}
