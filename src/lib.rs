//! # Bench Report Library
//!
//! Tolerant extraction and aggregation of load-test metrics from free-form
//! report files, plus the collaborators that turn the aggregated series into
//! chart-data artifacts and console summary tables.
//!
//! ## Pipeline
//!
//! 1. `discover` expands a glob pattern and buffers every matched report;
//!    unreadable files are recorded and skipped, never fatal.
//! 2. `parser` maps each `(name, content)` pair to one [`MetricsRecord`]
//!    using ordered per-field fallback patterns; a field that cannot be
//!    extracted is absent, and content with no recognizable fields at all
//!    still yields a record.
//! 3. `series` groups records by workload, stable-sorts each group by load
//!    level, and exposes the grouped series and flattened summary rows.
//! 4. `charts` and `report` consume the series: JSON chart specifications
//!    (one line per workload, X = load level) and console tables.
//!
//! ## Tolerance model
//!
//! Reports come from several harness variants with inconsistent phrasing,
//! so parsing is best-effort per field and never fails a whole record. Only
//! two conditions are real errors: an input that cannot be read at all
//! (skipped per file) and a batch with zero usable records (fatal).
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use bench_report::{parse_report, SeriesSet, Workload};
//!
//! fn main() -> anyhow::Result<()> {
//!     let record = parse_report("read_4thread.txt", "Throughput: 100.0 req/s");
//!     let set = SeriesSet::collect(vec![record])?;
//!     let read = set.get(Workload::Read).unwrap();
//!     println!("{} record(s)", read.records.len());
//!     Ok(())
//! }
//! ```

/// Chart specification builders and JSON artifact output
pub mod charts;

/// Command-line interface and chart-family selection
pub mod cli;

/// Glob expansion and buffered report ingestion
pub mod discover;

/// Error taxonomy: per-file read failures and the fatal empty batch
pub mod error;

/// Colorized tracing output for user-facing narration
pub mod logging;

/// Tolerant per-field metrics extraction
///
/// The core of the system. Applies a fixed fallback order per field
/// (load level from name, then content; aggregate-style throughput labels
/// before simple ones) with unit-suffix strictness for resource figures so
/// adjacent numbers never contaminate the wrong field.
pub mod parser;

/// Canonical data model: workload labels, latency stats, metrics records
pub mod record;

/// Console summary tables and skipped-input listing
pub mod report;

/// Workload grouping, load-level ordering, and summary rows
pub mod series;

pub use charts::{build_charts, write_chart, ChartSpec, LatencyMetric};
pub use cli::{Args, ChartKind};
pub use discover::{discover_reports, Discovery, ReportInput};
pub use error::ReportError;
pub use parser::parse_report;
pub use record::{LatencyStats, MetricsRecord, Workload};
pub use series::{MetricsSeries, SeriesSet, SummaryRow};

/// The current version of the bench-report tool, from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
