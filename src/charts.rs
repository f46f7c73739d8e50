//! Chart specification builders and artifact output.
//!
//! The pipeline does not rasterize images; it emits one JSON chart
//! specification per chart, carrying everything a plotting frontend needs:
//! per-workload point series, axis labels, the fixed 0-100 scale for
//! percentage charts, and the conventional load-threshold reference lines
//! (80% "High Load", 90% bottleneck, 50% "Moderate Load" for disk).
//!
//! Selection policy: each chart includes only the records that carry its
//! metric. The CPU chart additionally drops zero readings, which monitoring
//! summaries use to mean "not measured".

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::cli::ChartKind;
use crate::record::MetricsRecord;
use crate::series::SeriesSet;

/// Horizontal reference line overlaid on a chart.
#[derive(Debug, Clone, Serialize)]
pub struct Threshold {
    pub label: &'static str,
    pub value: f64,
}

/// One plotted line: a workload's `(load_level, value)` points in
/// ascending load order.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSeries {
    pub name: String,
    pub points: Vec<(u32, f64)>,
}

/// Everything a rendering frontend needs to draw one comparison chart.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSpec {
    /// File stem of the emitted artifact.
    pub slug: &'static str,
    pub title: String,
    pub x_label: &'static str,
    pub y_label: &'static str,
    /// Fixed upper bound for percentage-scaled charts; `None` auto-scales.
    pub y_max: Option<f64>,
    pub thresholds: Vec<Threshold>,
    pub series: Vec<ChartSeries>,
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

impl ChartSpec {
    /// True when no workload contributed a single point.
    pub fn is_empty(&self) -> bool {
        self.series.iter().all(|s| s.points.is_empty())
    }
}

/// Latency figures that get their own chart each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatencyMetric {
    Mean,
    Median,
    P95,
    P99,
}

impl LatencyMetric {
    pub const ALL: [LatencyMetric; 4] = [
        LatencyMetric::Mean,
        LatencyMetric::Median,
        LatencyMetric::P95,
        LatencyMetric::P99,
    ];

    fn display(&self) -> &'static str {
        match self {
            LatencyMetric::Mean => "Mean",
            LatencyMetric::Median => "Median",
            LatencyMetric::P95 => "P95",
            LatencyMetric::P99 => "P99",
        }
    }

    fn slug(&self) -> &'static str {
        match self {
            LatencyMetric::Mean => "mean_latency_vs_load",
            LatencyMetric::Median => "median_latency_vs_load",
            LatencyMetric::P95 => "p95_latency_vs_load",
            LatencyMetric::P99 => "p99_latency_vs_load",
        }
    }

    fn y_label(&self) -> &'static str {
        match self {
            LatencyMetric::Mean => "Mean Latency (ms)",
            LatencyMetric::Median => "Median Latency (ms)",
            LatencyMetric::P95 => "P95 Latency (ms)",
            LatencyMetric::P99 => "P99 Latency (ms)",
        }
    }

    fn select(&self, record: &MetricsRecord) -> Option<f64> {
        match self {
            LatencyMetric::Mean => record.latency_ms.mean,
            LatencyMetric::Median => record.latency_ms.median,
            LatencyMetric::P95 => record.latency_ms.p95,
            LatencyMetric::P99 => record.latency_ms.p99,
        }
    }
}

const X_LABEL: &str = "Number of Clients";

fn workload_series<F>(set: &SeriesSet, select: F) -> Vec<ChartSeries>
where
    F: Fn(&MetricsRecord) -> Option<f64> + Copy,
{
    set.iter()
        .map(|series| ChartSeries {
            name: format!("{} Workload", series.workload),
            points: series.points(select),
        })
        .filter(|s| !s.points.is_empty())
        .collect()
}

fn positive_workload_series<F>(set: &SeriesSet, select: F) -> Vec<ChartSeries>
where
    F: Fn(&MetricsRecord) -> Option<f64> + Copy,
{
    set.iter()
        .map(|series| ChartSeries {
            name: format!("{} Workload", series.workload),
            points: series.positive_points(select),
        })
        .filter(|s| !s.points.is_empty())
        .collect()
}

fn spec(
    slug: &'static str,
    title: String,
    y_label: &'static str,
    y_max: Option<f64>,
    thresholds: Vec<Threshold>,
    series: Vec<ChartSeries>,
) -> ChartSpec {
    ChartSpec {
        slug,
        title,
        x_label: X_LABEL,
        y_label,
        y_max,
        thresholds,
        series,
        generated_at: chrono::Utc::now(),
    }
}

pub fn throughput_chart(set: &SeriesSet) -> ChartSpec {
    let mut series = workload_series(set, |r| r.throughput_req_per_sec);

    // Write-style reports also carry an effective (post-failure) rate;
    // overlay it as its own line where present.
    for s in set.iter() {
        let points = s.points(|r| r.effective_throughput_req_per_sec);
        if !points.is_empty() {
            series.push(ChartSeries {
                name: format!("{} Workload (effective)", s.workload),
                points,
            });
        }
    }

    spec(
        "throughput_vs_load",
        "Throughput vs Number of Clients".to_string(),
        "Throughput (requests/sec)",
        None,
        Vec::new(),
        series,
    )
}

pub fn latency_chart(set: &SeriesSet, metric: LatencyMetric) -> ChartSpec {
    spec(
        metric.slug(),
        format!("{} Latency vs Number of Clients", metric.display()),
        metric.y_label(),
        None,
        Vec::new(),
        workload_series(set, |r| metric.select(r)),
    )
}

pub fn cpu_chart(set: &SeriesSet, cores: usize) -> ChartSpec {
    spec(
        "cpu_utilization_vs_load",
        format!("CPU Utilization vs Number of Clients ({} cores)", cores),
        "CPU Utilization (%)",
        Some(100.0),
        vec![
            Threshold {
                label: "High Load (80%)",
                value: 80.0,
            },
            Threshold {
                label: "CPU Bottleneck (90%)",
                value: 90.0,
            },
        ],
        positive_workload_series(set, |r| r.cpu_usage_pct),
    )
}

pub fn disk_chart(set: &SeriesSet) -> ChartSpec {
    spec(
        "disk_utilization_vs_load",
        "Disk Utilization vs Number of Clients".to_string(),
        "Disk Utilization (%)",
        Some(100.0),
        vec![
            Threshold {
                label: "Moderate Load (50%)",
                value: 50.0,
            },
            Threshold {
                label: "High Load (80%)",
                value: 80.0,
            },
            Threshold {
                label: "I/O Bottleneck (90%)",
                value: 90.0,
            },
        ],
        workload_series(set, |r| r.disk_util_pct),
    )
}

pub fn io_await_chart(set: &SeriesSet) -> ChartSpec {
    spec(
        "io_await_vs_load",
        "I/O Await Time vs Number of Clients".to_string(),
        "I/O Await Time (ms)",
        None,
        Vec::new(),
        workload_series(set, |r| r.io_await_ms),
    )
}

pub fn memory_chart(set: &SeriesSet) -> ChartSpec {
    spec(
        "memory_usage_vs_load",
        "Memory Consumption vs Number of Clients".to_string(),
        "Memory Usage (MB)",
        None,
        Vec::new(),
        workload_series(set, |r| r.memory_usage_mb),
    )
}

/// Build the chart set selected by the CLI. Charts with no data points are
/// omitted rather than emitted empty.
pub fn build_charts(set: &SeriesSet, kinds: &[ChartKind], cores: usize) -> Vec<ChartSpec> {
    let kinds = ChartKind::expand_all(kinds.to_vec());
    let mut specs = Vec::new();
    for kind in &kinds {
        match kind {
            ChartKind::Throughput => specs.push(throughput_chart(set)),
            ChartKind::Latency => {
                for metric in LatencyMetric::ALL {
                    specs.push(latency_chart(set, metric));
                }
            }
            ChartKind::Resources => {
                specs.push(cpu_chart(set, cores));
                specs.push(disk_chart(set));
                specs.push(io_await_chart(set));
                specs.push(memory_chart(set));
            }
            // Gone after expand_all above.
            ChartKind::All => continue,
        }
    }
    specs.retain(|s| !s.is_empty());
    specs
}

/// Serialize one chart spec to `<dir>/<slug>.json`.
pub fn write_chart(spec: &ChartSpec, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(format!("{}.json", spec.slug));
    let json = serde_json::to_string_pretty(spec)
        .with_context(|| format!("serializing chart {}", spec.slug))?;
    fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
    info!("saved: {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{MetricsRecord, Workload};
    use crate::series::SeriesSet;

    fn sample_set() -> SeriesSet {
        let mut r4 = MetricsRecord::empty("read_4thread.txt");
        r4.workload = Workload::Read;
        r4.load_level = 4;
        r4.throughput_req_per_sec = Some(100.0);
        r4.latency_ms.p95 = Some(9.1);
        r4.cpu_usage_pct = Some(45.0);

        let mut r8 = MetricsRecord::empty("read_8thread.txt");
        r8.workload = Workload::Read;
        r8.load_level = 8;
        r8.throughput_req_per_sec = Some(160.0);
        r8.cpu_usage_pct = Some(0.0); // not measured

        let mut w8 = MetricsRecord::empty("write_8thread.txt");
        w8.workload = Workload::Write;
        w8.load_level = 8;
        w8.throughput_req_per_sec = Some(50.0);

        SeriesSet::collect(vec![r4, r8, w8]).unwrap()
    }

    #[test]
    fn test_throughput_chart_one_line_per_workload() {
        let chart = throughput_chart(&sample_set());
        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.series[0].name, "Read Workload");
        assert_eq!(chart.series[0].points, vec![(4, 100.0), (8, 160.0)]);
        assert_eq!(chart.series[1].name, "Write Workload");
        assert_eq!(chart.series[1].points, vec![(8, 50.0)]);
    }

    #[test]
    fn test_throughput_chart_overlays_effective_rate() {
        let mut w = MetricsRecord::empty("write_8thread.txt");
        w.workload = Workload::Write;
        w.load_level = 8;
        w.throughput_req_per_sec = Some(258.75);
        w.effective_throughput_req_per_sec = Some(255.10);
        let set = SeriesSet::collect(vec![w]).unwrap();

        let chart = throughput_chart(&set);
        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.series[1].name, "Write Workload (effective)");
        assert_eq!(chart.series[1].points, vec![(8, 255.10)]);
    }

    #[test]
    fn test_latency_chart_drops_absent_records() {
        let chart = latency_chart(&sample_set(), LatencyMetric::P95);
        // Only read@4 carries p95; write series vanishes entirely.
        assert_eq!(chart.series.len(), 1);
        assert_eq!(chart.series[0].points, vec![(4, 9.1)]);
    }

    #[test]
    fn test_cpu_chart_scale_and_thresholds() {
        let chart = cpu_chart(&sample_set(), 8);
        assert_eq!(chart.y_max, Some(100.0));
        assert_eq!(chart.thresholds.len(), 2);
        assert_eq!(chart.thresholds[1].value, 90.0);
        // The zero reading at load 8 is excluded, not plotted as zero.
        assert_eq!(chart.series[0].points, vec![(4, 45.0)]);
    }

    #[test]
    fn test_build_charts_omits_empty() {
        let specs = build_charts(
            &sample_set(),
            &[ChartKind::Throughput, ChartKind::Resources],
            8,
        );
        let slugs: Vec<&str> = specs.iter().map(|s| s.slug).collect();
        // No disk/io/memory data in the sample: those charts are omitted.
        assert_eq!(slugs, vec!["throughput_vs_load", "cpu_utilization_vs_load"]);
    }

    #[test]
    fn test_write_chart_round_trips_as_json() {
        let dir = tempfile::tempdir().unwrap();
        let chart = throughput_chart(&sample_set());
        let path = write_chart(&chart, dir.path()).unwrap();

        let text = std::fs::read_to_string(path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["slug"], "throughput_vs_load");
        assert_eq!(value["series"][0]["points"][0][0], 4);
    }
}
