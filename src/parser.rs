//! Tolerant extraction of metrics from free-form report text.
//!
//! Reports come from several harness variants that phrase the same figures
//! differently, so every field is matched through an ordered list of
//! fallback patterns and extraction is best-effort per field: a missing or
//! malformed value leaves that field absent and never fails the record.
//! Content with no recognizable fields at all still yields a degenerate
//! record; only unreadable inputs are errors, and those are the discovery
//! layer's to report.
//!
//! Parsing is a pure function of `(name, content)`: no I/O, no logging of
//! user-facing output, bit-identical results on repeated calls.

use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

use crate::record::{LatencyStats, MetricsRecord, Workload};

/// Defines a `fn() -> &'static Regex` that compiles its hard-coded pattern
/// once on first use.
macro_rules! pattern {
    ($name:ident, $re:literal) => {
        fn $name() -> &'static Regex {
            static CELL: OnceLock<Regex> = OnceLock::new();
            CELL.get_or_init(|| Regex::new($re).expect("hard-coded pattern compiles"))
        }
    };
}

// Load level, in fallback order.
pattern!(name_thread_suffix, r"_(\d+)thread");
pattern!(content_thread_word, r"(?i)(\d+)\s*threads?");
pattern!(content_thread_label, r"Threads:\s*(\d+)");

// Throughput. Aggregate-style reports print "Total: <n> req/s" under a
// "Throughput:" heading; simple reports print "Throughput: <n> req/s"
// inline. "Total:" must win or the heading line would shadow it.
pattern!(total_rate, r"Total:\s*([\d.]+)\s*req/s");
pattern!(throughput_rate, r"Throughput:\s*([\d.]+)\s*req/s");
pattern!(effective_rate, r"Effective:\s*([\d.]+)\s*req/s");

// Run shape.
pattern!(duration_secs, r"Duration:\s*(\d+)\s*seconds");
pattern!(total_requests, r"Total Requests:\s*(\d+)");
pattern!(successful_requests, r"Successful:\s*(\d+)");
pattern!(failed_requests, r"Failed:\s*(\d+)");

// Latency distribution, each figure independent.
pattern!(lat_mean, r"Mean:\s*([\d.]+)");
pattern!(lat_median, r"Median:\s*([\d.]+)");
pattern!(lat_p95, r"P95:\s*([\d.]+)");
pattern!(lat_p99, r"P99:\s*([\d.]+)");
pattern!(lat_min, r"Min:\s*([\d.]+)");
pattern!(lat_max, r"Max:\s*([\d.]+)");

// Resource utilization. The unit suffix is part of the pattern so a bare
// number on an adjacent line cannot leak into the wrong field.
pattern!(cpu_usage, r"CPU Usage:\s*([\d.]+)%");
pattern!(memory_usage, r"Memory Usage:\s*([\d.]+)\s*MB");
pattern!(disk_util, r"Disk Utilization:\s*([\d.]+)%");
pattern!(io_await, r"I/O Await Time:\s*([\d.]+)\s*ms");

/// Parse one report into a [`MetricsRecord`].
///
/// `name` is the originating file name (used for load-level and workload
/// classification as well as diagnostics); `content` is the full report
/// text. Never fails: unparseable fields are simply absent.
pub fn parse_report(name: &str, content: &str) -> MetricsRecord {
    let mut record = MetricsRecord::empty(name);

    record.load_level = extract_load_level(name, content);
    record.workload = classify_workload(name);

    record.duration_seconds = capture_u64(duration_secs(), content);
    record.total_requests = capture_u64(total_requests(), content);
    record.successful_requests = capture_u64(successful_requests(), content);
    record.failed_requests = capture_u64(failed_requests(), content);

    // First match wins: aggregate-style "Total:" over simple "Throughput:".
    record.throughput_req_per_sec = capture_f64(total_rate(), content)
        .or_else(|| capture_f64(throughput_rate(), content));
    record.effective_throughput_req_per_sec = capture_f64(effective_rate(), content);

    record.latency_ms = LatencyStats {
        mean: capture_f64(lat_mean(), content),
        median: capture_f64(lat_median(), content),
        p95: capture_f64(lat_p95(), content),
        p99: capture_f64(lat_p99(), content),
        min: capture_f64(lat_min(), content),
        max: capture_f64(lat_max(), content),
    };

    record.cpu_usage_pct = capture_f64(cpu_usage(), content);
    record.memory_usage_mb = capture_f64(memory_usage(), content);
    record.disk_util_pct = capture_f64(disk_util(), content);
    record.io_await_ms = capture_f64(io_await(), content);

    if record.is_degenerate() {
        debug!("no recognizable fields in {}", name);
    }

    record
}

/// Load level fallback chain: `_<n>thread` embedded in the name, then
/// `<n> thread(s)` anywhere in the content, then a `Threads:` label, then 0.
fn extract_load_level(name: &str, content: &str) -> u32 {
    capture_u32(name_thread_suffix(), name)
        .or_else(|| capture_u32(content_thread_word(), content))
        .or_else(|| capture_u32(content_thread_label(), content))
        .unwrap_or(0)
}

/// Classify the workload from the lower-cased file name.
///
/// Priority is write, then read, then mixed: a name carrying several
/// markers resolves by this order, not by textual position. Write and read
/// must appear delimited (prefix, `_`-suffix, or `_`-infix); mixed matches
/// as a plain substring.
pub fn classify_workload(name: &str) -> Workload {
    let lower = name.to_lowercase();
    if has_delimited_marker(&lower, "write") {
        Workload::Write
    } else if has_delimited_marker(&lower, "read") {
        Workload::Read
    } else if lower.contains("mixed") {
        Workload::Mixed
    } else {
        Workload::Unknown
    }
}

fn has_delimited_marker(lower: &str, marker: &str) -> bool {
    lower.starts_with(marker)
        || lower.contains(&format!("{marker}_"))
        || lower.contains(&format!("_{marker}"))
}

/// First capture group of `re` in `text`, parsed as f64. A label whose
/// number fails to parse (or is missing) is absent, not zero.
fn capture_f64(re: &Regex, text: &str) -> Option<f64> {
    let value: f64 = re.captures(text)?.get(1)?.as_str().parse().ok()?;
    Some(value)
}

fn capture_u64(re: &Regex, text: &str) -> Option<u64> {
    re.captures(text)?.get(1)?.as_str().parse().ok()
}

fn capture_u32(re: &Regex, text: &str) -> Option<u32> {
    re.captures(text)?.get(1)?.as_str().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WRITE_REPORT: &str = "\
Load Test Results
Threads: 8
Duration: 60 seconds
Total Requests: 15525
Successful: 15525
Failed: 0
Throughput:
  Total: 258.75 req/s
  Effective: 255.10 req/s
Latency (ms):
  Mean: 30.91
  Median: 28.40
  P95: 55.20
  P99: 78.90
  Min: 2.10
  Max: 190.33
";

    const READ_REPORT: &str = "\
Threads: 4
Duration: 60 seconds
Throughput: 838.04 req/s
Mean: 4.77
P95: 9.12
";

    const SUMMARY_REPORT: &str = "\
Resource Monitoring Summary (8 threads)
CPU Usage: 73.50%
Memory Usage: 512 MB
Disk Utilization: 41.20%
I/O Await Time: 3.85 ms
";

    #[test]
    fn test_load_level_from_name_wins() {
        let record = parse_report("read_4thread.txt", "Threads: 16");
        assert_eq!(record.load_level, 4);
    }

    #[test]
    fn test_load_level_from_content_word() {
        let record = parse_report("summary.txt", "ran with 12 threads total");
        assert_eq!(record.load_level, 12);
    }

    #[test]
    fn test_load_level_from_content_label() {
        let record = parse_report("results.txt", "Threads: 32");
        assert_eq!(record.load_level, 32);
    }

    #[test]
    fn test_load_level_defaults_to_zero() {
        let record = parse_report("results.txt", "nothing useful here");
        assert_eq!(record.load_level, 0);
    }

    #[test]
    fn test_workload_priority_write_beats_read() {
        // Both markers present; priority order decides, not position.
        assert_eq!(classify_workload("read_then_write_8thread.txt"), Workload::Write);
        assert_eq!(classify_workload("write_read_mixed.txt"), Workload::Write);
    }

    #[test]
    fn test_workload_read_beats_mixed() {
        assert_eq!(classify_workload("mixed_read_4thread.txt"), Workload::Read);
    }

    #[test]
    fn test_workload_placement_variants() {
        assert_eq!(classify_workload("write_8thread.txt"), Workload::Write);
        assert_eq!(classify_workload("bench_write.txt"), Workload::Write);
        assert_eq!(classify_workload("run_read_2thread.log"), Workload::Read);
        assert_eq!(classify_workload("READ_16THREAD.TXT"), Workload::Read);
        assert_eq!(classify_workload("mixedload.txt"), Workload::Mixed);
        assert_eq!(classify_workload("summary_8thread.txt"), Workload::Unknown);
    }

    #[test]
    fn test_workload_marker_needs_delimiter() {
        // Embedded without a delimiter does not count...
        assert_eq!(classify_workload("breadwinner.txt"), Workload::Unknown);
        // ...but a marker at the very start does, even mid-word.
        assert_eq!(classify_workload("readiness_probe.txt"), Workload::Read);
    }

    #[test]
    fn test_total_rate_preferred_over_throughput() {
        let record = parse_report("write_8thread.txt", WRITE_REPORT);
        assert_eq!(record.throughput_req_per_sec, Some(258.75));
        assert_eq!(record.effective_throughput_req_per_sec, Some(255.10));
    }

    #[test]
    fn test_simple_throughput_fallback() {
        let record = parse_report("read_4thread.txt", READ_REPORT);
        assert_eq!(record.throughput_req_per_sec, Some(838.04));
        assert_eq!(record.effective_throughput_req_per_sec, None);
    }

    #[test]
    fn test_full_write_report() {
        let record = parse_report("write_8thread.txt", WRITE_REPORT);
        assert_eq!(record.load_level, 8);
        assert_eq!(record.workload, Workload::Write);
        assert_eq!(record.duration_seconds, Some(60));
        assert_eq!(record.total_requests, Some(15525));
        assert_eq!(record.successful_requests, Some(15525));
        assert_eq!(record.failed_requests, Some(0));
        assert_eq!(record.latency_ms.mean, Some(30.91));
        assert_eq!(record.latency_ms.median, Some(28.40));
        assert_eq!(record.latency_ms.p95, Some(55.20));
        assert_eq!(record.latency_ms.p99, Some(78.90));
        assert_eq!(record.latency_ms.min, Some(2.10));
        assert_eq!(record.latency_ms.max, Some(190.33));
        assert!(record.cpu_usage_pct.is_none());
    }

    #[test]
    fn test_missing_latency_is_absent_not_zero() {
        let record = parse_report("read_4thread.txt", "Throughput: 100.0 req/s");
        assert_eq!(record.throughput_req_per_sec, Some(100.0));
        assert!(record.latency_ms.is_empty());
    }

    #[test]
    fn test_resource_fields() {
        let record = parse_report("summary_8thread.txt", SUMMARY_REPORT);
        assert_eq!(record.load_level, 8);
        assert_eq!(record.cpu_usage_pct, Some(73.50));
        assert_eq!(record.memory_usage_mb, Some(512.0));
        assert_eq!(record.disk_util_pct, Some(41.20));
        assert_eq!(record.io_await_ms, Some(3.85));
    }

    #[test]
    fn test_unit_suffix_strictness() {
        // Neither number may leak into the other field.
        let content = "Memory Usage: 512 MB, CPU Usage: 90%";
        let record = parse_report("summary.txt", content);
        assert_eq!(record.memory_usage_mb, Some(512.0));
        assert_eq!(record.cpu_usage_pct, Some(90.0));

        let only_mem = parse_report("summary.txt", "Memory Usage: 512 MB");
        assert_eq!(only_mem.cpu_usage_pct, None);
        let no_unit = parse_report("summary.txt", "Memory Usage: 512");
        assert_eq!(no_unit.memory_usage_mb, None);
    }

    #[test]
    fn test_percentages_pass_through_unclamped() {
        let record = parse_report("summary.txt", "CPU Usage: 130.00%");
        assert_eq!(record.cpu_usage_pct, Some(130.0));
    }

    #[test]
    fn test_label_without_number_is_absent() {
        let record = parse_report("read_2thread.txt", "Mean: not measured");
        assert_eq!(record.latency_ms.mean, None);
    }

    #[test]
    fn test_unrecognizable_content_degrades_gracefully() {
        let record = parse_report("garbage.bin.txt", "%%%% **** no fields at all");
        assert!(record.is_degenerate());
        assert_eq!(record.workload, Workload::Unknown);
    }

    #[test]
    fn test_parse_is_idempotent() {
        let a = parse_report("write_8thread.txt", WRITE_REPORT);
        let b = parse_report("write_8thread.txt", WRITE_REPORT);
        assert_eq!(a, b);
    }
}
