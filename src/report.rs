//! Console reporting: the flattened summary tables and the skipped-file
//! listing. All human-readable narration lives here, never in the core.

use colored::*;

use crate::error::ReportError;
use crate::record::MetricsRecord;
use crate::series::SeriesSet;

const RULE: &str = "======================================================================";
const DASH: &str = "----------------------------------------------------------------------";

/// Print the load-test summary table: one block per workload, rows in
/// ascending load order. Missing figures render as zero here; the series
/// artifacts keep them absent.
pub fn print_summary(set: &SeriesSet) {
    println!("\n{}", RULE);
    println!("{}", "LOAD TEST RESULTS SUMMARY".bold());
    println!("{}", RULE);

    for series in set.iter() {
        println!("\n{}:", format!("{} Workload", series.workload).cyan().bold());
        println!("{}", DASH);
        println!(
            "{:<10} {:<15} {:<12} {:<12}",
            "Load", "Throughput", "Mean Lat", "P95 Lat"
        );
        println!("{:<10} {:<15} {:<12} {:<12}", "", "(req/s)", "(ms)", "(ms)");
        println!("{}", DASH);

        for r in &series.records {
            println!(
                "{:<10} {:<15.2} {:<12.2} {:<12.2}",
                r.load_level,
                r.throughput_req_per_sec.unwrap_or(0.0),
                r.latency_ms.mean.unwrap_or(0.0),
                r.latency_ms.p95.unwrap_or(0.0),
            );
        }
    }
    println!();
}

/// Print the resource-utilization table, but only when at least one record
/// carries a resource figure.
pub fn print_resource_summary(set: &SeriesSet) {
    let has_resources = set.iter().any(|s| s.records.iter().any(has_resource_data));
    if !has_resources {
        return;
    }

    println!("\n{}", RULE);
    println!("{}", "RESOURCE UTILIZATION SUMMARY".bold());
    println!("{}", RULE);

    for series in set.iter() {
        if !series.records.iter().any(has_resource_data) {
            continue;
        }
        println!("\n{}:", format!("{} Workload", series.workload).cyan().bold());
        println!("{}", DASH);
        println!(
            "{:<10} {:<10} {:<10} {:<12} {:<10}",
            "Load", "CPU %", "Disk %", "I/O Wait", "Memory"
        );
        println!(
            "{:<10} {:<10} {:<10} {:<12} {:<10}",
            "", "", "", "(ms)", "(MB)"
        );
        println!("{}", DASH);

        for r in &series.records {
            println!(
                "{:<10} {:<10.2} {:<10.4} {:<12.4} {:<10.2}",
                r.load_level,
                r.cpu_usage_pct.unwrap_or(0.0),
                r.disk_util_pct.unwrap_or(0.0),
                r.io_await_ms.unwrap_or(0.0),
                r.memory_usage_mb.unwrap_or(0.0),
            );
        }
    }
    println!();
}

/// List the inputs that were skipped and why.
pub fn print_skipped(skipped: &[ReportError]) {
    if skipped.is_empty() {
        return;
    }
    println!("\n{}", "Skipped inputs:".yellow().bold());
    for err in skipped {
        println!("  {} {}", "✗".red(), err);
    }
}

fn has_resource_data(record: &MetricsRecord) -> bool {
    record.cpu_usage_pct.is_some()
        || record.disk_util_pct.is_some()
        || record.io_await_ms.is_some()
        || record.memory_usage_mb.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{MetricsRecord, Workload};

    #[test]
    fn test_has_resource_data() {
        let mut record = MetricsRecord::empty("summary_4thread.txt");
        record.workload = Workload::Read;
        assert!(!has_resource_data(&record));
        record.io_await_ms = Some(1.2);
        assert!(has_resource_data(&record));
    }
}
