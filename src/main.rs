//! # Bench Report - Main Entry Point
//!
//! Orchestrates the report pipeline end to end:
//!
//! 1. **Initialize logging**: colorized tracing output, level via `RUST_LOG`
//! 2. **Parse arguments**: glob pattern, output directory, chart selection
//! 3. **Discover reports**: expand the pattern and buffer every readable file
//! 4. **Parse**: one tolerant extraction per file, never fatal per field
//! 5. **Aggregate**: group by workload, sort by load level
//! 6. **Render**: write chart-spec artifacts and print the summary tables
//!
//! Per-file read failures are listed and skipped; the run only fails when
//! the pattern is malformed or no usable data was extracted at all.

use anyhow::Result;
use bench_report::{
    charts,
    cli::Args,
    discover::discover_reports,
    logging,
    parser::parse_report,
    report,
    series::SeriesSet,
};
use clap::Parser;
use tracing::{debug, info, warn};

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    info!("Bench Report v{}", bench_report::VERSION);

    let discovery = discover_reports(&args.pattern)?;
    if discovery.inputs.is_empty() && discovery.skipped.is_empty() {
        warn!("no files matched pattern: {}", args.pattern);
    }

    // Parse every readable input. Records with nothing extractable are
    // dropped here; parse_report itself never fails on content.
    let mut records = Vec::with_capacity(discovery.inputs.len());
    for input in &discovery.inputs {
        debug!("parsing: {}", input.path.display());
        let record = parse_report(&input.name, &input.content);
        if record.is_degenerate() {
            warn!("no recognizable metrics in {}, skipping", input.name);
            continue;
        }
        records.push(record);
    }

    report::print_skipped(&discovery.skipped);

    // Fatal when the whole batch produced nothing usable.
    let set = SeriesSet::collect(records)?;
    info!(
        "processed {} result(s) across {} workload(s)",
        set.record_count(),
        set.workload_count()
    );

    if !args.summary_only {
        std::fs::create_dir_all(&args.output_dir)?;
        let specs = charts::build_charts(&set, &args.charts, args.cores);
        for spec in &specs {
            charts::write_chart(spec, &args.output_dir)?;
        }
        info!(
            "{} chart artifact(s) written to {}",
            specs.len(),
            args.output_dir.display()
        );
    }

    report::print_summary(&set);
    report::print_resource_summary(&set);

    Ok(())
}
