use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Bench Report - parse load-test report files and generate comparison chart data
#[derive(Parser, Debug, Clone)]
#[clap(version, about, long_about = None)]
pub struct Args {
    /// Report file pattern (e.g. "results/*_*thread.txt")
    pub pattern: String,

    /// Output directory for chart artifacts
    #[clap(short = 'o', long, default_value = "graphs")]
    pub output_dir: PathBuf,

    /// Chart families to generate (space-separated: throughput, latency, resources, or all)
    #[clap(short = 'c', long = "charts", value_enum, default_values_t = vec![ChartKind::All], num_args = 1..)]
    pub charts: Vec<ChartKind>,

    /// CPU core count annotated on the CPU utilization chart
    #[clap(long, default_value_t = num_cpus::get())]
    pub cores: usize,

    /// Print the summary tables without writing chart artifacts
    #[clap(long, default_value_t = false)]
    pub summary_only: bool,

    /// Verbose output
    #[clap(short = 'v', long, default_value_t = false)]
    pub verbose: bool,
}

/// Chart families selectable on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum ChartKind {
    /// Throughput vs load
    #[clap(name = "throughput")]
    Throughput,

    /// One chart per latency figure (mean, median, P95, P99)
    #[clap(name = "latency")]
    Latency,

    /// CPU, disk, I/O-wait and memory utilization
    #[clap(name = "resources")]
    Resources,

    /// All chart families
    #[clap(name = "all")]
    All,
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartKind::Throughput => write!(f, "throughput"),
            ChartKind::Latency => write!(f, "latency"),
            ChartKind::Resources => write!(f, "resources"),
            ChartKind::All => write!(f, "all"),
        }
    }
}

impl ChartKind {
    /// Expand the "all" variant to every concrete chart family
    pub fn expand_all(kinds: Vec<ChartKind>) -> Vec<ChartKind> {
        if kinds.contains(&ChartKind::All) {
            vec![
                ChartKind::Throughput,
                ChartKind::Latency,
                ChartKind::Resources,
            ]
        } else {
            kinds
        }
    }
}
