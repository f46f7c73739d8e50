//! Error taxonomy for the report pipeline.
//!
//! Parse-time problems are recovered locally and never surface here; only
//! unreadable inputs and a fully empty batch are real errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// The raw input could not be read at all. Reported per file and
    /// skipped; never aborts the batch.
    #[error("failed to read report {path}: {source}")]
    ParseFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Zero usable records across the whole batch. Fatal for the run.
    #[error("no usable metrics extracted from any input")]
    NoData,

    /// The glob pattern itself was malformed.
    #[error("invalid file pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}
