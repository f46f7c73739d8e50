//! File discovery and ingestion.
//!
//! Expands a glob pattern, reads every match fully into memory, and hands
//! the core `(name, content)` pairs. Unreadable files are recorded as
//! skipped and never abort the batch; matched paths are sorted so the rest
//! of the pipeline sees a deterministic discovery order.

use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::error::ReportError;

/// One readable report: its display name plus the full buffered text.
#[derive(Debug, Clone)]
pub struct ReportInput {
    /// File name without directory components, used for workload and
    /// load-level classification.
    pub name: String,
    /// Full path, kept for diagnostics.
    pub path: PathBuf,
    pub content: String,
}

/// Outcome of expanding one pattern: the readable inputs plus every file
/// that matched but could not be read.
#[derive(Debug)]
pub struct Discovery {
    pub inputs: Vec<ReportInput>,
    pub skipped: Vec<ReportError>,
}

/// Expand `pattern` and read every matched file.
///
/// Fails only on a malformed pattern; per-file read errors land in
/// [`Discovery::skipped`].
pub fn discover_reports(pattern: &str) -> Result<Discovery, ReportError> {
    let paths = glob::glob(pattern).map_err(|source| ReportError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let mut matched: Vec<PathBuf> = Vec::new();
    let mut skipped = Vec::new();
    for entry in paths {
        match entry {
            Ok(path) => matched.push(path),
            Err(e) => {
                let path = e.path().to_path_buf();
                skipped.push(ReportError::ParseFailure {
                    path,
                    source: e.into_error(),
                });
            }
        }
    }
    matched.sort();

    let mut inputs = Vec::with_capacity(matched.len());
    for path in matched {
        match fs::read_to_string(&path) {
            Ok(content) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.to_string_lossy().into_owned());
                inputs.push(ReportInput {
                    name,
                    path,
                    content,
                });
            }
            Err(source) => {
                warn!("skipping unreadable report: {}", path.display());
                skipped.push(ReportError::ParseFailure { path, source });
            }
        }
    }

    info!(
        "found {} report file(s), {} skipped",
        inputs.len(),
        skipped.len()
    );
    Ok(Discovery { inputs, skipped })
}
