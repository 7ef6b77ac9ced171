//! Run configuration assembled from CLI arguments.

use crate::diff::DiffOptions;
use crate::reports::ReportFormat;
use std::path::PathBuf;

/// The two documents being compared.
#[derive(Debug, Clone)]
pub struct DiffPaths {
    pub before: PathBuf,
    pub after: PathBuf,
}

/// Where and how the report is emitted.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub format: ReportFormat,
    pub file: Option<PathBuf>,
    pub no_color: bool,
}

/// Everything one diff run needs.
#[derive(Debug, Clone)]
pub struct DiffConfig {
    pub paths: DiffPaths,
    pub output: OutputConfig,
    pub options: DiffOptions,
    pub quiet: bool,
}
