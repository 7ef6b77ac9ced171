//! Top-level error type tying the layers together.

use crate::diff::DiffError;
use crate::parsers::ParseError;
use crate::reports::ReportError;
use thiserror::Error;

/// Errors surfaced by a complete diff run.
#[derive(Error, Debug)]
pub enum ConfigDiffError {
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: ParseError,
    },

    #[error(
        "format mismatch: {before_path} is {before_format}, but {after_path} is {after_format}; \
         both files must use the same configuration format"
    )]
    FormatMismatch {
        before_path: String,
        before_format: String,
        after_path: String,
        after_format: String,
    },

    #[error("diff failed: {0}")]
    Diff(#[from] DiffError),

    #[error("report failed: {0}")]
    Report(#[from] ReportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ConfigDiffError>;
