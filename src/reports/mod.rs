//! Report generation in various output formats.

mod json;
mod text;
mod yaml;

pub use json::JsonReporter;
pub use text::TextReporter;
pub use yaml::YamlReporter;

use crate::diff::DiffResult;
use clap::ValueEnum;
use serde::Serialize;
use thiserror::Error;

/// Output format for diff reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable colored text
    Text,
    /// Machine-readable JSON
    Json,
    /// Machine-readable YAML
    Yaml,
}

impl ReportFormat {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to serialize report: {0}")]
    Serialization(String),
}

/// Input file details echoed into machine-readable reports. Holds only
/// stable facts about the comparison, never timestamps, so identical
/// inputs always produce byte-identical reports.
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    pub before: String,
    pub after: String,
    pub format: String,
}

/// Trait for rendering a [`DiffResult`] into an output document.
pub trait DiffReporter {
    fn render(&self, result: &DiffResult, metadata: &ReportMetadata)
        -> Result<String, ReportError>;
}

/// Pick the reporter for a format.
#[must_use]
pub fn reporter_for(format: ReportFormat, color: bool) -> Box<dyn DiffReporter> {
    match format {
        ReportFormat::Text => Box::new(TextReporter::new(color)),
        ReportFormat::Json => Box::new(JsonReporter),
        ReportFormat::Yaml => Box::new(YamlReporter),
    }
}
