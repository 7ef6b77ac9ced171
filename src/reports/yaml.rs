//! YAML report output.

use super::json::summary_map;
use super::{DiffReporter, ReportError, ReportMetadata};
use crate::diff::{Change, DiffResult};
use indexmap::IndexMap;
use serde::Serialize;

/// Renders the same payload as the JSON reporter, as a YAML document.
pub struct YamlReporter;

#[derive(Serialize)]
struct YamlReport<'a> {
    summary: IndexMap<&'static str, usize>,
    total_changes: usize,
    changes: &'a [Change],
    metadata: &'a ReportMetadata,
}

impl DiffReporter for YamlReporter {
    fn render(
        &self,
        result: &DiffResult,
        metadata: &ReportMetadata,
    ) -> Result<String, ReportError> {
        let report = YamlReport {
            summary: summary_map(result),
            total_changes: result.total_changes(),
            changes: result.changes(),
            metadata,
        };
        serde_yaml::to_string(&report).map_err(|e| ReportError::Serialization(e.to_string()))
    }
}
