//! JSON report output.

use super::{DiffReporter, ReportError, ReportMetadata};
use crate::diff::{Change, ChangeKind, DiffResult};
use indexmap::IndexMap;
use serde::Serialize;

/// Renders the stable JSON payload consumed by scripts and CI checks.
pub struct JsonReporter;

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: IndexMap<&'static str, usize>,
    total_changes: usize,
    changes: &'a [Change],
    metadata: &'a ReportMetadata,
}

impl DiffReporter for JsonReporter {
    fn render(
        &self,
        result: &DiffResult,
        metadata: &ReportMetadata,
    ) -> Result<String, ReportError> {
        let report = JsonReport {
            summary: summary_map(result),
            total_changes: result.total_changes(),
            changes: result.changes(),
            metadata,
        };
        serde_json::to_string_pretty(&report)
            .map_err(|e| ReportError::Serialization(e.to_string()))
    }
}

/// Per-kind counts, omitting zero entries, in the fixed kind order.
pub(super) fn summary_map(result: &DiffResult) -> IndexMap<&'static str, usize> {
    let mut map = IndexMap::new();
    for kind in ChangeKind::ALL {
        let count = result.summary().count(kind);
        if count > 0 {
            map.insert(kind.as_str(), count);
        }
    }
    map
}
