//! Diff result structures.

use crate::model::{Path, Value};
use serde::Serialize;
use std::fmt;

/// Classification of a single detected change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// Present only in the after-tree.
    Added,
    /// Present only in the before-tree.
    Removed,
    /// Present in both with the same runtime type but a different value.
    Modified,
    /// Present in both with different runtime types.
    TypeChanged,
}

impl ChangeKind {
    /// All kinds, in the order summaries and reports list them.
    pub const ALL: [Self; 4] = [Self::Added, Self::Removed, Self::Modified, Self::TypeChanged];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Removed => "removed",
            Self::Modified => "modified",
            Self::TypeChanged => "type_changed",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One detected difference between two value trees.
///
/// `old` is absent for additions, `new` is absent for removals; both are
/// present for modifications and type changes. Serializes to the wire shape
/// `{path, type, old?, new?}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Change {
    pub path: Path,
    #[serde(rename = "type")]
    pub kind: ChangeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new: Option<Value>,
}

impl Change {
    pub(crate) fn added(path: Path, new: Value) -> Self {
        Self {
            path,
            kind: ChangeKind::Added,
            old: None,
            new: Some(new),
        }
    }

    pub(crate) fn removed(path: Path, old: Value) -> Self {
        Self {
            path,
            kind: ChangeKind::Removed,
            old: Some(old),
            new: None,
        }
    }

    pub(crate) fn modified(path: Path, old: Value, new: Value) -> Self {
        Self {
            path,
            kind: ChangeKind::Modified,
            old: Some(old),
            new: Some(new),
        }
    }

    pub(crate) fn type_changed(path: Path, old: Value, new: Value) -> Self {
        Self {
            path,
            kind: ChangeKind::TypeChanged,
            old: Some(old),
            new: Some(new),
        }
    }
}

/// Per-kind change counters.
///
/// Maintained incrementally while the engine emits changes, so the counts
/// and the change list can never disagree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffSummary {
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
    pub type_changed: usize,
}

impl DiffSummary {
    fn record(&mut self, kind: ChangeKind) {
        match kind {
            ChangeKind::Added => self.added += 1,
            ChangeKind::Removed => self.removed += 1,
            ChangeKind::Modified => self.modified += 1,
            ChangeKind::TypeChanged => self.type_changed += 1,
        }
    }

    #[must_use]
    pub const fn count(&self, kind: ChangeKind) -> usize {
        match kind {
            ChangeKind::Added => self.added,
            ChangeKind::Removed => self.removed,
            ChangeKind::Modified => self.modified,
            ChangeKind::TypeChanged => self.type_changed,
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.added + self.removed + self.modified + self.type_changed
    }

    /// Counts per kind in report order, zero counts included.
    #[must_use]
    pub const fn counts(&self) -> [(ChangeKind, usize); 4] {
        [
            (ChangeKind::Added, self.added),
            (ChangeKind::Removed, self.removed),
            (ChangeKind::Modified, self.modified),
            (ChangeKind::TypeChanged, self.type_changed),
        ]
    }
}

/// Complete, immutable result of one comparison.
///
/// Built exactly once by the engine via [`DiffAccumulator`]; external code
/// gets read access only.
#[derive(Debug, Clone, Serialize)]
#[must_use]
pub struct DiffResult {
    changes: Vec<Change>,
    summary: DiffSummary,
}

impl DiffResult {
    /// The ordered change list (deterministic across runs).
    #[must_use]
    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    #[must_use]
    pub const fn summary(&self) -> &DiffSummary {
        &self.summary
    }

    #[must_use]
    pub fn total_changes(&self) -> usize {
        self.changes.len()
    }

    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }
}

/// Internal builder the engine pushes changes into.
///
/// Keeps the summary counters in lockstep with the change list.
#[derive(Debug, Default)]
pub(crate) struct DiffAccumulator {
    changes: Vec<Change>,
    summary: DiffSummary,
}

impl DiffAccumulator {
    pub(crate) fn push(&mut self, change: Change) {
        self.summary.record(change.kind);
        self.changes.push(change);
    }

    pub(crate) fn finish(self) -> DiffResult {
        DiffResult {
            changes: self.changes,
            summary: self.summary,
        }
    }
}
