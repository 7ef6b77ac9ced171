//! Recursive structure-aware comparison of two value trees.
//!
//! The traversal is written with an explicit work stack instead of call
//! recursion so nesting depth is bounded by configuration, not by the OS
//! stack. Emission order is exactly the depth-first pre-order a recursive
//! implementation would produce, which keeps output reproducible across
//! runs and platforms.

use super::options::DiffOptions;
use super::result::{Change, DiffAccumulator, DiffResult};
use crate::model::{Path, Value};
use indexmap::IndexMap;
use thiserror::Error;

/// Errors that can occur during diff computation.
#[derive(Error, Debug)]
pub enum DiffError {
    /// The input trees nest deeper than [`DiffOptions::max_depth`].
    #[error("maximum nesting depth {max_depth} exceeded at '{path}'")]
    DepthExceeded { path: String, max_depth: usize },
}

/// Work item on the traversal stack.
///
/// `Emit` entries exist so that whole-subtree additions/removals inside an
/// object keep their position relative to recursive comparisons of sibling
/// keys: everything for one container is queued in output order and pushed
/// reversed.
enum Task<'a> {
    Compare {
        before: &'a Value,
        after: &'a Value,
        path: Path,
    },
    Emit(Change),
}

/// Structure-aware diff engine.
///
/// `compare` is pure: it reads both trees, never mutates them, performs no
/// I/O, and given well-formed inputs within the depth limit it cannot fail.
#[derive(Debug, Clone, Default)]
pub struct DiffEngine {
    options: DiffOptions,
}

impl DiffEngine {
    /// Engine with default options (ordered arrays).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_options(options: DiffOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> &DiffOptions {
        &self.options
    }

    /// Compare two value trees and return the classified change list.
    ///
    /// # Errors
    ///
    /// Returns [`DiffError::DepthExceeded`] if either tree nests deeper
    /// than `options.max_depth`.
    pub fn compare(&self, before: &Value, after: &Value) -> Result<DiffResult, DiffError> {
        tracing::debug!(
            ignore_order = self.options.ignore_order,
            "starting comparison"
        );

        // Enforce the depth limit up front. Equality tests and subtree
        // clones below recurse through the trees via derived impls, so
        // both inputs must be known-bounded before any of that runs.
        self.check_depth(before)?;
        self.check_depth(after)?;

        let mut acc = DiffAccumulator::default();
        let mut stack = vec![Task::Compare {
            before,
            after,
            path: Path::root(),
        }];

        while let Some(task) = stack.pop() {
            let (before, after, path) = match task {
                Task::Emit(change) => {
                    acc.push(change);
                    continue;
                }
                Task::Compare {
                    before,
                    after,
                    path,
                } => (before, after, path),
            };

            // Identical subtrees contribute nothing; this also covers the
            // equal-scalar case.
            if before == after {
                continue;
            }

            match (before, after) {
                (Value::Object(b), Value::Object(a)) => {
                    Self::queue_objects(b, a, &path, &mut stack);
                }
                (Value::Array(b), Value::Array(a)) => {
                    if self.options.ignore_order {
                        Self::emit_unordered(b, a, &path, &mut acc);
                    } else {
                        Self::queue_ordered(b, a, &path, &mut stack);
                    }
                }
                _ if !before.same_variant(after) => {
                    // A type replacement makes per-field comparison
                    // meaningless; report the whole node and stop here.
                    acc.push(Change::type_changed(path, before.clone(), after.clone()));
                }
                _ => {
                    acc.push(Change::modified(path, before.clone(), after.clone()));
                }
            }
        }

        let result = acc.finish();
        tracing::debug!(changes = result.total_changes(), "comparison finished");
        Ok(result)
    }

    /// Walk one tree iteratively and fail if any node sits deeper than
    /// `options.max_depth`. Runs before the comparison proper so that
    /// nothing in the engine ever recurses into unbounded input.
    fn check_depth(&self, root: &Value) -> Result<(), DiffError> {
        let mut stack = vec![(root, Path::root(), 0usize)];

        while let Some((node, path, depth)) = stack.pop() {
            if depth > self.options.max_depth {
                return Err(DiffError::DepthExceeded {
                    path: path.to_string(),
                    max_depth: self.options.max_depth,
                });
            }
            match node {
                Value::Object(map) => {
                    for (key, child) in map {
                        stack.push((child, path.child_key(key), depth + 1));
                    }
                }
                Value::Array(items) => {
                    for (i, child) in items.iter().enumerate() {
                        stack.push((child, path.child_index(i), depth + 1));
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Queue work for two objects.
    ///
    /// Key union order is the before-tree's key order followed by keys new
    /// to the after-tree in after-tree order, so output never depends on
    /// any hash ordering. Keys on one side only are whole-subtree
    /// additions/removals without recursion.
    fn queue_objects<'a>(
        before: &'a IndexMap<String, Value>,
        after: &'a IndexMap<String, Value>,
        path: &Path,
        stack: &mut Vec<Task<'a>>,
    ) {
        let mut tasks = Vec::with_capacity(before.len() + after.len());

        for (key, before_child) in before {
            let child_path = path.child_key(key);
            match after.get(key) {
                Some(after_child) => tasks.push(Task::Compare {
                    before: before_child,
                    after: after_child,
                    path: child_path,
                }),
                None => tasks.push(Task::Emit(Change::removed(
                    child_path,
                    before_child.clone(),
                ))),
            }
        }
        for (key, after_child) in after {
            if !before.contains_key(key) {
                tasks.push(Task::Emit(Change::added(
                    path.child_key(key),
                    after_child.clone(),
                )));
            }
        }

        // LIFO stack: reverse so tasks run in the order queued above.
        stack.extend(tasks.into_iter().rev());
    }

    /// Queue work for two arrays in ordered (positional) mode.
    ///
    /// Index-shift-sensitive: moving an element changes its index and is
    /// reported as a modification at that index. Tail elements beyond the
    /// shorter length become additions/removals at `path[i]`.
    fn queue_ordered<'a>(
        before: &'a [Value],
        after: &'a [Value],
        path: &Path,
        stack: &mut Vec<Task<'a>>,
    ) {
        let len = before.len().max(after.len());
        let mut tasks = Vec::with_capacity(len);

        for i in 0..len {
            let child_path = path.child_index(i);
            match (before.get(i), after.get(i)) {
                (Some(b), Some(a)) => tasks.push(Task::Compare {
                    before: b,
                    after: a,
                    path: child_path,
                }),
                (Some(b), None) => tasks.push(Task::Emit(Change::removed(child_path, b.clone()))),
                (None, Some(a)) => tasks.push(Task::Emit(Change::added(child_path, a.clone()))),
                (None, None) => unreachable!("index below max of both lengths"),
            }
        }

        stack.extend(tasks.into_iter().rev());
    }

    /// Compare two arrays as multisets (ignore-order mode).
    ///
    /// Greedy matching on deep structural equality, one match consumed per
    /// pair so duplicates pair up by multiplicity. Unmatched elements are
    /// reported as whole-value removals/additions at the array's own path —
    /// position carries no meaning in this mode, so no index is attached.
    /// An element that was reordered *and* modified is one `removed` plus
    /// one `added`: once order is discarded there is no way to know which
    /// before-element became which after-element, and guessing would
    /// misreport. Removals keep before-side order, additions keep
    /// after-side order, removals first.
    fn emit_unordered(before: &[Value], after: &[Value], path: &Path, acc: &mut DiffAccumulator) {
        let mut consumed = vec![false; after.len()];

        for before_el in before {
            let matched = after
                .iter()
                .enumerate()
                .find(|(j, after_el)| !consumed[*j] && *after_el == before_el)
                .map(|(j, _)| j);
            match matched {
                Some(j) => consumed[j] = true,
                None => acc.push(Change::removed(path.clone(), before_el.clone())),
            }
        }
        for (j, after_el) in after.iter().enumerate() {
            if !consumed[j] {
                acc.push(Change::added(path.clone(), after_el.clone()));
            }
        }
    }
}
