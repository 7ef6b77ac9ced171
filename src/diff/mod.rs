//! Structure-aware diff engine.
//!
//! Home of [`DiffEngine`], which compares two normalized [`Value`] trees
//! and produces an immutable, deterministically ordered [`DiffResult`].
//!
//! [`Value`]: crate::model::Value

mod engine;
mod options;
mod result;

pub use engine::{DiffEngine, DiffError};
pub use options::{DiffOptions, DEFAULT_MAX_DEPTH};
pub use result::{Change, ChangeKind, DiffResult, DiffSummary};
