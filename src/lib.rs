//! **Structure-aware diffing for configuration files.**
//!
//! `config-diff` compares two configuration documents semantically instead of
//! line by line. It parses **JSON**, **YAML**, **TOML**, and **INI** files into
//! a unified value model, walks both trees, and reports every added, removed,
//! modified, and type-changed value with a dotted path such as
//! `bgp.neighbors[0].remote_as`.
//!
//! The same comparison powers the `config-diff` command-line tool and a
//! library API for programmatic use.
//!
//! ## Key Features
//!
//! - **Format-independent comparison**: a port moved from one line to another,
//!   a reordered mapping, or a quoting change produces no diff; only semantic
//!   differences are reported.
//! - **Classified changes**: every difference is one of `added`, `removed`,
//!   `modified`, or `type_changed`, with the old and new values attached.
//! - **Deterministic output**: the same pair of inputs always yields the same
//!   changes in the same order, so reports are directly comparable in CI.
//! - **Unordered arrays on demand**: `--ignore-order` treats arrays as
//!   multisets, reporting only genuine membership changes.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the normalized [`Value`] tree every parser produces, and
//!   the [`Path`] type that addresses positions inside it.
//! - **[`parsers`]**: one [`ConfigParser`] per format plus the
//!   [`ParserRegistry`] that picks a parser from a file extension.
//! - **[`diff`]**: the [`DiffEngine`], a pure comparison over two `Value`
//!   trees producing a [`DiffResult`].
//! - **[`reports`]**: text, JSON, and YAML renderings of a `DiffResult`.
//! - **[`pipeline`]**: output targets, color decisions, and exit codes shared
//!   by the CLI.
//!
//! ## Getting Started
//!
//! ```no_run
//! use std::path::Path;
//! use config_diff::{parse_config, DiffEngine};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let before = parse_config(Path::new("before.yaml"))?;
//!     let after = parse_config(Path::new("after.yaml"))?;
//!
//!     let engine = DiffEngine::new();
//!     let result = engine.compare(&before, &after)?;
//!
//!     for change in result.changes() {
//!         println!("{} {}", change.kind, change.path);
//!     }
//!
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // # Errors / # Panics doc sections are not maintained for every fallible fn
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Variable names like `old`/`new` are clear in context
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod reports;

// Re-export main types for convenience
pub use config::{DiffConfig, DiffPaths, OutputConfig};
pub use diff::{Change, ChangeKind, DiffEngine, DiffError, DiffOptions, DiffResult, DiffSummary};
pub use error::{ConfigDiffError, Result};
pub use model::{Path, PathSegment, Value};
pub use parsers::{parse_config, ConfigParser, ParseError, ParserRegistry};
pub use reports::{DiffReporter, ReportFormat, ReportMetadata};
