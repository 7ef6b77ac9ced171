//! Command-line interface.

mod diff;

pub use diff::run_diff;

use crate::config::{DiffConfig, DiffPaths, OutputConfig};
use crate::diff::{DiffOptions, DEFAULT_MAX_DEPTH};
use crate::reports::ReportFormat;
use clap::Parser;
use std::path::PathBuf;

/// Structure-aware configuration diff tool.
///
/// Compares two config files semantically and reports added, removed,
/// modified, and type-changed values.
#[derive(Parser, Debug)]
#[command(
    name = "config-diff",
    version,
    about = "Semantic diff for JSON, YAML, TOML, and INI configuration files",
    after_help = "Exit codes:\n  0 - no differences\n  1 - differences found\n  2 - error\n\n\
                  Example: config-diff before.yaml after.yaml --format json"
)]
pub struct Cli {
    /// Path to the original (before) config file
    #[arg(value_name = "BEFORE")]
    pub before: PathBuf,

    /// Path to the updated (after) config file
    #[arg(value_name = "AFTER")]
    pub after: PathBuf,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Ignore list ordering when comparing arrays
    #[arg(long)]
    pub ignore_order: bool,

    /// Write output to FILE instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Maximum nesting depth before the comparison is aborted
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Suppress informational logging
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose/debug logging to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Collapse parsed arguments into the run configuration.
    #[must_use]
    pub fn into_config(self) -> DiffConfig {
        DiffConfig {
            paths: DiffPaths {
                before: self.before,
                after: self.after,
            },
            output: OutputConfig {
                format: self.format,
                file: self.output_file,
                no_color: self.no_color,
            },
            options: DiffOptions {
                ignore_order: self.ignore_order,
                max_depth: self.max_depth,
            },
            quiet: self.quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["config-diff", "a.json", "b.json"]);
        assert_eq!(cli.format, ReportFormat::Text);
        assert!(!cli.ignore_order);
        assert_eq!(cli.max_depth, DEFAULT_MAX_DEPTH);
        assert!(cli.output_file.is_none());
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::parse_from([
            "config-diff",
            "a.yaml",
            "b.yaml",
            "-f",
            "json",
            "--ignore-order",
            "-o",
            "out.json",
            "--max-depth",
            "64",
            "--no-color",
            "-q",
        ]);
        let config = cli.into_config();
        assert_eq!(config.output.format, ReportFormat::Json);
        assert!(config.options.ignore_order);
        assert_eq!(config.options.max_depth, 64);
        assert_eq!(config.output.file.as_deref(), Some(std::path::Path::new("out.json")));
        assert!(config.output.no_color);
        assert!(config.quiet);
    }

    #[test]
    fn test_requires_both_paths() {
        assert!(Cli::try_parse_from(["config-diff", "only.json"]).is_err());
    }
}
