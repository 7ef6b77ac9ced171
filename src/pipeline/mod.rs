//! Output plumbing shared by the CLI: where a report goes, whether it is
//! colored, and how the process exit code is chosen.

use anyhow::{Context, Result};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Process exit codes.
///
/// Scripts rely on these: `0` and `1` both mean the comparison ran, and
/// only `2` signals a failure.
pub mod exit_codes {
    /// The inputs are semantically identical.
    pub const NO_CHANGES: i32 = 0;
    /// The comparison succeeded and found differences.
    pub const CHANGES_DETECTED: i32 = 1;
    /// Any error: unreadable input, parse failure, depth limit, bad output path.
    pub const ERROR: i32 = 2;
}

/// Target for output, either stdout or a file.
#[derive(Debug, Clone)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    #[must_use]
    pub fn from_option(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) => Self::File(p),
            None => Self::Stdout,
        }
    }

    /// Whether output goes to an interactive terminal.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Stdout) && std::io::stdout().is_terminal()
    }
}

/// Decide whether text output should carry ANSI color.
///
/// Color is disabled by the `--no-color` flag, a non-empty `NO_COLOR`
/// environment variable, or a non-terminal target (files, pipes).
#[must_use]
pub fn should_use_color(no_color_flag: bool, target: &OutputTarget) -> bool {
    !no_color_flag
        && env_allows_color(std::env::var("NO_COLOR").ok().as_deref())
        && target.is_terminal()
}

/// The `NO_COLOR` convention: the variable disables color only when set
/// to a non-empty value; an empty string counts as unset.
fn env_allows_color(no_color: Option<&str>) -> bool {
    no_color.map_or(true, str::is_empty)
}

/// Write a rendered report to the target.
pub fn write_output(content: &str, target: &OutputTarget, quiet: bool) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            println!("{content}");
            Ok(())
        }
        OutputTarget::File(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("failed to write output to {}", path.display()))?;
            if !quiet {
                tracing::info!("report written to {}", path.display());
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_target_from_option_none() {
        assert!(matches!(OutputTarget::from_option(None), OutputTarget::Stdout));
    }

    #[test]
    fn test_output_target_from_option_some() {
        let path = PathBuf::from("/tmp/report.json");
        match OutputTarget::from_option(Some(path.clone())) {
            OutputTarget::File(p) => assert_eq!(p, path),
            OutputTarget::Stdout => panic!("expected File variant"),
        }
    }

    #[test]
    fn test_file_target_is_never_terminal() {
        let target = OutputTarget::File(PathBuf::from("/tmp/report.json"));
        assert!(!target.is_terminal());
        assert!(!should_use_color(false, &target));
    }

    #[test]
    fn test_no_color_flag_wins() {
        assert!(!should_use_color(true, &OutputTarget::Stdout));
    }

    #[test]
    fn test_empty_no_color_var_counts_as_unset() {
        assert!(env_allows_color(None));
        assert!(env_allows_color(Some("")));
        assert!(!env_allows_color(Some("1")));
        assert!(!env_allows_color(Some("true")));
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let target = OutputTarget::File(path.clone());
        write_output("hello", &target, true).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "hello");
    }

    #[test]
    fn test_exit_codes_are_distinct() {
        assert_eq!(exit_codes::NO_CHANGES, 0);
        assert_eq!(exit_codes::CHANGES_DETECTED, 1);
        assert_eq!(exit_codes::ERROR, 2);
    }
}
