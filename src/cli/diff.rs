//! The diff command: parse both inputs, compare, render, write.

use crate::config::DiffConfig;
use crate::diff::DiffEngine;
use crate::error::ConfigDiffError;
use crate::parsers::ParserRegistry;
use crate::pipeline::{exit_codes, should_use_color, write_output, OutputTarget};
use crate::reports::{reporter_for, ReportMetadata};
use anyhow::Result;
use tracing::debug;

/// Run a full comparison and return the process exit code.
pub fn run_diff(config: &DiffConfig) -> Result<i32> {
    let registry = ParserRegistry::with_builtins();

    let before_parser = registry
        .detect(&config.paths.before)
        .map_err(anyhow::Error::from)?;
    let after_parser = registry
        .detect(&config.paths.after)
        .map_err(anyhow::Error::from)?;

    let format = before_parser.format_name();
    if format != after_parser.format_name() {
        return Err(ConfigDiffError::FormatMismatch {
            before_path: config.paths.before.display().to_string(),
            before_format: format.to_string(),
            after_path: config.paths.after.display().to_string(),
            after_format: after_parser.format_name().to_string(),
        }
        .into());
    }
    debug!(format, "detected input format");

    let before = before_parser
        .parse(&config.paths.before)
        .map_err(|source| ConfigDiffError::Parse {
            path: config.paths.before.display().to_string(),
            source,
        })?;
    let after = after_parser
        .parse(&config.paths.after)
        .map_err(|source| ConfigDiffError::Parse {
            path: config.paths.after.display().to_string(),
            source,
        })?;

    let engine = DiffEngine::with_options(config.options);
    let result = engine
        .compare(&before, &after)
        .map_err(ConfigDiffError::from)?;
    debug!(total = result.total_changes(), "comparison complete");

    let metadata = ReportMetadata {
        before: config.paths.before.display().to_string(),
        after: config.paths.after.display().to_string(),
        format: format.to_string(),
    };
    let target = OutputTarget::from_option(config.output.file.clone());
    let color = should_use_color(config.output.no_color, &target);
    let reporter = reporter_for(config.output.format, color);
    let rendered = reporter
        .render(&result, &metadata)
        .map_err(ConfigDiffError::from)?;

    write_output(&rendered, &target, config.quiet)?;

    Ok(if result.has_changes() {
        exit_codes::CHANGES_DETECTED
    } else {
        exit_codes::NO_CHANGES
    })
}
