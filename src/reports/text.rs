//! Human-readable text report output.

use super::{DiffReporter, ReportError, ReportMetadata};
use crate::diff::{Change, ChangeKind, DiffResult};

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Renders a terminal-friendly change listing with optional ANSI color.
pub struct TextReporter {
    color: bool,
}

impl TextReporter {
    #[must_use]
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, code: &'static str) -> &'static str {
        if self.color {
            code
        } else {
            ""
        }
    }

    fn header(&self, result: &DiffResult) -> String {
        let mut parts: Vec<(&'static str, usize)> = result
            .summary()
            .counts()
            .into_iter()
            .filter(|&(_, count)| count > 0)
            .map(|(kind, count)| (kind.as_str(), count))
            .collect();
        parts.sort_by_key(|&(name, _)| name);
        let breakdown: Vec<String> = parts
            .into_iter()
            .map(|(name, count)| format!("{count} {name}"))
            .collect();
        format!(
            "{}Found {} change(s): {}{}",
            self.paint(BOLD),
            result.total_changes(),
            breakdown.join(", "),
            self.paint(RESET),
        )
    }

    fn push_change(&self, lines: &mut Vec<String>, change: &Change) {
        let path = format!("{}{}{}", self.paint(BOLD), change.path, self.paint(RESET));
        match change.kind {
            ChangeKind::Added => {
                if let Some(new) = &change.new {
                    lines.push(format!(
                        "  {}+ {path}: {}{}",
                        self.paint(GREEN),
                        new.render(),
                        self.paint(RESET),
                    ));
                }
            }
            ChangeKind::Removed => {
                if let Some(old) = &change.old {
                    lines.push(format!(
                        "  {}- {path}: {}{}",
                        self.paint(RED),
                        old.render(),
                        self.paint(RESET),
                    ));
                }
            }
            ChangeKind::Modified => {
                lines.push(format!("  {}~ {path}:{}", self.paint(YELLOW), self.paint(RESET)));
                self.push_transition(lines, change);
            }
            ChangeKind::TypeChanged => {
                let old_type = change.old.as_ref().map_or("?", |v| v.type_name());
                let new_type = change.new.as_ref().map_or("?", |v| v.type_name());
                lines.push(format!(
                    "  {}! {path} (type: {old_type} \u{2192} {new_type}):{}",
                    self.paint(YELLOW),
                    self.paint(RESET),
                ));
                self.push_transition(lines, change);
            }
        }
    }

    fn push_transition(&self, lines: &mut Vec<String>, change: &Change) {
        let old = change.old.as_ref().map_or_else(String::new, |v| v.render());
        let new = change.new.as_ref().map_or_else(String::new, |v| v.render());
        lines.push(format!(
            "      {}{old}{} {}\u{2192}{} {}{new}{}",
            self.paint(RED),
            self.paint(RESET),
            self.paint(CYAN),
            self.paint(RESET),
            self.paint(GREEN),
            self.paint(RESET),
        ));
    }
}

impl DiffReporter for TextReporter {
    fn render(
        &self,
        result: &DiffResult,
        _metadata: &ReportMetadata,
    ) -> Result<String, ReportError> {
        if !result.has_changes() {
            return Ok(format!(
                "{}No differences found.{}",
                self.paint(GREEN),
                self.paint(RESET),
            ));
        }

        let mut lines = vec![self.header(result), String::new()];
        for change in result.changes() {
            self.push_change(&mut lines, change);
        }
        Ok(lines.join("\n"))
    }
}
