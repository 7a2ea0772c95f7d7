//! Die placement file reader.
//!
//! One die per line, `<label>: <node> <node> ...`. Dies are numbered in the
//! order their lines are accepted.

use crate::codes::warn_missing_separator;
use dieroute_diagnostics::{DiagnosticSink, Location};

/// One accepted line of the position file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiePlacement {
    /// The label before the `:`.
    pub label: String,
    /// Node names placed on the die, in file order.
    pub nodes: Vec<String>,
    /// 1-based line number.
    pub line: u32,
}

/// Parses a position file. Lines without `:` are skipped with a warning.
pub fn parse_positions(text: &str, file: &str, sink: &DiagnosticSink) -> Vec<DiePlacement> {
    let mut placements = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx as u32 + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        let Some((label, rest)) = trimmed.split_once(':') else {
            sink.emit(warn_missing_separator(
                Location::new(file, line).with_text(raw),
            ));
            continue;
        };
        placements.push(DiePlacement {
            label: label.trim().to_string(),
            nodes: rest.split_whitespace().map(str::to_string).collect(),
            line,
        });
    }
    placements
}
