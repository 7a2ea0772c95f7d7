//! Capacity matrix file reader.
//!
//! One matrix row per non-empty line, entries separated by whitespace.
//! Squareness is checked later, when the rows become a topology.

use crate::codes::error_bad_capacity;
use dieroute_diagnostics::{DiagnosticSink, Location};

/// Parses the capacity matrix rows.
///
/// Every token that is not a non-negative integer is reported as an error;
/// the row it sits on is dropped.
pub fn parse_network(text: &str, file: &str, sink: &DiagnosticSink) -> Vec<Vec<u32>> {
    let mut rows = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        if raw.trim().is_empty() {
            continue;
        }
        let mut row = Vec::new();
        let mut valid = true;
        for token in raw.split_whitespace() {
            match token.parse::<u32>() {
                Ok(cap) => row.push(cap),
                Err(_) => {
                    sink.emit(error_bad_capacity(
                        token,
                        Location::new(file, idx as u32 + 1).with_text(raw),
                    ));
                    valid = false;
                }
            }
        }
        if valid {
            rows.push(row);
        }
    }
    rows
}
