//! Endpoint declaration (net) file reader.
//!
//! Each line is `<node> <type> [<weight>]` where type `s` declares a source
//! endpoint and `l` a relay endpoint. Only declared nodes take part in
//! routing; everything else on the position file is ignored.

use crate::codes::{note_suppressed, warn_malformed_declaration, warn_unknown_type, W102};
use dieroute_common::EndpointKind;
use dieroute_diagnostics::{Diagnostic, DiagnosticSink, Location};
use std::collections::HashMap;

/// Number of declaration problems reported individually per file.
pub const MAX_REPORTED_PROBLEMS: usize = 5;

/// The declared role of one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeDecl {
    /// Source or relay.
    pub kind: EndpointKind,
    /// Connection weight; always 1 for relays.
    pub weight: u32,
}

/// All declarations of a net file, keyed by node name.
#[derive(Debug, Clone, Default)]
pub struct NetDeclarations {
    nodes: HashMap<String, NodeDecl>,
}

impl NetDeclarations {
    /// Returns the declaration of `node`, if any.
    pub fn get(&self, node: &str) -> Option<&NodeDecl> {
        self.nodes.get(node)
    }

    /// Returns the number of declared nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if nothing was declared.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of nodes declared with the given kind.
    pub fn count(&self, kind: EndpointKind) -> usize {
        self.nodes.values().filter(|d| d.kind == kind).count()
    }

    /// Returns the summed weight of all source declarations.
    pub fn total_source_weight(&self) -> u64 {
        self.nodes
            .values()
            .filter(|d| d.kind == EndpointKind::Source)
            .map(|d| u64::from(d.weight))
            .sum()
    }
}

/// Parses a net file.
///
/// Blank lines and lines starting with `#` are skipped. Malformed lines and
/// unknown types are skipped too; the first [`MAX_REPORTED_PROBLEMS`] of
/// them are reported as warnings and the rest are summarized in one note.
/// A node declared twice keeps its last declaration.
pub fn parse_declarations(text: &str, file: &str, sink: &DiagnosticSink) -> NetDeclarations {
    let mut nodes = HashMap::new();
    let mut problems = 0usize;
    let mut report = |diag: Diagnostic| {
        problems += 1;
        if problems <= MAX_REPORTED_PROBLEMS {
            sink.emit(diag);
        }
    };

    for (idx, raw) in text.lines().enumerate() {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let at = || Location::new(file, idx as u32 + 1).with_text(raw);

        let mut tokens = trimmed.split_whitespace();
        let (Some(node), Some(kind)) = (tokens.next(), tokens.next()) else {
            report(warn_malformed_declaration("missing endpoint type", at()));
            continue;
        };
        let decl = match kind {
            "s" => NodeDecl {
                kind: EndpointKind::Source,
                weight: tokens.next().and_then(|w| w.parse().ok()).unwrap_or(1),
            },
            "l" => NodeDecl {
                kind: EndpointKind::Relay,
                weight: 1,
            },
            other => {
                report(warn_unknown_type(other, at()));
                continue;
            }
        };
        nodes.insert(node.to_string(), decl);
    }

    if problems > MAX_REPORTED_PROBLEMS {
        sink.emit(note_suppressed(W102, file, problems - MAX_REPORTED_PROBLEMS));
    }
    NetDeclarations { nodes }
}
