//! Readers for the three design description files.
//!
//! A design is described by a position file (which nodes sit on which die),
//! a network file (the inter-die capacity matrix) and a net file (which
//! nodes are source or relay endpoints). [`load_inputs`] reads all three,
//! reports line-level problems through a [`DiagnosticSink`], checks that
//! the files agree with each other, and returns the die registry and
//! topology the router works on.

#![warn(missing_docs)]

pub mod build;
pub mod codes;
pub mod declarations;
pub mod error;
pub mod network;
pub mod node_id;
pub mod position;

pub use build::build_dies;
pub use declarations::{parse_declarations, NetDeclarations, NodeDecl};
pub use error::{InputError, NodeIdError};
pub use network::parse_network;
pub use node_id::{decode_node_id, GP_OFFSET};
pub use position::{parse_positions, DiePlacement};

use dieroute_common::{MatrixError, SquareMatrix};
use dieroute_config::ResolvedPaths;
use dieroute_diagnostics::DiagnosticSink;
use dieroute_route::{DieRegistry, Topology};
use std::path::Path;
use tracing::debug;

/// The contents of one input file together with the name shown in diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct SourceText<'a> {
    /// Display name, usually the path.
    pub name: &'a str,
    /// Full file contents.
    pub text: &'a str,
}

/// A fully loaded design.
#[derive(Debug, Clone)]
pub struct DesignInputs {
    /// Die labels from the position file, by die index.
    pub labels: Vec<String>,
    /// The dies and their endpoints.
    pub registry: DieRegistry,
    /// The capacity graph.
    pub topology: Topology,
    /// The endpoint declarations.
    pub declarations: NetDeclarations,
}

/// Reads and parses the three input files.
///
/// Returns [`InputError::Io`] if a file cannot be read and
/// [`InputError::Invalid`] if any error diagnostic was emitted.
pub fn load_inputs(paths: &ResolvedPaths, sink: &DiagnosticSink) -> Result<DesignInputs, InputError> {
    let position = read(&paths.position)?;
    let network = read(&paths.network)?;
    let net = read(&paths.net)?;

    let position_name = paths.position.display().to_string();
    let network_name = paths.network.display().to_string();
    let net_name = paths.net.display().to_string();

    parse_inputs(
        SourceText {
            name: &position_name,
            text: &position,
        },
        SourceText {
            name: &network_name,
            text: &network,
        },
        SourceText {
            name: &net_name,
            text: &net,
        },
        sink,
    )
}

/// Parses already-read input files and cross-checks them.
pub fn parse_inputs(
    position: SourceText<'_>,
    network: SourceText<'_>,
    net: SourceText<'_>,
    sink: &DiagnosticSink,
) -> Result<DesignInputs, InputError> {
    let placements = parse_positions(position.text, position.name, sink);
    if placements.is_empty() {
        sink.emit(codes::error_empty(codes::E102, position.name, "dies"));
    }
    let rows = parse_network(network.text, network.name, sink);
    if rows.is_empty() {
        sink.emit(codes::error_empty(codes::E103, network.name, "matrix rows"));
    }
    let declarations = parse_declarations(net.text, net.name, sink);
    if declarations.is_empty() {
        sink.emit(codes::error_empty(
            codes::E104,
            net.name,
            "endpoint declarations",
        ));
    }
    debug!(
        dies = placements.len(),
        rows = rows.len(),
        declared = declarations.len(),
        "parsed input files"
    );

    let capacity = match SquareMatrix::from_rows(rows) {
        Ok(capacity) => Some(capacity),
        Err(MatrixError::NotSquare {
            row,
            expected,
            found,
        }) => {
            sink.emit(codes::error_not_square(network.name, row, expected, found));
            None
        }
    };
    if let Some(capacity) = &capacity {
        if !capacity.is_empty() && !placements.is_empty() && capacity.size() != placements.len() {
            sink.emit(codes::error_die_count(placements.len(), capacity.size()));
        }
    }

    let capacity = match capacity {
        Some(capacity) if !sink.has_errors() => capacity,
        _ => {
            return Err(InputError::Invalid {
                errors: sink.error_count(),
            })
        }
    };

    let dies = build_dies(&placements, &declarations, sink);
    Ok(DesignInputs {
        labels: placements.into_iter().map(|p| p.label).collect(),
        registry: DieRegistry::new(dies),
        topology: Topology::new(capacity),
        declarations,
    })
}

fn read(path: &Path) -> Result<String, InputError> {
    std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })
}
