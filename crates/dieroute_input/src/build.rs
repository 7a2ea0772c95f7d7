//! Die construction from placements and declarations.

use crate::codes::warn_invalid_nodes;
use crate::declarations::NetDeclarations;
use crate::node_id::decode_node_id;
use crate::position::DiePlacement;
use dieroute_common::EndpointKind;
use dieroute_diagnostics::DiagnosticSink;
use dieroute_route::Die;

/// Builds one [`Die`] per placement.
///
/// Each placed node that is declared becomes a source or relay endpoint of
/// its die, in placement order. Undeclared nodes are ignored. Declared nodes
/// whose names cannot be decoded are skipped and summarized in one warning.
pub fn build_dies(
    placements: &[DiePlacement],
    declarations: &NetDeclarations,
    sink: &DiagnosticSink,
) -> Vec<Die> {
    let mut invalid = 0usize;
    let mut first_invalid = None;

    let dies: Vec<Die> = placements
        .iter()
        .map(|placement| {
            let mut die = Die::default();
            for node in &placement.nodes {
                let Some(decl) = declarations.get(node) else {
                    continue;
                };
                match decode_node_id(node) {
                    Ok(id) => match decl.kind {
                        EndpointKind::Source => die.sources.push(id),
                        EndpointKind::Relay => die.relays.push(id),
                    },
                    Err(err) => {
                        invalid += 1;
                        first_invalid.get_or_insert_with(|| err.to_string());
                    }
                }
            }
            die
        })
        .collect();

    if let Some(first) = first_invalid {
        sink.emit(warn_invalid_nodes(invalid, &first));
    }
    dies
}
