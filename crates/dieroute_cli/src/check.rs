//! `dieroute check`: input validation.
//!
//! Loads the configuration and the three input files, renders diagnostics,
//! and prints a summary of the dies and the capacity matrix.

use dieroute_common::EndpointKind;

use crate::pipeline::{load_design, load_project};
use crate::GlobalArgs;

/// Runs the `dieroute check` command.
///
/// Returns exit code 0 if the inputs load cleanly, 1 if there are errors.
pub fn run(global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let project = load_project(global)?;

    if !global.quiet {
        eprintln!(
            "   Checking {} ({})",
            project.config.project.name,
            project.dir.display()
        );
    }

    let Some(design) = load_design(&project, global)? else {
        return Ok(1);
    };

    if !global.quiet {
        for (id, die) in design.registry.iter() {
            let label = design.labels.get(id.index()).map_or("", String::as_str);
            println!(
                "D{id} {label}: {} source(s), {} relay(s)",
                die.sources.len(),
                die.relays.len()
            );
        }
        let n = design.topology.die_count();
        println!("capacity matrix: {n}x{n}, {} link(s)", design.topology.edges().count());
        println!(
            "declared: {} source(s) (total weight {}), {} relay(s)",
            design.declarations.count(EndpointKind::Source),
            design.declarations.total_source_weight(),
            design.declarations.count(EndpointKind::Relay)
        );
        println!("cross-die pairs: {}", design.registry.cross_die_pairs());
        eprintln!("   Inputs OK");
    }

    Ok(0)
}
