//! `dieroute paths`: candidate sequence listing for one die pair.

use dieroute_common::DieId;
use dieroute_config::validate_routing;
use dieroute_route::PathEnumerator;

use crate::pipeline::{load_design, load_project};
use crate::{GlobalArgs, PathsArgs};

/// Runs the `dieroute paths` command.
///
/// Prints the sequences the allocator would try for the given die pair, in
/// the order it would try them.
pub fn run(args: &PathsArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let project = load_project(global)?;
    let mut routing = project.config.routing.clone();
    if let Some(hop_limit) = args.hop_limit {
        routing.hop_limit = hop_limit;
    }
    validate_routing(&routing)?;

    let Some(design) = load_design(&project, global)? else {
        return Ok(1);
    };

    let die_count = design.topology.die_count();
    for die in [args.source, args.target] {
        if die as usize >= die_count {
            return Err(format!("die D{die} does not exist (design has {die_count} dies)").into());
        }
    }
    let (source, target) = (DieId::from_raw(args.source), DieId::from_raw(args.target));

    let mut enumerator = PathEnumerator::from_config(&routing);
    let found = enumerator.find_paths(&design.topology, source, target, routing.hop_limit);

    if found.is_empty() {
        if !global.quiet {
            eprintln!("   No candidate sequences from D{source} to D{target}");
        }
        return Ok(0);
    }
    for (i, seq) in found.iter().enumerate() {
        let marker = if seq.reaches(target) { "" } else { "  (dead end)" };
        println!("{:>4}. {seq}{marker}", i + 1);
    }
    if !global.quiet {
        eprintln!(
            "   {} sequence(s), hop limit {}, budget {}",
            found.len(),
            routing.hop_limit,
            routing.exploration_budget
        );
    }
    Ok(0)
}
