//! `dieroute run`: full allocation pipeline.
//!
//! 1. Load the project and apply command-line overrides
//! 2. Load and cross-check the input files
//! 3. Allocate every cross-die endpoint pair
//! 4. Write the report file and print statistics

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use dieroute_config::{validate_routing, DeadEndPolicy, RelayPolicy, RoutingConfig};
use tracing::info;

use crate::pipeline::{load_design, load_project};
use crate::report::{write_report, write_statistics};
use crate::{DeadEndArg, GlobalArgs, RelayReuseArg, ReportFormat, RunArgs};

/// Runs the `dieroute run` command.
///
/// Returns exit code 0 once the report is written, 1 if the inputs have errors.
pub fn run(args: &RunArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let project = load_project(global)?;
    let routing = apply_overrides(project.config.routing.clone(), args);
    validate_routing(&routing)?;

    let format = args.format.unwrap_or(match project.config.report.format {
        dieroute_config::ReportFormat::Text => ReportFormat::Text,
        dieroute_config::ReportFormat::Json => ReportFormat::Json,
    });
    let output = args
        .output
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| project.paths.output.clone());

    if !global.quiet {
        eprintln!("   Routing {}", project.config.project.name);
        eprintln!(
            "   Options hop limit {}, budget {}, dead ends {:?}, relay reuse {:?}",
            routing.hop_limit, routing.exploration_budget, routing.dead_ends, routing.relay_reuse
        );
    }

    let Some(design) = load_design(&project, global)? else {
        return Ok(1);
    };

    let start = Instant::now();
    let result = dieroute_route::allocate(&design.registry, &design.topology, &routing)?;
    let elapsed = start.elapsed();
    info!(
        routes = result.allocations.len(),
        elapsed_ms = elapsed.as_millis() as u64,
        "allocation complete"
    );

    let mut file = BufWriter::new(File::create(&output)?);
    write_report(
        &mut file,
        format,
        &result,
        &design.registry,
        project.config.report.max_listed,
    )?;
    file.flush()?;

    if !global.quiet {
        let stderr = std::io::stderr();
        write_statistics(&mut stderr.lock(), &result, &design.registry, elapsed)?;
        if global.verbose {
            eprintln!(
                "   {} route(s) recorded, {} edge(s) saturated",
                result.allocations.len(),
                result
                    .link_usage()
                    .iter()
                    .filter(|l| l.used >= l.capacity)
                    .count()
            );
        }
        eprintln!("   Wrote {}", output.display());
    }

    Ok(0)
}

/// Applies command-line overrides on top of the configured routing options.
fn apply_overrides(mut routing: RoutingConfig, args: &RunArgs) -> RoutingConfig {
    if let Some(hop_limit) = args.hop_limit {
        routing.hop_limit = hop_limit;
    }
    if let Some(budget) = args.budget {
        routing.exploration_budget = budget;
    }
    if let Some(dead_ends) = args.dead_ends {
        routing.dead_ends = match dead_ends {
            DeadEndArg::Keep => DeadEndPolicy::Keep,
            DeadEndArg::Discard => DeadEndPolicy::Discard,
        };
    }
    if let Some(relay_reuse) = args.relay_reuse {
        routing.relay_reuse = match relay_reuse {
            RelayReuseArg::Local => RelayPolicy::Local,
            RelayReuseArg::Exclusive => RelayPolicy::Exclusive,
        };
    }
    routing
}
