//! Report writers for `dieroute run`.
//!
//! The text report lists the committed routes and the per-link usage; the
//! JSON report is the serialized [`AllocationResult`]. Run statistics go to
//! stderr separately.

use std::io::{self, Write};
use std::time::Duration;

use dieroute_route::{Allocation, AllocationResult, DieRegistry};

use crate::ReportFormat;

/// Writes the report file contents in the requested format.
pub fn write_report(
    out: &mut impl Write,
    format: ReportFormat,
    result: &AllocationResult,
    registry: &DieRegistry,
    max_listed: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        ReportFormat::Text => write_text_report(out, result, registry, max_listed)?,
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, result)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Writes the human-readable route listing.
///
/// At most `max_listed` routes are listed individually.
pub fn write_text_report(
    out: &mut impl Write,
    result: &AllocationResult,
    registry: &DieRegistry,
    max_listed: usize,
) -> io::Result<()> {
    writeln!(out, "=== Path allocation results ===")?;
    writeln!(out, "Total routes: {}", result.allocations.len())?;
    writeln!(out)?;

    for allocation in result.allocations.iter().take(max_listed) {
        let marker = if allocation.is_dead_end(registry) {
            "  [dead end]"
        } else {
            ""
        };
        writeln!(out, "{}{marker}", format_route(allocation))?;
    }
    if result.allocations.len() > max_listed {
        writeln!(
            out,
            "... {} more routes not listed",
            result.allocations.len() - max_listed
        )?;
    }

    writeln!(out)?;
    writeln!(out, "=== Die link usage ===")?;
    for link in result.link_usage().iter().filter(|l| l.used > 0) {
        writeln!(out, "D{} -> D{}: {}", link.from, link.to, link.used)?;
    }
    Ok(())
}

/// Formats one route as `s<src> -> l<dst>: D0 -> D1(l<rep>) -> D2`.
pub fn format_route(allocation: &Allocation) -> String {
    let dies = allocation.dies.as_slice();
    let mut line = format!("s{} -> l{}: ", allocation.source, allocation.relay);
    for (i, die) in dies.iter().enumerate() {
        if i > 0 {
            line.push_str(" -> ");
        }
        line.push_str(&format!("D{die}"));
        if i > 0 && i + 1 < dies.len() {
            if let Some(repeater) = allocation.repeaters.get(i - 1) {
                line.push_str(&format!("(l{repeater})"));
            }
        }
    }
    line
}

/// Writes the run statistics block.
pub fn write_statistics(
    out: &mut impl Write,
    result: &AllocationResult,
    registry: &DieRegistry,
    elapsed: Duration,
) -> io::Result<()> {
    writeln!(out, "=== Statistics ===")?;
    for (id, die) in registry.iter() {
        writeln!(
            out,
            "D{id}: {} source(s), {} relay(s)",
            die.sources.len(),
            die.relays.len()
        )?;
    }

    writeln!(out, "Link utilization:")?;
    for link in result.link_usage() {
        writeln!(
            out,
            "  D{}->D{}: {}/{} ({:.1}%)",
            link.from,
            link.to,
            link.used,
            link.capacity,
            link.utilization()
        )?;
    }
    writeln!(
        out,
        "Overall utilization: {}/{} ({:.1}%)",
        result.total_used(),
        result.total_capacity(),
        result.utilization()
    )?;

    let stats = &result.statistics;
    writeln!(
        out,
        "successful allocation: {}/{} ({:.2}%)",
        stats.routed,
        stats.attempted,
        stats.success_rate()
    )?;
    writeln!(
        out,
        "  same-die: {}, unresolved: {}, unroutable: {}, dead-end routes: {}",
        stats.same_die, stats.unresolved, stats.unroutable, stats.dead_end_routes
    )?;
    writeln!(out, "Time cost: {:.3}s", elapsed.as_secs_f64())?;
    Ok(())
}
