//! Die-to-die route allocation.
//!
//! Given dies holding source and relay endpoints, and a directed graph of
//! capacity-limited links between dies, this crate routes every source
//! endpoint to every relay endpoint on another die:
//!
//! 1. **Path enumeration** ([`PathEnumerator`]): bounded BFS over the die
//!    graph producing simple candidate sequences, shortest first, cached per
//!    [`PathKey`].
//! 2. **Capacity accounting** ([`CapacityLedger`]): per-edge usage that
//!    never exceeds capacity and never decreases.
//! 3. **Repeater selection** ([`RelaySelector`]): one relay endpoint per
//!    intermediate die.
//! 4. **Greedy allocation** ([`Allocator`]): first feasible candidate wins,
//!    in a fixed pair order, with no backtracking.
//!
//! [`allocate`] runs the whole pipeline and returns an [`AllocationResult`].

#![warn(missing_docs)]

pub mod data;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod paths;
pub mod registry;
pub mod relay;
pub mod sequence;
pub mod topology;

pub use data::{Allocation, AllocationResult, LinkUsage, PairOutcome, RunStatistics};
pub use dieroute_config::{DeadEndPolicy, RelayPolicy, RoutingConfig};
pub use engine::Allocator;
pub use error::{LedgerError, RouteError};
pub use ledger::CapacityLedger;
pub use paths::{PathEnumerator, PathKey};
pub use registry::{Die, DieRegistry};
pub use relay::RelaySelector;
pub use sequence::DieSequence;
pub use topology::Topology;

/// Routes every cross-die (source, relay) pair and returns the result.
///
/// Fails only if `registry` and `topology` disagree on the number of dies.
pub fn allocate(
    registry: &DieRegistry,
    topology: &Topology,
    options: &RoutingConfig,
) -> Result<AllocationResult, RouteError> {
    let mut allocator = Allocator::new(registry, topology, options.clone())?;
    allocator.allocate_all();
    Ok(allocator.finish())
}
