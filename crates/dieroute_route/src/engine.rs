//! The greedy allocation engine.
//!
//! The [`Allocator`] owns the capacity ledger, the path cache and the relay
//! selector for one run, and attempts (source, relay) pairs one at a time.
//! For each pair it walks the cached candidate sequences shortest first and
//! commits the first one that has capacity on every edge and a repeater on
//! every intermediate die. Nothing is ever released or rerouted.

use crate::data::{Allocation, AllocationResult, PairOutcome, RunStatistics};
use crate::error::RouteError;
use crate::ledger::CapacityLedger;
use crate::paths::PathEnumerator;
use crate::registry::DieRegistry;
use crate::relay::RelaySelector;
use crate::topology::Topology;
use dieroute_common::{EndpointId, EndpointKind};
use dieroute_config::RoutingConfig;
use tracing::{debug, info};

/// Allocation state for one run over a fixed registry and topology.
#[derive(Debug)]
pub struct Allocator<'a> {
    registry: &'a DieRegistry,
    topology: &'a Topology,
    options: RoutingConfig,
    paths: PathEnumerator,
    ledger: CapacityLedger,
    relays: RelaySelector,
    allocations: Vec<Allocation>,
    stats: RunStatistics,
}

impl<'a> Allocator<'a> {
    /// Creates an allocator with an empty ledger.
    ///
    /// Fails if the registry and the topology disagree on the die count.
    pub fn new(
        registry: &'a DieRegistry,
        topology: &'a Topology,
        options: RoutingConfig,
    ) -> Result<Self, RouteError> {
        if registry.die_count() != topology.die_count() {
            return Err(RouteError::DimensionMismatch {
                dies: registry.die_count(),
                matrix: topology.die_count(),
            });
        }
        Ok(Self {
            registry,
            topology,
            paths: PathEnumerator::from_config(&options),
            ledger: CapacityLedger::new(topology),
            relays: RelaySelector::new(options.relay_reuse),
            options,
            allocations: Vec::new(),
            stats: RunStatistics::default(),
        })
    }

    /// Attempts to route one source endpoint to one relay endpoint.
    ///
    /// On [`PairOutcome::Routed`] the route is committed to the ledger and
    /// recorded. Any other outcome leaves all state unchanged, apart from
    /// the path cache. The outcome is not added to the run statistics.
    pub fn allocate_single(&mut self, source: EndpointId, relay: EndpointId) -> PairOutcome {
        let (Some(source_die), Some(target_die)) = (
            self.registry.die_of(source, EndpointKind::Source),
            self.registry.die_of(relay, EndpointKind::Relay),
        ) else {
            return PairOutcome::Unresolved;
        };
        if source_die == target_die {
            return PairOutcome::SameDie;
        }

        let candidates =
            self.paths
                .find_paths(self.topology, source_die, target_die, self.options.hop_limit);

        for seq in candidates.iter() {
            if seq.len() < 2 || !self.ledger.is_available(seq) {
                continue;
            }
            let Some(repeaters) = self.relays.select_for_path(self.registry, seq) else {
                continue;
            };
            // Availability was checked above, so this cannot be rejected.
            if self.ledger.commit(seq).is_err() {
                continue;
            }
            self.relays.reserve(&repeaters);
            self.allocations.push(Allocation {
                source,
                relay,
                dies: seq.clone(),
                repeaters,
            });
            return PairOutcome::Routed;
        }
        PairOutcome::Unroutable
    }

    /// Attempts every (source, relay) pair on distinct dies and tallies the
    /// outcomes.
    ///
    /// Pairs are visited by source die ascending, then target die ascending,
    /// then source endpoints and relay endpoints in declared order. The
    /// allocation is greedy: an earlier pair can take the capacity or the
    /// repeater a later pair needed, so results depend on this order.
    pub fn allocate_all(&mut self) -> &RunStatistics {
        let registry = self.registry;
        for (source_die, src) in registry.iter() {
            for (target_die, dst) in registry.iter() {
                if source_die == target_die {
                    continue;
                }
                let before = self.stats.clone();
                for &source in &src.sources {
                    for &relay in &dst.relays {
                        let outcome = self.allocate_single(source, relay);
                        self.stats.record(outcome);
                        if outcome == PairOutcome::Routed
                            && self
                                .allocations
                                .last()
                                .is_some_and(|a| a.is_dead_end(registry))
                        {
                            self.stats.dead_end_routes += 1;
                        }
                    }
                }
                debug!(
                    source = %source_die,
                    target = %target_die,
                    attempted = self.stats.attempted - before.attempted,
                    routed = self.stats.routed - before.routed,
                    "die pair allocated"
                );
            }
        }

        info!(
            attempted = self.stats.attempted,
            routed = self.stats.routed,
            allocations = self.allocations.len(),
            unroutable = self.stats.unroutable,
            unresolved = self.stats.unresolved,
            path_searches = self.paths.searches(),
            "allocation finished"
        );
        &self.stats
    }

    /// Returns the allocations committed so far, in commit order.
    pub fn allocations(&self) -> &[Allocation] {
        &self.allocations
    }

    /// Returns the run counters accumulated by [`allocate_all`](Self::allocate_all).
    pub fn statistics(&self) -> &RunStatistics {
        &self.stats
    }

    /// Returns the capacity ledger.
    pub fn ledger(&self) -> &CapacityLedger {
        &self.ledger
    }

    /// Returns the path enumerator and its cache.
    pub fn paths(&self) -> &PathEnumerator {
        &self.paths
    }

    /// Returns the options in effect.
    pub fn options(&self) -> &RoutingConfig {
        &self.options
    }

    /// Consumes the allocator, returning the run result.
    pub fn finish(self) -> AllocationResult {
        let (capacity, usage) = self.ledger.into_parts();
        AllocationResult {
            allocations: self.allocations,
            usage,
            capacity,
            statistics: self.stats,
            options: self.options,
        }
    }
}
