//! Allocation records and run results.
//!
//! An [`Allocation`] is created once per routed endpoint pair and never
//! mutated. The [`AllocationResult`] collects every allocation in commit
//! order together with the final usage matrix, the capacity matrix, the
//! per-run [`RunStatistics`] and the options that produced them. It is the
//! data the CLI reports from, and it serializes directly to the JSON report.

use crate::registry::DieRegistry;
use crate::sequence::DieSequence;
use dieroute_common::{DieId, EndpointId, EndpointKind, SquareMatrix};
use dieroute_config::RoutingConfig;
use serde::{Deserialize, Serialize};

/// A committed route from one source endpoint to one relay endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    /// The source endpoint the connection starts at.
    pub source: EndpointId,
    /// The relay endpoint the connection is meant to reach.
    pub relay: EndpointId,
    /// The die sequence the route traverses.
    pub dies: DieSequence,
    /// One repeater per intermediate die, in sequence order.
    pub repeaters: Vec<EndpointId>,
}

impl Allocation {
    /// Returns `true` if the route stops short of the relay endpoint's die.
    ///
    /// This only happens for sequences kept under
    /// [`DeadEndPolicy::Keep`](dieroute_config::DeadEndPolicy::Keep).
    pub fn is_dead_end(&self, registry: &DieRegistry) -> bool {
        registry
            .die_of(self.relay, EndpointKind::Relay)
            .is_some_and(|target| !self.dies.reaches(target))
    }

    /// Iterates over `(die, repeater)` for every intermediate die.
    pub fn hops(&self) -> impl Iterator<Item = (DieId, EndpointId)> + '_ {
        self.dies
            .intermediates()
            .iter()
            .copied()
            .zip(self.repeaters.iter().copied())
    }
}

/// Result of attempting one (source, relay) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairOutcome {
    /// A route was committed and recorded.
    Routed,
    /// Both endpoints sit on the same die; nothing needs to be routed.
    SameDie,
    /// One of the endpoints is not on any die.
    Unresolved,
    /// No candidate sequence had capacity and repeaters available.
    Unroutable,
}

impl PairOutcome {
    /// Returns `true` for outcomes that count as a successful allocation.
    pub fn is_success(self) -> bool {
        matches!(self, Self::Routed | Self::SameDie)
    }
}

/// Counters for one allocation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStatistics {
    /// Pairs attempted.
    pub attempted: u64,
    /// Pairs counted as successful, same-die pairs included.
    pub routed: u64,
    /// Successful pairs that needed no route.
    pub same_die: u64,
    /// Pairs with an endpoint on no die.
    pub unresolved: u64,
    /// Pairs for which no route could be committed.
    pub unroutable: u64,
    /// Recorded allocations whose sequence stops short of the target die.
    pub dead_end_routes: u64,
}

impl RunStatistics {
    /// Tallies one outcome.
    pub fn record(&mut self, outcome: PairOutcome) {
        self.attempted += 1;
        match outcome {
            PairOutcome::Routed => self.routed += 1,
            PairOutcome::SameDie => {
                self.routed += 1;
                self.same_die += 1;
            }
            PairOutcome::Unresolved => self.unresolved += 1,
            PairOutcome::Unroutable => self.unroutable += 1,
        }
    }

    /// Returns the number of failed pairs.
    pub fn failed(&self) -> u64 {
        self.attempted - self.routed
    }

    /// Returns the successful share of attempted pairs as a percentage.
    pub fn success_rate(&self) -> f64 {
        percent(self.routed, self.attempted)
    }
}

/// Usage of one directed edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkUsage {
    /// Edge origin.
    pub from: DieId,
    /// Edge destination.
    pub to: DieId,
    /// Committed hops.
    pub used: u32,
    /// Edge capacity.
    pub capacity: u32,
}

impl LinkUsage {
    /// Returns `used / capacity` as a percentage.
    pub fn utilization(&self) -> f64 {
        percent(u64::from(self.used), u64::from(self.capacity))
    }
}

/// Everything an allocation run produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationResult {
    /// Allocations in commit order.
    pub allocations: Vec<Allocation>,
    /// Final per-edge usage.
    pub usage: SquareMatrix<u32>,
    /// Per-edge capacity.
    pub capacity: SquareMatrix<u32>,
    /// Run counters.
    pub statistics: RunStatistics,
    /// The options the run used.
    pub options: RoutingConfig,
}

impl AllocationResult {
    /// Returns usage rows for every edge `i != j` with non-zero capacity.
    pub fn link_usage(&self) -> Vec<LinkUsage> {
        collect_link_usage(&self.capacity, &self.usage)
    }

    /// Returns the sum of committed hops over all edges.
    pub fn total_used(&self) -> u64 {
        self.link_usage().iter().map(|l| u64::from(l.used)).sum()
    }

    /// Returns the sum of capacity over all edges.
    pub fn total_capacity(&self) -> u64 {
        self.link_usage().iter().map(|l| u64::from(l.capacity)).sum()
    }

    /// Returns overall edge utilization as a percentage.
    pub fn utilization(&self) -> f64 {
        percent(self.total_used(), self.total_capacity())
    }
}

/// Pairs capacity with usage for every real edge, in row-major order.
pub(crate) fn collect_link_usage(
    capacity: &SquareMatrix<u32>,
    usage: &SquareMatrix<u32>,
) -> Vec<LinkUsage> {
    let mut links = Vec::new();
    for (i, row) in capacity.rows().enumerate() {
        for (j, &cap) in row.iter().enumerate() {
            if i != j && cap > 0 {
                links.push(LinkUsage {
                    from: DieId::from_index(i),
                    to: DieId::from_index(j),
                    used: usage.get(i, j),
                    capacity: cap,
                });
            }
        }
    }
    links
}

/// `part / whole` as a percentage, zero when `whole` is zero.
pub(crate) fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Die;

    fn ep(raw: u32) -> EndpointId {
        EndpointId::from_raw(raw)
    }

    #[test]
    fn statistics_tally_outcomes() {
        let mut stats = RunStatistics::default();
        for outcome in [
            PairOutcome::Routed,
            PairOutcome::SameDie,
            PairOutcome::Unresolved,
            PairOutcome::Unroutable,
            PairOutcome::Routed,
        ] {
            stats.record(outcome);
        }
        assert_eq!(stats.attempted, 5);
        assert_eq!(stats.routed, 3);
        assert_eq!(stats.same_die, 1);
        assert_eq!(stats.unresolved, 1);
        assert_eq!(stats.unroutable, 1);
        assert_eq!(stats.failed(), 2);
        assert!((stats.success_rate() - 60.0).abs() < 1e-9);
    }

    #[test]
    fn empty_statistics_rate_is_zero() {
        assert_eq!(RunStatistics::default().success_rate(), 0.0);
    }

    #[test]
    fn outcome_success() {
        assert!(PairOutcome::Routed.is_success());
        assert!(PairOutcome::SameDie.is_success());
        assert!(!PairOutcome::Unresolved.is_success());
        assert!(!PairOutcome::Unroutable.is_success());
    }

    #[test]
    fn link_usage_skips_missing_edges_and_diagonal() {
        let capacity = SquareMatrix::from_rows(vec![vec![3, 2], vec![0, 0]]).unwrap();
        let mut usage = SquareMatrix::filled(2, 0);
        *usage.get_mut(0, 1) = 1;
        let links = collect_link_usage(&capacity, &usage);
        assert_eq!(
            links,
            vec![LinkUsage {
                from: DieId::from_raw(0),
                to: DieId::from_raw(1),
                used: 1,
                capacity: 2,
            }]
        );
        assert!((links[0].utilization() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn dead_end_detection() {
        let registry = DieRegistry::new(vec![
            Die::new([1], []),
            Die::new([], [10]),
            Die::new([], [20]),
            Die::new([], [30]),
        ]);
        let arrived = Allocation {
            source: ep(1),
            relay: ep(30),
            dies: DieSequence::from_raw([0, 1, 2, 3]),
            repeaters: vec![ep(10), ep(20)],
        };
        let short = Allocation {
            source: ep(1),
            relay: ep(30),
            dies: DieSequence::from_raw([0, 1, 2]),
            repeaters: vec![ep(10)],
        };
        assert!(!arrived.is_dead_end(&registry));
        assert!(short.is_dead_end(&registry));
        let hops: Vec<_> = arrived.hops().map(|(d, r)| (d.as_raw(), r.as_raw())).collect();
        assert_eq!(hops, vec![(1, 10), (2, 20)]);
    }

    #[test]
    fn result_totals() {
        let capacity = SquareMatrix::from_rows(vec![vec![0, 4], vec![4, 0]]).unwrap();
        let usage = SquareMatrix::from_rows(vec![vec![0, 2], vec![0, 0]]).unwrap();
        let result = AllocationResult {
            allocations: Vec::new(),
            usage,
            capacity,
            statistics: RunStatistics::default(),
            options: RoutingConfig::default(),
        };
        assert_eq!(result.total_used(), 2);
        assert_eq!(result.total_capacity(), 8);
        assert!((result.utilization() - 25.0).abs() < 1e-9);
    }
}
