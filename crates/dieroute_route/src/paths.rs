//! Bounded breadth-first enumeration of candidate die sequences.
//!
//! For a (source die, target die, hop limit) triple, the enumerator expands
//! sequences breadth-first from `[source]`. A sequence stops growing when it
//! reaches the target or the hop limit; it is then collected as a candidate
//! (subject to the [`DeadEndPolicy`]). Expansion follows edges with non-zero
//! capacity and never revisits a die. Collection stops after
//! `exploration_budget` candidates, which bounds the cost on dense graphs.
//!
//! Results are sorted shortest first and memoized per [`PathKey`]; the many
//! endpoint pairs that share a die pair reuse one search.

use crate::sequence::DieSequence;
use crate::topology::Topology;
use dieroute_common::DieId;
use dieroute_config::{DeadEndPolicy, RoutingConfig};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tracing::trace;

/// Cache key for one enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathKey {
    /// Die the sequences start at.
    pub source: DieId,
    /// Die the sequences are meant to end at.
    pub target: DieId,
    /// Maximum sequence length, both ends included.
    pub hop_limit: usize,
}

/// Memoizing candidate path enumerator.
///
/// The cache assumes one topology per enumerator; use a fresh enumerator for
/// a different graph.
#[derive(Debug, Clone)]
pub struct PathEnumerator {
    exploration_budget: usize,
    dead_ends: DeadEndPolicy,
    cache: HashMap<PathKey, Arc<[DieSequence]>>,
    searches: u64,
    cache_hits: u64,
}

impl PathEnumerator {
    /// Creates an enumerator with the given budget and dead-end policy.
    pub fn new(exploration_budget: usize, dead_ends: DeadEndPolicy) -> Self {
        Self {
            exploration_budget,
            dead_ends,
            cache: HashMap::new(),
            searches: 0,
            cache_hits: 0,
        }
    }

    /// Creates an enumerator from routing options.
    pub fn from_config(routing: &RoutingConfig) -> Self {
        Self::new(routing.exploration_budget, routing.dead_ends)
    }

    /// Returns the candidate sequences from `source` to `target`, shortest first.
    ///
    /// Repeated calls with the same arguments return the same cached list.
    /// An empty list means no candidate exists within the limits.
    pub fn find_paths(
        &mut self,
        topology: &Topology,
        source: DieId,
        target: DieId,
        hop_limit: usize,
    ) -> Arc<[DieSequence]> {
        let key = PathKey {
            source,
            target,
            hop_limit,
        };
        if let Some(found) = self.cache.get(&key) {
            self.cache_hits += 1;
            return Arc::clone(found);
        }

        self.searches += 1;
        let found: Arc<[DieSequence]> = self.enumerate(topology, key).into();
        trace!(
            source = %source,
            target = %target,
            hop_limit,
            candidates = found.len(),
            "enumerated die sequences"
        );
        self.cache.insert(key, Arc::clone(&found));
        found
    }

    /// Returns the cached result for `key` without searching.
    pub fn cached(&self, key: &PathKey) -> Option<&Arc<[DieSequence]>> {
        self.cache.get(key)
    }

    /// Returns the number of distinct keys searched so far.
    pub fn searches(&self) -> u64 {
        self.searches
    }

    /// Returns the number of lookups answered from the cache.
    pub fn cache_hits(&self) -> u64 {
        self.cache_hits
    }

    fn enumerate(&self, topology: &Topology, key: PathKey) -> Vec<DieSequence> {
        let mut found = Vec::new();
        let mut queue = VecDeque::from([DieSequence::start(key.source)]);

        while found.len() < self.exploration_budget {
            let Some(current) = queue.pop_front() else {
                break;
            };
            let last = current.last();
            let arrived = last == key.target;

            if arrived || current.len() >= key.hop_limit {
                if arrived || self.dead_ends == DeadEndPolicy::Keep {
                    found.push(current);
                }
                continue;
            }

            for next in topology.successors(last) {
                if !current.contains(next) {
                    queue.push_back(current.extended(next));
                }
            }
        }

        // Stable: equal lengths keep discovery order.
        found.sort_by_key(DieSequence::len);
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(raw: u32) -> DieId {
        DieId::from_raw(raw)
    }

    fn seqs(found: &[DieSequence]) -> Vec<Vec<u32>> {
        found
            .iter()
            .map(|s| s.as_slice().iter().map(|d| d.as_raw()).collect())
            .collect()
    }

    /// Complete digraph on `n` dies, every edge capacity 1.
    fn complete(n: usize) -> Topology {
        let rows = (0..n)
            .map(|i| (0..n).map(|j| u32::from(i != j)).collect())
            .collect();
        Topology::from_rows(rows).unwrap()
    }

    fn keep(budget: usize) -> PathEnumerator {
        PathEnumerator::new(budget, DeadEndPolicy::Keep)
    }

    #[test]
    fn direct_edge_found_first() {
        let topo = complete(3);
        let found = keep(1000).find_paths(&topo, d(0), d(2), 4);
        assert_eq!(found[0].as_slice(), &[d(0), d(2)]);
        assert!(found.windows(2).all(|w| w[0].len() <= w[1].len()));
    }

    #[test]
    fn line_topology_single_path() {
        let topo = Topology::from_rows(vec![vec![0, 1, 0], vec![0, 0, 1], vec![0, 0, 0]]).unwrap();
        let found = keep(1000).find_paths(&topo, d(0), d(2), 4);
        assert_eq!(seqs(&found), vec![vec![0, 1, 2]]);
    }

    #[test]
    fn no_edges_yields_nothing() {
        let topo = Topology::from_rows(vec![vec![0, 0], vec![0, 0]]).unwrap();
        let found = keep(1000).find_paths(&topo, d(0), d(1), 4);
        assert!(found.is_empty());
    }

    #[test]
    fn arrivals_are_not_expanded() {
        // [0, 1] arrives and is not extended to [0, 1, 2].
        let topo = complete(3);
        let mut paths = PathEnumerator::new(1000, DeadEndPolicy::Discard);
        let found = paths.find_paths(&topo, d(0), d(1), 4);
        assert_eq!(seqs(&found), vec![vec![0, 1], vec![0, 2, 1]]);
    }

    #[test]
    fn dead_ends_kept_under_keep_policy() {
        // 0 -> 1 -> 2 -> 3, hop limit 3: [0,1,2] stops at the limit short of 3.
        let topo = Topology::from_rows(vec![
            vec![0, 1, 0, 0],
            vec![0, 0, 1, 0],
            vec![0, 0, 0, 1],
            vec![0, 0, 0, 0],
        ])
        .unwrap();
        let found = keep(1000).find_paths(&topo, d(0), d(3), 3);
        assert_eq!(seqs(&found), vec![vec![0, 1, 2]]);
        assert!(!found[0].reaches(d(3)));
    }

    #[test]
    fn dead_ends_dropped_under_discard_policy() {
        let topo = Topology::from_rows(vec![
            vec![0, 1, 0, 0],
            vec![0, 0, 1, 0],
            vec![0, 0, 0, 1],
            vec![0, 0, 0, 0],
        ])
        .unwrap();
        let mut paths = PathEnumerator::new(1000, DeadEndPolicy::Discard);
        assert!(paths.find_paths(&topo, d(0), d(3), 3).is_empty());
        assert_eq!(paths.find_paths(&topo, d(0), d(3), 4).len(), 1);
    }

    #[test]
    fn dead_end_branch_without_successors_is_not_collected() {
        // 0 -> 1 (sink), 0 -> 2 (target). [0,1] has nowhere to go and is below
        // the limit, so it simply dies out.
        let topo = Topology::from_rows(vec![vec![0, 1, 1], vec![0, 0, 0], vec![0, 0, 0]]).unwrap();
        let found = keep(1000).find_paths(&topo, d(0), d(2), 4);
        assert_eq!(seqs(&found), vec![vec![0, 2]]);
    }

    #[test]
    fn sequences_are_simple_and_bounded() {
        let topo = complete(6);
        for limit in 2..=5 {
            let found = keep(1000).find_paths(&topo, d(0), d(5), limit);
            assert!(!found.is_empty());
            for seq in found.iter() {
                assert!(seq.is_simple(), "{seq} repeats a die");
                assert!(seq.len() <= limit, "{seq} exceeds limit {limit}");
                assert_eq!(seq.source(), d(0));
            }
        }
    }

    #[test]
    fn budget_caps_collection() {
        let topo = complete(8);
        let found = keep(10).find_paths(&topo, d(0), d(7), 5);
        assert_eq!(found.len(), 10);
        let unbounded = keep(100_000).find_paths(&topo, d(0), d(7), 5);
        assert!(unbounded.len() > 10);
        // The capped result is the prefix BFS would have produced anyway.
        assert_eq!(&unbounded[..10], &found[..]);
    }

    #[test]
    fn results_are_cached() {
        let topo = complete(4);
        let mut paths = keep(1000);
        let first = paths.find_paths(&topo, d(0), d(3), 4);
        let second = paths.find_paths(&topo, d(0), d(3), 4);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(paths.searches(), 1);
        assert_eq!(paths.cache_hits(), 1);
    }

    #[test]
    fn hop_limit_is_part_of_the_key() {
        let topo = complete(4);
        let mut paths = keep(1000);
        let short = paths.find_paths(&topo, d(0), d(3), 2);
        let long = paths.find_paths(&topo, d(0), d(3), 4);
        assert_eq!(paths.searches(), 2);
        assert!(short.len() < long.len());
        let key = PathKey {
            source: d(0),
            target: d(3),
            hop_limit: 2,
        };
        assert!(paths.cached(&key).is_some());
    }

    #[test]
    fn deterministic_across_enumerators() {
        let topo = complete(5);
        let a = keep(1000).find_paths(&topo, d(1), d(3), 4);
        let b = keep(1000).find_paths(&topo, d(1), d(3), 4);
        assert_eq!(&a[..], &b[..]);
    }

    #[test]
    fn source_equal_to_target_is_trivial() {
        let topo = complete(3);
        let found = keep(1000).find_paths(&topo, d(1), d(1), 4);
        assert_eq!(seqs(&found), vec![vec![1]]);
    }
}
