//! Dies and the endpoint-to-die registry.
//!
//! A [`Die`] keeps its source and relay endpoints in declared order, which
//! drives both the allocation loop order and repeater preference. The
//! [`DieRegistry`] owns the die list and a global index per endpoint kind so
//! that endpoint lookups are O(1) regardless of die count.

use dieroute_common::{DieId, EndpointId, EndpointKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One physical die: its source and relay endpoints in declared order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Die {
    /// Source endpoints (connection origins).
    pub sources: Vec<EndpointId>,
    /// Relay endpoints (connection targets and repeater candidates).
    pub relays: Vec<EndpointId>,
}

impl Die {
    /// Creates a die from raw endpoint numbers.
    pub fn new(
        sources: impl IntoIterator<Item = u32>,
        relays: impl IntoIterator<Item = u32>,
    ) -> Self {
        Self {
            sources: sources.into_iter().map(EndpointId::from_raw).collect(),
            relays: relays.into_iter().map(EndpointId::from_raw).collect(),
        }
    }

    /// Returns the endpoints of the given kind, in declared order.
    pub fn endpoints(&self, kind: EndpointKind) -> &[EndpointId] {
        match kind {
            EndpointKind::Source => &self.sources,
            EndpointKind::Relay => &self.relays,
        }
    }
}

/// The ordered die list with endpoint lookup.
#[derive(Debug, Clone, Default)]
pub struct DieRegistry {
    dies: Vec<Die>,
    source_index: HashMap<EndpointId, DieId>,
    relay_index: HashMap<EndpointId, DieId>,
}

impl DieRegistry {
    /// Builds the registry and its lookup indices.
    ///
    /// If an endpoint is listed on several dies, the lowest die index wins.
    pub fn new(dies: Vec<Die>) -> Self {
        let mut source_index = HashMap::new();
        let mut relay_index = HashMap::new();
        for (i, die) in dies.iter().enumerate() {
            let id = DieId::from_index(i);
            for &s in &die.sources {
                source_index.entry(s).or_insert(id);
            }
            for &l in &die.relays {
                relay_index.entry(l).or_insert(id);
            }
        }
        Self {
            dies,
            source_index,
            relay_index,
        }
    }

    /// Returns the die holding `endpoint` as the given kind, if any.
    pub fn die_of(&self, endpoint: EndpointId, kind: EndpointKind) -> Option<DieId> {
        let index = match kind {
            EndpointKind::Source => &self.source_index,
            EndpointKind::Relay => &self.relay_index,
        };
        index.get(&endpoint).copied()
    }

    /// Returns the die with the given ID.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a die of this registry.
    pub fn die(&self, id: DieId) -> &Die {
        &self.dies[id.index()]
    }

    /// Returns all dies in index order.
    pub fn dies(&self) -> &[Die] {
        &self.dies
    }

    /// Iterates over `(DieId, &Die)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (DieId, &Die)> {
        self.dies
            .iter()
            .enumerate()
            .map(|(i, die)| (DieId::from_index(i), die))
    }

    /// Returns the number of dies.
    pub fn die_count(&self) -> usize {
        self.dies.len()
    }

    /// Returns the number of (source, relay) pairs on distinct dies.
    ///
    /// This is the number of pairs a full allocation run attempts.
    pub fn cross_die_pairs(&self) -> u64 {
        let total_relays: u64 = self.dies.iter().map(|d| d.relays.len() as u64).sum();
        self.dies
            .iter()
            .map(|d| d.sources.len() as u64 * (total_relays - d.relays.len() as u64))
            .sum()
    }
}
