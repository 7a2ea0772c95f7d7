//! Per-edge capacity accounting.
//!
//! The ledger counts how many committed routes traverse each directed die
//! edge. Usage only grows: there is no release, and a commit that would push
//! any edge past its capacity is rejected before anything is touched, so
//! `usage[i][j] <= capacity[i][j]` holds at every observable point.

use crate::data::{collect_link_usage, LinkUsage};
use crate::error::LedgerError;
use crate::sequence::DieSequence;
use crate::topology::Topology;
use dieroute_common::{DieId, SquareMatrix};

/// Tracks committed usage against the fixed edge capacities.
#[derive(Debug, Clone)]
pub struct CapacityLedger {
    /// Edge capacities, copied from the topology.
    capacity: SquareMatrix<u32>,
    /// Committed hops per edge.
    usage: SquareMatrix<u32>,
}

impl CapacityLedger {
    /// Creates an empty ledger for the given topology.
    pub fn new(topology: &Topology) -> Self {
        let capacity = topology.capacity().clone();
        let usage = SquareMatrix::filled(capacity.size(), 0);
        Self { capacity, usage }
    }

    /// Returns whether every edge of `seq` has spare capacity.
    pub fn is_available(&self, seq: &DieSequence) -> bool {
        self.first_saturated(seq).is_none()
    }

    /// Adds one unit of usage to every edge of `seq`.
    ///
    /// Fails without modifying anything if any edge is already at capacity.
    pub fn commit(&mut self, seq: &DieSequence) -> Result<(), LedgerError> {
        if let Some((from, to)) = self.first_saturated(seq) {
            return Err(LedgerError::Saturated {
                from,
                to,
                capacity: self.capacity.get(from.index(), to.index()),
            });
        }
        for (from, to) in seq.edges() {
            *self.usage.get_mut(from.index(), to.index()) += 1;
        }
        Ok(())
    }

    /// Returns the committed usage of edge `from` → `to`.
    pub fn usage_of(&self, from: DieId, to: DieId) -> u32 {
        self.usage.get(from.index(), to.index())
    }

    /// Returns the full usage matrix.
    pub fn usage(&self) -> &SquareMatrix<u32> {
        &self.usage
    }

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

    /// Returns the number of edges with no spare capacity left.
    pub fn saturated_count(&self) -> usize {
        self.link_usage()
            .iter()
            .filter(|l| l.used >= l.capacity)
            .count()
    }

    /// Consumes the ledger, returning the capacity and usage matrices.
    pub fn into_parts(self) -> (SquareMatrix<u32>, SquareMatrix<u32>) {
        (self.capacity, self.usage)
    }

    fn first_saturated(&self, seq: &DieSequence) -> Option<(DieId, DieId)> {
        seq.edges().find(|&(from, to)| {
            let (i, j) = (from.index(), to.index());
            self.usage.get(i, j) >= self.capacity.get(i, j)
        })
    }
}
