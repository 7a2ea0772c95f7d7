//! The immutable directed die graph.
//!
//! `capacity[i][j]` is the number of concurrent hops the directed edge
//! D_i → D_j can carry; zero means there is no edge.

use dieroute_common::{DieId, MatrixError, SquareMatrix};

/// Directed die-to-die graph with per-edge integer capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topology {
    capacity: SquareMatrix<u32>,
}

impl Topology {
    /// Creates a topology from a capacity matrix.
    pub fn new(capacity: SquareMatrix<u32>) -> Self {
        Self { capacity }
    }

    /// Creates a topology from matrix rows, rejecting non-square input.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, MatrixError> {
        SquareMatrix::from_rows(rows).map(Self::new)
    }

    /// Returns the number of dies the matrix describes.
    pub fn die_count(&self) -> usize {
        self.capacity.size()
    }

    /// Returns the capacity of the directed edge `from` → `to`.
    pub fn capacity_of(&self, from: DieId, to: DieId) -> u32 {
        self.capacity.get(from.index(), to.index())
    }

    /// Returns the full capacity matrix.
    pub fn capacity(&self) -> &SquareMatrix<u32> {
        &self.capacity
    }

    /// Iterates over the dies reachable from `die` in one hop, ascending.
    ///
    /// Self-loops are never successors, even with non-zero capacity.
    pub fn successors(&self, die: DieId) -> impl Iterator<Item = DieId> + '_ {
        self.capacity
            .row(die.index())
            .iter()
            .enumerate()
            .filter(move |&(j, &cap)| cap > 0 && j != die.index())
            .map(|(j, _)| DieId::from_index(j))
    }

    /// Iterates over every edge `(from, to, capacity)` with `from != to` and
    /// non-zero capacity, in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = (DieId, DieId, u32)> + '_ {
        self.capacity.rows().enumerate().flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .filter(move |&(j, &cap)| cap > 0 && i != j)
                .map(move |(j, &cap)| (DieId::from_index(i), DieId::from_index(j), cap))
        })
    }
}
