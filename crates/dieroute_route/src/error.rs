//! Error types for the routing core.
//!
//! Per-pair routing failures are not errors; they are reported as
//! [`PairOutcome`](crate::PairOutcome)s. Only conditions that make the whole
//! run meaningless, or a broken ledger discipline, surface here.

use dieroute_common::DieId;

/// Fatal conditions detected before allocation begins.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// The die list and the capacity matrix disagree on the number of dies.
    #[error("die count mismatch: {dies} dies declared but capacity matrix is {matrix}x{matrix}")]
    DimensionMismatch {
        /// Number of dies in the registry.
        dies: usize,
        /// Size of the capacity matrix.
        matrix: usize,
    },
}

/// Rejected ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    /// A commit touched an edge with no spare capacity.
    #[error("link D{from} -> D{to} is saturated ({capacity} of {capacity} in use)")]
    Saturated {
        /// Edge origin.
        from: DieId,
        /// Edge destination.
        to: DieId,
        /// The edge's capacity, all of which is in use.
        capacity: u32,
    },
}
