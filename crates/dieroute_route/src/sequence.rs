//! Die sequences: the die-level shape of a candidate route.

use dieroute_common::DieId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered, repetition-free list of dies starting at the source die.
///
/// Produced by the path enumerator and consumed read-only by the ledger,
/// the relay selector, and allocation records. A sequence is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DieSequence(Vec<DieId>);

impl DieSequence {
    /// Creates the one-die sequence a search starts from.
    pub fn start(source: DieId) -> Self {
        Self(vec![source])
    }

    /// Creates a sequence from raw die indices.
    ///
    /// # Panics
    ///
    /// Panics if `dies` is empty.
    pub fn from_raw(dies: impl IntoIterator<Item = u32>) -> Self {
        let dies: Vec<_> = dies.into_iter().map(DieId::from_raw).collect();
        assert!(!dies.is_empty(), "die sequence must not be empty");
        Self(dies)
    }

    /// Returns a copy of this sequence with `next` appended.
    pub fn extended(&self, next: DieId) -> Self {
        let mut dies = Vec::with_capacity(self.0.len() + 1);
        dies.extend_from_slice(&self.0);
        dies.push(next);
        Self(dies)
    }

    /// Returns the first die.
    pub fn source(&self) -> DieId {
        self.0[0]
    }

    /// Returns the last die.
    pub fn last(&self) -> DieId {
        self.0[self.0.len() - 1]
    }

    /// Returns the number of dies, both ends included.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if `die` occurs anywhere in the sequence.
    pub fn contains(&self, die: DieId) -> bool {
        self.0.contains(&die)
    }

    /// Returns `true` if the sequence ends at `target`.
    pub fn reaches(&self, target: DieId) -> bool {
        self.last() == target
    }

    /// Iterates over the directed edges `(from, to)` the sequence traverses.
    pub fn edges(&self) -> impl Iterator<Item = (DieId, DieId)> + '_ {
        self.0.windows(2).map(|w| (w[0], w[1]))
    }

    /// Returns the dies strictly between the first and the last.
    ///
    /// Each of these needs one repeater.
    pub fn intermediates(&self) -> &[DieId] {
        if self.0.len() < 2 {
            return &[];
        }
        &self.0[1..self.0.len() - 1]
    }

    /// Returns the dies as a slice.
    pub fn as_slice(&self) -> &[DieId] {
        &self.0
    }

    /// Returns `true` if no die occurs twice.
    pub fn is_simple(&self) -> bool {
        self.0
            .iter()
            .enumerate()
            .all(|(i, d)| !self.0[i + 1..].contains(d))
    }
}

impl fmt::Display for DieSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, die) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "D{die}")?;
        }
        Ok(())
    }
}
