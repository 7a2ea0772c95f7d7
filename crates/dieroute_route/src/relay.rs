//! Repeater selection on intermediate dies.
//!
//! Every intermediate die of a route needs one of its relay endpoints as a
//! repeater. The selector takes the first relay in declared order that the
//! current route has not already used. Under [`RelayPolicy::Exclusive`] it
//! also skips relays reserved by earlier committed routes.

use crate::registry::{Die, DieRegistry};
use crate::sequence::DieSequence;
use dieroute_common::EndpointId;
use dieroute_config::RelayPolicy;
use std::collections::HashSet;

/// Chooses repeaters and, under the exclusive policy, remembers used ones.
#[derive(Debug, Clone, Default)]
pub struct RelaySelector {
    policy: RelayPolicy,
    reserved: HashSet<EndpointId>,
}

impl RelaySelector {
    /// Creates a selector with the given reuse policy.
    pub fn new(policy: RelayPolicy) -> Self {
        Self {
            policy,
            reserved: HashSet::new(),
        }
    }

    /// Returns the reuse policy.
    pub fn policy(&self) -> RelayPolicy {
        self.policy
    }

    /// Picks the first relay of `die` not in `chosen` (and not reserved).
    pub fn select(&self, die: &Die, chosen: &[EndpointId]) -> Option<EndpointId> {
        die.relays
            .iter()
            .copied()
            .find(|r| !chosen.contains(r) && !self.is_reserved(*r))
    }

    /// Picks one repeater for every intermediate die of `seq`.
    ///
    /// Returns `None` as soon as one die has nothing left to offer; nothing
    /// is reserved either way.
    pub fn select_for_path(
        &self,
        registry: &DieRegistry,
        seq: &DieSequence,
    ) -> Option<Vec<EndpointId>> {
        let mut chosen = Vec::with_capacity(seq.intermediates().len());
        for &die in seq.intermediates() {
            let relay = self.select(registry.die(die), &chosen)?;
            chosen.push(relay);
        }
        Some(chosen)
    }

    /// Marks committed repeaters as taken. A no-op under the local policy.
    pub fn reserve(&mut self, repeaters: &[EndpointId]) {
        if self.policy == RelayPolicy::Exclusive {
            self.reserved.extend(repeaters.iter().copied());
        }
    }

    /// Returns whether `relay` was reserved by an earlier route.
    pub fn is_reserved(&self, relay: EndpointId) -> bool {
        self.reserved.contains(&relay)
    }
}
