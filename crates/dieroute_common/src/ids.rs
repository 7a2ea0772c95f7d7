//! Opaque ID newtypes for dies and endpoints.
//!
//! [`DieId`] indexes the ordered die list; [`EndpointId`] is the global
//! numeric identifier decoded from a node name. Both are thin `u32` wrappers
//! that are `Copy`, `Hash`, `Ord`, and `Serialize`/`Deserialize`.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Creates an ID from a raw `u32` value.
            pub fn from_raw(raw: u32) -> Self {
                Self(raw)
            }

            /// Returns the raw `u32` value.
            pub fn as_raw(self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(
    /// Index of a die in the ordered die list.
    DieId
);

define_id!(
    /// Global identifier of a source or relay endpoint.
    EndpointId
);

impl DieId {
    /// Creates a die ID from a list position.
    pub fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    /// Returns the die's position in the die list, for matrix indexing.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Role of an endpoint, fixed by the net declarations.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointKind {
    /// An endpoint that originates a connection (`s` in the net file).
    Source,
    /// An endpoint that terminates a connection or repeats one (`l`).
    Relay,
}

impl EndpointKind {
    /// Returns the single-letter tag used in the net file and in reports.
    pub fn tag(self) -> char {
        match self {
            EndpointKind::Source => 's',
            EndpointKind::Relay => 'l',
        }
    }
}

impl fmt::Display for EndpointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndpointKind::Source => write!(f, "source"),
            EndpointKind::Relay => write!(f, "relay"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn die_id_roundtrip() {
        let id = DieId::from_raw(7);
        assert_eq!(id.as_raw(), 7);
        assert_eq!(id.index(), 7);
        assert_eq!(DieId::from_index(7), id);
    }

    #[test]
    fn endpoint_id_roundtrip() {
        let id = EndpointId::from_raw(10_042);
        assert_eq!(id.as_raw(), 10_042);
    }

    #[test]
    fn ids_order_by_raw_value() {
        assert!(DieId::from_raw(1) < DieId::from_raw(2));
        assert!(EndpointId::from_raw(99) > EndpointId::from_raw(3));
    }

    #[test]
    fn id_hash_in_set() {
        let mut set = HashSet::new();
        set.insert(EndpointId::from_raw(1));
        set.insert(EndpointId::from_raw(2));
        set.insert(EndpointId::from_raw(1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn id_serializes_transparently() {
        let json = serde_json::to_string(&DieId::from_raw(3)).unwrap();
        assert_eq!(json, "3");
        let back: EndpointId = serde_json::from_str("55").unwrap();
        assert_eq!(back, EndpointId::from_raw(55));
    }

    #[test]
    fn id_display() {
        assert_eq!(format!("{}", DieId::from_raw(42)), "42");
    }

    #[test]
    fn endpoint_kind_tags() {
        assert_eq!(EndpointKind::Source.tag(), 's');
        assert_eq!(EndpointKind::Relay.tag(), 'l');
        assert_eq!(EndpointKind::Relay.to_string(), "relay");
    }
}
