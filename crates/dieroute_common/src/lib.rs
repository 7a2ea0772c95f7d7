//! Shared foundational types used across the dieroute workspace.
//!
//! This crate provides the opaque identifiers for dies and endpoints, the
//! endpoint kind tag, and the dense square matrix used for both the inter-die
//! capacity table and the usage ledger.

#![warn(missing_docs)]

pub mod ids;
pub mod matrix;

pub use ids::{DieId, EndpointId, EndpointKind};
pub use matrix::{MatrixError, SquareMatrix};
