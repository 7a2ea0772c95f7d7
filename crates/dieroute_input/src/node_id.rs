//! Node-name to endpoint-id decoding.
//!
//! Endpoint nodes are named `g<n>` or `gp<n>`. Plain `g` nodes map to `n`;
//! `gp` nodes live in a separate range starting at [`GP_OFFSET`].

use crate::error::NodeIdError;
use dieroute_common::EndpointId;

/// Base id of the `gp<n>` node range.
pub const GP_OFFSET: u32 = 10_000;

/// Decodes a node name into its endpoint id.
///
/// ```
/// use dieroute_input::decode_node_id;
///
/// assert_eq!(decode_node_id("g42").unwrap().as_raw(), 42);
/// assert_eq!(decode_node_id("gp3").unwrap().as_raw(), 10_003);
/// assert!(decode_node_id("net7").is_err());
/// ```
pub fn decode_node_id(name: &str) -> Result<EndpointId, NodeIdError> {
    let (digits, offset) = if let Some(rest) = name.strip_prefix("gp") {
        (rest, GP_OFFSET)
    } else if let Some(rest) = name.strip_prefix('g') {
        (rest, 0)
    } else {
        return Err(NodeIdError::UnknownPrefix(name.to_string()));
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NodeIdError::MissingNumber(name.to_string()));
    }
    digits
        .parse::<u32>()
        .ok()
        .and_then(|n| n.checked_add(offset))
        .map(EndpointId::from_raw)
        .ok_or_else(|| NodeIdError::OutOfRange(name.to_string()))
}
