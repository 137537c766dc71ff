//! Block list output record.

use super::Cidr;
use serde::{Deserialize, Serialize};

/// One `.lsrules` block list: a named, described set of denied addresses.
///
/// Serializes to the JSON shape the consuming firewall expects; the address
/// array carries the `denied-remote-addresses` wire name and is left out
/// entirely when empty.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BlockList {
    /// Free-text description shown by the consuming firewall.
    pub description: String,
    /// Display name of the list.
    pub name: String,
    /// Denied CIDR blocks, in extraction order.
    #[serde(
        rename = "denied-remote-addresses",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub denied_remote_addresses: Vec<Cidr>,
}
