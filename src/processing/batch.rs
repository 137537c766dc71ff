//! Block list batching.
//!
//! The consuming firewall caps how many addresses a single `.lsrules` file
//! may carry, so one extraction run can fan out into several block lists.

use crate::models::{BlockList, Cidr};
use itertools::Itertools;

/// Maximum number of addresses per block list; the downstream consumer
/// rejects larger files.
pub const MAX_LIST_ENTRIES: usize = 200_000;

/// Split addresses into contiguous batches of at most `max`, preserving
/// order, one [`BlockList`] per batch sharing `name` and `description`.
///
/// An empty input still yields one empty list, so a run always produces at
/// least one output file.
pub fn build_block_lists(
    name: &str,
    description: &str,
    cidrs: Vec<Cidr>,
    max: usize,
) -> Vec<BlockList> {
    assert!(max > 0, "batch size must be non-zero");

    if cidrs.is_empty() {
        return vec![BlockList {
            description: description.to_string(),
            name: name.to_string(),
            denied_remote_addresses: Vec::new(),
        }];
    }

    let chunks = cidrs.into_iter().chunks(max);
    chunks
        .into_iter()
        .map(|chunk| BlockList {
            description: description.to_string(),
            name: name.to_string(),
            denied_remote_addresses: chunk.collect(),
        })
        .collect()
}
