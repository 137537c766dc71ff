//! Address range processing logic.
//!
//! This module contains the conversion pipeline's compute stages:
//! - [`decompose`] - Decomposition of address ranges into minimal CIDR sets
//! - [`batch`] - Splitting addresses into size-capped block lists

mod batch;
mod decompose;

// Re-export public functions
pub use batch::{build_block_lists, MAX_LIST_ENTRIES};
pub use decompose::range_to_cidrs;
