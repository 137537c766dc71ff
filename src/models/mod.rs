//! Domain models for blocklist-convert.
//!
//! This module contains the core data structures used throughout the tool:
//! - [`Cidr`] - CIDR block with string serialization
//! - [`IpRange`] - validated inclusive start/end address pair
//! - [`BlockList`] - output record consumed by the firewall
//! - [`Family`] - address family and fixed-width integer helpers

mod addr;
mod blocklist;
mod cidr;
mod range;

// Re-export public types
pub use addr::{addr_to_bits, bits_to_addr, parse_addr, Family, IPV4_WIDTH, IPV6_WIDTH};
pub use blocklist::BlockList;
pub use cidr::Cidr;
pub use range::IpRange;
