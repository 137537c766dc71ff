//! Range-to-CIDR decomposition.
//!
//! Turns an inclusive address range into the minimal ordered set of aligned
//! CIDR blocks covering it exactly, via the greedy largest-aligned-block
//! reduction. All arithmetic runs on the `u128` view of the addresses, so
//! IPv4 and IPv6 share one exact, non-wrapping code path.

use crate::models::{addr_to_bits, bits_to_addr, Cidr, IpRange};

/// Decompose a range into the minimal set of CIDR blocks whose union equals
/// the range exactly.
///
/// Blocks come out ascending by base address, pairwise disjoint and with no
/// gaps. `start == end` yields one single-address block; the full address
/// space yields one `/0`; a range unaligned at both ends emits at most
/// `2 * width - 1` blocks.
pub fn range_to_cidrs(range: IpRange) -> Vec<Cidr> {
    let family = range.family();
    let width = family.bit_width();
    let end = addr_to_bits(range.end);
    let mut cursor = addr_to_bits(range.start);
    let mut blocks = Vec::new();

    loop {
        let (bits, mask) = largest_block(cursor, end, width);
        blocks.push(Cidr {
            addr: bits_to_addr(cursor, family),
            prefix_len: width - bits,
        });

        let block_end = cursor | mask;
        if block_end >= end {
            break;
        }
        // block_end < end, so the step cannot wrap
        cursor = block_end + 1;
    }

    blocks
}

/// Find the largest `2^bits` block starting at `cursor` that keeps the
/// cursor aligned and whose last address stays at or below `end`.
///
/// Grows from `bits = 0` (a single address, always valid) one level at a
/// time, committing a level only once it passes both checks, the full
/// family width included. Returns the bit count together with the
/// matching low-bits mask (`2^bits - 1`).
fn largest_block(cursor: u128, end: u128, width: u8) -> (u8, u128) {
    let mut bits: u8 = 0;
    let mut mask: u128 = 0;
    while bits < width {
        let grown = (mask << 1) | 1;
        if cursor & grown != 0 || cursor | grown > end {
            break;
        }
        bits += 1;
        mask = grown;
    }
    (bits, mask)
}
