//! Validated inclusive address range.

use super::addr::{parse_addr, Family};
use crate::error::{ConvertError, Result};
use std::net::IpAddr;

/// Inclusive `start..=end` pair of same-family addresses.
///
/// Construction enforces the range invariants, so holders of an `IpRange`
/// can do range math without re-checking.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct IpRange {
    /// First address of the range.
    pub start: IpAddr,
    /// Last address of the range.
    pub end: IpAddr,
}

impl IpRange {
    /// Build a range, rejecting mixed families and `start > end`.
    pub fn new(start: IpAddr, end: IpAddr) -> Result<IpRange> {
        if Family::of(start) != Family::of(end) {
            return Err(ConvertError::InvalidRange(format!(
                "{start} and {end} are different address families"
            )));
        }
        if start > end {
            return Err(ConvertError::InvalidRange(format!(
                "start {start} above end {end}"
            )));
        }
        Ok(IpRange { start, end })
    }

    /// Parse two endpoint strings and build a range.
    pub fn from_strs(start: &str, end: &str) -> Result<IpRange> {
        IpRange::new(parse_addr(start)?, parse_addr(end)?)
    }

    /// Address family shared by both endpoints.
    pub fn family(&self) -> Family {
        Family::of(self.start)
    }
}
