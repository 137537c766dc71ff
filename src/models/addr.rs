//! Address-family helpers and the fixed-width integer view of addresses.
//!
//! All range arithmetic in this crate runs on a `u128` carrying the address
//! value zero-extended, bounded by the family's bit width. That keeps IPv4
//! and IPv6 on one code path with exact, non-wrapping math.

use crate::error::{ConvertError, Result};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Bit width of an IPv4 address.
pub const IPV4_WIDTH: u8 = 32;

/// Bit width of an IPv6 address.
pub const IPV6_WIDTH: u8 = 128;

/// Address family of an endpoint, range or block.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    /// Family of an address.
    pub fn of(addr: IpAddr) -> Family {
        match addr {
            IpAddr::V4(_) => Family::V4,
            IpAddr::V6(_) => Family::V6,
        }
    }

    /// Number of bits in an address of this family.
    pub fn bit_width(self) -> u8 {
        match self {
            Family::V4 => IPV4_WIDTH,
            Family::V6 => IPV6_WIDTH,
        }
    }
}

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Family::V4 => write!(f, "IPv4"),
            Family::V6 => write!(f, "IPv6"),
        }
    }
}

/// Integer value of an address, zero-extended to 128 bits.
pub fn addr_to_bits(addr: IpAddr) -> u128 {
    match addr {
        IpAddr::V4(v4) => u128::from(u32::from(v4)),
        IpAddr::V6(v6) => u128::from(v6),
    }
}

/// Rebuild an address of the given family from its integer value.
///
/// For [`Family::V4`] only the low 32 bits are meaningful.
pub fn bits_to_addr(value: u128, family: Family) -> IpAddr {
    match family {
        Family::V4 => IpAddr::V4(Ipv4Addr::from(value as u32)),
        Family::V6 => IpAddr::V6(Ipv6Addr::from(value)),
    }
}

/// Parse a textual address, reporting the offending text on failure.
pub fn parse_addr(s: &str) -> Result<IpAddr> {
    s.parse()
        .map_err(|_| ConvertError::Parse(format!("invalid IP address: {s}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_of() {
        assert_eq!(Family::of("10.0.0.1".parse().unwrap()), Family::V4);
        assert_eq!(Family::of("2001:db8::1".parse().unwrap()), Family::V6);
    }

    #[test]
    fn test_bit_width() {
        assert_eq!(Family::V4.bit_width(), 32);
        assert_eq!(Family::V6.bit_width(), 128);
    }

    #[test]
    fn test_addr_to_bits_v4() {
        let addr: IpAddr = "10.0.0.5".parse().unwrap();
        assert_eq!(addr_to_bits(addr), 0x0A00_0005);

        let max: IpAddr = "255.255.255.255".parse().unwrap();
        assert_eq!(addr_to_bits(max), u128::from(u32::MAX));
    }

    #[test]
    fn test_addr_to_bits_v6() {
        let addr: IpAddr = "::1".parse().unwrap();
        assert_eq!(addr_to_bits(addr), 1);

        let max: IpAddr = "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff".parse().unwrap();
        assert_eq!(addr_to_bits(max), u128::MAX);
    }

    #[test]
    fn test_bits_roundtrip() {
        for s in ["0.0.0.0", "192.168.1.10", "255.255.255.255"] {
            let addr: IpAddr = s.parse().unwrap();
            assert_eq!(bits_to_addr(addr_to_bits(addr), Family::V4), addr);
        }
        for s in ["::", "2001:db8::ff00:42:8329", "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff"] {
            let addr: IpAddr = s.parse().unwrap();
            assert_eq!(bits_to_addr(addr_to_bits(addr), Family::V6), addr);
        }
    }

    #[test]
    fn test_parse_addr() {
        assert!(parse_addr("1.2.3.4").is_ok());
        assert!(parse_addr("2001:db8::1").is_ok());

        let err = parse_addr("not-an-ip").unwrap_err();
        assert!(err.to_string().contains("not-an-ip"));
    }
}
