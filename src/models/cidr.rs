//! CIDR block type shared by both address families.
//!
//! A [`Cidr`] is an address plus a prefix length, displayed and serialized
//! as the usual `addr/prefix` string. Covers `2^(width - prefix_len)`
//! consecutive addresses from [`Cidr::lo`] to [`Cidr::hi`].

use super::addr::{addr_to_bits, bits_to_addr, Family};
use crate::error::{ConvertError, Result};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::IpAddr;
use std::str::FromStr;

/// CIDR block: base address and prefix length.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Cidr {
    /// Base address (host bits may be set; see [`Cidr::network`]).
    pub addr: IpAddr,
    /// Prefix length, 0..=32 for IPv4 and 0..=128 for IPv6.
    pub prefix_len: u8,
}

impl Cidr {
    /// Build a block, rejecting prefix lengths beyond the family width.
    pub fn new(addr: IpAddr, prefix_len: u8) -> Result<Cidr> {
        let family = Family::of(addr);
        if prefix_len > family.bit_width() {
            return Err(ConvertError::Parse(format!(
                "prefix length /{prefix_len} too long for {family}"
            )));
        }
        Ok(Cidr { addr, prefix_len })
    }

    /// Address family of the block.
    pub fn family(&self) -> Family {
        Family::of(self.addr)
    }

    /// Lowest address covered by the block (the network address).
    pub fn lo(&self) -> IpAddr {
        let bits = addr_to_bits(self.addr) & !self.host_mask();
        bits_to_addr(bits, self.family())
    }

    /// Highest address covered by the block.
    pub fn hi(&self) -> IpAddr {
        let bits = addr_to_bits(self.addr) | self.host_mask();
        bits_to_addr(bits, self.family())
    }

    /// The block with its host bits cleared.
    pub fn network(&self) -> Cidr {
        Cidr {
            addr: self.lo(),
            prefix_len: self.prefix_len,
        }
    }

    /// Mask selecting the host bits of this block.
    fn host_mask(&self) -> u128 {
        let host_bits = self.family().bit_width() - self.prefix_len;
        if host_bits == 0 {
            0
        } else {
            u128::MAX >> (128 - u32::from(host_bits))
        }
    }
}

impl FromStr for Cidr {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Cidr> {
        let s = s.trim();
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 2 {
            return Err(ConvertError::Parse(format!("invalid CIDR: {s}")));
        }
        let addr: IpAddr = parts[0]
            .parse()
            .map_err(|_| ConvertError::Parse(format!("invalid IP address: {}", parts[0])))?;
        // u8::from_str tolerates a leading '+'; a prefix length is bare digits
        if !parts[1].bytes().all(|b| b.is_ascii_digit()) {
            return Err(ConvertError::Parse(format!(
                "invalid prefix length: {}",
                parts[1]
            )));
        }
        let prefix_len: u8 = parts[1]
            .parse()
            .map_err(|_| ConvertError::Parse(format!("invalid prefix length: {}", parts[1])))?;
        Cidr::new(addr, prefix_len)
    }
}

impl std::fmt::Display for Cidr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix_len)
    }
}

impl Serialize for Cidr {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Cidr {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Cidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
