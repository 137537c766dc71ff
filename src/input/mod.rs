//! Input parsing for the supported reputation dataset formats.
//!
//! - [`maxmind`] - country CSV carrying one CIDR block per row
//! - [`ip2location`] - plain text CIDR line lists
//! - [`ipinfo`] - country CSV carrying start/end address ranges

mod ip2location;
mod ipinfo;
mod maxmind;

use std::fmt;
use std::io::Read;
use std::str::FromStr;

use crate::error::{ConvertError, Result};
use crate::models::Cidr;

/// The dataset formats the converter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Maxmind,
    Ip2LocationCidr,
    IpInfo,
}

impl Source {
    /// The accepted source names. CLI help and the `UnsupportedSource`
    /// message derive from this list.
    pub const NAMES: [&'static str; 3] = ["maxmind", "ip2location_cidr", "ipinfo"];
}

impl FromStr for Source {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "maxmind" => Ok(Source::Maxmind),
            "ip2location_cidr" => Ok(Source::Ip2LocationCidr),
            "ipinfo" => Ok(Source::IpInfo),
            other => Err(ConvertError::UnsupportedSource(other.to_string())),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Source::Maxmind => "maxmind",
            Source::Ip2LocationCidr => "ip2location_cidr",
            Source::IpInfo => "ipinfo",
        };
        write!(f, "{name}")
    }
}

/// Country filter applied while reading sources that carry a country code.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    country_id: Option<String>,
}

impl Filter {
    pub fn new(country_id: Option<String>) -> Self {
        Filter { country_id }
    }

    /// `true` when `country` passes the filter. An unset or empty filter
    /// keeps every record.
    pub fn matches(&self, country: &str) -> bool {
        match self.country_id.as_deref() {
            Some(want) if !want.is_empty() => want == country,
            _ => true,
        }
    }
}

/// Read every address in `reader` using the `source` format and return the
/// CIDR blocks to deny, in input order.
///
/// The filter is honoured by formats with a country column and ignored by
/// plain CIDR lists.
pub fn extract_cidrs<R: Read>(source: Source, reader: R, filter: &Filter) -> Result<Vec<Cidr>> {
    match source {
        Source::Maxmind => maxmind::extract(reader, filter),
        Source::Ip2LocationCidr => ip2location::extract(reader),
        Source::IpInfo => ipinfo::extract(reader, filter),
    }
}
