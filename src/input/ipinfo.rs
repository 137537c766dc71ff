//! Country CSV input with one address range per row.
//!
//! Column 0 holds the first address of the range, column 1 the last and
//! column 2 the country code matched against the filter. Ranges are
//! decomposed into CIDR blocks on the way out. The export mixes IPv4 and
//! IPv6 rows; only IPv4 ranges are taken.

use std::io::Read;
use std::net::{IpAddr, Ipv4Addr};

use crate::error::{ConvertError, Result};
use crate::input::Filter;
use crate::models::{Cidr, IpRange};
use crate::processing::range_to_cidrs;

pub(super) fn extract<R: Read>(reader: R, filter: &Filter) -> Result<Vec<Cidr>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let mut cidrs = Vec::new();
    let mut skipped = 0usize;
    for record in csv_reader.records() {
        let record = record?;
        let country = record
            .get(2)
            .ok_or_else(|| ConvertError::Parse(format!("row has no country column: {record:?}")))?;
        if !filter.matches(country) {
            continue;
        }
        let start_field = record
            .get(0)
            .ok_or_else(|| ConvertError::Parse(format!("row has no start column: {record:?}")))?;
        let end_field = record
            .get(1)
            .ok_or_else(|| ConvertError::Parse(format!("row has no end column: {record:?}")))?;

        let range = match (
            start_field.parse::<Ipv4Addr>(),
            end_field.parse::<Ipv4Addr>(),
        ) {
            (Ok(start), Ok(end)) => IpRange::new(IpAddr::V4(start), IpAddr::V4(end))?,
            _ => {
                log::debug!("skipping non-IPv4 row: {start_field} - {end_field}");
                skipped += 1;
                continue;
            }
        };
        cidrs.extend(range_to_cidrs(range));
    }
    if skipped > 0 {
        log::warn!("skipped {skipped} non-IPv4 rows");
    }
    Ok(cidrs)
}
