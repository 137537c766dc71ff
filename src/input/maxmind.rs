//! Country CSV input with one CIDR block per row.
//!
//! Column 0 holds the network in CIDR notation and column 2 the country
//! code matched against the filter. The first row is a header.

use std::io::Read;

use crate::error::{ConvertError, Result};
use crate::input::Filter;
use crate::models::Cidr;

pub(super) fn extract<R: Read>(reader: R, filter: &Filter) -> Result<Vec<Cidr>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let mut cidrs = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let country = record
            .get(2)
            .ok_or_else(|| ConvertError::Parse(format!("row has no country column: {record:?}")))?;
        if !filter.matches(country) {
            continue;
        }
        let network = record
            .get(0)
            .ok_or_else(|| ConvertError::Parse(format!("row has no network column: {record:?}")))?;
        let cidr: Cidr = network.parse()?;
        cidrs.push(cidr.network());
    }
    Ok(cidrs)
}
