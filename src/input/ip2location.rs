//! Plain text input with one CIDR block per line.
//!
//! Blank lines and `#` comment lines are skipped. There is no country
//! column, so the filter does not apply.

use std::io::{BufRead, BufReader, Read};

use crate::error::Result;
use crate::models::Cidr;

pub(super) fn extract<R: Read>(reader: R) -> Result<Vec<Cidr>> {
    let mut cidrs = Vec::new();
    for line in BufReader::new(reader).lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let cidr: Cidr = line.parse()?;
        cidrs.push(cidr.network());
    }
    Ok(cidrs)
}
