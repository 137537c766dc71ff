//! Convert IP reputation datasets into `.lsrules` JSON block lists.
//!
//! The pipeline reads a dataset ([`input`]), turns every record into CIDR
//! blocks ([`processing`]), batches the blocks into size-capped lists and
//! writes one JSON rule file per batch ([`output`]).

pub mod cli;
pub mod error;
pub mod input;
pub mod models;
pub mod output;
pub mod processing;

use std::fs::File;
use std::io::BufReader;
use std::net::IpAddr;
use std::path::PathBuf;

pub use error::{ConvertError, Result};

use cli::Args;
use input::{extract_cidrs, Filter};
use models::{Cidr, IpRange};
use output::write_block_lists;
use processing::{build_block_lists, range_to_cidrs, MAX_LIST_ENTRIES};

/// Decompose an inclusive address range into its minimal covering CIDR set.
///
/// Fails when the endpoints mix address families or start is above end.
pub fn decompose(start: IpAddr, end: IpAddr) -> Result<Vec<Cidr>> {
    let range = IpRange::new(start, end)?;
    Ok(range_to_cidrs(range))
}

/// Run a full conversion: read `args.input`, extract the denied blocks and
/// write the rule files. Returns the paths written, in order.
pub fn convert(args: &Args) -> Result<Vec<PathBuf>> {
    log::info!(
        "converting {input} as {source} source",
        input = args.input.display(),
        source = args.source
    );

    let file = File::open(&args.input).map_err(|e| ConvertError::file(&args.input, e))?;
    let filter = Filter::new(args.country_id.clone());
    let cidrs = extract_cidrs(args.source, BufReader::new(file), &filter)?;
    log::info!("extracted {count} cidr blocks", count = cidrs.len());

    let lists = build_block_lists(&args.list_name, &args.list_desc, cidrs, MAX_LIST_ENTRIES);
    let paths = write_block_lists(&args.output_dir, &args.output_file, &lists)?;
    Ok(paths)
}
