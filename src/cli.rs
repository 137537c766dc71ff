//! Command line interface.

use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

use crate::input::Source;

#[derive(Parser, Debug)]
#[command(name = "blocklist-convert")]
#[command(about = "Convert IP reputation datasets into .lsrules JSON block lists")]
#[command(version)]
pub struct Args {
    /// Path to the dataset to convert
    #[arg(short, long)]
    pub input: PathBuf,

    #[arg(
        short,
        long,
        default_value = "maxmind",
        value_parser = Source::from_str,
        help = format!("Input format ({})", Source::NAMES.join(", "))
    )]
    pub source: Source,

    /// Directory the rule files are written to
    #[arg(short, long, default_value = "./", env = "BLOCKLIST_OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// File name stem for the rule files, without extension
    #[arg(short = 'f', long, default_value = "ip_block_list")]
    pub output_file: String,

    /// Rule list name embedded in each file
    #[arg(long, default_value = "", env = "BLOCKLIST_LIST_NAME")]
    pub list_name: String,

    /// Rule list description embedded in each file
    #[arg(long, default_value = "", env = "BLOCKLIST_LIST_DESC")]
    pub list_desc: String,

    /// Keep only records with this country code
    #[arg(long)]
    pub country_id: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, default_value = "info")]
    pub log_level: String,
}
