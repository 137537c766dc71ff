//! Integration tests for blocklist-convert
//!
//! These tests verify the complete workflow from reading a dataset to the
//! rule files written on disk.

use std::fs;
use std::path::PathBuf;

use blocklist_convert::cli::Args;
use blocklist_convert::input::Source;
use blocklist_convert::models::BlockList;
use blocklist_convert::output::write_block_lists;
use blocklist_convert::processing::build_block_lists;
use blocklist_convert::{convert, ConvertError};

fn args(fixture: &str, source: Source, output_dir: PathBuf) -> Args {
    Args {
        input: PathBuf::from(format!("src/tests/test_data/{fixture}")),
        source,
        output_dir,
        output_file: "ip_block_list".to_string(),
        list_name: "converted list".to_string(),
        list_desc: "integration fixture".to_string(),
        country_id: None,
        log_level: "info".to_string(),
    }
}

fn read_list(path: &PathBuf) -> BlockList {
    let body = fs::read_to_string(path).expect("Failed to read rule file");
    serde_json::from_str(&body).expect("Failed to parse rule file")
}

#[test]
fn test_convert_maxmind_end_to_end() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let args = args("maxmind_sample.csv", Source::Maxmind, dir.path().to_path_buf());

    let paths = convert(&args).expect("Failed to convert maxmind sample");

    assert_eq!(paths, [dir.path().join("ip_block_list.lsrules")]);
    let list = read_list(&paths[0]);
    assert_eq!(list.name, "converted list");
    assert_eq!(list.description, "integration fixture");

    let got: Vec<String> = list
        .denied_remote_addresses
        .iter()
        .map(|c| c.to_string())
        .collect();
    assert_eq!(
        got,
        [
            "1.0.0.0/24",
            "5.44.248.0/21",
            "23.128.0.0/16",
            "45.142.120.0/24",
            "2602:fbb1::/36",
            "102.129.252.0/24",
        ],
        "Expected every row, in input order"
    );
}

#[test]
fn test_convert_maxmind_with_country_filter() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let mut args = args("maxmind_sample.csv", Source::Maxmind, dir.path().to_path_buf());
    args.country_id = Some("US".to_string());

    let paths = convert(&args).expect("Failed to convert maxmind sample");

    let list = read_list(&paths[0]);
    let got: Vec<String> = list
        .denied_remote_addresses
        .iter()
        .map(|c| c.to_string())
        .collect();
    assert_eq!(got, ["23.128.0.0/16", "2602:fbb1::/36"]);
}

#[test]
fn test_convert_ipinfo_decomposes_ranges() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let args = args("ipinfo_sample.csv", Source::IpInfo, dir.path().to_path_buf());

    let paths = convert(&args).expect("Failed to convert ipinfo sample");

    let list = read_list(&paths[0]);
    let got: Vec<String> = list
        .denied_remote_addresses
        .iter()
        .map(|c| c.to_string())
        .collect();
    assert_eq!(
        got,
        [
            "1.0.0.0/24",
            "5.44.248.0/21",
            "23.128.4.0/30",
            "23.128.4.4/31",
            "186.2.163.20/32",
        ],
        "Expected IPv4 ranges decomposed and the IPv6 row skipped"
    );
}

#[test]
fn test_convert_ip2location_lines() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let args = args(
        "ip2location_sample.txt",
        Source::Ip2LocationCidr,
        dir.path().to_path_buf(),
    );

    let paths = convert(&args).expect("Failed to convert ip2location sample");

    let list = read_list(&paths[0]);
    assert_eq!(
        list.denied_remote_addresses.len(),
        5,
        "Expected comment and blank lines skipped"
    );
    assert_eq!(list.denied_remote_addresses[4].to_string(), "2001:e60::/32");
}

#[test]
fn test_filter_matching_nothing_still_writes_one_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let mut args = args("maxmind_sample.csv", Source::Maxmind, dir.path().to_path_buf());
    args.country_id = Some("ZZ".to_string());

    let paths = convert(&args).expect("Failed to convert maxmind sample");

    assert_eq!(paths.len(), 1, "Empty result still produces a file");
    let body = fs::read_to_string(&paths[0]).expect("Failed to read rule file");
    assert!(
        !body.contains("denied-remote-addresses"),
        "Empty address list must be omitted from the JSON"
    );
    assert_eq!(read_list(&paths[0]).name, "converted list");
}

#[test]
fn test_batched_lists_are_numbered() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let cidrs = ["10.0.0.0/24", "10.0.1.0/24", "10.0.2.0/24"]
        .iter()
        .map(|s| s.parse().expect("Failed to parse cidr"))
        .collect();

    let lists = build_block_lists("split", "two per file", cidrs, 2);
    let paths = write_block_lists(dir.path(), "blocked", &lists).expect("Failed to write lists");

    assert_eq!(
        paths,
        [
            dir.path().join("blocked_1.lsrules"),
            dir.path().join("blocked_2.lsrules"),
        ]
    );
    assert_eq!(read_list(&paths[0]).denied_remote_addresses.len(), 2);
    assert_eq!(read_list(&paths[1]).denied_remote_addresses.len(), 1);
}

#[test]
fn test_missing_input_file_fails_with_path() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let args = args("no_such_file.csv", Source::Maxmind, dir.path().to_path_buf());

    let err = convert(&args).expect_err("Conversion should fail");
    assert!(matches!(err, ConvertError::File { .. }));
    assert!(err.to_string().contains("no_such_file.csv"));
}
