//! Block list JSON file output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{ConvertError, Result};
use crate::models::BlockList;

/// File extension of the rule files the downstream firewall imports.
pub const LIST_EXTENSION: &str = "lsrules";

/// Write each block list to `<dir>/<file_stem>[_<n>].lsrules` and return
/// the paths written, in order.
///
/// A single list gets the bare stem. Several lists are numbered `_1`,
/// `_2`, ... so re-runs with a different batch count never leave a stale
/// unnumbered file ambiguous.
pub fn write_block_lists(dir: &Path, file_stem: &str, lists: &[BlockList]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::with_capacity(lists.len());
    for (i, list) in lists.iter().enumerate() {
        let file_name = if lists.len() == 1 {
            format!("{file_stem}.{LIST_EXTENSION}")
        } else {
            format!("{file_stem}_{}.{LIST_EXTENSION}", i + 1)
        };
        let path = dir.join(file_name);

        let file = File::create(&path).map_err(|e| ConvertError::file(&path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, list)?;
        writer.flush()?;

        log::info!(
            "wrote {} with {} addresses",
            path.display(),
            list.denied_remote_addresses.len()
        );
        paths.push(path);
    }
    Ok(paths)
}
