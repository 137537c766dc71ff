//! Output formatting for block lists.
//!
//! - [`json`] - `.lsrules` JSON rule files

mod json;

pub use json::{write_block_lists, LIST_EXTENSION};
