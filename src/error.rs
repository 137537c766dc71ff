//! Error types for blocklist-convert.
//!
//! Every failure aborts the run: the tool is a one-shot batch conversion
//! with no partial-progress model, so errors propagate straight up to
//! `main` and exit non-zero.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::input::Source;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// All the ways a conversion run can fail.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Source format name not recognized.
    #[error("unsupported source '{0}' (options: {})", Source::NAMES.join(", "))]
    UnsupportedSource(String),

    /// Range endpoints with mixed address families, or start above end.
    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// Malformed address, CIDR literal or record field.
    #[error("parse error: {0}")]
    Parse(String),

    /// Malformed CSV row.
    #[error("malformed csv record: {0}")]
    Csv(#[from] csv::Error),

    /// Block list could not be encoded to JSON.
    #[error("cannot encode block list: {0}")]
    Json(#[from] serde_json::Error),

    /// A named file could not be opened or created.
    #[error("{}: {}", path.display(), source)]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Read/write failure on an already-open stream.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

impl ConvertError {
    /// Attach the file path to an open/create failure.
    pub fn file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ConvertError::File {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_source_message() {
        let err = ConvertError::UnsupportedSource("geoip2".to_string());
        assert_eq!(
            err.to_string(),
            "unsupported source 'geoip2' (options: maxmind, ip2location_cidr, ipinfo)"
        );
    }

    #[test]
    fn test_file_error_names_path() {
        let err = ConvertError::file(
            "missing.csv",
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        assert!(err.to_string().starts_with("missing.csv: "));
    }

    #[test]
    fn test_io_error_converts() {
        fn read() -> Result<String> {
            Err(io::Error::new(io::ErrorKind::UnexpectedEof, "eof"))?
        }
        assert!(matches!(read(), Err(ConvertError::Io(_))));
    }
}
