use std::path::PathBuf;
use thiserror::Error;

/// The main error type for voxman operations.
///
/// Note that an empty filter result is *not* an error: it is an expected
/// outcome modelled by [`crate::filter::FilterOutcome::Empty`], and callers
/// branch on it rather than bailing out.
#[derive(Debug, Error)]
pub enum VoxmanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read manifest {path}: {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse manifest CSV {path}: {source}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to write CSV to {path}: {source}")]
    CsvWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to write JSON lines to {path}: {source}")]
    JsonlWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse JSON lines from {path} (line {line}): {source}")]
    JsonlParse {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write dataset directory {path}: {message}")]
    HfWrite { path: PathBuf, message: String },

    #[error("Sample index {index} is out of range for {len} record(s)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Export incomplete: {failed} of {requested} format(s) failed")]
    ExportIncomplete { failed: usize, requested: usize },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}
