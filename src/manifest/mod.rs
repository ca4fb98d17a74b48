//! Manifest model and per-format I/O for voxman.
//!
//! This module defines the canonical representation of the speech-corpus
//! manifest ([`ManifestRecord`] and the order-preserving [`RecordSet`]) and
//! the readers/writers for each supported serialization:
//!
//! - [`io_csv`]: the manifest source format (delimited rows with header)
//! - [`io_jsonl`]: line-delimited JSON records
//! - [`io_hf_dataset`]: directory-based dataset export (feature-gated)
//!
//! # Design principles
//!
//! 1. **Order is data**: record sets preserve source row order, because
//!    sample selection is positional and filtering must be stable.
//! 2. **Permissive optionals**: `age` and `gender` may be absent; readers
//!    map empty/null values to `None` rather than rejecting the row.

pub mod io_csv;
#[cfg(feature = "hf-parquet")]
pub mod io_hf_dataset;
pub mod io_jsonl;
mod model;

// Re-export core types for convenient access
pub use model::{ManifestRecord, RecordSet};
