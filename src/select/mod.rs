//! Deterministic positional sample selection.
//!
//! Selection maps a bounded zero-based index onto one record of a filtered
//! set. There is no randomness and no hidden state: the same
//! `(record set, index)` pair always yields the same record, which keeps
//! test fixtures and re-filtered UI state reproducible.

use std::ops::RangeInclusive;

use crate::error::VoxmanError;
use crate::manifest::{ManifestRecord, RecordSet};

/// The valid selection range `0..=len-1`, or `None` for an empty set.
///
/// Callers are expected to have already branched on
/// [`FilterOutcome::Empty`](crate::filter::FilterOutcome::Empty); an empty
/// set here means selection must not be attempted at all.
pub fn bounded_index(len: usize) -> Option<RangeInclusive<usize>> {
    if len == 0 {
        None
    } else {
        Some(0..=len - 1)
    }
}

/// The record at zero-based `index`.
///
/// # Errors
/// Returns [`VoxmanError::IndexOutOfRange`] when `index` falls outside
/// `0..=len-1`; that indicates the caller failed to rebound the index after
/// a new filter, not a fault in the record set.
pub fn select(records: &RecordSet, index: usize) -> Result<&ManifestRecord, VoxmanError> {
    records.get(index).ok_or(VoxmanError::IndexOutOfRange {
        index,
        len: records.len(),
    })
}
