//! Export report types for per-format outcome tracking.
//!
//! The pipeline never collapses an export run into a single pass/fail: it
//! collects one outcome per requested format, success-with-path or
//! failure-with-reason, and this module carries that aggregation.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// A report generated by one export run.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ExportReport {
    /// Number of records in the exported set.
    pub records: usize,
    /// One outcome per requested format, in request order.
    pub outcomes: Vec<ExportOutcome>,
}

impl ExportReport {
    /// Create an empty report for a set of `records` records.
    pub fn new(records: usize) -> Self {
        Self {
            records,
            ..Default::default()
        }
    }

    /// Add a per-format outcome.
    pub fn add(&mut self, outcome: ExportOutcome) {
        self.outcomes.push(outcome);
    }

    /// Count of formats that produced an artifact.
    pub fn success_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, ExportStatus::Written { .. }))
            .count()
    }

    /// Count of formats that failed.
    pub fn failure_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, ExportStatus::Failed { .. }))
            .count()
    }

    /// True when every requested format produced its artifact.
    pub fn is_complete(&self) -> bool {
        self.failure_count() == 0
    }

    /// Names of the formats that failed (for warning display).
    pub fn failed_formats(&self) -> impl Iterator<Item = &str> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, ExportStatus::Failed { .. }))
            .map(|o| o.format.as_str())
    }
}

impl fmt::Display for ExportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "  {} record(s), {} format(s) requested",
            self.records,
            self.outcomes.len()
        )?;

        for outcome in &self.outcomes {
            match &outcome.status {
                ExportStatus::Written { path } => {
                    writeln!(f, "  {}: wrote {}", outcome.format, path.display())?;
                }
                ExportStatus::Failed { reason } => {
                    writeln!(f, "  {}: FAILED: {}", outcome.format, reason)?;
                }
            }
        }

        if !self.is_complete() {
            writeln!(f)?;
            writeln!(
                f,
                "Warning: {} of {} format(s) failed; the others were still attempted",
                self.failure_count(),
                self.outcomes.len()
            )?;
        }

        Ok(())
    }
}

/// The outcome of one format within an export run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExportOutcome {
    /// Format name ("csv", "jsonl", "hf").
    pub format: String,
    /// What happened for this format.
    pub status: ExportStatus,
}

impl ExportOutcome {
    /// A format that produced its artifact at `path`.
    pub fn written(format: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            format: format.into(),
            status: ExportStatus::Written { path: path.into() },
        }
    }

    /// A format that failed with a human-readable `reason`.
    pub fn failed(format: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            status: ExportStatus::Failed {
                reason: reason.into(),
            },
        }
    }
}

/// Per-format status: success with the output path, or failure with the
/// offending reason.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ExportStatus {
    Written { path: PathBuf },
    Failed { reason: String },
}
