//! Multi-format export pipeline.
//!
//! Serializes a record set to a caller-chosen subset of the supported
//! output formats. Each format is attempted independently: a failure in one
//! (an I/O error, or the heavier dataset-directory path missing its
//! optional capability) is captured as a per-format outcome and never
//! aborts the sibling formats. Re-running an export overwrites prior
//! artifacts at the same paths.

pub mod report;

pub use report::{ExportOutcome, ExportReport, ExportStatus};

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::VoxmanError;
use crate::manifest::{io_csv, io_jsonl, RecordSet};

/// An output format the pipeline can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    /// `<stem>.csv`: header plus one delimited row per record.
    Csv,
    /// `<stem>.json`: one JSON object per line, record order preserved.
    JsonLines,
    /// `<stem>_hf/`: directory-based dataset representation.
    HfDataset,
}

impl ExportFormat {
    /// Human-readable name for the format.
    pub fn name(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::JsonLines => "jsonl",
            ExportFormat::HfDataset => "hf",
        }
    }

    /// Parse a CLI format token.
    pub fn parse(token: &str) -> Result<Self, VoxmanError> {
        match token {
            "csv" => Ok(ExportFormat::Csv),
            "json" | "jsonl" => Ok(ExportFormat::JsonLines),
            "hf" => Ok(ExportFormat::HfDataset),
            other => Err(VoxmanError::UnsupportedFormat(format!(
                "'{}' (supported: csv, jsonl, hf)",
                other
            ))),
        }
    }
}

/// Exports `records` under the path prefix `stem` in every requested
/// format.
///
/// The stem's parent directory is created first (idempotently); failure to
/// do so is the only fault that aborts the run, since no format could
/// succeed without it. Everything after that is per-format: the returned
/// report carries one success-with-path or failure-with-reason outcome per
/// requested format, in request order.
///
/// # Errors
/// Returns [`VoxmanError::UnsupportedFormat`] when `formats` is empty and
/// [`VoxmanError::Io`] when the parent directory cannot be created.
pub fn export_record_set(
    records: &RecordSet,
    stem: &Path,
    formats: &[ExportFormat],
) -> Result<ExportReport, VoxmanError> {
    if formats.is_empty() {
        return Err(VoxmanError::UnsupportedFormat(
            "no formats requested (supported: csv, jsonl, hf)".to_string(),
        ));
    }

    if let Some(parent) = stem.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(VoxmanError::Io)?;
        }
    }

    let mut report = ExportReport::new(records.len());
    for format in formats {
        report.add(export_one(records, stem, *format));
    }

    Ok(report)
}

fn export_one(records: &RecordSet, stem: &Path, format: ExportFormat) -> ExportOutcome {
    match format {
        ExportFormat::Csv => {
            let path = with_suffix(stem, ".csv");
            match io_csv::write_manifest_csv(&path, records) {
                Ok(()) => ExportOutcome::written(format.name(), path),
                Err(e) => ExportOutcome::failed(format.name(), e.to_string()),
            }
        }
        ExportFormat::JsonLines => {
            let path = with_suffix(stem, ".json");
            match io_jsonl::write_jsonl(&path, records) {
                Ok(()) => ExportOutcome::written(format.name(), path),
                Err(e) => ExportOutcome::failed(format.name(), e.to_string()),
            }
        }
        ExportFormat::HfDataset => export_hf(records, &with_suffix(stem, "_hf")),
    }
}

#[cfg(feature = "hf-parquet")]
fn export_hf(records: &RecordSet, dir: &Path) -> ExportOutcome {
    match crate::manifest::io_hf_dataset::write_hf_dataset(dir, records) {
        Ok(()) => ExportOutcome::written(ExportFormat::HfDataset.name(), dir),
        Err(e) => ExportOutcome::failed(ExportFormat::HfDataset.name(), e.to_string()),
    }
}

#[cfg(not(feature = "hf-parquet"))]
fn export_hf(_records: &RecordSet, dir: &Path) -> ExportOutcome {
    ExportOutcome::failed(
        ExportFormat::HfDataset.name(),
        format!(
            "dataset-directory export to {} requires the 'hf-parquet' feature (rebuild with --features hf-parquet)",
            dir.display()
        ),
    )
}

/// Appends `suffix` to the stem without touching any existing dots in it
/// (`out/manifest.v2` + `.csv` stays `out/manifest.v2.csv`).
fn with_suffix(stem: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(stem.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::ManifestRecord;

    fn sample_records() -> RecordSet {
        vec![
            ManifestRecord::new("en", "us", 4000, "spk_1", "hello there", "clips/a.wav")
                .with_age("twenties"),
            ManifestRecord::new("fr", "paris", 2500, "spk_2", "bonjour", "clips/b.wav"),
        ]
        .into()
    }

    #[test]
    fn parse_accepts_known_tokens() {
        assert_eq!(ExportFormat::parse("csv").unwrap(), ExportFormat::Csv);
        assert_eq!(ExportFormat::parse("json").unwrap(), ExportFormat::JsonLines);
        assert_eq!(ExportFormat::parse("jsonl").unwrap(), ExportFormat::JsonLines);
        assert_eq!(ExportFormat::parse("hf").unwrap(), ExportFormat::HfDataset);
        assert!(matches!(
            ExportFormat::parse("parquet"),
            Err(VoxmanError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn with_suffix_keeps_dots_in_the_stem() {
        assert_eq!(
            with_suffix(Path::new("out/manifest.v2"), ".csv"),
            PathBuf::from("out/manifest.v2.csv")
        );
        assert_eq!(
            with_suffix(Path::new("out/manifest"), "_hf"),
            PathBuf::from("out/manifest_hf")
        );
    }

    #[test]
    fn empty_format_list_is_rejected() {
        let temp = tempfile::tempdir().expect("tempdir");
        let stem = temp.path().join("out/manifest");
        let result = export_record_set(&sample_records(), &stem, &[]);
        assert!(matches!(result, Err(VoxmanError::UnsupportedFormat(_))));
    }

    #[test]
    fn parent_directory_creation_is_idempotent() {
        let temp = tempfile::tempdir().expect("tempdir");
        let stem = temp.path().join("exports/nested/manifest");

        export_record_set(&sample_records(), &stem, &[ExportFormat::Csv]).expect("first run");
        export_record_set(&sample_records(), &stem, &[ExportFormat::Csv]).expect("second run");

        assert!(with_suffix(&stem, ".csv").is_file());
    }

    #[test]
    fn csv_and_jsonl_artifacts_are_written_with_reported_paths() {
        let temp = tempfile::tempdir().expect("tempdir");
        let stem = temp.path().join("manifest");

        let report = export_record_set(
            &sample_records(),
            &stem,
            &[ExportFormat::Csv, ExportFormat::JsonLines],
        )
        .expect("export");

        assert!(report.is_complete());
        assert_eq!(report.records, 2);
        for outcome in &report.outcomes {
            match &outcome.status {
                ExportStatus::Written { path } => assert!(path.is_file()),
                other => panic!("unexpected status: {other:?}"),
            }
        }
    }

    #[cfg(not(feature = "hf-parquet"))]
    #[test]
    fn hf_failure_does_not_abort_sibling_formats() {
        let temp = tempfile::tempdir().expect("tempdir");
        let stem = temp.path().join("manifest");

        let report = export_record_set(
            &sample_records(),
            &stem,
            &[
                ExportFormat::Csv,
                ExportFormat::HfDataset,
                ExportFormat::JsonLines,
            ],
        )
        .expect("export");

        assert_eq!(report.success_count(), 2);
        assert_eq!(report.failure_count(), 1);
        assert_eq!(report.failed_formats().collect::<Vec<_>>(), vec!["hf"]);

        // Both siblings still produced valid artifacts.
        assert!(with_suffix(&stem, ".csv").is_file());
        assert!(with_suffix(&stem, ".json").is_file());
    }

    #[cfg(feature = "hf-parquet")]
    #[test]
    fn hf_dataset_directory_is_written() {
        let temp = tempfile::tempdir().expect("tempdir");
        let stem = temp.path().join("manifest");

        let report = export_record_set(&sample_records(), &stem, &[ExportFormat::HfDataset])
            .expect("export");

        assert!(report.is_complete());
        assert!(with_suffix(&stem, "_hf").join("dataset_info.json").is_file());
    }

    #[test]
    fn reexport_overwrites_prior_artifacts() {
        let temp = tempfile::tempdir().expect("tempdir");
        let stem = temp.path().join("manifest");

        export_record_set(&sample_records(), &stem, &[ExportFormat::JsonLines]).expect("first");

        let one: RecordSet =
            vec![ManifestRecord::new("de", "berlin", 100, "x", "hallo", "d.wav")].into();
        export_record_set(&one, &stem, &[ExportFormat::JsonLines]).expect("second");

        let restored = io_jsonl::read_jsonl(&with_suffix(&stem, ".json")).expect("read back");
        assert_eq!(restored.len(), 1);
        assert_eq!(restored.get(0).unwrap().lang_code, "de");
    }
}
