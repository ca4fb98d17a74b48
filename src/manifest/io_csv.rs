//! Manifest CSV reader and writer.
//!
//! The manifest source of truth is a delimited file with a header row and
//! one row per audio sample. Readers preserve row order, and the writer
//! emits fields in the stable declaration order of
//! [`ManifestRecord`](super::ManifestRecord).
//!
//! Empty `age`/`gender` cells deserialize to `None` and serialize back to
//! empty cells, so a read-write cycle reproduces the original file shape.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use super::model::{ManifestRecord, RecordSet};
use crate::error::VoxmanError;

/// Column names in the declared field order of [`ManifestRecord`].
///
/// The serde-based writer only emits the header alongside a first row, so
/// empty sets write this record explicitly; the artifact must carry a
/// header either way.
const HEADER: [&str; 8] = [
    "lang_code",
    "accents",
    "duration_ms",
    "age",
    "gender",
    "client_id",
    "sentence",
    "converted_path",
];

/// Reads a record set from a manifest CSV file.
///
/// # Errors
/// Returns [`VoxmanError::ManifestRead`] if the file cannot be opened and
/// [`VoxmanError::ManifestParse`] if a row is malformed or a required field
/// is missing.
pub fn read_manifest_csv(path: &Path) -> Result<RecordSet, VoxmanError> {
    let file = File::open(path).map_err(|source| VoxmanError::ManifestRead {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = RecordSet::new();

    for result in csv_reader.deserialize() {
        let record: ManifestRecord = result.map_err(|source| VoxmanError::ManifestParse {
            path: path.to_path_buf(),
            source,
        })?;
        records.push(record);
    }

    Ok(records)
}

/// Writes a record set to a manifest CSV file, header first, one row per
/// record, preserving record order.
///
/// Overwrites any existing file at `path`.
pub fn write_manifest_csv(path: &Path, records: &RecordSet) -> Result<(), VoxmanError> {
    let file = File::create(path).map_err(VoxmanError::Io)?;
    let writer = BufWriter::new(file);

    let mut csv_writer = csv::Writer::from_writer(writer);
    if records.is_empty() {
        csv_writer
            .write_record(HEADER)
            .map_err(|source| VoxmanError::CsvWrite {
                path: path.to_path_buf(),
                source,
            })?;
    }
    for record in records {
        csv_writer
            .serialize(record)
            .map_err(|source| VoxmanError::CsvWrite {
                path: path.to_path_buf(),
                source,
            })?;
    }

    csv_writer
        .into_inner()
        .map_err(|e| VoxmanError::Io(e.into_error()))?
        .flush()
        .map_err(VoxmanError::Io)?;

    Ok(())
}

/// Reads a record set from a CSV string.
///
/// Useful for testing without file I/O.
pub fn from_csv_str(csv_str: &str) -> Result<RecordSet, VoxmanError> {
    let dummy_path = Path::new("<string>");
    let mut csv_reader = csv::Reader::from_reader(csv_str.as_bytes());
    let mut records = RecordSet::new();

    for result in csv_reader.deserialize() {
        let record: ManifestRecord = result.map_err(|source| VoxmanError::ManifestParse {
            path: dummy_path.to_path_buf(),
            source,
        })?;
        records.push(record);
    }

    Ok(records)
}

/// Writes a record set to a CSV string.
///
/// Useful for testing without file I/O.
pub fn to_csv_string(records: &RecordSet) -> Result<String, VoxmanError> {
    let dummy_path = Path::new("<string>");
    let mut csv_writer = csv::Writer::from_writer(Vec::new());

    if records.is_empty() {
        csv_writer
            .write_record(HEADER)
            .map_err(|source| VoxmanError::CsvWrite {
                path: dummy_path.to_path_buf(),
                source,
            })?;
    }
    for record in records {
        csv_writer
            .serialize(record)
            .map_err(|source| VoxmanError::CsvWrite {
                path: dummy_path.to_path_buf(),
                source,
            })?;
    }

    let bytes = csv_writer
        .into_inner()
        .map_err(|e| VoxmanError::Io(e.into_error()))?;

    String::from_utf8(bytes).map_err(|e| {
        VoxmanError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("Invalid UTF-8 in output: {}", e),
        ))
    })
}
