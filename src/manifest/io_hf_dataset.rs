//! Dataset-directory writer for record sets.
//!
//! Produces an on-disk, directory-rooted serialization suitable for
//! downstream ML tooling: a Parquet shard under `data/` plus a
//! `dataset_info.json` describing the column schema and row count.
//!
//! This module is feature-gated (`hf-parquet`) because Parquet encoding
//! pulls in heavier dependencies than the CSV and JSONL paths. Without the
//! feature, the export pipeline reports the format as failed instead of
//! refusing to build.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{ArrayRef, StringArray, UInt64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

use super::model::RecordSet;
use crate::error::VoxmanError;

/// File name of the single data shard written under `data/`.
pub const SHARD_FILE_NAME: &str = "train-00000-of-00001.parquet";

/// Writes a record set as a dataset directory rooted at `dir`.
///
/// Layout:
/// - `<dir>/dataset_info.json`: schema description and row count
/// - `<dir>/data/train-00000-of-00001.parquet`: the records
///
/// Re-running with the same `dir` overwrites both artifacts.
pub fn write_hf_dataset(dir: &Path, records: &RecordSet) -> Result<(), VoxmanError> {
    let data_dir = dir.join("data");
    fs::create_dir_all(&data_dir).map_err(VoxmanError::Io)?;

    let schema = Arc::new(record_schema());
    let batch = record_batch(&schema, records).map_err(|message| VoxmanError::HfWrite {
        path: dir.to_path_buf(),
        message,
    })?;

    let shard_path = data_dir.join(SHARD_FILE_NAME);
    let file = fs::File::create(&shard_path).map_err(VoxmanError::Io)?;

    let mut writer =
        ArrowWriter::try_new(file, schema.clone(), None).map_err(|source| VoxmanError::HfWrite {
            path: shard_path.clone(),
            message: source.to_string(),
        })?;
    writer.write(&batch).map_err(|source| VoxmanError::HfWrite {
        path: shard_path.clone(),
        message: source.to_string(),
    })?;
    writer.close().map_err(|source| VoxmanError::HfWrite {
        path: shard_path.clone(),
        message: source.to_string(),
    })?;

    write_dataset_info(dir, &schema, records.len())
}

/// Arrow schema for manifest records: one column per record field, in the
/// declared field order. `age` and `gender` are the only nullable columns.
fn record_schema() -> Schema {
    Schema::new(vec![
        Field::new("lang_code", DataType::Utf8, false),
        Field::new("accents", DataType::Utf8, false),
        Field::new("duration_ms", DataType::UInt64, false),
        Field::new("age", DataType::Utf8, true),
        Field::new("gender", DataType::Utf8, true),
        Field::new("client_id", DataType::Utf8, false),
        Field::new("sentence", DataType::Utf8, false),
        Field::new("converted_path", DataType::Utf8, false),
    ])
}

fn record_batch(schema: &Arc<Schema>, records: &RecordSet) -> Result<RecordBatch, String> {
    let lang_code: ArrayRef = Arc::new(StringArray::from_iter_values(
        records.iter().map(|r| r.lang_code.as_str()),
    ));
    let accents: ArrayRef = Arc::new(StringArray::from_iter_values(
        records.iter().map(|r| r.accents.as_str()),
    ));
    let duration_ms: ArrayRef = Arc::new(UInt64Array::from_iter_values(
        records.iter().map(|r| r.duration_ms),
    ));
    let age: ArrayRef = Arc::new(StringArray::from_iter(
        records.iter().map(|r| r.age.as_deref()),
    ));
    let gender: ArrayRef = Arc::new(StringArray::from_iter(
        records.iter().map(|r| r.gender.as_deref()),
    ));
    let client_id: ArrayRef = Arc::new(StringArray::from_iter_values(
        records.iter().map(|r| r.client_id.as_str()),
    ));
    let sentence: ArrayRef = Arc::new(StringArray::from_iter_values(
        records.iter().map(|r| r.sentence.as_str()),
    ));
    let converted_path: ArrayRef = Arc::new(StringArray::from_iter_values(
        records.iter().map(|r| r.converted_path.as_str()),
    ));

    RecordBatch::try_new(
        schema.clone(),
        vec![
            lang_code,
            accents,
            duration_ms,
            age,
            gender,
            client_id,
            sentence,
            converted_path,
        ],
    )
    .map_err(|e| e.to_string())
}

fn write_dataset_info(dir: &Path, schema: &Schema, num_rows: usize) -> Result<(), VoxmanError> {
    let info_path = dir.join("dataset_info.json");

    let features: Vec<serde_json::Value> = schema
        .fields()
        .iter()
        .map(|field| {
            serde_json::json!({
                "name": field.name(),
                "dtype": format!("{:?}", field.data_type()),
                "nullable": field.is_nullable(),
            })
        })
        .collect();

    let info = serde_json::json!({
        "description": "voxman speech-corpus manifest export",
        "num_rows": num_rows,
        "features": features,
        "shards": [format!("data/{SHARD_FILE_NAME}")],
    });

    let file = fs::File::create(&info_path).map_err(VoxmanError::Io)?;
    serde_json::to_writer_pretty(file, &info).map_err(|source| VoxmanError::HfWrite {
        path: info_path,
        message: source.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::ManifestRecord;
    use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

    fn sample_records() -> RecordSet {
        vec![
            ManifestRecord::new("en", "us", 4000, "spk_1", "hello there", "clips/a.wav")
                .with_age("twenties"),
            ManifestRecord::new("en", "gb", 9000, "spk_2", "good morning", "clips/b.wav"),
            ManifestRecord::new("fr", "paris", 2500, "spk_3", "bonjour", "clips/c.wav")
                .with_gender("male"),
        ]
        .into()
    }

    #[test]
    fn writes_shard_and_info() {
        let temp = tempfile::tempdir().expect("tempdir");
        let dir = temp.path().join("manifest_hf");

        write_hf_dataset(&dir, &sample_records()).expect("write dataset");

        assert!(dir.join("dataset_info.json").is_file());
        assert!(dir.join("data").join(SHARD_FILE_NAME).is_file());

        let info: serde_json::Value = serde_json::from_reader(
            fs::File::open(dir.join("dataset_info.json")).expect("open info"),
        )
        .expect("parse info");
        assert_eq!(info["num_rows"], 3);
    }

    #[test]
    fn shard_roundtrips_row_count_and_nulls() {
        let temp = tempfile::tempdir().expect("tempdir");
        let dir = temp.path().join("manifest_hf");

        write_hf_dataset(&dir, &sample_records()).expect("write dataset");

        let file = fs::File::open(dir.join("data").join(SHARD_FILE_NAME)).expect("open shard");
        let reader = ParquetRecordBatchReaderBuilder::try_new(file)
            .expect("reader builder")
            .build()
            .expect("build reader");

        let batches: Vec<RecordBatch> = reader.map(|b| b.expect("read batch")).collect();
        let total_rows: usize = batches.iter().map(|b| b.num_rows()).sum();
        assert_eq!(total_rows, 3);

        // Second record has no age; null count over the age column is 2.
        let null_ages: usize = batches
            .iter()
            .map(|b| b.column_by_name("age").expect("age column").null_count())
            .sum();
        assert_eq!(null_ages, 2);
    }

    #[test]
    fn rewrite_overwrites_prior_artifacts() {
        let temp = tempfile::tempdir().expect("tempdir");
        let dir = temp.path().join("manifest_hf");

        write_hf_dataset(&dir, &sample_records()).expect("first write");

        let one: RecordSet =
            vec![ManifestRecord::new("de", "berlin", 100, "x", "hallo", "d.wav")].into();
        write_hf_dataset(&dir, &one).expect("second write");

        let info: serde_json::Value = serde_json::from_reader(
            fs::File::open(dir.join("dataset_info.json")).expect("open info"),
        )
        .expect("parse info");
        assert_eq!(info["num_rows"], 1);
    }
}
