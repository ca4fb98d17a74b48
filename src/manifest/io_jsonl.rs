//! JSON-lines reader and writer for record sets.
//!
//! One self-describing JSON object per line, field-name/value pairs, record
//! order preserved. This mirrors the common "records, lines" manifest
//! interchange shape used by downstream tooling.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use super::model::{ManifestRecord, RecordSet};
use crate::error::VoxmanError;

/// Writes a record set as JSON lines, one object per record, in set order.
///
/// Overwrites any existing file at `path`.
pub fn write_jsonl(path: &Path, records: &RecordSet) -> Result<(), VoxmanError> {
    let file = File::create(path).map_err(VoxmanError::Io)?;
    let mut writer = BufWriter::new(file);

    for record in records {
        serde_json::to_writer(&mut writer, record).map_err(|source| VoxmanError::JsonlWrite {
            path: path.to_path_buf(),
            source,
        })?;
        writer.write_all(b"\n").map_err(VoxmanError::Io)?;
    }

    writer.flush().map_err(VoxmanError::Io)?;
    Ok(())
}

/// Reads a record set from a JSON-lines file, preserving line order.
///
/// Blank lines are skipped. Line numbers in parse errors are 1-based.
pub fn read_jsonl(path: &Path) -> Result<RecordSet, VoxmanError> {
    let file = File::open(path).map_err(VoxmanError::Io)?;
    let reader = BufReader::new(file);

    let mut records = RecordSet::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(VoxmanError::Io)?;
        if line.trim().is_empty() {
            continue;
        }

        let record: ManifestRecord =
            serde_json::from_str(&line).map_err(|source| VoxmanError::JsonlParse {
                path: path.to_path_buf(),
                line: idx + 1,
                source,
            })?;
        records.push(record);
    }

    Ok(records)
}

/// Writes a record set to a JSON-lines string.
///
/// Useful for testing without file I/O.
pub fn to_jsonl_string(records: &RecordSet) -> Result<String, VoxmanError> {
    let dummy_path = Path::new("<string>");
    let mut out = String::new();

    for record in records {
        let line = serde_json::to_string(record).map_err(|source| VoxmanError::JsonlWrite {
            path: dummy_path.to_path_buf(),
            source,
        })?;
        out.push_str(&line);
        out.push('\n');
    }

    Ok(out)
}

/// Reads a record set from a JSON-lines string.
///
/// Useful for testing without file I/O.
pub fn from_jsonl_str(jsonl: &str) -> Result<RecordSet, VoxmanError> {
    let dummy_path = Path::new("<string>");
    let mut records = RecordSet::new();

    for (idx, line) in jsonl.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let record: ManifestRecord =
            serde_json::from_str(line).map_err(|source| VoxmanError::JsonlParse {
                path: dummy_path.to_path_buf(),
                line: idx + 1,
                source,
            })?;
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> RecordSet {
        vec![
            ManifestRecord::new("en", "us", 4000, "spk_1", "hello there", "clips/a.wav")
                .with_age("twenties"),
            ManifestRecord::new("fr", "paris", 2500, "spk_2", "bonjour", "clips/b.wav"),
        ]
        .into()
    }

    #[test]
    fn test_one_object_per_line_in_order() {
        let jsonl = to_jsonl_string(&sample_records()).expect("serialize failed");
        let lines: Vec<&str> = jsonl.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\"lang_code\":\"en\""));
        assert!(lines[1].contains("\"lang_code\":\"fr\""));
    }

    #[test]
    fn test_absent_age_serializes_as_null() {
        let jsonl = to_jsonl_string(&sample_records()).expect("serialize failed");
        let lines: Vec<&str> = jsonl.lines().collect();

        assert!(lines[0].contains("\"age\":\"twenties\""));
        assert!(lines[1].contains("\"age\":null"));
    }

    #[test]
    fn test_jsonl_roundtrip() {
        let original = sample_records();
        let jsonl = to_jsonl_string(&original).expect("serialize failed");
        let restored = from_jsonl_str(&jsonl).expect("parse failed");

        assert_eq!(original, restored);
    }

    #[test]
    fn test_parse_error_reports_line_number() {
        let jsonl = "{\"lang_code\":\"en\",\"accents\":\"us\",\"duration_ms\":1,\"age\":null,\
                     \"gender\":null,\"client_id\":\"a\",\"sentence\":\"x\",\"converted_path\":\"p\"}\n\
                     not json\n";

        match from_jsonl_str(jsonl) {
            Err(VoxmanError::JsonlParse { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let original = sample_records();
        let mut jsonl = to_jsonl_string(&original).expect("serialize failed");
        jsonl.push('\n');

        let restored = from_jsonl_str(&jsonl).expect("parse failed");
        assert_eq!(restored.len(), 2);
    }
}
