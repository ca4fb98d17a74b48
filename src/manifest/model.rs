//! Core record model for the voxman manifest.
//!
//! This module defines the canonical in-memory representation of the speech
//! corpus manifest. Every reader produces a [`RecordSet`] and every writer
//! consumes one, so all format conversions work through these two types.

use serde::{Deserialize, Serialize};

/// One row of the corpus manifest: a single audio sample with its
/// language/dialect/demographic metadata.
///
/// Records are immutable once loaded. Field declaration order is the stable
/// column order used by the CSV writer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ManifestRecord {
    /// Language code (e.g., "en", "fr"). Required, categorical.
    pub lang_code: String,

    /// Dialect/accent label. Required; only meaningful jointly with
    /// `lang_code`.
    pub accents: String,

    /// Sample duration in milliseconds.
    pub duration_ms: u64,

    /// Age group of the speaker, when reported. Absent values never appear
    /// in filter domains.
    pub age: Option<String>,

    /// Gender of the speaker, when reported. Informational only.
    pub gender: Option<String>,

    /// Opaque speaker identifier; the same speaker may recur across rows.
    pub client_id: String,

    /// The spoken sentence. Display-only free text.
    pub sentence: String,

    /// Locator of the converted audio file. The core never checks that it
    /// exists; that is the display layer's concern.
    pub converted_path: String,
}

impl ManifestRecord {
    /// Creates a record with the required fields; optional metadata starts
    /// empty.
    pub fn new(
        lang_code: impl Into<String>,
        accents: impl Into<String>,
        duration_ms: u64,
        client_id: impl Into<String>,
        sentence: impl Into<String>,
        converted_path: impl Into<String>,
    ) -> Self {
        Self {
            lang_code: lang_code.into(),
            accents: accents.into(),
            duration_ms,
            age: None,
            gender: None,
            client_id: client_id.into(),
            sentence: sentence.into(),
            converted_path: converted_path.into(),
        }
    }

    /// Sets the speaker's age group.
    pub fn with_age(mut self, age: impl Into<String>) -> Self {
        self.age = Some(age.into());
        self
    }

    /// Sets the speaker's gender.
    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }
}

/// An ordered sequence of manifest records.
///
/// Insertion order is preserved from the source load and is significant:
/// sample selection indexes positionally into it, and filtering is stable
/// (the output keeps the relative order of the input). The empty set is a
/// valid state that callers are expected to branch on.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordSet(pub Vec<ManifestRecord>);

impl RecordSet {
    /// Creates an empty record set.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Number of records in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the set holds no records.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the records in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ManifestRecord> {
        self.0.iter()
    }

    /// Returns the record at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&ManifestRecord> {
        self.0.get(index)
    }

    /// Appends a record, preserving insertion order.
    pub fn push(&mut self, record: ManifestRecord) {
        self.0.push(record);
    }
}

impl From<Vec<ManifestRecord>> for RecordSet {
    fn from(records: Vec<ManifestRecord>) -> Self {
        Self(records)
    }
}

impl FromIterator<ManifestRecord> for RecordSet {
    fn from_iter<I: IntoIterator<Item = ManifestRecord>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a ManifestRecord;
    type IntoIter = std::slice::Iter<'a, ManifestRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for RecordSet {
    type Item = ManifestRecord;
    type IntoIter = std::vec::IntoIter<ManifestRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_builder_pattern() {
        let record = ManifestRecord::new("en", "us", 4000, "spk_1", "hello there", "clips/a.wav")
            .with_age("twenties")
            .with_gender("female");

        assert_eq!(record.lang_code, "en");
        assert_eq!(record.age.as_deref(), Some("twenties"));
        assert_eq!(record.gender.as_deref(), Some("female"));
    }

    #[test]
    fn test_record_set_preserves_insertion_order() {
        let set: RecordSet = vec![
            ManifestRecord::new("en", "us", 4000, "a", "one", "1.wav"),
            ManifestRecord::new("fr", "paris", 2000, "b", "deux", "2.wav"),
            ManifestRecord::new("en", "gb", 9000, "c", "three", "3.wav"),
        ]
        .into();

        assert_eq!(set.len(), 3);
        let langs: Vec<&str> = set.iter().map(|r| r.lang_code.as_str()).collect();
        assert_eq!(langs, vec!["en", "fr", "en"]);
    }

    #[test]
    fn test_empty_set_is_distinguishable() {
        let set = RecordSet::new();
        assert!(set.is_empty());
        assert_eq!(set.get(0), None);
    }
}
