//! Session-scoped manifest storage.
//!
//! The manifest is loaded once per session and held read-only thereafter;
//! filtering and export both operate on derived copies and never mutate the
//! store. Caching is explicit and lifecycle-scoped: [`RecordStore::reload`]
//! is the only invalidation point, there is no implicit global cache.

use std::path::{Path, PathBuf};

use crate::error::VoxmanError;
use crate::manifest::{io_csv, RecordSet};

/// Holds the full manifest as an ordered record set.
#[derive(Clone, Debug)]
pub struct RecordStore {
    path: PathBuf,
    records: RecordSet,
}

impl RecordStore {
    /// Loads the manifest CSV at `path`.
    ///
    /// # Errors
    /// A missing or unreadable manifest is fatal
    /// ([`VoxmanError::ManifestRead`]): no records exist to operate on.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, VoxmanError> {
        let path = path.into();
        let records = io_csv::read_manifest_csv(&path)?;
        Ok(Self { path, records })
    }

    /// The loaded records, in source row order.
    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    /// The manifest path this store was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of records in the manifest.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the manifest holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Re-reads the manifest from its source path, replacing the held
    /// records. On failure the store keeps its previous contents.
    pub fn reload(&mut self) -> Result<(), VoxmanError> {
        self.records = io_csv::read_manifest_csv(&self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const MANIFEST: &str =
        "lang_code,accents,duration_ms,age,gender,client_id,sentence,converted_path\n\
         en,us,4000,twenties,female,spk_1,hello there,clips/a.wav\n\
         fr,paris,2500,,,spk_2,bonjour,clips/b.wav\n";

    #[test]
    fn load_reads_records_in_order() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("manifest.csv");
        fs::write(&path, MANIFEST).expect("write manifest");

        let store = RecordStore::load(&path).expect("load");
        assert_eq!(store.len(), 2);
        assert_eq!(store.records().get(0).unwrap().lang_code, "en");
        assert_eq!(store.path(), path);
    }

    #[test]
    fn missing_manifest_is_a_load_failure() {
        let result = RecordStore::load("does/not/exist.csv");
        assert!(matches!(result, Err(VoxmanError::ManifestRead { .. })));
    }

    #[test]
    fn reload_picks_up_source_changes() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("manifest.csv");
        fs::write(&path, MANIFEST).expect("write manifest");

        let mut store = RecordStore::load(&path).expect("load");
        assert_eq!(store.len(), 2);

        fs::write(
            &path,
            "lang_code,accents,duration_ms,age,gender,client_id,sentence,converted_path\n\
             de,berlin,100,,,x,hallo,clips/c.wav\n",
        )
        .expect("rewrite manifest");

        store.reload().expect("reload");
        assert_eq!(store.len(), 1);
        assert_eq!(store.records().get(0).unwrap().lang_code, "de");
    }
}
