#![allow(dead_code)]

use std::fs;
use std::path::Path;

/// A small manifest covering two languages, a missing age, and a missing
/// gender, for CLI and round-trip tests.
pub const SAMPLE_MANIFEST: &str =
    "lang_code,accents,duration_ms,age,gender,client_id,sentence,converted_path\n\
     en,us,4000,twenties,female,spk_1,hello there,clips/a.wav\n\
     en,us,9000,,male,spk_2,good morning,clips/b.wav\n\
     fr,paris,2500,thirties,,spk_3,bonjour,clips/c.wav\n";

pub fn write_sample_manifest(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    fs::write(path, SAMPLE_MANIFEST).expect("write manifest file");
}
