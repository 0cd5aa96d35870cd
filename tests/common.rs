#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn tt() -> Command {
    cargo_bin_cmd!("tasktimer")
}

/// Create a unique test store path inside the system temp dir and remove any
/// existing file
pub fn setup_test_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tasktimer.csv", name));
    let store_path = path.to_string_lossy().to_string();
    fs::remove_file(&store_path).ok();
    store_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Seed a store file with a small dataset useful for many tests:
/// two tasks, three sessions, one legacy row and one malformed row.
pub fn seed_mixed_store(store_path: &str) {
    let content = "\
2024-01-01,09:00:00,2024-01-01,09:30:00,writing,draft,1800
2024-01-01,10:00:00,writing,old format,600
garbage,row
2024-01-02,14:00:00,2024-01-02,14:10:00,email,inbox zero,600
";
    fs::write(store_path, content).expect("seed store");
}

/// Seed a store through the public library API (round-trips the writer).
pub fn seed_via_api(store_path: &str) {
    use chrono::NaiveDate;
    use tasktimer::models::record::SessionRecord;
    use tasktimer::store::SessionStore;

    let store = SessionStore::new(store_path);
    let start = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    let rec = SessionRecord::new(start, 1800, "writing".to_string(), "draft".to_string());
    store.append(&rec).expect("append seed record");
}
