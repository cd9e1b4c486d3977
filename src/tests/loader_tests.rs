//! Tests for loading word lists from disk.

use super::test_utils::TestFixture;
use crate::config::loader::LoaderConfig;
use crate::data_structures::prefix_index::{PrefixIndex, Prediction};
use crate::error::DictError;
use crate::loader::{BulkLoader, LoadReport};

/// Test the two-line example: alpha ranks ahead of alphabet.
#[test]
fn test_load_path_ranks_loaded_words() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.create_file("dict.txt", "alpha 10\nalphabet 2\n").unwrap();

    let mut index = PrefixIndex::new();
    let report = BulkLoader::default().load_path(&mut index, &path).unwrap();

    assert_eq!(report, LoadReport { records: 2, skipped: 0 });
    assert_eq!(
        index.predict("a", 10),
        vec![Prediction::new("alpha", 10), Prediction::new("alphabet", 2)]
    );
}

/// Test that loading the same list twice accumulates frequencies.
#[test]
fn test_load_twice_accumulates() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.create_file("dict.txt", "Word 3\nword\n").unwrap();

    let mut index = PrefixIndex::new();
    let loader = BulkLoader::default();
    loader.load_path(&mut index, &path).unwrap();
    loader.load_path(&mut index, &path).unwrap();

    assert_eq!(index.len(), 1);
    assert_eq!(index.frequency("word"), Some(8));
}

/// Test that the configured default frequency applies to bare words.
#[test]
fn test_configured_default_frequency() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.create_file("dict.txt", "bare\nbad x\nset 2\n").unwrap();

    let loader = BulkLoader::new(LoaderConfig {
        default_frequency: 7,
        ..LoaderConfig::default()
    });
    let (records, report) = loader.read_path(&path).unwrap();

    assert_eq!(report.records, 3);
    let frequencies: Vec<i64> = records.iter().map(|r| r.frequency).collect();
    assert_eq!(frequencies, vec![7, 7, 2]);
}

/// Test parallel loading of several lists into one index.
#[test]
fn test_load_all_merges_lists() {
    let fixture = TestFixture::new().unwrap();
    let first = fixture.create_file("a.txt", "shared 2\nonly_a 1\n\n").unwrap();
    let second = fixture.create_file("b.txt", "shared 3\nonly_b 4\n").unwrap();

    let (index, report) = BulkLoader::default().load_all(&[first, second]).unwrap();

    assert_eq!(report, LoadReport { records: 4, skipped: 1 });
    assert_eq!(index.frequency("shared"), Some(5));
    assert!(index.contains("only_a"));
    assert!(index.contains("only_b"));
}

/// Test that one missing list fails the whole parallel load.
#[test]
fn test_load_all_reports_missing_list() {
    let fixture = TestFixture::new().unwrap();
    let present = fixture.create_file("a.txt", "word 1\n").unwrap();
    let missing = fixture.temp_dir.path().join("missing.txt");

    let result = BulkLoader::default().load_all(&[present, missing.clone()]);

    match result {
        Err(DictError::Load { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected load error, got {other:?}"),
    }
}
