//! Integration tests for document loading.

use flate2::write::GzEncoder;
use flate2::Compression;
use proppath::file::loader::load_document;
use proppath::navigator::Navigator;
use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_yaml_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "user:\n  name: Alice\n  tags: [a, b]\n").unwrap();

    let doc = load_document(temp_file.path()).unwrap();
    assert_eq!(doc["user"]["name"].as_str(), Some("Alice"));
}

#[test]
fn test_load_json_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, r#"{{"items": [{{"id": 7}}]}}"#).unwrap();

    let doc = load_document(temp_file.path()).unwrap();
    let navigator = Navigator::default();
    assert_eq!(navigator.get(&doc, "items[0].id").unwrap().as_i64(), Some(7));
}

#[test]
fn test_load_gzipped_file() {
    let dir = TempDir::new().unwrap();
    let gz_path = dir.path().join("doc.yaml.gz");

    let file = fs::File::create(&gz_path).unwrap();
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder.write_all(b"labels:\n  color: red\n").unwrap();
    encoder.finish().unwrap();

    let doc = load_document(&gz_path).unwrap();
    let navigator = Navigator::default();
    assert_eq!(
        navigator.get(&doc, "labels(color)").unwrap().as_str(),
        Some("red")
    );
}

#[test]
fn test_load_missing_file() {
    let result = load_document("/nonexistent/doc.yaml");
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Failed to read file"));
}

#[test]
fn test_load_empty_file() {
    let temp_file = NamedTempFile::new().unwrap();
    let result = load_document(temp_file.path());
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("No document found"));
}
