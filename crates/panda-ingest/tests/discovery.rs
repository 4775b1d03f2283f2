use std::fs;

use panda_ingest::{IngestError, discover_county_files, file_prefix, list_data_files};

#[test]
fn lists_files_without_dotfiles_sorted() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("POL_20250630.txt"), "").expect("write");
    fs::write(dir.path().join("ALA_20250630.txt"), "").expect("write");
    fs::write(dir.path().join(".DS_Store"), "").expect("write");
    fs::create_dir(dir.path().join("nested")).expect("mkdir");

    let files = list_data_files(dir.path()).expect("list");
    let names: Vec<_> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["ALA_20250630.txt", "POL_20250630.txt"]);
}

#[test]
fn discovers_accepted_prefixes_only() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("POL_20250630.txt"), "").expect("write");
    fs::write(dir.path().join("README.md"), "").expect("write");

    let files = discover_county_files(dir.path(), |code| code == "POL").expect("discover");
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].code, "POL");
}

#[test]
fn missing_directory_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = list_data_files(&dir.path().join("absent")).unwrap_err();
    assert!(matches!(err, IngestError::DirectoryNotFound { .. }));
}

#[test]
fn prefix_needs_three_characters() {
    assert_eq!(file_prefix(std::path::Path::new("/x/HIL.csv")), Some("HIL".to_string()));
    assert_eq!(file_prefix(std::path::Path::new("/x/ab")), None);
}
