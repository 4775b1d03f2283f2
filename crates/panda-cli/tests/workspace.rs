#![allow(missing_docs)]

use std::fs;

use panda_cli::workspace::Workspace;

#[test]
fn lays_out_year_directories() {
    let base = tempfile::tempdir().expect("temp dir");
    let workspace = Workspace::new(base.path(), 2025);
    workspace.create_dirs().expect("create dirs");

    assert!(base.path().join("2025/VoterDetail").is_dir());
    assert!(base.path().join("2025/load").is_dir());
    assert_eq!(workspace.load_file("POL"), base.path().join("2025/load/POL.csv"));
}

#[test]
fn purge_removes_files_but_keeps_dotfiles() {
    let base = tempfile::tempdir().expect("temp dir");
    let workspace = Workspace::new(base.path(), 2025);
    workspace.create_dirs().expect("create dirs");
    fs::write(workspace.raw_dir().join("POL_20250630.txt"), "x").expect("write");
    fs::write(workspace.raw_dir().join(".keep"), "").expect("write");
    fs::write(workspace.load_file("POL"), "x").expect("write");

    assert_eq!(workspace.purge().expect("purge"), 2);
    assert!(workspace.raw_dir().join(".keep").exists());
    assert!(!workspace.load_file("POL").exists());
    assert_eq!(workspace.purge().expect("purge again"), 0);
}

#[test]
fn purge_without_directories_is_a_no_op() {
    let base = tempfile::tempdir().expect("temp dir");
    let workspace = Workspace::new(base.path(), 2014);
    assert_eq!(workspace.purge().expect("purge"), 0);
}
