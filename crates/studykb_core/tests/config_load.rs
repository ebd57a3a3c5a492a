use std::path::PathBuf;
use studykb_core::{ConfigError, KbConfig};

#[test]
fn loads_explicit_file_with_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("studykb.toml");
    std::fs::write(
        &path,
        "root = \"kb\"\nindex_file = \"README-INDEX.md\"\nauto_commit = false\nlog_level = \"warn\"\n",
    )
    .unwrap();

    let config = KbConfig::load(Some(&path)).unwrap();
    assert_eq!(config.root, PathBuf::from("kb"));
    assert_eq!(config.index_path(), PathBuf::from("kb").join("README-INDEX.md"));
    assert!(!config.auto_commit);
    assert_eq!(config.log_level, "warn");
    assert_eq!(config.log_dir, None);
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = KbConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn malformed_file_reports_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "root = [").unwrap();

    let err = KbConfig::load(Some(&path)).unwrap_err();
    match err {
        ConfigError::Parse { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}
