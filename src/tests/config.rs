use super::Config;
use crate::error::Error;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = Config::load_from(&dir.path().join("relnotes.toml")).unwrap();
    assert!(!cfg.trailing_section);
}

#[test]
fn test_empty_file_uses_defaults() {
    let file = NamedTempFile::new().unwrap();
    let cfg = Config::load_from(file.path()).unwrap();
    assert_eq!(cfg, Config::default());
}

#[test]
fn test_trailing_section_enabled() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "trailing_section = true").unwrap();

    let cfg = Config::load_from(file.path()).unwrap();
    assert!(cfg.trailing_section);
}

#[test]
fn test_malformed_file_is_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "trailing_section = \"sometimes\"").unwrap();

    assert!(matches!(
        Config::load_from(file.path()),
        Err(Error::Config { .. })
    ));
}

#[test]
fn test_misspelled_key_is_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "trailing_sectoin = true").unwrap();

    assert!(matches!(
        Config::load_from(file.path()),
        Err(Error::Config { .. })
    ));
}
