use aotyfm::Error;
use aotyfm::config::{Config, DEFAULT_RATE_LIMIT_MS};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempdir().unwrap();

    let config = Config::load(&dir.path().join("config.toml")).unwrap();

    assert_eq!(config.contact, None);
    assert_eq!(config.rate_limit_ms(), DEFAULT_RATE_LIMIT_MS);
}

#[test]
fn test_values_read_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "contact = \"someone@example.com\"\nrate_limit_ms = 2000\n").unwrap();

    let config = Config::load(&path).unwrap();

    assert_eq!(config.contact.as_deref(), Some("someone@example.com"));
    assert_eq!(config.rate_limit_ms(), 2000);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "contact = \"someone@example.com\"\n").unwrap();

    let config = Config::load(&path).unwrap();

    assert_eq!(config.contact.as_deref(), Some("someone@example.com"));
    assert_eq!(config.rate_limit_ms(), DEFAULT_RATE_LIMIT_MS);
}

#[test]
fn test_invalid_toml_is_a_config_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "contact = [not toml").unwrap();

    let result = Config::load(&path);

    assert!(matches!(result, Err(Error::Config(_))));
}
