// tests/config_tests.rs
use std::fs;

use appointment_schema::config::Config;
use appointment_schema::consts::{DEFAULT_LOCK_NAME, DEFAULT_SECRET_ENV, DEFAULT_VERSION_TABLE};
use appointment_schema::error::ConfigError;
use tempfile::tempdir;

#[test]
fn test_empty_file_gives_defaults() {
    let config = Config::from_toml("").unwrap();
    assert_eq!(config.database.path, "appointment.db");
    assert_eq!(config.database.version_table, DEFAULT_VERSION_TABLE);
    assert_eq!(config.crypto.secret_env, DEFAULT_SECRET_ENV);
    assert_eq!(config.locks.dir, "/tmp");
    assert_eq!(config.locks.name, DEFAULT_LOCK_NAME);
}

#[test]
fn test_partial_sections_keep_other_defaults() {
    let config = Config::from_toml(
        r#"
        [database]
        path = "/var/lib/appointment/app.db"

        [locks]
        name = "nightly"
        "#,
    )
    .unwrap();
    assert_eq!(config.database.path, "/var/lib/appointment/app.db");
    assert_eq!(config.database.version_table, DEFAULT_VERSION_TABLE);
    assert_eq!(config.locks.name, "nightly");
    assert_eq!(config.locks.dir, "/tmp");
}

#[test]
fn test_invalid_toml_is_reported() {
    assert!(matches!(
        Config::from_toml("[database\npath = 1"),
        Err(ConfigError::Toml(_))
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = Config::from_path(dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_from_path_reads_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("appointment.toml");
    fs::write(&path, "[database]\nversion_table = \"schema_version\"\n").unwrap();
    let config = Config::from_path(&path).unwrap();
    assert_eq!(config.version_table().unwrap().name(), "schema_version");
}

#[test]
fn test_bad_version_table_name_rejected() {
    let config = Config::from_toml("[database]\nversion_table = \"drop me\"").unwrap();
    assert!(config.version_table().is_err());
}

#[test]
fn test_secret_comes_from_named_env_var() {
    let config = Config::from_toml("[crypto]\nsecret_env = \"APPT_TEST_SECRET_PRESENT\"").unwrap();
    std::env::set_var("APPT_TEST_SECRET_PRESENT", "s3cret");
    assert!(config.secret().is_some());
    assert!(config.codec().is_available());
}

#[test]
fn test_missing_or_empty_secret_gives_unavailable_codec() {
    let config = Config::from_toml("[crypto]\nsecret_env = \"APPT_TEST_SECRET_ABSENT\"").unwrap();
    assert!(config.secret().is_none());
    assert!(!config.codec().is_available());

    let config = Config::from_toml("[crypto]\nsecret_env = \"APPT_TEST_SECRET_EMPTY\"").unwrap();
    std::env::set_var("APPT_TEST_SECRET_EMPTY", "");
    assert!(!config.codec().is_available());
}

#[test]
fn test_lock_uses_configured_dir_and_name() {
    let dir = tempdir().unwrap();
    let config = Config::from_toml(&format!(
        "[locks]\ndir = {:?}\nname = \"deploy\"",
        dir.path().display().to_string()
    ))
    .unwrap();
    let mutex = config.lock().unwrap();
    assert_eq!(mutex.path(), dir.path().join("deploy.lock"));
}
