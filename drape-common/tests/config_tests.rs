//! Tests for root folder resolution priority
//!
//! Order: CLI argument > environment variable > TOML config file > OS default.
//! Tests that touch the process environment run serially.

use drape_common::config::{default_root_folder, resolve_root_folder_from};
use serial_test::serial;
use std::path::PathBuf;
use tempfile::TempDir;

const TEST_ENV: &str = "DRAPE_ROOT_CONFIG_TEST";

fn write_config(dir: &TempDir, root: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, format!("root_folder = \"{}\"\n", root)).unwrap();
    path
}

#[test]
#[serial]
fn test_cli_argument_wins() {
    std::env::set_var(TEST_ENV, "/from/env");
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "/from/toml");

    let resolved = resolve_root_folder_from(Some("/from/cli"), TEST_ENV, Some(&config));

    std::env::remove_var(TEST_ENV);
    assert_eq!(resolved, PathBuf::from("/from/cli"));
}

#[test]
#[serial]
fn test_env_beats_config_file() {
    std::env::set_var(TEST_ENV, "/from/env");
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "/from/toml");

    let resolved = resolve_root_folder_from(None, TEST_ENV, Some(&config));

    std::env::remove_var(TEST_ENV);
    assert_eq!(resolved, PathBuf::from("/from/env"));
}

#[test]
#[serial]
fn test_config_file_used_without_env() {
    std::env::remove_var(TEST_ENV);
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "/from/toml");

    let resolved = resolve_root_folder_from(None, TEST_ENV, Some(&config));

    assert_eq!(resolved, PathBuf::from("/from/toml"));
}

#[test]
#[serial]
fn test_falls_back_to_os_default() {
    std::env::remove_var(TEST_ENV);
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.toml");

    let resolved = resolve_root_folder_from(None, TEST_ENV, Some(&missing));

    assert_eq!(resolved, default_root_folder());
}
