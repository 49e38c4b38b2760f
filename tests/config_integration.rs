//! Configuration loading integration tests
//!
//! Exercises the full precedence chain: defaults, TOML file, environment
//! overrides. Runs in its own process, so environment mutations here
//! cannot interfere with the library's unit tests.

use murugan_billing_config::{ConfigLoader, ENV_HTTPS_ENABLED, ENV_UPI_ID, Settings};
use pretty_assertions::assert_eq;
use std::io::Write;
use std::sync::{Mutex, MutexGuard};
use tempfile::NamedTempFile;

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_guard() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

fn clear_overrides() {
    unsafe {
        std::env::remove_var(ENV_UPI_ID);
        std::env::remove_var(ENV_HTTPS_ENABLED);
    }
}

#[test]
fn defaults_when_no_sources_present() {
    let _guard = env_guard();
    clear_overrides();

    let loader = ConfigLoader::new();
    let settings = loader.load(None).unwrap();

    assert_eq!(settings, Settings::default());
}

#[test]
fn env_overrides_take_precedence_over_file() {
    let _guard = env_guard();
    clear_overrides();

    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(
        temp_file,
        r#"
[payment]
upi_id = "file@upi"

[restaurant]
name = "File Restaurant"
        "#
    )
    .unwrap();

    unsafe {
        std::env::set_var(ENV_UPI_ID, "env@upi");
        std::env::set_var(ENV_HTTPS_ENABLED, "false");
    }

    let loader = ConfigLoader::new();
    let settings = loader.load(Some(temp_file.path())).unwrap();

    // Environment wins over the file for the two overridable fields
    assert_eq!(settings.payment.upi_id, "env@upi");
    assert!(!settings.security.enable_https);
    // The file still supplies everything else
    assert_eq!(settings.restaurant.name, "File Restaurant");

    clear_overrides();
}

#[test]
fn file_value_survives_when_env_absent() {
    let _guard = env_guard();
    clear_overrides();

    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(
        temp_file,
        r#"
[payment]
upi_id = "file@upi"
        "#
    )
    .unwrap();

    let loader = ConfigLoader::new();
    let settings = loader.load(Some(temp_file.path())).unwrap();

    assert_eq!(settings.payment.upi_id, "file@upi");
}

#[test]
fn https_enabled_for_any_value_but_false() {
    let _guard = env_guard();
    clear_overrides();

    let loader = ConfigLoader::new();
    for value in ["true", "1", "False", "off"] {
        unsafe {
            std::env::set_var(ENV_HTTPS_ENABLED, value);
        }
        let settings = loader.from_env_only();
        assert!(settings.security.enable_https, "value {value:?}");
    }

    unsafe {
        std::env::set_var(ENV_HTTPS_ENABLED, "false");
    }
    let settings = loader.from_env_only();
    assert!(!settings.security.enable_https);

    clear_overrides();
}

#[test]
fn repeated_loads_are_equal() {
    let _guard = env_guard();
    clear_overrides();
    unsafe {
        std::env::set_var(ENV_UPI_ID, "repeat@upi");
    }

    let loader = ConfigLoader::new();
    let first = loader.load(None).unwrap();
    let second = loader.load(None).unwrap();

    assert_eq!(first, second);
    // Each load hands out an independent owned record
    let mut mutated = first.clone();
    mutated.payment.merchant_name = "Someone Else".to_string();
    assert_eq!(loader.load(None).unwrap(), second);

    clear_overrides();
}
