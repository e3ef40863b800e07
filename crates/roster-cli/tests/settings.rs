//! Tests for loading `roster.toml` settings.

use std::fs;
use std::path::{Path, PathBuf};

use roster_cli::config::Settings;
use roster_core::GenderPolicy;

#[test]
fn loads_explicit_settings_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.toml");
    fs::write(
        &path,
        "[import]\ngender_policy = \"lenient\"\n\n[export]\noutput_dir = \"exports\"\n",
    )
    .unwrap();

    let settings = Settings::load(Some(&path)).unwrap();
    assert_eq!(settings.import.gender_policy, GenderPolicy::Lenient);
    assert_eq!(
        settings.import_options(false).gender_policy,
        GenderPolicy::Lenient
    );
    assert_eq!(settings.output_dir(None), PathBuf::from("exports"));
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Settings::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
    assert!(format!("{err:#}").contains("absent.toml"));
}

#[test]
fn unknown_policy_is_rejected() {
    let err = Settings::from_toml("[import]\ngender_policy = \"loose\"\n").unwrap_err();
    assert!(format!("{err:#}").contains("parse settings"));
}

#[test]
fn defaults_write_to_working_directory() {
    let settings = Settings::default();
    assert_eq!(settings.output_dir(None), Path::new("."));
    assert_eq!(
        settings.import_options(false).gender_policy,
        GenderPolicy::Strict
    );
}
