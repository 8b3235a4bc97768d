//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use crate::schema::{LogLevel, VsplitConfig};
use std::path::Path;
use vsplit_common::ConfigError;
use vsplit_store::FormatRevision;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_vsplit_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[store]
path = "/var/lib/vsplit/store.bin"
format = "legacy"

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(
        config.store.path.as_deref(),
        Some(Path::new("/var/lib/vsplit/store.bin"))
    );
    assert_eq!(config.store.format, FormatRevision::Legacy);
    assert_eq!(config.logging.level, Some(LogLevel::Debug));
    // Defaults preserved
    assert_eq!(config.editor.canvas_width, 300.0);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    assert!(matches!(
        load_from_path(&path),
        Err(ConfigError::ParseError(_))
    ));
}

#[test]
fn unknown_format_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[store]\nformat = \"v3\"\n").unwrap();

    assert!(matches!(
        load_from_path(&path),
        Err(ConfigError::ParseError(_))
    ));
}

#[test]
fn load_config_with_invalid_values_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[editor]\ncanvas_width = 5\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config, VsplitConfig::default());
}

#[test]
fn load_or_create_writes_template() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sub").join("config.toml");

    let config = load_or_create(&path).unwrap();
    assert_eq!(config, VsplitConfig::default());
    assert!(path.exists());

    // The template itself parses to defaults.
    assert_eq!(load_from_path(&path).unwrap(), VsplitConfig::default());
}

#[test]
fn default_paths_live_in_config_dir() {
    let config = default_config_path().unwrap();
    assert!(config.ends_with("vsplit/config.toml"));
    let store = default_store_path().unwrap();
    assert!(store.ends_with("fakexrandr.bin"));
    assert_eq!(store.parent(), config.parent().and_then(Path::parent));
}
