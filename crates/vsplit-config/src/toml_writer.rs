//! Save a [`VsplitConfig`] back to disk, atomically.

use std::path::Path;

use vsplit_common::{write_atomic, ConfigError};

use crate::schema::VsplitConfig;

pub fn save_config_to_path(config: &VsplitConfig, path: &Path) -> Result<(), ConfigError> {
    let text = toml::to_string_pretty(config)
        .map_err(|e| ConfigError::ParseError(format!("failed to serialize config: {e}")))?;
    write_atomic(path, text.as_bytes()).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    tracing::debug!(path = %path.display(), "config saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::LogLevel;
    use crate::toml_loader::load_from_path;
    use tempfile::TempDir;
    use vsplit_store::FormatRevision;

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = VsplitConfig::default();
        config.store.path = Some(dir.path().join("store.bin"));
        config.store.format = FormatRevision::Legacy;
        config.editor.canvas_width = 640.0;
        config.logging.level = Some(LogLevel::Info);
        save_config_to_path(&config, &path).unwrap();

        assert_eq!(load_from_path(&path).unwrap(), config);
        assert!(!path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn defaults_serialize_without_optional_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        save_config_to_path(&VsplitConfig::default(), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("format = \"current\""));
        assert!(!text.contains("path ="));
        assert!(!text.contains("level ="));
    }
}
