//! Core TOML config loading.

use std::path::Path;

use tracing::{info, warn};
use vsplit_common::ConfigError;

use crate::schema::VsplitConfig;
use crate::validation;

use super::paths::create_default_config;

/// Load config from a specific TOML file path.
///
/// Missing fields take their defaults. If validation fails, a warning is
/// logged and the default config is returned.
pub fn load_from_path(path: &Path) -> Result<VsplitConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: VsplitConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
        warn!("falling back to default config");
        return Ok(VsplitConfig::default());
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Like [`load_from_path`], but a missing file is created from the
/// template and defaults are returned.
pub fn load_or_create(path: &Path) -> Result<VsplitConfig, ConfigError> {
    match load_from_path(path) {
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(path)?;
            Ok(VsplitConfig::default())
        }
        other => other,
    }
}
