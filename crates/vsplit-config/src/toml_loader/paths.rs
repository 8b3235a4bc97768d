//! Config path resolution and default file creation.

use std::path::{Path, PathBuf};

use tracing::info;
use vsplit_common::{write_atomic, ConfigError};

use super::template::default_config_toml;

const APP_NAME: &str = "vsplit";

/// File the faking layer reads its configurations from.
const STORE_FILE_NAME: &str = "fakexrandr.bin";

fn config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))
}

/// Get the platform-specific default config file path.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join(APP_NAME).join("config.toml"))
}

/// Default store location, shared with the faking layer.
pub fn default_store_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join(STORE_FILE_NAME))
}

/// Write the commented default template to `path`.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    write_atomic(path, default_config_toml().as_bytes())
        .map_err(|e| ConfigError::ParseError(e.to_string()))?;
    info!("created default config at {}", path.display());
    Ok(())
}
