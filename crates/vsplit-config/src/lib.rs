//! vsplit settings.
//!
//! TOML file at `~/.config/vsplit/config.toml` (platform config dir).
//! Every section uses serde defaults, so an empty or partial file works.

pub mod schema;
pub mod toml_loader;
pub mod toml_writer;
pub mod validation;

pub use schema::{EditorConfig, LogLevel, LoggingConfig, StoreConfig, VsplitConfig};
pub use toml_loader::{default_config_path, default_store_path, load_from_path, load_or_create};
pub use toml_writer::save_config_to_path;

use std::path::Path;

use vsplit_common::ConfigError;

/// Load settings from `path`, or from the platform default when `None`.
/// A missing file yields defaults and writes a commented template.
pub fn load_config(path: Option<&Path>) -> Result<VsplitConfig, ConfigError> {
    match path {
        Some(path) => load_or_create(path),
        None => load_or_create(&default_config_path()?),
    }
}
