//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use vsplit_common::ConfigError;
use vsplit_store::FormatRevision;
use vsplit_tree::edit::DEFAULT_CANVAS_WIDTH;

use crate::toml_loader::default_store_path;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VsplitConfig {
    pub store: StoreConfig,
    pub editor: EditorConfig,
    pub logging: LoggingConfig,
}

/// Where configurations are persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Store file. Unset means `~/.config/fakexrandr.bin`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Record layout used to read and write the store.
    pub format: FormatRevision,
}

impl StoreConfig {
    pub fn resolved_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => default_store_path(),
        }
    }
}

/// Gesture replay settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Width in pixels of the canvas gesture coordinates refer to
    /// (valid range: 100-4000).
    pub canvas_width: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Unset defers to `RUST_LOG`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<LogLevel>,
}
