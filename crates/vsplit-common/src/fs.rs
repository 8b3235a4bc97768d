//! Atomic file writes shared by the store and the settings file.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// A write that failed, with the file it was writing.
#[derive(Debug, thiserror::Error)]
#[error("failed to write {}: {source}", path.display())]
pub struct WriteFailure {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

impl WriteFailure {
    fn at(path: &Path) -> impl FnOnce(std::io::Error) -> Self + '_ {
        move |source| Self {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// `path` with `.tmp` appended to the full file name.
pub fn tmp_sibling(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

/// Write `contents` to a sibling `.tmp` file, then rename it over `path`.
/// Parent directories are created. If the rename fails the file is
/// written directly.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), WriteFailure> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(WriteFailure::at(parent))?;
    }

    let tmp_path = tmp_sibling(path);
    std::fs::write(&tmp_path, contents).map_err(WriteFailure::at(&tmp_path))?;

    if let Err(e) = std::fs::rename(&tmp_path, path) {
        tracing::warn!("atomic rename failed ({e}), falling back to direct write");
        let _ = std::fs::remove_file(&tmp_path);
        std::fs::write(path, contents).map_err(WriteFailure::at(path))?;
    }
    Ok(())
}
