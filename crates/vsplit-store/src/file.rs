//! Store file access.
//!
//! Saves are atomic (write to a sibling `.tmp`, then rename) so the faking
//! layer never reads a half-written store.

use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, info};
use vsplit_common::{write_atomic, StoreError};

use crate::record::FormatRevision;
use crate::store::ConfigStore;

/// Read the store at `path`. A missing file is an empty store.
pub fn load_store(path: &Path, rev: FormatRevision) -> Result<ConfigStore, StoreError> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no store file yet");
            return Ok(ConfigStore::new());
        }
        Err(e) => return Err(StoreError::io(path, e)),
    };
    let store = ConfigStore::from_bytes(&bytes, rev)?;
    info!(path = %path.display(), count = store.len(), "store loaded");
    Ok(store)
}

/// Write `store` to `path`, creating parent directories as needed.
pub fn save_store(path: &Path, store: &ConfigStore, rev: FormatRevision) -> Result<(), StoreError> {
    let bytes = store.to_bytes(rev)?;
    write_atomic(path, &bytes)?;
    info!(path = %path.display(), count = store.len(), ?rev, "store saved");
    Ok(())
}

/// Delete the store file. Returns whether there was one.
pub fn clear_store(path: &Path) -> Result<bool, StoreError> {
    match std::fs::remove_file(path) {
        Ok(()) => {
            info!(path = %path.display(), "store cleared");
            Ok(true)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(StoreError::io(path, e)),
    }
}

/// Rewrite a legacy-revision store in the current revision. Returns the
/// number of configurations carried over.
pub fn migrate_store(path: &Path) -> Result<usize, StoreError> {
    let store = load_store(path, FormatRevision::Legacy)?;
    save_store(path, &store, FormatRevision::Current)?;
    info!(path = %path.display(), count = store.len(), "store migrated");
    Ok(store.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Configuration, Edid};
    use tempfile::TempDir;
    use vsplit_common::fs::tmp_sibling;
    use vsplit_common::CodecError;

    fn sample() -> ConfigStore {
        let mut store = ConfigStore::new();
        store
            .insert(Configuration::new("HDMI1", Edid::new(vec![1, 2]), 1920.0, 1080.0))
            .unwrap();
        store
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = load_store(&dir.path().join("none.bin"), FormatRevision::Current).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn save_creates_parents_and_leaves_no_tmp() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("store.bin");
        save_store(&path, &sample(), FormatRevision::Current).unwrap();
        assert!(path.exists());
        assert!(!tmp_sibling(&path).exists());

        let back = load_store(&path, FormatRevision::Current).unwrap();
        assert_eq!(back.len(), 1);
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.bin");
        std::fs::write(&path, [9, 0]).unwrap();
        let err = load_store(&path, FormatRevision::Current).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Codec(CodecError::MalformedStore(_))
        ));
    }

    #[test]
    fn unreadable_path_is_io_failure() {
        let dir = TempDir::new().unwrap();
        let err = load_store(dir.path(), FormatRevision::Current).unwrap_err();
        assert!(matches!(err, StoreError::IoFailure { .. }));
    }

    #[test]
    fn clear_reports_whether_file_existed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.bin");
        assert!(!clear_store(&path).unwrap());
        save_store(&path, &sample(), FormatRevision::Current).unwrap();
        assert!(clear_store(&path).unwrap());
        assert!(!path.exists());
    }

    #[test]
    fn migrate_rewrites_legacy_records() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.bin");
        save_store(&path, &sample(), FormatRevision::Legacy).unwrap();
        assert!(load_store(&path, FormatRevision::Current).is_err());

        assert_eq!(migrate_store(&path).unwrap(), 1);
        let store = load_store(&path, FormatRevision::Current).unwrap();
        assert_eq!(store.iter().next().unwrap().name, "HDMI1");
    }
}
