//! In-memory set of configurations.

use std::fmt;

use tracing::{debug, info};
use vsplit_common::{CodecError, StoreError};

use crate::model::{ConfigKey, Configuration};
use crate::record::{decode_store, encode_store, FormatRevision};
use crate::shell::ShellRecord;

/// Every stored configuration, in insertion order, at most one per
/// [`ConfigKey`].
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    entries: Vec<Configuration>,
}

/// What a [`ConfigStore::merge`] changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeSummary {
    pub inserted: usize,
    pub replaced: usize,
    pub removed: usize,
}

impl fmt::Display for MergeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} inserted, {} replaced, {} removed",
            self.inserted, self.replaced, self.removed
        )
    }
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Configuration> {
        self.entries.iter()
    }

    pub fn get(&self, key: &ConfigKey) -> Option<&Configuration> {
        self.position(key).map(|i| &self.entries[i])
    }

    pub fn get_mut(&mut self, key: &ConfigKey) -> Option<&mut Configuration> {
        self.position(key).map(|i| &mut self.entries[i])
    }

    /// First configuration called `name`.
    pub fn find_by_name(&self, name: &str) -> Option<&Configuration> {
        self.entries.iter().find(|c| c.name == name)
    }

    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Configuration> {
        self.entries.iter_mut().find(|c| c.name == name)
    }

    fn position(&self, key: &ConfigKey) -> Option<usize> {
        self.entries.iter().position(|c| &c.key() == key)
    }

    /// Add a configuration for an output that has none yet.
    pub fn insert(&mut self, config: Configuration) -> Result<(), StoreError> {
        config.validate()?;
        if let Some(existing) = self.get(&config.key()) {
            return Err(StoreError::DuplicateConfiguration(existing.formatted_name()));
        }
        debug!(name = %config.formatted_name(), "configuration added");
        self.entries.push(config);
        Ok(())
    }

    /// Add or replace, keeping the position of a replaced entry.
    /// Returns the configuration that was replaced.
    pub fn upsert(&mut self, config: Configuration) -> Result<Option<Configuration>, StoreError> {
        config.validate()?;
        match self.position(&config.key()) {
            Some(i) => Ok(Some(std::mem::replace(&mut self.entries[i], config))),
            None => {
                self.entries.push(config);
                Ok(None)
            }
        }
    }

    pub fn remove(&mut self, key: &ConfigKey) -> Option<Configuration> {
        self.position(key).map(|i| self.entries.remove(i))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn to_bytes(&self, rev: FormatRevision) -> Result<Vec<u8>, CodecError> {
        encode_store(&self.entries, rev)
    }

    /// Decode a whole store. Two records for the same output are an error.
    pub fn from_bytes(bytes: &[u8], rev: FormatRevision) -> Result<Self, StoreError> {
        let mut store = Self::new();
        for config in decode_store(bytes, rev)? {
            store.insert(config)?;
        }
        Ok(store)
    }

    /// Apply parsed records in order. Removal records for outputs with no
    /// stored entry are ignored. Either every record applies or none does.
    pub fn merge(
        &mut self,
        records: impl IntoIterator<Item = ShellRecord>,
    ) -> Result<MergeSummary, StoreError> {
        let mut next = self.clone();
        let mut summary = MergeSummary::default();
        for record in records {
            let key = record.configuration.key();
            if record.remove {
                if next.remove(&key).is_some() {
                    summary.removed += 1;
                } else {
                    debug!(%key, "nothing stored to remove");
                }
            } else if next.upsert(record.configuration)?.is_some() {
                summary.replaced += 1;
            } else {
                summary.inserted += 1;
            }
        }
        *self = next;
        info!(%summary, "merged records");
        Ok(summary)
    }
}

impl<'a> IntoIterator for &'a ConfigStore {
    type Item = &'a Configuration;
    type IntoIter = std::slice::Iter<'a, Configuration>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
