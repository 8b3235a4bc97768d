use std::io::Write;

use tracing::debug;
use vsplit_common::VsplitError;
use vsplit_store::{clear_store, migrate_store};

use super::Settings;

/// `clear-config`. Succeeds when there was nothing to clear.
pub fn clear_config(settings: &Settings) -> Result<(), VsplitError> {
    if !clear_store(&settings.store_path)? {
        debug!(path = %settings.store_path.display(), "no store to clear");
    }
    Ok(())
}

/// `migrate`: read the store as legacy records and rewrite it.
pub fn migrate(settings: &Settings, out: &mut impl Write) -> Result<(), VsplitError> {
    let count = migrate_store(&settings.store_path)?;
    writeln!(out, "migrated {count} configurations to the current format")?;
    Ok(())
}
