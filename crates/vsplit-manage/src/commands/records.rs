use std::io::Write;

use tracing::info;
use vsplit_common::VsplitError;
use vsplit_store::shell::{format_records, parse_records};
use vsplit_store::{load_store, save_store, MergeSummary};

use super::Settings;
use crate::display::DisplaySource;

/// `dump-config`
pub fn dump_config(settings: &Settings, out: &mut impl Write) -> Result<(), VsplitError> {
    if !settings.store_path.exists() {
        return Err(VsplitError::Other(format!(
            "there is no configuration in {} yet",
            settings.store_path.display()
        )));
    }
    let store = load_store(&settings.store_path, settings.format)?;
    out.write_all(format_records(&store).as_bytes())?;
    Ok(())
}

/// `show-available`
pub fn show_available(source: &dyn DisplaySource, out: &mut impl Write) -> Result<(), VsplitError> {
    let outputs = source.active_outputs()?;
    out.write_all(format_records(&outputs).as_bytes())?;
    Ok(())
}

/// `set-config`: merge records into the store and save it.
pub fn set_config(settings: &Settings, input: &str) -> Result<MergeSummary, VsplitError> {
    let records = parse_records(input)?;
    let mut store = load_store(&settings.store_path, settings.format)?;
    let summary = store.merge(records)?;
    save_store(&settings.store_path, &store, settings.format)?;
    info!(%summary, path = %settings.store_path.display(), "configuration updated");
    Ok(summary)
}
