use std::io::Write;
use std::path::Path;

use tracing::info;
use vsplit_common::{StoreError, VsplitError};
use vsplit_store::{load_store, save_store};
use vsplit_tree::codec::format_tree_inline;
use vsplit_tree::{Canvas, Editor};

use super::Settings;
use crate::display::DisplaySource;
use crate::gesture_script::{parse_script, replay as replay_events};

/// `create`: store an unsplit configuration for a driven output.
pub fn create(
    settings: &Settings,
    source: &dyn DisplaySource,
    output: &str,
    out: &mut impl Write,
) -> Result<(), VsplitError> {
    let config = source
        .active_outputs()?
        .into_iter()
        .find(|c| c.name == output)
        .ok_or_else(|| VsplitError::Other(format!("output '{output}' is not connected or not driven")))?;
    let label = config.formatted_name();

    let mut store = load_store(&settings.store_path, settings.format)?;
    store.insert(config)?;
    save_store(&settings.store_path, &store, settings.format)?;
    writeln!(out, "created {label}")?;
    Ok(())
}

/// `preview`: list the fake outputs of every configuration, xrandr style.
pub fn preview(settings: &Settings, out: &mut impl Write) -> Result<(), VsplitError> {
    let store = load_store(&settings.store_path, settings.format)?;
    for config in &store {
        writeln!(out, "{} (EDID {})", config.formatted_name(), config.edid.shortened())?;
        for (i, (_, rect)) in config.tree.leaf_rects(config.bounds()).into_iter().enumerate() {
            writeln!(
                out,
                "  {i}: {}x{}+{}+{}",
                rect.width as u32, rect.height as u32, rect.x as u32, rect.y as u32
            )?;
        }
    }
    Ok(())
}

/// `replay`: drive the editor with a gesture script and save the result.
pub fn replay(
    settings: &Settings,
    key: &str,
    script: &Path,
    out: &mut impl Write,
) -> Result<(), VsplitError> {
    let text = std::fs::read_to_string(script)
        .map_err(|e| VsplitError::Other(format!("failed to read {}: {e}", script.display())))?;
    let events = parse_script(&text)?;

    let mut store = load_store(&settings.store_path, settings.format)?;
    let config = store
        .find_by_name_mut(key)
        .ok_or_else(|| StoreError::NotFound(key.to_string()))?;

    let canvas = Canvas::for_output(config.width, config.height, settings.canvas_width);
    let mut editor = Editor::new(canvas);
    let removed = replay_events(&mut editor, &mut config.tree, &events);
    let summary = format!("{}: {}", config.formatted_name(), format_tree_inline(&config.tree));
    info!(events = events.len(), removed, "replayed gesture script");

    save_store(&settings.store_path, &store, settings.format)?;
    writeln!(out, "{summary}")?;
    Ok(())
}
