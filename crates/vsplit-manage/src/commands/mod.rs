//! Subcommand implementations.
//!
//! Each command takes resolved [`Settings`] and writes its report to the
//! given writer, so the binary and the tests drive them the same way.

mod edit;
mod maintenance;
mod records;

use std::io::{Read, Write};
use std::path::PathBuf;

use vsplit_common::VsplitError;
use vsplit_config::VsplitConfig;
use vsplit_store::FormatRevision;

use crate::cli::Command;
use crate::display;

pub use edit::{create, preview, replay};
pub use maintenance::{clear_config, migrate};
pub use records::{dump_config, set_config, show_available};

/// Command-line overrides applied on top of the config file.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub store_path: PathBuf,
    pub format: FormatRevision,
    pub canvas_width: f64,
}

impl Settings {
    pub fn resolve(store: Option<PathBuf>, config: &VsplitConfig) -> Result<Self, VsplitError> {
        let store_path = match store {
            Some(path) => path,
            None => config.store.resolved_path()?,
        };
        Ok(Self {
            store_path,
            format: config.store.format,
            canvas_width: config.editor.canvas_width,
        })
    }
}

pub fn run(
    command: Command,
    settings: &Settings,
    input: &mut impl Read,
    out: &mut impl Write,
) -> Result<(), VsplitError> {
    match command {
        Command::DumpConfig => dump_config(settings, out),
        Command::ShowAvailable { outputs } => {
            show_available(display::source_for(outputs.as_deref()).as_ref(), out)
        }
        Command::ClearConfig => clear_config(settings),
        Command::SetConfig => {
            let mut text = String::new();
            input.read_to_string(&mut text)?;
            set_config(settings, &text).map(|_| ())
        }
        Command::Create { output, outputs } => create(
            settings,
            display::source_for(outputs.as_deref()).as_ref(),
            &output,
            out,
        ),
        Command::Preview => preview(settings, out),
        Command::Replay { key, script } => replay(settings, &key, &script, out),
        Command::Migrate => migrate(settings, out),
    }
}
