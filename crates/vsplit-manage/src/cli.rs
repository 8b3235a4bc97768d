use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Manage virtual output splits for the fakexrandr faking layer.
#[derive(Parser, Debug)]
#[command(name = "vsplit-manage", version, about)]
pub struct Args {
    /// Store file override (default: ~/.config/fakexrandr.bin).
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print every stored configuration as KEY="VALUE" records.
    DumpConfig,

    /// Print live outputs as records with SPLITS="N", ready for set-config.
    ShowAvailable {
        /// JSON snapshot of the display server's outputs.
        #[arg(long)]
        outputs: Option<PathBuf>,
    },

    /// Remove all stored configurations.
    ClearConfig,

    /// Merge records read from standard input into the store.
    SetConfig,

    /// Add an unsplit configuration for a live output.
    Create {
        /// Output name, e.g. HDMI1.
        output: String,

        /// JSON snapshot of the display server's outputs.
        #[arg(long)]
        outputs: Option<PathBuf>,
    },

    /// Print the fake outputs every configuration produces.
    Preview,

    /// Apply a recorded pointer gesture script to a configuration.
    Replay {
        /// Name of the stored configuration to edit.
        key: String,

        /// Script file with down/move/up lines.
        script: PathBuf,
    },

    /// Rewrite a legacy-format store in the current format.
    Migrate,
}

pub fn parse() -> Args {
    Args::parse()
}
