mod cli;
mod commands;
mod display;
mod gesture_script;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use vsplit_config::{LogLevel, VsplitConfig};

fn main() -> ExitCode {
    let args = cli::parse();

    // Config is read before logging starts so its level can apply.
    let config = vsplit_config::load_config(args.config.as_deref());

    let level = args
        .log_level
        .clone()
        .or_else(|| {
            config
                .as_ref()
                .ok()
                .and_then(|c| c.logging.level.map(LogLevel::as_str))
                .map(String::from)
        });
    let filter = match level {
        Some(level) => EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new("warn")),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("vsplit-manage v{} starting", env!("CARGO_PKG_VERSION"));

    let config = config.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        VsplitConfig::default()
    });

    let result = commands::Settings::resolve(args.store, &config).and_then(|settings| {
        tracing::debug!(store = %settings.store_path.display(), "settings resolved");
        commands::run(
            args.command,
            &settings,
            &mut std::io::stdin().lock(),
            &mut std::io::stdout().lock(),
        )
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("vsplit-manage: {e}");
            ExitCode::from(1)
        }
    }
}
