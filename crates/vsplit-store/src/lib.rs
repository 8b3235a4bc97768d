//! Persistence for per-output split configurations.
//!
//! [`ConfigStore`] holds every [`Configuration`] keyed by output identity.
//! [`record`] is the binary form the faking layer reads, [`shell`] the
//! `KEY="VALUE"` form used for scripted editing, and [`file`] moves both
//! on and off disk.

pub mod file;
pub mod model;
pub mod record;
pub mod shell;
pub mod store;

pub use file::{clear_store, load_store, migrate_store, save_store};
pub use model::{ConfigKey, Configuration, Edid};
pub use record::FormatRevision;
pub use shell::ShellRecord;
pub use store::{ConfigStore, MergeSummary};
