//! Live output enumeration.
//!
//! The display server query itself lives outside this tool; sources here
//! report what it found so configurations can be created for real outputs.

mod noop;
mod snapshot;

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use vsplit_common::PlatformError;
use vsplit_store::{Configuration, Edid};

pub use noop::NoopDisplaySource;
pub use snapshot::SnapshotDisplaySource;

pub type Result<T> = std::result::Result<T, PlatformError>;

/// Placement of a driven output on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crtc {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutputInfo {
    pub edid: Edid,
    /// `None` when no display engine drives the output.
    pub crtc: Option<Crtc>,
}

/// Anything that can list the outputs of the running display server.
pub trait DisplaySource {
    /// Every known output by name, driven or not.
    fn outputs(&self) -> Result<BTreeMap<String, OutputInfo>>;

    /// Driven outputs only, as fresh unsplit configurations.
    fn active_outputs(&self) -> Result<Vec<Configuration>> {
        Ok(self
            .outputs()?
            .into_iter()
            .filter_map(|(name, info)| {
                let crtc = info.crtc?;
                Some(Configuration::new(
                    name,
                    info.edid,
                    f64::from(crtc.width),
                    f64::from(crtc.height),
                ))
            })
            .collect())
    }
}

/// Snapshot source when a file is given, otherwise the no-op source.
pub fn source_for(outputs: Option<&Path>) -> Box<dyn DisplaySource> {
    match outputs {
        Some(path) => Box::new(SnapshotDisplaySource::new(path)),
        None => {
            tracing::warn!("no output snapshot given; no outputs will be listed");
            Box::new(NoopDisplaySource)
        }
    }
}
