//! Outputs recorded as JSON by an external query.
//!
//! ```json
//! {
//!   "HDMI1": { "edid": "00ffffffffffff00...", "crtc": { "x": 0, "y": 0, "width": 1920, "height": 1080 } },
//!   "VGA1":  { "edid": "00ffffffffffff00...", "crtc": null }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;
use vsplit_common::PlatformError;
use vsplit_store::Edid;

use super::{Crtc, DisplaySource, OutputInfo, Result};

#[derive(Deserialize)]
struct RawOutput {
    edid: String,
    #[serde(default)]
    crtc: Option<Crtc>,
}

pub struct SnapshotDisplaySource {
    path: PathBuf,
}

impl SnapshotDisplaySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn parse(&self, text: &str) -> Result<BTreeMap<String, OutputInfo>> {
        let raw: BTreeMap<String, RawOutput> = serde_json::from_str(text).map_err(|e| {
            PlatformError::DisplayQuery(format!("{}: {e}", self.path.display()))
        })?;
        raw.into_iter()
            .map(|(name, output)| {
                let edid = Edid::from_hex(&output.edid)
                    .map_err(|e| PlatformError::DisplayQuery(format!("output {name}: {e}")))?;
                Ok((
                    name,
                    OutputInfo {
                        edid,
                        crtc: output.crtc,
                    },
                ))
            })
            .collect()
    }
}

impl DisplaySource for SnapshotDisplaySource {
    fn outputs(&self) -> Result<BTreeMap<String, OutputInfo>> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| {
            PlatformError::DisplayQuery(format!("failed to read {}: {e}", self.path.display()))
        })?;
        let outputs = self.parse(&text)?;
        tracing::debug!(count = outputs.len(), path = %self.path.display(), "read output snapshot");
        Ok(outputs)
    }
}
