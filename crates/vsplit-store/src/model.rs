//! Configuration records and their identity.

use std::fmt;

use vsplit_common::{CodecError, Rect};
use vsplit_tree::SplitTree;

/// Longest name the binary record can hold.
pub const MAX_NAME_LEN: usize = 128;

/// Raw display identification blob reported by an output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edid(Vec<u8>);

impl Edid {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Parse the hex form used in records and reported by the display
    /// server. Case-insensitive; surrounding whitespace is ignored.
    pub fn from_hex(text: &str) -> Result<Self, CodecError> {
        hex::decode(text.trim())
            .map(Self)
            .map_err(|e| CodecError::InvalidRecord(format!("EDID is not valid hex: {e}")))
    }

    /// Lowercase hex, two characters per byte.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First and last ten hex characters, for listings.
    pub fn shortened(&self) -> String {
        let full = self.to_hex();
        if full.len() <= 23 {
            return full;
        }
        format!("{}...{}", &full[..10], &full[full.len() - 10..])
    }
}

impl fmt::Display for Edid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Identity of a configuration: one entry per output and resolution.
/// The name is not part of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConfigKey {
    pub edid: Edid,
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.edid.shortened(), self.width, self.height)
    }
}

/// How one physical output is divided into fake outputs.
///
/// Equality follows [`ConfigKey`]: two configurations for the same output
/// and resolution are equal whatever their names and trees.
#[derive(Debug, Clone)]
pub struct Configuration {
    pub name: String,
    pub edid: Edid,
    pub width: f64,
    pub height: f64,
    pub tree: SplitTree,
}

impl Configuration {
    /// Unsplit configuration for an output.
    pub fn new(name: impl Into<String>, edid: Edid, width: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            edid,
            width,
            height,
            tree: SplitTree::new(),
        }
    }

    pub fn with_tree(mut self, tree: SplitTree) -> Self {
        self.tree = tree;
        self
    }

    pub fn key(&self) -> ConfigKey {
        ConfigKey {
            edid: self.edid.clone(),
            width: self.width as u32,
            height: self.height as u32,
        }
    }

    /// `name@WIDTHxHEIGHT`
    pub fn formatted_name(&self) -> String {
        format!("{}@{}x{}", self.name, self.width as u32, self.height as u32)
    }

    pub fn bounds(&self) -> Rect {
        Rect::sized(self.width, self.height)
    }

    /// Check everything the binary record and the faking layer rely on.
    pub fn validate(&self) -> Result<(), CodecError> {
        if self.name.len() > MAX_NAME_LEN {
            return Err(CodecError::InvalidRecord(format!(
                "name '{}' is longer than {MAX_NAME_LEN} bytes",
                self.name
            )));
        }
        if !self.name.is_ascii() || self.name.contains('\0') {
            return Err(CodecError::InvalidRecord(format!(
                "name '{}' must be ASCII without NUL bytes",
                self.name.escape_default()
            )));
        }
        for (label, value) in [("width", self.width), ("height", self.height)] {
            if !(value >= 1.0 && value <= f64::from(u32::MAX)) {
                return Err(CodecError::InvalidRecord(format!(
                    "{label} {value} is out of range"
                )));
            }
        }
        if !self.tree.fits_within(self.bounds()) {
            return Err(CodecError::InvalidRecord(format!(
                "splits of {} leave an empty region",
                self.formatted_name()
            )));
        }
        Ok(())
    }
}

impl PartialEq for Configuration {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Configuration {}
