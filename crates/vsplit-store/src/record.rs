//! Binary configuration records and the length-prefixed store layout.
//!
//! ```text
//! record := name[128] edid[E] width:u32 height:u32 [splits_count:u32] <splits>
//! store  := (length:u32 record)*
//! ```
//!
//! Integers are native byte order. `E` and the presence of
//! `splits_count` depend on the [`FormatRevision`].

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use vsplit_common::CodecError;
use vsplit_tree::codec::{decode_tree, encode_tree};

use crate::model::{Configuration, Edid, MAX_NAME_LEN};

/// Record layout revisions found in existing stores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatRevision {
    /// 768-byte EDID field followed by the leaf count.
    #[default]
    Current,
    /// 256-byte EDID field, no leaf count.
    Legacy,
}

impl FormatRevision {
    /// Width of the NUL-padded EDID hex field.
    pub fn edid_field_len(self) -> usize {
        match self {
            FormatRevision::Current => 768,
            FormatRevision::Legacy => 256,
        }
    }

    fn has_splits_count(self) -> bool {
        self == FormatRevision::Current
    }

    /// Bytes preceding the tree.
    pub fn header_len(self) -> usize {
        let counts = if self.has_splits_count() { 3 } else { 2 };
        MAX_NAME_LEN + self.edid_field_len() + 4 * counts
    }
}

/// Encode one configuration.
pub fn encode_record(config: &Configuration, rev: FormatRevision) -> Result<Vec<u8>, CodecError> {
    config.validate()?;
    let edid = config.edid.to_hex();
    if edid.len() > rev.edid_field_len() {
        return Err(CodecError::InvalidRecord(format!(
            "EDID of {} needs {} hex characters, the field holds {}",
            config.name,
            edid.len(),
            rev.edid_field_len()
        )));
    }

    let mut out = Vec::with_capacity(rev.header_len() + config.tree.node_count() * 5);
    push_padded(&mut out, config.name.as_bytes(), MAX_NAME_LEN);
    push_padded(&mut out, edid.as_bytes(), rev.edid_field_len());
    out.extend_from_slice(&(config.width as u32).to_ne_bytes());
    out.extend_from_slice(&(config.height as u32).to_ne_bytes());
    if rev.has_splits_count() {
        let leaves = u32::try_from(config.tree.leaf_count())
            .map_err(|_| CodecError::InvalidRecord("too many splits".into()))?;
        out.extend_from_slice(&leaves.to_ne_bytes());
    }
    encode_tree(&config.tree, &mut out);
    Ok(out)
}

/// Decode one configuration occupying exactly `bytes`.
pub fn decode_record(bytes: &[u8], rev: FormatRevision) -> Result<Configuration, CodecError> {
    let header = rev.header_len();
    if bytes.len() < header {
        return Err(CodecError::MalformedStore(format!(
            "record of {} bytes is shorter than its {header}-byte header",
            bytes.len()
        )));
    }
    let (name_field, rest) = bytes.split_at(MAX_NAME_LEN);
    let (edid_field, rest) = rest.split_at(rev.edid_field_len());
    let (width, rest) = take_u32(rest);
    let (height, rest) = take_u32(rest);
    let (splits_count, rest) = if rev.has_splits_count() {
        let (count, rest) = take_u32(rest);
        (Some(count), rest)
    } else {
        (None, rest)
    };

    let name = std::str::from_utf8(until_nul(name_field))
        .map_err(|_| CodecError::InvalidRecord("name is not valid text".into()))?
        .to_string();
    let edid_hex = std::str::from_utf8(until_nul(edid_field))
        .map_err(|_| CodecError::InvalidRecord(format!("EDID field of {name} is not text")))?;
    let edid = Edid::from_hex(edid_hex)?;

    let (tree, trailing) = decode_tree(rest)?;
    if !trailing.is_empty() {
        return Err(CodecError::MalformedTree(format!(
            "{} bytes left after the splits of {name}",
            trailing.len()
        )));
    }
    if let Some(count) = splits_count {
        if count as usize != tree.leaf_count() {
            warn!(
                name = %name,
                stored = count,
                actual = tree.leaf_count(),
                "stored split count disagrees with the tree"
            );
        }
    }

    let config = Configuration {
        name,
        edid,
        width: f64::from(width),
        height: f64::from(height),
        tree,
    };
    config.validate()?;
    Ok(config)
}

/// Encode configurations as consecutive length-prefixed records.
pub fn encode_store<'a>(
    configs: impl IntoIterator<Item = &'a Configuration>,
    rev: FormatRevision,
) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::new();
    for config in configs {
        let record = encode_record(config, rev)?;
        let len = u32::try_from(record.len())
            .map_err(|_| CodecError::InvalidRecord(format!("{} is too large", config.name)))?;
        out.extend_from_slice(&len.to_ne_bytes());
        out.extend_from_slice(&record);
    }
    Ok(out)
}

/// Decode every record of a store, in file order. Nothing is returned
/// unless every record decodes.
pub fn decode_store(bytes: &[u8], rev: FormatRevision) -> Result<Vec<Configuration>, CodecError> {
    let mut configs = Vec::new();
    let mut rest = bytes;
    while !rest.is_empty() {
        let index = configs.len();
        if rest.len() < 4 {
            return Err(CodecError::MalformedStore(format!(
                "record {index}: truncated length header"
            )));
        }
        let (len, body) = take_u32(rest);
        let len = len as usize;
        if body.len() < len {
            return Err(CodecError::MalformedStore(format!(
                "record {index} declares {len} bytes but only {} remain",
                body.len()
            )));
        }
        let (record, next) = body.split_at(len);
        configs.push(decode_record(record, rev)?);
        rest = next;
    }
    debug!(count = configs.len(), ?rev, "decoded store");
    Ok(configs)
}

fn push_padded(out: &mut Vec<u8>, value: &[u8], width: usize) {
    out.extend_from_slice(value);
    out.resize(out.len() + width - value.len(), 0);
}

fn until_nul(field: &[u8]) -> &[u8] {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    &field[..end]
}

/// Callers check the length first.
fn take_u32(bytes: &[u8]) -> (u32, &[u8]) {
    let (raw, rest) = bytes.split_at(4);
    (u32::from_ne_bytes([raw[0], raw[1], raw[2], raw[3]]), rest)
}
