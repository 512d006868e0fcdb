//! Packing resolved bindings into a self-describing byte stream.
//!
//! Wire format, little-endian throughout: an 8-byte magic `qrcpack1`, a
//! u32 entry count, then per entry a u32 label length, the label's UTF-8
//! bytes, a u32 content length, and the content bytes. The stream carries
//! everything a consumer needs to rebuild the label → content mapping.

use std::collections::BTreeMap;
use std::fs;

use crate::error::{BundlerError, Result};
use crate::models::ResourceBinding;

/// Mapping from resource label to content bytes, as handed to a loader.
pub type ResourceMap = BTreeMap<String, Vec<u8>>;

const BUNDLE_MAGIC: &[u8; 8] = b"qrcpack1";

/// Insertion-ordered accumulator of `(label, content)` pairs.
///
/// A duplicate label keeps its first position but takes the content of the
/// last write, so resolution order decides which bytes survive while the
/// serialized output stays deterministic.
#[derive(Debug, Default)]
pub struct ResourceBundle {
    entries: Vec<(String, Vec<u8>)>,
}

impl ResourceBundle {
    /// Create an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one resource, overwriting the content of an equal label.
    pub fn add(&mut self, label: String, content: Vec<u8>) {
        if let Some(entry) = self.entries.iter_mut().find(|(l, _)| *l == label) {
            entry.1 = content;
        } else {
            self.entries.push((label, content));
        }
    }

    /// Number of distinct labels currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bundle holds no resources.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finalize the bundle into its serialized byte stream.
    ///
    /// Entry counts and per-entry lengths must fit the format's u32
    /// fields; anything larger is rejected rather than truncated.
    pub fn finish(self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        out.extend_from_slice(BUNDLE_MAGIC);
        out.extend_from_slice(&encode_len(self.entries.len())?);
        for (label, content) in &self.entries {
            out.extend_from_slice(&encode_len(label.len())?);
            out.extend_from_slice(label.as_bytes());
            out.extend_from_slice(&encode_len(content.len())?);
            out.extend_from_slice(content);
        }
        Ok(out)
    }
}

fn encode_len(len: usize) -> Result<[u8; 4]> {
    u32::try_from(len)
        .map(u32::to_le_bytes)
        .map_err(|_| BundlerError::MalformedBundle {
            reason: format!("length {len} exceeds the format's u32 field"),
        })
}

/// Read every binding's bytes and serialize the full mapping.
///
/// An unreadable source aborts with an error naming both the binding's
/// label and its filesystem path.
pub fn pack(bindings: &[ResourceBinding]) -> Result<Vec<u8>> {
    let mut bundle = ResourceBundle::new();
    for binding in bindings {
        let content = fs::read(&binding.source_path).map_err(|err| BundlerError::UnreadableFile {
            path: binding.source_path.display().to_string(),
            label: Some(binding.label.clone()),
            reason: err.to_string(),
        })?;
        bundle.add(binding.label.clone(), content);
    }
    bundle.finish()
}

/// Deserialize a packed byte stream back into its resource mapping.
pub fn unpack(bytes: &[u8]) -> Result<ResourceMap> {
    let mut reader = BundleReader { bytes, offset: 0 };

    let magic = reader.take(BUNDLE_MAGIC.len())?;
    if magic != BUNDLE_MAGIC {
        return Err(BundlerError::MalformedBundle {
            reason: "bad magic header".into(),
        });
    }

    let count = reader.take_u32()?;
    let mut resources = ResourceMap::new();
    for _ in 0..count {
        let label_len = reader.take_u32()? as usize;
        let label = std::str::from_utf8(reader.take(label_len)?)
            .map_err(|_| BundlerError::MalformedBundle {
                reason: "label is not valid UTF-8".into(),
            })?
            .to_string();
        let content_len = reader.take_u32()? as usize;
        let content = reader.take(content_len)?.to_vec();
        resources.insert(label, content);
    }

    if reader.offset != bytes.len() {
        return Err(BundlerError::MalformedBundle {
            reason: "trailing bytes after final entry".into(),
        });
    }
    Ok(resources)
}

struct BundleReader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> BundleReader<'a> {
    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let end = self
            .offset
            .checked_add(len)
            .filter(|&end| end <= self.bytes.len())
            .ok_or_else(|| BundlerError::MalformedBundle {
                reason: "truncated stream".into(),
            })?;
        let slice = &self.bytes[self.offset..end];
        self.offset = end;
        Ok(slice)
    }

    fn take_u32(&mut self) -> Result<u32> {
        let raw = self.take(4)?;
        Ok(u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]))
    }
}
