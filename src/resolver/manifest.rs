//! Parsing RCC resource-collection manifests into bindings.
//!
//! A manifest is an XML document with an `RCC` root containing `qresource`
//! groups; each group carries a `prefix` attribute and `file` entries with
//! an optional `alias` attribute and the file name as character data.

use std::fs;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::Event;
use serde::Deserialize;

use crate::error::{BundlerError, Result};
use crate::models::{ManifestEntry, ResourceBinding};

#[derive(Debug, Deserialize)]
struct RccDocument {
    #[serde(rename = "qresource", default)]
    groups: Vec<GroupNode>,
}

#[derive(Debug, Deserialize)]
struct GroupNode {
    #[serde(rename = "@prefix", default)]
    prefix: String,
    #[serde(rename = "file", default)]
    files: Vec<FileNode>,
}

#[derive(Debug, Deserialize)]
struct FileNode {
    #[serde(rename = "@alias")]
    alias: Option<String>,
    #[serde(rename = "$text")]
    name: String,
}

/// Parse a manifest file into the bindings its entries declare.
///
/// Labels are prefixed only by the declaring group's prefix; where the
/// manifest itself was found never contributes to them. Source paths are
/// resolved against the manifest's own directory.
pub fn parse_manifest(path: &Path) -> Result<Vec<ResourceBinding>> {
    let text = fs::read_to_string(path).map_err(|err| BundlerError::UnreadableFile {
        path: path.display().to_string(),
        label: None,
        reason: err.to_string(),
    })?;

    if !root_is_rcc(&text) {
        return Err(BundlerError::MalformedManifest {
            path: path.display().to_string(),
            reason: "root element is not RCC".into(),
        });
    }

    let document: RccDocument =
        quick_xml::de::from_str(&text).map_err(|err| BundlerError::MalformedManifest {
            path: path.display().to_string(),
            reason: err.to_string(),
        })?;

    let manifest_dir = path.parent().unwrap_or_else(|| Path::new(""));
    let mut bindings = Vec::new();
    for group in document.groups {
        for file in group.files {
            let entry = ManifestEntry {
                group_prefix: group.prefix.clone(),
                file_name: file.name,
                alias: file.alias,
            };
            bindings.push(ResourceBinding {
                label: entry.label(),
                source_path: entry.source_path(manifest_dir),
            });
        }
    }
    Ok(bindings)
}

/// Check that the first element of the document is `RCC`.
fn root_is_rcc(text: &str) -> bool {
    let mut reader = Reader::from_str(text);
    loop {
        match reader.read_event() {
            Ok(Event::Start(element)) | Ok(Event::Empty(element)) => {
                return element.name().as_ref() == b"RCC";
            }
            Ok(Event::Eof) | Err(_) => return false,
            _ => {}
        }
    }
}
