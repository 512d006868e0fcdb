//! Resolution of heterogeneous input paths into resource bindings.
//!
//! Inputs are processed in argument order. Directories are walked
//! depth-first with siblings in lexicographic order, so two runs over an
//! unchanged tree always produce the same binding sequence. Manifest files
//! are expanded into the bindings they declare, whether referenced
//! directly or discovered during a walk.

mod classify;
mod manifest;

pub use classify::{EntryKind, classify};
pub use manifest::parse_manifest;

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::{BundlerError, Result};
use crate::models::{ResourceBinding, normalize_label};

/// Resolve a list of input paths into an ordered list of bindings.
///
/// Any unreadable path, unreadable manifest, or malformed manifest aborts
/// the whole resolution; no partial result is returned. Labels are not
/// deduplicated here: the packer applies last-write-wins on collision.
pub fn resolve(paths: &[String]) -> Result<Vec<ResourceBinding>> {
    let mut bindings = Vec::new();
    for raw in paths {
        let path = Path::new(raw);
        let metadata = fs::metadata(path).map_err(|_| BundlerError::PathNotFound {
            path: raw.clone(),
        })?;
        if metadata.is_dir() {
            walk_directory(raw, &mut bindings)?;
            continue;
        }
        match classify(path, false) {
            // Direct manifest references are always parsed.
            EntryKind::Manifest => bindings.extend(parse_manifest(path)?),
            EntryKind::Reserved | EntryKind::TypeInfo => {}
            // Directory cannot occur: metadata.is_dir() was handled above.
            EntryKind::Directory | EntryKind::Ordinary => bindings.push(ResourceBinding {
                label: normalize_label(raw),
                source_path: path.to_path_buf(),
            }),
        }
    }
    Ok(bindings)
}

/// Walk one directory argument, appending bindings for every importable
/// file beneath it. Labels are the walked paths themselves, rooted at the
/// argument as given and slash-normalized.
fn walk_directory(root: &str, bindings: &mut Vec<ResourceBinding>) -> Result<()> {
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|err| walk_error(root, err))?;
        match classify(entry.path(), entry.file_type().is_dir()) {
            EntryKind::Directory | EntryKind::Reserved | EntryKind::TypeInfo => {}
            EntryKind::Manifest => bindings.extend(parse_manifest(entry.path())?),
            EntryKind::Ordinary => {
                let label = normalize_label(&entry.path().to_string_lossy());
                bindings.push(ResourceBinding {
                    label,
                    source_path: entry.into_path(),
                });
            }
        }
    }
    Ok(())
}

fn walk_error(root: &str, err: walkdir::Error) -> BundlerError {
    let path = err
        .path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| root.to_string());
    BundlerError::UnreadableFile {
        path,
        label: None,
        reason: err.to_string(),
    }
}
