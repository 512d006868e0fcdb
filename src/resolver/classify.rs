//! Classification of visited filesystem entries into resolution roles.

use std::path::Path;

/// Reserved base name that never produces a binding.
const RESERVED_NAME: &str = "qmldir";

/// Extension of build-only type metadata, irrelevant to packed output.
const TYPEINFO_EXT: &str = "qmltypes";

/// Extension marking an RCC resource-collection manifest.
const MANIFEST_EXT: &str = "manifest";

/// Closed set of roles an entry can play during resolution. Each variant
/// has exactly one handler in the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Directories never produce bindings themselves, only their files do.
    Directory,
    /// A `qmldir` file; intentionally unsupported, skipped.
    Reserved,
    /// A `*.qmltypes` file; skipped.
    TypeInfo,
    /// A `*.manifest` collection; parsed, its entries spliced in.
    Manifest,
    /// Any other file, imported byte for byte.
    Ordinary,
}

/// Decide how a visited path is resolved.
pub fn classify(path: &Path, is_dir: bool) -> EntryKind {
    if is_dir {
        return EntryKind::Directory;
    }
    if path.file_name().is_some_and(|name| name == RESERVED_NAME) {
        return EntryKind::Reserved;
    }
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(TYPEINFO_EXT) => EntryKind::TypeInfo,
        Some(MANIFEST_EXT) => EntryKind::Manifest,
        _ => EntryKind::Ordinary,
    }
}
