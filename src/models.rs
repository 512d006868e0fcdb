//! Data structures produced while resolving resources into a bundle.

use std::path::{Path, PathBuf};

/// A resolved resource: the logical label clients address it by, and the
/// filesystem path its bytes are read from at pack time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceBinding {
    /// Logical, forward-slash separated path. Always relative, never with a
    /// leading slash. Labels are unique within one resolution run at pack
    /// time; on collision the later binding wins.
    pub label: String,
    /// Real filesystem path the resource content is read from.
    pub source_path: PathBuf,
}

/// One file entry parsed from a manifest group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Prefix declared by the `qresource` group the entry belongs to.
    pub group_prefix: String,
    /// File name, relative to the manifest's own directory.
    pub file_name: String,
    /// Optional alias that replaces the file name inside the label.
    pub alias: Option<String>,
}

impl ManifestEntry {
    /// Label the entry binds: the group prefix joined with the alias, or
    /// with the file name when no alias is declared.
    pub fn label(&self) -> String {
        let name = self.alias.as_deref().unwrap_or(&self.file_name);
        join_label(&self.group_prefix, name)
    }

    /// Source path of the entry, resolved against the manifest's directory.
    pub fn source_path(&self, manifest_dir: &Path) -> PathBuf {
        manifest_dir.join(&self.file_name)
    }
}

/// Join two label segments with a forward slash, dropping empty segments
/// and surrounding slashes so the result stays relative.
pub fn join_label(prefix: &str, name: &str) -> String {
    let prefix = prefix.trim_matches('/');
    let name = name.trim_matches('/');
    match (prefix.is_empty(), name.is_empty()) {
        (true, _) => name.to_string(),
        (_, true) => prefix.to_string(),
        _ => format!("{prefix}/{name}"),
    }
}

/// Convert a filesystem path string into label form: forward slashes only,
/// no leading slash.
pub fn normalize_label(path: &str) -> String {
    path.replace('\\', "/").trim_start_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_prefix_and_name() {
        assert_eq!(join_label("images", "icon.png"), "images/icon.png");
        assert_eq!(join_label("/images/", "/icon.png"), "images/icon.png");
    }

    #[test]
    fn tolerates_empty_segments() {
        assert_eq!(join_label("", "icon.png"), "icon.png");
        assert_eq!(join_label("/", "icon.png"), "icon.png");
        assert_eq!(join_label("images", ""), "images");
    }

    #[test]
    fn alias_replaces_file_name_in_label() {
        let entry = ManifestEntry {
            group_prefix: "images".into(),
            file_name: "a.png".into(),
            alias: Some("icon.png".into()),
        };
        assert_eq!(entry.label(), "images/icon.png");
        assert_eq!(entry.source_path(Path::new("dir")), Path::new("dir/a.png"));
    }

    #[test]
    fn file_name_is_the_default_label() {
        let entry = ManifestEntry {
            group_prefix: "/images".into(),
            file_name: "a.png".into(),
            alias: None,
        };
        assert_eq!(entry.label(), "images/a.png");
    }

    #[test]
    fn normalizes_separators_and_leading_slash() {
        assert_eq!(normalize_label("images\\sub\\a.png"), "images/sub/a.png");
        assert_eq!(normalize_label("/abs/a.png"), "abs/a.png");
        assert_eq!(normalize_label("images/a.png"), "images/a.png");
    }
}
