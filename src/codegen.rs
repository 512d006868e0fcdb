//! Generation of the `qrc.rs` artifact embedding a packed bundle.
//!
//! The artifact is produced by plain text substitution into a template:
//! the packed bytes become an escaped byte-string literal, and the input
//! paths are recorded so repack mode can re-walk them at startup. All real
//! logic stays in this crate; the generated file only wires the embedded
//! data into [`crate::runtime::startup`].

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BundlerError, Result};

/// Fixed name of the generated artifact, written to the working directory.
pub const OUTPUT_FILE: &str = "qrc.rs";

const ARTIFACT_TEMPLATE: &str = r#"// Generated by qrc-bundler. Do not edit; rerun the tool instead.

/// Packed resource bundle captured at generation time.
static EMBEDDED_BUNDLE: &[u8] = b"@BUNDLE@";

/// Input paths the bundle was packed from, reused by repack mode.
static SOURCE_PATHS: &[&str] = &[@SOURCE_PATHS@];

/// Load the bundled resources, honouring the `QRC_REPACK` toggle.
///
/// A missing or unreadable bundle leaves the application without its
/// resources, so any failure here aborts startup.
pub fn load_resources() -> qrc_bundler::ResourceMap {
    let config = qrc_bundler::StartupConfig::from_env();
    let source_paths: Vec<String> = SOURCE_PATHS.iter().map(|path| (*path).to_string()).collect();
    match qrc_bundler::startup(EMBEDDED_BUNDLE, &source_paths, &config) {
        Ok(resources) => resources,
        Err(err) => panic!("cannot load resource bundle: {err}"),
    }
}
"#;

/// Escape arbitrary bytes into the body of a Rust byte-string literal.
///
/// Printable ASCII passes through; quotes and backslashes are escaped and
/// everything else becomes a `\xNN` sequence, so the literal reproduces
/// the input losslessly for every byte value.
pub fn escape_byte_literal(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() + bytes.len() / 4);
    for &byte in bytes {
        match byte {
            b'"' => out.push_str("\\\""),
            b'\\' => out.push_str("\\\\"),
            0x20..=0x7e => out.push(byte as char),
            _ => {
                out.push_str("\\x");
                out.push(char::from_digit(u32::from(byte >> 4), 16).unwrap_or('0'));
                out.push(char::from_digit(u32::from(byte & 0xf), 16).unwrap_or('0'));
            }
        }
    }
    out
}

/// Render the artifact source for a packed bundle and its input paths.
///
/// Substitution is a single pass over the template: each placeholder is
/// located in the template text only, so substituted values are never
/// rescanned. Bundle bytes or path names that happen to contain
/// placeholder text come through verbatim.
pub fn render_artifact(bundle: &[u8], source_paths: &[String]) -> String {
    let paths = source_paths
        .iter()
        .map(|path| format!("{path:?}"))
        .collect::<Vec<_>>()
        .join(", ");
    let escaped = escape_byte_literal(bundle);

    let (head, rest) = ARTIFACT_TEMPLATE
        .split_once("@BUNDLE@")
        .unwrap_or((ARTIFACT_TEMPLATE, ""));
    let (mid, tail) = rest.split_once("@SOURCE_PATHS@").unwrap_or((rest, ""));
    format!("{head}{escaped}{mid}{paths}{tail}")
}

/// Write the rendered artifact to [`OUTPUT_FILE`] under `dir`, returning
/// the path written.
pub fn write_artifact(dir: &Path, code: &str) -> Result<PathBuf> {
    let target = dir.join(OUTPUT_FILE);
    fs::write(&target, code).map_err(|err| BundlerError::OutputWriteFailure {
        path: target.display().to_string(),
        reason: err.to_string(),
    })?;
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Reverse of `escape_byte_literal`, used to prove losslessness.
    fn unescape(text: &str) -> Vec<u8> {
        let mut out = Vec::new();
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            if c != '\\' {
                out.push(c as u8);
                continue;
            }
            match chars.next() {
                Some('x') => {
                    let hi = chars.next().unwrap().to_digit(16).unwrap() as u8;
                    let lo = chars.next().unwrap().to_digit(16).unwrap() as u8;
                    out.push(hi << 4 | lo);
                }
                Some(other) => out.push(other as u8),
                None => panic!("dangling escape"),
            }
        }
        out
    }

    #[test]
    fn escaping_is_lossless_for_every_byte_value() {
        let all: Vec<u8> = (0u8..=255).collect();
        let escaped = escape_byte_literal(&all);
        assert!(escaped.is_ascii());
        assert_eq!(unescape(&escaped), all);
    }

    #[test]
    fn escapes_quote_and_backslash() {
        assert_eq!(escape_byte_literal(b"say \"hi\"\\"), "say \\\"hi\\\"\\\\");
        assert_eq!(escape_byte_literal(&[0, 10, 255]), "\\x00\\x0a\\xff");
    }

    #[test]
    fn rendered_artifact_embeds_bundle_and_paths() {
        let code = render_artifact(b"\x01data", &["images".to_string(), "main.qml".to_string()]);
        assert!(code.contains("b\"\\x01data\""));
        assert!(code.contains(r#"&["images", "main.qml"]"#));
        assert!(code.contains("qrc_bundler::startup"));
        assert!(!code.contains("@BUNDLE@"));
        assert!(!code.contains("@SOURCE_PATHS@"));
    }

    #[test]
    fn placeholder_text_inside_bundle_bytes_survives() {
        let code = render_artifact(
            b"payload with @SOURCE_PATHS@ inside",
            &["images".to_string()],
        );
        assert!(code.contains("payload with @SOURCE_PATHS@ inside"));
        assert!(code.contains(r#"&["images"]"#));
    }

    #[test]
    fn placeholder_text_inside_path_names_survives() {
        let code = render_artifact(b"data", &["@BUNDLE@".to_string()]);
        assert!(code.contains(r#"&["@BUNDLE@"]"#));
        assert!(code.contains("b\"data\""));
    }

    #[test]
    fn writes_artifact_under_fixed_name() {
        let dir = tempdir().unwrap();
        let target = write_artifact(dir.path(), "// generated\n").unwrap();
        assert_eq!(target, dir.path().join(OUTPUT_FILE));
        assert_eq!(fs::read_to_string(target).unwrap(), "// generated\n");
    }

    #[test]
    fn unwritable_target_is_an_output_write_failure() {
        let dir = tempdir().unwrap();
        let err = write_artifact(&dir.path().join("no/such/dir"), "x").unwrap_err();
        assert!(matches!(err, BundlerError::OutputWriteFailure { .. }));
    }
}
