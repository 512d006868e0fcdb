//! Startup support shared by the tool and the generated artifact.
//!
//! The generated `qrc.rs` calls [`startup`] with the embedded bundle and
//! the original input paths. In normal operation the embedded bytes are
//! parsed; with repack enabled the resolver and packer run again over the
//! live filesystem so resource edits show up without regeneration.

use crate::bundle::{self, ResourceMap};
use crate::error::Result;
use crate::resolver;

/// Environment variable that enables repack mode in generated artifacts.
pub const REPACK_ENV_VAR: &str = "QRC_REPACK";

/// Explicit startup configuration for a generated artifact.
///
/// The environment is consulted only inside [`StartupConfig::from_env`],
/// at the call site that constructs the configuration; the loading logic
/// itself never reads it.
#[derive(Debug, Clone, Copy, Default)]
pub struct StartupConfig {
    /// Re-derive the bundle from the filesystem instead of using the
    /// embedded bytes.
    pub repack: bool,
}

impl StartupConfig {
    /// Build a configuration from the `QRC_REPACK` environment variable,
    /// read exactly once here.
    pub fn from_env() -> Self {
        let value = std::env::var(REPACK_ENV_VAR).ok();
        Self {
            repack: repack_enabled(value.as_deref()),
        }
    }
}

/// Interpret the raw toggle value: `1` and `true` enable repack mode.
fn repack_enabled(value: Option<&str>) -> bool {
    matches!(value, Some("1") | Some("true"))
}

/// Produce the resource mapping for a starting process.
///
/// Repack mode runs the identical resolve+pack pipeline over the original
/// input paths, which must still exist on disk, then parses its own
/// output; otherwise the embedded bundle is parsed directly. Any error is
/// an unrecoverable startup fault for the caller.
pub fn startup(
    embedded: &[u8],
    source_paths: &[String],
    config: &StartupConfig,
) -> Result<ResourceMap> {
    if config.repack {
        let bindings = resolver::resolve(source_paths)?;
        let packed = bundle::pack(&bindings)?;
        bundle::unpack(&packed)
    } else {
        bundle::unpack(embedded)
    }
}
