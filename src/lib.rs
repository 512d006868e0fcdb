#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod bundle;
pub mod codegen;
pub mod error;
pub mod models;
pub mod resolver;
pub mod runtime;

pub use bundle::{ResourceBundle, ResourceMap, pack, unpack};
pub use error::{BundlerError, Result};
pub use models::ResourceBinding;
pub use resolver::resolve;
pub use runtime::{StartupConfig, startup};
