//! Error types for resolution, packing, and artifact generation.
//!
//! Every failure is fatal: the pipeline makes a single pass and aborts at
//! the first error with no partial output.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BundlerError>;

/// Failure kinds surfaced by the bundler pipeline.
#[derive(Debug, Error)]
pub enum BundlerError {
    /// An input path does not exist or its metadata cannot be queried.
    #[error("path not found: {path}")]
    PathNotFound {
        /// The offending input path, as given.
        path: String,
    },

    /// A file could not be read. When the failure happens while packing,
    /// `label` names the resource the bytes were destined for.
    #[error("cannot read {path}{}: {reason}", label_note(.label))]
    UnreadableFile {
        /// Filesystem path that failed to read.
        path: String,
        /// Resource label, when the read happened at pack time.
        label: Option<String>,
        /// Underlying I/O error text.
        reason: String,
    },

    /// A manifest file exists but is not a valid RCC document.
    #[error("malformed manifest {path}: {reason}")]
    MalformedManifest {
        /// Path of the manifest that failed to parse.
        path: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A byte stream violated the bundle format: a packed bundle could not
    /// be deserialized, or an entry did not fit the format's length fields.
    #[error("malformed resource bundle: {reason}")]
    MalformedBundle {
        /// What was wrong with the byte stream.
        reason: String,
    },

    /// The generated artifact could not be written.
    #[error("cannot write {path}: {reason}")]
    OutputWriteFailure {
        /// Target path of the artifact.
        path: String,
        /// Underlying I/O error text.
        reason: String,
    },

    /// The command line did not describe a valid invocation.
    #[error("{message}")]
    InvalidArguments {
        /// Human readable description of the problem.
        message: String,
    },
}

fn label_note(label: &Option<String>) -> String {
    match label {
        Some(label) => format!(" (resource `{label}`)"),
        None => String::new(),
    }
}
