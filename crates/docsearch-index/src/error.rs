//! Error types for the docsearch-index crate.

use std::{io, path::PathBuf};

use docsearch_config::ConfigError;
use docsearch_document::DocumentError;
use thiserror::Error;

/// Errors that can occur while building the index.
///
/// Index generation stops at the first error; no partial index is returned.
#[derive(Debug, Error)]
pub enum IndexError {
    /// A document could not be read or has invalid front matter.
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Walking a section directory failed.
    #[error("failed to walk {path}: {source}")]
    Walk {
        /// Directory being walked.
        path: PathBuf,
        /// Underlying walk error.
        source: walkdir::Error,
    },

    /// I/O error on a path outside the walk.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path the operation failed on.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The documentation root is missing or not a directory.
    #[error("docs root not found: {path}")]
    DocsRootNotFound {
        /// The configured docs root.
        path: PathBuf,
    },

    /// The configuration could not be applied.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
