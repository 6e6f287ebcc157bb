//! Error types for document reading.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when reading a documentation file.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Failed to read a file.
    #[error("failed to read file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The file has no `---` delimited front matter block.
    #[error("missing front matter in {path}")]
    MissingFrontmatter {
        /// Path to the offending file.
        path: PathBuf,
    },

    /// The front matter has no `title`, or the title is blank.
    #[error("missing title in front matter of {path}")]
    MissingTitle {
        /// Path to the offending file.
        path: PathBuf,
    },

    /// The front matter block is not valid YAML.
    #[error("invalid front matter in {path}: {source}")]
    InvalidFrontmatter {
        /// Path to the offending file.
        path: PathBuf,
        /// Underlying YAML error.
        source: serde_yaml::Error,
    },
}

impl DocumentError {
    /// Returns the path of the document that failed.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::ReadFile { path, .. }
            | Self::MissingFrontmatter { path }
            | Self::MissingTitle { path }
            | Self::InvalidFrontmatter { path, .. } => path,
        }
    }
}
