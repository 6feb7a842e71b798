//! Export file errors.

use std::path::PathBuf;

/// Errors that can occur while reading an export or writing the result.
#[derive(Debug, thiserror::Error)]
pub enum FilesError {
    #[error("Input file not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
