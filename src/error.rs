//! Error types for loading configuration and dictionary data.
//!
//! The rewriting pipeline itself never fails; these errors only surface from the
//! loaders, and the pipeline-facing constructors turn them into defaults.

use std::path::PathBuf;

/// Result type alias for fallible crate operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while reading or writing external data.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading or writing a file failed
    #[error("IO error on {path}: {source}")]
    Io {
        /// File that was being accessed
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Dictionary JSON could not be parsed
    #[error("Malformed dictionary JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Dictionary XML block-list could not be parsed
    #[error("Malformed dictionary XML at byte {position}: {reason}")]
    Xml {
        /// Reader position where parsing stopped
        position: usize,
        /// Parser message
        reason: String,
    },

    /// The dictionary alternation could not be compiled
    #[error("Failed to compile dictionary pattern: {0}")]
    Regex(#[from] regex::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
