//! Content errors
//!
//! Every failure while loading or rendering a page ends up here. None of them
//! are recovered: they abort the current page render and surface in the
//! rendered shell.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("malformed JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("'{key}' is missing required field '{field}'")]
    MissingField { key: String, field: &'static str },

    #[error("'{key}' has invalid field '{field}': {reason}")]
    InvalidField {
        key: String,
        field: String,
        reason: String,
    },

    #[error("{} is not valid UTF-8", path.display())]
    Encoding { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ContentError {
    /// Map an I/O error on `path`, separating "absent" from other failures.
    pub(crate) fn from_io(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            ContentError::NotFound { path }
        } else {
            ContentError::Io { path, source }
        }
    }
}

pub type Result<T> = std::result::Result<T, ContentError>;
