//! Error types for storage and repository operations.

use std::path::PathBuf;

use taskflow_protocol::{TaskId, ValidationError};

/// Errors raised by a [`KeyValueStorage`](crate::KeyValueStorage) backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The key cannot name a storage entry.
    #[error("invalid storage key {0:?}")]
    InvalidKey(String),

    /// Reading or writing a storage file failed.
    #[error("storage I/O error at {path}: {source}")]
    Io {
        /// The file or directory involved.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A stored value could not be encoded or decoded.
    #[error("storage serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StorageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors returned by [`TaskRepository`](crate::TaskRepository) mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    /// The submitted fields failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No task has the given id.
    #[error("task not found: {0}")]
    NotFound(TaskId),
}

/// A specialized Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;
