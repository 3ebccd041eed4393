//! Task store error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during task store operations.
#[derive(Debug, Error)]
pub enum TaskStoreError {
    /// The database file could not be opened or created.
    #[error("failed to open database at {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: sqlx::Error,
    },

    /// The todo_items table could not be set up.
    #[error("failed to initialize schema: {0}")]
    Schema(#[source] sqlx::Error),

    /// Statement execution failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl TaskStoreError {
    /// Creates an open error for the given path.
    pub fn open(path: impl Into<PathBuf>, source: sqlx::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }
}

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;
