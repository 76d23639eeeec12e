//! Storage abstraction trait
//!
//! Handlers only see `Arc<dyn Storage>`, so tests can point the whole service at
//! a temporary directory.

use async_trait::async_trait;
use picform_core::{Operation, OperationError};
use std::path::PathBuf;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("Invalid filename: {0}")]
    InvalidKey(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for OperationError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::InvalidKey(name) => OperationError::InvalidFilename(name),
            other => OperationError::Io(other.to_string()),
        }
    }
}

/// Storage for operation outputs.
///
/// Filenames passed in must already be a single path component (see
/// [`crate::layout::client_filename`]); backends reject anything else.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Create every operation directory. Idempotent.
    async fn ensure_layout(&self) -> StorageResult<()>;

    /// Directory holding an operation's outputs
    fn directory(&self, operation: Operation) -> PathBuf;

    /// Write a complete file, replacing any existing file of the same name.
    /// Returns the path written.
    async fn write(&self, operation: Operation, filename: &str, data: &[u8])
        -> StorageResult<PathBuf>;
}
