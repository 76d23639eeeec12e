use crate::traits::{Storage, StorageError, StorageResult};
use async_trait::async_trait;
use picform_core::Operation;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Local filesystem storage implementation
#[derive(Clone, Debug)]
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage instance and its directory layout
    ///
    /// # Arguments
    /// * `root` - Parent of the operation directories (e.g., "/var/lib/picform")
    pub async fn new(root: impl Into<PathBuf>) -> StorageResult<Self> {
        let storage = LocalStorage { root: root.into() };
        storage.ensure_layout().await?;
        Ok(storage)
    }

    /// Convert an operation output name to a filesystem path
    ///
    /// The name must be a single path component; anything that could step out
    /// of the operation directory is rejected.
    fn key_to_path(&self, operation: Operation, filename: &str) -> StorageResult<PathBuf> {
        if filename.is_empty()
            || filename == "."
            || filename == ".."
            || filename.contains('/')
            || filename.contains('\\')
            || filename.contains('\0')
        {
            return Err(StorageError::InvalidKey(filename.to_string()));
        }

        Ok(self.directory(operation).join(filename))
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn ensure_layout(&self) -> StorageResult<()> {
        for operation in Operation::ALL {
            let dir = self.directory(operation);
            fs::create_dir_all(&dir).await.map_err(|e| {
                StorageError::ConfigError(format!(
                    "Failed to create storage directory {}: {}",
                    dir.display(),
                    e
                ))
            })?;
        }

        tracing::debug!(root = %self.root.display(), "Storage layout ready");
        Ok(())
    }

    fn directory(&self, operation: Operation) -> PathBuf {
        self.root.join(operation.directory())
    }

    async fn write(
        &self,
        operation: Operation,
        filename: &str,
        data: &[u8],
    ) -> StorageResult<PathBuf> {
        let path = self.key_to_path(operation, filename)?;
        let start = std::time::Instant::now();

        let mut file = fs::File::create(&path).await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to create file {}: {}", path.display(), e))
        })?;

        file.write_all(data).await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::WriteFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        tracing::info!(
            path = %path.display(),
            operation = %operation,
            size_bytes = data.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage write successful"
        );

        Ok(path)
    }
}
