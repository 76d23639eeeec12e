//! Storage setup and initialization

use anyhow::{Context, Result};
use picform_core::Config;
use picform_storage::{LocalStorage, Storage};
use std::sync::Arc;

/// Create the local storage backend and its directory layout
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    tracing::info!(root = %config.storage_root.display(), "Initializing storage...");

    let storage = LocalStorage::new(config.storage_root.clone())
        .await
        .with_context(|| {
            format!(
                "Failed to prepare storage directories under {}",
                config.storage_root.display()
            )
        })?;

    tracing::info!("Storage initialized successfully");
    Ok(Arc::new(storage))
}
