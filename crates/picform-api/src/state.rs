//! Application state shared by every handler.

use picform_core::Config;
use picform_processing::ImagePipeline;
use picform_storage::Storage;
use std::sync::Arc;

/// Immutable after startup; handlers receive it as `State<Arc<AppState>>`.
pub struct AppState {
    pub config: Config,
    pub storage: Arc<dyn Storage>,
    pub pipeline: ImagePipeline,
}

impl AppState {
    pub fn new(config: Config, storage: Arc<dyn Storage>, pipeline: ImagePipeline) -> Self {
        Self {
            config,
            storage,
            pipeline,
        }
    }
}
