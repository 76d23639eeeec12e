//! Application setup and initialization
//!
//! Everything `main` needs to go from a [`Config`] to a running router.

pub mod routes;
pub mod server;
pub mod storage;
pub mod validation;

use crate::state::AppState;
use anyhow::{Context, Result};
use picform_core::Config;
use picform_processing::{ImageCodec, ImagePipeline};
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    validation::validate_config(&config).context("Configuration validation failed")?;

    crate::telemetry::init_telemetry(&config.environment)
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    tracing::info!("Configuration loaded and validated successfully");

    // Create the output directories before accepting any request
    let storage = storage::setup_storage(&config).await?;

    let pipeline = ImagePipeline::new(ImageCodec::new(config.jpeg_quality));
    let state = Arc::new(AppState::new(config, storage, pipeline));

    let router = routes::setup_routes(state.clone());

    Ok((state, router))
}
