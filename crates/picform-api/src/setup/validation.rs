//! Configuration validation
//!
//! Validates critical configuration values at startup to catch misconfigurations early.

use anyhow::Result;
use picform_core::Config;

/// Validate critical configuration values
///
/// # Returns
/// Ok(()) if validation passes, Err with details if validation fails
pub fn validate_config(config: &Config) -> Result<()> {
    if config.server_port == 0 {
        return Err(anyhow::anyhow!("PORT cannot be 0"));
    }

    if config.max_upload_size_bytes == 0 {
        return Err(anyhow::anyhow!("MAX_UPLOAD_SIZE_MB cannot be 0"));
    }

    if !(1..=100).contains(&config.jpeg_quality) {
        return Err(anyhow::anyhow!(
            "JPEG_QUALITY must be between 1 and 100, got {}",
            config.jpeg_quality
        ));
    }

    if config.is_production() && config.server_host == "0.0.0.0" {
        tracing::warn!(
            "Production mode listening on all interfaces - ensure a reverse proxy fronts the service"
        );
    }

    Ok(())
}
