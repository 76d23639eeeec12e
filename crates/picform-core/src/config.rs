//! Configuration module
//!
//! Settings are read from the process environment (after loading `.env` if one
//! exists). Every value has a default so the service starts with no
//! configuration at all.

use std::env;
use std::path::PathBuf;

const SERVER_PORT: u16 = 8080;
const SERVER_HOST: &str = "0.0.0.0";
const STORAGE_ROOT: &str = ".";
const MAX_UPLOAD_SIZE_MB: usize = 32;
const JPEG_QUALITY: u8 = 75;

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    /// Parent directory of the four output directories
    pub storage_root: PathBuf,
    pub max_upload_size_bytes: usize,
    pub jpeg_quality: u8,
    pub environment: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_host: SERVER_HOST.to_string(),
            server_port: SERVER_PORT,
            storage_root: PathBuf::from(STORAGE_ROOT),
            max_upload_size_bytes: MAX_UPLOAD_SIZE_MB * 1024 * 1024,
            jpeg_quality: JPEG_QUALITY,
            environment: "development".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT")
            .or_else(|| lookup("APP_ENV"))
            .unwrap_or_else(|| "development".to_string());

        let server_port = match lookup("PORT") {
            Some(port) => port
                .trim()
                .parse::<u16>()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            None => SERVER_PORT,
        };

        let server_host = lookup("HOST")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| SERVER_HOST.to_string());

        let storage_root = lookup("STORAGE_ROOT")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(STORAGE_ROOT));

        let max_upload_size_mb = lookup("MAX_UPLOAD_SIZE_MB")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(MAX_UPLOAD_SIZE_MB);
        let max_upload_size_bytes = max_upload_size_mb
            .checked_mul(1024 * 1024)
            .ok_or_else(|| anyhow::anyhow!("MAX_UPLOAD_SIZE_MB must be a valid number"))?;

        let jpeg_quality = match lookup("JPEG_QUALITY") {
            Some(quality) => quality
                .trim()
                .parse::<u8>()
                .map_err(|_| anyhow::anyhow!("JPEG_QUALITY must be a number between 1 and 100"))?,
            None => JPEG_QUALITY,
        };

        Ok(Config {
            server_host,
            server_port,
            storage_root,
            max_upload_size_bytes,
            jpeg_quality,
            environment,
        })
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
