//! Picform Core Library
//!
//! Domain models, error taxonomy and configuration shared by the storage,
//! processing and API crates.

pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::Config;
pub use error::{IntegerField, LogLevel, OperationError};
pub use models::{Operation, TargetFormat};
