//! Picform API Library
//!
//! This crate provides the HTTP handlers, middleware, and application setup
//! for the image service.

pub mod constants;
pub mod error;
mod handlers;
mod middleware;
pub mod setup;
pub mod state;
mod telemetry;
mod utils;

// Re-exports
pub use error::OperationOutcome;
pub use state::AppState;
