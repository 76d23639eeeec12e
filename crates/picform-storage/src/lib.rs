//! Picform Storage Library
//!
//! Storage abstraction for operation outputs, plus the local filesystem backend.
//!
//! # Layout
//!
//! Every operation writes into its own flat directory under a single root:
//!
//! - `uploads/<filename>`
//! - `resized_images/resized_<filename>`
//! - `converted_images/<filename>.<format>`
//! - `cropped_images/cropped_<filename>`
//!
//! Filename derivation lives in the `layout` module so handlers and tests agree
//! on output paths.

pub mod layout;
pub mod local;
pub mod traits;

// Re-export commonly used types
pub use layout::{client_filename, output_filename};
pub use local::LocalStorage;
pub use traits::{Storage, StorageError, StorageResult};
