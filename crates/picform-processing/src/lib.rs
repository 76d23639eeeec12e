//! Picform Processing Library
//!
//! Image decoding/encoding and the bitmap transforms behind each operation:
//! - Codec adapter (codec)
//! - Resize and crop (transform)
//! - Per-operation decode → transform → encode chains (pipeline)

pub mod codec;
pub mod error;
pub mod pipeline;
pub mod transform;

pub use codec::ImageCodec;
pub use error::ProcessingError;
pub use pipeline::ImagePipeline;
pub use transform::ImageTransformer;
