//! Per-operation processing chains
//!
//! Every chain is decode → transform → encode over in-memory buffers. These are
//! CPU-bound and synchronous; callers on an async runtime should move them onto
//! a blocking thread.

use crate::codec::{ImageCodec, MAX_JPEG_DIMENSION};
use crate::error::ProcessingError;
use crate::transform::ImageTransformer;
use bytes::Bytes;
use image::GenericImageView;
use picform_core::TargetFormat;

/// Largest output bitmap, in pixels, a single request may produce
pub const MAX_OUTPUT_PIXELS: u64 = 100_000_000;

#[derive(Debug, Clone, Copy, Default)]
pub struct ImagePipeline {
    codec: ImageCodec,
}

impl ImagePipeline {
    pub fn new(codec: ImageCodec) -> Self {
        Self { codec }
    }

    /// Resize to exactly `width`x`height` and encode as JPEG
    pub fn resize(&self, data: &[u8], width: u32, height: u32) -> Result<Bytes, ProcessingError> {
        let (img, source_format) = ImageCodec::decode(data)?;
        let (orig_width, orig_height) = img.dimensions();
        let (target_width, target_height) =
            ImageTransformer::target_dimensions(orig_width, orig_height, width, height);
        check_encodable(target_width, target_height)?;

        tracing::debug!(
            source_format = ?source_format,
            orig_width,
            orig_height,
            target_width,
            target_height,
            "Resizing image"
        );

        let resized = ImageTransformer::resize(&img, width, height);
        self.codec.encode(&resized, TargetFormat::Jpeg)
    }

    /// Re-encode into `format`; the bitmap is untouched
    pub fn convert(&self, data: &[u8], format: TargetFormat) -> Result<Bytes, ProcessingError> {
        let (img, source_format) = ImageCodec::decode(data)?;

        tracing::debug!(
            source_format = ?source_format,
            target_format = %format,
            width = img.width(),
            height = img.height(),
            "Converting image"
        );

        self.codec.encode(&img, format)
    }

    /// Cut a `width`x`height` window at (`x`, `y`) and encode as JPEG.
    /// Parts of the window outside the source come out black.
    pub fn crop(
        &self,
        data: &[u8],
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    ) -> Result<Bytes, ProcessingError> {
        let (img, source_format) = ImageCodec::decode(data)?;
        check_encodable(width, height)?;

        tracing::debug!(
            source_format = ?source_format,
            x,
            y,
            width,
            height,
            "Cropping image"
        );

        let cropped = ImageTransformer::crop(&img, x, y, width, height);
        self.codec.encode(&cropped, TargetFormat::Jpeg)
    }
}

/// Reject output sizes JPEG cannot hold, or that would exhaust memory, before
/// allocating the bitmap
fn check_encodable(width: u32, height: u32) -> Result<(), ProcessingError> {
    if width == 0 || height == 0 {
        return Err(ProcessingError::EmptyImage { width, height });
    }
    if width > MAX_JPEG_DIMENSION || height > MAX_JPEG_DIMENSION {
        return Err(ProcessingError::TooLarge { width, height });
    }
    if width as u64 * height as u64 > MAX_OUTPUT_PIXELS {
        return Err(ProcessingError::TooLarge { width, height });
    }
    Ok(())
}
