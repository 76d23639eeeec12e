//! Image codec adapter - byte stream ⇄ bitmap

use crate::error::ProcessingError;
use bytes::Bytes;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, GenericImageView, ImageError, ImageFormat, ImageReader};
use picform_core::TargetFormat;
use std::io::Cursor;

const DEFAULT_JPEG_QUALITY: u8 = 75;

/// Largest width or height a baseline JPEG can describe
pub const MAX_JPEG_DIMENSION: u32 = 65_535;

#[derive(Debug, Clone, Copy)]
pub struct ImageCodec {
    jpeg_quality: u8,
}

impl Default for ImageCodec {
    fn default() -> Self {
        Self {
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl ImageCodec {
    pub fn new(jpeg_quality: u8) -> Self {
        Self {
            jpeg_quality: jpeg_quality.clamp(1, 100),
        }
    }

    /// Decode image bytes, sniffing the format from the signature.
    ///
    /// The declared content type of the upload plays no part here.
    pub fn decode(data: &[u8]) -> Result<(DynamicImage, ImageFormat), ProcessingError> {
        let reader = ImageReader::new(Cursor::new(data))
            .with_guessed_format()
            .map_err(|e| ProcessingError::Decode(ImageError::IoError(e)))?;

        let Some(format) = reader.format() else {
            return Err(ProcessingError::UnknownFormat);
        };

        let img = reader.decode().map_err(ProcessingError::Decode)?;
        Ok((img, format))
    }

    /// Encode a bitmap into an in-memory buffer.
    ///
    /// JPEG has no alpha channel: anything other than 8-bit gray or RGB is
    /// flattened to RGB8 first, so fully transparent pixels come out black.
    /// PNG has no float samples: 32-bit float bitmaps (EXR, HDR) are stored
    /// as 16-bit.
    pub fn encode(&self, img: &DynamicImage, format: TargetFormat) -> Result<Bytes, ProcessingError> {
        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Err(ProcessingError::EmptyImage { width, height });
        }

        let estimated_size = (width as usize).saturating_mul(height as usize).saturating_mul(3) / 4;
        let mut buffer = Vec::with_capacity(estimated_size);

        match format {
            TargetFormat::Jpeg => {
                let encoder = JpegEncoder::new_with_quality(&mut buffer, self.jpeg_quality);
                match img {
                    DynamicImage::ImageRgb8(_) | DynamicImage::ImageLuma8(_) => {
                        img.write_with_encoder(encoder)
                    }
                    _ => DynamicImage::ImageRgb8(img.to_rgb8()).write_with_encoder(encoder),
                }
                .map_err(ProcessingError::Encode)?;
            }
            TargetFormat::Png => {
                let encoder = PngEncoder::new(&mut buffer);
                match img {
                    DynamicImage::ImageRgb32F(_) => {
                        DynamicImage::ImageRgb16(img.to_rgb16()).write_with_encoder(encoder)
                    }
                    DynamicImage::ImageRgba32F(_) => {
                        DynamicImage::ImageRgba16(img.to_rgba16()).write_with_encoder(encoder)
                    }
                    _ => img.write_with_encoder(encoder),
                }
                .map_err(ProcessingError::Encode)?;
            }
        }

        tracing::debug!(
            width,
            height,
            format = %format,
            size_bytes = buffer.len(),
            "Encoded image"
        );

        Ok(Bytes::from(buffer))
    }
}
