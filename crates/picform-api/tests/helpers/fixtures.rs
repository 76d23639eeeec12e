//! Test fixtures: generated images and multipart parts.

use axum_test::multipart::Part;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

/// Smooth RGB gradient; survives JPEG compression with small per-pixel error.
pub fn gradient(width: u32, height: u32) -> DynamicImage {
    let mut img = RgbImage::new(width, height);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = Rgb([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            160,
        ]);
    }
    DynamicImage::ImageRgb8(img)
}

pub fn encode(img: &DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), format)
        .expect("Failed to encode fixture");
    buffer
}

pub fn create_test_jpeg(width: u32, height: u32) -> Vec<u8> {
    encode(&gradient(width, height), ImageFormat::Jpeg)
}

pub fn create_test_png(width: u32, height: u32) -> Vec<u8> {
    encode(&gradient(width, height), ImageFormat::Png)
}

/// Decode bytes and report the sniffed format.
pub fn decode(data: &[u8]) -> (DynamicImage, ImageFormat) {
    let format = image::guess_format(data).expect("Unrecognized image format");
    let img = image::load_from_memory(data).expect("Failed to decode image");
    (img, format)
}

/// Multipart `file` part
pub fn file_part(data: Vec<u8>, filename: &str, mime_type: &str) -> Part {
    Part::bytes(bytes::Bytes::from(data))
        .file_name(filename.to_string())
        .mime_type(mime_type.to_string())
}

/// Whether two pixels agree within `tolerance` per channel
pub fn pixel_close(a: &[u8], b: &[u8], tolerance: u8) -> bool {
    a.iter().zip(b).all(|(a, b)| a.abs_diff(*b) <= tolerance)
}
