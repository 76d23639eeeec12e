use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, RgbaImage};

/// Bitmap transforms. All of them are pure: the source image is never mutated.
pub struct ImageTransformer;

impl ImageTransformer {
    /// Resolve requested resize dimensions against the source size.
    ///
    /// A zero dimension is derived from the other one, preserving aspect ratio.
    /// The derived side is `floor(0.7 + exact)` (so 2.4 becomes 3) and never
    /// below 1. Both zero keeps the source size.
    pub fn target_dimensions(orig_width: u32, orig_height: u32, width: u32, height: u32) -> (u32, u32) {
        if orig_width == 0 || orig_height == 0 {
            return (width, height);
        }

        match (width, height) {
            (0, 0) => (orig_width, orig_height),
            (w, 0) => {
                let scale = orig_width as f64 / w as f64;
                (w, derived_side(orig_height, scale))
            }
            (0, h) => {
                let scale = orig_height as f64 / h as f64;
                (derived_side(orig_width, scale), h)
            }
            (w, h) => (w, h),
        }
    }

    /// Scale to exactly the resolved dimensions with a Lanczos3 filter.
    /// Aspect ratio is not preserved when both dimensions are given.
    pub fn resize(img: &DynamicImage, width: u32, height: u32) -> DynamicImage {
        let (orig_width, orig_height) = img.dimensions();
        let (width, height) = Self::target_dimensions(orig_width, orig_height, width, height);

        img.resize_exact(width, height, FilterType::Lanczos3)
    }

    /// Copy the `width`x`height` window whose top-left corner sits at (`x`, `y`)
    /// in source coordinates onto a fresh RGBA canvas.
    ///
    /// The window may extend past the source, or lie entirely outside it; those
    /// canvas pixels stay zero (transparent black).
    pub fn crop(img: &DynamicImage, x: i64, y: i64, width: u32, height: u32) -> DynamicImage {
        let mut canvas = RgbaImage::new(width, height);
        let source = img.to_rgba8();

        // Drawing the source at (-x, -y) lands source pixel (x, y) on canvas (0, 0)
        imageops::replace(&mut canvas, &source, x.saturating_neg(), y.saturating_neg());

        DynamicImage::ImageRgba8(canvas)
    }
}

fn derived_side(orig: u32, scale: f64) -> u32 {
    ((0.7 + orig as f64 / scale) as u32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn coordinate_image(width: u32, height: u32) -> DynamicImage {
        let mut img = RgbaImage::new(width, height);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = Rgba([x as u8, y as u8, 100, 255]);
        }
        DynamicImage::ImageRgba8(img)
    }

    #[test]
    fn test_target_dimensions_explicit() {
        assert_eq!(ImageTransformer::target_dimensions(640, 480, 200, 100), (200, 100));
    }

    #[test]
    fn test_target_dimensions_preserve_aspect_ratio() {
        assert_eq!(ImageTransformer::target_dimensions(640, 480, 320, 0), (320, 240));
        assert_eq!(ImageTransformer::target_dimensions(640, 480, 0, 120), (160, 120));
        assert_eq!(ImageTransformer::target_dimensions(1000, 10, 10, 0), (10, 1));
        assert_eq!(ImageTransformer::target_dimensions(640, 480, 0, 0), (640, 480));
    }

    #[test]
    fn test_target_dimensions_rounding_bias() {
        // exact height 2.4 → 3, exact 2.2 → 2
        assert_eq!(ImageTransformer::target_dimensions(10, 24, 1, 0), (1, 3));
        assert_eq!(ImageTransformer::target_dimensions(10, 22, 1, 0), (1, 2));
        // exact width 0.1 is clamped up
        assert_eq!(ImageTransformer::target_dimensions(1, 100, 0, 10), (1, 10));
    }

    #[test]
    fn test_resize_exact_dimensions() {
        let img = coordinate_image(64, 48);
        let resized = ImageTransformer::resize(&img, 200, 100);
        assert_eq!(resized.dimensions(), (200, 100));

        let resized = ImageTransformer::resize(&img, 1, 1);
        assert_eq!(resized.dimensions(), (1, 1));
    }

    #[test]
    fn test_crop_inside_bounds_copies_pixels() {
        let img = coordinate_image(100, 100);
        let cropped = ImageTransformer::crop(&img, 10, 20, 30, 40);
        assert_eq!(cropped.dimensions(), (30, 40));

        let cropped = cropped.to_rgba8();
        let source = img.to_rgba8();
        for (x, y, pixel) in cropped.enumerate_pixels() {
            assert_eq!(pixel, source.get_pixel(x + 10, y + 20));
        }
    }

    #[test]
    fn test_crop_overhang_is_transparent_black() {
        let img = coordinate_image(100, 100);
        let cropped = ImageTransformer::crop(&img, 90, 90, 20, 20).to_rgba8();

        assert_eq!(cropped.get_pixel(0, 0), &Rgba([90, 90, 100, 255]));
        assert_eq!(cropped.get_pixel(9, 9), &Rgba([99, 99, 100, 255]));
        assert_eq!(cropped.get_pixel(10, 0), &Rgba([0, 0, 0, 0]));
        assert_eq!(cropped.get_pixel(19, 19), &Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_crop_negative_origin() {
        let img = coordinate_image(10, 10);
        let cropped = ImageTransformer::crop(&img, -5, -5, 10, 10).to_rgba8();

        assert_eq!(cropped.get_pixel(0, 0), &Rgba([0, 0, 0, 0]));
        assert_eq!(cropped.get_pixel(5, 5), &Rgba([0, 0, 100, 255]));
        assert_eq!(cropped.get_pixel(9, 9), &Rgba([4, 4, 100, 255]));
    }

    #[test]
    fn test_crop_entirely_outside() {
        let img = coordinate_image(100, 100);
        let cropped = ImageTransformer::crop(&img, 500, 500, 50, 50).to_rgba8();

        assert_eq!(cropped.dimensions(), (50, 50));
        assert!(cropped.pixels().all(|p| *p == Rgba([0, 0, 0, 0])));
    }

    #[test]
    fn test_crop_zero_size() {
        let img = coordinate_image(10, 10);
        let cropped = ImageTransformer::crop(&img, 0, 0, 0, 10);
        assert_eq!(cropped.dimensions(), (0, 10));
    }
}
