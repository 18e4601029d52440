//! Adapters over the `image` crate.
//!
//! - `load_grayscale`: read a JPEG/PNG/BMP into an owned 8-bit gray buffer.
//! - `save_grayscale_bmp`: write an 8-bit gray buffer as a BMP.
use image::{ExtendedColorType, ImageFormat};
use layer_dither::GrayImage;
use std::path::Path;

use crate::error::AppError;

/// Load an image from disk and convert to 8-bit grayscale.
pub fn load_grayscale(path: &Path) -> Result<GrayImage, AppError> {
    let img = image::open(path)
        .map_err(|e| AppError::image(path, e))?
        .into_luma8();
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(AppError::UnsupportedDimensions {
            path: path.to_path_buf(),
            width,
            height,
        });
    }
    GrayImage::new(width as usize, height as usize, img.into_raw())
        .map_err(|e| AppError::layer(path, e))
}

/// Write an 8-bit grayscale buffer as a single-channel BMP.
pub fn save_grayscale_bmp(path: &Path, gray: &GrayImage) -> Result<(), AppError> {
    let (width, height) = match (u32::try_from(gray.width()), u32::try_from(gray.height())) {
        (Ok(w), Ok(h)) if w > 0 && h > 0 => (w, h),
        _ => {
            return Err(AppError::UnsupportedDimensions {
                path: path.to_path_buf(),
                width: gray.width() as u32,
                height: gray.height() as u32,
            })
        }
    };
    image::save_buffer_with_format(
        path,
        gray.pixels(),
        width,
        height,
        ExtendedColorType::L8,
        ImageFormat::Bmp,
    )
    .map_err(|e| AppError::image(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: usize, height: usize) -> GrayImage {
        let pixels = (0..width * height).map(|i| (i * 255 / (width * height - 1)) as u8).collect();
        GrayImage::new(width, height, pixels).unwrap()
    }

    #[test]
    fn test_load_png_as_grayscale() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("1.png");
        let source = gradient(5, 3);
        image::save_buffer(&path, source.pixels(), 5, 3, ExtendedColorType::L8).unwrap();

        let loaded = load_grayscale(&path).unwrap();
        assert_eq!(loaded, source);
    }

    #[test]
    fn test_load_converts_rgb_to_luma() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rgb.png");
        // Equal channels keep their value through the luma conversion
        let rgb = [51u8, 51, 51, 204, 204, 204];
        image::save_buffer(&path, &rgb, 2, 1, ExtendedColorType::Rgb8).unwrap();

        let loaded = load_grayscale(&path).unwrap();
        assert_eq!(loaded.pixels(), &[51, 204]);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_grayscale(Path::new("/nonexistent/1.jpeg"));
        assert!(matches!(result, Err(AppError::Image { .. })));
    }

    #[test]
    fn test_save_bmp_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("restored.bmp");
        let source = gradient(7, 4);
        save_grayscale_bmp(&path, &source).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[0..2], b"BM");
        let reloaded = load_grayscale(&path).unwrap();
        assert_eq!(reloaded, source);
    }

    #[test]
    fn test_save_rejects_empty_image() {
        let dir = tempfile::tempdir().unwrap();
        let empty = GrayImage::filled(0, 0, 0);
        let result = save_grayscale_bmp(&dir.path().join("empty.bmp"), &empty);
        assert!(matches!(result, Err(AppError::UnsupportedDimensions { .. })));
    }
}
