//! Test images.

use layer_dither::{GrayImage, LEVEL_STEP};

/// Image whose every pixel sits exactly on a level, cycling 0, 51 .. 255.
pub fn level_steps(width: usize, height: usize) -> GrayImage {
    let pixels = (0..width * height)
        .map(|i| (i % 6) as u8 * LEVEL_STEP)
        .collect();
    GrayImage::new(width, height, pixels).expect("valid fixture")
}

/// Horizontal ramp from black to white.
pub fn ramp(width: usize, height: usize) -> GrayImage {
    let pixels = (0..height)
        .flat_map(|_| (0..width).map(move |x| (x * 255 / (width - 1).max(1)) as u8))
        .collect();
    GrayImage::new(width, height, pixels).expect("valid fixture")
}

/// Uniform gray.
pub fn flat(width: usize, height: usize, value: u8) -> GrayImage {
    GrayImage::filled(width, height, value)
}
