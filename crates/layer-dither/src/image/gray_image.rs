//! Owned 8-bit grayscale pixel buffer.

use crate::error::{LayerError, Result};

/// Single-channel 8-bit image, row-major, top row first.
///
/// This is both the quantizer's input and the summer's output. The buffer is
/// immutable once constructed.
///
/// # Example
///
/// ```
/// use layer_dither::GrayImage;
///
/// let image = GrayImage::new(2, 1, vec![0, 255]).unwrap();
/// assert_eq!(image.get(1, 0), 255);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayImage {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl GrayImage {
    /// Wrap a pixel buffer, checking that its length is `width * height`.
    pub fn new(width: usize, height: usize, pixels: Vec<u8>) -> Result<Self> {
        if pixels.len() != width * height {
            return Err(LayerError::InvalidImage(format!(
                "pixel buffer has {} bytes, expected {}x{}={}",
                pixels.len(),
                width,
                height,
                width * height
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Constructor for buffers sized by the caller.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `pixels.len() == width * height`.
    pub(crate) fn from_raw(width: usize, height: usize, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width * height,
            "pixels length ({}) must match width * height ({}x{})",
            pixels.len(),
            width,
            height,
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Image filled with a single intensity.
    pub fn filled(width: usize, height: usize, value: u8) -> Self {
        Self {
            width,
            height,
            pixels: vec![value; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major pixel bytes.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Intensity at `(x, y)`. Panics when out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.pixels[y * self.width + x]
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }
}
