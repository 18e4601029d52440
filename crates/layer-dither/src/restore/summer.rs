//! Summing decoded layers back into a grayscale image.

use crate::error::{LayerError, Result};
use crate::image::{GrayImage, LayerPlane, LayerSet, LAYER_COUNT, LEVEL_STEP};

/// Reconstructs grayscale from binary planes.
///
/// Each output pixel is the number of "on" planes times 51. Only the first
/// [`LAYER_COUNT`] planes count; a sixth plane is accepted (layer files come
/// in groups of six) and checked for size but never contributes.
///
/// # Example
///
/// ```
/// use layer_dither::{LayerPlane, LayerSummer};
///
/// let mut planes = vec![LayerPlane::blank(1, 1); 6];
/// planes[0].set(0, 0, true);
/// planes[1].set(0, 0, true);
/// let image = LayerSummer.sum(&planes).unwrap();
/// assert_eq!(image.pixels(), &[102]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LayerSummer;

impl LayerSummer {
    /// Sum 5 or 6 planes of identical size.
    pub fn sum(&self, planes: &[LayerPlane]) -> Result<GrayImage> {
        if planes.len() != LAYER_COUNT && planes.len() != LAYER_COUNT + 1 {
            return Err(LayerError::LayerCount(planes.len()));
        }

        let first = &planes[0];
        for (index, plane) in planes.iter().enumerate().skip(1) {
            if !plane.same_size(first) {
                return Err(LayerError::DimensionMismatch {
                    index,
                    width: first.width(),
                    height: first.height(),
                    found_width: plane.width(),
                    found_height: plane.height(),
                });
            }
        }

        Ok(accumulate(first.width(), first.height(), &planes[..LAYER_COUNT]))
    }

    /// Sum an in-memory layer set. Cannot fail: the set is size-checked.
    pub fn sum_set(&self, layers: &LayerSet) -> GrayImage {
        accumulate(layers.width(), layers.height(), layers.planes())
    }
}

fn accumulate(width: usize, height: usize, planes: &[LayerPlane]) -> GrayImage {
    let mut pixels = vec![0u8; width * height];
    for plane in planes {
        for (pixel, &on) in pixels.iter_mut().zip(plane.bits()) {
            if on {
                *pixel += LEVEL_STEP;
            }
        }
    }
    GrayImage::from_raw(width, height, pixels)
}
