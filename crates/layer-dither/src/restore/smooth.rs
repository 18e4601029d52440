//! Blur preview of a restored image.
//!
//! Physically stacked layers blend optically; repeated small blurs over the
//! restored image approximate how the overlay reads from a distance.

use crate::image::GrayImage;

/// Separable 5-tap binomial kernel.
const TAPS: [f32; 5] = [1.0, 4.0, 6.0, 4.0, 1.0];
const TAP_SUM: f32 = 16.0;

/// Apply `passes` rounds of a 5x5 binomial blur (`[1 4 6 4 1] / 16` in each
/// direction). Borders reflect without repeating the edge pixel
/// (`dcb|abcd|cba`). Zero passes returns a copy.
///
/// ```
/// use layer_dither::{smooth, GrayImage};
///
/// let flat = GrayImage::filled(4, 4, 153);
/// assert_eq!(smooth(&flat, 3), flat);
/// ```
pub fn smooth(image: &GrayImage, passes: usize) -> GrayImage {
    let width = image.width();
    let height = image.height();
    if passes == 0 || width == 0 || height == 0 {
        return image.clone();
    }

    let mut current: Vec<f32> = image.pixels().iter().map(|&p| p as f32).collect();
    let mut scratch = vec![0.0f32; current.len()];

    for _ in 0..passes {
        for y in 0..height {
            for x in 0..width {
                let mut acc = 0.0;
                for (i, &tap) in TAPS.iter().enumerate() {
                    let sx = reflect_101(x as isize + i as isize - 2, width);
                    acc += tap * current[y * width + sx];
                }
                scratch[y * width + x] = acc / TAP_SUM;
            }
        }
        for y in 0..height {
            for x in 0..width {
                let mut acc = 0.0;
                for (i, &tap) in TAPS.iter().enumerate() {
                    let sy = reflect_101(y as isize + i as isize - 2, height);
                    acc += tap * scratch[sy * width + x];
                }
                // Each pass lands on 8-bit values like a saved image would.
                current[y * width + x] = (acc / TAP_SUM).round().clamp(0.0, 255.0);
            }
        }
    }

    GrayImage::from_raw(width, height, current.into_iter().map(|v| v as u8).collect())
}

/// Mirror an out-of-range index back into `0..n` without repeating the edge.
fn reflect_101(mut i: isize, n: usize) -> usize {
    if n == 1 {
        return 0;
    }
    let n = n as isize;
    loop {
        if i < 0 {
            i = -i;
        } else if i >= n {
            i = 2 * (n - 1) - i;
        } else {
            return i as usize;
        }
    }
}
