//! Multi-layer error diffusion.
//!
//! A grayscale image is split into [`LAYER_COUNT`](crate::LAYER_COUNT)
//! binary planes. Each pixel is reduced to a level in `0..=5` (one level per
//! 51 intensity steps), the level fans out to the planes, and the residual is
//! pushed to unvisited neighbours with the Floyd-Steinberg kernel.
//!
//! The scan is strictly sequential: every pixel depends on the error diffused
//! into it by all pixels before it in row-major order. Independent images may
//! be quantized in parallel since nothing is shared between calls.
//!
//! # Example
//!
//! ```
//! use layer_dither::{GrayImage, LayerQuantizer, QuantizeOptions};
//!
//! let image = GrayImage::new(2, 2, vec![0, 51, 102, 255]).unwrap();
//! let quantizer = LayerQuantizer::new(QuantizeOptions::new().seed(1));
//! let layers = quantizer.quantize(&image);
//!
//! assert_eq!(layers.level_at(0, 0), 0);
//! assert_eq!(layers.level_at(1, 1), 5);
//! ```

mod kernel;
mod options;
mod quantizer;

pub use kernel::{Kernel, Tap, FLOYD_STEINBERG};
pub use options::QuantizeOptions;
pub use quantizer::{split_level, LayerQuantizer};

/// Residuals waiting to be added to pixels not yet visited.
///
/// Only the rows a kernel can reach are kept: `rows[0]` is the row being
/// scanned and `rows[d]` the row `d` below it. Rows above the scan line are
/// never read again, so the window gives the same result as a full-image
/// residual array.
#[derive(Debug)]
pub struct ErrorBuffer {
    rows: Vec<Vec<f32>>,
}

impl ErrorBuffer {
    /// Zeroed window `depth` rows deep.
    pub fn new(width: usize, depth: usize) -> Self {
        Self {
            rows: vec![vec![0.0; width]; depth],
        }
    }

    /// Residual collected so far for column `x` of the scan row.
    #[inline]
    pub fn get_accumulated(&self, x: usize) -> f32 {
        self.rows[0][x]
    }

    /// Add `error` to column `x`, `dy` rows below the scan row.
    ///
    /// Panics when the target is outside the window. Callers skip targets
    /// outside the image.
    #[inline]
    pub fn add_error(&mut self, x: usize, dy: usize, error: f32) {
        self.rows[dy][x] += error;
    }

    /// Move the window down one row. The row just scanned is recycled as the
    /// new bottom row, zeroed.
    pub fn advance_row(&mut self) {
        self.rows.rotate_left(1);
        if let Some(bottom) = self.rows.last_mut() {
            bottom.fill(0.0);
        }
    }
}
