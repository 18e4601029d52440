//! The five-layer quantizer.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{ErrorBuffer, QuantizeOptions, FLOYD_STEINBERG};
use crate::image::{GrayImage, LayerSet, LAYER_COUNT, LEVEL_STEP};

/// Splits an intensity into a clamped level and the remainder.
///
/// `level` is `round(adjusted / 51)` (half away from zero) clamped into
/// `0..=5`. `frac` is measured against the clamped level, so out-of-range
/// input turns into a remainder of at least 1 (every draw fires) or at most
/// -1 (no draw fires) instead of an invalid level.
///
/// ```
/// use layer_dither::dither::split_level;
///
/// assert_eq!(split_level(102.0), (2, 0.0));
/// let (level, frac) = split_level(76.5);
/// assert_eq!(level, 2);
/// assert!((frac + 0.5).abs() < 1e-6);
/// ```
#[inline]
pub fn split_level(adjusted: f32) -> (i32, f32) {
    let level_float = adjusted / LEVEL_STEP as f32;
    let level = (level_float.round() as i32).clamp(0, LAYER_COUNT as i32);
    (level, level_float - level as f32)
}

/// Error diffusion quantizer producing a [`LayerSet`].
///
/// Pixels are visited in row-major order. For each one:
///
/// ```text
/// adjusted   = raw + diffused error
/// level, frac = split_level(adjusted)
/// layer k on  = k < level  ||  draw_k < frac      (draw_k fresh per layer)
/// error       = adjusted - (level + frac) * 51
/// ```
///
/// `error` is diffused right 7/16, below-left 3/16, below 5/16 and
/// below-right 1/16; targets outside the image are skipped. The draw for a
/// layer is only taken when the deterministic test has not already turned it
/// on, so two layers of one pixel can disagree at the boundary.
///
/// # Example
///
/// ```
/// use layer_dither::{GrayImage, LayerQuantizer, QuantizeOptions};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let image = GrayImage::filled(8, 8, 128);
/// let quantizer = LayerQuantizer::new(QuantizeOptions::new());
/// let mut rng = StdRng::seed_from_u64(3);
/// let layers = quantizer.quantize_with_rng(&image, &mut rng);
/// assert_eq!(layers.width(), 8);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LayerQuantizer {
    options: QuantizeOptions,
}

impl LayerQuantizer {
    pub fn new(options: QuantizeOptions) -> Self {
        Self { options }
    }

    #[inline]
    pub fn options(&self) -> &QuantizeOptions {
        &self.options
    }

    /// Quantize with an RNG built from the configured seed, or from OS
    /// entropy when no seed is set.
    pub fn quantize(&self, image: &GrayImage) -> LayerSet {
        let mut rng = match self.options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.quantize_with_rng(image, &mut rng)
    }

    /// Quantize drawing from a caller-owned RNG.
    pub fn quantize_with_rng<R: Rng>(&self, image: &GrayImage, rng: &mut R) -> LayerSet {
        let width = image.width();
        let height = image.height();
        let kernel = &FLOYD_STEINBERG;
        let step = LEVEL_STEP as f32;

        let mut layers = LayerSet::blank(width, height);
        let mut error_buf = ErrorBuffer::new(width, kernel.rows_ahead + 1);
        let mut clamped = 0usize;

        for y in 0..height {
            for x in 0..width {
                let adjusted = image.get(x, y) as f32 + error_buf.get_accumulated(x);
                let (level, frac) = split_level(adjusted);
                if frac.abs() > 0.5 {
                    clamped += 1;
                }

                for k in 0..LAYER_COUNT {
                    let on = (k as i32) < level || (self.options.stochastic && rng.gen::<f32>() < frac);
                    if on {
                        layers.plane_mut(k).set(x, y, true);
                    }
                }

                let error = adjusted - (level as f32 + frac) * step;

                for tap in kernel.taps {
                    let nx = x as i64 + tap.dx as i64;
                    if nx >= 0 && (nx as usize) < width && y + tap.dy < height {
                        error_buf.add_error(nx as usize, tap.dy, kernel.share(tap, error));
                    }
                }
            }
            error_buf.advance_row();
        }

        if clamped > 0 {
            tracing::debug!(clamped, "Pixels outside the representable range were clamped");
        }
        tracing::debug!(
            width,
            height,
            stochastic = self.options.stochastic,
            "Quantized image into {} layers",
            LAYER_COUNT
        );

        layers
    }
}
