//! Quantizer options.

/// Configuration for [`LayerQuantizer`](super::LayerQuantizer).
///
/// # Defaults
///
/// - Stochastic layer assignment: enabled
/// - Seed: none (fresh entropy per call)
///
/// # Example
///
/// ```
/// use layer_dither::QuantizeOptions;
///
/// // Reproducible output for tests
/// let options = QuantizeOptions::new().seed(42);
///
/// // Deterministic thresholding only
/// let options = QuantizeOptions::new().stochastic(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantizeOptions {
    /// Fire the per-layer random draw against the rounding remainder.
    ///
    /// When disabled, layer `k` is on only when `k < level`.
    ///
    /// Default: `true`
    pub stochastic: bool,

    /// Seed for the random draws. `None` seeds from OS entropy on every
    /// [`quantize`](super::LayerQuantizer::quantize) call.
    ///
    /// Default: `None`
    pub seed: Option<u64>,
}

impl Default for QuantizeOptions {
    fn default() -> Self {
        Self {
            stochastic: true,
            seed: None,
        }
    }
}

impl QuantizeOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the stochastic layer assignment.
    #[inline]
    pub fn stochastic(mut self, enabled: bool) -> Self {
        self.stochastic = enabled;
        self
    }

    /// Fix the random seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set or clear the random seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}
