//! Diffusion weights.

/// One neighbour that receives a share of the residual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tap {
    /// Column offset from the current pixel.
    pub dx: i32,
    /// Row offset; 0 is the current row.
    pub dy: usize,
    /// Numerator of the share, over [`Kernel::divisor`].
    pub weight: u8,
}

/// Weights for pushing a pixel's residual onto pixels not yet visited in a
/// row-major scan.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    pub taps: &'static [Tap],
    pub divisor: u8,
    /// Furthest row any tap reaches. The error buffer keeps `rows_ahead + 1`
    /// rows.
    pub rows_ahead: usize,
}

impl Kernel {
    /// Share of `error` that `tap` receives.
    #[inline]
    pub fn share(&self, tap: &Tap, error: f32) -> f32 {
        error * tap.weight as f32 / self.divisor as f32
    }
}

/// Floyd-Steinberg weights:
///
/// ```text
///        *   7
///    3   5   1     (/16)
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    taps: &[
        Tap { dx: 1, dy: 0, weight: 7 },
        Tap { dx: -1, dy: 1, weight: 3 },
        Tap { dx: 0, dy: 1, weight: 5 },
        Tap { dx: 1, dy: 1, weight: 1 },
    ],
    divisor: 16,
    rows_ahead: 1,
};
