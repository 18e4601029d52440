//! Binary planes and the five-plane layer set.
//!
//! A [`LayerPlane`] is one monochrome cut/print. A [`LayerSet`] is the ordered
//! group of [`LAYER_COUNT`] planes a single grayscale image is split into;
//! layer `k` is on for a pixel when that pixel's level exceeds `k` (or the
//! stochastic draw fired at the boundary).

use crate::error::{LayerError, Result};

/// Number of content layers per image.
pub const LAYER_COUNT: usize = 5;

/// Intensity contributed by one "on" layer (255 / 5).
pub const LEVEL_STEP: u8 = 51;

/// One binary plane, row-major, top row first. `true` means "on" (white).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerPlane {
    width: usize,
    height: usize,
    bits: Vec<bool>,
}

impl LayerPlane {
    /// All-off (black) plane.
    pub fn blank(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            bits: vec![false; width * height],
        }
    }

    /// Wrap a bit buffer, checking that its length is `width * height`.
    pub fn from_bits(width: usize, height: usize, bits: Vec<bool>) -> Result<Self> {
        if bits.len() != width * height {
            return Err(LayerError::InvalidImage(format!(
                "plane has {} bits, expected {}x{}={}",
                bits.len(),
                width,
                height,
                width * height
            )));
        }
        Ok(Self {
            width,
            height,
            bits,
        })
    }

    /// Test pattern: left half off, right half on (split at `width / 2`).
    pub fn half_split(width: usize, height: usize) -> Self {
        let mid = width / 2;
        let bits = (0..width * height).map(|i| i % width >= mid).collect();
        Self {
            width,
            height,
            bits,
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

    #[inline]
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.bits[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, on: bool) {
        self.bits[y * self.width + x] = on;
    }

    /// Number of "on" pixels.
    pub fn count_on(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    #[inline]
    pub fn same_size(&self, other: &LayerPlane) -> bool {
        self.width == other.width && self.height == other.height
    }
}

/// The [`LAYER_COUNT`] planes produced for one image, in layer order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerSet {
    planes: [LayerPlane; LAYER_COUNT],
}

impl LayerSet {
    /// Empty set: every plane off.
    pub fn blank(width: usize, height: usize) -> Self {
        Self {
            planes: std::array::from_fn(|_| LayerPlane::blank(width, height)),
        }
    }

    /// Build from planes that must all share one size.
    pub fn from_planes(planes: [LayerPlane; LAYER_COUNT]) -> Result<Self> {
        let first = &planes[0];
        for (index, plane) in planes.iter().enumerate().skip(1) {
            if !plane.same_size(first) {
                return Err(LayerError::DimensionMismatch {
                    index,
                    width: first.width,
                    height: first.height,
                    found_width: plane.width,
                    found_height: plane.height,
                });
            }
        }
        Ok(Self { planes })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.planes[0].width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.planes[0].height
    }

    #[inline]
    pub fn planes(&self) -> &[LayerPlane; LAYER_COUNT] {
        &self.planes
    }

    #[inline]
    pub fn plane(&self, k: usize) -> &LayerPlane {
        &self.planes[k]
    }

    #[inline]
    pub(crate) fn plane_mut(&mut self, k: usize) -> &mut LayerPlane {
        &mut self.planes[k]
    }

    /// The always-black sixth plane written alongside the content layers.
    pub fn blank_plane(&self) -> LayerPlane {
        LayerPlane::blank(self.width(), self.height())
    }

    /// Number of layers on at `(x, y)`.
    pub fn level_at(&self, x: usize, y: usize) -> u8 {
        self.planes.iter().filter(|p| p.get(x, y)).count() as u8
    }

    pub fn into_planes(self) -> [LayerPlane; LAYER_COUNT] {
        self.planes
    }
}
