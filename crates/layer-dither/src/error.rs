//! Error type shared by the codec, quantizer and summer.
//!
//! [`LayerError`] covers every way a single image's processing can fail.
//! Codec errors abort that image and are reported to the caller; nothing in
//! this crate retries or patches corrupt input.

use thiserror::Error;

/// Errors produced while building, persisting or restoring layers.
#[derive(Debug, Error)]
pub enum LayerError {
    /// File missing, unreadable, unwritable, or shorter than declared.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The byte stream is not a 1-bit bitmap this codec understands.
    #[error("format error: {0}")]
    Format(String),

    /// Two planes passed to the summer have different dimensions.
    #[error("dimension mismatch: layer {index} is {found_width}x{found_height}, expected {width}x{height}")]
    DimensionMismatch {
        /// Position of the offending plane in the input slice
        index: usize,
        /// Width of the first plane
        width: usize,
        /// Height of the first plane
        height: usize,
        /// Width of the offending plane
        found_width: usize,
        /// Height of the offending plane
        found_height: usize,
    },

    /// The summer was given a plane count other than 5 or 6.
    #[error("expected 5 or 6 layers, got {0}")]
    LayerCount(usize),

    /// Pixel buffer length does not match the declared dimensions.
    #[error("invalid image: {0}")]
    InvalidImage(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LayerError>;
