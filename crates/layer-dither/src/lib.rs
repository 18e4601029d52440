//! layer-dither: split grayscale images into stackable 1-bit layers
//!
//! An 8-bit grayscale image is quantized into five binary planes whose sum,
//! times 51, approximates the original at six intensity levels (0, 51, 102,
//! 153, 204, 255). The planes are meant to be produced as physical overlays
//! (stencils, screens, prints on film); stacking them reproduces the image.
//!
//! # Quick Start
//!
//! ```
//! use layer_dither::{bitmap, GrayImage, LayerQuantizer, LayerSummer, QuantizeOptions};
//!
//! let image = GrayImage::new(2, 2, vec![0, 51, 102, 255]).unwrap();
//!
//! // Encode: quantize and persist each plane as a 1-bit BMP
//! let layers = LayerQuantizer::new(QuantizeOptions::new().seed(7)).quantize(&image);
//! let files: Vec<Vec<u8>> = layers
//!     .planes()
//!     .iter()
//!     .map(|plane| bitmap::encode_plane(plane).unwrap())
//!     .collect();
//!
//! // Decode: read the planes back and sum them
//! let planes: Vec<_> = files
//!     .iter()
//!     .map(|bytes| bitmap::decode_plane(bytes).unwrap())
//!     .collect();
//! let restored = LayerSummer.sum(&planes).unwrap();
//!
//! assert_eq!(restored.pixels(), &[0, 51, 102, 255]);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! GrayImage ──> LayerQuantizer ──> LayerSet (5 planes) ──> bitmap::save_plane
//!                                        + blank 6th plane
//!
//! bitmap::load_plane x6 ──> LayerSummer ──> GrayImage ──> [smooth]
//! ```
//!
//! # Level Mapping
//!
//! For a pixel with intensity `raw` and diffused error `e`, the level is
//! `round((raw + e) / 51)` clamped into `0..=5`. Layer `k` is on when
//! `k < level`, or when a fresh uniform draw is below the rounding remainder.
//! Independent draws per layer decorrelate the dither noise between planes,
//! which reduces moiré when the stack is slightly misaligned.
//!
//! The draws come from a seeded [`rand::rngs::StdRng`] owned by the call, so
//! a fixed seed gives reproducible layers; without a seed every call is
//! freshly seeded from OS entropy.

pub mod bitmap;
pub mod dither;
pub mod error;
pub mod image;
pub mod restore;


pub use dither::{LayerQuantizer, QuantizeOptions};
pub use error::{LayerError, Result};
pub use image::{GrayImage, LayerPlane, LayerSet, LAYER_COUNT, LEVEL_STEP};
pub use restore::{smooth, LayerSummer};
