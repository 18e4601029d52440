//! In-memory image types.
//!
//! - [`GrayImage`]: 8-bit grayscale buffer (quantizer input, summer output)
//! - [`LayerPlane`]: one binary plane
//! - [`LayerSet`]: the five content planes of one image

mod gray_image;
mod layer_set;

pub use gray_image::GrayImage;
pub use layer_set::{LayerPlane, LayerSet, LAYER_COUNT, LEVEL_STEP};
