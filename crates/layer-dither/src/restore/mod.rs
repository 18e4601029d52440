//! Reconstruction of grayscale images from layer planes.
//!
//! - [`LayerSummer`]: counts "on" planes per pixel, times 51
//! - [`smooth`]: optional blur preview of the restored image

mod smooth;
mod summer;

pub use smooth::smooth;
pub use summer::LayerSummer;
