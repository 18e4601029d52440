//! Layerstack - stackable 1-bit layers from grayscale images
//!
//! Batch driver around `layer-dither`: numbered source images are split into
//! groups of six 1-bit BMP layers and restored from them.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;

pub use models::AppConfig;
