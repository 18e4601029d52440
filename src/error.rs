use std::path::PathBuf;

use layer_dither::LayerError;
use thiserror::Error;

/// Errors from the batch split/restore drivers.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Layer error in {path}: {source}")]
    Layer {
        path: PathBuf,
        #[source]
        source: LayerError,
    },

    #[error("Cannot restore image {image}: {source}")]
    Restore {
        image: u32,
        #[source]
        source: LayerError,
    },

    #[error("Image error in {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Unsupported image size {width}x{height} in {path}")]
    UnsupportedDimensions {
        path: PathBuf,
        width: u32,
        height: u32,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn layer(path: impl Into<PathBuf>, source: LayerError) -> Self {
        AppError::Layer {
            path: path.into(),
            source,
        }
    }

    pub fn image(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        AppError::Image {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_error_message() {
        let error = AppError::layer(
            "output/3.bmp",
            LayerError::Format("bits per pixel is 8, expected 1".to_string()),
        );
        assert_eq!(
            error.to_string(),
            "Layer error in output/3.bmp: format error: bits per pixel is 8, expected 1"
        );
    }

    #[test]
    fn test_restore_error_message() {
        let error = AppError::Restore {
            image: 2,
            source: LayerError::LayerCount(4),
        };
        assert_eq!(
            error.to_string(),
            "Cannot restore image 2: expected 5 or 6 layers, got 4"
        );
    }

    #[test]
    fn test_unsupported_dimensions_message() {
        let error = AppError::UnsupportedDimensions {
            path: PathBuf::from("input/1.jpeg"),
            width: 0,
            height: 10,
        };
        assert_eq!(
            error.to_string(),
            "Unsupported image size 0x10 in input/1.jpeg"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: AppError = io.into();
        match error {
            AppError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }
}
