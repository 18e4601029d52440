//! Temporary batch directory layout for integration tests.

use image::ExtendedColorType;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use layer_dither::GrayImage;
use layerstack::models::AppConfig;
use layerstack::services::naming::input_path;

/// Scratch directory with `input/`, `output/` and `restored/` and a config
/// pointing at them.
pub struct TestWorkspace {
    dir: TempDir,
    pub config: AppConfig,
}

impl TestWorkspace {
    /// Workspace for `count` PNG inputs with a fixed seed.
    pub fn new(count: u32) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = AppConfig {
            input_dir: dir.path().join("input"),
            layers_dir: dir.path().join("output"),
            restored_dir: dir.path().join("restored"),
            image_count: count,
            input_extension: "png".to_string(),
            seed: Some(2024),
            ..AppConfig::default()
        };
        std::fs::create_dir_all(&config.input_dir).expect("Failed to create input dir");
        Self { dir, config }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write `image` as the PNG source for image number `n`.
    pub fn write_input(&self, n: u32, image: &GrayImage) -> PathBuf {
        let path = input_path(&self.config.input_dir, n, &self.config.input_extension);
        image::save_buffer(
            &path,
            image.pixels(),
            image.width() as u32,
            image.height() as u32,
            ExtendedColorType::L8,
        )
        .expect("Failed to write input image");
        path
    }

    /// Path of layer file `number` in the output directory.
    pub fn layer_file(&self, number: u32) -> PathBuf {
        self.config.layers_dir.join(format!("{number}.bmp"))
    }

    /// Sorted file names in the output directory.
    pub fn layer_file_names(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(&self.config.layers_dir)
            .map(|entries| {
                entries
                    .filter_map(|e| e.ok())
                    .map(|e| e.file_name().to_string_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default();
        names.sort_by_key(|name| {
            name.trim_end_matches(".bmp")
                .parse::<u32>()
                .unwrap_or(u32::MAX)
        });
        names
    }
}
