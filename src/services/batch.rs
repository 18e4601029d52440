//! Batch drivers over numbered images.
//!
//! `run_split` turns `input/N.<ext>` into layer files `(N-1)*6+1 ..= (N-1)*6+6`
//! and `run_restore` sums each group back into `restored/N.bmp`.

use std::path::{Path, PathBuf};

use layer_dither::bitmap::{load_plane, save_plane};
use layer_dither::{smooth, LayerPlane, LayerQuantizer, LayerSummer, QuantizeOptions, LAYER_COUNT};
use rand::Rng;

use crate::error::AppError;
use crate::models::AppConfig;
use crate::services::image_io::{load_grayscale, save_grayscale_bmp};
use crate::services::naming::{input_path, layer_paths, restored_path};

/// Outcome counts of a batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchReport {
    /// Images written successfully
    pub processed: u32,
    /// Images with no input on disk
    pub skipped: u32,
    /// Images that failed (only with `continue_on_error`)
    pub failed: u32,
}

/// Outcome of a single image in a batch.
enum Step {
    Done,
    Missing,
}

/// Seed the batch draws from. A configured seed wins; otherwise a fresh one
/// is drawn and logged so the run can be repeated.
pub fn resolve_seed(config: &AppConfig) -> u64 {
    match config.seed {
        Some(seed) => seed,
        None => {
            let seed: u64 = rand::thread_rng().gen();
            tracing::info!(seed, "No seed configured, drew a random one");
            seed
        }
    }
}

/// Options for image `image` of a batch with base seed `base_seed`.
pub fn options_for_image(config: &AppConfig, base_seed: u64, image: u32) -> QuantizeOptions {
    QuantizeOptions::new()
        .stochastic(config.stochastic)
        .seed(base_seed.wrapping_add(image as u64))
}

/// Quantize one source image and write its six layer files.
///
/// Returns the paths written, content layers first.
pub fn split_image(
    quantizer: &LayerQuantizer,
    input: &Path,
    layers_dir: &Path,
    image: u32,
) -> Result<Vec<PathBuf>, AppError> {
    let gray = load_grayscale(input)?;
    let layers = quantizer.quantize(&gray);
    let paths = layer_paths(layers_dir, image);

    let blank = layers.blank_plane();
    let planes = layers.planes().iter().chain(std::iter::once(&blank));
    for (plane, path) in planes.zip(&paths) {
        save_plane(plane, path).map_err(|e| AppError::layer(path, e))?;
    }

    tracing::debug!(
        image,
        width = gray.width(),
        height = gray.height(),
        "Wrote layer group"
    );
    Ok(paths)
}

/// Sum the layer group of image `image` and write the restored BMP.
///
/// The five content layers are required. The sixth is read and size-checked
/// when present.
pub fn restore_image(
    layers_dir: &Path,
    restored_dir: &Path,
    image: u32,
    smooth_passes: usize,
) -> Result<PathBuf, AppError> {
    let paths = layer_paths(layers_dir, image);
    let mut planes: Vec<LayerPlane> = Vec::with_capacity(paths.len());
    for (i, path) in paths.iter().enumerate() {
        if i >= LAYER_COUNT && !path.exists() {
            break;
        }
        planes.push(load_plane(path).map_err(|e| AppError::layer(path, e))?);
    }

    let summed = LayerSummer
        .sum(&planes)
        .map_err(|source| AppError::Restore { image, source })?;
    let restored = smooth(&summed, smooth_passes);

    let output = restored_path(restored_dir, image);
    save_grayscale_bmp(&output, &restored)?;
    tracing::debug!(image, path = %output.display(), "Wrote restored image");
    Ok(output)
}

/// Split every `input_dir/N.<ext>` for N in `1..=image_count`.
pub fn run_split(config: &AppConfig) -> Result<BatchReport, AppError> {
    std::fs::create_dir_all(&config.layers_dir)?;
    let base_seed = resolve_seed(config);

    tracing::info!(
        input = %config.input_dir.display(),
        output = %config.layers_dir.display(),
        images = config.image_count,
        stochastic = config.stochastic,
        "Splitting images into layers"
    );

    run_batch(config, "split", |image| {
        let input = input_path(&config.input_dir, image, &config.input_extension);
        if !input.exists() {
            tracing::warn!(image, path = %input.display(), "Input image missing, skipping");
            return Ok(Step::Missing);
        }
        let quantizer = LayerQuantizer::new(options_for_image(config, base_seed, image));
        split_image(&quantizer, &input, &config.layers_dir, image)?;
        Ok(Step::Done)
    })
}

/// Restore every layer group for N in `1..=image_count`.
pub fn run_restore(config: &AppConfig) -> Result<BatchReport, AppError> {
    std::fs::create_dir_all(&config.restored_dir)?;

    tracing::info!(
        layers = %config.layers_dir.display(),
        output = %config.restored_dir.display(),
        images = config.image_count,
        smooth_passes = config.smooth_passes,
        "Restoring images from layers"
    );

    run_batch(config, "restore", |image| {
        let paths = layer_paths(&config.layers_dir, image);
        if paths.iter().all(|p| !p.exists()) {
            tracing::warn!(image, "Layer group missing, skipping");
            return Ok(Step::Missing);
        }
        restore_image(
            &config.layers_dir,
            &config.restored_dir,
            image,
            config.smooth_passes,
        )?;
        Ok(Step::Done)
    })
}

fn run_batch<F>(config: &AppConfig, stage: &str, mut step: F) -> Result<BatchReport, AppError>
where
    F: FnMut(u32) -> Result<Step, AppError>,
{
    let mut report = BatchReport::default();
    for image in 1..=config.image_count {
        match step(image) {
            Ok(Step::Done) => report.processed += 1,
            Ok(Step::Missing) => report.skipped += 1,
            Err(e) if config.continue_on_error => {
                tracing::error!(image, stage, error = %e, "Image failed, continuing");
                report.failed += 1;
            }
            Err(e) => return Err(e),
        }
    }

    tracing::info!(
        stage,
        processed = report.processed,
        skipped = report.skipped,
        failed = report.failed,
        "Batch finished"
    );
    Ok(report)
}
