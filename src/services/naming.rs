//! File naming for numbered layer groups.
//!
//! Source image `N` (1-based) owns layer files `(N-1)*6 + 1 ..= (N-1)*6 + 6`:
//! five content layers followed by the blank sixth one.

use std::path::{Path, PathBuf};

use layer_dither::LAYER_COUNT;

/// Files per image: the content layers plus the blank one.
pub const FILES_PER_IMAGE: u32 = LAYER_COUNT as u32 + 1;

/// Number of layer file `slot` (1..=6) of image `image` (1-based).
///
/// ```
/// use layerstack::services::naming::layer_number;
///
/// assert_eq!(layer_number(1, 1), 1);
/// assert_eq!(layer_number(1, 6), 6);
/// assert_eq!(layer_number(3, 2), 14);
/// ```
#[inline]
pub fn layer_number(image: u32, slot: u32) -> u32 {
    debug_assert!(image >= 1, "images are numbered from 1");
    debug_assert!((1..=FILES_PER_IMAGE).contains(&slot), "slot out of range");
    (image - 1) * FILES_PER_IMAGE + slot
}

/// All six layer paths of an image, content layers first.
pub fn layer_paths(dir: &Path, image: u32) -> Vec<PathBuf> {
    (1..=FILES_PER_IMAGE)
        .map(|slot| dir.join(format!("{}.bmp", layer_number(image, slot))))
        .collect()
}

/// Source image path, e.g. `input/7.jpeg`.
pub fn input_path(dir: &Path, image: u32, extension: &str) -> PathBuf {
    dir.join(format!("{}.{}", image, extension.trim_start_matches('.')))
}

/// Restored image path, e.g. `restored/7.bmp`.
pub fn restored_path(dir: &Path, image: u32) -> PathBuf {
    dir.join(format!("{}.bmp", image))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_paths_for_first_image() {
        let paths = layer_paths(Path::new("out"), 1);
        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["1.bmp", "2.bmp", "3.bmp", "4.bmp", "5.bmp", "6.bmp"]);
    }

    #[test]
    fn test_layer_paths_for_later_image() {
        let paths = layer_paths(Path::new("out"), 40);
        assert_eq!(paths.first().unwrap(), &Path::new("out").join("235.bmp"));
        assert_eq!(paths.last().unwrap(), &Path::new("out").join("240.bmp"));
    }

    #[test]
    fn test_groups_do_not_overlap() {
        let last_of_first = layer_number(1, FILES_PER_IMAGE);
        let first_of_second = layer_number(2, 1);
        assert_eq!(first_of_second, last_of_first + 1);
    }

    #[test]
    fn test_input_path_strips_leading_dot() {
        assert_eq!(
            input_path(Path::new("in"), 3, ".png"),
            Path::new("in").join("3.png")
        );
        assert_eq!(
            input_path(Path::new("in"), 3, "jpeg"),
            Path::new("in").join("3.jpeg")
        );
    }

    #[test]
    fn test_restored_path() {
        assert_eq!(
            restored_path(Path::new("restored"), 12),
            Path::new("restored").join("12.bmp")
        );
    }
}
