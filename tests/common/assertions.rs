//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use std::path::Path;

use layer_dither::bitmap::{row_bytes, HEADER_SIZE, PALETTE, PIXEL_DATA_OFFSET};

/// Assert `path` is a 1-bit BMP of the given size with the black/white
/// palette and a consistent file size field.
pub fn assert_layer_bmp(path: &Path, width: usize, height: usize) {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
    assert_eq!(&bytes[0..2], b"BM", "{} is not a BMP", path.display());

    let u32_at = |o: usize| u32::from_le_bytes([bytes[o], bytes[o + 1], bytes[o + 2], bytes[o + 3]]);
    let i32_at = |o: usize| u32_at(o) as i32;
    let u16_at = |o: usize| u16::from_le_bytes([bytes[o], bytes[o + 1]]);

    let data_offset = PIXEL_DATA_OFFSET as usize;
    let expected_len = data_offset + row_bytes(width) * height;
    assert_eq!(bytes.len(), expected_len, "file length of {}", path.display());
    assert_eq!(u32_at(2) as usize, expected_len, "file size field");
    assert_eq!(u32_at(10) as usize, data_offset, "data offset");
    assert_eq!(i32_at(18), width as i32, "width");
    assert_eq!(i32_at(22), height as i32, "height");
    assert_eq!(u16_at(28), 1, "bits per pixel");
    assert_eq!(&bytes[HEADER_SIZE..data_offset], &PALETTE[..], "palette");
}
