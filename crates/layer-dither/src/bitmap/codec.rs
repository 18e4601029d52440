//! Packing and unpacking of binary planes.
//!
//! Rows are stored bottom-to-top. Within a row the leftmost pixel is the most
//! significant bit of the first byte; unused trailing bits and the padding
//! bytes up to the 4-byte boundary are zero.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use super::header::{row_bytes, BitmapHeader, HEADER_SIZE, PALETTE, PALETTE_SIZE};
use crate::error::{LayerError, Result};
use crate::image::LayerPlane;

/// Serialize a plane to a complete 1-bit BMP byte stream.
///
/// ```
/// use layer_dither::{bitmap, LayerPlane};
///
/// let plane = LayerPlane::half_split(33, 1);
/// let bytes = bitmap::encode_plane(&plane).unwrap();
/// assert_eq!(bytes.len(), 62 + 8);
/// ```
pub fn encode_plane(plane: &LayerPlane) -> Result<Vec<u8>> {
    let header = BitmapHeader::for_plane(plane.width(), plane.height())?;
    let mut out = Vec::with_capacity(header.file_size as usize);
    out.extend_from_slice(&header.to_bytes());
    out.extend_from_slice(&PALETTE);
    pack_rows(plane, &mut out);
    Ok(out)
}

/// Write a plane to any sink.
pub fn write_plane<W: Write>(plane: &LayerPlane, mut writer: W) -> Result<()> {
    let bytes = encode_plane(plane)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

/// Create or overwrite `path` with the encoded plane.
pub fn save_plane(plane: &LayerPlane, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    write_plane(plane, BufWriter::new(file))?;
    tracing::trace!(path = %path.display(), width = plane.width(), height = plane.height(), "Wrote layer");
    Ok(())
}

/// Parse a complete 1-bit BMP byte stream.
///
/// Truncated input of any kind surfaces as [`LayerError::Io`] with
/// [`io::ErrorKind::UnexpectedEof`]; anything that is present but not a
/// bottom-up 1-bit bitmap is a [`LayerError::Format`].
pub fn decode_plane(bytes: &[u8]) -> Result<LayerPlane> {
    let header_bytes: &[u8; HEADER_SIZE] = bytes
        .get(..HEADER_SIZE)
        .and_then(|s| s.try_into().ok())
        .ok_or_else(|| truncated("header"))?;
    let header = BitmapHeader::parse(header_bytes)?;

    if header.bits_per_pixel != 1 {
        return Err(LayerError::Format(format!(
            "bits per pixel is {}, expected 1",
            header.bits_per_pixel
        )));
    }
    if header.width <= 0 || header.height <= 0 {
        return Err(LayerError::Format(format!(
            "non-positive dimensions {}x{}",
            header.width, header.height
        )));
    }

    // Palette is fixed black/white; it only has to be present.
    let palette_offset = header.palette_offset();
    bytes
        .get(palette_offset..palette_offset + PALETTE_SIZE)
        .ok_or_else(|| truncated("palette"))?;

    let width = header.width as usize;
    let height = header.height as usize;
    let stride = row_bytes(width);
    let data_len = stride
        .checked_mul(height)
        .ok_or_else(|| LayerError::Format(format!("plane {}x{} is too large", width, height)))?;
    let start = header.data_offset as usize;
    let data = start
        .checked_add(data_len)
        .and_then(|end| bytes.get(start..end))
        .ok_or_else(|| truncated("pixel data"))?;

    Ok(unpack_rows(data, width, height, stride))
}

/// Read a whole stream and decode it.
pub fn read_plane<R: Read>(mut reader: R) -> Result<LayerPlane> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    decode_plane(&bytes)
}

/// Open `path` and decode it.
pub fn load_plane(path: &Path) -> Result<LayerPlane> {
    let file = File::open(path)?;
    let plane = read_plane(BufReader::new(file))?;
    tracing::trace!(path = %path.display(), width = plane.width(), height = plane.height(), "Read layer");
    Ok(plane)
}

fn pack_rows(plane: &LayerPlane, out: &mut Vec<u8>) {
    let width = plane.width();
    let mut row = vec![0u8; row_bytes(width)];
    for y in (0..plane.height()).rev() {
        row.fill(0);
        let bits = &plane.bits()[y * width..(y + 1) * width];
        for (x, &on) in bits.iter().enumerate() {
            if on {
                row[x / 8] |= 0x80 >> (x % 8);
            }
        }
        out.extend_from_slice(&row);
    }
}

fn unpack_rows(data: &[u8], width: usize, height: usize, stride: usize) -> LayerPlane {
    let mut plane = LayerPlane::blank(width, height);
    for y in 0..height {
        let stored = &data[(height - 1 - y) * stride..][..stride];
        for x in 0..width {
            let bit = (stored[x / 8] >> (7 - x % 8)) & 1;
            if bit == 1 {
                plane.set(x, y, true);
            }
        }
    }
    plane
}

fn truncated(what: &str) -> LayerError {
    LayerError::Io(io::Error::new(
        io::ErrorKind::UnexpectedEof,
        format!("bitmap truncated in {}", what),
    ))
}
