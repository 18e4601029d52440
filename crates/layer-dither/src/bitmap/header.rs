//! Fixed 54-byte header of a 1-bit BMP layer file.
//!
//! Fields are encoded one by one, little-endian, at fixed offsets:
//!
//! ```text
//! offset size field
//!      0    2 signature "BM"
//!      2    4 file size
//!      6    4 reserved (0)
//!     10    4 pixel data offset (62)
//!     14    4 info header size (40)
//!     18    4 width (i32)
//!     22    4 height (i32)
//!     26    2 planes (1)
//!     28    2 bits per pixel (1)
//!     30    4 compression (0)
//!     34    4 image data size
//!     38    4 horizontal resolution (2835)
//!     42    4 vertical resolution (2835)
//!     46    4 colors used (2)
//!     50    4 colors important (2)
//! ```

use crate::error::{LayerError, Result};

/// Leading marker bytes.
pub const SIGNATURE: [u8; 2] = *b"BM";
/// File header plus info header.
pub const HEADER_SIZE: usize = 54;
/// BITMAPINFOHEADER size.
pub const INFO_HEADER_SIZE: u32 = 40;
/// Two palette entries of four bytes each.
pub const PALETTE_SIZE: usize = 8;
/// Where the packed rows start.
pub const PIXEL_DATA_OFFSET: u32 = (HEADER_SIZE + PALETTE_SIZE) as u32;
/// 72 DPI expressed in pixels per meter.
pub const RESOLUTION_PPM: i32 = 2835;
/// Black then white, each as B, G, R, reserved.
pub const PALETTE: [u8; PALETTE_SIZE] = [0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0x00];

/// Bytes per stored row: bits rounded up to a 32-bit boundary.
///
/// ```
/// use layer_dither::bitmap::row_bytes;
///
/// assert_eq!(row_bytes(1), 4);
/// assert_eq!(row_bytes(32), 4);
/// assert_eq!(row_bytes(33), 8);
/// ```
#[inline]
pub fn row_bytes(width: usize) -> usize {
    width.div_ceil(32) * 4
}

/// Decoded header fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapHeader {
    pub file_size: u32,
    pub data_offset: u32,
    pub info_size: u32,
    pub width: i32,
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    pub image_size: u32,
    pub x_resolution: i32,
    pub y_resolution: i32,
    pub colors_used: u32,
    pub colors_important: u32,
}

impl BitmapHeader {
    /// Header for a 1-bit plane of the given size.
    pub fn for_plane(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(LayerError::Format(format!(
                "cannot encode empty plane {}x{}",
                width, height
            )));
        }
        let too_large = || LayerError::Format(format!("plane {}x{} is too large", width, height));
        let image_size = row_bytes(width)
            .checked_mul(height)
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(too_large)?;
        let file_size = image_size
            .checked_add(PIXEL_DATA_OFFSET)
            .ok_or_else(too_large)?;

        Ok(Self {
            file_size,
            data_offset: PIXEL_DATA_OFFSET,
            info_size: INFO_HEADER_SIZE,
            width: i32::try_from(width).map_err(|_| too_large())?,
            height: i32::try_from(height).map_err(|_| too_large())?,
            planes: 1,
            bits_per_pixel: 1,
            compression: 0,
            image_size,
            x_resolution: RESOLUTION_PPM,
            y_resolution: RESOLUTION_PPM,
            colors_used: 2,
            colors_important: 2,
        })
    }

    /// Serialize to the fixed 54-byte layout.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        out[0..2].copy_from_slice(&SIGNATURE);
        put_u32(&mut out, 2, self.file_size);
        put_u32(&mut out, 6, 0);
        put_u32(&mut out, 10, self.data_offset);
        put_u32(&mut out, 14, self.info_size);
        put_i32(&mut out, 18, self.width);
        put_i32(&mut out, 22, self.height);
        put_u16(&mut out, 26, self.planes);
        put_u16(&mut out, 28, self.bits_per_pixel);
        put_u32(&mut out, 30, self.compression);
        put_u32(&mut out, 34, self.image_size);
        put_i32(&mut out, 38, self.x_resolution);
        put_i32(&mut out, 42, self.y_resolution);
        put_u32(&mut out, 46, self.colors_used);
        put_u32(&mut out, 50, self.colors_important);
        out
    }

    /// Parse the first 54 bytes. Only the signature is checked here;
    /// semantic validation is left to the reader.
    pub fn parse(bytes: &[u8; HEADER_SIZE]) -> Result<Self> {
        if bytes[0..2] != SIGNATURE {
            return Err(LayerError::Format(format!(
                "bad signature {:02X} {:02X}",
                bytes[0], bytes[1]
            )));
        }
        Ok(Self {
            file_size: get_u32(bytes, 2),
            data_offset: get_u32(bytes, 10),
            info_size: get_u32(bytes, 14),
            width: get_i32(bytes, 18),
            height: get_i32(bytes, 22),
            planes: get_u16(bytes, 26),
            bits_per_pixel: get_u16(bytes, 28),
            compression: get_u32(bytes, 30),
            image_size: get_u32(bytes, 34),
            x_resolution: get_i32(bytes, 38),
            y_resolution: get_i32(bytes, 42),
            colors_used: get_u32(bytes, 46),
            colors_important: get_u32(bytes, 50),
        })
    }

    /// Offset of the colour table: right after the info header.
    #[inline]
    pub fn palette_offset(&self) -> usize {
        14 + self.info_size as usize
    }
}

#[inline]
fn put_u16(out: &mut [u8], at: usize, v: u16) {
    out[at..at + 2].copy_from_slice(&v.to_le_bytes());
}

#[inline]
fn put_u32(out: &mut [u8], at: usize, v: u32) {
    out[at..at + 4].copy_from_slice(&v.to_le_bytes());
}

#[inline]
fn put_i32(out: &mut [u8], at: usize, v: i32) {
    out[at..at + 4].copy_from_slice(&v.to_le_bytes());
}

#[inline]
fn get_u16(bytes: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([bytes[at], bytes[at + 1]])
}

#[inline]
fn get_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

#[inline]
fn get_i32(bytes: &[u8], at: usize) -> i32 {
    i32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_bytes_padding() {
        assert_eq!(row_bytes(1), 4);
        assert_eq!(row_bytes(31), 4);
        assert_eq!(row_bytes(32), 4);
        assert_eq!(row_bytes(33), 8, "width 33 needs two 32-bit words");
        assert_eq!(row_bytes(64), 8);
        assert_eq!(row_bytes(500), 64);
    }

    #[test]
    fn test_header_field_offsets() {
        let header = BitmapHeader::for_plane(33, 2).unwrap();
        let bytes = header.to_bytes();

        assert_eq!(&bytes[0..2], b"BM");
        // 54 + 8 + 8*2
        assert_eq!(&bytes[2..6], &78u32.to_le_bytes());
        assert_eq!(&bytes[6..10], &[0, 0, 0, 0]);
        assert_eq!(&bytes[10..14], &62u32.to_le_bytes());
        assert_eq!(&bytes[14..18], &40u32.to_le_bytes());
        assert_eq!(&bytes[18..22], &33i32.to_le_bytes());
        assert_eq!(&bytes[22..26], &2i32.to_le_bytes());
        assert_eq!(&bytes[26..28], &1u16.to_le_bytes());
        assert_eq!(&bytes[28..30], &1u16.to_le_bytes());
        assert_eq!(&bytes[30..34], &0u32.to_le_bytes());
        assert_eq!(&bytes[34..38], &16u32.to_le_bytes());
        assert_eq!(&bytes[38..42], &2835i32.to_le_bytes());
        assert_eq!(&bytes[42..46], &2835i32.to_le_bytes());
        assert_eq!(&bytes[46..50], &2u32.to_le_bytes());
        assert_eq!(&bytes[50..54], &2u32.to_le_bytes());
    }

    #[test]
    fn test_parse_inverts_to_bytes() {
        let header = BitmapHeader::for_plane(500, 500).unwrap();
        let parsed = BitmapHeader::parse(&header.to_bytes()).unwrap();
        assert_eq!(parsed, header);
        assert_eq!(parsed.palette_offset(), 54);
    }

    #[test]
    fn test_parse_rejects_bad_signature() {
        let mut bytes = BitmapHeader::for_plane(1, 1).unwrap().to_bytes();
        bytes[0] = b'P';
        assert!(matches!(
            BitmapHeader::parse(&bytes),
            Err(LayerError::Format(_))
        ));
    }

    #[test]
    fn test_for_plane_rejects_zero_dimensions() {
        assert!(BitmapHeader::for_plane(0, 4).is_err());
        assert!(BitmapHeader::for_plane(4, 0).is_err());
    }

    #[test]
    fn test_palette_is_black_then_white() {
        assert_eq!(&PALETTE[0..4], &0x0000_0000u32.to_le_bytes());
        assert_eq!(&PALETTE[4..8], &0x00FF_FFFFu32.to_le_bytes());
    }
}
