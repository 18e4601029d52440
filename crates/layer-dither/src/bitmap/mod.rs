//! 1-bit BMP codec for layer files.
//!
//! Every layer is persisted as an uncompressed, bottom-up, 1-bit-per-pixel
//! BMP with a fixed two-entry palette (index 0 black, index 1 white). The
//! layout is bit-exact so existing layer files stay readable.
//!
//! - [`encode_plane`] / [`decode_plane`]: in-memory byte streams
//! - [`write_plane`] / [`read_plane`]: any `Write` / `Read`
//! - [`save_plane`] / [`load_plane`]: files on disk

mod codec;
mod header;

pub use codec::{decode_plane, encode_plane, load_plane, read_plane, save_plane, write_plane};
pub use header::{row_bytes, BitmapHeader, HEADER_SIZE, PALETTE, PIXEL_DATA_OFFSET};
