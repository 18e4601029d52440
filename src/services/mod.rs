pub mod batch;
pub mod image_io;
pub mod naming;

pub use batch::{restore_image, run_restore, run_split, split_image, BatchReport};
pub use image_io::{load_grayscale, save_grayscale_bmp};
