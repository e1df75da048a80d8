//! PNG writing module
//!
//! This module provides 8-bit PNG writing for the mosaic preview and the
//! demosaiced color image, plus the shared preview scaling.

mod image_png_writer;
pub mod preview;
mod writer;

pub use image_png_writer::ImagePngWriter;
pub use preview::scale_to_8bit;
pub use writer::PngWriter;
