//! Converter for fixed-layout ProRes RAW sensor captures.
//!
//! Reconstructs the RGGB Bayer mosaic from the capture format's four
//! vertically stacked color planes, demosaics it to RGB, and writes both
//! a grayscale mosaic preview and the color image as PNG.

pub mod batch;
pub mod image_pipeline;
pub mod logger;
