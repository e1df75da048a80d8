//! Image processing pipeline module
//!
//! This module provides a structured approach to the capture-to-PNG
//! conversion, with separate modules for mosaic reconstruction,
//! demosaicing, PNG writing, and conversion orchestration.

pub mod common;
pub mod conversions;
pub mod demosaic;
pub mod png;
pub mod raw;


pub use common::{ConversionError, Result};

pub use raw::{MosaicImage, MosaicReader, PlaneStackReader};

pub use demosaic::{DemosaicAdapter, DemosaicAlgorithm, RgbImageData};

pub use png::{ImagePngWriter, PngWriter};

pub use conversions::{
    ConversionConfig, ConversionConfigBuilder, ConvertedPair, RawToPngPipeline,
};
