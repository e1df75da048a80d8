//! Pipeline conversions module
//!
//! This module contains orchestration logic for the capture-to-PNG
//! conversion.

mod config;
mod raw_to_png;

pub use config::{ConversionConfig, ConversionConfigBuilder};
pub use raw_to_png::{ConvertedPair, RawToPngPipeline};
