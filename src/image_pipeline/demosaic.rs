//! Demosaicing module for converting the Bayer mosaic to RGB
//!
//! The interpolation math itself is delegated to the `demosaic` crate;
//! this module normalizes the mosaic into the unit range the crate
//! expects and rescales the result back to 16-bit samples.

mod adapter;
pub mod types;

pub use adapter::DemosaicAdapter;
pub use types::{DemosaicAlgorithm, RgbImageData};
