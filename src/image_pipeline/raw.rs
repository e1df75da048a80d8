//! Capture reading module
//!
//! This module reconstructs the RGGB Bayer mosaic from the vendor's
//! four-plane stacked capture layout.

mod plane_stack;
mod reader;
pub mod types;

pub use plane_stack::PlaneStackReader;
pub use reader::MosaicReader;
pub use types::MosaicImage;
