//! Capture format contract and mosaic data types
//!
//! The constants below describe the fixed layout produced by the capture
//! device firmware. They are an external contract, not values inferred
//! from the file.

/// Number of leading 16-bit elements to discard before the pixel grid.
pub const HEADER_ELEMENTS: usize = 248;

/// Height of the stacked four-plane grid, in rows.
pub const RAW_HEIGHT: usize = 4832;

/// Width of the stacked four-plane grid, in columns.
pub const RAW_WIDTH: usize = 2144;

/// Number of vertically stacked color planes, in order R, G1, G2, B.
pub const BAND_COUNT: usize = 4;

/// Height of one color plane.
pub const BAND_HEIGHT: usize = RAW_HEIGHT / BAND_COUNT;

/// Height of the reassembled Bayer mosaic.
pub const MOSAIC_HEIGHT: usize = BAND_HEIGHT * 2;

/// Width of the reassembled Bayer mosaic.
pub const MOSAIC_WIDTH: usize = RAW_WIDTH * 2;

/// Minimum number of 16-bit elements a capture file must contain.
pub const CAPTURE_ELEMENTS: usize = HEADER_ELEMENTS + RAW_HEIGHT * RAW_WIDTH;

/// Reassembled single-channel Bayer mosaic (RGGB pattern).
#[derive(Debug, Clone)]
pub struct MosaicImage {
    /// Width of the mosaic in pixels
    pub width: usize,
    /// Height of the mosaic in pixels
    pub height: usize,
    /// Row-major raw samples, one per pixel
    pub data: Vec<u16>,
}
