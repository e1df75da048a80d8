//! Reader for the four-plane stacked capture layout.
//!
//! A capture file is a constant-size header followed by a `RAW_HEIGHT` x
//! `RAW_WIDTH` grid of 16-bit samples. The grid holds the four sensor
//! color planes stacked vertically in fixed order Red, Green1, Green2,
//! Blue; this reader de-stacks them and interlaces them back into the
//! sensor's original RGGB Bayer mosaic.

use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::raw::reader::MosaicReader;
use crate::image_pipeline::raw::types::{
    BAND_COUNT, BAND_HEIGHT, CAPTURE_ELEMENTS, HEADER_ELEMENTS, MOSAIC_HEIGHT, MOSAIC_WIDTH,
    MosaicImage, RAW_WIDTH,
};

/// (row offset, column offset) of each plane's phase class in the 2x2
/// Bayer cell, indexed by plane position in the stack (R, G1, G2, B).
const PHASE_OFFSETS: [(usize, usize); BAND_COUNT] = [(0, 0), (0, 1), (1, 0), (1, 1)];

pub struct PlaneStackReader;

impl MosaicReader for PlaneStackReader {
    /// Reads a raw capture and reassembles the Bayer mosaic.
    ///
    /// Samples are decoded as little-endian, matching the byte order the
    /// capture device writes. Bytes beyond the declared grid are ignored;
    /// a file shorter than the declared grid is a [`ConversionError::ShapeError`],
    /// never silently zero-padded.
    fn read_mosaic(&self, data: &[u8]) -> Result<MosaicImage> {
        debug!("Decoding capture, {} bytes", data.len());

        let needed_bytes = CAPTURE_ELEMENTS * 2;
        if data.len() < needed_bytes {
            return Err(ConversionError::ShapeError(format!(
                "capture too short: expected at least {} bytes ({} samples), got {}",
                needed_bytes,
                CAPTURE_ELEMENTS,
                data.len()
            )));
        }

        let grid: Vec<u16> = data[HEADER_ELEMENTS * 2..needed_bytes]
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();

        // Scatter each plane into its phase class with stride-2 addressing.
        // Every mosaic cell is written exactly once.
        let mut mosaic = vec![0u16; MOSAIC_HEIGHT * MOSAIC_WIDTH];
        for (band, &(row_off, col_off)) in PHASE_OFFSETS.iter().enumerate() {
            for y in 0..BAND_HEIGHT {
                let src = &grid[(band * BAND_HEIGHT + y) * RAW_WIDTH..][..RAW_WIDTH];
                let dst_row = (y * 2 + row_off) * MOSAIC_WIDTH;
                for (x, &sample) in src.iter().enumerate() {
                    mosaic[dst_row + x * 2 + col_off] = sample;
                }
            }
        }

        debug!("Reassembled mosaic: {}x{}", MOSAIC_WIDTH, MOSAIC_HEIGHT);

        Ok(MosaicImage {
            width: MOSAIC_WIDTH,
            height: MOSAIC_HEIGHT,
            data: mosaic,
        })
    }
}
