use std::io::{Cursor, Write};

use image::{GrayImage, ImageFormat, RgbImage};
use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::png::writer::PngWriter;

pub struct ImagePngWriter;

impl ImagePngWriter {
    fn flush_png(encoded: &[u8], output: &mut dyn Write) -> Result<()> {
        output.write_all(encoded)?;
        Ok(())
    }
}

impl PngWriter for ImagePngWriter {
    fn write_gray8(&self, width: usize, height: usize, data: &[u8], output: &mut dyn Write) -> Result<()> {
        debug!("Encoding grayscale PNG: {}x{}", width, height);

        let img = GrayImage::from_raw(width as u32, height as u32, data.to_vec()).ok_or_else(|| {
            ConversionError::EncodeError(format!(
                "pixel buffer does not match {width}x{height} grayscale image"
            ))
        })?;

        let mut buffer = Cursor::new(Vec::new());
        img.write_to(&mut buffer, ImageFormat::Png)
            .map_err(|e| ConversionError::EncodeError(e.to_string()))?;

        Self::flush_png(buffer.get_ref(), output)
    }

    fn write_rgb8(&self, width: usize, height: usize, data: &[u8], output: &mut dyn Write) -> Result<()> {
        debug!("Encoding RGB PNG: {}x{}", width, height);

        let img = RgbImage::from_raw(width as u32, height as u32, data.to_vec()).ok_or_else(|| {
            ConversionError::EncodeError(format!(
                "pixel buffer does not match {width}x{height} RGB image"
            ))
        })?;

        let mut buffer = Cursor::new(Vec::new());
        img.write_to(&mut buffer, ImageFormat::Png)
            .map_err(|e| ConversionError::EncodeError(e.to_string()))?;

        Self::flush_png(buffer.get_ref(), output)
    }
}
