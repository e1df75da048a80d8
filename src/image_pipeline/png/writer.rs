use std::io::Write;

use crate::image_pipeline::common::error::Result;

pub trait PngWriter {
    fn write_gray8(&self, width: usize, height: usize, data: &[u8], output: &mut dyn Write) -> Result<()>;
    fn write_rgb8(&self, width: usize, height: usize, data: &[u8], output: &mut dyn Write) -> Result<()>;
}
