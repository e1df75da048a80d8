use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raw::types::MosaicImage;

pub trait MosaicReader {
    fn read_mosaic(&self, data: &[u8]) -> Result<MosaicImage>;
}
