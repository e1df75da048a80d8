use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::image_pipeline::{
    common::error::{ConversionError, Result},
    demosaic::{DemosaicAdapter, types::RgbImageData},
    png::{ImagePngWriter, PngWriter, preview::scale_to_8bit},
    raw::{MosaicReader, PlaneStackReader, types::MosaicImage},
};

use super::config::ConversionConfig;

/// Suffix of the grayscale mosaic preview output.
const INTERLACED_SUFFIX: &str = "_interlaced.png";
/// Suffix of the demosaiced color output.
const RGB_SUFFIX: &str = "_rgb.png";

/// Paths of the two images written for one capture file.
#[derive(Debug, Clone)]
pub struct ConvertedPair {
    pub interlaced: PathBuf,
    pub rgb: PathBuf,
}

pub struct RawToPngPipeline<R: MosaicReader, W: PngWriter> {
    reader: R,
    writer: W,
    config: ConversionConfig,
}

impl RawToPngPipeline<PlaneStackReader, ImagePngWriter> {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            reader: PlaneStackReader,
            writer: ImagePngWriter,
            config,
        }
    }
}

impl<R: MosaicReader, W: PngWriter> RawToPngPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: ConversionConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(ConversionError::InvalidDimensions(width, height));
        }

        Ok(())
    }

    /// Runs the in-memory stages: mosaic reconstruction, then demosaicing.
    fn process(&self, input_data: &[u8]) -> Result<(MosaicImage, RgbImageData)> {
        let mosaic = {
            let _span = tracing::info_span!("reassemble_mosaic").entered();
            self.reader.read_mosaic(input_data)?
        };

        self.validate_dimensions(mosaic.width, mosaic.height)?;

        let rgb = {
            let _span = tracing::info_span!("demosaic", algorithm = %self.config.algorithm).entered();
            DemosaicAdapter.process(&mosaic, self.config.algorithm)?
        };

        Ok((mosaic, rgb))
    }

    /// Converts one capture, writing the preview and RGB PNGs to the given
    /// sinks. The preview is written before the color image.
    #[instrument(skip(self, input_data, preview_out, rgb_out), fields(input_size = input_data.len()))]
    pub fn convert(
        &self,
        input_data: &[u8],
        preview_out: &mut dyn Write,
        rgb_out: &mut dyn Write,
    ) -> Result<()> {
        info!("Starting capture to PNG conversion");

        let (mosaic, rgb) = self.process(input_data)?;

        {
            let _span = tracing::info_span!("encode_preview").entered();
            let gray = scale_to_8bit(&mosaic.data);
            self.writer.write_gray8(mosaic.width, mosaic.height, &gray, preview_out)?;
        }

        {
            let _span = tracing::info_span!("encode_rgb").entered();
            let rgb8 = scale_to_8bit(&rgb.data);
            self.writer.write_rgb8(rgb.width, rgb.height, &rgb8, rgb_out)?;
        }

        info!(width = rgb.width, height = rgb.height, "Conversion complete");
        Ok(())
    }

    /// Converts one capture file into `{basename}_interlaced.png` and
    /// `{basename}_rgb.png`, placed in `output_dir` if given, otherwise
    /// alongside the input.
    ///
    /// The preview file is written in full before the RGB file; if the RGB
    /// write fails, the preview stays on disk.
    #[instrument(skip(self, input_path, output_dir))]
    pub fn convert_file(
        &self,
        input_path: &Path,
        output_dir: Option<&Path>,
    ) -> Result<ConvertedPair> {
        info!(input = %input_path.display(), "Converting file");

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                ConversionError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let (mosaic, rgb) = self.process(&input_data)?;

        let outputs = output_paths(input_path, output_dir);

        self.write_output(&outputs.interlaced, |writer, out| {
            let gray = scale_to_8bit(&mosaic.data);
            writer.write_gray8(mosaic.width, mosaic.height, &gray, out)
        })?;
        info!(output = %outputs.interlaced.display(), "Wrote interlaced grayscale image");

        self.write_output(&outputs.rgb, |writer, out| {
            let rgb8 = scale_to_8bit(&rgb.data);
            writer.write_rgb8(rgb.width, rgb.height, &rgb8, out)
        })?;
        info!(output = %outputs.rgb.display(), algorithm = %self.config.algorithm, "Wrote RGB image");

        Ok(outputs)
    }

    fn write_output<F>(&self, path: &Path, encode: F) -> Result<()>
    where
        F: FnOnce(&W, &mut dyn Write) -> Result<()>,
    {
        let mut file = std::fs::File::create(path).map_err(|e| {
            ConversionError::OutputWriteError(format!("{}: {}", path.display(), e))
        })?;
        encode(&self.writer, &mut file)
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ConversionConfig) {
        self.config = config;
    }
}

/// Derives the two output paths from the input's base name.
fn output_paths(input_path: &Path, output_dir: Option<&Path>) -> ConvertedPair {
    let stem = input_path
        .file_stem()
        .unwrap_or(input_path.as_os_str())
        .to_string_lossy();

    let dir = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => input_path.parent().unwrap_or(Path::new("")).to_path_buf(),
    };

    ConvertedPair {
        interlaced: dir.join(format!("{stem}{INTERLACED_SUFFIX}")),
        rgb: dir.join(format!("{stem}{RGB_SUFFIX}")),
    }
}
