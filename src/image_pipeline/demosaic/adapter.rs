use demosaic::{Algorithm, CfaPattern, demosaic_interleaved};
use tracing::info;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::demosaic::types::{DemosaicAlgorithm, RgbImageData};
use crate::image_pipeline::raw::types::MosaicImage;

impl From<DemosaicAlgorithm> for Algorithm {
    fn from(algorithm: DemosaicAlgorithm) -> Self {
        match algorithm {
            DemosaicAlgorithm::Bilinear => Algorithm::Bilinear,
            DemosaicAlgorithm::EdgeDirected => Algorithm::Ahd,
            DemosaicAlgorithm::GradientCorrected => Algorithm::Mhc,
        }
    }
}

pub struct DemosaicAdapter;

impl DemosaicAdapter {
    /// Demosaics an RGGB mosaic into an interleaved 16-bit RGB image.
    ///
    /// The mosaic is brought into unit range by dividing by its maximum
    /// sample, handed to the external demosaicing routine, then rescaled
    /// by the same maximum and clamped to the 16-bit domain. An all-zero
    /// mosaic skips normalization and yields an all-zero image.
    pub fn process(&self, mosaic: &MosaicImage, algorithm: DemosaicAlgorithm) -> Result<RgbImageData> {
        let width = mosaic.width;
        let height = mosaic.height;
        info!("Demosaicing {}x{} mosaic with {} interpolation", width, height, algorithm);

        let max = mosaic.data.iter().copied().max().unwrap_or(0) as f32;
        let scale = if max > 1.0 { max } else { 1.0 };

        let input: Vec<f32> = mosaic.data.iter().map(|&v| v as f32 / scale).collect();
        let mut interpolated = vec![0.0f32; 3 * width * height];

        demosaic_interleaved(
            &input,
            width,
            height,
            &CfaPattern::bayer_rggb(),
            algorithm.into(),
            &mut interpolated,
        )
        .map_err(|e| ConversionError::DemosaicError(e.to_string()))?;

        Ok(RgbImageData {
            width,
            height,
            data: rescale_to_u16(&interpolated, scale),
        })
    }
}

/// Rescales unit-range samples back to raw range, clamping to [0, 65535].
fn rescale_to_u16(samples: &[f32], scale: f32) -> Vec<u16> {
    samples
        .iter()
        .map(|&v| (v * scale).clamp(0.0, u16::MAX as f32) as u16)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mosaic_from(width: usize, height: usize, data: Vec<u16>) -> MosaicImage {
        assert_eq!(data.len(), width * height);
        MosaicImage { width, height, data }
    }

    /// 8x8 RGGB mosaic with distinct per-channel values.
    fn small_mosaic() -> MosaicImage {
        let (width, height) = (8, 8);
        let mut data = vec![0u16; width * height];
        for y in 0..height {
            for x in 0..width {
                data[y * width + x] = match (y % 2, x % 2) {
                    (0, 0) => 4000,
                    (0, 1) => 2000,
                    (1, 0) => 2100,
                    _ => 1000,
                };
            }
        }
        mosaic_from(width, height, data)
    }

    #[test]
    fn output_has_three_channels_per_pixel() {
        let mosaic = small_mosaic();
        let rgb = DemosaicAdapter
            .process(&mosaic, DemosaicAlgorithm::Bilinear)
            .unwrap();
        assert_eq!(rgb.width, mosaic.width);
        assert_eq!(rgb.height, mosaic.height);
        assert_eq!(rgb.data.len(), 3 * mosaic.width * mosaic.height);
    }

    #[test]
    fn all_zero_mosaic_yields_all_zero_image() {
        let mosaic = mosaic_from(8, 8, vec![0u16; 64]);
        for algorithm in [
            DemosaicAlgorithm::Bilinear,
            DemosaicAlgorithm::EdgeDirected,
            DemosaicAlgorithm::GradientCorrected,
        ] {
            let rgb = DemosaicAdapter.process(&mosaic, algorithm).unwrap();
            assert!(rgb.data.iter().all(|&v| v == 0), "{algorithm} produced nonzero output");
        }
    }

    #[test]
    fn processing_is_idempotent() {
        let mosaic = small_mosaic();
        let first = DemosaicAdapter
            .process(&mosaic, DemosaicAlgorithm::GradientCorrected)
            .unwrap();
        let second = DemosaicAdapter
            .process(&mosaic, DemosaicAlgorithm::GradientCorrected)
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_selector_matches_explicit_default() {
        let mosaic = small_mosaic();
        let fallback = DemosaicAdapter
            .process(&mosaic, DemosaicAlgorithm::from_name("definitely-not-real"))
            .unwrap();
        let explicit = DemosaicAdapter
            .process(&mosaic, DemosaicAlgorithm::GradientCorrected)
            .unwrap();
        assert_eq!(fallback, explicit);
    }

    #[test]
    fn rescale_clamps_instead_of_wrapping() {
        let samples = [-0.5f32, 0.0, 0.5, 1.0, 1.5];
        let rescaled = rescale_to_u16(&samples, 65535.0);
        assert_eq!(rescaled, vec![0, 0, 32767, 65535, 65535]);
    }
}
