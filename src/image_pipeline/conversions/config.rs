//! Conversion configuration types

use crate::image_pipeline::demosaic::types::DemosaicAlgorithm;

/// Configuration for capture-to-PNG conversion
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Demosaicing algorithm to use for the RGB output
    pub algorithm: DemosaicAlgorithm,
    /// Whether to validate image dimensions before conversion
    pub validate_dimensions: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            algorithm: DemosaicAlgorithm::default(),
            validate_dimensions: true,
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    algorithm: Option<DemosaicAlgorithm>,
    validate_dimensions: Option<bool>,
}

impl ConversionConfigBuilder {
    pub fn algorithm(mut self, algorithm: DemosaicAlgorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            algorithm: self.algorithm.unwrap_or(default.algorithm),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
        }
    }
}
