//! Types for demosaicing operations

use std::fmt;

/// RGB image data after demosaicing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImageData {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// RGB pixel data interleaved [R, G, B, R, G, B, ...]
    pub data: Vec<u16>,
}

/// Demosaicing algorithm selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DemosaicAlgorithm {
    /// Plain bilinear interpolation (fastest)
    Bilinear,
    /// Adaptive homogeneity-directed interpolation (highest quality)
    EdgeDirected,
    /// Gradient-corrected linear interpolation (Malvar-He-Cutler)
    #[default]
    GradientCorrected,
}

impl DemosaicAlgorithm {
    /// Parses a selector name, returning `None` for unrecognized names.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "bilinear" => Some(Self::Bilinear),
            "edge-directed" | "ahd" | "menon2007" => Some(Self::EdgeDirected),
            "gradient-corrected" | "mhc" | "malvar2004" => Some(Self::GradientCorrected),
            _ => None,
        }
    }

    /// Parses a selector name; unknown names select the default algorithm
    /// rather than failing.
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_default()
    }
}

impl fmt::Display for DemosaicAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bilinear => f.write_str("bilinear"),
            Self::EdgeDirected => f.write_str("edge-directed"),
            Self::GradientCorrected => f.write_str("gradient-corrected"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_selectors_parse() {
        assert_eq!(DemosaicAlgorithm::parse("bilinear"), Some(DemosaicAlgorithm::Bilinear));
        assert_eq!(
            DemosaicAlgorithm::parse("Edge-Directed"),
            Some(DemosaicAlgorithm::EdgeDirected)
        );
        assert_eq!(
            DemosaicAlgorithm::parse("gradient-corrected"),
            Some(DemosaicAlgorithm::GradientCorrected)
        );
    }

    #[test]
    fn unknown_selector_falls_back_to_default() {
        assert_eq!(DemosaicAlgorithm::parse("no-such-algorithm"), None);
        assert_eq!(
            DemosaicAlgorithm::from_name("no-such-algorithm"),
            DemosaicAlgorithm::GradientCorrected
        );
    }
}
