//! Batch driver
//!
//! Enumerates capture files with a glob pattern, applies frame-range
//! filtering over the sorted match list, and converts each file in turn.
//! A failure on one file is reported and does not abort the batch.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{error, info, warn};

use crate::image_pipeline::{ConversionConfig, DemosaicAlgorithm, RawToPngPipeline};

#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Glob pattern selecting the capture files.
    pub pattern: String,
    /// Directory for the PNG outputs; created if absent. Outputs land
    /// alongside their inputs when unset.
    pub output_dir: Option<PathBuf>,
    /// First frame to convert, by position in the sorted match list.
    pub start_frame: usize,
    /// One past the last frame to convert; no limit when unset.
    pub end_frame: Option<usize>,
    /// Demosaicing algorithm for the RGB outputs.
    pub algorithm: DemosaicAlgorithm,
}

/// Per-run outcome counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Files selected after frame-range filtering.
    pub selected: usize,
    /// Files fully converted (both PNGs written).
    pub converted: usize,
    /// Files that failed and were skipped.
    pub failed: usize,
}

/// Runs one batch conversion.
///
/// Fatal errors are limited to an invalid glob pattern and an output
/// directory that cannot be created; everything else is per-file.
pub fn run(options: &BatchOptions) -> Result<BatchSummary> {
    let mut files: Vec<PathBuf> = glob::glob(&options.pattern)
        .with_context(|| format!("invalid glob pattern: {}", options.pattern))?
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("Skipping unreadable path: {}", e);
                None
            }
        })
        .collect();
    files.sort();

    if files.is_empty() {
        info!("No files found matching pattern: {}", options.pattern);
        return Ok(BatchSummary::default());
    }

    info!("Found {} RAW files", files.len());

    if let Some(dir) = &options.output_dir {
        if !dir.exists() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create output directory {}", dir.display()))?;
            info!("Created output directory: {}", dir.display());
        }
    }

    let selected = select_frames(&files, options.start_frame, options.end_frame);

    let config = ConversionConfig::builder().algorithm(options.algorithm).build();
    let pipeline = RawToPngPipeline::new(config);

    let mut summary = BatchSummary {
        selected: selected.len(),
        ..BatchSummary::default()
    };

    for path in selected {
        match pipeline.convert_file(path, options.output_dir.as_deref()) {
            Ok(outputs) => {
                info!(
                    "Converted {} -> {} + {}",
                    path.display(),
                    outputs.interlaced.display(),
                    outputs.rgb.display()
                );
                summary.converted += 1;
            }
            Err(e) => {
                error!("Error converting {}: {}", path.display(), e);
                summary.failed += 1;
            }
        }
    }

    info!(
        "Conversion complete! Converted {} files (2 images per file).",
        summary.converted
    );
    Ok(summary)
}

/// Selects the files at sorted positions `[start, end)`.
fn select_frames(files: &[PathBuf], start: usize, end: Option<usize>) -> &[PathBuf] {
    let end = end.unwrap_or(files.len()).min(files.len());
    let start = start.min(end);
    &files[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames(n: usize) -> Vec<PathBuf> {
        (0..n).map(|i| PathBuf::from(format!("frame{i:04}.raw"))).collect()
    }

    #[test]
    fn frame_range_is_inclusive_exclusive() {
        let files = frames(10);
        let selected = select_frames(&files, 2, Some(5));
        assert_eq!(selected, &files[2..5]);
        assert_eq!(selected.len(), 3);
    }

    #[test]
    fn no_end_frame_selects_through_the_last_file() {
        let files = frames(10);
        assert_eq!(select_frames(&files, 7, None), &files[7..]);
        assert_eq!(select_frames(&files, 0, None).len(), 10);
    }

    #[test]
    fn out_of_range_bounds_select_nothing() {
        let files = frames(3);
        assert!(select_frames(&files, 5, None).is_empty());
        assert!(select_frames(&files, 2, Some(1)).is_empty());
        assert_eq!(select_frames(&files, 0, Some(100)).len(), 3);
    }

    #[test]
    fn empty_match_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let options = BatchOptions {
            pattern: format!("{}/*.raw", dir.path().display()),
            output_dir: None,
            start_frame: 0,
            end_frame: None,
            algorithm: DemosaicAlgorithm::Bilinear,
        };
        assert_eq!(run(&options).unwrap(), BatchSummary::default());
    }

    #[test]
    fn malformed_files_are_skipped_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        for i in 0..3 {
            // Far too short to hold the declared grid.
            std::fs::write(dir.path().join(format!("frame{i:04}.raw")), [0u8; 64]).unwrap();
        }

        let options = BatchOptions {
            pattern: format!("{}/*.raw", dir.path().display()),
            output_dir: None,
            start_frame: 0,
            end_frame: None,
            algorithm: DemosaicAlgorithm::Bilinear,
        };

        let summary = run(&options).unwrap();
        assert_eq!(summary.selected, 3);
        assert_eq!(summary.converted, 0);
        assert_eq!(summary.failed, 3);
    }

    #[test]
    fn output_dir_is_created_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("frame0000.raw"), [0u8; 64]).unwrap();
        let out_dir = dir.path().join("converted/pngs");

        let options = BatchOptions {
            pattern: format!("{}/*.raw", dir.path().display()),
            output_dir: Some(out_dir.clone()),
            start_frame: 0,
            end_frame: None,
            algorithm: DemosaicAlgorithm::Bilinear,
        };

        run(&options).unwrap();
        assert!(out_dir.is_dir());
    }
}
