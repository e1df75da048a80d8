use std::path::PathBuf;

use clap::Parser;
use prores_raw_export::image_pipeline::DemosaicAlgorithm;
use prores_raw_export::{batch, logger};
use tracing::{info, warn};

/// Convert ProRes RAW capture files to PNG images.
///
/// Writes two images per capture: the reassembled Bayer mosaic as
/// grayscale, and the demosaiced result as RGB.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Glob pattern for RAW files (e.g. "*.raw")
    pattern: String,

    /// Output directory for PNG files (default: alongside the input files)
    #[arg(short = 'o', long)]
    output_dir: Option<PathBuf>,

    /// First frame to convert, by position in the sorted file list
    #[arg(long, default_value_t = 0)]
    start_frame: usize,

    /// Frame to stop before, exclusive (default: convert all frames)
    #[arg(long)]
    end_frame: Option<usize>,

    /// Demosaicing algorithm: bilinear, edge-directed or gradient-corrected
    #[arg(long, default_value = "gradient-corrected")]
    demosaic: String,
}

fn main() -> anyhow::Result<()> {
    logger::init();
    let cli = Cli::parse();

    // Unknown selectors fall back to the default rather than aborting.
    let algorithm = match DemosaicAlgorithm::parse(&cli.demosaic) {
        Some(algorithm) => algorithm,
        None => {
            let fallback = DemosaicAlgorithm::default();
            warn!("Unknown demosaic algorithm '{}', using {}", cli.demosaic, fallback);
            fallback
        }
    };

    info!("Using {} demosaicing algorithm", algorithm);

    let summary = batch::run(&batch::BatchOptions {
        pattern: cli.pattern,
        output_dir: cli.output_dir,
        start_frame: cli.start_frame,
        end_frame: cli.end_frame,
        algorithm,
    })?;

    if summary.failed > 0 {
        warn!("{} of {} files failed to convert", summary.failed, summary.selected);
    }

    Ok(())
}
