//! Preview scaling shared by both PNG outputs.

/// Divisor bringing raw sample values into 8-bit display range.
///
/// Matches the capture device's useful signal range; samples above it
/// clip to white in the preview.
pub const PREVIEW_DIVISOR: f32 = 1024.0;

/// Scales 16-bit samples to 8-bit for PNG output, clamping to [0, 255].
pub fn scale_to_8bit(samples: &[u16]) -> Vec<u8> {
    samples
        .iter()
        .map(|&v| (v as f32 / PREVIEW_DIVISOR * 255.0).clamp(0.0, 255.0) as u8)
        .collect()
}
