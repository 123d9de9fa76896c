//! Peak signal-to-noise ratio between a cover image and its stego copy.

use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;

/// Maximum representable 8-bit channel value.
pub const PEAK_SIGNAL: f64 = 255.0;

/// Mean squared error over every channel of every pixel.
///
/// Both buffers must have the same shape; this is checked in debug builds
/// only. Returns 0.0 for empty images.
pub fn mse(original: &PixelBuffer, modified: &PixelBuffer) -> f64 {
    debug_assert!(
        original.width() == modified.width() && original.height() == modified.height(),
        "PSNR shape mismatch: {}x{} vs {}x{}",
        original.width(),
        original.height(),
        modified.width(),
        modified.height()
    );

    let a = original.pixels();
    let b = modified.pixels();
    if a.is_empty() {
        return 0.0;
    }

    let sum: f64 = a
        .iter()
        .zip(b)
        .map(|(&x, &y)| {
            let diff = x as f64 - y as f64;
            diff * diff
        })
        .sum();

    sum / a.len() as f64
}

/// Peak signal-to-noise ratio in decibels.
///
/// Returns `f64::INFINITY` when the images are identical.
pub fn psnr(original: &PixelBuffer, modified: &PixelBuffer) -> f64 {
    psnr_from_mse(mse(original, modified))
}

#[inline]
fn psnr_from_mse(mse: f64) -> f64 {
    if mse == 0.0 {
        return f64::INFINITY;
    }
    20.0 * (PEAK_SIGNAL / mse.sqrt()).log10()
}

/// Distortion summary between two images.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    /// Mean squared error per channel.
    pub mse: f64,
    /// PSNR in decibels (infinite for identical images).
    pub psnr: f64,
}

/// Compute MSE and PSNR together.
pub fn quality_report(original: &PixelBuffer, modified: &PixelBuffer) -> QualityReport {
    let mse = mse(original, modified);
    QualityReport {
        mse,
        psnr: psnr_from_mse(mse),
    }
}
