//! Lossless PNG output for stego images.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::buffer::PixelBuffer;
use crate::error::{Result, StegoError};

/// Encode a pixel buffer as an 8-bit RGB PNG.
///
/// # Errors
///
/// Returns `StegoError::Format` if the image has a zero dimension or the
/// encoder fails.
pub fn encode_png(image: &PixelBuffer) -> Result<Vec<u8>> {
    if image.is_empty() {
        return Err(StegoError::Format(format!(
            "cannot save {}x{} image",
            image.width(),
            image.height()
        )));
    }

    let mut out = Vec::new();
    PngEncoder::new(&mut out)
        .write_image(
            image.pixels(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| StegoError::Format(e.to_string()))?;

    Ok(out)
}
