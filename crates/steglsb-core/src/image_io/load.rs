//! Image file decoding with conversion to RGB.

use std::io::Cursor;

use image::ImageReader;
use log::debug;

use crate::buffer::PixelBuffer;
use crate::error::{Result, StegoError};

/// Decode an image file from bytes and convert it to RGB.
///
/// The format is guessed from the file contents. Grayscale and alpha images
/// are converted; alpha is discarded.
///
/// # Errors
///
/// Returns `StegoError::Format` if the bytes are not a supported image or
/// the image is corrupted.
pub fn load_image(bytes: &[u8]) -> Result<PixelBuffer> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| StegoError::Format(e.to_string()))?;

    let format = reader.format();
    let img = reader
        .decode()
        .map_err(|e| StegoError::Format(e.to_string()))?;

    debug!(
        "loaded {:?} image {}x{} ({:?})",
        format,
        img.width(),
        img.height(),
        img.color()
    );

    Ok(PixelBuffer::from_dynamic(img))
}
