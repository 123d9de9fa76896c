//! Message embedding.

use log::debug;

use crate::buffer::PixelBuffer;
use crate::capacity::capacity_bits;
use crate::error::{Result, StegoError};
use crate::payload::Payload;
use crate::scan::{row_of_bit, scan_order};

/// Embed `message` into the LSBs of a copy of `image`.
///
/// The message is serialized as UTF-8 plus a zero terminator, expanded
/// MSB-first into bits, and written one bit per channel in scan order.
/// Channels past the last payload bit are left untouched.
///
/// # Errors
///
/// Returns `StegoError::Capacity` if the payload needs more bits than the
/// image has channels. The check runs before any pixel is copied.
pub fn encode(image: &PixelBuffer, message: &str) -> Result<PixelBuffer> {
    let payload = Payload::from_message(message);
    let required = payload.bit_len() as u64;
    let available = capacity_bits(image.height(), image.width());

    if required > available {
        debug!(
            "rejecting {} byte message: needs {} bits, image holds {}",
            message.len(),
            required,
            available
        );
        return Err(StegoError::Capacity {
            required,
            available,
        });
    }

    let (width, height) = (image.width(), image.height());
    let mut encoded = image.clone();
    let pixels = encoded.pixels_mut();

    for (offset, bit) in scan_order(width, height).zip(payload.bits()) {
        pixels[offset] = (pixels[offset] & 0xFE) | bit;
    }

    debug!(
        "embedded {} bits into {}x{} image ({} rows touched)",
        required,
        width,
        height,
        row_of_bit(width, payload.bit_len() - 1) + 1
    );

    Ok(encoded)
}
