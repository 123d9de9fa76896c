//! Capacity model: how many message bits fit in an image.

use serde::{Deserialize, Serialize};

use crate::buffer::{PixelBuffer, RGB_CHANNELS};
use crate::payload::TERMINATOR_LEN;

/// Bits embedded per color channel.
pub const BITS_PER_CHANNEL: u64 = 1;

/// Number of LSB slots available in an image of the given size.
///
/// One slot per color channel per pixel: `height * width * 3`. Computed in
/// `u64` so the result does not depend on the target's pointer width; the
/// product saturates at `u64::MAX` for dimensions near `u32::MAX` squared.
#[inline]
pub fn capacity_bits(height: u32, width: u32) -> u64 {
    (height as u64)
        .saturating_mul(width as u64)
        .saturating_mul(RGB_CHANNELS as u64 * BITS_PER_CHANNEL)
}

/// Number of bits needed to embed `message`, terminator included.
#[inline]
pub fn required_bits(message: &str) -> u64 {
    (message.len() as u64)
        .saturating_add(TERMINATOR_LEN as u64)
        .saturating_mul(8)
}

/// Largest UTF-8 message, in bytes, that fits in an image of the given size.
///
/// Returns 0 when the image cannot even hold the terminator.
pub fn max_message_bytes(height: u32, width: u32) -> u64 {
    (capacity_bits(height, width) / 8).saturating_sub(TERMINATOR_LEN as u64)
}

/// Capacity summary for a cover image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityReport {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Available LSB slots.
    pub capacity_bits: u64,
    /// Longest message (UTF-8 bytes, terminator excluded) that fits.
    pub max_message_bytes: u64,
}

impl CapacityReport {
    /// Check whether `message` fits in the image this report describes.
    pub fn fits(&self, message: &str) -> bool {
        required_bits(message) <= self.capacity_bits
    }
}

/// Build a capacity report for `image`.
pub fn capacity_report(image: &PixelBuffer) -> CapacityReport {
    let (width, height) = (image.width(), image.height());
    CapacityReport {
        width,
        height,
        capacity_bits: capacity_bits(height, width),
        max_message_bytes: max_message_bytes(height, width),
    }
}
