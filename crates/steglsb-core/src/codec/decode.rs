//! Message extraction.

use log::debug;

use crate::buffer::PixelBuffer;
use crate::error::Result;
use crate::payload::{collect_bytes, Extracted};
use crate::scan::scan_order;

/// Read channel LSBs in scan order and reassemble them into bytes.
///
/// Stops at the first zero byte. If the image ends without one, every
/// complete byte read so far is returned and `terminated` is false.
pub fn extract_bytes(image: &PixelBuffer) -> Extracted {
    let pixels = image.pixels();
    let bits = scan_order(image.width(), image.height()).map(|offset| pixels[offset] & 1);
    collect_bytes(bits)
}

/// Recover a text message from the LSBs of `image`.
///
/// This is best-effort: there is no check that the image was produced by
/// [`super::encode`], so arbitrary images may yield arbitrary text.
///
/// # Errors
///
/// Returns `StegoError::Encoding` if the recovered bytes are not valid UTF-8.
pub fn decode(image: &PixelBuffer) -> Result<String> {
    let extracted = extract_bytes(image);
    debug!(
        "extracted {} bytes from {}x{} image (terminator found: {})",
        extracted.bytes.len(),
        image.width(),
        image.height(),
        extracted.terminated
    );
    Ok(String::from_utf8(extracted.bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StegoError;

    fn image_from_lsbs(width: u32, height: u32, lsbs: &[u8]) -> PixelBuffer {
        let len = (width * height * 3) as usize;
        let mut pixels = vec![200u8; len];
        for (px, bit) in pixels.iter_mut().zip(lsbs) {
            *px |= bit;
        }
        PixelBuffer::new(width, height, pixels).unwrap()
    }

    #[test]
    fn test_decode_reads_parity() {
        // 'A' = 0b0100_0001 then terminator; pixel base value 200 is even
        let bits = [0, 1, 0, 0, 0, 0, 0, 1];
        let img = image_from_lsbs(6, 1, &bits);
        assert_eq!(decode(&img).unwrap(), "A");
    }

    #[test]
    fn test_decode_without_terminator_returns_complete_bytes() {
        // 3x1 image = 9 bits: one full byte 'A' plus a single stray bit
        let bits = [0, 1, 0, 0, 0, 0, 0, 1, 1];
        let img = image_from_lsbs(3, 1, &bits);
        let extracted = extract_bytes(&img);
        assert_eq!(extracted.bytes, b"A");
        assert!(!extracted.terminated);
        assert_eq!(decode(&img).unwrap(), "A");
    }

    #[test]
    fn test_decode_all_even_is_empty() {
        let img = PixelBuffer::filled(5, 5, [0, 0, 0]).unwrap();
        let extracted = extract_bytes(&img);
        assert!(extracted.terminated);
        assert_eq!(decode(&img).unwrap(), "");
    }

    #[test]
    fn test_decode_too_small_for_a_byte() {
        let img = PixelBuffer::filled(2, 1, [1, 1, 1]).unwrap();
        assert_eq!(decode(&img).unwrap(), "");
    }

    #[test]
    fn test_decode_invalid_utf8() {
        let bits = [1u8; 8];
        let img = image_from_lsbs(2, 2, &bits);
        assert!(matches!(decode(&img), Err(StegoError::Encoding(_))));
    }

    #[test]
    fn test_decode_white_image_is_invalid_utf8() {
        // Every LSB is 1 -> 0xFF bytes with no terminator
        let img = PixelBuffer::filled(4, 4, [255, 255, 255]).unwrap();
        assert!(matches!(decode(&img), Err(StegoError::Encoding(_))));
    }
}
