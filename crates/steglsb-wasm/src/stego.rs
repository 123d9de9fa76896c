//! Steganography WASM bindings.
//!
//! # Functions
//!
//! - [`encode_message`] - Hide a text message in an image
//! - [`decode_message`] - Recover a hidden message
//! - [`max_message_bytes`] - Longest message an image can hold
//! - [`message_fits`] - Whether a message fits in an image
//! - [`capacity_report`] - Capacity summary as a plain JS object
//!
//! # Example
//!
//! ```typescript
//! const stego = encode_message(cover, "Ciao, amole.");
//! const message = decode_message(stego);
//! ```

use steglsb_core::{capacity, codec};
use wasm_bindgen::prelude::*;

use crate::to_js_error;
use crate::types::JsPixelBuffer;

/// Embed `message` into a copy of `image`.
///
/// # Errors
///
/// Throws if the pixel buffer is malformed or the message does not fit.
#[wasm_bindgen]
pub fn encode_message(image: &JsPixelBuffer, message: &str) -> Result<JsPixelBuffer, JsValue> {
    let cover = image.to_core().map_err(to_js_error)?;
    codec::encode(&cover, message)
        .map(JsPixelBuffer::from_core)
        .map_err(to_js_error)
}

/// Recover the message hidden in `image`.
///
/// # Errors
///
/// Throws if the pixel buffer is malformed or the hidden bytes are not
/// valid UTF-8.
#[wasm_bindgen]
pub fn decode_message(image: &JsPixelBuffer) -> Result<String, JsValue> {
    let stego = image.to_core().map_err(to_js_error)?;
    codec::decode(&stego).map_err(to_js_error)
}

/// Longest message, in UTF-8 bytes, that fits in a `width` x `height` image.
///
/// Returned as a `BigInt` since the count can exceed 2^53 for huge dimensions.
#[wasm_bindgen]
pub fn max_message_bytes(width: u32, height: u32) -> u64 {
    capacity::max_message_bytes(height, width)
}

/// Check whether `message` fits in `image` before encoding it.
#[wasm_bindgen]
pub fn message_fits(image: &JsPixelBuffer, message: &str) -> Result<bool, JsValue> {
    let img = image.to_core().map_err(to_js_error)?;
    Ok(capacity::capacity_report(&img).fits(message))
}

/// Capacity summary for `image`, returned as
/// `{ width, height, capacity_bits, max_message_bytes }`.
#[wasm_bindgen]
pub fn capacity_report(image: &JsPixelBuffer) -> Result<JsValue, JsValue> {
    let img = image.to_core().map_err(to_js_error)?;
    serde_wasm_bindgen::to_value(&capacity::capacity_report(&img)).map_err(to_js_error)
}


/// WASM-specific tests that require JsValue.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_encode_decode_message() {
        let img = JsPixelBuffer::new(20, 20, vec![255u8; 20 * 20 * 3]);
        let stego = encode_message(&img, "Ciao, amole.").unwrap();
        assert_eq!(decode_message(&stego).unwrap(), "Ciao, amole.");
    }

    #[wasm_bindgen_test]
    fn test_encode_message_too_large() {
        let img = JsPixelBuffer::new(1, 1, vec![255u8; 3]);
        assert!(encode_message(&img, "Ciao, tesoro.").is_err());
    }

    #[wasm_bindgen_test]
    fn test_decode_message_invalid_utf8() {
        let img = JsPixelBuffer::new(2, 2, vec![1u8; 12]);
        assert!(decode_message(&img).is_err());
    }

    #[wasm_bindgen_test]
    fn test_message_fits() {
        let img = JsPixelBuffer::new(4, 4, vec![255u8; 48]);
        assert!(message_fits(&img, "Honey").unwrap());
        assert!(!message_fits(&img, "Honeys").unwrap());
    }

    #[wasm_bindgen_test]
    fn test_capacity_report_object() {
        let img = JsPixelBuffer::new(4, 4, vec![0u8; 48]);
        let value = capacity_report(&img).unwrap();
        assert!(value.is_object());
    }
}
