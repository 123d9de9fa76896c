//! Image file WASM bindings.

use steglsb_core::image_io;
use wasm_bindgen::prelude::*;

use crate::to_js_error;
use crate::types::JsPixelBuffer;

/// Decode PNG, JPEG or BMP bytes into an RGB buffer.
///
/// # Example
///
/// ```typescript
/// const bytes = new Uint8Array(await file.arrayBuffer());
/// const image = load_image(bytes);
/// console.log(`Loaded ${image.width}x${image.height}`);
/// ```
#[wasm_bindgen]
pub fn load_image(bytes: &[u8]) -> Result<JsPixelBuffer, JsValue> {
    image_io::load_image(bytes)
        .map(JsPixelBuffer::from_core)
        .map_err(to_js_error)
}

/// Encode an RGB buffer as PNG bytes.
///
/// Stego images must be saved losslessly, so PNG is the only export format.
#[wasm_bindgen]
pub fn encode_png(image: &JsPixelBuffer) -> Result<Vec<u8>, JsValue> {
    let img = image.to_core().map_err(to_js_error)?;
    image_io::encode_png(&img).map_err(to_js_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_round_trip_through_wrapper() {
        let js_img = JsPixelBuffer::new(4, 4, vec![42u8; 48]);
        let png = image_io::encode_png(&js_img.to_core().unwrap()).unwrap();
        let loaded = JsPixelBuffer::from_core(image_io::load_image(&png).unwrap());
        assert_eq!(loaded.pixels(), js_img.pixels());
    }
}
