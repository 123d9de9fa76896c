//! Image quality WASM bindings.

use steglsb_core::quality;
use wasm_bindgen::prelude::*;

use crate::to_js_error;
use crate::types::JsPixelBuffer;

/// PSNR in decibels between `original` and `modified`.
///
/// Returns `Infinity` for identical images.
///
/// # Errors
///
/// Throws if either buffer is malformed or the shapes differ.
#[wasm_bindgen]
pub fn psnr(original: &JsPixelBuffer, modified: &JsPixelBuffer) -> Result<f64, JsValue> {
    let (a, b) = to_core_pair(original, modified)?;
    Ok(quality::psnr(&a, &b))
}

/// MSE and PSNR as `{ mse, psnr }`.
#[wasm_bindgen]
pub fn quality_report(
    original: &JsPixelBuffer,
    modified: &JsPixelBuffer,
) -> Result<JsValue, JsValue> {
    let (a, b) = to_core_pair(original, modified)?;
    serde_wasm_bindgen::to_value(&quality::quality_report(&a, &b)).map_err(to_js_error)
}

fn to_core_pair(
    original: &JsPixelBuffer,
    modified: &JsPixelBuffer,
) -> Result<(steglsb_core::PixelBuffer, steglsb_core::PixelBuffer), JsValue> {
    if !same_shape(original, modified) {
        return Err(JsValue::from_str(&format!(
            "Image shapes differ: {}x{} vs {}x{}",
            original.width(),
            original.height(),
            modified.width(),
            modified.height()
        )));
    }
    let a = original.to_core().map_err(to_js_error)?;
    let b = modified.to_core().map_err(to_js_error)?;
    Ok((a, b))
}

fn same_shape(a: &JsPixelBuffer, b: &JsPixelBuffer) -> bool {
    a.width() == b.width() && a.height() == b.height()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_shape() {
        let a = JsPixelBuffer::new(2, 3, vec![0; 18]);
        let b = JsPixelBuffer::new(2, 3, vec![1; 18]);
        let c = JsPixelBuffer::new(3, 2, vec![1; 18]);
        assert!(same_shape(&a, &b));
        assert!(!same_shape(&a, &c));
    }

    #[test]
    fn test_psnr_via_core() {
        let white = JsPixelBuffer::new(10, 10, vec![255; 300]);
        let black = JsPixelBuffer::new(10, 10, vec![0; 300]);
        let value = quality::psnr(&white.to_core().unwrap(), &black.to_core().unwrap());
        assert_eq!(value, 0.0);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_psnr_identical() {
        let img = JsPixelBuffer::new(10, 10, vec![255; 300]);
        assert_eq!(psnr(&img, &img).unwrap(), f64::INFINITY);
    }

    #[wasm_bindgen_test]
    fn test_psnr_shape_mismatch() {
        let a = JsPixelBuffer::new(2, 3, vec![0; 18]);
        let b = JsPixelBuffer::new(3, 2, vec![0; 18]);
        assert!(psnr(&a, &b).is_err());
    }
}
