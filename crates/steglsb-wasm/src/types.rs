//! WASM-compatible wrapper types for pixel buffers.

use steglsb_core::{PixelBuffer, StegoError};
use wasm_bindgen::prelude::*;

use crate::to_js_error;

/// An RGB pixel buffer wrapper for JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. `pixels()` copies it into a
/// JavaScript `Uint8Array`.
#[wasm_bindgen]
pub struct JsPixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsPixelBuffer {
    /// Create a new JsPixelBuffer from dimensions and RGB pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsPixelBuffer {
        JsPixelBuffer {
            width,
            height,
            pixels,
        }
    }

    /// Create an RGB buffer from interleaved samples with 1, 2, 3 or 4
    /// channels (e.g. canvas `ImageData` is 4-channel RGBA).
    pub fn from_channels(
        width: u32,
        height: u32,
        channels: u8,
        data: Vec<u8>,
    ) -> Result<JsPixelBuffer, JsValue> {
        PixelBuffer::from_channels(width, height, channels, data)
            .map(JsPixelBuffer::from_core)
            .map_err(to_js_error)
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGB pixel data as Uint8Array (copied).
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }
}

impl JsPixelBuffer {
    /// Wrap a core buffer.
    pub(crate) fn from_core(img: PixelBuffer) -> Self {
        Self {
            width: img.width(),
            height: img.height(),
            pixels: img.into_raw(),
        }
    }

    /// Convert to a core buffer, validating the shape.
    ///
    /// Note: This clones the pixel data.
    pub(crate) fn to_core(&self) -> Result<PixelBuffer, StegoError> {
        PixelBuffer::new(self.width, self.height, self.pixels.clone())
    }
}
