//! steglsb WASM - WebAssembly bindings for steglsb
//!
//! This crate exposes the steglsb-core codec to JavaScript/TypeScript
//! applications. File pickers, previews and save dialogs live on the
//! JavaScript side; this layer only moves pixels and strings across.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper for RGB pixel buffers
//! - `stego` - Message embedding, extraction and capacity queries
//! - `quality` - PSNR between a cover and a stego image
//! - `io` - Image file loading and PNG export
//!
//! # Usage
//!
//! ```typescript
//! import init, { load_image, encode_message, encode_png } from '@steglsb/wasm';
//!
//! await init();
//!
//! const cover = load_image(new Uint8Array(await file.arrayBuffer()));
//! const stego = encode_message(cover, "Ciao, amole.");
//! const png = encode_png(stego);
//! ```

use wasm_bindgen::prelude::*;

mod io;
mod quality;
mod stego;
mod types;

// Re-export public types
pub use io::{encode_png, load_image};
pub use quality::{psnr, quality_report};
pub use stego::{
    capacity_report, decode_message, encode_message, max_message_bytes, message_fits,
};
pub use types::JsPixelBuffer;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Convert a core error into a JavaScript exception value.
pub(crate) fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
