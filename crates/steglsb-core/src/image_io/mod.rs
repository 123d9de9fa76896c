//! Conversion between image files and [`PixelBuffer`](crate::buffer::PixelBuffer).
//!
//! The codec itself works on in-memory pixels only. These helpers cover the
//! two ends a host application needs:
//! - Loading a cover or stego image (PNG, JPEG, BMP) and converting it to RGB
//! - Saving a stego image losslessly as PNG
//!
//! Saving a stego image in a lossy format destroys the embedded bits; only
//! PNG output is provided for that reason.

mod load;
mod png;

pub use load::load_image;
pub use png::encode_png;
