//! steglsb Core - LSB image steganography
//!
//! This crate hides UTF-8 text in the least-significant bits of an RGB
//! image and recovers it again, and measures the distortion that embedding
//! causes with PSNR.
//!
//! # Module Structure
//!
//! - `buffer` - RGB pixel buffer and conversion from other color layouts
//! - `capacity` - How many message bits an image can hold
//! - `scan` - Pixel/channel visiting order shared by encoder and decoder
//! - `payload` - Message serialization and bitstream reassembly
//! - `codec` - LSB embedding and extraction
//! - `quality` - MSE and PSNR
//! - `image_io` - Loading image files and saving stego images as PNG

pub mod buffer;
pub mod capacity;
pub mod codec;
pub mod error;
pub mod image_io;
pub mod payload;
pub mod quality;
pub mod scan;

pub use buffer::PixelBuffer;
pub use capacity::{capacity_bits, capacity_report, max_message_bytes, CapacityReport};
pub use codec::{decode, encode};
pub use error::{Result, StegoError};
pub use quality::{psnr, quality_report, QualityReport};
