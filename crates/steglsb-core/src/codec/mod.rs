//! LSB embedding and extraction.
//!
//! The encoder overwrites the least-significant bit of one color channel per
//! message bit; the decoder reads the same bits back. Both walk the image
//! with [`crate::scan::scan_order`].
//!
//! # Examples
//!
//! ```ignore
//! use steglsb_core::buffer::PixelBuffer;
//! use steglsb_core::codec::{decode, encode};
//!
//! let cover = PixelBuffer::filled(20, 20, [255, 255, 255]).unwrap();
//! let stego = encode(&cover, "Ciao, amole.").unwrap();
//! assert_eq!(decode(&stego).unwrap(), "Ciao, amole.");
//! ```

mod decode;
mod encode;

pub use decode::{decode, extract_bytes};
pub use encode::encode;
