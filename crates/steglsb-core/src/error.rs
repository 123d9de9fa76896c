//! Error type shared by every codec operation.

use std::string::FromUtf8Error;

use thiserror::Error;

/// Errors that can occur while embedding or extracting a message.
///
/// The three variants are distinct so callers can branch on whether the
/// image, the message size, or the recovered bytes were at fault.
#[derive(Debug, Error)]
pub enum StegoError {
    /// The image cannot be interpreted as three-channel RGB.
    #[error("Image cannot be interpreted as RGB: {0}")]
    Format(String),

    /// The message plus its terminator needs more LSB slots than the image has.
    #[error("Message needs {required} bits but the image only holds {available}")]
    Capacity { required: u64, available: u64 },

    /// The recovered byte sequence is not valid UTF-8.
    #[error("Decoded message is not valid UTF-8: {0}")]
    Encoding(#[from] FromUtf8Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StegoError>;
