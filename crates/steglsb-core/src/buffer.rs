//! RGB pixel buffer consumed and produced by the codec.

use image::{DynamicImage, GrayAlphaImage, GrayImage, RgbImage, RgbaImage};

use crate::error::{Result, StegoError};

/// Number of color channels in every buffer the codec works on.
pub const RGB_CHANNELS: usize = 3;

/// An 8-bit RGB raster with a fixed shape.
///
/// Pixel data is stored row-major, 3 bytes per pixel in R, G, B order.
/// The length is always `width * height * 3`; constructors reject anything
/// else so the codec never has to re-check the shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer from interleaved RGB data.
    ///
    /// # Errors
    ///
    /// Returns `StegoError::Format` if `pixels` is not exactly
    /// `width * height * 3` bytes long.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = byte_len(width, height, RGB_CHANNELS)?;
        if pixels.len() != expected {
            return Err(StegoError::Format(format!(
                "expected {} bytes for {}x{} RGB, got {}",
                expected,
                width,
                height,
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a buffer filled with a single color.
    ///
    /// # Errors
    ///
    /// Returns `StegoError::Format` if the buffer size overflows `usize`.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Result<Self> {
        let len = byte_len(width, height, RGB_CHANNELS)?;
        let pixels = rgb.iter().copied().cycle().take(len).collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a buffer from interleaved 8-bit samples with any supported
    /// channel count, converting to RGB.
    ///
    /// Supported layouts:
    /// * 1 - grayscale
    /// * 2 - grayscale + alpha (alpha is dropped)
    /// * 3 - RGB
    /// * 4 - RGBA (alpha is dropped)
    ///
    /// # Errors
    ///
    /// Returns `StegoError::Format` for any other channel count or when the
    /// data length does not match the dimensions.
    pub fn from_channels(width: u32, height: u32, channels: u8, data: Vec<u8>) -> Result<Self> {
        let expected = byte_len(width, height, channels as usize)?;
        if data.len() != expected {
            return Err(StegoError::Format(format!(
                "expected {} bytes for {}x{} with {} channels, got {}",
                expected,
                width,
                height,
                channels,
                data.len()
            )));
        }

        let shape_err = || StegoError::Format("pixel data does not fit dimensions".to_string());
        let dynamic = match channels {
            1 => DynamicImage::ImageLuma8(
                GrayImage::from_raw(width, height, data).ok_or_else(shape_err)?,
            ),
            2 => DynamicImage::ImageLumaA8(
                GrayAlphaImage::from_raw(width, height, data).ok_or_else(shape_err)?,
            ),
            3 => return Self::new(width, height, data),
            4 => DynamicImage::ImageRgba8(
                RgbaImage::from_raw(width, height, data).ok_or_else(shape_err)?,
            ),
            other => {
                return Err(StegoError::Format(format!(
                    "unsupported channel count {}",
                    other
                )))
            }
        };

        Ok(Self::from_dynamic(dynamic))
    }

    /// Create a buffer from an `image::RgbImage`.
    pub fn from_rgb_image(img: RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    /// Convert any decoded image to RGB.
    pub fn from_dynamic(img: DynamicImage) -> Self {
        match img {
            DynamicImage::ImageRgb8(rgb) => Self::from_rgb_image(rgb),
            other => Self::from_rgb_image(other.into_rgb8()),
        }
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Color type of the pixel data. Always RGB8.
    pub fn color_type(&self) -> image::ColorType {
        image::ColorType::Rgb8
    }

    /// Raw RGB bytes in row-major order.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Consume the buffer and return its raw RGB bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> u64 {
        (self.width as u64) * (self.height as u64)
    }

    /// Check if this is an empty image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
impl PixelBuffer {
    /// Get the `[r, g, b]` value at the given position.
    pub(crate) fn get_pixel(&self, row: u32, col: u32) -> Option<[u8; 3]> {
        if row >= self.height || col >= self.width {
            return None;
        }
        let offset = ((row as usize) * (self.width as usize) + col as usize) * RGB_CHANNELS;
        let px = &self.pixels[offset..offset + RGB_CHANNELS];
        Some([px[0], px[1], px[2]])
    }
}

fn byte_len(width: u32, height: u32, channels: usize) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(channels))
        .ok_or_else(|| {
            StegoError::Format(format!("dimensions {}x{} overflow", width, height))
        })
}
