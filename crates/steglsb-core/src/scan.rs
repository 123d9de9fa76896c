//! Channel scan order shared by the encoder and decoder.
//!
//! Pixels are visited row-major (row 0 left to right, then row 1, ...) and
//! within each pixel the channels are visited R, G, B. The encoder writes
//! bits and the decoder reads them through the same iterator, so the two
//! can never disagree about where bit `n` lives.

use crate::buffer::RGB_CHANNELS;

/// A color channel within an RGB pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

/// The order in which channels of a single pixel are visited.
pub const CHANNEL_ORDER: [Channel; RGB_CHANNELS] = [Channel::Red, Channel::Green, Channel::Blue];

impl Channel {
    /// Offset of this channel inside an interleaved RGB pixel.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

/// One LSB slot: a single channel of a single pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub row: u32,
    pub col: u32,
    pub channel: Channel,
}

impl Slot {
    /// Byte offset of this slot in a row-major interleaved RGB buffer.
    #[inline]
    pub fn offset(&self, width: u32) -> usize {
        ((self.row as usize) * (width as usize) + self.col as usize) * RGB_CHANNELS
            + self.channel.index()
    }
}

/// Iterate every slot of a `width` x `height` image in embedding order.
pub fn slots(width: u32, height: u32) -> impl Iterator<Item = Slot> {
    (0..height).flat_map(move |row| {
        (0..width).flat_map(move |col| {
            CHANNEL_ORDER
                .into_iter()
                .map(move |channel| Slot { row, col, channel })
        })
    })
}

/// Iterate buffer offsets of every slot in embedding order.
pub fn scan_order(width: u32, height: u32) -> impl Iterator<Item = usize> {
    slots(width, height).map(move |slot| slot.offset(width))
}

/// Row that holds bit number `bit_index` of the stream.
///
/// Lets a caller know how many rows an embed will touch before doing it.
pub fn row_of_bit(width: u32, bit_index: usize) -> usize {
    let row_bits = (width as usize) * RGB_CHANNELS;
    if row_bits == 0 {
        return 0;
    }
    bit_index / row_bits
}
