//! Message serialization: UTF-8 bytes, a zero terminator, and the
//! MSB-first bitstream that is written into the image.

/// Byte appended to every message to mark its end.
pub const TERMINATOR: u8 = 0x00;

/// Number of terminator bytes appended to every message.
pub const TERMINATOR_LEN: usize = 1;

/// A message ready to embed: its UTF-8 bytes followed by the terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    bytes: Vec<u8>,
}

impl Payload {
    /// Serialize a text message.
    ///
    /// The terminator is appended unconditionally. A NUL inside the message
    /// itself is not escaped, so decoding stops at the first zero byte.
    pub fn from_message(message: &str) -> Self {
        let mut bytes = Vec::with_capacity(message.len() + TERMINATOR_LEN);
        bytes.extend_from_slice(message.as_bytes());
        bytes.push(TERMINATOR);
        Self { bytes }
    }

    /// Payload bytes, terminator included.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Length of the bitstream.
    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8
    }

    /// Iterate the bitstream, most-significant bit first within each byte.
    /// Each item is `0` or `1`.
    pub fn bits(&self) -> impl Iterator<Item = u8> + '_ {
        self.bytes
            .iter()
            .flat_map(|&byte| (0..8).rev().map(move |shift| (byte >> shift) & 1))
    }
}

/// Bytes reassembled from a bitstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    /// Bytes before the terminator (or every complete byte if none was found).
    pub bytes: Vec<u8>,
    /// Whether a terminator byte was reached.
    pub terminated: bool,
}

/// Group MSB-first bits into bytes, stopping at the first zero byte.
///
/// The terminator itself is not included. A trailing chunk of fewer than
/// 8 bits is discarded.
pub fn collect_bytes<I>(bits: I) -> Extracted
where
    I: IntoIterator<Item = u8>,
{
    let mut bytes = Vec::new();
    let mut current = 0u8;
    let mut filled = 0;

    for bit in bits {
        current = (current << 1) | (bit & 1);
        filled += 1;
        if filled == 8 {
            if current == TERMINATOR {
                return Extracted {
                    bytes,
                    terminated: true,
                };
            }
            bytes.push(current);
            current = 0;
            filled = 0;
        }
    }

    Extracted {
        bytes,
        terminated: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_message_is_terminator_only() {
        let payload = Payload::from_message("");
        assert_eq!(payload.as_bytes(), &[TERMINATOR]);
        assert_eq!(payload.bit_len(), 8);
        assert!(payload.bits().all(|b| b == 0));
    }

    #[test]
    fn test_bits_are_msb_first() {
        // 'C' = 0x43 = 0b0100_0011
        let payload = Payload::from_message("C");
        let bits: Vec<u8> = payload.bits().take(8).collect();
        assert_eq!(bits, vec![0, 1, 0, 0, 0, 0, 1, 1]);
        assert_eq!(payload.bits().count(), 16);
    }

    #[test]
    fn test_multibyte_payload_length() {
        let payload = Payload::from_message("こんにちは世界");
        // 7 characters * 3 bytes + terminator
        assert_eq!(payload.as_bytes().len(), 22);
        assert_eq!(payload.bit_len(), 176);
    }

    #[test]
    fn test_collect_stops_at_terminator() {
        let bits = Payload::from_message("Hi").bits().chain([1u8; 16]).collect::<Vec<_>>();
        let extracted = collect_bytes(bits);
        assert_eq!(extracted.bytes, b"Hi");
        assert!(extracted.terminated);
    }

    #[test]
    fn test_collect_without_terminator_drops_partial_byte() {
        // 0x41 followed by 5 stray bits
        let bits = vec![0, 1, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1];
        let extracted = collect_bytes(bits);
        assert_eq!(extracted.bytes, vec![0x41]);
        assert!(!extracted.terminated);
    }

    #[test]
    fn test_collect_stops_at_first_zero_byte() {
        let payload = Payload::from_message("a\0b");
        let extracted = collect_bytes(payload.bits());
        assert_eq!(extracted.bytes, b"a");
        assert!(extracted.terminated);
    }

    #[test]
    fn test_collect_empty() {
        let extracted = collect_bytes(Vec::new());
        assert!(extracted.bytes.is_empty());
        assert!(!extracted.terminated);
    }
}
