/// A UTF-8 sequence being assembled one byte at a time.
///
/// Every byte accepted by [`Utf8Sequence::add_point`] keeps the sequence a
/// prefix of some well-formed encoding, so a complete sequence is always a
/// Unicode scalar value: overlongs, surrogates and values above U+10FFFF are
/// rejected at the second byte.
pub(crate) struct Utf8Sequence {
    bytes: [u8; 4],
    full_length: u8,
    current_length: u8,
}

impl Utf8Sequence {
    /// Starts a sequence from a leading byte. Returns `None` for bytes that can
    /// never begin a well-formed sequence.
    #[inline]
    pub const fn build(byte: u8) -> Option<Self> {
        if Self::is_invalid(byte) {
            return None;
        }
        let full_length = match byte.leading_ones() {
            0 => 1,
            n @ 2..=4 => n,
            _ => return None,
        } as u8;
        Some(Self {
            bytes: [byte, 0, 0, 0],
            full_length,
            current_length: 1,
        })
    }

    /// Appends a continuation byte. Returns false, leaving the sequence
    /// untouched, if `point` cannot extend it.
    #[inline]
    pub fn add_point(&mut self, point: u8) -> bool {
        if self.is_complete() {
            return false;
        }
        let accepted = if self.current_length == 1 {
            Self::second_byte_range(self.bytes[0])
        } else {
            0x80..=0xBF
        };
        if !accepted.contains(&point) {
            return false;
        }
        self.bytes[self.current_len()] = point;
        self.current_length += 1;
        true
    }

    #[inline]
    pub const fn is_complete(&self) -> bool {
        self.current_length == self.full_length
    }

    #[inline]
    pub fn get_codepoint(&self) -> u32 {
        let mut codepoint = match self.full_length {
            1 => return self.bytes[0] as u32,
            2 => self.bytes[0] ^ 0b1100_0000,
            3 => self.bytes[0] ^ 0b1110_0000,
            _ => self.bytes[0] ^ 0b1111_0000,
        } as u32;
        for &byte in &self.bytes[1..self.current_len()] {
            codepoint = (codepoint << 6) | (byte ^ 0b1000_0000) as u32;
        }
        codepoint
    }

    // Unicode Table 3-7: the second byte carries the overlong, surrogate and
    // upper-bound restrictions.
    const fn second_byte_range(lead: u8) -> core::ops::RangeInclusive<u8> {
        match lead {
            0xE0 => 0xA0..=0xBF,
            0xED => 0x80..=0x9F,
            0xF0 => 0x90..=0xBF,
            0xF4 => 0x80..=0x8F,
            _ => 0x80..=0xBF,
        }
    }

    const fn is_invalid(byte: u8) -> bool {
        matches!(byte, 0x80..=0xC1 | 0xF5..)
    }

    pub const fn current_len(&self) -> usize {
        self.current_length as usize
    }

    pub const fn full_len(&self) -> usize {
        self.full_length as usize
    }
}
