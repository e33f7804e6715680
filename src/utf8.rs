//! Single-codepoint UTF-8 codec.
//!
//! Everything else in the crate goes through [`decode`], [`encode`] and
//! [`leading_byte_len`]; nothing outside this module looks at UTF-8 bit
//! patterns directly.

pub(crate) mod decode;
pub(crate) mod encode;
pub(crate) mod sequence;

pub use decode::{decode, DecodeResult};
pub use encode::{encode, EncodeResult};

/// U+FFFD, substituted for every ill-formed byte run.
pub const REPLACEMENT_CHARACTER: char = '\u{FFFD}';

/// The largest Unicode codepoint.
pub const MAX_CODEPOINT: u32 = 0x10FFFF;

/// Longest UTF-8 encoding of a single codepoint, in bytes.
pub const MAX_CHAR_LEN: usize = 4;

// Indexed by the high nibble of the leading byte.
const LEADING_BYTE_LEN: [u8; 16] = [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 3, 4];

/// Returns the byte length of the UTF-8 character that starts with `byte`.
///
/// Only the high nibble is inspected. The result for a byte that is not a
/// valid leading byte is unspecified but stable: continuation bytes report 1
/// and `0xF8..=0xFF` report 4.
#[inline]
pub const fn leading_byte_len(byte: u8) -> u8 {
    LEADING_BYTE_LEN[(byte >> 4) as usize]
}

/// Returns the byte length of the UTF-8 character starting at `bytes[pos]`.
///
/// Same contract as [`leading_byte_len`]. The returned length may run past
/// the end of `bytes` if the buffer is truncated.
///
/// # Panics
///
/// Panics if `pos` is out of bounds.
#[inline]
pub fn char_len_at(bytes: &[u8], pos: usize) -> u8 {
    leading_byte_len(bytes[pos])
}

/// Returns true for codepoints that [`encode`] emits unchanged.
#[inline]
pub const fn is_valid_codepoint(codepoint: u32) -> bool {
    char::from_u32(codepoint).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_byte_lengths() {
        assert_eq!(leading_byte_len(b'a'), 1);
        assert_eq!(leading_byte_len(0x7F), 1);
        assert_eq!(leading_byte_len(0xC3), 2);
        assert_eq!(leading_byte_len(0xDF), 2);
        assert_eq!(leading_byte_len(0xE4), 3);
        assert_eq!(leading_byte_len(0xF0), 4);
        assert_eq!(leading_byte_len(0xF4), 4);
    }

    #[test]
    fn non_leading_bytes_are_deterministic() {
        assert_eq!(leading_byte_len(0x80), 1);
        assert_eq!(leading_byte_len(0xBF), 1);
        assert_eq!(leading_byte_len(0xFF), 4);
    }

    #[test]
    fn char_len_at_position() {
        let bytes = "a\u{e9}\u{4e2d}".as_bytes();
        assert_eq!(char_len_at(bytes, 0), 1);
        assert_eq!(char_len_at(bytes, 1), 2);
        assert_eq!(char_len_at(bytes, 3), 3);
    }

    #[test]
    fn valid_codepoints() {
        assert!(is_valid_codepoint(0));
        assert!(is_valid_codepoint(0xFFFD));
        assert!(is_valid_codepoint(MAX_CODEPOINT));
        assert!(!is_valid_codepoint(0xD800));
        assert!(!is_valid_codepoint(0xDFFF));
        assert!(!is_valid_codepoint(MAX_CODEPOINT + 1));
    }
}
