//! Whole-buffer conversion between UTF-8 and UTF-32.

use crate::cursor::Utf8CharCursor;
use crate::utf8::{encode, REPLACEMENT_CHARACTER};

/// Decodes `bytes` into UTF-32 code units. Ill-formed runs become U+FFFD.
pub fn utf8_to_utf32(bytes: &[u8]) -> Vec<u32> {
    let mut result = Vec::with_capacity(bytes.len());
    result.extend(Utf8CharCursor::new(bytes).map(u32::from));
    result
}

/// Encodes UTF-32 code units as UTF-8.
///
/// Surrogates and values above U+10FFFF are encoded as U+FFFD.
pub fn utf32_to_utf8(code_points: &[u32]) -> Vec<u8> {
    let mut result = Vec::with_capacity(code_points.len());
    for &cp in code_points {
        append_encoded_char(&mut result, cp);
    }
    result
}

/// Appends the UTF-8 encoding of `cp` to `dest`.
#[inline]
pub fn append_encoded_char(dest: &mut Vec<u8>, cp: u32) {
    dest.extend_from_slice(encode(cp).as_bytes());
}

/// Appends `cp` to `dest`, substituting U+FFFD like [`append_encoded_char`].
#[inline]
pub fn push_code_point(dest: &mut String, cp: u32) {
    dest.push(char::from_u32(cp).unwrap_or(REPLACEMENT_CHARACTER));
}
