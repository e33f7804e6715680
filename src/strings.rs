//! Validity checks and character counting over UTF-8 byte buffers.

use log::trace;

use crate::utf8::{decode, leading_byte_len};

/// Returns true if `bytes` is entirely well-formed UTF-8.
///
/// An encoded U+FFFD is valid; only bytes the decoder had to substitute make
/// the buffer invalid.
pub fn is_valid_utf8(bytes: &[u8]) -> bool {
    let mut pos = 0;
    while pos < bytes.len() {
        let dr = decode(&bytes[pos..]);
        if !dr.is_ok() {
            trace!("ill-formed UTF-8 at byte offset {pos}");
            return false;
        }
        pos += dr.bytes_seen();
    }
    true
}

/// Returns the number of characters in `bytes`.
///
/// Only leading bytes are read; the buffer is trusted to be well-formed. On
/// ill-formed input the count is unspecified but deterministic.
pub fn chars_len(bytes: &[u8]) -> usize {
    at_least_chars_len(bytes, usize::MAX)
}

/// Returns `min(chars_len(bytes), n)` without counting past `n`.
///
/// ```
/// use utf8chars::strings::at_least_chars_len;
///
/// let len = at_least_chars_len("\u{3042}\u{3044}\u{3046}".as_bytes(), 2);
/// assert_eq!(len, 2);
/// ```
pub fn at_least_chars_len(bytes: &[u8], n: usize) -> usize {
    let mut count = 0;
    let mut pos = 0;
    while pos < bytes.len() && count < n {
        count += 1;
        pos += leading_byte_len(bytes[pos]) as usize;
    }
    count
}

/// Splits off the first character: returns `(first, rest)`.
///
/// The first slice is clipped to the buffer if the leading byte claims more
/// bytes than remain. Empty input yields two empty slices.
pub fn front_char(bytes: &[u8]) -> (&[u8], &[u8]) {
    let Some(&lead) = bytes.first() else {
        return (bytes, bytes);
    };
    let len = (leading_byte_len(lead) as usize).min(bytes.len());
    bytes.split_at(len)
}

/// [`front_char`] over a `str`.
///
/// Well-formed input means the split always lands on a character boundary.
pub fn front_char_str(s: &str) -> (&str, &str) {
    match s.chars().next() {
        Some(c) => s.split_at(c.len_utf8()),
        None => (s, s),
    }
}
