//! Character views over a borrowed UTF-8 byte buffer.
//!
//! [`Utf8AsChars32`] presents the buffer as `char`s and [`Utf8AsChars`] as the
//! byte slice of each character. Both offer forward iteration plus constant
//! time access to the first and last character, and compare as their
//! underlying bytes.
//!
//! ```
//! use utf8chars::Utf8AsChars32;
//!
//! let view = Utf8AsChars32::from("a\u{e9}\u{4e2d}");
//! assert_eq!(view.back(), Some('\u{4e2d}'));
//! assert_eq!(view.into_iter().collect::<String>(), "a\u{e9}\u{4e2d}");
//! ```

use log::error;

use crate::cursor::{Utf8CharCursor, Utf8StrCursor};
use crate::utf8::{decode, DecodeResult};

// Trailing lengths tried when the last byte is not ASCII. Three-byte
// characters (kana, CJK) are the most common non-ASCII case; a single byte
// always matches and handles ill-formed tails.
const BACK_CANDIDATES: [usize; 4] = [3, 2, 4, 1];

/// Finds the last character of `bytes` without scanning from the front.
///
/// Returns the byte offset where it starts and how it decodes, or `None` if
/// `bytes` is empty.
fn decode_back(bytes: &[u8]) -> Option<(usize, DecodeResult)> {
    let &last = bytes.last()?;
    let end = bytes.len();
    if last.is_ascii() {
        return Some((end - 1, decode(&bytes[end - 1..])));
    }
    for len in BACK_CANDIDATES {
        if len > end {
            continue;
        }
        let start = end - len;
        let dr = decode(&bytes[start..]);
        if dr.bytes_seen() == len {
            return Some((start, dr));
        }
    }
    error!("no trailing character found in {} non-empty bytes", end);
    unreachable!("decoding a single byte always consumes it")
}

/// A UTF-8 buffer viewed as a sequence of `char`s. Ill-formed runs read as
/// U+FFFD.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Utf8AsChars32<'a> {
    bytes: &'a [u8],
}

impl<'a> Utf8AsChars32<'a> {
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    pub const fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn begin(&self) -> Utf8CharCursor<'a> {
        Utf8CharCursor::new(self.bytes)
    }

    pub fn end(&self) -> Utf8CharCursor<'a> {
        Utf8CharCursor::end(self.bytes)
    }

    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Largest possible buffer size in bytes.
    pub const fn max_size(&self) -> usize {
        isize::MAX as usize
    }

    /// The first character, or `None` if the view is empty.
    pub fn front(&self) -> Option<char> {
        self.begin().get()
    }

    /// The last character, or `None` if the view is empty. Constant time.
    pub fn back(&self) -> Option<char> {
        decode_back(self.bytes).map(|(_, dr)| dr.code_point())
    }
}

impl<'a> From<&'a [u8]> for Utf8AsChars32<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }
}

impl<'a> From<&'a str> for Utf8AsChars32<'a> {
    fn from(s: &'a str) -> Self {
        Self::new(s.as_bytes())
    }
}

impl<'a> IntoIterator for Utf8AsChars32<'a> {
    type Item = char;
    type IntoIter = Utf8CharCursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.begin()
    }
}

impl<'a> IntoIterator for &Utf8AsChars32<'a> {
    type Item = char;
    type IntoIter = Utf8CharCursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.begin()
    }
}

/// A UTF-8 buffer viewed as a sequence of per-character byte slices.
/// Ill-formed runs are returned as they are.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Utf8AsChars<'a> {
    bytes: &'a [u8],
}

impl<'a> Utf8AsChars<'a> {
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    pub const fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn begin(&self) -> Utf8StrCursor<'a> {
        Utf8StrCursor::new(self.bytes)
    }

    pub fn end(&self) -> Utf8StrCursor<'a> {
        Utf8StrCursor::end(self.bytes)
    }

    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Largest possible buffer size in bytes.
    pub const fn max_size(&self) -> usize {
        isize::MAX as usize
    }

    /// The bytes of the first character, or `None` if the view is empty.
    pub fn front(&self) -> Option<&'a [u8]> {
        self.begin().get()
    }

    /// The bytes of the last character, or `None` if the view is empty.
    /// Constant time.
    pub fn back(&self) -> Option<&'a [u8]> {
        decode_back(self.bytes).map(|(start, dr)| &self.bytes[start..start + dr.bytes_seen()])
    }
}

impl<'a> From<&'a [u8]> for Utf8AsChars<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }
}

impl<'a> From<&'a str> for Utf8AsChars<'a> {
    fn from(s: &'a str) -> Self {
        Self::new(s.as_bytes())
    }
}

impl<'a> IntoIterator for Utf8AsChars<'a> {
    type Item = &'a [u8];
    type IntoIter = Utf8StrCursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.begin()
    }
}

impl<'a> IntoIterator for &Utf8AsChars<'a> {
    type Item = &'a [u8];
    type IntoIter = Utf8StrCursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.begin()
    }
}
