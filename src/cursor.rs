//! Forward cursors over the characters of a UTF-8 byte buffer.
//!
//! A cursor holds a byte position and the decoded character starting there.
//! The character is decoded once, when the cursor arrives at a position, so
//! reading it is constant time. [`Utf8CharCursor`] yields codepoints and
//! [`Utf8StrCursor`] yields the raw bytes of each character; both step through
//! the buffer identically.

use std::iter::FusedIterator;

use crate::utf8::{decode, DecodeResult};

#[derive(Copy, Clone, Debug)]
struct RawCursor<'a> {
    bytes: &'a [u8],
    pos: usize,
    dr: DecodeResult,
}

impl<'a> RawCursor<'a> {
    #[inline]
    fn new(bytes: &'a [u8], pos: usize) -> Self {
        let mut cursor = Self {
            bytes,
            pos,
            dr: DecodeResult::END,
        };
        cursor.decode();
        cursor
    }

    #[inline]
    fn decode(&mut self) {
        self.dr = if self.is_end() {
            DecodeResult::END
        } else {
            decode(&self.bytes[self.pos..])
        };
    }

    #[inline]
    fn advance(&mut self) {
        self.pos += self.dr.bytes_seen();
        self.decode();
    }

    #[inline]
    fn is_end(&self) -> bool {
        self.pos == self.bytes.len()
    }

    #[inline]
    fn code_point(&self) -> Option<char> {
        (!self.is_end()).then(|| self.dr.code_point())
    }

    #[inline]
    fn substr(&self) -> Option<&'a [u8]> {
        (!self.is_end()).then(|| &self.bytes[self.pos..self.pos + self.dr.bytes_seen()])
    }

    #[inline]
    fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining.div_ceil(4), Some(remaining))
    }

    #[inline]
    fn same_position(&self, other: &Self) -> bool {
        std::ptr::eq(self.bytes[self.pos..].as_ptr(), other.bytes[other.pos..].as_ptr())
    }
}

/// Cursor yielding each character as a `char`. Ill-formed runs yield U+FFFD.
///
/// Two cursors are equal when they point at the same byte of the same buffer.
#[derive(Copy, Clone, Debug)]
pub struct Utf8CharCursor<'a>(RawCursor<'a>);

impl<'a> Utf8CharCursor<'a> {
    /// Creates a cursor at the first character of `bytes`.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self(RawCursor::new(bytes, 0))
    }

    /// Creates the terminal cursor of `bytes`.
    pub fn end(bytes: &'a [u8]) -> Self {
        Self(RawCursor::new(bytes, bytes.len()))
    }

    /// Byte offset of the current character.
    pub fn position(&self) -> usize {
        self.0.pos
    }

    pub fn is_end(&self) -> bool {
        self.0.is_end()
    }

    /// The current character, or `None` at the end.
    pub fn get(&self) -> Option<char> {
        self.0.code_point()
    }

    /// Result of decoding the current character.
    pub fn decode_result(&self) -> DecodeResult {
        self.0.dr
    }

    /// Moves to the next character. Does nothing at the end.
    pub fn advance(&mut self) {
        self.0.advance();
    }
}

impl PartialEq for Utf8CharCursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0.same_position(&other.0)
    }
}

impl Eq for Utf8CharCursor<'_> {}

impl Iterator for Utf8CharCursor<'_> {
    type Item = char;

    #[inline]
    fn next(&mut self) -> Option<char> {
        let c = self.get()?;
        self.advance();
        Some(c)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl FusedIterator for Utf8CharCursor<'_> {}

/// Cursor yielding each character as the byte slice it occupies. Ill-formed
/// runs are yielded as they are.
///
/// Two cursors are equal when they point at the same byte of the same buffer.
#[derive(Copy, Clone, Debug)]
pub struct Utf8StrCursor<'a>(RawCursor<'a>);

impl<'a> Utf8StrCursor<'a> {
    /// Creates a cursor at the first character of `bytes`.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self(RawCursor::new(bytes, 0))
    }

    /// Creates the terminal cursor of `bytes`.
    pub fn end(bytes: &'a [u8]) -> Self {
        Self(RawCursor::new(bytes, bytes.len()))
    }

    /// Byte offset of the current character.
    pub fn position(&self) -> usize {
        self.0.pos
    }

    pub fn is_end(&self) -> bool {
        self.0.is_end()
    }

    /// The bytes of the current character, or `None` at the end.
    pub fn get(&self) -> Option<&'a [u8]> {
        self.0.substr()
    }

    /// Result of decoding the current character.
    pub fn decode_result(&self) -> DecodeResult {
        self.0.dr
    }

    /// Moves to the next character. Does nothing at the end.
    pub fn advance(&mut self) {
        self.0.advance();
    }
}

impl PartialEq for Utf8StrCursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0.same_position(&other.0)
    }
}

impl Eq for Utf8StrCursor<'_> {}

impl<'a> Iterator for Utf8StrCursor<'a> {
    type Item = &'a [u8];

    #[inline]
    fn next(&mut self) -> Option<&'a [u8]> {
        let s = self.get()?;
        self.advance();
        Some(s)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl FusedIterator for Utf8StrCursor<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utf8::REPLACEMENT_CHARACTER;

    const MIXED: &[u8] = &[0x61, 0xC3, 0xA9, 0xE4, 0xB8, 0xAD];

    #[test]
    fn yields_code_points() {
        let chars: Vec<char> = Utf8CharCursor::new(MIXED).collect();
        assert_eq!(chars, ['a', '\u{e9}', '\u{4e2d}']);
    }

    #[test]
    fn yields_substrings() {
        let parts: Vec<&[u8]> = Utf8StrCursor::new(b"hello").collect();
        assert_eq!(parts, [b"h", b"e", b"l", b"l", b"o"]);

        let parts: Vec<&[u8]> = Utf8StrCursor::new(MIXED).collect();
        assert_eq!(parts, [&MIXED[..1], &MIXED[1..3], &MIXED[3..]]);
    }

    #[test]
    fn explicit_advance() {
        let mut cursor = Utf8CharCursor::new(MIXED);
        let end = Utf8CharCursor::end(MIXED);
        assert_eq!(cursor.get(), Some('a'));
        assert_eq!(cursor.position(), 0);
        cursor.advance();
        assert_eq!(cursor.get(), Some('\u{e9}'));
        assert_eq!(cursor.position(), 1);
        cursor.advance();
        assert_eq!(cursor.position(), 3);
        assert_ne!(cursor, end);
        cursor.advance();
        assert!(cursor.is_end());
        assert_eq!(cursor, end);
        assert_eq!(cursor.get(), None);
        cursor.advance();
        assert_eq!(cursor.position(), MIXED.len());
    }

    #[test]
    fn equality_ignores_decoded_value() {
        let a = Utf8CharCursor::new(MIXED);
        let mut b = Utf8CharCursor::new(MIXED);
        assert_eq!(a, b);
        b.advance();
        assert_ne!(a, b);
    }

    #[test]
    fn cursors_on_different_buffers_differ() {
        let other = MIXED.to_vec();
        assert_ne!(Utf8CharCursor::new(MIXED), Utf8CharCursor::new(&other));
    }

    #[test]
    fn empty_buffer_starts_at_end() {
        let cursor = Utf8StrCursor::new(b"");
        assert!(cursor.is_end());
        assert_eq!(cursor, Utf8StrCursor::end(b""));
        assert_eq!(cursor.count(), 0);
    }

    #[test]
    fn ill_formed_runs() {
        let bytes = [b'a', 0x80, 0xE4, 0xB8, b'b', 0xFF];
        let chars: Vec<char> = Utf8CharCursor::new(&bytes).collect();
        assert_eq!(
            chars,
            ['a', REPLACEMENT_CHARACTER, REPLACEMENT_CHARACTER, 'b', REPLACEMENT_CHARACTER]
        );
        let parts: Vec<&[u8]> = Utf8StrCursor::new(&bytes).collect();
        assert_eq!(
            parts,
            [&bytes[0..1], &bytes[1..2], &bytes[2..4], &bytes[4..5], &bytes[5..6]]
        );
    }

    #[test]
    fn decode_result_is_cached() {
        let cursor = Utf8StrCursor::new(&[0xE4, 0xB8]);
        assert!(!cursor.decode_result().is_ok());
        assert_eq!(cursor.decode_result().bytes_seen(), 2);
    }

    #[test]
    fn size_hint_bounds() {
        let cursor = Utf8CharCursor::new(MIXED);
        assert_eq!(cursor.size_hint(), (2, Some(6)));
    }
}
