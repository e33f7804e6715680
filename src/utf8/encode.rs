use super::{MAX_CHAR_LEN, REPLACEMENT_CHARACTER};

/// UTF-8 form of a single codepoint.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EncodeResult {
    bytes: [u8; MAX_CHAR_LEN],
    len: u8,
}

impl EncodeResult {
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len()]
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Always false; every codepoint encodes to at least one byte.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl AsRef<[u8]> for EncodeResult {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Encodes `codepoint` as UTF-8.
///
/// Values that are not Unicode scalar values (surrogates and anything above
/// U+10FFFF) are encoded as U+FFFD, so the output is always well-formed.
#[inline]
pub fn encode(codepoint: u32) -> EncodeResult {
    let c = char::from_u32(codepoint).unwrap_or(REPLACEMENT_CHARACTER);
    let mut bytes = [0; MAX_CHAR_LEN];
    let len = c.encode_utf8(&mut bytes).len() as u8;
    EncodeResult { bytes, len }
}
