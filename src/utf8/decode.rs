use super::{sequence::Utf8Sequence, REPLACEMENT_CHARACTER};

/// Outcome of decoding one character at the start of a byte slice.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DecodeResult {
    code_point: char,
    bytes_seen: u8,
    ok: bool,
}

impl DecodeResult {
    /// What [`decode`] returns for empty input.
    pub(crate) const END: Self = Self::ill_formed(0);

    #[inline]
    const fn well_formed(code_point: char, bytes_seen: u8) -> Self {
        Self {
            code_point,
            bytes_seen,
            ok: true,
        }
    }

    #[inline]
    const fn ill_formed(bytes_seen: u8) -> Self {
        Self {
            code_point: REPLACEMENT_CHARACTER,
            bytes_seen,
            ok: false,
        }
    }

    /// The decoded character, or U+FFFD for an ill-formed sequence.
    #[inline]
    pub const fn code_point(&self) -> char {
        self.code_point
    }

    /// Number of bytes consumed, always in `1..=4` for non-empty input.
    #[inline]
    pub const fn bytes_seen(&self) -> usize {
        self.bytes_seen as usize
    }

    /// True if the bytes formed a well-formed sequence. An encoded U+FFFD is
    /// ok; a substituted one is not.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        self.ok
    }
}

/// Decodes the character at the start of `bytes`.
///
/// An ill-formed sequence yields U+FFFD and consumes its maximal subpart: the
/// longest prefix that could still begin a well-formed sequence, or a single
/// byte when there is none. This matches [`String::from_utf8_lossy`].
///
/// Empty input is the only case that consumes nothing; it reports U+FFFD with
/// `bytes_seen() == 0`.
pub fn decode(bytes: &[u8]) -> DecodeResult {
    let Some(&lead) = bytes.first() else {
        return DecodeResult::END;
    };
    if lead.is_ascii() {
        return DecodeResult::well_formed(lead as char, 1);
    }
    let Some(mut sequence) = Utf8Sequence::build(lead) else {
        return DecodeResult::ill_formed(1);
    };
    for &point in bytes[1..].iter().take(sequence.full_len() - 1) {
        if !sequence.add_point(point) {
            break;
        }
    }
    let seen = sequence.current_len() as u8;
    if !sequence.is_complete() {
        return DecodeResult::ill_formed(seen);
    }
    match char::from_u32(sequence.get_codepoint()) {
        Some(code_point) => DecodeResult::well_formed(code_point, seen),
        None => DecodeResult::ill_formed(seen),
    }
}
