//! Strict UTF-8 decoding of a single scalar value.
//!
//! The scanner works directly on the source bytes and decodes one code
//! point at a time, so it needs a decoder that reports the encoded length and
//! rejects everything the Unicode standard calls ill-formed: stray
//! continuation bytes, overlong forms, encoded surrogates and values beyond
//! U+10FFFF. Truncated input fails instead of reading past the slice.

use thiserror::Error;

/// Why a byte sequence is not a well-formed UTF-8 scalar value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidEncoding {
    #[error("no bytes to decode")]
    Empty,
    #[error("byte {0:#04x} cannot start a UTF-8 sequence")]
    InvalidLeadByte(u8),
    #[error("sequence is truncated")]
    Truncated,
    #[error("expected a continuation byte")]
    InvalidContinuation,
    #[error("overlong encoding")]
    Overlong,
    #[error("encoded surrogate code point")]
    Surrogate,
    #[error("code point beyond U+10FFFF")]
    OutOfRange,
}

/// Smallest value that needs `n` bytes, indexed by `n`.
const MIN_FOR_LEN: [u32; 5] = [0, 0, 0x80, 0x800, 0x1_0000];

/// The length of the sequence introduced by `lead`, or `None` if `lead` is a
/// continuation byte or one of `0xF8..=0xFF`.
#[inline]
pub fn sequence_len(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC0..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF7 => Some(4),
        _ => None,
    }
}

#[inline]
fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Decode the scalar value at the start of `bytes`.
///
/// Returns the character and the number of bytes it occupies. Only the
/// bytes of the first sequence are inspected; trailing bytes are ignored.
pub fn decode(bytes: &[u8]) -> Result<(char, usize), InvalidEncoding> {
    let &lead = bytes.first().ok_or(InvalidEncoding::Empty)?;
    if lead < 0x80 {
        return Ok((lead as char, 1));
    }

    let len = sequence_len(lead).ok_or(InvalidEncoding::InvalidLeadByte(lead))?;
    let tail = bytes.get(1..len).ok_or(InvalidEncoding::Truncated)?;
    if !tail.iter().all(|&b| is_continuation(b)) {
        return Err(InvalidEncoding::InvalidContinuation);
    }

    let lead_bits = match len {
        2 => lead & 0x1F,
        3 => lead & 0x0F,
        _ => lead & 0x07,
    };
    let cp = tail
        .iter()
        .fold(u32::from(lead_bits), |acc, &b| (acc << 6) | u32::from(b & 0x3F));

    if cp < MIN_FOR_LEN[len] {
        return Err(InvalidEncoding::Overlong);
    }
    if (0xD800..=0xDFFF).contains(&cp) {
        return Err(InvalidEncoding::Surrogate);
    }
    let ch = char::from_u32(cp).ok_or(InvalidEncoding::OutOfRange)?;
    Ok((ch, len))
}
