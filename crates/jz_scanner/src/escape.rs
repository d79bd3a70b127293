//! Escape sequence decoding for string literals and identifiers.
//!
//! All entry points are called with the cursor just past the backslash and
//! take the offset of that backslash, which is what errors report.

use crate::char_codes::{hex_value, is_octal_digit};
use crate::cursor::Cursor;
use crate::error::{Result, ScanError};
use jz_core::text::TextPos;

const MAX_CODE_POINT: u32 = 0x10FFFF;
const MAX_BRACED_DIGITS: usize = 6;

/// Decode any escape sequence allowed in a string literal.
///
/// Line continuations are not escapes and must be handled by the caller
/// before calling this.
pub(crate) fn scan_escape(cursor: &mut Cursor<'_>, start: TextPos) -> Result<char> {
    let Some(byte) = cursor.peek() else {
        return Err(ScanError::UnterminatedEscape { offset: start });
    };
    match byte {
        b'u' => {
            cursor.bump();
            scan_unicode_escape(cursor, start)
        }
        b'x' => {
            cursor.bump();
            scan_hex_escape(cursor, start)
        }
        b'\'' | b'"' | b'\\' | b'b' | b'f' | b'n' | b'r' | b't' | b'v' => {
            cursor.bump();
            Ok(single_escape_value(byte))
        }
        b'0'..=b'7' => Ok(scan_legacy_octal_escape(cursor)),
        // NonOctalDecimalEscapeSequence: the digit itself.
        b'8' | b'9' => {
            cursor.bump();
            Ok(char::from(byte))
        }
        // CharacterEscapeSequence: any other character stands for itself.
        _ => cursor
            .bump_char()?
            .ok_or(ScanError::UnterminatedEscape { offset: start }),
    }
}

/// Decode `XXXX` or `{X...}` following `\u`.
///
/// A high surrogate written as an escape combines with an immediately
/// following `\uXXXX` low surrogate; any other surrogate is rejected.
pub(crate) fn scan_unicode_escape(cursor: &mut Cursor<'_>, start: TextPos) -> Result<char> {
    let value = if cursor.peek() == Some(b'{') {
        cursor.bump();
        scan_braced_code_point(cursor, start)?
    } else {
        scan_hex_digits(cursor, start, 4)?
    };

    if (0xD800..=0xDBFF).contains(&value) {
        if let Some(low) = peek_low_surrogate_escape(cursor) {
            cursor.advance(6);
            let combined = 0x1_0000 + ((value - 0xD800) << 10) + (low - 0xDC00);
            return char::from_u32(combined).ok_or(ScanError::InvalidEscapeSequence { offset: start });
        }
    }

    char::from_u32(value).ok_or(ScanError::InvalidEscapeSequence { offset: start })
}

/// `\xHH`
fn scan_hex_escape(cursor: &mut Cursor<'_>, start: TextPos) -> Result<char> {
    let value = scan_hex_digits(cursor, start, 2)?;
    char::from_u32(value).ok_or(ScanError::InvalidEscapeSequence { offset: start })
}

/// Read exactly `count` hex digits.
fn scan_hex_digits(cursor: &mut Cursor<'_>, start: TextPos, count: usize) -> Result<u32> {
    let mut value = 0;
    for _ in 0..count {
        let byte = cursor
            .peek()
            .ok_or(ScanError::UnterminatedEscape { offset: start })?;
        let digit = hex_value(byte).ok_or(ScanError::InvalidEscapeSequence { offset: start })?;
        cursor.bump();
        value = value * 16 + digit;
    }
    Ok(value)
}

/// The body of `\u{...}`, after the opening brace.
///
/// Leading zeros do not count towards the six-digit limit, so
/// `\u{0000000061}` is `a`.
fn scan_braced_code_point(cursor: &mut Cursor<'_>, start: TextPos) -> Result<u32> {
    let mut saw_zero = false;
    while cursor.peek() == Some(b'0') {
        cursor.bump();
        saw_zero = true;
    }

    let mut value = 0;
    let mut digits = 0;
    loop {
        let byte = cursor
            .peek()
            .ok_or(ScanError::UnterminatedEscape { offset: start })?;
        if byte == b'}' {
            cursor.bump();
            break;
        }
        let digit = hex_value(byte).ok_or(ScanError::InvalidEscapeSequence { offset: start })?;
        digits += 1;
        if digits > MAX_BRACED_DIGITS {
            return Err(ScanError::InvalidEscapeSequence { offset: start });
        }
        cursor.bump();
        value = value * 16 + digit;
    }

    if digits == 0 && !saw_zero {
        return Err(ScanError::InvalidEscapeSequence { offset: start });
    }
    if value > MAX_CODE_POINT {
        return Err(ScanError::InvalidEscapeSequence { offset: start });
    }
    Ok(value)
}

/// The value of a `\uXXXX` low surrogate escape at the cursor, if there is one.
fn peek_low_surrogate_escape(cursor: &Cursor<'_>) -> Option<u32> {
    if !cursor.starts_with(b"\\u") {
        return None;
    }
    let mut value = 0;
    for offset in 2..6 {
        value = value * 16 + hex_value(cursor.peek_at(offset)?)?;
    }
    (0xDC00..=0xDFFF).contains(&value).then_some(value)
}

fn single_escape_value(byte: u8) -> char {
    match byte {
        b'b' => '\u{0008}',
        b'f' => '\u{000C}',
        b'n' => '\n',
        b'r' => '\r',
        b't' => '\t',
        b'v' => '\u{000B}',
        other => char::from(other),
    }
}

/// Up to three octal digits; a third digit is only taken when the first is
/// 0-3, so the value never exceeds 0o377 and `\777` is `?` followed by `7`.
fn scan_legacy_octal_escape(cursor: &mut Cursor<'_>) -> char {
    fn next_octal(cursor: &mut Cursor<'_>) -> Option<u8> {
        let byte = cursor.peek().filter(|&b| is_octal_digit(b))?;
        cursor.bump();
        Some(byte - b'0')
    }

    let Some(d1) = next_octal(cursor) else {
        return '\0';
    };
    let Some(d2) = next_octal(cursor) else {
        return char::from(d1);
    };
    if d1 >= 4 {
        return char::from(d1 * 8 + d2);
    }
    match next_octal(cursor) {
        Some(d3) => char::from(d1 * 64 + d2 * 8 + d3),
        None => char::from(d1 * 8 + d2),
    }
}
