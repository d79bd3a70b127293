//! Character constants and classification predicates used by the scanner.
//!
//! Identifier classes come from the `unicode-xid` tables; the version of the
//! Unicode Character Database they were generated from is [`UNICODE_VERSION`].

use unicode_xid::UnicodeXID;

/// The Unicode version backing [`is_identifier_start`] and
/// [`is_identifier_part`].
pub const UNICODE_VERSION: (u64, u64, u64) = unicode_xid::UNICODE_VERSION;

// Line terminators
pub const LINE_FEED: char = '\n';
pub const CARRIAGE_RETURN: char = '\r';
pub const LINE_SEPARATOR: char = '\u{2028}';
pub const PARAGRAPH_SEPARATOR: char = '\u{2029}';

// Format-control characters with lexical meaning
pub const TAB: char = '\t';
pub const VERTICAL_TAB: char = '\u{000B}';
pub const FORM_FEED: char = '\u{000C}';
pub const BYTE_ORDER_MARK: char = '\u{FEFF}';
pub const ZERO_WIDTH_NON_JOINER: char = '\u{200C}';
pub const ZERO_WIDTH_JOINER: char = '\u{200D}';

/// Check if a character is a line terminator: LF, CR, LS or PS.
#[inline]
pub fn is_line_terminator(ch: char) -> bool {
    ch == LINE_FEED
        || ch == CARRIAGE_RETURN
        || ch == LINE_SEPARATOR
        || ch == PARAGRAPH_SEPARATOR
}

/// Check if a character is a member of the `Space_Separator` (Zs) category.
#[inline]
pub fn is_space_separator(ch: char) -> bool {
    matches!(
        ch,
        ' ' | '\u{00A0}' // no-break space
            | '\u{1680}' // ogham space mark
            | '\u{2000}'..='\u{200A}' // en quad .. hair space
            | '\u{202F}' // narrow no-break space
            | '\u{205F}' // medium mathematical space
            | '\u{3000}' // ideographic space
    )
}

/// Check if a character is ECMAScript `WhiteSpace` (line terminators excluded).
#[inline]
pub fn is_whitespace(ch: char) -> bool {
    ch == TAB
        || ch == VERTICAL_TAB
        || ch == FORM_FEED
        || ch == BYTE_ORDER_MARK
        || is_space_separator(ch)
}

/// `ID_Start` code points that NFKC closure removes from `XID_Start`
/// (UAX #31, stable since Unicode 3.2 and unchanged through Unicode 16.0).
fn is_id_start_not_xid_start(ch: char) -> bool {
    matches!(
        ch,
        '\u{037A}'
            | '\u{0E33}'
            | '\u{0EB3}'
            | '\u{309B}'
            | '\u{309C}'
            | '\u{FC5E}'..='\u{FC63}'
            | '\u{FDFA}'
            | '\u{FDFB}'
            | '\u{FE70}'
            | '\u{FE72}'
            | '\u{FE74}'
            | '\u{FE76}'
            | '\u{FE78}'
            | '\u{FE7A}'
            | '\u{FE7C}'
            | '\u{FE7E}'
            | '\u{FF9E}'
            | '\u{FF9F}'
    )
}

/// Check if a character can start an identifier: `$`, `_` or `ID_Start`.
#[inline]
pub fn is_identifier_start(ch: char) -> bool {
    if ch.is_ascii() {
        return ch == '$' || ch == '_' || ch.is_ascii_alphabetic();
    }
    ch.is_xid_start() || is_id_start_not_xid_start(ch)
}

/// Check if a character can continue an identifier: `$`, ZWNJ, ZWJ or
/// `ID_Continue` (which covers digits and `_`).
#[inline]
pub fn is_identifier_part(ch: char) -> bool {
    if ch.is_ascii() {
        return ch == '$' || ch == '_' || ch.is_ascii_alphanumeric();
    }
    // ID_Start is a subset of ID_Continue, and every ID_Continue code point
    // missing from XID_Continue is one of the ID_Start exceptions.
    ch == ZERO_WIDTH_NON_JOINER
        || ch == ZERO_WIDTH_JOINER
        || ch.is_xid_continue()
        || is_id_start_not_xid_start(ch)
}

/// Check if a byte is an octal digit (0-7).
#[inline]
pub fn is_octal_digit(byte: u8) -> bool {
    matches!(byte, b'0'..=b'7')
}

/// Check if a byte is a hex digit.
#[inline]
pub fn is_hex_digit(byte: u8) -> bool {
    byte.is_ascii_hexdigit()
}

/// The value of a hex digit byte.
#[inline]
pub fn hex_value(byte: u8) -> Option<u32> {
    char::from(byte).to_digit(16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace() {
        for ch in ['\t', '\u{000B}', '\u{000C}', ' ', '\u{00A0}', '\u{FEFF}', '\u{2003}', '\u{3000}'] {
            assert!(is_whitespace(ch), "{:?}", ch);
        }
        // Line terminators are classified separately.
        assert!(!is_whitespace('\n'));
        assert!(!is_whitespace('\u{2028}'));
        // Zero width space is Cf, not Zs.
        assert!(!is_whitespace('\u{200B}'));
    }

    #[test]
    fn test_line_terminators() {
        for ch in ['\n', '\r', '\u{2028}', '\u{2029}'] {
            assert!(is_line_terminator(ch));
        }
        assert!(!is_line_terminator('\u{0085}'));
    }

    #[test]
    fn test_identifier_start() {
        assert!(is_identifier_start('$'));
        assert!(is_identifier_start('_'));
        assert!(is_identifier_start('a'));
        assert!(is_identifier_start('Z'));
        assert!(is_identifier_start('\u{00E9}')); // é
        assert!(is_identifier_start('\u{03C0}')); // π
        assert!(is_identifier_start('\u{4E2D}')); // 中
        assert!(!is_identifier_start('1'));
        assert!(!is_identifier_start('#'));
        assert!(!is_identifier_start('\u{200C}'));
    }

    #[test]
    fn test_id_start_outside_xid_start() {
        for ch in [
            '\u{037A}', '\u{0E33}', '\u{0EB3}', '\u{309B}', '\u{309C}', '\u{FC5E}', '\u{FC63}',
            '\u{FDFA}', '\u{FDFB}', '\u{FE70}', '\u{FE7E}', '\u{FF9E}', '\u{FF9F}',
        ] {
            assert!(is_identifier_start(ch), "{:?}", ch);
            assert!(is_identifier_part(ch), "{:?}", ch);
        }
    }

    #[test]
    fn test_unicode_version() {
        assert!(UNICODE_VERSION >= (15, 0, 0));
    }

    #[test]
    fn test_identifier_part() {
        assert!(is_identifier_part('$'));
        assert!(is_identifier_part('_'));
        assert!(is_identifier_part('9'));
        assert!(is_identifier_part('\u{0301}')); // combining acute accent
        assert!(is_identifier_part('\u{200C}'));
        assert!(is_identifier_part('\u{200D}'));
        assert!(!is_identifier_part('-'));
        assert!(!is_identifier_part(' '));
    }

    #[test]
    fn test_digit_helpers() {
        assert!(is_octal_digit(b'0'));
        assert!(is_octal_digit(b'7'));
        assert!(!is_octal_digit(b'8'));
        assert!(is_hex_digit(b'f'));
        assert!(is_hex_digit(b'F'));
        assert!(!is_hex_digit(b'g'));
        assert_eq!(hex_value(b'a'), Some(10));
        assert_eq!(hex_value(b'F'), Some(15));
        assert_eq!(hex_value(b'7'), Some(7));
        assert_eq!(hex_value(b'x'), None);
    }
}
