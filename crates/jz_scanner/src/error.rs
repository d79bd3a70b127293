//! Errors reported by the scanner.

use jz_core::text::TextPos;
use jz_core::utf8::InvalidEncoding;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Result type for scanner operations.
pub type Result<T> = std::result::Result<T, ScanError>;

/// Literal forms the scanner recognizes but does not scan yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LiteralKind {
    Numeric,
    Template,
    Regex,
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralKind::Numeric => write!(f, "numeric"),
            LiteralKind::Template => write!(f, "template"),
            LiteralKind::Regex => write!(f, "regular expression"),
        }
    }
}

/// A failed call to [`Scanner::next_token`](crate::Scanner::next_token).
///
/// Every variant records the byte offset of the construct that failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// The source is not well-formed UTF-8 at `offset`.
    #[error("invalid UTF-8 at byte {offset}: {reason}")]
    InvalidUtf8 {
        offset: TextPos,
        reason: InvalidEncoding,
    },

    /// An escape sequence has the wrong shape or encodes an invalid value.
    #[error("invalid escape sequence at byte {offset}")]
    InvalidEscapeSequence { offset: TextPos },

    /// A string literal is missing its closing quote.
    #[error("unterminated string literal starting at byte {offset}")]
    UnterminatedStringLiteral { offset: TextPos },

    /// The input ended in the middle of an escape sequence.
    #[error("unterminated escape sequence at byte {offset}")]
    UnterminatedEscape { offset: TextPos },

    /// The character at `offset` cannot begin any token.
    #[error("invalid identifier start at byte {offset}")]
    InvalidIdentifierStart { offset: TextPos },

    /// The token at `offset` is a literal form without a scanner.
    #[error("{literal} literals are not implemented (byte {offset})")]
    NotImplemented {
        offset: TextPos,
        literal: LiteralKind,
    },
}

impl ScanError {
    /// The byte offset where the failing construct starts.
    pub fn offset(&self) -> TextPos {
        match *self {
            ScanError::InvalidUtf8 { offset, .. }
            | ScanError::InvalidEscapeSequence { offset }
            | ScanError::UnterminatedStringLiteral { offset }
            | ScanError::UnterminatedEscape { offset }
            | ScanError::InvalidIdentifierStart { offset }
            | ScanError::NotImplemented { offset, .. } => offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_offsets() {
        let err = ScanError::UnterminatedStringLiteral { offset: 4 };
        assert_eq!(err.to_string(), "unterminated string literal starting at byte 4");
        assert_eq!(err.offset(), 4);

        let err = ScanError::NotImplemented {
            offset: 0,
            literal: LiteralKind::Template,
        };
        assert_eq!(err.to_string(), "template literals are not implemented (byte 0)");

        let err = ScanError::InvalidUtf8 {
            offset: 2,
            reason: InvalidEncoding::Overlong,
        };
        assert_eq!(err.to_string(), "invalid UTF-8 at byte 2: overlong encoding");
    }
}
