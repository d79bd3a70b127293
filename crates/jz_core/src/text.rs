//! Byte range types for source location tracking.
//!
//! Tokens and scan errors report where they originate in the source buffer
//! as plain byte offsets; no line/column mapping is performed here.

use serde::Serialize;
use std::fmt;

/// A position in source text, measured as a byte offset from the start.
pub type TextPos = usize;

/// A half-open byte range `[start, end)` in the source buffer.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash, Serialize)]
pub struct TextRange {
    /// The byte offset where this range starts (inclusive).
    pub start: TextPos,
    /// The byte offset where this range ends (exclusive).
    pub end: TextPos,
}

impl TextRange {
    /// Create a new text range.
    #[inline]
    pub fn new(start: TextPos, end: TextPos) -> Self {
        debug_assert!(end >= start);
        Self { start, end }
    }

    /// Create an empty range at a position.
    #[inline]
    pub fn empty(pos: TextPos) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }
}

impl fmt::Debug for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_range() {
        let range = TextRange::new(5, 15);
        assert_eq!(range.start, 5);
        assert_eq!(range.end, 15);
        assert_eq!(format!("{:?}", range), "5..15");
    }

    #[test]
    fn test_empty_range() {
        let range = TextRange::empty(7);
        assert_eq!(range, TextRange::new(7, 7));
        assert_eq!(format!("{:?}", range), "7..7");
    }
}
