//! Forward-only byte cursor over the source buffer.

use crate::error::{Result, ScanError};
use jz_core::text::TextPos;
use jz_core::utf8;

/// A read position in the source bytes.
///
/// The position never moves backwards and never passes the end of the
/// buffer. Byte-level accessors return `None` at end of input; code point
/// accessors decode UTF-8 and report malformed input as
/// [`ScanError::InvalidUtf8`].
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a [u8],
    pos: TextPos,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a [u8]) -> Self {
        Self { source, pos: 0 }
    }

    /// The whole source buffer.
    #[inline]
    pub fn source(&self) -> &'a [u8] {
        self.source
    }

    /// The current byte offset.
    #[inline]
    pub fn pos(&self) -> TextPos {
        self.pos
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// The byte at the current position.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    /// The byte `offset` bytes past the current position.
    #[inline]
    pub fn peek_at(&self, offset: usize) -> Option<u8> {
        self.source.get(self.pos.checked_add(offset)?).copied()
    }

    /// Consume and return the byte at the current position.
    #[inline]
    pub fn bump(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos += 1;
        Some(byte)
    }

    /// Advance by `n` bytes, stopping at the end of input.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n).min(self.source.len());
    }

    /// Whether the remaining input starts with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.rest().starts_with(prefix)
    }

    /// The unread part of the source.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        self.source.get(self.pos..).unwrap_or_default()
    }

    /// Decode the code point at the current position without consuming it.
    ///
    /// Returns the character and its encoded length, or `None` at end of
    /// input.
    pub fn peek_char(&self) -> Result<Option<(char, usize)>> {
        let rest = self.rest();
        if rest.is_empty() {
            return Ok(None);
        }
        utf8::decode(rest)
            .map(Some)
            .map_err(|reason| ScanError::InvalidUtf8 {
                offset: self.pos,
                reason,
            })
    }

    /// Decode and consume the code point at the current position.
    pub fn bump_char(&mut self) -> Result<Option<char>> {
        let Some((ch, len)) = self.peek_char()? else {
            return Ok(None);
        };
        self.pos += len;
        Ok(Some(ch))
    }
}
