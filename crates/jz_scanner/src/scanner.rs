//! The ECMAScript scanner.
//!
//! Converts a UTF-8 byte buffer into tokens one call at a time. Whitespace and
//! line terminators are skipped between tokens; comments, numeric literals,
//! template literals and regular expressions are not scanned.

use std::iter::FusedIterator;

use jz_core::text::{TextPos, TextRange};
use tracing::{debug, trace};

use crate::char_codes::{is_identifier_part, is_identifier_start, is_line_terminator, is_whitespace};
use crate::cursor::Cursor;
use crate::error::{LiteralKind, Result, ScanError};
use crate::escape::{scan_escape, scan_unicode_escape};
use crate::token::{Token, TokenKind};

/// The scanner converts ECMAScript source bytes into tokens.
///
/// Each [`next_token`](Scanner::next_token) call produces a fresh token or
/// the error that stopped it. Once the input is exhausted every further call
/// returns [`TokenKind::Eof`] without moving.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner over `source`, which should be UTF-8.
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// The current byte offset (end of the last token).
    #[inline]
    pub fn pos(&self) -> TextPos {
        self.cursor.pos()
    }

    /// The source buffer being scanned.
    #[inline]
    pub fn source(&self) -> &'a [u8] {
        self.cursor.source()
    }

    /// Scan the next token.
    pub fn next_token(&mut self) -> Result<Token> {
        match self.scan() {
            Ok(token) => {
                trace!(kind = %token.kind, start = token.range.start, end = token.range.end, "token");
                Ok(token)
            }
            Err(err) => {
                debug!(offset = err.offset(), error = %err, "scan failed");
                Err(err)
            }
        }
    }

    /// Iterate over the remaining tokens, excluding the final `Eof`.
    ///
    /// The iterator ends after yielding the first error.
    pub fn tokens(&mut self) -> Tokens<'_, 'a> {
        Tokens {
            scanner: self,
            done: false,
        }
    }

    // ========================================================================
    // Core scanning
    // ========================================================================

    fn scan(&mut self) -> Result<Token> {
        self.skip_trivia();
        let start = self.cursor.pos();

        let Some(byte) = self.cursor.peek() else {
            return Ok(Token::new(TokenKind::Eof, TextRange::empty(start)));
        };

        match byte {
            b'0'..=b'9' => Err(ScanError::NotImplemented {
                offset: start,
                literal: LiteralKind::Numeric,
            }),
            b'"' | b'\'' => self.scan_string_literal(byte),
            b'`' => Err(ScanError::NotImplemented {
                offset: start,
                literal: LiteralKind::Template,
            }),
            _ => {
                if let Some(kind) = single_punctuator(byte) {
                    self.cursor.bump();
                    Ok(Token::new(kind, TextRange::new(start, self.cursor.pos())))
                } else if let Some(token) = punctuator_candidates(byte).and_then(|c| self.scan_punctuator(c)) {
                    Ok(token)
                } else {
                    self.scan_identifier()
                }
            }
        }
    }

    /// Skip whitespace and line terminators.
    ///
    /// Stops at the first byte that does not decode; the token scanner
    /// dispatched on it reports the error.
    fn skip_trivia(&mut self) {
        while let Ok(Some((ch, len))) = self.cursor.peek_char() {
            if !is_whitespace(ch) && !is_line_terminator(ch) {
                break;
            }
            self.cursor.advance(len);
        }
    }

    // ========================================================================
    // Token-specific scanning methods
    // ========================================================================

    /// Consume the longest spelling in `candidates` that matches the input.
    fn scan_punctuator(&mut self, candidates: &[TokenKind]) -> Option<Token> {
        let start = self.cursor.pos();
        let (kind, len) = candidates.iter().find_map(|&kind| {
            let text = kind.text()?;
            self.cursor.starts_with(text.as_bytes()).then_some((kind, text.len()))
        })?;
        self.cursor.advance(len);
        Some(Token::new(kind, TextRange::new(start, self.cursor.pos())))
    }

    fn scan_identifier(&mut self) -> Result<Token> {
        let start = self.cursor.pos();
        let mut text = String::new();

        if self.cursor.peek() == Some(b'#') {
            self.cursor.bump();
            text.push('#');
        }

        match decode_identifier_char(&mut self.cursor)? {
            Some(ch) if is_identifier_start(ch) => text.push(ch),
            _ => return Err(ScanError::InvalidIdentifierStart { offset: start }),
        }

        loop {
            let mut lookahead = self.cursor.clone();
            match decode_identifier_char(&mut lookahead) {
                Ok(Some(ch)) if is_identifier_part(ch) => {
                    text.push(ch);
                    self.cursor = lookahead;
                }
                Ok(_) | Err(ScanError::InvalidUtf8 { .. }) => break,
                Err(err) => return Err(err),
            }
        }

        let range = TextRange::new(start, self.cursor.pos());
        match TokenKind::from_keyword(&text) {
            Some(keyword) => Ok(Token::new(keyword, range)),
            None => Ok(Token::new(TokenKind::Identifier, range).with_text(text)),
        }
    }

    fn scan_string_literal(&mut self, quote: u8) -> Result<Token> {
        let start = self.cursor.pos();
        let unterminated = ScanError::UnterminatedStringLiteral { offset: start };
        self.cursor.bump();
        let mut text = String::new();

        loop {
            let Some(byte) = self.cursor.peek() else {
                return Err(unterminated);
            };

            if byte == quote {
                self.cursor.bump();
                break;
            }

            if byte == b'\\' {
                let escape_start = self.cursor.pos();
                self.cursor.bump();
                match self.cursor.peek_char()? {
                    None => return Err(unterminated),
                    // Line continuation: CR LF counts as one terminator.
                    Some(('\r', _)) => {
                        self.cursor.bump();
                        if self.cursor.peek() == Some(b'\n') {
                            self.cursor.bump();
                        }
                    }
                    Some((ch, len)) if is_line_terminator(ch) => self.cursor.advance(len),
                    Some(_) => text.push(scan_escape(&mut self.cursor, escape_start)?),
                }
                continue;
            }

            match self.cursor.peek_char()? {
                Some((ch, _)) if is_line_terminator(ch) => return Err(unterminated),
                Some((ch, len)) => {
                    text.push(ch);
                    self.cursor.advance(len);
                }
                None => return Err(unterminated),
            }
        }

        Ok(Token::new(TokenKind::StringLiteral, TextRange::new(start, self.cursor.pos())).with_text(text))
    }
}

impl<'a> From<&'a str> for Scanner<'a> {
    fn from(source: &'a str) -> Self {
        Scanner::new(source.as_bytes())
    }
}

/// Decode one identifier character, either raw or as a `\u` escape.
///
/// Returns `None` at end of input.
fn decode_identifier_char(cursor: &mut Cursor<'_>) -> Result<Option<char>> {
    if cursor.peek() != Some(b'\\') {
        return cursor.bump_char();
    }
    let start = cursor.pos();
    cursor.bump();
    match cursor.peek() {
        Some(b'u') => {
            cursor.bump();
            scan_unicode_escape(cursor, start).map(Some)
        }
        Some(_) => Err(ScanError::InvalidEscapeSequence { offset: start }),
        None => Err(ScanError::UnterminatedEscape { offset: start }),
    }
}

fn single_punctuator(byte: u8) -> Option<TokenKind> {
    let kind = match byte {
        b'{' => TokenKind::BraceLeft,
        b'}' => TokenKind::BraceRight,
        b':' => TokenKind::Colon,
        b',' => TokenKind::Comma,
        b'(' => TokenKind::ParenLeft,
        b')' => TokenKind::ParenRight,
        b';' => TokenKind::Semicolon,
        b'[' => TokenKind::SquareLeft,
        b']' => TokenKind::SquareRight,
        b'~' => TokenKind::Tilde,
        _ => return None,
    };
    Some(kind)
}

/// Spellings that begin with `byte`, longest first.
fn punctuator_candidates(byte: u8) -> Option<&'static [TokenKind]> {
    use TokenKind::*;

    let candidates: &'static [TokenKind] = match byte {
        b'&' => &[AmpersandAmpersandEquals, AmpersandAmpersand, AmpersandEquals, Ampersand],
        b'*' => &[AsteriskAsteriskEquals, AsteriskAsterisk, AsteriskEquals, Asterisk],
        b'^' => &[CaretEquals, Caret],
        b'.' => &[DotDotDot, Dot],
        b'=' => &[EqualsEqualsEquals, EqualsEquals, Arrow, Equals],
        b'!' => &[ExclamationEqualsEquals, ExclamationEquals, Exclamation],
        b'>' => &[
            GreaterGreaterGreaterEquals,
            GreaterGreaterGreater,
            GreaterGreaterEquals,
            GreaterGreater,
            GreaterEquals,
            Greater,
        ],
        b'<' => &[LessLessEquals, LessLess, LessEquals, Less],
        b'-' => &[MinusEquals, MinusMinus, Minus],
        b'%' => &[PercentEquals, Percent],
        b'+' => &[PlusEquals, PlusPlus, Plus],
        b'?' => &[QuestionQuestionEquals, QuestionQuestion, QuestionDot, Question],
        b'/' => &[SlashEquals, Slash],
        b'|' => &[VerticalVerticalEquals, VerticalVertical, VerticalEquals, Vertical],
        _ => return None,
    };
    Some(candidates)
}

/// Iterator returned by [`Scanner::tokens`].
#[derive(Debug)]
pub struct Tokens<'s, 'a> {
    scanner: &'s mut Scanner<'a>,
    done: bool,
}

impl Iterator for Tokens<'_, '_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.scanner.next_token() {
            Ok(token) if token.is_eof() => {
                self.done = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

impl FusedIterator for Tokens<'_, '_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let mut scanner = Scanner::from(source);
        let mut kinds = Vec::new();
        loop {
            let token = scanner.next_token().unwrap();
            kinds.push(token.kind);
            if token.is_eof() {
                return kinds;
            }
        }
    }

    #[test]
    fn test_scan_simple_tokens() {
        assert_eq!(
            kinds("( ) { } [ ] ; , : ~"),
            vec![
                TokenKind::ParenLeft,
                TokenKind::ParenRight,
                TokenKind::BraceLeft,
                TokenKind::BraceRight,
                TokenKind::SquareLeft,
                TokenKind::SquareRight,
                TokenKind::Semicolon,
                TokenKind::Comma,
                TokenKind::Colon,
                TokenKind::Tilde,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_scan_operators() {
        assert_eq!(
            kinds("+ ++ += - -- -= * ** *= / /= % %= === !== == !="),
            vec![
                TokenKind::Plus,
                TokenKind::PlusPlus,
                TokenKind::PlusEquals,
                TokenKind::Minus,
                TokenKind::MinusMinus,
                TokenKind::MinusEquals,
                TokenKind::Asterisk,
                TokenKind::AsteriskAsterisk,
                TokenKind::AsteriskEquals,
                TokenKind::Slash,
                TokenKind::SlashEquals,
                TokenKind::Percent,
                TokenKind::PercentEquals,
                TokenKind::EqualsEqualsEquals,
                TokenKind::ExclamationEqualsEquals,
                TokenKind::EqualsEquals,
                TokenKind::ExclamationEquals,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_maximal_munch_without_spaces() {
        assert_eq!(
            kinds(">>>=>>=>"),
            vec![
                TokenKind::GreaterGreaterGreaterEquals,
                TokenKind::GreaterGreaterEquals,
                TokenKind::Greater,
                TokenKind::Eof,
            ]
        );
        assert_eq!(
            kinds("a=>b....c"),
            vec![
                TokenKind::Identifier,
                TokenKind::Arrow,
                TokenKind::Identifier,
                TokenKind::DotDotDot,
                TokenKind::Dot,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_candidates_are_longest_first() {
        for byte in 0..=u8::MAX {
            let Some(candidates) = punctuator_candidates(byte) else {
                continue;
            };
            let lengths: Vec<usize> = candidates.iter().map(|k| k.text().unwrap().len()).collect();
            assert!(lengths.windows(2).all(|w| w[0] >= w[1]), "{:?}", candidates);
            assert_eq!(candidates.last().unwrap().text(), Some(std::str::from_utf8(&[byte]).unwrap()));
            for kind in candidates {
                assert_eq!(kind.text().unwrap().as_bytes()[0], byte);
            }
        }
    }

    #[test]
    fn test_scan_identifier_and_keyword() {
        let mut scanner = Scanner::from("let x = y;");
        assert_eq!(scanner.next_token().unwrap().kind, TokenKind::Let);
        let ident = scanner.next_token().unwrap();
        assert_eq!(ident.kind, TokenKind::Identifier);
        assert_eq!(ident.text(), Some("x"));
        assert_eq!(ident.range, TextRange::new(4, 5));
        assert_eq!(scanner.next_token().unwrap().kind, TokenKind::Equals);
        assert_eq!(scanner.next_token().unwrap().text(), Some("y"));
        assert_eq!(scanner.next_token().unwrap().kind, TokenKind::Semicolon);
        assert!(scanner.next_token().unwrap().is_eof());
    }

    #[test]
    fn test_scan_string_literal() {
        let mut scanner = Scanner::from(r#""hello" 'world'"#);
        let token = scanner.next_token().unwrap();
        assert_eq!(token.kind, TokenKind::StringLiteral);
        assert_eq!(token.text(), Some("hello"));
        assert_eq!(token.range, TextRange::new(0, 7));
        assert_eq!(scanner.next_token().unwrap().text(), Some("world"));
    }

    #[test]
    fn test_not_implemented_literals() {
        let mut scanner = Scanner::from("x 42");
        scanner.next_token().unwrap();
        assert_eq!(
            scanner.next_token(),
            Err(ScanError::NotImplemented {
                offset: 2,
                literal: LiteralKind::Numeric
            })
        );
        assert_eq!(
            Scanner::from("`t`").next_token(),
            Err(ScanError::NotImplemented {
                offset: 0,
                literal: LiteralKind::Template
            })
        );
    }

    #[test]
    fn test_eof_is_repeatable() {
        let mut scanner = Scanner::from("  \n");
        for _ in 0..3 {
            let token = scanner.next_token().unwrap();
            assert!(token.is_eof());
            assert_eq!(token.range, TextRange::empty(3));
        }
    }

    #[test]
    fn test_tokens_iterator() {
        let mut scanner = Scanner::from("a + b");
        let tokens: Vec<_> = scanner.tokens().collect::<Result<_>>().unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].kind, TokenKind::Plus);

        let mut scanner = Scanner::from("a 'b");
        let mut iter = scanner.tokens();
        assert!(iter.next().unwrap().is_ok());
        assert_eq!(
            iter.next(),
            Some(Err(ScanError::UnterminatedStringLiteral { offset: 2 }))
        );
        assert_eq!(iter.next(), None);
    }
}
