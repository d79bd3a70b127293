//! jz_scanner: Lexer/tokenizer for ECMAScript source text.
//!
//! Turns a UTF-8 byte buffer into tokens following the ECMA-262 lexical
//! grammar, with support for:
//! - Every punctuator and operator, by longest match
//! - Keywords and Unicode identifiers, including `\u` escapes and `#private` names
//! - String literals with all escape forms and line continuations
//! - Strict UTF-8 validation (overlong forms and surrogates are rejected)
//!
//! Numeric, template and regular expression literals are reported as
//! [`ScanError::NotImplemented`].

pub mod char_codes;
pub mod cursor;
mod error;
mod escape;
mod scanner;
mod token;

pub use error::{LiteralKind, Result, ScanError};
pub use scanner::{Scanner, Tokens};
pub use token::{Token, TokenKind};

/// Scan all of `source`, returning every token up to and including `Eof`.
pub fn tokenize(source: &[u8]) -> Result<Vec<Token>> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token()?;
        let eof = token.is_eof();
        tokens.push(token);
        if eof {
            return Ok(tokens);
        }
    }
}
