//! jz_core: Core utilities shared by the jz scanner and its tools.
//!
//! Provides byte-range types for source locations and a strict UTF-8
//! decoder used by the scanner cursor.

pub mod text;
pub mod utf8;

// Re-export commonly used types
pub use text::{TextPos, TextRange};
pub use utf8::InvalidEncoding;
