//! Resumable C/C++ tokenizer.
//!
//! This module provides:
//! - [`Highlighter`] - The line-at-a-time tokenizer contract
//! - [`CppTokenizer`] - The C/C++ implementation
//! - [`LineState`], [`ScanMode`], [`IndentKind`] - Scanner context carried across lines
//! - [`Token`], [`TokenKind`], [`SymbolKind`], [`TokenType`] - Token model
//! - [`tokenize_line`] - One-shot helper for a single line
//!
//! The scanner never fails: malformed input becomes [`TokenKind::Unknown`]
//! and every call to `next` consumes at least one char until end of line.

mod comment;
mod cursor;
mod directive;
mod highlighter;
pub mod keywords;
mod literal;
mod number;
mod punct;
mod scanner;
mod state;
mod token;

pub use highlighter::{Highlighter, Tokens};
pub use keywords::Keyword;
pub use scanner::{CppTokenizer, tokenize_line};
pub use state::{IndentKind, LineState, ScanMode};
pub use token::{SymbolKind, Token, TokenKind, TokenType};
