//! SQL Lexer/Tokenizer
//!
//! This module provides a hand-written lexer that turns SQL text into a
//! stream of tokens carrying line, word and byte positions. Lexical faults
//! are reported in-band as [`TokenKind::Error`] tokens.

mod span;
mod token;
mod tokenizer;

pub use span::Span;
pub use token::{Keyword, Operator, Special, Token, TokenKind};
pub use tokenizer::{tokenize, Lexer};
