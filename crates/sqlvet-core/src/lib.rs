//! # sqlvet-core
//!
//! A hand-written SQL syntax checker that reports problems by line and word.
//!
//! This crate provides:
//! - A tokenizer that never fails: problems become error tokens
//! - A recursive descent checker for SELECT, INSERT, UPDATE, DELETE,
//!   CREATE TABLE, ALTER TABLE and DROP TABLE
//! - A validator that returns a serializable result with the offending
//!   source line attached to every error
//!
//! The checker does not build a syntax tree and does not resolve names; it
//! only answers whether the first statement of the input is well formed.
//!
//! ## Validating a statement
//!
//! ```rust
//! use sqlvet_core::validate;
//!
//! let result = validate("SELECT id, name FROM users WHERE id = 1;");
//! assert!(result.is_valid());
//!
//! let result = validate("SELECT id, name WHERE id=1;");
//! let error = &result.errors()[0];
//! assert_eq!(error.message, "Expected 'FROM' after SELECT column list");
//! assert_eq!((error.line, error.word), (1, 4));
//! assert_eq!(error.line_content, "SELECT id, name WHERE id=1;");
//! ```
//!
//! ## Limiting input size
//!
//! ```rust
//! use sqlvet_core::{Validator, ValidatorConfig};
//!
//! let validator = Validator::new(ValidatorConfig {
//!     max_input_bytes: Some(16),
//! });
//! assert!(!validator.validate("SELECT * FROM a_very_long_table_name").is_valid());
//! ```

pub mod diagnostic;
pub mod lexer;
pub mod parser;
pub mod validator;

pub use diagnostic::{Diagnostic, ValidationResult};
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::Parser;
pub use validator::{validate, Validator, ValidatorConfig};
