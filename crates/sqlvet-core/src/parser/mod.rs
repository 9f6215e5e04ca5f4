//! SQL syntax checker
//!
//! A hand-written recursive descent checker over the lexer's token stream.
//! It validates one statement and reports diagnostics; no syntax tree is
//! built.

mod ddl;
mod error;
mod expression;
#[allow(clippy::module_inception)]
mod parser;

pub use parser::{parse, Parser};
