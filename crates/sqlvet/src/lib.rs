//! # sqlvet
//!
//! Command-line front end for `sqlvet-core`: reads one SQL statement from
//! a file, an argument or standard input, validates it and prints the
//! result.

pub mod error;
pub mod input;
pub mod render;

pub use error::{CliError, Result};
pub use input::Input;
pub use render::{render, OutputFormat};
