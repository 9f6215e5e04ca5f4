//! Where the SQL text comes from.

use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::error::{CliError, Result};

/// Source of the statement to check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Text passed with `--sql`.
    Inline(String),
    /// A file on disk.
    File(PathBuf),
    /// Standard input.
    Stdin,
}

impl Input {
    /// Picks the input from the command-line arguments.
    ///
    /// `--sql` wins over a file. A missing file or `-` means stdin.
    #[must_use]
    pub fn from_args(sql: Option<String>, file: Option<PathBuf>) -> Self {
        match (sql, file) {
            (Some(sql), _) => Self::Inline(sql),
            (None, Some(path)) if path != Path::new("-") => Self::File(path),
            (None, _) => Self::Stdin,
        }
    }

    /// Reads the whole input.
    pub fn read(self) -> Result<String> {
        match self {
            Self::Inline(sql) => Ok(sql),
            Self::File(path) => {
                fs::read_to_string(&path).map_err(|source| CliError::Io { path, source })
            }
            Self::Stdin => read_all(io::stdin().lock()),
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inline(_) => f.write_str("--sql"),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdin => f.write_str("stdin"),
        }
    }
}

/// Reads `reader` to the end as UTF-8.
pub fn read_all(mut reader: impl Read) -> Result<String> {
    let mut source = String::new();
    reader
        .read_to_string(&mut source)
        .map_err(CliError::Stdin)?;
    Ok(source)
}
