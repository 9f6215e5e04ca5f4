//! Error types for the command-line tool.

use std::path::PathBuf;

/// Errors that stop the tool before a result can be printed.
///
/// Invalid SQL is not an error here; it is reported through the
/// validation result.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The input file could not be read.
    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        /// Path given on the command line.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// Standard input could not be read.
    #[error("Failed to read standard input: {0}")]
    Stdin(#[source] std::io::Error),

    /// The result could not be serialized.
    #[error("Failed to serialize result: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for command-line operations.
pub type Result<T> = std::result::Result<T, CliError>;
