//! Diagnostics and validation results.

use core::fmt;

use serde::Serialize;

/// A single reported problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    /// Human-readable description.
    pub message: String,
    /// 1-based line, or 0 when there is no token to point at.
    pub line: usize,
    /// 1-based word within the line, or 0 when there is no token to point at.
    pub word: usize,
    /// The source line named by `line`.
    ///
    /// Empty until the validator fills it in, and empty when `line` is out
    /// of range.
    pub line_content: String,
    #[serde(skip)]
    offset: Option<usize>,
}

impl Diagnostic {
    /// Creates a diagnostic without line content.
    #[must_use]
    pub fn new(message: impl Into<String>, line: usize, word: usize) -> Self {
        Self {
            message: message.into(),
            line,
            word,
            line_content: String::new(),
            offset: None,
        }
    }

    /// Records the byte offset of the token the diagnostic points at.
    #[must_use]
    pub const fn with_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Byte offset into the source of the offending token, if there is one.
    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        self.offset
    }

    /// Sets the line content from `source`.
    #[must_use]
    pub fn with_line_content(mut self, source: &str) -> Self {
        self.line_content = line_content(source, self.line).to_owned();
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, word {}: {}", self.line, self.word, self.message)
    }
}

/// Returns line `line` (1-based) of `source`, split on `\n`.
///
/// Returns an empty string for line 0 and for lines past the end.
#[must_use]
pub fn line_content(source: &str, line: usize) -> &str {
    line.checked_sub(1)
        .and_then(|index| source.split('\n').nth(index))
        .unwrap_or("")
}

/// The outcome of checking one statement.
///
/// `is_valid` is true exactly when there are no errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    is_valid: bool,
    errors: Vec<Diagnostic>,
}

impl ValidationResult {
    /// Builds a result from the collected diagnostics, in report order.
    #[must_use]
    pub fn from_errors(errors: Vec<Diagnostic>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Returns true if no problems were found.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Returns the diagnostics in the order they were found.
    #[must_use]
    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    /// Consumes the result and returns its diagnostics.
    #[must_use]
    pub fn into_errors(self) -> Vec<Diagnostic> {
        self.errors
    }

    /// Fills in `line_content` for every diagnostic.
    #[must_use]
    pub fn with_line_content(self, source: &str) -> Self {
        Self::from_errors(
            self.errors
                .into_iter()
                .map(|d| d.with_line_content(source))
                .collect(),
        )
    }
}
