//! Validation service: tokenize, check, and attach source lines.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::diagnostic::{Diagnostic, ValidationResult};
use crate::lexer::tokenize;
use crate::parser::parse;

/// Validator settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Inputs longer than this many bytes are rejected without being
    /// tokenized. `None` means no limit.
    pub max_input_bytes: Option<usize>,
}

/// Checks SQL statements.
///
/// A validator holds only its configuration; every call builds a fresh
/// lexer and parser, so one validator can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    /// Creates a validator with the given configuration.
    #[must_use]
    pub const fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validates the first statement in `source`.
    ///
    /// Every diagnostic in the result carries the text of the line it
    /// points at.
    #[must_use]
    #[tracing::instrument(skip_all, fields(source_len = source.len()))]
    pub fn validate(&self, source: &str) -> ValidationResult {
        if let Some(limit) = self.config.max_input_bytes {
            if source.len() > limit {
                debug!(limit, "input over size limit");
                return ValidationResult::from_errors(vec![Diagnostic::new(
                    format!("SQL statement exceeds maximum length of {limit} bytes"),
                    0,
                    0,
                )]);
            }
        }

        let tokens = tokenize(source);
        debug!(tokens = tokens.len(), "tokenized");

        let result = parse(&tokens).with_line_content(source);
        debug!(
            valid = result.is_valid(),
            errors = result.errors().len(),
            "validated"
        );
        result
    }
}

/// Validates `source` with the default configuration.
#[must_use]
pub fn validate(source: &str) -> ValidationResult {
    Validator::default().validate(source)
}
