#![allow(dead_code)]

use sqlvet_core::{validate, Diagnostic, ValidationResult};

pub fn check(sql: &str) -> ValidationResult {
    validate(sql)
}

pub fn check_ok(sql: &str) {
    let result = validate(sql);
    assert!(
        result.is_valid(),
        "Expected valid SQL: {sql}\nErrors: {:?}",
        result.errors()
    );
}

/// Asserts that `sql` is invalid and returns its first error.
pub fn check_err(sql: &str) -> Diagnostic {
    validate(sql)
        .into_errors()
        .into_iter()
        .next()
        .unwrap_or_else(|| panic!("Expected an error for: {sql}"))
}

/// Asserts the first error's message and position.
pub fn assert_error(sql: &str, message: &str, line: usize, word: usize) {
    let err = check_err(sql);
    assert_eq!(err.message, message, "for: {sql}");
    assert_eq!((err.line, err.word), (line, word), "for: {sql}");
}

pub fn messages(sql: &str) -> Vec<String> {
    validate(sql)
        .into_errors()
        .into_iter()
        .map(|d| d.message)
        .collect()
}
