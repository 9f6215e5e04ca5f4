//! Output formatting.

use clap::ValueEnum;
use sqlvet_core::{Diagnostic, ValidationResult};

use crate::error::Result;

/// How the result is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `{"isValid": ..., "errors": [...]}` on one line.
    #[default]
    Json,
    /// One block per error, with the source line and a marker.
    Text,
}

/// Renders `result` for `source` in the given format.
///
/// The returned text always ends with a newline.
pub fn render(result: &ValidationResult, source: &str, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string(result)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Text => Ok(render_text(result, source)),
    }
}

fn render_text(result: &ValidationResult, source: &str) -> String {
    if result.is_valid() {
        return String::from("OK\n");
    }

    let mut out = String::new();
    for diagnostic in result.errors() {
        out.push_str(&format!("{diagnostic}\n"));
        if diagnostic.line == 0 {
            continue;
        }

        let content = diagnostic.line_content.trim_end_matches('\r');
        out.push_str(&format!("  | {content}\n"));
        if let Some(column) = marker_column(source, diagnostic) {
            out.push_str(&format!("  | {:column$}^\n", ""));
        }
    }
    out
}

/// Returns the character column of the token a diagnostic points at.
fn marker_column(source: &str, diagnostic: &Diagnostic) -> Option<usize> {
    let before = source.get(..diagnostic.offset()?)?;
    let line_start = before.rfind('\n').map_or(0, |newline| newline + 1);
    Some(before[line_start..].chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlvet_core::validate;

    fn text(source: &str) -> String {
        render(&validate(source), source, OutputFormat::Text).unwrap()
    }

    #[test]
    fn test_json() {
        let source = "SELECT 1";
        let out = render(&validate(source), source, OutputFormat::Json).unwrap();
        assert_eq!(out, "{\"isValid\":true,\"errors\":[]}\n");
    }

    #[test]
    fn test_text_valid() {
        assert_eq!(text("SELECT 1;"), "OK\n");
    }

    #[test]
    fn test_text_marks_offending_word() {
        assert_eq!(
            text("SELECT id, name WHERE id=1;"),
            "line 1, word 4: Expected 'FROM' after SELECT column list\n\
             \x20 | SELECT id, name WHERE id=1;\n\
             \x20 |                 ^\n"
        );
    }

    #[test]
    fn test_text_on_later_line() {
        assert_eq!(
            text("SELECT *\r\nFROM t\r\nWHERE a IS 1"),
            "line 3, word 4: Expected NULL after IS\n\
             \x20 | WHERE a IS 1\n\
             \x20 |            ^\n"
        );
    }

    #[test]
    fn test_text_marks_word_after_comma() {
        assert_eq!(
            text("SELECT a, FROM t"),
            "line 1, word 3: Expected column expression after comma\n\
             \x20 | SELECT a, FROM t\n\
             \x20 |           ^\n"
        );
    }

    #[test]
    fn test_text_counts_characters_not_bytes() {
        assert_eq!(
            text("SELECT 'é' a b"),
            "line 1, word 4: Expected 'FROM' after SELECT column list\n\
             \x20 | SELECT 'é' a b\n\
             \x20 |              ^\n"
        );
    }

    #[test]
    fn test_text_without_position() {
        assert_eq!(text(""), "line 0, word 0: Empty SQL statement\n");
    }

    #[test]
    fn test_text_lists_every_lexical_error() {
        let out = text("SELECT # FROM @");
        assert_eq!(out.matches("Unexpected character").count(), 2);
        assert_eq!(out.lines().count(), 6);
    }
}
