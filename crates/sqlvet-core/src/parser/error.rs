//! Parser error types.

/// Marker for a failed grammar rule.
///
/// The diagnostic describing the failure has already been recorded on the
/// parser; the marker only unwinds the recursive descent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reported;

/// Result of a grammar rule.
pub type PResult = Result<(), Reported>;
