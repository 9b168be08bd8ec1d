//! Error types for Baysep input processing.

use thiserror::Error;

/// Errors that can occur while reading the textual input formats.
///
/// The query algorithms themselves never fail: undeclared node labels behave
/// as isolated nodes and every search is bounded. All failures happen up
/// front, while turning input text into graphs and queries, so a malformed
/// run is rejected before any partial answer is printed.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in the future without breaking changes.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum QueryError {
    /// Syntax error in a single input line.
    ///
    /// Contains a human-readable description with the offending line number,
    /// e.g. a header that is not three integers or a query missing its `|`
    /// separator.
    #[error("parse error: {0}")]
    Parse(String),

    /// Structurally valid lines whose shape contradicts the header.
    ///
    /// Raised when the input ends before the declared number of edge or
    /// query lines, or when extra non-blank lines trail the declared input.
    #[error("validation error: {0}")]
    Validation(String),
}
