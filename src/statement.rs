//! Statement segmentation
//!
//! Splits extracted message text into candidate statements on purely
//! syntactic boundaries: newlines, or sentence punctuation followed by
//! whitespace. No semantic boundary detection.

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum length for a statement to be considered at all
pub const MIN_STATEMENT_LEN: usize = 8;

static BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n|[.!?]\s+").expect("statement boundary regex"));

/// Split all messages into trimmed, non-empty candidate statements,
/// preserving message order.
pub fn segment(messages: &[String]) -> Vec<String> {
    let joined = messages.join("\n");
    BOUNDARY
        .split(&joined)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Whether a trimmed statement passes the global filters: long enough to
/// carry meaning, and not a question (questions are not directives).
pub fn qualifies(statement: &str) -> bool {
    statement.chars().count() >= MIN_STATEMENT_LEN && !statement.ends_with('?')
}
