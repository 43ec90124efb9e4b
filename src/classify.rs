//! Statement classification
//!
//! Assigns each candidate statement an importance level and a category.
//! Both decisions are driven by ordered rule tables of (label, pattern)
//! pairs evaluated first-match-wins, so levels and categories can be
//! extended without touching control flow. Classification is pure: the
//! same text always yields the same level and category.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// How confidently a statement reads as an actionable directive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImportanceLevel {
    /// Imperative or prohibitive language; always retained
    High,
    /// Advisory language; retained
    Medium,
    /// Neither; discarded before categorization
    Low,
}

impl std::fmt::Display for ImportanceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportanceLevel::High => write!(f, "HIGH"),
            ImportanceLevel::Medium => write!(f, "MEDIUM"),
            ImportanceLevel::Low => write!(f, "LOW"),
        }
    }
}

/// Topical bucket a retained statement is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Testing,
    Tooling,
    UiUx,
    CodeStyle,
    Architecture,
    /// Fallback when no category rule matches
    Process,
}

impl Category {
    /// Heading text used in the learnings document
    pub fn heading(&self) -> &'static str {
        match self {
            Category::Testing => "TESTING",
            Category::Tooling => "TOOLING",
            Category::UiUx => "UI_UX",
            Category::CodeStyle => "CODE_STYLE",
            Category::Architecture => "ARCHITECTURE",
            Category::Process => "PROCESS",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.heading())
    }
}

/// Importance rules, most confident first
static LEVEL_RULES: Lazy<Vec<(ImportanceLevel, Regex)>> = Lazy::new(|| {
    vec![
        (
            ImportanceLevel::High,
            Regex::new(r"(?i)\b(always|never|must not|must|do not|don't|stop|avoid)\b")
                .expect("high keyword pattern"),
        ),
        (
            ImportanceLevel::Medium,
            Regex::new(r"(?i)\b(prefer|please|should|use|follow|keep|make sure|ensure)\b")
                .expect("medium keyword pattern"),
        ),
    ]
});

/// Category rules in evaluation order; first match wins, so a statement
/// matching several tables files under the earliest one.
static CATEGORY_RULES: Lazy<Vec<(Category, Regex)>> = Lazy::new(|| {
    vec![
        (
            Category::Testing,
            Regex::new(r"(?i)\b(test|tests|testing|lint|typecheck|lsp_diagnostics|build)\b")
                .expect("testing pattern"),
        ),
        (
            Category::Tooling,
            Regex::new(r"(?i)\b(git|command|terminal|bash|shell|cli|tool|script)\b")
                .expect("tooling pattern"),
        ),
        (
            Category::UiUx,
            Regex::new(
                r"(?i)\b(ui|ux|layout|css|color|spacing|font|button|component|design system)\b",
            )
            .expect("ui/ux pattern"),
        ),
        (
            Category::CodeStyle,
            Regex::new(
                r"(?i)\b(comment|format|formatting|naming|variable|style|indent|whitespace|camel|snake)\b",
            )
            .expect("code style pattern"),
        ),
        (
            Category::Architecture,
            Regex::new(
                r"(?i)\b(architecture|pattern|layer|module|service|repository|design|structure)\b",
            )
            .expect("architecture pattern"),
        ),
    ]
});

/// Compute the importance level for a statement
pub fn importance(statement: &str) -> ImportanceLevel {
    for (level, pattern) in LEVEL_RULES.iter() {
        if pattern.is_match(statement) {
            return *level;
        }
    }
    ImportanceLevel::Low
}

/// Compute the category for a statement; PROCESS when nothing matches
pub fn categorize(statement: &str) -> Category {
    for (category, pattern) in CATEGORY_RULES.iter() {
        if pattern.is_match(statement) {
            return *category;
        }
    }
    Category::Process
}
