//! Deduplicating merger
//!
//! Collects classified statements into per-category buckets, rejecting
//! anything already present in the target document and anything accepted
//! earlier in the same run. Buckets preserve first-populated category
//! order and first-seen statement order.

use tracing::debug;

use crate::classify::{self, Category, ImportanceLevel};
use crate::statement;

/// Ordered mapping from category to accepted statement texts.
/// Built once per run and discarded; no cross-run state.
#[derive(Debug, Default)]
pub struct LearningBuckets {
    buckets: Vec<(Category, Vec<String>)>,
}

impl LearningBuckets {
    /// Run candidate statements through the filters and fill buckets.
    ///
    /// `existing_doc` is the full current document text; the dedup check
    /// compares against all of it, so a statement appearing verbatim in
    /// prose outside the learnings section is also suppressed.
    pub fn collect<I, S>(statements: I, existing_doc: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let existing_lower = existing_doc.to_lowercase();
        let mut buckets = LearningBuckets::default();

        for candidate in statements {
            let normalized = candidate.as_ref().trim();
            if !statement::qualifies(normalized) {
                continue;
            }

            if classify::importance(normalized) == ImportanceLevel::Low {
                continue;
            }

            let key = normalized.to_lowercase();
            if existing_lower.contains(&key) {
                debug!("Skipping statement already in document: {}", normalized);
                continue;
            }
            // First acceptance wins the slot, regardless of category
            if buckets.contains(&key) {
                continue;
            }

            let category = classify::categorize(normalized);
            buckets.push(category, normalized.to_string());
        }

        buckets
    }

    fn contains(&self, key: &str) -> bool {
        self.buckets
            .iter()
            .any(|(_, items)| items.iter().any(|item| item.to_lowercase() == key))
    }

    fn push(&mut self, category: Category, text: String) {
        match self.buckets.iter_mut().find(|(c, _)| *c == category) {
            Some((_, items)) => items.push(text),
            None => self.buckets.push((category, vec![text])),
        }
    }

    /// Iterate non-empty buckets in first-populated order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> + '_ {
        self.buckets
            .iter()
            .filter(|(_, items)| !items.is_empty())
            .map(|(category, items)| (*category, items.as_slice()))
    }

    /// True when no statement survived filtering
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(|(_, items)| items.is_empty())
    }

    /// Total accepted statements across all buckets
    pub fn len(&self) -> usize {
        self.buckets.iter().map(|(_, items)| items.len()).sum()
    }
}
