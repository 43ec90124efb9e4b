//! Extraction pipeline
//!
//! Pure orchestration of the stages: transcript text in, optional new
//! document text out. No file IO here, which keeps every testable
//! property exercisable on plain strings.

use tracing::debug;

use crate::config::DocumentFlavor;
use crate::document;
use crate::merge::LearningBuckets;
use crate::statement;
use crate::transcript;

/// Run the full pipeline against a raw transcript blob and the current
/// target document content.
///
/// Returns the complete new document when there is something to write, or
/// None when the run is a no-op (no human messages, nothing retained, or
/// everything deduplicated). The caller must not touch the document in the
/// None case.
pub fn run(raw_transcript: &str, existing_doc: &str, flavor: DocumentFlavor) -> Option<String> {
    let entries = transcript::read_entries(raw_transcript);
    let messages = transcript::extract_messages(&entries);
    if messages.is_empty() {
        debug!("No human messages in transcript window");
        return None;
    }

    let statements = statement::segment(&messages);

    let base = if existing_doc.is_empty() {
        flavor.base_content()
    } else {
        existing_doc
    };
    let with_section = document::ensure_learnings_section(base);

    // Dedup runs against the document as it will exist at write time,
    // section header included
    let buckets = LearningBuckets::collect(&statements, &with_section);
    let blocks = document::render_blocks(&buckets)?;

    debug!("Captured {} new learnings", buckets.len());
    Some(document::append_blocks(&with_section, &blocks))
}
