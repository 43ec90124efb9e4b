//! Learnings document composition
//!
//! Owns the on-disk markdown format: a single `## Learnings` section with
//! a fixed marker comment, followed by `### CATEGORY` blocks of bullet
//! items. Prior document content is never modified, only appended to.

use crate::merge::LearningBuckets;

/// Section header the document must contain exactly once
pub const LEARNINGS_HEADER: &str = "## Learnings";

/// Marker emitted under a freshly created section
pub const LEARNINGS_MARKER: &str = "<!-- Auto-captured from sessions by /learn -->";

/// Append a learnings section if the document lacks one. Content above the
/// section is preserved unchanged.
pub fn ensure_learnings_section(content: &str) -> String {
    if content.contains(LEARNINGS_HEADER) {
        return content.to_string();
    }
    format!(
        "{}\n\n{}\n\n{}\n",
        content.trim_end(),
        LEARNINGS_HEADER,
        LEARNINGS_MARKER
    )
}

/// Render category blocks for the accepted statements.
/// Returns None when every bucket is empty — the no-write short-circuit.
pub fn render_blocks(buckets: &LearningBuckets) -> Option<String> {
    if buckets.is_empty() {
        return None;
    }

    let mut blocks = String::new();
    for (category, items) in buckets.iter() {
        blocks.push_str(&format!("\n### {}\n", category.heading()));
        for item in items {
            blocks.push_str(&format!("- {}\n", item));
        }
    }

    Some(blocks.trim().to_string())
}

/// Append rendered blocks to a document that already has a learnings
/// section, normalizing to a single trailing newline.
pub fn append_blocks(content: &str, blocks: &str) -> String {
    format!("{}\n\n{}\n", content.trim_end(), blocks.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::LearningBuckets;

    #[test]
    fn test_ensure_section_added_once() {
        let doc = ensure_learnings_section("# Project Context\n");
        assert!(doc.contains(LEARNINGS_HEADER));
        assert!(doc.contains(LEARNINGS_MARKER));
        assert!(doc.starts_with("# Project Context\n"));

        // Idempotent: a second pass changes nothing
        assert_eq!(ensure_learnings_section(&doc), doc);
        assert_eq!(doc.matches(LEARNINGS_HEADER).count(), 1);
    }

    #[test]
    fn test_render_blocks_format() {
        let buckets = LearningBuckets::collect(
            ["Never skip the test suite", "Always ask before git push"],
            "",
        );
        let blocks = render_blocks(&buckets).expect("buckets are non-empty");
        assert_eq!(
            blocks,
            "### TESTING\n- Never skip the test suite\n\n### TOOLING\n- Always ask before git push"
        );
    }

    #[test]
    fn test_render_blocks_empty_short_circuit() {
        let buckets = LearningBuckets::collect(Vec::<String>::new(), "");
        assert!(render_blocks(&buckets).is_none());
    }

    #[test]
    fn test_append_blocks_trailing_newline() {
        let doc = append_blocks("# Doc\n\n## Learnings\n", "### PROCESS\n- Always ask first");
        assert!(doc.ends_with("- Always ask first\n"));
        assert!(!doc.ends_with("\n\n"));
    }
}
