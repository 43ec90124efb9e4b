//! Transcript reading and message extraction
//!
//! Turns a raw JSONL transcript blob into the ordered list of human-authored
//! message texts. Only the most recent window of lines is examined, so cost
//! per run is bounded no matter how long the session ran.

use serde_json::Value;
use tracing::debug;

/// Number of non-blank transcript lines examined per run
pub const MAX_TRANSCRIPT_LINES: usize = 200;

/// Roles accepted as human-authored
const HUMAN_ROLES: &[&str] = &["user", "human"];

/// Fields probed for the author role, in priority order. `author.role` is
/// handled separately since it is nested.
const ROLE_FIELDS: &[&str] = &["sender", "type", "source"];

/// Fields probed for the message content, in priority order
const CONTENT_FIELDS: &[&str] = &["content", "text", "body"];

/// Parse the tail window of a transcript blob into entries.
///
/// Blank lines are discarded before the window is applied; lines that fail
/// to parse are skipped individually and never abort the read.
pub fn read_entries(raw: &str) -> Vec<Value> {
    let lines: Vec<&str> = raw.lines().filter(|line| !line.trim().is_empty()).collect();
    let start = lines.len().saturating_sub(MAX_TRANSCRIPT_LINES);

    let entries: Vec<Value> = lines[start..]
        .iter()
        .filter_map(|line| serde_json::from_str(line).ok())
        .collect();

    debug!("Parsed {} entries from {} transcript lines", entries.len(), lines.len());
    entries
}

/// Extract human-authored messages from parsed entries, preserving order.
///
/// Each surviving entry becomes one message string: its content segments
/// joined with newlines. Entries with no recognizable role, a non-human
/// role, or no usable content are dropped.
pub fn extract_messages(entries: &[Value]) -> Vec<String> {
    entries
        .iter()
        .filter_map(|entry| {
            // A record may nest the message under `message` or be the message
            let message = entry.get("message").unwrap_or(entry);

            let role = resolve_role(message)?;
            if !HUMAN_ROLES.contains(&role.to_lowercase().as_str()) {
                return None;
            }

            // First non-null content field wins
            let segments = CONTENT_FIELDS
                .iter()
                .find_map(|field| message.get(*field).filter(|value| !value.is_null()))
                .map(normalize_content)
                .unwrap_or_default();

            if segments.is_empty() {
                None
            } else {
                Some(segments.join("\n"))
            }
        })
        .collect()
}

/// Resolve the author role from its possible locations, in priority order
fn resolve_role(message: &Value) -> Option<String> {
    if let Some(role) = message.get("role").and_then(Value::as_str) {
        return Some(role.to_string());
    }
    if let Some(role) = message
        .pointer("/author/role")
        .and_then(Value::as_str)
    {
        return Some(role.to_string());
    }
    for field in ROLE_FIELDS {
        if let Some(role) = message.get(*field).and_then(Value::as_str) {
            return Some(role.to_string());
        }
    }
    None
}

/// Flatten a heterogeneous content payload into plain text segments.
///
/// Handles the shapes seen across transcript formats: a bare string, an
/// array mixing strings and `{text}`/`{content}` blocks, or a single
/// `{text}` object. Unrecognized items are dropped, not kept as empties.
fn normalize_content(content: &Value) -> Vec<String> {
    match content {
        Value::String(text) => vec![text.clone()],
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(text) => Some(text.clone()),
                Value::Object(_) => item
                    .get("text")
                    .and_then(Value::as_str)
                    .or_else(|| item.get("content").and_then(Value::as_str))
                    .map(str::to_string),
                _ => None,
            })
            .collect(),
        Value::Object(_) => content
            .get("text")
            .and_then(Value::as_str)
            .map(|text| vec![text.to_string()])
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}
