//! Hook runner
//!
//! Glue between the invoking process and the pure pipeline: resolves the
//! transcript and target document from the payload, performs the single
//! all-or-nothing write, and reports why a run wrote nothing. Failures
//! here must never disturb the caller, so the CLI edge downgrades every
//! error to a logged no-op.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::config::{DocumentFlavor, HookInput};
use crate::pipeline;

/// What a run did, for logging and tests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Payload carried no usable transcript path
    NoTranscript,
    /// Transcript had no qualifying human messages, or nothing survived
    /// filtering and deduplication
    NoLearnings,
    /// Target document rewritten with appended learnings
    Updated(PathBuf),
}

/// Execute one hook invocation end to end.
///
/// Reads the transcript, runs the pipeline against the current target
/// document, and writes the new document only when the pipeline produced
/// one. Absent transcript paths are a no-op by contract; read and write
/// failures propagate for the caller to swallow.
pub fn run(input: &HookInput, flavor: DocumentFlavor) -> Result<Outcome> {
    let transcript_path = match &input.transcript_path {
        Some(path) if path.exists() => path.clone(),
        _ => {
            debug!("No transcript to process");
            return Ok(Outcome::NoTranscript);
        }
    };

    let raw_transcript = std::fs::read_to_string(&transcript_path)
        .with_context(|| format!("Failed to read transcript {}", transcript_path.display()))?;

    let target = flavor.target_path(&input.working_dir()?);
    let existing = if target.exists() {
        std::fs::read_to_string(&target)
            .with_context(|| format!("Failed to read {}", target.display()))?
    } else {
        String::new()
    };

    match pipeline::run(&raw_transcript, &existing, flavor) {
        Some(updated) => {
            std::fs::write(&target, updated)
                .with_context(|| format!("Failed to write {}", target.display()))?;
            info!("Captured learnings into {}", target.display());
            Ok(Outcome::Updated(target))
        }
        None => {
            debug!("Nothing to capture; {} untouched", target.display());
            Ok(Outcome::NoLearnings)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_transcript(dir: &std::path::Path, lines: &str) -> PathBuf {
        let path = dir.join("transcript.jsonl");
        fs::write(&path, lines).unwrap();
        path
    }

    #[test]
    fn test_missing_transcript_is_noop() {
        let tmp = tempfile::tempdir().unwrap();
        let input = HookInput {
            transcript_path: Some(tmp.path().join("absent.jsonl")),
            cwd: Some(tmp.path().to_path_buf()),
            hook_source: None,
        };
        let outcome = run(&input, DocumentFlavor::Claude).unwrap();
        assert_eq!(outcome, Outcome::NoTranscript);
        assert!(!tmp.path().join("CLAUDE.md").exists());
    }

    #[test]
    fn test_run_creates_and_updates_target() {
        let tmp = tempfile::tempdir().unwrap();
        let transcript = write_transcript(
            tmp.path(),
            r#"{"role": "user", "content": "Never commit secrets to git."}"#,
        );
        let input = HookInput {
            transcript_path: Some(transcript),
            cwd: Some(tmp.path().to_path_buf()),
            hook_source: None,
        };

        let outcome = run(&input, DocumentFlavor::Claude).unwrap();
        let target = tmp.path().join("CLAUDE.md");
        assert_eq!(outcome, Outcome::Updated(target.clone()));

        let doc = fs::read_to_string(&target).unwrap();
        assert!(doc.starts_with("# Project Context\n"));
        assert!(doc.contains("## Learnings"));
        assert!(doc.contains("- Never commit secrets to git."));
    }

    #[test]
    fn test_second_run_is_noop_on_disk() {
        let tmp = tempfile::tempdir().unwrap();
        let transcript = write_transcript(
            tmp.path(),
            r#"{"role": "user", "content": "Always run the tests before pushing."}"#,
        );
        let input = HookInput {
            transcript_path: Some(transcript),
            cwd: Some(tmp.path().to_path_buf()),
            hook_source: None,
        };

        run(&input, DocumentFlavor::Claude).unwrap();
        let target = tmp.path().join("CLAUDE.md");
        let after_first = fs::read_to_string(&target).unwrap();

        let outcome = run(&input, DocumentFlavor::Claude).unwrap();
        assert_eq!(outcome, Outcome::NoLearnings);
        assert_eq!(fs::read_to_string(&target).unwrap(), after_first);
    }

    #[test]
    fn test_agents_flavor_writes_agents_md() {
        let tmp = tempfile::tempdir().unwrap();
        let transcript = write_transcript(
            tmp.path(),
            r#"{"role": "user", "content": "Please keep responses short."}"#,
        );
        let input = HookInput {
            transcript_path: Some(transcript),
            cwd: Some(tmp.path().to_path_buf()),
            hook_source: Some("opencode-plugin".to_string()),
        };

        let flavor = DocumentFlavor::detect(&input, false);
        run(&input, flavor).unwrap();
        assert!(tmp.path().join("AGENTS.md").exists());
        assert!(!tmp.path().join("CLAUDE.md").exists());
    }
}
