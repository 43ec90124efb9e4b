//! Hook configuration
//!
//! Models the payload supplied by the invoking agent at session end and
//! resolves which context document a run targets. The environment probe
//! (OPENCODE / hook_source) happens once at the CLI edge; everything past
//! this module works with an injected `DocumentFlavor`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Payload delivered on stdin when the session-end hook fires
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HookInput {
    /// Path to the session transcript (JSONL)
    #[serde(default)]
    pub transcript_path: Option<PathBuf>,
    /// Project directory the session ran in
    #[serde(default)]
    pub cwd: Option<PathBuf>,
    /// Identifier of the plugin that fired the hook, if any
    #[serde(default)]
    pub hook_source: Option<String>,
}

impl HookInput {
    /// Parse a payload from raw stdin text. Returns None for empty or
    /// unparseable input; a bad payload is a no-op, not an error.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            return None;
        }
        serde_json::from_str(raw).ok()
    }

    /// Working directory for the run, falling back to the process cwd
    pub fn working_dir(&self) -> Result<PathBuf> {
        match &self.cwd {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir().context("Failed to resolve working directory"),
        }
    }
}

/// Which context document family a run writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFlavor {
    /// Default environment: CLAUDE.md
    Claude,
    /// Alternate (OpenCode) environment: AGENTS.md
    Agents,
}

impl DocumentFlavor {
    /// Detect the flavor from the payload plus an environment flag.
    /// `opencode_env` is the presence of the OPENCODE variable, probed by
    /// the caller so this stays testable without process environment access.
    pub fn detect(input: &HookInput, opencode_env: bool) -> Self {
        let plugin = input.hook_source.as_deref() == Some("opencode-plugin");
        if opencode_env || plugin {
            DocumentFlavor::Agents
        } else {
            DocumentFlavor::Claude
        }
    }

    /// Filename of the target document
    pub fn file_name(&self) -> &'static str {
        match self {
            DocumentFlavor::Claude => "CLAUDE.md",
            DocumentFlavor::Agents => "AGENTS.md",
        }
    }

    /// Seed content used when the target document is missing or empty
    pub fn base_content(&self) -> &'static str {
        match self {
            DocumentFlavor::Claude => "# Project Context\n",
            DocumentFlavor::Agents => "# Agent Guidelines\n",
        }
    }

    /// Full path of the target document inside `dir`
    pub fn target_path(&self, dir: &Path) -> PathBuf {
        dir.join(self.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_payload() {
        let input = HookInput::parse(r#"{"transcript_path": "/tmp/t.jsonl", "cwd": "/work"}"#)
            .expect("payload should parse");
        assert_eq!(input.transcript_path.as_deref(), Some(Path::new("/tmp/t.jsonl")));
        assert_eq!(input.cwd.as_deref(), Some(Path::new("/work")));
        assert!(input.hook_source.is_none());
    }

    #[test]
    fn test_parse_rejects_empty_and_garbage() {
        assert!(HookInput::parse("").is_none());
        assert!(HookInput::parse("   \n").is_none());
        assert!(HookInput::parse("not json").is_none());
    }

    #[test]
    fn test_flavor_detection() {
        let plain = HookInput::default();
        assert_eq!(DocumentFlavor::detect(&plain, false), DocumentFlavor::Claude);
        assert_eq!(DocumentFlavor::detect(&plain, true), DocumentFlavor::Agents);

        let plugin = HookInput {
            hook_source: Some("opencode-plugin".to_string()),
            ..Default::default()
        };
        assert_eq!(DocumentFlavor::detect(&plugin, false), DocumentFlavor::Agents);

        let other = HookInput {
            hook_source: Some("something-else".to_string()),
            ..Default::default()
        };
        assert_eq!(DocumentFlavor::detect(&other, false), DocumentFlavor::Claude);
    }

    #[test]
    fn test_target_path() {
        let path = DocumentFlavor::Agents.target_path(Path::new("/work"));
        assert_eq!(path, Path::new("/work/AGENTS.md"));
    }
}
