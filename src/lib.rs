//! learn-capture - Session Learning Capture Library
//!
//! A session-end hook that mines conversation transcripts for durable,
//! actionable guidance and merges it into a project context document:
//! - Transcript reading with a bounded recency window
//! - Human-message extraction across heterogeneous record shapes
//! - Keyword-driven importance and category classification
//! - Document-wide deduplication and idempotent markdown merging
//!
//! # Example
//!
//! ```ignore
//! use learn_capture::config::DocumentFlavor;
//! use learn_capture::pipeline;
//!
//! let transcript = r#"{"role": "user", "content": "Always run the tests."}"#;
//! if let Some(doc) = pipeline::run(transcript, "", DocumentFlavor::Claude) {
//!     std::fs::write("CLAUDE.md", doc)?;
//! }
//! # Ok::<(), std::io::Error>(())
//! ```

// Pipeline stages, leaves first
pub mod transcript;
pub mod statement;
pub mod classify;
pub mod merge;
pub mod document;
pub mod pipeline;

// Invocation surface
pub mod config;
pub mod hook;
pub mod cli;

// Re-export commonly used types for convenience
pub use classify::{Category, ImportanceLevel};
pub use config::{DocumentFlavor, HookInput};
pub use hook::Outcome;
pub use merge::LearningBuckets;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
