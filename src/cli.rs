//! CLI interface for learn-capture

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::io::AsyncReadExt;
use tracing::{debug, warn};

use crate::config::{DocumentFlavor, HookInput};
use crate::hook::{self, Outcome};
use crate::pipeline;

#[derive(Parser)]
#[command(name = "learn-capture")]
#[command(about = "Captures durable guidance from session transcripts into a project context file", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run against an explicit transcript file instead of a hook payload
    Extract {
        /// Path to the transcript (JSONL)
        transcript: PathBuf,
        /// Directory containing the target document (default: current dir)
        #[arg(short, long)]
        target: Option<PathBuf>,
        /// Write AGENTS.md instead of CLAUDE.md
        #[arg(long)]
        agents: bool,
        /// Print what would be written without touching the document
        #[arg(long)]
        dry_run: bool,
    },
}

/// Entry point called from main
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Extract {
            transcript,
            target,
            agents,
            dry_run,
        }) => extract(transcript, target, agents, dry_run),
        // No subcommand: hook mode, payload on stdin
        None => {
            run_hook().await;
            Ok(())
        }
    }
}

/// Hook mode. The invoking process must never see a failure from us, so
/// every error path ends in a logged no-op and a clean exit.
async fn run_hook() {
    let mut raw = String::new();
    if tokio::io::stdin().read_to_string(&mut raw).await.is_err() {
        debug!("Could not read hook payload from stdin");
        return;
    }

    let Some(input) = HookInput::parse(&raw) else {
        debug!("Empty or unparseable hook payload");
        return;
    };

    let opencode_env = std::env::var_os("OPENCODE").is_some();
    let flavor = DocumentFlavor::detect(&input, opencode_env);

    match hook::run(&input, flavor) {
        Ok(Outcome::Updated(path)) => debug!("Updated {}", path.display()),
        Ok(outcome) => debug!("Run finished without writing: {:?}", outcome),
        Err(e) => warn!("Learning capture failed: {:#}", e),
    }
}

/// Direct extraction mode, for inspecting what a transcript yields
fn extract(
    transcript: PathBuf,
    target: Option<PathBuf>,
    agents: bool,
    dry_run: bool,
) -> Result<()> {
    let flavor = if agents {
        DocumentFlavor::Agents
    } else {
        DocumentFlavor::Claude
    };

    let dir = match target {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    if dry_run {
        let raw = std::fs::read_to_string(&transcript)?;
        let target_path = flavor.target_path(&dir);
        let existing = if target_path.exists() {
            std::fs::read_to_string(&target_path)?
        } else {
            String::new()
        };

        match pipeline::run(&raw, &existing, flavor) {
            Some(updated) => println!("{}", updated),
            None => println!("No new learnings."),
        }
        return Ok(());
    }

    let input = HookInput {
        transcript_path: Some(transcript),
        cwd: Some(dir),
        hook_source: None,
    };

    match hook::run(&input, flavor)? {
        Outcome::Updated(path) => println!("Updated {}", path.display()),
        Outcome::NoTranscript => println!("Transcript not found."),
        Outcome::NoLearnings => println!("No new learnings."),
    }
    Ok(())
}
