//! learn-capture - Session Learning Capture Hook
//!
//! Fired at session end; reads a hook payload from stdin and folds new
//! learnings into the project context document.

use learn_capture::cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize logging (WARN level by default, use RUST_LOG=debug to trace runs)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    cli::run().await
}
