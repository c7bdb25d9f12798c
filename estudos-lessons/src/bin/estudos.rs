//! Runs the whole curriculum and prints the transcript to stdout.
//!
//! Usage: cargo run --bin estudos
//! Logs go to stderr; set RUST_LOG=debug to see per-lesson events.

use std::io::{self, Write};

use anyhow::{Context, Result};
use estudos_common::Samples;
use estudos_lessons::Runner;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let samples = Samples::new();
    let runner = Runner::default();
    info!(lessons = runner.lessons().len(), "starting curriculum");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = runner
        .run(&samples, &mut out)
        .context("curriculum did not finish")?;
    out.flush().context("failed to flush stdout")?;

    info!(completed = summary.completed, "done");
    Ok(())
}
