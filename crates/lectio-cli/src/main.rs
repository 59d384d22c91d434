//! Lectio CLI Application
//!
//! Command-line interface for the lectio daily reading tracker.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use cli::Cli;
use lectio_core::TrackerBuilder;
use log::info;
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        plans_file,
        year,
        no_color,
        command,
    } = Args::parse();

    let tracker = TrackerBuilder::new()
        .with_database_path(database_file)
        .with_plans_path(plans_file)
        .with_reference_year(year)
        .build()
        .await
        .context("Failed to initialize tracker")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Lectio started");

    Cli::new(tracker, renderer).handle_command(command).await
}
