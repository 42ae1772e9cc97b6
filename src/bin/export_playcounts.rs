// src/bin/export_playcounts.rs
//! Flashpoint play-count export — reads flashpoint.sqlite, writes games_played.json

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout carries only the success line.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    playcount_exporter::run().context("play-count export failed")?;

    Ok(())
}
