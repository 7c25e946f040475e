//! # Ridgeline
//!
//! Runs the procedural terrain pipeline headless: an observer walks across
//! the world while chunks stream in and out around it.
//!
//! Usage: `ridgeline [config.toml]` (defaults to `ridgeline.toml`).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

use anyhow::{Context, Result};
use ridgeline_engine::{EngineConfig, Simulation};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Main entry point.
fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("ridgeline=info".parse()?))
        .init();

    info!("Ridgeline starting...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let mut config = match std::env::args().nth(1) {
        Some(path) => EngineConfig::load_from(path),
        None => EngineConfig::load(),
    };
    config.validate();
    let seed = config.terrain.randomize_missing_seed();
    info!("Terrain seed: {seed}");

    let sim = Simulation::new(&config).context("failed to initialize terrain")?;
    let report = sim.run().context("simulation failed")?;

    info!(
        "Finished {} ticks at x={:.1}: {} live chunks, {} pooled, {} spawned, {} removed",
        report.ticks,
        report.final_x,
        report.live_chunks,
        report.pooled,
        report.streaming.spawned,
        report.streaming.removed
    );
    info!(
        "Scene: {} created, {} reassigned, {} destroyed, {} KiB uploaded",
        report.scene.created,
        report.scene.reassigned,
        report.scene.destroyed,
        report.scene.uploaded_bytes / 1024
    );

    info!("Ridgeline shutdown complete");
    Ok(())
}
