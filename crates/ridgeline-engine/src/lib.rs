//! Ridgeline Engine - headless driver for the terrain pipeline.
//!
//! Loads the engine configuration, owns the in-memory scene backend and
//! runs the fixed-timestep observer simulation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod scene;
pub mod sim;

pub use config::EngineConfig;
pub use scene::{RecordingScene, SceneObject, SceneStats};
pub use sim::{SimReport, Simulation};
