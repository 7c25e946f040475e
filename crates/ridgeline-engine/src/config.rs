//! Engine configuration.
//!
//! Wraps the terrain parameters together with world bounds, landmarks and
//! the headless simulation settings. Loaded from and saved to TOML.

use ridgeline_common::{RidgelineError, RidgelineResult};
use ridgeline_terrain::{LandmarkConfig, TerrainConfig, WorldBounds};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Configuration file name.
pub const CONFIG_FILE: &str = "ridgeline.toml";

/// Engine configuration parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // === Simulation Settings ===
    /// Number of ticks to simulate
    pub ticks: u64,
    /// Observer speed in world units per second (negative walks left)
    pub observer_speed: f64,
    /// Simulation ticks per second
    pub tick_rate: u32,
    /// Observer start x
    pub start_x: f64,

    // === World Settings ===
    /// Terrain generation and streaming
    pub terrain: TerrainConfig,
    /// Left world bound
    pub bounds: WorldBounds,
    /// Spawn landmarks
    pub landmarks: LandmarkConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ticks: 1_200,
            observer_speed: 12.0,
            tick_rate: 60,
            start_x: 0.0,

            terrain: TerrainConfig::default(),
            bounds: WorldBounds::default(),
            landmarks: LandmarkConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from the default file location.
    /// Returns default config if file doesn't exist.
    pub fn load() -> Self {
        Self::load_from(Self::config_path())
    }

    /// Load configuration from a specific path.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            info!("Config file {} not found, using defaults", path.display());
            return Self::default();
        }

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!("Failed to read config file: {e}");
                return Self::default();
            },
        };

        match Self::parse(&contents) {
            Ok(config) => {
                info!("Loaded config from {}", path.display());
                config
            },
            Err(e) => {
                warn!("Failed to parse config file: {e}");
                Self::default()
            },
        }
    }

    /// Parse configuration from TOML text.
    pub fn parse(contents: &str) -> RidgelineResult<Self> {
        toml::from_str(contents).map_err(|e| RidgelineError::Parse(e.to_string()))
    }

    /// Save configuration to the default file location.
    pub fn save(&self) -> io::Result<()> {
        self.save_to(Self::config_path())
    }

    /// Save configuration to a specific path.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let mut file = fs::File::create(path)?;
        file.write_all(contents.as_bytes())?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        PathBuf::from(CONFIG_FILE)
    }

    /// Validate and clamp simulation values to sensible ranges.
    ///
    /// Terrain parameters are not clamped: invalid terrain is rejected when
    /// the streaming window is created.
    pub fn validate(&mut self) {
        self.ticks = self.ticks.clamp(1, 10_000_000);
        self.tick_rate = self.tick_rate.clamp(1, 1_000);

        if !self.observer_speed.is_finite() {
            warn!("observer_speed is not finite, resetting to 0");
            self.observer_speed = 0.0;
        }
        self.observer_speed = self.observer_speed.clamp(-10_000.0, 10_000.0);

        if !self.start_x.is_finite() {
            warn!("start_x is not finite, resetting to 0");
            self.start_x = 0.0;
        }
        self.start_x = self.bounds.clamp(self.start_x);
    }

    /// Fixed simulation timestep in seconds.
    #[must_use]
    pub fn tick_dt(&self) -> f64 {
        1.0 / f64::from(self.tick_rate.max(1))
    }
}
