//! Terrain configuration.
//!
//! A [`TerrainConfig`] is immutable for the lifetime of a session. Every
//! constructor that consumes one validates it first, so a bad config fails
//! before any chunk exists.

use ridgeline_common::ConfigError;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Seed used when a config reaches a generator without one.
pub const DEFAULT_SEED: u32 = 0;

/// Shape of the generated terrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerrainProfile {
    /// Continuous noise ridge sampled from the height field
    #[default]
    Ridge,
    /// One straight slope per chunk, chained through the chunk fact cache
    Steps,
}

/// What happens to a chunk object when it leaves the streaming window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecyclePolicy {
    /// Release the scene object
    #[default]
    Destroy,
    /// Deactivate the scene object and keep it for reuse
    Pool,
    /// Driven by boundary crossings instead of polling; recycles into the pool
    Trigger,
}

impl LifecyclePolicy {
    /// Whether removed chunks are kept for reuse.
    #[must_use]
    pub const fn pools(self) -> bool {
        matches!(self, Self::Pool | Self::Trigger)
    }
}

/// Terrain generation and streaming parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Width of each chunk in world units
    pub chunk_width: f64,
    /// Surface samples per chunk (higher = smoother)
    pub points_per_chunk: u32,
    /// Amplitude of the main terrain noise
    pub height_scale: f64,
    /// Frequency of the main terrain noise
    pub noise_scale: f64,
    /// Chunks kept alive on each side of the observer
    pub render_distance: u32,
    /// Depth of the ground below the baseline (negative = down)
    pub ground_depth: f64,
    /// Noise seed (None = random per session)
    pub seed: Option<u32>,
    /// Length of the flat start zone
    pub flat_zone_length: f64,
    /// Length of the blend between flat zone and main terrain
    pub transition_length: f64,
    /// Noise frequency inside the flat zone
    pub flat_zone_noise_scale: f64,
    /// Noise amplitude inside the flat zone
    pub flat_zone_height_scale: f64,
    /// Slope of the baseline past the transition
    pub global_slope: f64,
    /// Terrain shape
    pub profile: TerrainProfile,
    /// Chunk object lifecycle
    pub lifecycle: LifecyclePolicy,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            chunk_width: 40.0,
            points_per_chunk: 80,
            height_scale: 15.0,
            noise_scale: 0.05,
            render_distance: 4,
            ground_depth: -25.0,
            seed: None,
            flat_zone_length: 100.0,
            transition_length: 50.0,
            flat_zone_noise_scale: 0.05,
            flat_zone_height_scale: 2.0,
            global_slope: 0.1,
            profile: TerrainProfile::default(),
            lifecycle: LifecyclePolicy::default(),
        }
    }
}

impl TerrainConfig {
    /// Creates a default config with a fixed seed.
    #[must_use]
    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Checks the config for values generation cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.points_per_chunk < 2 {
            return Err(ConfigError::TooFewPoints(self.points_per_chunk));
        }
        if !self.chunk_width.is_finite() || self.chunk_width <= 0.0 {
            return Err(ConfigError::InvalidChunkWidth(self.chunk_width));
        }

        let finite = [
            ("height_scale", self.height_scale),
            ("noise_scale", self.noise_scale),
            ("ground_depth", self.ground_depth),
            ("flat_zone_length", self.flat_zone_length),
            ("transition_length", self.transition_length),
            ("flat_zone_noise_scale", self.flat_zone_noise_scale),
            ("flat_zone_height_scale", self.flat_zone_height_scale),
            ("global_slope", self.global_slope),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
        }
        Ok(())
    }

    /// Picks a random seed if none was configured and returns the seed in use.
    pub fn randomize_missing_seed(&mut self) -> u32 {
        *self.seed.get_or_insert_with(|| {
            let seed = fastrand::u32(..);
            info!("No terrain seed configured, using random seed {seed}");
            seed
        })
    }

    /// Returns the configured seed, or [`DEFAULT_SEED`].
    #[must_use]
    pub fn effective_seed(&self) -> u32 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }

    /// Distance between adjacent surface samples.
    #[must_use]
    pub fn sample_step(&self) -> f64 {
        self.chunk_width / f64::from(self.points_per_chunk.saturating_sub(1).max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = TerrainConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.points_per_chunk, 80);
        assert_eq!(config.render_distance, 4);
    }

    #[test]
    fn test_rejects_too_few_points() {
        let config = TerrainConfig {
            points_per_chunk: 1,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::TooFewPoints(1)));
    }

    #[test]
    fn test_rejects_bad_width() {
        for width in [0.0, -5.0, f64::NAN] {
            let config = TerrainConfig {
                chunk_width: width,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidChunkWidth(_))
            ));
        }
    }

    #[test]
    fn test_rejects_non_finite_parameter() {
        let config = TerrainConfig {
            global_slope: f64::INFINITY,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFinite {
                name: "global_slope",
                ..
            })
        ));
    }

    #[test]
    fn test_seed_resolution() {
        let mut config = TerrainConfig::default();
        assert_eq!(config.effective_seed(), DEFAULT_SEED);

        let seed = config.randomize_missing_seed();
        assert_eq!(config.seed, Some(seed));
        // A configured seed is never replaced.
        assert_eq!(config.randomize_missing_seed(), seed);

        let mut fixed = TerrainConfig::with_seed(7);
        assert_eq!(fixed.randomize_missing_seed(), 7);
    }

    #[test]
    fn test_sample_step() {
        let config = TerrainConfig {
            chunk_width: 10.0,
            points_per_chunk: 11,
            ..Default::default()
        };
        assert!((config.sample_step() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_policy_pooling() {
        assert!(!LifecyclePolicy::Destroy.pools());
        assert!(LifecyclePolicy::Pool.pools());
        assert!(LifecyclePolicy::Trigger.pools());
    }
}
