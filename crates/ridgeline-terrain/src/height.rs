//! Deterministic terrain height field.
//!
//! Height is a smooth baseline plus layered coherent noise. Near the spawn
//! the terrain uses a gentle "flat zone" noise profile; past
//! `flat_zone_length` it blends over `transition_length` into the main
//! profile while the baseline bends into a constant slope.

use noise::{NoiseFn, Perlin};
use ridgeline_common::{ConfigError, TerrainSample};

use crate::config::TerrainConfig;

/// Row of the 2D noise plane that 1D lookups read from.
///
/// Off the integer lattice so the gradient noise never collapses to zero.
pub(crate) const SAMPLE_ROW: f64 = 0.5;

/// Maps Perlin output (roughly `[-1, 1]`) onto `[0, 1]`.
pub(crate) fn unit_noise(noise: &Perlin, x: f64) -> f64 {
    (noise.get([x, SAMPLE_ROW]) * 0.5 + 0.5).clamp(0.0, 1.0)
}

/// Cubic smooth-step of an already normalized `t`.
fn smooth_step(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Noise amplitude/frequency pair for one terrain zone.
#[derive(Debug, Clone, Copy, PartialEq)]
struct NoiseProfile {
    scale: f64,
    amplitude: f64,
}

/// Pure height function over world x.
pub struct HeightField {
    /// First octave (full amplitude)
    base_octave: Perlin,
    /// Second octave (half frequency, half amplitude)
    broad_octave: Perlin,
    /// Third octave (double frequency, subtracted)
    detail_octave: Perlin,
    flat: NoiseProfile,
    main: NoiseProfile,
    flat_zone_length: f64,
    transition_length: f64,
    global_slope: f64,
}

impl HeightField {
    /// Creates a height field from a validated config.
    pub fn new(config: &TerrainConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.effective_seed();

        Ok(Self {
            base_octave: Perlin::new(seed),
            broad_octave: Perlin::new(seed.wrapping_add(1)),
            detail_octave: Perlin::new(seed.wrapping_add(2)),
            flat: NoiseProfile {
                scale: config.flat_zone_noise_scale,
                amplitude: config.flat_zone_height_scale,
            },
            main: NoiseProfile {
                scale: config.noise_scale,
                amplitude: config.height_scale,
            },
            flat_zone_length: config.flat_zone_length,
            transition_length: config.transition_length,
            global_slope: config.global_slope,
        })
    }

    fn transition_end(&self) -> f64 {
        self.flat_zone_length + self.transition_length
    }

    /// Blend weight between flat-zone noise (0) and main noise (1).
    #[must_use]
    pub fn transition_factor(&self, world_x: f64) -> f64 {
        if world_x <= self.flat_zone_length || self.transition_length <= 0.0 {
            return 0.0;
        }
        if world_x >= self.transition_end() {
            return 1.0;
        }
        smooth_step((world_x - self.flat_zone_length) / self.transition_length)
    }

    /// Noise-free component of the height.
    ///
    /// Zero through the flat zone, `L*s*(t^3 - t^4/2)` across the transition
    /// and a straight line of slope `s` after it. Value-continuous at both
    /// boundaries.
    #[must_use]
    pub fn baseline(&self, world_x: f64) -> f64 {
        if world_x <= self.flat_zone_length || self.transition_length <= 0.0 {
            return 0.0;
        }
        let rise = self.transition_length * self.global_slope;
        let end = self.transition_end();
        if world_x >= end {
            return 0.5 * rise + (world_x - end) * self.global_slope;
        }
        let t = (world_x - self.flat_zone_length) / self.transition_length;
        rise * (t.powi(3) - 0.5 * t.powi(4))
    }

    fn layered_noise(&self, world_x: f64, profile: NoiseProfile) -> f64 {
        let x = world_x * profile.scale;
        let a = profile.amplitude;

        unit_noise(&self.base_octave, x) * a + unit_noise(&self.broad_octave, x * 0.5) * a * 0.5
            - unit_noise(&self.detail_octave, x * 2.0) * a * 0.3
    }

    /// Three-octave noise of the flat start zone.
    #[must_use]
    pub fn flat_noise(&self, world_x: f64) -> f64 {
        self.layered_noise(world_x, self.flat)
    }

    /// Three-octave noise of the main terrain.
    #[must_use]
    pub fn main_noise(&self, world_x: f64) -> f64 {
        self.layered_noise(world_x, self.main)
    }

    /// Surface elevation at `world_x`.
    #[must_use]
    pub fn height(&self, world_x: f64) -> f64 {
        let factor = self.transition_factor(world_x);
        let flat = self.flat_noise(world_x);
        let main = self.main_noise(world_x);
        self.baseline(world_x) + flat + (main - flat) * factor
    }

    /// Evaluates the surface at `world_x`.
    #[must_use]
    pub fn sample(&self, world_x: f64) -> TerrainSample {
        TerrainSample::new(world_x, self.height(world_x))
    }
}

impl std::fmt::Debug for HeightField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeightField")
            .field("flat", &self.flat)
            .field("main", &self.main)
            .field("flat_zone_length", &self.flat_zone_length)
            .field("transition_length", &self.transition_length)
            .field("global_slope", &self.global_slope)
            .finish_non_exhaustive()
    }
}
