//! Chunk sources: turn a chunk index into placed geometry.

use glam::DVec2;
use ridgeline_common::{ChunkIndex, ConfigError, TerrainResult};
use serde::{Deserialize, Serialize};

use crate::cache::{ChunkFact, ChunkFactCache};
use crate::config::{TerrainConfig, TerrainProfile};
use crate::geometry::{ChunkGeometry, GeometryBuilder};
use crate::height::HeightField;

/// Where and how a scene object is placed in the world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// World position of the object's local origin
    pub position: DVec2,
    /// Rotation in radians
    pub rotation: f32,
    /// Scale applied to the object
    pub scale: DVec2,
}

impl Placement {
    /// Unrotated, unscaled placement at `position`.
    #[must_use]
    pub const fn at(position: DVec2) -> Self {
        Self {
            position,
            rotation: 0.0,
            scale: DVec2::ONE,
        }
    }
}

/// A chunk ready to be handed to the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkBlueprint {
    /// Placement of the chunk object
    pub placement: Placement,
    /// Local-space geometry
    pub geometry: ChunkGeometry,
}

/// Produces chunk blueprints by index.
///
/// Sources may memoize derived data, hence `&mut self`.
pub trait ChunkSource {
    /// Width of every chunk this source produces.
    fn chunk_width(&self) -> f64;

    /// Builds the blueprint for chunk `index`.
    fn build(&mut self, index: ChunkIndex) -> TerrainResult<ChunkBlueprint>;
}

/// Noise ridge terrain sampled from the height field.
#[derive(Debug)]
pub struct RidgeSource {
    field: HeightField,
    builder: GeometryBuilder,
}

impl RidgeSource {
    /// Creates a ridge source from a validated config.
    pub fn new(config: &TerrainConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            field: HeightField::new(config)?,
            builder: GeometryBuilder::new(config)?,
        })
    }

    /// The underlying height field.
    #[must_use]
    pub const fn field(&self) -> &HeightField {
        &self.field
    }
}

impl ChunkSource for RidgeSource {
    fn chunk_width(&self) -> f64 {
        self.builder.chunk_width()
    }

    fn build(&mut self, index: ChunkIndex) -> TerrainResult<ChunkBlueprint> {
        let origin = index.world_origin(self.builder.chunk_width());
        Ok(ChunkBlueprint {
            placement: Placement::at(DVec2::new(origin, 0.0)),
            geometry: self.builder.build_ridge(index, &self.field),
        })
    }
}

/// Stepped terrain: one straight slope per chunk, chained end to start.
#[derive(Debug)]
pub struct StepSource {
    cache: ChunkFactCache,
    builder: GeometryBuilder,
}

impl StepSource {
    /// Creates a stepped source from a validated config.
    pub fn new(config: &TerrainConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            cache: ChunkFactCache::new(config)?,
            builder: GeometryBuilder::new(config)?,
        })
    }

    /// The fact cache backing this source.
    #[must_use]
    pub const fn cache(&self) -> &ChunkFactCache {
        &self.cache
    }

    /// Resolves the fact for chunk `index`.
    pub fn fact(&mut self, index: ChunkIndex) -> ChunkFact {
        self.cache.fact(index)
    }
}

impl ChunkSource for StepSource {
    fn chunk_width(&self) -> f64 {
        self.builder.chunk_width()
    }

    fn build(&mut self, index: ChunkIndex) -> TerrainResult<ChunkBlueprint> {
        let fact = self.cache.fact(index);
        Ok(ChunkBlueprint {
            placement: Placement::at(fact.start),
            geometry: self.builder.build_step(&fact),
        })
    }
}

/// A source picked at runtime from [`TerrainProfile`].
#[derive(Debug)]
pub enum ProfileSource {
    /// Noise ridge
    Ridge(RidgeSource),
    /// Stepped slopes
    Steps(StepSource),
}

impl ProfileSource {
    /// Builds the source matching `config.profile`.
    pub fn from_config(config: &TerrainConfig) -> Result<Self, ConfigError> {
        Ok(match config.profile {
            TerrainProfile::Ridge => Self::Ridge(RidgeSource::new(config)?),
            TerrainProfile::Steps => Self::Steps(StepSource::new(config)?),
        })
    }
}

impl ChunkSource for ProfileSource {
    fn chunk_width(&self) -> f64 {
        match self {
            Self::Ridge(source) => source.chunk_width(),
            Self::Steps(source) => source.chunk_width(),
        }
    }

    fn build(&mut self, index: ChunkIndex) -> TerrainResult<ChunkBlueprint> {
        match self {
            Self::Ridge(source) => source.build(index),
            Self::Steps(source) => source.build(index),
        }
    }
}
