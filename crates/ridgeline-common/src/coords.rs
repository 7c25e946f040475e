//! Coordinate types for chunk indices and terrain samples.

use serde::{Deserialize, Serialize};

use crate::error::CoordError;

/// Largest chunk index magnitude the world will ever address.
///
/// Keeps every `index * chunk_width` product exactly representable and bounds
/// the work a single cache expansion can be asked to do.
pub const MAX_CHUNK_INDEX: i32 = 1 << 24;

/// Index of a fixed-width horizontal terrain segment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ChunkIndex(i32);

impl ChunkIndex {
    /// The chunk containing the world origin.
    pub const ORIGIN: Self = Self(0);

    /// Creates a chunk index, rejecting values outside the addressable range.
    pub fn new(index: i32) -> Result<Self, CoordError> {
        if index.unsigned_abs() > MAX_CHUNK_INDEX.unsigned_abs() {
            return Err(CoordError::IndexOutOfRange { index: index.into() });
        }
        Ok(Self(index))
    }

    /// Resolves the chunk containing world coordinate `x`.
    ///
    /// Uses a true floor, so `x = -1.0` with a width of `10.0` lands in chunk
    /// `-1`, not chunk `0`.
    pub fn from_world_x(x: f64, chunk_width: f64) -> Result<Self, CoordError> {
        if !x.is_finite() || !chunk_width.is_finite() || chunk_width <= 0.0 {
            return Err(CoordError::InvalidPosition { x });
        }
        let index = (x / chunk_width).floor();
        if index.abs() > f64::from(MAX_CHUNK_INDEX) {
            return Err(CoordError::InvalidPosition { x });
        }
        Ok(Self(index as i32))
    }

    /// Returns the raw index value.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// World x of this chunk's left edge.
    #[must_use]
    pub fn world_origin(self, chunk_width: f64) -> f64 {
        f64::from(self.0) * chunk_width
    }

    /// Returns the index `delta` chunks away, if it is addressable.
    pub fn offset(self, delta: i32) -> Result<Self, CoordError> {
        let target = i64::from(self.0) + i64::from(delta);
        i32::try_from(target)
            .map_err(|_| CoordError::IndexOutOfRange { index: target })
            .and_then(Self::new)
    }

    /// Absolute distance in chunks between two indices.
    #[must_use]
    pub const fn distance(self, other: Self) -> u32 {
        self.0.abs_diff(other.0)
    }

    /// Inclusive range `[self - radius, self + radius]`, clipped to the
    /// addressable range.
    #[must_use]
    pub fn window(self, radius: u32) -> std::ops::RangeInclusive<i32> {
        let radius = i64::from(radius);
        let lo = (i64::from(self.0) - radius).max(-i64::from(MAX_CHUNK_INDEX));
        let hi = (i64::from(self.0) + radius).min(i64::from(MAX_CHUNK_INDEX));
        (lo as i32)..=(hi as i32)
    }
}

impl std::fmt::Display for ChunkIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl TryFrom<i32> for ChunkIndex {
    type Error = CoordError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A single evaluated point of the terrain surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainSample {
    /// World x coordinate
    pub world_x: f64,
    /// Surface elevation at `world_x`
    pub elevation: f64,
}

impl TerrainSample {
    /// Creates a new sample.
    #[must_use]
    pub const fn new(world_x: f64, elevation: f64) -> Self {
        Self { world_x, elevation }
    }
}
