//! Memoized per-chunk facts for the stepped terrain profile.
//!
//! Each chunk is a straight slope whose rise comes from a single noise
//! lookup. Chunk `i` starts where chunk `i - 1` ends, so start positions form
//! a chain anchored at chunk 0 = `(0, 0)` that extends in both directions.
//!
//! Start positions are resolved by walking outward from the cached frontier
//! rather than by recursion: the cached starts always cover one contiguous
//! range `[lo, hi]` containing 0, and resolving an index beyond it fills
//! every index in between. First access at distance `d` from the frontier
//! costs `O(d)`; later accesses are `O(1)`. Nothing is ever evicted.

use ahash::AHashMap;
use glam::DVec2;
use noise::Perlin;
use ridgeline_common::{ChunkIndex, ConfigError, CoordError, TerrainResult};
use tracing::debug;

use crate::config::TerrainConfig;
use crate::height::unit_noise;

/// Steepest slope a chunk can take, in degrees.
pub const MAX_SLOPE_DEGREES: f64 = 65.0;

/// Floor for chunk heights; keeps every chunk a non-degenerate slope.
pub const MIN_CHUNK_HEIGHT: f64 = 0.01;

/// Offset mixed into the seed so chunk slopes don't mirror the height field.
const SLOPE_SEED_OFFSET: u32 = 3;

/// Derived, permanent data about one chunk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChunkFact {
    /// World position of the chunk's lower-left corner
    pub start: DVec2,
    /// Vertical rise across the chunk
    pub height: f64,
}

impl ChunkFact {
    /// World position where the next chunk starts.
    #[must_use]
    pub fn end(&self, chunk_width: f64) -> DVec2 {
        self.start + DVec2::new(chunk_width, self.height)
    }
}

/// Bidirectional, append-only cache of chunk start positions and heights.
pub struct ChunkFactCache {
    chunk_width: f64,
    noise_scale: f64,
    noise: Perlin,
    heights: AHashMap<i32, f64>,
    starts: AHashMap<i32, DVec2>,
    /// Lowest index with a cached start
    lo: i32,
    /// Highest index with a cached start
    hi: i32,
}

impl ChunkFactCache {
    /// Creates a cache anchored at chunk 0 = `(0, 0)`.
    pub fn new(config: &TerrainConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut starts = AHashMap::new();
        starts.insert(0, DVec2::ZERO);

        Ok(Self {
            chunk_width: config.chunk_width,
            noise_scale: config.noise_scale,
            noise: Perlin::new(config.effective_seed().wrapping_add(SLOPE_SEED_OFFSET)),
            heights: AHashMap::new(),
            starts,
            lo: 0,
            hi: 0,
        })
    }

    /// Returns the chunk width the cache was built for.
    #[must_use]
    pub const fn chunk_width(&self) -> f64 {
        self.chunk_width
    }

    fn compute_height(&self, index: i32) -> f64 {
        // Negative indices read the same noise line as positive ones.
        let n = unit_noise(&self.noise, f64::from(index) * self.noise_scale);
        let angle = (MAX_SLOPE_DEGREES * n).to_radians();
        let height = self.chunk_width * angle.tan();
        if height.is_finite() && height > MIN_CHUNK_HEIGHT {
            height
        } else {
            MIN_CHUNK_HEIGHT
        }
    }

    fn height_raw(&mut self, index: i32) -> f64 {
        if let Some(&height) = self.heights.get(&index) {
            return height;
        }
        let height = self.compute_height(index);
        self.heights.insert(index, height);
        height
    }

    /// Rise of chunk `index`, computed once and memoized.
    pub fn height(&mut self, index: ChunkIndex) -> f64 {
        self.height_raw(index.get())
    }

    /// World position where chunk `index` starts.
    pub fn start_position(&mut self, index: ChunkIndex) -> DVec2 {
        let target = index.get();
        if let Some(&start) = self.starts.get(&target) {
            return start;
        }

        let width = self.chunk_width;
        let before = self.starts.len();

        while self.hi < target {
            let prev = self.hi;
            let start = self.starts[&prev] + DVec2::new(width, self.height_raw(prev));
            self.hi = prev + 1;
            self.starts.insert(self.hi, start);
        }
        while self.lo > target {
            let next = self.lo;
            let current = next - 1;
            let start = self.starts[&next] - DVec2::new(width, self.height_raw(current));
            self.lo = current;
            self.starts.insert(self.lo, start);
        }

        debug!(
            "Resolved chunk {index} start after expanding {} entries",
            self.starts.len() - before
        );
        self.starts[&target]
    }

    /// Start position and height of chunk `index`.
    pub fn fact(&mut self, index: ChunkIndex) -> ChunkFact {
        ChunkFact {
            start: self.start_position(index),
            height: self.height(index),
        }
    }

    /// Resolves the fact for a raw index.
    ///
    /// Unaddressable indices are rejected as an invalid position (the world
    /// x of the chunk's left edge) before any expansion happens.
    pub fn fact_at(&mut self, index: i32) -> TerrainResult<ChunkFact> {
        let index = ChunkIndex::new(index).map_err(|_| CoordError::InvalidPosition {
            x: f64::from(index) * self.chunk_width,
        })?;
        Ok(self.fact(index))
    }

    /// Resolves the fact for the chunk containing world x.
    pub fn fact_at_world_x(&mut self, world_x: f64) -> TerrainResult<ChunkFact> {
        let index = ChunkIndex::from_world_x(world_x, self.chunk_width)?;
        Ok(self.fact(index))
    }

    /// Whether the start position of `index` is already cached.
    #[must_use]
    pub fn is_cached(&self, index: ChunkIndex) -> bool {
        self.starts.contains_key(&index.get())
    }

    /// Inclusive range of indices with cached start positions.
    #[must_use]
    pub const fn cached_range(&self) -> (i32, i32) {
        (self.lo, self.hi)
    }

    /// Number of cached start positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    /// Always false: the anchor chunk is cached from construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }
}

impl std::fmt::Debug for ChunkFactCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChunkFactCache")
            .field("chunk_width", &self.chunk_width)
            .field("cached_range", &(self.lo, self.hi))
            .field("heights", &self.heights.len())
            .finish_non_exhaustive()
    }
}
