//! Chunk geometry: render meshes and physics boundaries.
//!
//! The render mesh of a ridge chunk carries one extra "stitch" vertex past
//! its right edge, sampled from the neighbor's surface, so independently
//! built chunks overlap instead of leaving a hairline gap. The physics
//! boundary is built from the chunk's own samples only and is not stitched.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use ridgeline_common::{ChunkIndex, ConfigError};

use crate::cache::ChunkFact;
use crate::config::TerrainConfig;
use crate::height::HeightField;

/// A render vertex in chunk-local space.
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Vertex {
    /// Local position (x right, y up)
    pub position: [f32; 2],
}

impl Vertex {
    /// Creates a vertex from local coordinates.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            position: [x as f32, y as f32],
        }
    }

    /// Position as a vector.
    #[must_use]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::from_array(self.position)
    }
}

/// Triangle mesh for the render collaborator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderMesh {
    /// Vertex buffer
    pub vertices: Vec<Vertex>,
    /// Triangle list, three indices per triangle
    pub indices: Vec<u32>,
}

impl RenderMesh {
    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Vertex buffer as raw bytes for upload.
    #[must_use]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index buffer as raw bytes for upload.
    #[must_use]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// Everything the scene needs to show and collide with one chunk.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChunkGeometry {
    /// Stitched render mesh
    pub mesh: RenderMesh,
    /// Closed, non-stitched collider polygon
    pub boundary: Vec<Vec2>,
}

/// Builds chunk geometry from terrain sources.
#[derive(Debug, Clone)]
pub struct GeometryBuilder {
    chunk_width: f64,
    points_per_chunk: u32,
    ground_depth: f64,
}

impl GeometryBuilder {
    /// Creates a builder from a validated config.
    pub fn new(config: &TerrainConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            chunk_width: config.chunk_width,
            points_per_chunk: config.points_per_chunk,
            ground_depth: config.ground_depth,
        })
    }

    /// Returns the chunk width.
    #[must_use]
    pub const fn chunk_width(&self) -> f64 {
        self.chunk_width
    }

    /// Returns the number of surface samples per chunk.
    #[must_use]
    pub const fn points_per_chunk(&self) -> u32 {
        self.points_per_chunk
    }

    /// Distance between adjacent surface samples.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.chunk_width / f64::from(self.points_per_chunk - 1)
    }

    /// Local x of sample `i`.
    ///
    /// Derived from a normalized parameter rather than `i * step` so the
    /// last sample lands exactly on `chunk_width`.
    fn local_x(&self, i: u32) -> f64 {
        let t = f64::from(i) / f64::from(self.points_per_chunk - 1);
        t * self.chunk_width
    }

    /// Builds the ridge geometry for chunk `index` from the height field.
    ///
    /// Vertex layout: `points_per_chunk` surface vertices, then the stitch
    /// vertex at `chunk_width + step`, then bottom-right and bottom-left.
    #[must_use]
    pub fn build_ridge(&self, index: ChunkIndex, field: &HeightField) -> ChunkGeometry {
        let n = self.points_per_chunk;
        let origin = index.world_origin(self.chunk_width);

        let mut top = Vec::with_capacity(n as usize);
        for i in 0..n {
            let local_x = self.local_x(i);
            top.push((local_x, field.height(origin + local_x)));
        }

        let start_floor = field.baseline(origin) + self.ground_depth;
        let end_floor = field.baseline(origin + self.chunk_width) + self.ground_depth;

        let mut boundary: Vec<Vec2> = top
            .iter()
            .map(|&(x, y)| Vec2::new(x as f32, y as f32))
            .collect();
        boundary.push(Vec2::new(self.chunk_width as f32, end_floor as f32));
        boundary.push(Vec2::new(0.0, start_floor as f32));

        let stitch_x = self.chunk_width + self.step();
        let stitch_world_x = origin + stitch_x;
        let stitch_floor = field.baseline(stitch_world_x) + self.ground_depth;

        let mut vertices: Vec<Vertex> = top.iter().map(|&(x, y)| Vertex::new(x, y)).collect();
        vertices.push(Vertex::new(stitch_x, field.height(stitch_world_x)));
        let bottom_right = n + 1;
        let bottom_left = n + 2;
        vertices.push(Vertex::new(stitch_x, stitch_floor));
        vertices.push(Vertex::new(0.0, start_floor));

        let mut indices = Vec::with_capacity(n as usize * 6);
        for i in 0..n {
            indices.extend_from_slice(&[i, i + 1, bottom_right, i + 1, bottom_left, bottom_right]);
        }

        ChunkGeometry {
            mesh: RenderMesh { vertices, indices },
            boundary,
        }
    }

    /// Builds the single-slope geometry of a stepped chunk.
    ///
    /// A right triangle with its base along the chunk's start height and its
    /// peak at `(chunk_width, fact.height)`, in chunk-local space. Mesh and
    /// boundary share the same three points.
    #[must_use]
    pub fn build_step(&self, fact: &ChunkFact) -> ChunkGeometry {
        let width = self.chunk_width;
        let corners = [(0.0, 0.0), (width, fact.height), (width, 0.0)];

        ChunkGeometry {
            mesh: RenderMesh {
                vertices: corners.iter().map(|&(x, y)| Vertex::new(x, y)).collect(),
                indices: vec![0, 1, 2],
            },
            boundary: corners
                .iter()
                .map(|&(x, y)| Vec2::new(x as f32, y as f32))
                .collect(),
        }
    }
}
