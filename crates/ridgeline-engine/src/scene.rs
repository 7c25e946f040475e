//! Headless scene backend.
//!
//! Keeps every chunk object in memory the way a renderer and physics world
//! would: uploaded buffer sizes, collider outline, placement and visibility.

use ahash::AHashMap;
use ridgeline_common::{GeometryHandle, TerrainError, TerrainResult};
use ridgeline_terrain::{ChunkGeometry, Placement, SceneFactory};
use tracing::trace;

/// One object living in the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    /// Current placement
    pub placement: Placement,
    /// Whether the object is shown and collidable
    pub active: bool,
    /// Uploaded vertex buffer size in bytes
    pub vertex_bytes: usize,
    /// Triangles in the render mesh
    pub triangles: usize,
    /// Points in the collider outline
    pub collider_points: usize,
}

impl SceneObject {
    fn new(placement: Placement, geometry: &ChunkGeometry) -> Self {
        Self {
            placement,
            active: true,
            vertex_bytes: geometry.mesh.vertex_bytes().len(),
            triangles: geometry.mesh.triangle_count(),
            collider_points: geometry.boundary.len(),
        }
    }
}

/// Backend operation counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SceneStats {
    /// Objects created
    pub created: u64,
    /// Objects moved and re-uploaded
    pub reassigned: u64,
    /// Objects destroyed
    pub destroyed: u64,
    /// Bytes uploaded across all vertex buffers
    pub uploaded_bytes: u64,
}

/// In-memory [`SceneFactory`].
#[derive(Debug, Default)]
pub struct RecordingScene {
    objects: AHashMap<GeometryHandle, SceneObject>,
    stats: SceneStats,
}

impl RecordingScene {
    /// Creates an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up an object.
    #[must_use]
    pub fn object(&self, handle: GeometryHandle) -> Option<&SceneObject> {
        self.objects.get(&handle)
    }

    /// Number of objects, active or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the scene holds no object.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Number of visible objects.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.objects.values().filter(|o| o.active).count()
    }

    /// Operation counters.
    #[must_use]
    pub const fn stats(&self) -> SceneStats {
        self.stats
    }
}

impl SceneFactory for RecordingScene {
    fn create(
        &mut self,
        placement: Placement,
        geometry: &ChunkGeometry,
    ) -> TerrainResult<GeometryHandle> {
        let handle = GeometryHandle::next();
        let object = SceneObject::new(placement, geometry);
        self.stats.created += 1;
        self.stats.uploaded_bytes += object.vertex_bytes as u64;
        trace!("Created {handle} at {}", placement.position);
        self.objects.insert(handle, object);
        Ok(handle)
    }

    fn reassign(
        &mut self,
        handle: GeometryHandle,
        placement: Placement,
        geometry: &ChunkGeometry,
    ) -> TerrainResult<()> {
        let Some(object) = self.objects.get_mut(&handle) else {
            return Err(TerrainError::Scene(format!("reassign of unknown object {handle}")));
        };
        let active = object.active;
        *object = SceneObject {
            active,
            ..SceneObject::new(placement, geometry)
        };
        self.stats.reassigned += 1;
        self.stats.uploaded_bytes += object.vertex_bytes as u64;
        trace!("Moved {handle} to {}", placement.position);
        Ok(())
    }

    fn set_active(&mut self, handle: GeometryHandle, active: bool) {
        if let Some(object) = self.objects.get_mut(&handle) {
            object.active = active;
        }
    }

    fn destroy(&mut self, handle: GeometryHandle) {
        if self.objects.remove(&handle).is_some() {
            self.stats.destroyed += 1;
        }
    }
}
