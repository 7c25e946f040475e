//! Boundary to the engine's scene graph.
//!
//! The terrain core decides *when* chunk objects exist; a [`SceneFactory`]
//! decides *how*: it owns the actual render meshes and colliders and hands
//! back opaque [`GeometryHandle`]s.

use ridgeline_common::{GeometryHandle, TerrainResult};

use crate::geometry::ChunkGeometry;
use crate::source::Placement;

/// Creates, updates and releases chunk objects in the host scene.
pub trait SceneFactory {
    /// Creates a new, active object with the given geometry.
    fn create(
        &mut self,
        placement: Placement,
        geometry: &ChunkGeometry,
    ) -> TerrainResult<GeometryHandle>;

    /// Moves an existing object and replaces its geometry.
    fn reassign(
        &mut self,
        handle: GeometryHandle,
        placement: Placement,
        geometry: &ChunkGeometry,
    ) -> TerrainResult<()>;

    /// Shows or hides an object without releasing it.
    fn set_active(&mut self, handle: GeometryHandle, active: bool);

    /// Releases an object permanently.
    fn destroy(&mut self, handle: GeometryHandle);
}

impl<F: SceneFactory + ?Sized> SceneFactory for &mut F {
    fn create(
        &mut self,
        placement: Placement,
        geometry: &ChunkGeometry,
    ) -> TerrainResult<GeometryHandle> {
        (**self).create(placement, geometry)
    }

    fn reassign(
        &mut self,
        handle: GeometryHandle,
        placement: Placement,
        geometry: &ChunkGeometry,
    ) -> TerrainResult<()> {
        (**self).reassign(handle, placement, geometry)
    }

    fn set_active(&mut self, handle: GeometryHandle, active: bool) {
        (**self).set_active(handle, active);
    }

    fn destroy(&mut self, handle: GeometryHandle) {
        (**self).destroy(handle);
    }
}
