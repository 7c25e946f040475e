//! Spawn-area landmarks and the left world bound.

use glam::DVec2;
use ridgeline_common::{GeometryHandle, TerrainResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::geometry::ChunkGeometry;
use crate::scene::SceneFactory;
use crate::source::Placement;

/// Hard left edge of the playable world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldBounds {
    /// Smallest observer x allowed
    pub min_x: f64,
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self { min_x: -20.0 }
    }
}

impl WorldBounds {
    /// Pushes `x` back inside the bounds.
    #[must_use]
    pub fn clamp(&self, x: f64) -> f64 {
        x.max(self.min_x)
    }

    /// Whether `x` lies past the left edge.
    #[must_use]
    pub fn is_outside(&self, x: f64) -> bool {
        x < self.min_x
    }
}

/// Landmark placement settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandmarkConfig {
    /// Show the start view
    pub start_view: bool,
    /// Height of the start view (it always sits at x = 0)
    pub start_view_y: f64,
    /// Show the boundary view
    pub boundary_view: bool,
    /// Boundary view x
    pub boundary_view_x: f64,
    /// Boundary view y
    pub boundary_view_y: f64,
    /// Landmarks exist only while the observer is left of this x
    pub visible_until_x: f64,
}

impl Default for LandmarkConfig {
    fn default() -> Self {
        Self {
            start_view: true,
            start_view_y: 0.0,
            boundary_view: true,
            boundary_view_x: -20.0,
            boundary_view_y: 0.0,
            visible_until_x: 100.0,
        }
    }
}

/// Start and boundary views shown near the spawn point.
#[derive(Debug, Default)]
pub struct Landmarks {
    config: LandmarkConfig,
    start: Option<GeometryHandle>,
    boundary: Option<GeometryHandle>,
}

impl Landmarks {
    /// Creates landmarks; nothing is spawned until [`update`](Self::update).
    #[must_use]
    pub const fn new(config: LandmarkConfig) -> Self {
        Self {
            config,
            start: None,
            boundary: None,
        }
    }

    /// Spawns missing landmarks while the observer is near the start and
    /// removes them once it moves past `visible_until_x`.
    pub fn update<F: SceneFactory>(&mut self, observer_x: f64, scene: &mut F) -> TerrainResult<()> {
        if observer_x >= self.config.visible_until_x {
            self.teardown(scene);
            return Ok(());
        }

        if self.config.start_view && self.start.is_none() {
            let at = DVec2::new(0.0, self.config.start_view_y);
            self.start = Some(scene.create(Placement::at(at), &ChunkGeometry::default())?);
            debug!("Start view placed at {at}");
        }
        if self.config.boundary_view && self.boundary.is_none() {
            let at = DVec2::new(self.config.boundary_view_x, self.config.boundary_view_y);
            self.boundary = Some(scene.create(Placement::at(at), &ChunkGeometry::default())?);
            debug!("Boundary view placed at {at}");
        }
        Ok(())
    }

    /// Destroys whichever landmarks exist.
    pub fn teardown<F: SceneFactory>(&mut self, scene: &mut F) {
        for handle in [self.start.take(), self.boundary.take()].into_iter().flatten() {
            scene.destroy(handle);
            debug!("Landmark {handle} removed");
        }
    }

    /// Handle of the start view, if spawned.
    #[must_use]
    pub const fn start_view(&self) -> Option<GeometryHandle> {
        self.start
    }

    /// Handle of the boundary view, if spawned.
    #[must_use]
    pub const fn boundary_view(&self) -> Option<GeometryHandle> {
        self.boundary
    }

    /// Number of spawned landmarks.
    #[must_use]
    pub fn len(&self) -> usize {
        usize::from(self.start.is_some()) + usize::from(self.boundary.is_some())
    }

    /// Whether no landmark is spawned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
