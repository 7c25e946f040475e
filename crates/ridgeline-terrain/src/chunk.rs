//! Live chunk records.

use ridgeline_common::{ChunkIndex, GeometryHandle};

use crate::source::Placement;

/// A materialized chunk owned by the streaming window.
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkRecord {
    /// Chunk index
    index: ChunkIndex,
    /// Scene object backing this chunk
    handle: GeometryHandle,
    /// Where the object was placed
    placement: Placement,
    /// Whether the object is visible in the scene
    active: bool,
    /// Fire-once latch of the forward boundary trigger
    forward_armed: bool,
    /// Whether the handle came out of the pool
    recycled: bool,
}

impl ChunkRecord {
    /// Creates an active record with an armed forward trigger.
    #[must_use]
    pub const fn new(
        index: ChunkIndex,
        handle: GeometryHandle,
        placement: Placement,
        recycled: bool,
    ) -> Self {
        Self {
            index,
            handle,
            placement,
            active: true,
            forward_armed: true,
            recycled,
        }
    }

    /// Returns the chunk index.
    #[must_use]
    pub const fn index(&self) -> ChunkIndex {
        self.index
    }

    /// Returns the scene handle.
    #[must_use]
    pub const fn handle(&self) -> GeometryHandle {
        self.handle
    }

    /// Returns the object placement.
    #[must_use]
    pub const fn placement(&self) -> Placement {
        self.placement
    }

    /// Returns whether the object is active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Returns whether the handle was reused from the pool.
    #[must_use]
    pub const fn is_recycled(&self) -> bool {
        self.recycled
    }

    /// Returns whether the forward trigger can still fire.
    #[must_use]
    pub const fn forward_armed(&self) -> bool {
        self.forward_armed
    }

    /// Fires the forward trigger. Returns `true` only the first time.
    pub fn fire_forward(&mut self) -> bool {
        std::mem::replace(&mut self.forward_armed, false)
    }

    /// Marks the record inactive ahead of removal.
    pub(crate) fn deactivate(&mut self) {
        self.active = false;
    }
}
