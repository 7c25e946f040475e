//! # Ridgeline Terrain
//!
//! Procedural side-scroller terrain.
//!
//! This crate handles:
//! - Height sampling (flat spawn zone blended into a noise ridge)
//! - Stepped slope chains resolved through a bidirectional cache
//! - Chunk mesh and collider construction
//! - Chunk streaming around the observer, with optional object pooling
//! - Spawn landmarks and the left world bound

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod cache;
pub mod chunk;
pub mod config;
pub mod geometry;
pub mod height;
pub mod landmarks;
pub mod pool;
pub mod scene;
pub mod source;
pub mod streaming;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::cache::*;
    pub use crate::chunk::*;
    pub use crate::config::*;
    pub use crate::geometry::*;
    pub use crate::height::*;
    pub use crate::landmarks::*;
    pub use crate::pool::*;
    pub use crate::scene::*;
    pub use crate::source::*;
    pub use crate::streaming::*;
}

pub use prelude::*;
