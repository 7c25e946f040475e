//! # Ridgeline Common
//!
//! Common types and shared abstractions for Ridgeline.
//!
//! This crate provides foundational types used across all Ridgeline crates:
//! - Chunk indices and the position-to-index resolver
//! - Geometry handle IDs
//! - Common error types
//! - Prelude for convenient imports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod coords;
pub mod error;
pub mod ids;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::coords::*;
    pub use crate::error::*;
    pub use crate::ids::*;
}

pub use prelude::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_generation() {
        let h1 = GeometryHandle::next();
        let h2 = GeometryHandle::next();
        assert_ne!(h1, h2);
    }

    #[test]
    fn test_error_conversion() {
        let err: TerrainError = CoordError::InvalidPosition { x: f64::NAN }.into();
        assert!(matches!(err, TerrainError::Coord(_)));

        let err: RidgelineError = ConfigError::TooFewPoints(1).into();
        assert!(err.to_string().contains("points_per_chunk"));
    }
}
