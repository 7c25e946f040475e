//! ID types for scene resources.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Source of fresh geometry handles.
static NEXT_HANDLE: AtomicU64 = AtomicU64::new(1);

/// Opaque handle to a scene object holding a chunk's mesh and collider.
///
/// A pooled chunk keeps its handle across reuse, so identity survives
/// recycling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeometryHandle(u64);

impl GeometryHandle {
    /// Allocates a process-unique handle.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_HANDLE.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for GeometryHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "geom:{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_are_unique() {
        let a = GeometryHandle::next();
        let b = GeometryHandle::next();
        assert_ne!(a, b);
        assert_ne!(a.to_string(), b.to_string());
        assert!(a.to_string().starts_with("geom:"));
    }
}
