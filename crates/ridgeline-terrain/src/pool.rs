//! FIFO pool of deactivated chunk objects.
//!
//! The pool never shrinks on its own: every recycled handle stays until it
//! is reused or the pool is drained.

use std::collections::VecDeque;

use tracing::trace;

/// Recycling queue for scene handles.
#[derive(Debug, Clone)]
pub struct ChunkPool<H> {
    idle: VecDeque<H>,
    /// Handles ever returned to the pool
    recycled: u64,
    /// Handles handed back out
    reused: u64,
}

impl<H> Default for ChunkPool<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> ChunkPool<H> {
    /// Creates an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self {
            idle: VecDeque::new(),
            recycled: 0,
            reused: 0,
        }
    }

    /// Takes the oldest idle handle, if any.
    pub fn acquire(&mut self) -> Option<H> {
        let handle = self.idle.pop_front()?;
        self.reused += 1;
        trace!("Reusing pooled chunk ({} left idle)", self.idle.len());
        Some(handle)
    }

    /// Returns a deactivated handle to the pool.
    pub fn release(&mut self, handle: H) {
        self.idle.push_back(handle);
        self.recycled += 1;
    }

    /// Number of idle handles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.idle.len()
    }

    /// Whether no handle is idle.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.idle.is_empty()
    }

    /// Total handles released into the pool.
    #[must_use]
    pub const fn recycled(&self) -> u64 {
        self.recycled
    }

    /// Total handles reused from the pool.
    #[must_use]
    pub const fn reused(&self) -> u64 {
        self.reused
    }

    /// Removes every idle handle, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = H> + '_ {
        self.idle.drain(..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut pool = ChunkPool::new();
        pool.release(1);
        pool.release(2);
        pool.release(3);
        assert_eq!(pool.acquire(), Some(1));
        assert_eq!(pool.acquire(), Some(2));
        pool.release(4);
        assert_eq!(pool.acquire(), Some(3));
        assert_eq!(pool.acquire(), Some(4));
        assert_eq!(pool.acquire(), None);
    }

    #[test]
    fn test_counters() {
        let mut pool = ChunkPool::new();
        assert!(pool.is_empty());
        pool.release('a');
        pool.release('b');
        let _ = pool.acquire();
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.recycled(), 2);
        assert_eq!(pool.reused(), 1);
    }

    #[test]
    fn test_drain() {
        let mut pool = ChunkPool::new();
        pool.release(10);
        pool.release(20);
        let drained: Vec<_> = pool.drain().collect();
        assert_eq!(drained, vec![10, 20]);
        assert!(pool.is_empty());
    }
}
