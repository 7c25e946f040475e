//! Chunk streaming around a moving observer.
//!
//! The window keeps chunk objects alive for every index within
//! `render_distance` of the observer's chunk. With a polled policy
//! ([`LifecyclePolicy::Destroy`] or [`LifecyclePolicy::Pool`]) each
//! [`StreamingWindow::step`] that sees a new observer index reconciles the
//! whole window; afterwards exactly `[index - r, index + r]` is live.
//!
//! With [`LifecyclePolicy::Trigger`] the window is only built once. After
//! that it moves through boundary events: [`StreamingWindow::crossed_forward`]
//! spawns one chunk ahead (once per chunk) and
//! [`StreamingWindow::crossed_backward`] recycles the chunk that fell behind.
//! An observer that jumps across several boundaries without crossing them
//! leaves the window out of sync until [`StreamingWindow::resync`].

use std::collections::BTreeMap;

use ridgeline_common::{ChunkIndex, ConfigError, GeometryHandle, TerrainResult};
use tracing::{debug, info, warn};

use crate::chunk::ChunkRecord;
use crate::config::{LifecyclePolicy, TerrainConfig};
use crate::pool::ChunkPool;
use crate::scene::SceneFactory;
use crate::source::{ChunkSource, ProfileSource};

/// Chunks spawned and removed by one window update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowDelta {
    /// Indices materialized, in ascending order
    pub spawned: Vec<ChunkIndex>,
    /// Indices released or recycled, in ascending order
    pub removed: Vec<ChunkIndex>,
}

impl WindowDelta {
    /// Whether the update changed nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spawned.is_empty() && self.removed.is_empty()
    }
}

/// Running totals for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamingStats {
    /// Calls to `step`
    pub ticks: u64,
    /// Ticks skipped for lack of an observer
    pub skipped_ticks: u64,
    /// Full window reconciliations
    pub shifts: u64,
    /// Chunks materialized
    pub spawned: u64,
    /// Chunks released or recycled
    pub removed: u64,
}

/// Streams chunk objects in and out around the observer.
pub struct StreamingWindow<S, F> {
    source: S,
    scene: F,
    policy: LifecyclePolicy,
    render_distance: u32,
    chunk_width: f64,
    /// Observer chunk the window is centred on
    current: Option<ChunkIndex>,
    /// Live chunks by index
    active: BTreeMap<i32, ChunkRecord>,
    pool: ChunkPool<GeometryHandle>,
    /// Last index reported as out of sync (trigger policy)
    desync: Option<ChunkIndex>,
    stats: StreamingStats,
}

impl<F: SceneFactory> StreamingWindow<ProfileSource, F> {
    /// Creates a window with the source selected by `config.profile`.
    pub fn from_config(config: &TerrainConfig, scene: F) -> Result<Self, ConfigError> {
        let source = ProfileSource::from_config(config)?;
        Self::new(config, source, scene)
    }
}

impl<S: ChunkSource, F: SceneFactory> StreamingWindow<S, F> {
    /// Creates an empty window. Nothing is materialized until the first
    /// [`step`](Self::step).
    pub fn new(config: &TerrainConfig, source: S, scene: F) -> Result<Self, ConfigError> {
        config.validate()?;
        info!(
            "Streaming window ready: radius {}, chunk width {}, policy {:?}",
            config.render_distance, config.chunk_width, config.lifecycle
        );
        Ok(Self {
            chunk_width: source.chunk_width(),
            source,
            scene,
            policy: config.lifecycle,
            render_distance: config.render_distance,
            current: None,
            active: BTreeMap::new(),
            pool: ChunkPool::new(),
            desync: None,
            stats: StreamingStats::default(),
        })
    }

    /// Advances the window for one simulation tick.
    ///
    /// `None` means the observer is missing this tick: a warning is logged
    /// and nothing changes. An unchanged observer chunk is a no-op.
    pub fn step(&mut self, observer_x: Option<f64>) -> TerrainResult<WindowDelta> {
        self.stats.ticks += 1;

        let Some(x) = observer_x else {
            self.stats.skipped_ticks += 1;
            warn!("No observer this tick, skipping terrain streaming");
            return Ok(WindowDelta::default());
        };

        let index = ChunkIndex::from_world_x(x, self.chunk_width)?;
        if self.current == Some(index) {
            return Ok(WindowDelta::default());
        }

        match (self.policy, self.current) {
            (LifecyclePolicy::Trigger, Some(current)) => {
                if index.distance(current) > 1 && self.desync != Some(index) {
                    warn!(
                        "Observer jumped from chunk {current} to {index} without crossing \
                         boundaries; trigger window is out of sync"
                    );
                    self.desync = Some(index);
                }
                Ok(WindowDelta::default())
            },
            _ => self.reconcile(index),
        }
    }

    /// Rebuilds the full window around the observer regardless of policy.
    pub fn resync(&mut self, observer_x: f64) -> TerrainResult<WindowDelta> {
        let index = ChunkIndex::from_world_x(observer_x, self.chunk_width)?;
        self.desync = None;
        self.reconcile(index)
    }

    /// Forward boundary trigger of chunk `index` fired.
    ///
    /// The first firing spawns the chunk `render_distance` ahead of `index`
    /// and re-centres the window; later firings are ignored until the chunk
    /// is recycled and rebuilt. With a radius of zero the chunk ahead is the
    /// entered chunk itself, so it is spawned when missing.
    ///
    /// The trigger stays armed and the window centre is kept if the spawn
    /// fails, so the same crossing can be retried.
    pub fn crossed_forward(&mut self, index: ChunkIndex) -> TerrainResult<Option<ChunkIndex>> {
        let ahead = index.offset(self.radius())?;
        match self.active.get(&index.get()) {
            Some(record) if !record.forward_armed() => return Ok(None),
            Some(_) => {},
            None if ahead == index => {},
            None => {
                debug!("Forward trigger on unloaded chunk {index} ignored");
                return Ok(None);
            },
        }

        let spawned = if self.active.contains_key(&ahead.get()) {
            None
        } else {
            self.spawn(ahead)?;
            Some(ahead)
        };

        if let Some(record) = self.active.get_mut(&index.get()) {
            record.fire_forward();
        }
        self.current = Some(index);
        Ok(spawned)
    }

    /// Trailing boundary trigger of chunk `index` fired.
    ///
    /// Recycles the chunk `render_distance` behind `index`, if live.
    pub fn crossed_backward(&mut self, index: ChunkIndex) -> TerrainResult<Option<ChunkIndex>> {
        let behind = index.offset(-self.radius())?;
        Ok(self.remove(behind).map(|record| record.index()))
    }

    fn radius(&self) -> i32 {
        i32::try_from(self.render_distance).unwrap_or(i32::MAX)
    }

    fn reconcile(&mut self, center: ChunkIndex) -> TerrainResult<WindowDelta> {
        let desired = center.window(self.render_distance);
        let mut delta = WindowDelta::default();

        // Removals first so pooled handles are reused within the same tick.
        let stale: Vec<i32> = self
            .active
            .keys()
            .filter(|&&key| !desired.contains(&key))
            .copied()
            .collect();
        for key in stale {
            if let Some(record) = self.remove(ChunkIndex::new(key)?) {
                delta.removed.push(record.index());
            }
        }

        for key in desired {
            if self.active.contains_key(&key) {
                continue;
            }
            let index = ChunkIndex::new(key)?;
            self.spawn(index)?;
            delta.spawned.push(index);
        }

        let previous = self.current.replace(center);
        self.stats.shifts += 1;
        info!(
            "Window moved {} -> {center}: +{} -{} ({} live, {} pooled)",
            previous.map_or_else(|| "start".to_string(), |p| p.to_string()),
            delta.spawned.len(),
            delta.removed.len(),
            self.active.len(),
            self.pool.len()
        );
        Ok(delta)
    }

    fn spawn(&mut self, index: ChunkIndex) -> TerrainResult<()> {
        let blueprint = self.source.build(index)?;

        let pooled = if self.policy.pools() {
            self.pool.acquire()
        } else {
            None
        };
        let (handle, recycled) = match pooled {
            Some(handle) => {
                if let Err(e) = self
                    .scene
                    .reassign(handle, blueprint.placement, &blueprint.geometry)
                {
                    self.pool.release(handle);
                    return Err(e);
                }
                self.scene.set_active(handle, true);
                (handle, true)
            },
            None => (
                self.scene.create(blueprint.placement, &blueprint.geometry)?,
                false,
            ),
        };

        debug!(
            "Spawned chunk {index} as {handle}{}",
            if recycled { " (pooled)" } else { "" }
        );
        self.active.insert(
            index.get(),
            ChunkRecord::new(index, handle, blueprint.placement, recycled),
        );
        self.stats.spawned += 1;
        Ok(())
    }

    /// Takes chunk `index` out of the window and returns its deactivated
    /// record.
    fn remove(&mut self, index: ChunkIndex) -> Option<ChunkRecord> {
        let mut record = self.active.remove(&index.get())?;
        record.deactivate();
        let handle = record.handle();

        if self.policy.pools() {
            self.scene.set_active(handle, false);
            self.pool.release(handle);
            debug!("Recycled chunk {index} ({handle})");
        } else {
            self.scene.destroy(handle);
            debug!("Destroyed chunk {index} ({handle})");
        }
        self.stats.removed += 1;
        Some(record)
    }

    /// Destroys every live and pooled chunk object.
    pub fn shutdown(&mut self) {
        let live = std::mem::take(&mut self.active);
        for record in live.into_values() {
            self.scene.destroy(record.handle());
        }
        for handle in self.pool.drain() {
            self.scene.destroy(handle);
        }
        self.current = None;
        info!("Streaming window shut down");
    }

    /// Live chunk indices in ascending order.
    #[must_use]
    pub fn active_indices(&self) -> Vec<ChunkIndex> {
        self.active.values().map(ChunkRecord::index).collect()
    }

    /// Record of a live chunk.
    #[must_use]
    pub fn record(&self, index: ChunkIndex) -> Option<&ChunkRecord> {
        self.active.get(&index.get())
    }

    /// Observer chunk the window is centred on.
    #[must_use]
    pub const fn current_index(&self) -> Option<ChunkIndex> {
        self.current
    }

    /// Number of live chunks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Whether no chunk is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Number of idle pooled handles.
    #[must_use]
    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    /// Lifecycle policy in use.
    #[must_use]
    pub const fn policy(&self) -> LifecyclePolicy {
        self.policy
    }

    /// Window radius in chunks.
    #[must_use]
    pub const fn render_distance(&self) -> u32 {
        self.render_distance
    }

    /// Width of each chunk.
    #[must_use]
    pub const fn chunk_width(&self) -> f64 {
        self.chunk_width
    }

    /// Running totals.
    #[must_use]
    pub const fn stats(&self) -> StreamingStats {
        self.stats
    }

    /// The chunk source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// The scene backend.
    #[must_use]
    pub const fn scene(&self) -> &F {
        &self.scene
    }

    /// Mutable access to the scene backend.
    pub fn scene_mut(&mut self) -> &mut F {
        &mut self.scene
    }
}

impl<S, F> std::fmt::Debug for StreamingWindow<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamingWindow")
            .field("policy", &self.policy)
            .field("render_distance", &self.render_distance)
            .field("current", &self.current)
            .field("live", &self.active.len())
            .field("pooled", &self.pool.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ChunkGeometry;
    use crate::source::Placement;
    use ahash::AHashMap;
    use proptest::prelude::*;
    use ridgeline_common::TerrainError;

    /// Scene backend that remembers every object it was asked to manage.
    #[derive(Debug, Default)]
    struct MockScene {
        objects: AHashMap<GeometryHandle, (Placement, bool)>,
        created: usize,
        destroyed: usize,
        fail_create: bool,
    }

    impl SceneFactory for MockScene {
        fn create(
            &mut self,
            placement: Placement,
            _geometry: &ChunkGeometry,
        ) -> TerrainResult<GeometryHandle> {
            if self.fail_create {
                return Err(TerrainError::Scene("out of meshes".into()));
            }
            let handle = GeometryHandle::next();
            self.objects.insert(handle, (placement, true));
            self.created += 1;
            Ok(handle)
        }

        fn reassign(
            &mut self,
            handle: GeometryHandle,
            placement: Placement,
            _geometry: &ChunkGeometry,
        ) -> TerrainResult<()> {
            let object = self
                .objects
                .get_mut(&handle)
                .ok_or_else(|| TerrainError::Scene(format!("unknown {handle}")))?;
            object.0 = placement;
            Ok(())
        }

        fn set_active(&mut self, handle: GeometryHandle, active: bool) {
            if let Some(object) = self.objects.get_mut(&handle) {
                object.1 = active;
            }
        }

        fn destroy(&mut self, handle: GeometryHandle) {
            self.objects.remove(&handle);
            self.destroyed += 1;
        }
    }

    fn config(policy: LifecyclePolicy) -> TerrainConfig {
        TerrainConfig {
            chunk_width: 10.0,
            points_per_chunk: 4,
            render_distance: 2,
            lifecycle: policy,
            ..TerrainConfig::with_seed(3)
        }
    }

    fn window(policy: LifecyclePolicy) -> StreamingWindow<ProfileSource, MockScene> {
        StreamingWindow::from_config(&config(policy), MockScene::default()).expect("valid config")
    }

    fn idx(i: i32) -> ChunkIndex {
        ChunkIndex::new(i).expect("in range")
    }

    fn indices(range: std::ops::RangeInclusive<i32>) -> Vec<ChunkIndex> {
        range.map(idx).collect()
    }

    #[test]
    fn test_initial_window() {
        let mut window = window(LifecyclePolicy::Destroy);
        assert!(window.is_empty());
        let delta = window.step(Some(5.0)).expect("step");
        assert_eq!(delta.spawned, indices(-2..=2));
        assert!(delta.removed.is_empty());
        assert_eq!(window.active_indices(), indices(-2..=2));
        assert_eq!(window.current_index(), Some(idx(0)));
    }

    #[test]
    fn test_scenario_shift_destroy() {
        let mut window = window(LifecyclePolicy::Destroy);
        window.step(Some(0.0)).expect("step");
        let kept: Vec<_> = (0..=2)
            .map(|i| window.record(idx(i)).expect("live").handle())
            .collect();

        let delta = window.step(Some(25.0)).expect("step");
        assert_eq!(delta.removed, indices(-2..=-1));
        assert_eq!(delta.spawned, indices(3..=4));
        assert_eq!(window.active_indices(), indices(0..=4));

        for (i, handle) in (0..=2).zip(kept) {
            assert_eq!(window.record(idx(i)).expect("live").handle(), handle);
        }
        assert_eq!(window.scene().destroyed, 2);
        assert_eq!(window.scene().objects.len(), 5);
        assert_eq!(window.pool_len(), 0);
    }

    #[test]
    fn test_unchanged_index_is_noop() {
        let mut window = window(LifecyclePolicy::Pool);
        window.step(Some(1.0)).expect("step");
        let before: Vec<_> = window.active.values().cloned().collect();
        let created = window.scene().created;

        for x in [2.0, 5.5, 9.99] {
            let delta = window.step(Some(x)).expect("step");
            assert!(delta.is_empty());
        }
        let after: Vec<_> = window.active.values().cloned().collect();
        assert_eq!(before, after);
        assert_eq!(window.scene().created, created);
        assert_eq!(window.stats().shifts, 1);
    }

    #[test]
    fn test_missing_observer_skips_tick() {
        let mut window = window(LifecyclePolicy::Destroy);
        let delta = window.step(None).expect("skipped tick is not an error");
        assert!(delta.is_empty());
        assert!(window.is_empty());
        assert_eq!(window.stats().skipped_ticks, 1);
    }

    #[test]
    fn test_invalid_position_rejected() {
        let mut window = window(LifecyclePolicy::Destroy);
        assert!(matches!(
            window.step(Some(f64::NAN)),
            Err(TerrainError::Coord(_))
        ));
        assert!(window.step(Some(1e300)).is_err());
        assert!(window.is_empty());
    }

    #[test]
    fn test_pool_reuses_recycled_handle() {
        let mut window = window(LifecyclePolicy::Pool);
        window.step(Some(0.0)).expect("step");
        let recycled = window.record(idx(-2)).expect("live").handle();

        window.step(Some(10.0)).expect("step");
        assert_eq!(window.active_indices(), indices(-1..=3));
        let reused = window.record(idx(3)).expect("live");
        assert_eq!(reused.handle(), recycled);
        assert!(reused.is_recycled());
        assert_eq!(window.scene().destroyed, 0);
        assert_eq!(window.scene().created, 5);
        assert_eq!(window.pool_len(), 0);

        let (placement, active) = window.scene().objects[&recycled];
        assert!(active);
        assert_eq!(placement.position.x, 30.0);
    }

    #[test]
    fn test_pool_grows_on_backtrack_then_drains() {
        let mut window = window(LifecyclePolicy::Pool);
        window.step(Some(0.0)).expect("step");
        // Teleport far away: every chunk is recycled, then all five reused.
        window.step(Some(1000.0)).expect("step");
        assert_eq!(window.active_indices(), indices(98..=102));
        assert_eq!(window.scene().created, 5);
        assert_eq!(window.pool_len(), 0);

        window.shutdown();
        assert!(window.scene().objects.is_empty());
        assert!(window.current_index().is_none());
    }

    #[test]
    fn test_scene_failure_propagates() {
        let mut window = window(LifecyclePolicy::Destroy);
        window.scene_mut().fail_create = true;
        assert!(matches!(
            window.step(Some(0.0)),
            Err(TerrainError::Scene(_))
        ));
        assert!(window.current_index().is_none());

        window.scene_mut().fail_create = false;
        window.step(Some(0.0)).expect("retry succeeds");
        assert_eq!(window.active_indices(), indices(-2..=2));
    }

    #[test]
    fn test_trigger_window_follows_crossings() {
        let mut window = window(LifecyclePolicy::Trigger);
        window.step(Some(0.0)).expect("step");
        assert_eq!(window.active_indices(), indices(-2..=2));

        for k in 1..=5 {
            // Walking into chunk k without polling changes nothing.
            assert!(window.step(Some(f64::from(k) * 10.0 + 1.0)).expect("step").is_empty());
            assert_eq!(window.crossed_forward(idx(k)).expect("spawn"), Some(idx(k + 2)));
            assert_eq!(window.crossed_backward(idx(k - 1)).expect("recycle"), Some(idx(k - 3)));
            assert_eq!(window.active_indices(), indices(k - 2..=k + 2));
        }
        assert_eq!(window.current_index(), Some(idx(5)));
        assert_eq!(window.scene().created, 6);
        assert_eq!(window.scene().destroyed, 0);
    }

    #[test]
    fn test_forward_trigger_fires_once() {
        let mut window = window(LifecyclePolicy::Trigger);
        window.step(Some(0.0)).expect("step");
        assert_eq!(window.crossed_forward(idx(1)).expect("spawn"), Some(idx(3)));
        assert_eq!(window.crossed_forward(idx(1)).expect("latched"), None);
        assert_eq!(window.len(), 6);
        assert_eq!(window.crossed_forward(idx(40)).expect("unloaded"), None);
    }

    fn trigger_window(radius: u32) -> StreamingWindow<ProfileSource, MockScene> {
        let cfg = TerrainConfig {
            render_distance: radius,
            ..config(LifecyclePolicy::Trigger)
        };
        StreamingWindow::from_config(&cfg, MockScene::default()).expect("valid config")
    }

    #[test]
    fn test_trigger_small_radius_keeps_window() {
        for radius in [0, 1] {
            let r = radius as i32;
            let mut window = trigger_window(radius);
            window.step(Some(0.0)).expect("step");
            assert_eq!(window.active_indices(), indices(-r..=r));

            for k in 1..=6 {
                assert_eq!(window.crossed_forward(idx(k)).expect("spawn"), Some(idx(k + r)));
                assert_eq!(
                    window.crossed_backward(idx(k - 1)).expect("recycle"),
                    Some(idx(k - 1 - r))
                );
                assert_eq!(window.active_indices(), indices(k - r..=k + r), "radius {radius}");
                assert_eq!(window.current_index(), Some(idx(k)));
                assert!(!window.record(idx(k)).expect("live").forward_armed());
            }
        }
    }

    #[test]
    fn test_trigger_rearms_after_rebuild() {
        let mut window = window(LifecyclePolicy::Trigger);
        window.step(Some(0.0)).expect("step");
        assert_eq!(window.crossed_forward(idx(1)).expect("spawn"), Some(idx(3)));
        assert!(!window.record(idx(1)).expect("live").forward_armed());

        window.resync(500.0).expect("resync");
        assert!(window.record(idx(1)).is_none());
        window.resync(5.0).expect("resync");

        let rebuilt = window.record(idx(1)).expect("live");
        assert!(rebuilt.forward_armed());
        assert!(rebuilt.is_recycled());
        assert_eq!(window.crossed_forward(idx(1)).expect("spawn"), Some(idx(3)));
    }

    #[test]
    fn test_failed_forward_spawn_can_retry() {
        let mut window = window(LifecyclePolicy::Trigger);
        window.step(Some(0.0)).expect("step");

        window.scene_mut().fail_create = true;
        assert!(matches!(
            window.crossed_forward(idx(1)),
            Err(TerrainError::Scene(_))
        ));
        assert!(window.record(idx(1)).expect("live").forward_armed());
        assert_eq!(window.current_index(), Some(idx(0)));
        assert_eq!(window.active_indices(), indices(-2..=2));

        window.scene_mut().fail_create = false;
        assert_eq!(window.crossed_forward(idx(1)).expect("retry"), Some(idx(3)));
        assert_eq!(window.current_index(), Some(idx(1)));
        assert_eq!(window.active_indices(), indices(-2..=3));
    }

    #[test]
    fn test_removed_record_is_deactivated() {
        let mut window = window(LifecyclePolicy::Pool);
        window.step(Some(0.0)).expect("step");
        let handle = window.record(idx(2)).expect("live").handle();

        let record = window.remove(idx(2)).expect("was live");
        assert!(!record.is_active());
        assert_eq!(record.handle(), handle);
        assert!(window.remove(idx(2)).is_none());
        assert_eq!(window.pool_len(), 1);
        assert!(!window.scene().objects[&handle].1);
    }

    #[test]
    fn test_trigger_desync_and_resync() {
        let mut window = window(LifecyclePolicy::Trigger);
        window.step(Some(0.0)).expect("step");

        // Teleport: no crossings fire, window stays behind.
        assert!(window.step(Some(500.0)).expect("step").is_empty());
        assert_eq!(window.active_indices(), indices(-2..=2));

        let delta = window.resync(500.0).expect("resync");
        assert_eq!(delta.removed, indices(-2..=2));
        assert_eq!(window.active_indices(), indices(48..=52));
        assert_eq!(window.scene().created, 5);
    }

    #[test]
    fn test_steps_profile_places_on_chain() {
        let cfg = TerrainConfig {
            profile: crate::config::TerrainProfile::Steps,
            ..config(LifecyclePolicy::Destroy)
        };
        let mut window =
            StreamingWindow::from_config(&cfg, MockScene::default()).expect("valid config");
        window.step(Some(0.0)).expect("step");
        let first = window.record(idx(-2)).expect("live").placement().position;
        let second = window.record(idx(-1)).expect("live").placement().position;
        assert!((second.x - first.x - 10.0).abs() < 1e-9);
        assert!(second.y > first.y);
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        let cfg = TerrainConfig {
            points_per_chunk: 1,
            ..config(LifecyclePolicy::Destroy)
        };
        assert!(StreamingWindow::from_config(&cfg, MockScene::default()).is_err());
    }

    proptest! {
        #[test]
        fn prop_window_invariant(
            path in proptest::collection::vec(-500.0f64..500.0, 1..40),
            pooled in any::<bool>(),
        ) {
            let policy = if pooled { LifecyclePolicy::Pool } else { LifecyclePolicy::Destroy };
            let mut window = window(policy);
            for x in path {
                window.step(Some(x)).expect("step");
                let center = ChunkIndex::from_world_x(x, 10.0).expect("finite");
                prop_assert_eq!(window.active_indices(), indices(center.get() - 2..=center.get() + 2));
                prop_assert!(window.active.values().all(ChunkRecord::is_active));
                prop_assert_eq!(window.scene().objects.len(), window.len() + window.pool_len());
            }
        }
    }
}
