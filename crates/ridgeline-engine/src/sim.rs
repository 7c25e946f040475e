//! Headless terrain simulation.
//!
//! Walks an observer across the terrain at a fixed timestep and drives the
//! streaming window, landmarks and world bounds the way a game loop would.

use ridgeline_common::{ChunkIndex, RidgelineResult, TerrainResult};
use ridgeline_terrain::{
    Landmarks, LifecyclePolicy, ProfileSource, StreamingStats, StreamingWindow, WindowDelta,
    WorldBounds,
};
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::scene::{RecordingScene, SceneStats};

/// Summary of a finished run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimReport {
    /// Ticks simulated
    pub ticks: u64,
    /// Observer x after the last tick
    pub final_x: f64,
    /// Chunks live before shutdown
    pub live_chunks: usize,
    /// Idle pooled objects before shutdown
    pub pooled: usize,
    /// Streaming counters
    pub streaming: StreamingStats,
    /// Scene backend counters
    pub scene: SceneStats,
}

/// Fixed-timestep observer simulation.
#[derive(Debug)]
pub struct Simulation {
    window: StreamingWindow<ProfileSource, RecordingScene>,
    landmarks: Landmarks,
    bounds: WorldBounds,
    observer_x: f64,
    speed: f64,
    dt: f64,
    ticks: u64,
    tick_rate: u32,
    elapsed: u64,
}

impl Simulation {
    /// Builds the terrain pipeline from a validated engine config.
    ///
    /// Fails if the terrain configuration is invalid.
    pub fn new(config: &EngineConfig) -> RidgelineResult<Self> {
        let window = StreamingWindow::from_config(&config.terrain, RecordingScene::new())?;
        Ok(Self {
            window,
            landmarks: Landmarks::new(config.landmarks),
            bounds: config.bounds,
            observer_x: config.bounds.clamp(config.start_x),
            speed: config.observer_speed,
            dt: config.tick_dt(),
            ticks: config.ticks,
            tick_rate: config.tick_rate.max(1),
            elapsed: 0,
        })
    }

    /// Advances the observer one timestep and updates the world around it.
    pub fn tick(&mut self) -> RidgelineResult<WindowDelta> {
        let previous = self.observer_x;
        self.observer_x = self.bounds.clamp(previous + self.speed * self.dt);
        self.advance(previous, Some(self.observer_x))
    }

    /// Runs one tick with an explicit observer position.
    ///
    /// `None` models an observer that is missing for this tick.
    pub fn tick_with(&mut self, observer_x: Option<f64>) -> RidgelineResult<WindowDelta> {
        let previous = self.observer_x;
        if let Some(x) = observer_x {
            self.observer_x = self.bounds.clamp(x);
        }
        self.advance(previous, observer_x.map(|_| self.observer_x))
    }

    fn advance(&mut self, previous: f64, observer: Option<f64>) -> RidgelineResult<WindowDelta> {
        self.elapsed += 1;

        let Some(x) = observer else {
            return Ok(self.window.step(None)?);
        };

        self.landmarks.update(x, self.window.scene_mut())?;

        if self.window.policy() == LifecyclePolicy::Trigger && self.window.current_index().is_some()
        {
            self.fire_triggers(previous, x)?;
        }
        let delta = self.window.step(Some(x))?;

        if self.elapsed % u64::from(self.tick_rate) == 0 {
            debug!(
                "t={}s observer x={x:.1}, {} live chunks, {} pooled",
                self.elapsed / u64::from(self.tick_rate),
                self.window.len(),
                self.window.pool_len()
            );
        }
        Ok(delta)
    }

    /// Emits the boundary events a physics trigger would raise when the
    /// observer moves from `from` to `to`.
    ///
    /// Walking left has no triggers; the window is resynced instead.
    fn fire_triggers(&mut self, from: f64, to: f64) -> TerrainResult<()> {
        let width = self.window.chunk_width();
        let start = ChunkIndex::from_world_x(from, width)?;
        let end = ChunkIndex::from_world_x(to, width)?;

        if end < start {
            self.window.resync(to)?;
            return Ok(());
        }
        for k in start.get() + 1..=end.get() {
            let entered = ChunkIndex::new(k)?;
            self.window.crossed_forward(entered)?;
            self.window.crossed_backward(entered.offset(-1)?)?;
        }
        Ok(())
    }

    /// Runs every configured tick, then tears the scene down.
    pub fn run(mut self) -> RidgelineResult<SimReport> {
        info!(
            "Simulating {} ticks at {} Hz, observer speed {}",
            self.ticks, self.tick_rate, self.speed
        );
        for _ in 0..self.ticks {
            self.tick()?;
        }

        let report = SimReport {
            ticks: self.elapsed,
            final_x: self.observer_x,
            live_chunks: self.window.len(),
            pooled: self.window.pool_len(),
            streaming: self.window.stats(),
            scene: self.window.scene().stats(),
        };
        self.shutdown();
        Ok(report)
    }

    /// Destroys every chunk and landmark.
    pub fn shutdown(&mut self) {
        self.landmarks.teardown(self.window.scene_mut());
        self.window.shutdown();
    }

    /// Current observer x.
    #[must_use]
    pub const fn observer_x(&self) -> f64 {
        self.observer_x
    }

    /// The streaming window.
    #[must_use]
    pub const fn window(&self) -> &StreamingWindow<ProfileSource, RecordingScene> {
        &self.window
    }

    /// Spawn landmarks.
    #[must_use]
    pub const fn landmarks(&self) -> &Landmarks {
        &self.landmarks
    }
}
