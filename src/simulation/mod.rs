//! Simulation - orchestration around the physics controller
//!
//! `SimulationCore` owns the controller plus the bookkeeping a host loop
//! wants: a frame counter and opt-in per-step perf metrics. `World` is the
//! `wasm_bindgen` facade over it.
//!
//! Single-threaded: the host calls `step` once per frame from its main loop.

use crate::core::{Rect, Vec2};
use crate::domain::{BodySettings, ConfigError, PhysicsError, PhysicsSettings, SceneBundle, SurfaceSettings};
use crate::rigid_body::Body;
use crate::rigid_body_system::{BodyHandle, PhysicsController, TickStats};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "rigid/rigid.rs"]
mod rigid;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::World;
pub use perf_stats::PerfStats;

use perf_timer::StepTimer;

/// The simulation
pub struct SimulationCore {
    controller: PhysicsController,

    // State
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SimulationCore {
    /// Create an empty simulation
    pub fn new(settings: PhysicsSettings) -> Result<Self, ConfigError> {
        init::create_simulation_core(settings)
    }

    /// Create a simulation populated from a scene bundle
    pub fn from_scene(bundle: &SceneBundle) -> Result<Self, ConfigError> {
        init::create_from_scene(bundle)
    }

    pub fn from_scene_json(json: &str) -> Result<Self, ConfigError> {
        let bundle = SceneBundle::from_json(json)?;
        init::create_from_scene(&bundle)
    }

    pub fn controller(&self) -> &PhysicsController { &self.controller }

    pub fn controller_mut(&mut self) -> &mut PhysicsController { &mut self.controller }

    /// Committed steps since creation or the last reset
    pub fn frame(&self) -> u64 { self.frame }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    pub fn set_gravity(&mut self, gravity: f32) -> Result<(), ConfigError> {
        settings::set_gravity(self, gravity)
    }

    pub fn set_terminal_velocity(&mut self, terminal_velocity: f32) -> Result<(), ConfigError> {
        settings::set_terminal_velocity(self, terminal_velocity)
    }

    // === BODY API ===

    /// Register a plain body; it is simulated after everything registered before it
    pub fn spawn_body(&mut self, rect: Rect, settings: &BodySettings) -> Result<BodyHandle, ConfigError> {
        rigid::spawn_body(self, rect, settings)
    }

    /// Register a surface body
    pub fn spawn_surface(&mut self, rect: Rect, settings: &SurfaceSettings) -> Result<BodyHandle, ConfigError> {
        rigid::spawn_surface(self, rect, settings)
    }

    /// Despawn a body. Returns false for unknown handles.
    pub fn remove_body(&mut self, handle: BodyHandle) -> bool {
        rigid::remove_body(self, handle)
    }

    pub fn body_count(&self) -> usize {
        rigid::body_count(self)
    }

    pub fn body(&self, handle: BodyHandle) -> Option<&Body> {
        self.controller.body(handle)
    }

    pub fn rect(&self, handle: BodyHandle) -> Option<Rect> {
        self.controller.rect(handle)
    }

    pub fn velocity(&self, handle: BodyHandle) -> Option<Vec2> {
        self.controller.velocity(handle)
    }

    /// Step the simulation forward by `dt`.
    ///
    /// On error nothing moved and the frame counter is unchanged.
    pub fn step(&mut self, dt: f32) -> Result<TickStats, PhysicsError> {
        step::step(self, dt)
    }

    /// Put every body back at its spawn state and restart the frame count
    pub fn reset(&mut self) {
        self.controller.reset();
        self.frame = 0;
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
