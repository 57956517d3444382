//! Platformer Physics - discrete-time 2D rigid-body simulation
//!
//! Gravity, velocity integration, edge-crossing AABB collision detection and
//! impact resolution with friction and restitution against inclined surfaces.
//!
//! Architecture:
//! - core/          - Vec2 and Rect value math
//! - domain/        - Settings records, scene bundles, errors
//! - systems/       - Bodies, surfaces and the physics controller
//! - simulation/    - Orchestration, perf metrics and the wasm facade

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

// Short paths for the two physics systems
pub use systems::rigid_body;
pub use systems::rigid_body_system;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"Platformer physics initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::{Rect, Vec2};
pub use domain::{
    BodySettings, CollisionBox, ConfigError, NormalModel, PhysicsError, PhysicsSettings, SceneBody,
    SceneBundle, Side, SurfaceSettings,
};
pub use rigid_body::{resolve_impact, Body, BodyKind, SurfaceProps};
pub use rigid_body_system::{BodyHandle, PhysicsController, TickStats};
pub use simulation::{PerfStats, SimulationCore, World};
