use wasm_bindgen::prelude::*;

use crate::core::{Rect, Vec2};
use crate::domain::{BodySettings, PhysicsSettings, SurfaceSettings};
use crate::rigid_body_system::BodyHandle;

use super::perf_stats::PerfStats;
use super::SimulationCore;

fn to_js<E: std::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct World {
    core: SimulationCore,
}

#[wasm_bindgen]
impl World {
    /// Create an empty world
    #[wasm_bindgen(constructor)]
    pub fn new(gravity: f32, terminal_velocity: f32) -> Result<World, JsValue> {
        let core = SimulationCore::new(PhysicsSettings::new(gravity, terminal_velocity)).map_err(to_js)?;
        Ok(Self { core })
    }

    /// Create a world from a scene bundle (JSON)
    #[wasm_bindgen(js_name = fromSceneJson)]
    pub fn from_scene_json(json: String) -> Result<World, JsValue> {
        let core = SimulationCore::from_scene_json(&json).map_err(to_js)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn gravity(&self) -> f32 { self.core.controller().gravity() }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize { self.core.body_count() }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn set_gravity(&mut self, gravity: f32) -> Result<(), JsValue> {
        self.core.set_gravity(gravity).map_err(to_js)
    }

    pub fn set_terminal_velocity(&mut self, terminal_velocity: f32) -> Result<(), JsValue> {
        self.core.set_terminal_velocity(terminal_velocity).map_err(to_js)
    }

    // === BODY API ===

    /// Add a plain body. `settings_json` may be empty for defaults.
    /// Returns the body handle.
    pub fn add_body(&mut self, x: f32, y: f32, w: f32, h: f32, settings_json: String) -> Result<u32, JsValue> {
        let settings = if settings_json.trim().is_empty() {
            BodySettings::default()
        } else {
            BodySettings::from_json(&settings_json).map_err(to_js)?
        };
        let handle = self.core.spawn_body(Rect::new(x, y, w, h), &settings).map_err(to_js)?;
        Ok(handle.raw())
    }

    /// Add a surface body. `settings_json` may be empty for defaults.
    /// Returns the body handle.
    pub fn add_surface(&mut self, x: f32, y: f32, w: f32, h: f32, settings_json: String) -> Result<u32, JsValue> {
        let settings = if settings_json.trim().is_empty() {
            SurfaceSettings::default()
        } else {
            SurfaceSettings::from_json(&settings_json).map_err(to_js)?
        };
        let handle = self.core.spawn_surface(Rect::new(x, y, w, h), &settings).map_err(to_js)?;
        Ok(handle.raw())
    }

    /// Remove a body by handle
    pub fn remove_body(&mut self, handle: u32) -> bool {
        self.core.remove_body(BodyHandle::from_raw(handle))
    }

    pub fn apply_force(&mut self, handle: u32, fx: f32, fy: f32) -> bool {
        self.core
            .controller_mut()
            .apply_force(BodyHandle::from_raw(handle), Vec2::new(fx, fy))
    }

    pub fn set_velocity(&mut self, handle: u32, vx: f32, vy: f32) -> bool {
        match self.core.controller_mut().body_mut(BodyHandle::from_raw(handle)) {
            Some(body) => {
                body.set_velocity(Vec2::new(vx, vy));
                true
            }
            None => false,
        }
    }

    /// Step the simulation forward by `dt`
    pub fn step(&mut self, dt: f32) -> Result<(), JsValue> {
        self.core.step(dt).map_err(to_js)?;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.core.reset();
    }

    // === READ-BACK FOR RENDERING ===

    pub fn body_x(&self, handle: u32) -> Option<f32> {
        self.core.rect(BodyHandle::from_raw(handle)).map(|r| r.x)
    }

    pub fn body_y(&self, handle: u32) -> Option<f32> {
        self.core.rect(BodyHandle::from_raw(handle)).map(|r| r.y)
    }

    pub fn body_w(&self, handle: u32) -> Option<f32> {
        self.core.rect(BodyHandle::from_raw(handle)).map(|r| r.w)
    }

    pub fn body_h(&self, handle: u32) -> Option<f32> {
        self.core.rect(BodyHandle::from_raw(handle)).map(|r| r.h)
    }

    pub fn velocity_x(&self, handle: u32) -> Option<f32> {
        self.core.velocity(BodyHandle::from_raw(handle)).map(|v| v.x)
    }

    pub fn velocity_y(&self, handle: u32) -> Option<f32> {
        self.core.velocity(BodyHandle::from_raw(handle)).map(|v| v.y)
    }
}
