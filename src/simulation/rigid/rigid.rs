use crate::core::Rect;
use crate::domain::{BodySettings, ConfigError, SurfaceSettings};
use crate::rigid_body::Body;
use crate::rigid_body_system::BodyHandle;

use super::SimulationCore;

pub(super) fn spawn_body(
    sim: &mut SimulationCore,
    rect: Rect,
    settings: &BodySettings,
) -> Result<BodyHandle, ConfigError> {
    let body = Body::new(settings, rect)?;
    Ok(sim.controller.add_body(body))
}

pub(super) fn spawn_surface(
    sim: &mut SimulationCore,
    rect: Rect,
    settings: &SurfaceSettings,
) -> Result<BodyHandle, ConfigError> {
    let body = Body::surface(settings, rect)?;
    Ok(sim.controller.add_body(body))
}

pub(super) fn remove_body(sim: &mut SimulationCore, handle: BodyHandle) -> bool {
    sim.controller.remove_body(handle).is_some()
}

pub(super) fn body_count(sim: &SimulationCore) -> usize {
    sim.controller.len()
}
