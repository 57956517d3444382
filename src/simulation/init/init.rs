use crate::domain::{ConfigError, PhysicsSettings, SceneBody, SceneBundle};
use crate::rigid_body::Body;
use crate::rigid_body_system::PhysicsController;

use super::perf_stats::PerfStats;
use super::SimulationCore;

pub(super) fn create_simulation_core(settings: PhysicsSettings) -> Result<SimulationCore, ConfigError> {
    Ok(SimulationCore {
        controller: PhysicsController::new(settings)?,
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    })
}

/// Build a simulation from a scene bundle, registering bodies in file order.
pub(super) fn create_from_scene(bundle: &SceneBundle) -> Result<SimulationCore, ConfigError> {
    bundle.validate()?;
    let mut core = create_simulation_core(bundle.physics)?;
    let bodies = bundle
        .bodies
        .iter()
        .map(|entry| match entry {
            SceneBody::Body { rect, settings } => Body::new(settings, *rect),
            SceneBody::Surface { rect, settings } => Body::surface(settings, *rect),
        })
        .collect::<Result<Vec<_>, _>>()?;
    let handles = core.controller.add_bodies(bodies);
    log::debug!("scene loaded with {} bodies", handles.len());
    Ok(core)
}
