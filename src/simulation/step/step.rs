use crate::domain::PhysicsError;
use crate::rigid_body_system::TickStats;

use super::{SimulationCore, StepTimer};

pub(super) fn step(sim: &mut SimulationCore, dt: f32) -> Result<TickStats, PhysicsError> {
    let timer = StepTimer::start(sim.perf_enabled);

    let stats = match sim.controller.update(dt) {
        Ok(stats) => stats,
        Err(err) => {
            if sim.perf_enabled {
                sim.perf_stats.record_rejected();
            }
            return Err(err);
        }
    };

    if let Some(timer) = timer {
        timer.commit(&stats, &mut sim.perf_stats);
    }

    sim.frame += 1;
    Ok(stats)
}
