use crate::domain::ConfigError;

use super::perf_stats::PerfStats;
use super::SimulationCore;

pub(super) fn enable_perf_metrics(sim: &mut SimulationCore, enabled: bool) {
    if enabled && !sim.perf_enabled {
        sim.perf_stats.reset();
    }
    sim.perf_enabled = enabled;
}

pub(super) fn get_perf_stats(sim: &SimulationCore) -> PerfStats {
    if sim.perf_enabled {
        sim.perf_stats.clone()
    } else {
        PerfStats::default()
    }
}

pub(super) fn set_gravity(sim: &mut SimulationCore, gravity: f32) -> Result<(), ConfigError> {
    sim.controller.set_gravity(gravity)
}

pub(super) fn set_terminal_velocity(sim: &mut SimulationCore, terminal_velocity: f32) -> Result<(), ConfigError> {
    sim.controller.set_terminal_velocity(terminal_velocity)
}
