use wasm_bindgen::prelude::*;

use crate::rigid_body_system::TickStats;

/// Snapshot of the last committed step (zeros while perf is disabled)
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) bodies: u32,
    pub(super) candidate_pairs: u32,
    pub(super) static_pairs_skipped: u32,
    pub(super) collisions: u32,
    /// Ticks rejected since perf was enabled
    pub(super) rejected_steps: u32,
}

impl PerfStats {
    pub(crate) fn record(&mut self, stats: &TickStats, step_ms: f64) {
        self.step_ms = step_ms;
        self.bodies = stats.bodies;
        self.candidate_pairs = stats.candidate_pairs;
        self.static_pairs_skipped = stats.static_pairs_skipped;
        self.collisions = stats.collisions;
    }

    pub(crate) fn record_rejected(&mut self) {
        self.rejected_steps = self.rejected_steps.saturating_add(1);
    }

    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn bodies(&self) -> u32 { self.bodies }
    #[wasm_bindgen(getter)]
    pub fn candidate_pairs(&self) -> u32 { self.candidate_pairs }
    #[wasm_bindgen(getter)]
    pub fn static_pairs_skipped(&self) -> u32 { self.static_pairs_skipped }
    #[wasm_bindgen(getter)]
    pub fn collisions(&self) -> u32 { self.collisions }
    #[wasm_bindgen(getter)]
    pub fn rejected_steps(&self) -> u32 { self.rejected_steps }
}
