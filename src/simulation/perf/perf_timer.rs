use crate::rigid_body_system::TickStats;

use super::perf_stats::PerfStats;

/// Wall clock in milliseconds: `Date.now()` in the browser, a process-local
/// monotonic clock natively.
#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

/// Times one controller tick and files the result into `PerfStats`.
pub(crate) struct StepTimer {
    started_ms: f64,
}

impl StepTimer {
    /// `None` while perf metrics are off, so disabled runs never read the clock.
    pub(crate) fn start(enabled: bool) -> Option<Self> {
        enabled.then(|| StepTimer { started_ms: now_ms() })
    }

    /// Record a committed tick. `Date.now()` may step backwards, hence the floor.
    pub(crate) fn commit(self, stats: &TickStats, perf: &mut PerfStats) {
        let elapsed = (now_ms() - self.started_ms).max(0.0);
        perf.record(stats, elapsed);
    }
}
