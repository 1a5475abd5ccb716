use log::{log_enabled, Level};
use std::time::Instant;

/// Trace-level scoped timer wrapped around the phases of a simulation tick.
pub struct ScopedTimer {
    label: &'static str,
    start: Instant,
}

impl ScopedTimer {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
        }
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        if log_enabled!(Level::Trace) {
            log::trace!("{} took {} µs", self.label, self.start.elapsed().as_micros());
        }
    }
}
