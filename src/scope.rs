use tracing::debug;

use crate::elapsed::Elapsed;
use crate::stopwatch::Stopwatch;

/// Scope guard that logs its elapsed time when dropped.
///
/// Emits a `debug` event with the label and the unit-scaled span. Call
/// [`finish`](Self::finish) instead to take the measurement as a value and
/// skip the log line.
pub struct TimedScope {
    label: &'static str,
    watch: Stopwatch,
    armed: bool,
}

impl TimedScope {
    #[must_use]
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            watch: Stopwatch::start_new(),
            armed: true,
        }
    }

    /// Consume the guard and return the elapsed span without logging.
    #[must_use]
    pub fn finish(mut self) -> Elapsed {
        self.armed = false;
        self.watch.elapsed()
    }
}

impl Drop for TimedScope {
    fn drop(&mut self) {
        if self.armed {
            debug!(label = self.label, elapsed = %self.watch.elapsed(), "scope finished");
        }
    }
}
