use std::time::Instant;

use crate::elapsed::Elapsed;

/// Simple stopwatch helper for wall-clock measurements.
///
/// Each `Stopwatch` is one timing session: it captures a monotonic start
/// instant at construction and reports the span to "now" on demand. It is
/// deliberately neither `Clone` nor `Copy` so a session's identity cannot be
/// duplicated by value; share it by reference instead.
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    /// Start a new timing session at the current instant.
    #[must_use]
    pub fn start_new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Discard the current session and restart from the current instant.
    pub fn reset(&mut self) {
        self.start = Instant::now();
    }

    /// Snapshot the span from the session start to now.
    ///
    /// Does not mutate the start point; successive calls without an
    /// intervening [`reset`](Self::reset) yield non-decreasing spans.
    #[must_use]
    pub fn elapsed(&self) -> Elapsed {
        Elapsed::from_span(self.start.elapsed())
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::start_new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_elapsed_is_non_decreasing() {
        let watch = Stopwatch::start_new();
        let first = watch.elapsed();
        let second = watch.elapsed();
        assert!(second.as_span() >= first.as_span());
    }

    #[test]
    fn test_reset_restarts_session() {
        let mut watch = Stopwatch::start_new();
        std::thread::sleep(Duration::from_millis(10));
        watch.reset();
        let elapsed = watch.elapsed();
        assert!(elapsed.as_span() < Duration::from_millis(1));
    }

    #[test]
    fn test_concurrent_reads_share_one_session() {
        let watch = Stopwatch::start_new();
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    s.spawn(|| {
                        let first = watch.elapsed();
                        let second = watch.elapsed();
                        assert!(second.as_span() >= first.as_span());
                        second
                    })
                })
                .collect();
            for handle in handles {
                let elapsed = handle.join().unwrap();
                assert!(elapsed.as_span() < Duration::from_secs(1));
            }
        });
    }
}
