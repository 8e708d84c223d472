use std::collections::HashMap;

use parking_lot::RwLock;

use crate::elapsed::Elapsed;
use crate::stopwatch::Stopwatch;

/// Records named timing measurements in execution order.
#[derive(Default)]
pub struct Profiler {
    phases: Vec<PhaseTiming>,
}

impl Profiler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Time a closure and record it under `name`, returning its output.
    pub fn record_phase<F, T>(&mut self, name: impl Into<String>, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        let name = name.into();
        let watch = Stopwatch::start_new();
        let output = f();
        self.phases.push(PhaseTiming {
            name,
            elapsed: watch.elapsed(),
        });
        output
    }

    /// Record an already-measured phase.
    pub fn push_phase(&mut self, name: impl Into<String>, elapsed: Elapsed) {
        self.phases.push(PhaseTiming {
            name: name.into(),
            elapsed,
        });
    }

    #[must_use]
    pub fn phases(&self) -> &[PhaseTiming] {
        &self.phases
    }

    /// Sum of all recorded phases.
    #[must_use]
    pub fn total(&self) -> Elapsed {
        Elapsed::from_span(self.phases.iter().map(|p| p.elapsed.as_span()).sum())
    }
}

#[derive(Clone, Debug)]
pub struct PhaseTiming {
    pub name: String,
    pub elapsed: Elapsed,
}

/// Aggregated statistics for one measurement label.
#[derive(Debug, Clone)]
pub struct PhaseStats {
    pub name: String,
    pub count: u64,
    pub total: Elapsed,
    pub min: Elapsed,
    pub max: Elapsed,
}

impl PhaseStats {
    #[must_use]
    pub fn new(name: String) -> Self {
        Self {
            name,
            count: 0,
            total: Elapsed::ZERO,
            min: Elapsed::ZERO,
            max: Elapsed::ZERO,
        }
    }

    pub fn record(&mut self, elapsed: Elapsed) {
        self.count += 1;
        self.total = Elapsed::from_span(self.total.as_span() + elapsed.as_span());
        if elapsed > self.max {
            self.max = elapsed;
        }
        if self.min == Elapsed::ZERO || elapsed < self.min {
            self.min = elapsed;
        }
    }

    /// Mean span per recorded measurement.
    #[must_use]
    pub fn avg(&self) -> Elapsed {
        if self.count == 0 {
            return Elapsed::ZERO;
        }
        let avg_nanos = self.total.as_nanos() / u128::from(self.count);
        Elapsed::from_nanos(avg_nanos.min(u128::from(u64::MAX)) as u64)
    }
}

/// Thread-safe label → stats map for aggregating measurements across threads.
#[derive(Default)]
pub struct StatsRegistry {
    stats: RwLock<HashMap<String, PhaseStats>>,
}

impl StatsRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, name: &str, elapsed: Elapsed) {
        let mut stats = self.stats.write();
        let entry = stats
            .entry(name.to_string())
            .or_insert_with(|| PhaseStats::new(name.to_string()));
        entry.record(elapsed);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<PhaseStats> {
        self.stats.read().get(name).cloned()
    }

    #[must_use]
    pub fn all(&self) -> Vec<PhaseStats> {
        self.stats.read().values().cloned().collect()
    }

    pub fn clear(&self) {
        self.stats.write().clear();
    }
}
