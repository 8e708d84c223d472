//! Elapsed-time measurement utilities.
//!
//! [`Stopwatch`] tracks a single timing session against the monotonic clock;
//! [`Elapsed`] is the immutable span snapshot it hands back, with a
//! unit-scaling formatter that picks nanoseconds, microseconds, milliseconds
//! or seconds by magnitude. [`Benchmark`], [`Profiler`] and [`TimedScope`]
//! build on the pair for repeated measurement, named phase timing and
//! log-on-drop scopes.

pub mod bench;
pub mod elapsed;
pub mod logger;
pub mod profiler;
pub mod scope;
pub mod stopwatch;

pub use bench::{Benchmark, BenchmarkResult};
pub use elapsed::{Elapsed, Reading, TimeUnit};
pub use logger::{init_logging, init_logging_with};
pub use profiler::{PhaseStats, PhaseTiming, Profiler, StatsRegistry};
pub use scope::TimedScope;
pub use stopwatch::Stopwatch;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
