//! Span snapshots and the unit-scaling formatter.
//!
//! A span is rendered in the largest unit that keeps its magnitude at or
//! above one: whole nanoseconds below 1 µs, then fractional microseconds,
//! milliseconds and seconds. Seconds is the catch-all with no upper bound.
//! Exact boundary values promote to the next unit (1_000 ns formats as
//! microseconds).

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Display unit selected for a span by magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
}

impl TimeUnit {
    /// Short symbol used in formatted output.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Nanoseconds => "ns",
            Self::Microseconds => "µs",
            Self::Milliseconds => "ms",
            Self::Seconds => "s",
        }
    }

    /// Full unit name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nanoseconds => "nanoseconds",
            Self::Microseconds => "microseconds",
            Self::Milliseconds => "milliseconds",
            Self::Seconds => "seconds",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A scaled magnitude/unit pair, for consumers that want the numbers rather
/// than the formatted string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub value: f64,
    pub unit: TimeUnit,
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            TimeUnit::Nanoseconds => write!(f, "{} {}", self.value as u128, self.unit),
            _ => write!(f, "{:.3} {}", self.value, self.unit),
        }
    }
}

/// An immutable, non-negative span at nanosecond granularity.
///
/// Snapshot of the interval between two instants, taken by
/// [`Stopwatch::elapsed`](crate::Stopwatch::elapsed) or built directly from a
/// raw span. It never updates after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Elapsed {
    span: Duration,
}

impl Elapsed {
    pub const ZERO: Self = Self {
        span: Duration::ZERO,
    };

    /// Wrap a raw span.
    #[must_use]
    pub const fn from_span(span: Duration) -> Self {
        Self { span }
    }

    /// Wrap a raw nanosecond count.
    #[must_use]
    pub const fn from_nanos(nanos: u64) -> Self {
        Self {
            span: Duration::from_nanos(nanos),
        }
    }

    /// The underlying span.
    #[must_use]
    pub const fn as_span(self) -> Duration {
        self.span
    }

    /// Total nanoseconds in the span.
    #[must_use]
    pub const fn as_nanos(self) -> u128 {
        self.span.as_nanos()
    }

    /// The display unit selected for this span's magnitude.
    #[must_use]
    pub const fn unit(self) -> TimeUnit {
        let nanos = self.span.as_nanos();
        if nanos < NANOS_PER_MICRO {
            TimeUnit::Nanoseconds
        } else if nanos < NANOS_PER_MILLI {
            TimeUnit::Microseconds
        } else if nanos < NANOS_PER_SEC {
            TimeUnit::Milliseconds
        } else {
            TimeUnit::Seconds
        }
    }

    /// Rescale to the selected unit.
    ///
    /// The nanosecond tier keeps an integer magnitude; the other tiers carry
    /// the sub-unit remainder as a fraction.
    #[must_use]
    pub fn scaled(self) -> Reading {
        let nanos = self.span.as_nanos();
        let unit = self.unit();
        let value = match unit {
            TimeUnit::Nanoseconds => nanos as f64,
            TimeUnit::Microseconds => nanos as f64 / NANOS_PER_MICRO as f64,
            TimeUnit::Milliseconds => nanos as f64 / NANOS_PER_MILLI as f64,
            TimeUnit::Seconds => nanos as f64 / NANOS_PER_SEC as f64,
        };
        Reading { value, unit }
    }
}

impl From<Duration> for Elapsed {
    fn from(span: Duration) -> Self {
        Self::from_span(span)
    }
}

impl From<Elapsed> for Duration {
    fn from(elapsed: Elapsed) -> Self {
        elapsed.span
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.scaled())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_selection_at_boundaries() {
        assert_eq!(Elapsed::from_nanos(0).unit(), TimeUnit::Nanoseconds);
        assert_eq!(Elapsed::from_nanos(999).unit(), TimeUnit::Nanoseconds);
        assert_eq!(Elapsed::from_nanos(1_000).unit(), TimeUnit::Microseconds);
        assert_eq!(Elapsed::from_nanos(999_999).unit(), TimeUnit::Microseconds);
        assert_eq!(
            Elapsed::from_nanos(1_000_000).unit(),
            TimeUnit::Milliseconds
        );
        assert_eq!(
            Elapsed::from_nanos(999_999_999).unit(),
            TimeUnit::Milliseconds
        );
        assert_eq!(Elapsed::from_nanos(1_000_000_000).unit(), TimeUnit::Seconds);
    }

    #[test]
    fn test_seconds_tier_is_unbounded() {
        let huge = Elapsed::from_span(Duration::from_secs(100_000));
        assert_eq!(huge.unit(), TimeUnit::Seconds);
        let reading = huge.scaled();
        assert!((reading.value - 100_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_scaled_magnitudes() {
        let reading = Elapsed::from_nanos(500).scaled();
        assert_eq!(reading.unit, TimeUnit::Nanoseconds);
        assert!((reading.value - 500.0).abs() < f64::EPSILON);

        let reading = Elapsed::from_nanos(2_500).scaled();
        assert_eq!(reading.unit, TimeUnit::Microseconds);
        assert!((reading.value - 2.5).abs() < f64::EPSILON);

        let reading = Elapsed::from_nanos(3_500_000).scaled();
        assert_eq!(reading.unit, TimeUnit::Milliseconds);
        assert!((reading.value - 3.5).abs() < f64::EPSILON);

        let reading = Elapsed::from_nanos(1_500_000_000).scaled();
        assert_eq!(reading.unit, TimeUnit::Seconds);
        assert!((reading.value - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_display_formatting() {
        assert_eq!(Elapsed::from_nanos(0).to_string(), "0 ns");
        assert_eq!(Elapsed::from_nanos(500).to_string(), "500 ns");
        assert_eq!(Elapsed::from_nanos(2_500).to_string(), "2.500 µs");
        assert_eq!(Elapsed::from_nanos(3_500_000).to_string(), "3.500 ms");
        assert_eq!(Elapsed::from_nanos(1_500_000_000).to_string(), "1.500 s");
    }

    #[test]
    fn test_reading_serializes_value_and_unit() {
        let reading = Elapsed::from_nanos(2_500).scaled();
        let json = serde_json::to_string(&reading).unwrap();
        assert_eq!(json, r#"{"value":2.5,"unit":"microseconds"}"#);
    }

    #[test]
    fn test_span_round_trip() {
        let span = Duration::from_nanos(123_456_789);
        let elapsed = Elapsed::from_span(span);
        assert_eq!(Duration::from(elapsed), span);
        assert_eq!(elapsed.as_nanos(), 123_456_789);
    }
}
