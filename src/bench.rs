use std::fmt;
use std::time::Duration;

use crate::elapsed::Elapsed;
use crate::stopwatch::Stopwatch;

/// A simple benchmarking utility for measuring code performance.
pub struct Benchmark {
    name: String,
    iterations: usize,
    samples: Vec<Elapsed>,
}

impl Benchmark {
    pub fn new(name: impl Into<String>, iterations: usize) -> Self {
        Self {
            name: name.into(),
            iterations,
            samples: Vec::with_capacity(iterations),
        }
    }

    /// Run a benchmark with the given function.
    pub fn run<F, T>(&mut self, mut f: F) -> BenchmarkResult
    where
        F: FnMut() -> T,
    {
        self.samples.clear();

        // Warmup
        for _ in 0..std::cmp::min(self.iterations / 10, 10) {
            let _ = f();
        }

        // Actual measurements
        for _ in 0..self.iterations {
            let watch = Stopwatch::start_new();
            let _ = f();
            self.samples.push(watch.elapsed());
        }

        BenchmarkResult {
            name: self.name.clone(),
            iterations: self.iterations,
            samples: self.samples.clone(),
        }
    }
}

/// Result of a benchmark run.
#[derive(Clone)]
pub struct BenchmarkResult {
    pub name: String,
    pub iterations: usize,
    pub samples: Vec<Elapsed>,
}

impl BenchmarkResult {
    #[must_use]
    pub fn mean(&self) -> Elapsed {
        let total: Duration = self.samples.iter().map(|s| s.as_span()).sum();
        Elapsed::from_span(total / self.iterations as u32)
    }

    #[must_use]
    pub fn median(&self) -> Elapsed {
        let mut sorted = self.samples.clone();
        sorted.sort();
        sorted[sorted.len() / 2]
    }

    #[must_use]
    pub fn min(&self) -> Elapsed {
        self.samples.iter().min().copied().unwrap_or(Elapsed::ZERO)
    }

    #[must_use]
    pub fn max(&self) -> Elapsed {
        self.samples.iter().max().copied().unwrap_or(Elapsed::ZERO)
    }

    #[must_use]
    pub fn std_dev(&self) -> Elapsed {
        let mean = self.mean().as_span().as_secs_f64();
        let variance: f64 = self
            .samples
            .iter()
            .map(|&sample| {
                let diff = sample.as_span().as_secs_f64() - mean;
                diff * diff
            })
            .sum::<f64>()
            / self.iterations as f64;
        Elapsed::from_span(Duration::from_secs_f64(variance.sqrt()))
    }

    /// Items processed per second, against the mean sample.
    #[must_use]
    pub fn throughput(&self, items: usize) -> f64 {
        items as f64 / self.mean().as_span().as_secs_f64()
    }
}

impl fmt::Display for BenchmarkResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Benchmark: {}", self.name)?;
        writeln!(f, "  Iterations: {}", self.iterations)?;
        writeln!(f, "  Mean:       {}", self.mean())?;
        writeln!(f, "  Median:     {}", self.median())?;
        writeln!(f, "  Min:        {}", self.min())?;
        writeln!(f, "  Max:        {}", self.max())?;
        writeln!(f, "  Std Dev:    {}", self.std_dev())?;
        Ok(())
    }
}

/// Percentage change of `current` over `baseline`, by mean sample.
#[must_use]
pub fn compare_benchmarks(baseline: &BenchmarkResult, current: &BenchmarkResult) -> f64 {
    let baseline_mean = baseline.mean().as_span().as_secs_f64();
    let current_mean = current.mean().as_span().as_secs_f64();
    ((current_mean - baseline_mean) / baseline_mean) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_benchmark() {
        let mut bench = Benchmark::new("test", 10);
        let result = bench.run(|| {
            std::thread::sleep(Duration::from_micros(10));
        });

        assert_eq!(result.samples.len(), 10);
        assert!(result.mean().as_span() >= Duration::from_micros(10));
        assert!(result.min() <= result.median());
        assert!(result.median() <= result.max());
    }

    #[test]
    fn test_throughput_positive() {
        let mut bench = Benchmark::new("throughput", 5);
        let result = bench.run(|| {
            std::thread::sleep(Duration::from_micros(50));
        });

        assert!(result.throughput(1000) > 0.0);
    }
}
