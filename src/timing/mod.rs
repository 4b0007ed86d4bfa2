//! Benchmark harness
//!
//! Minimum-of-repeats timing for pure, CPU-bound builders:
//! - one trial = `number` back-to-back builder calls
//! - `repeat` trials, each timed on the monotonic clock
//! - the fastest trial is reported (scheduler noise only ever adds time)

mod measurement;

pub use measurement::Measurement;

use std::hint::black_box;
use std::time::Instant;

use tracing::debug;

use crate::BenchError;

/// How many times to run a builder per measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TimingConfig {
    /// Builder calls per trial
    pub number: usize,

    /// Number of timed trials
    pub repeat: usize,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            number: 1,
            repeat: 5,
        }
    }
}

impl TimingConfig {
    /// Reject configurations that cannot produce a minimum
    pub fn validate(&self) -> Result<(), BenchError> {
        if self.number == 0 {
            return Err(BenchError::ZeroRepetitions);
        }
        if self.repeat == 0 {
            return Err(BenchError::ZeroTrials);
        }
        Ok(())
    }
}

/// Time `builder(height, root)` and keep every trial
///
/// The builder's output goes through `black_box` so the construction
/// is not optimized away. Panics inside the builder (stack exhaustion
/// at extreme heights, for instance) propagate to the caller.
pub fn measure<F, T>(
    mut builder: F,
    root: i64,
    height: u32,
    config: &TimingConfig,
) -> Result<Measurement, BenchError>
where
    F: FnMut(u32, i64) -> T,
{
    config.validate()?;

    let mut trials = Vec::with_capacity(config.repeat);
    for trial in 0..config.repeat {
        let start = Instant::now();
        for _ in 0..config.number {
            black_box(builder(black_box(height), black_box(root)));
        }
        let elapsed = start.elapsed();
        debug!(trial, height, root, elapsed_ns = elapsed.as_nanos() as u64, "trial finished");
        trials.push(elapsed);
    }

    Measurement::from_trials(trials)
}

/// Minimum trial time in seconds
pub fn measure_min_secs<F, T>(
    builder: F,
    root: i64,
    height: u32,
    config: &TimingConfig,
) -> Result<f64, BenchError>
where
    F: FnMut(u32, i64) -> T,
{
    measure(builder, root, height, config).map(|m| m.min_secs())
}
