//! Per-(builder, height) timing result

use std::time::Duration;

use crate::BenchError;

/// All trial durations from one `measure` call
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    /// Trial durations in run order (never empty)
    trials: Vec<Duration>,
}

impl Measurement {
    /// Wrap trial durations; at least one trial is required
    pub fn from_trials(trials: Vec<Duration>) -> Result<Self, BenchError> {
        if trials.is_empty() {
            return Err(BenchError::ZeroTrials);
        }
        Ok(Self { trials })
    }

    /// Trial durations in run order
    pub fn trials(&self) -> &[Duration] {
        &self.trials
    }

    /// Fastest trial
    pub fn min(&self) -> Duration {
        self.trials.iter().copied().min().unwrap_or_default()
    }

    /// Slowest trial
    pub fn max(&self) -> Duration {
        self.trials.iter().copied().max().unwrap_or_default()
    }

    /// Mean trial duration
    pub fn mean(&self) -> Duration {
        let total: Duration = self.trials.iter().sum();
        total / self.trials.len().max(1) as u32
    }

    /// Fastest trial in seconds
    pub fn min_secs(&self) -> f64 {
        self.min().as_secs_f64()
    }
}
