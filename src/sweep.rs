//! Height sweep: time every builder at every height
//!
//! One pass over an ascending height range; each (builder, height) pair
//! is measured once and reduced to its fastest trial.

use std::ops::RangeInclusive;

use tracing::{debug, info};

use crate::timing::{measure, TimingConfig};
use crate::tree::Builder;
use crate::BenchError;

/// Sweep parameters (reference configuration by default)
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Root value handed to every builder
    pub root: i64,

    /// Heights to measure, ascending
    pub heights: RangeInclusive<u32>,

    /// Builders to compare, one series each
    pub builders: Vec<Builder>,

    /// Per-measurement repetition counts
    pub timing: TimingConfig,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            root: 7,
            heights: 1..=10,
            builders: vec![Builder::Recursive, Builder::Iterative],
            timing: TimingConfig::default(),
        }
    }
}

/// Minimum times for one builder, indexed like `Comparison::heights`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Series {
    /// Builder that produced the samples
    pub builder: Builder,

    /// Fastest trial per height, in seconds
    pub times_secs: Vec<f64>,
}

/// Parallel time series over a shared height axis
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Comparison {
    /// Heights measured, ascending
    pub heights: Vec<u32>,

    /// One series per builder, in `SweepConfig::builders` order
    pub series: Vec<Series>,
}

impl Comparison {
    /// Series for `builder`, if it was part of the sweep
    pub fn series_for(&self, builder: Builder) -> Option<&Series> {
        self.series.iter().find(|s| s.builder == builder)
    }

    /// Largest time across all series (0 when empty)
    pub fn max_time_secs(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.times_secs.iter().copied())
            .fold(0.0, f64::max)
    }

    /// Loose monotonicity check: the tallest tree is not faster than the
    /// shortest. Noise makes neighbouring samples unreliable, so only the
    /// endpoints are compared.
    pub fn is_trend_non_decreasing(&self, builder: Builder) -> bool {
        self.series_for(builder)
            .and_then(|s| Some((*s.times_secs.first()?, *s.times_secs.last()?)))
            .is_some_and(|(first, last)| first <= last)
    }
}

/// Run the sweep
///
/// Heights ascend; at each height every builder is measured in turn.
pub fn run_sweep(config: &SweepConfig) -> Result<Comparison, BenchError> {
    if config.heights.is_empty() || config.builders.is_empty() {
        return Err(BenchError::EmptySweep);
    }
    config.timing.validate()?;

    let heights: Vec<u32> = config.heights.clone().collect();
    let mut series: Vec<Series> = config
        .builders
        .iter()
        .map(|&builder| Series {
            builder,
            times_secs: Vec::with_capacity(heights.len()),
        })
        .collect();

    for &height in &heights {
        for s in series.iter_mut() {
            let builder = s.builder;
            let measurement = measure(
                |h, root| builder.build_erased(h, root),
                config.root,
                height,
                &config.timing,
            )?;
            debug!(
                %builder,
                height,
                min_ns = measurement.min().as_nanos() as u64,
                mean_ns = measurement.mean().as_nanos() as u64,
                "measured"
            );
            s.times_secs.push(measurement.min_secs());
        }

        let latest: Vec<f64> = series
            .iter()
            .map(|s| s.times_secs.last().copied().unwrap_or_default())
            .collect();
        info!(height, times = ?latest, "height done");
    }

    Ok(Comparison { heights, series })
}
