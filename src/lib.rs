//! # Recursive vs Iterative Binary Tree Construction
//!
//! This library builds the same perfect binary tree two ways and times
//! both across increasing heights.
//!
//! ## Builders
//!
//! 1. **Recursive**: `{root: [left, right]}` nested mapping via self-calls
//! 2. **Iterative**: flat level-order list driven by a FIFO worklist
//! 3. **Bottom-up**: the recursive output, assembled level by level without recursion
//!
//! Child values come from `left(v) = v * 3`, `right(v) = v - 4` unless other
//! rules are supplied. Height h yields 2^(h+1) - 1 node values.
//!
//! ## Timing
//!
//! Each (builder, height) pair is run `repeat` times on the monotonic clock
//! and reduced to its fastest trial.
//!
//! ## Usage Example
//!
//! ```
//! use treebench::{build_iterative, build_recursive, ChildRules};
//!
//! let rules = ChildRules::default();
//! assert_eq!(build_recursive(1, 7, &rules).to_string(), "{7: [{21: []}, {3: []}]}");
//! assert_eq!(build_iterative(1, 7, &rules).to_string(), "[7, [21, [], []], [3, [], []]]");
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod chart;  // SVG chart and text table
pub mod sweep;  // Height sweep driver
pub mod timing; // Minimum-of-repeats harness
pub mod tree;   // Tree builders and traversal

// Re-exports for convenience
pub use chart::{render_svg, render_table, ChartStyle};
pub use sweep::{run_sweep, Comparison, Series, SweepConfig};
pub use timing::{measure, measure_min_secs, Measurement, TimingConfig};
pub use tree::{
    build_bottom_up, build_iterative, build_recursive, node_count, same_level_multisets, Builder,
    ChildRules, Entry, LevelOrderTree, Subtree,
};

use thiserror::Error;

/// Errors raised while measuring or rendering
#[derive(Error, Debug)]
pub enum BenchError {
    /// A trial must run the builder at least once
    #[error("Repetitions per trial must be at least 1")]
    ZeroRepetitions,

    /// A minimum needs at least one trial
    #[error("Trial count must be at least 1")]
    ZeroTrials,

    /// Nothing to measure or draw
    #[error("Sweep has no heights or no builders")]
    EmptySweep,

    /// Builder name not recognised
    #[error("Unknown builder '{0}' (expected recursive, iterative or bottom-up)")]
    UnknownBuilder(String),

    /// Chart output could not be formatted
    #[error("Chart rendering failed: {0}")]
    Render(#[from] std::fmt::Error),
}
