//! Binary tree builders
//!
//! Two constructions of the same perfect binary tree:
//! - `build_recursive`: nested mapping, built top-down through self-calls
//! - `build_iterative`: flat level-order list, built from a FIFO worklist
//!
//! Child values come from a pair of pure functions (`ChildRules`).
//! A tree of height h holds 2^(h+1) - 1 node values.

mod level_order;
mod node;
mod traversal;

pub use level_order::{build_iterative, Entry, LevelOrderTree};
pub use node::{build_bottom_up, build_recursive, Subtree};
pub use traversal::{level_multiset, same_level_multisets};

use std::fmt;
use std::str::FromStr;

/// Default left child: `v * 3`
pub fn triple(value: i64) -> i64 {
    value.wrapping_mul(3)
}

/// Default right child: `v - 4`
pub fn minus_four(value: i64) -> i64 {
    value.wrapping_sub(4)
}

/// Child-value functions used by every builder
///
/// Defaults to `left(v) = v * 3`, `right(v) = v - 4`. Both wrap on overflow,
/// so arbitrarily tall trees never panic in debug builds.
#[derive(Clone, Copy)]
pub struct ChildRules<L = fn(i64) -> i64, R = fn(i64) -> i64> {
    /// Computes the left child's value from its parent's
    pub left: L,

    /// Computes the right child's value from its parent's
    pub right: R,
}

impl<L, R> ChildRules<L, R>
where
    L: Fn(i64) -> i64,
    R: Fn(i64) -> i64,
{
    /// Rules with custom child functions
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// (left, right) values for the children of `value`
    #[inline]
    pub fn children(&self, value: i64) -> (i64, i64) {
        ((self.left)(value), (self.right)(value))
    }
}

impl Default for ChildRules {
    fn default() -> Self {
        Self {
            left: triple,
            right: minus_four,
        }
    }
}

impl<L, R> fmt::Debug for ChildRules<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChildRules").finish_non_exhaustive()
    }
}

/// Number of node values in a tree of `height`: 2^(h+1) - 1
///
/// `None` once the count no longer fits in a `u64`.
pub fn node_count(height: u32) -> Option<u64> {
    let levels = height.checked_add(1)?;
    match levels {
        l if l < u64::BITS => Some((1u64 << l) - 1),
        l if l == u64::BITS => Some(u64::MAX),
        _ => None,
    }
}

/// The builders this crate knows how to time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Builder {
    /// Call-stack recursion, nested mapping output
    Recursive,

    /// FIFO worklist, flat level-order output
    Iterative,

    /// Level-by-level assembly of the nested mapping, no recursion
    BottomUp,
}

impl Builder {
    /// Every builder, in display order
    pub const ALL: [Builder; 3] = [Builder::Recursive, Builder::Iterative, Builder::BottomUp];

    /// Human-readable series label
    pub fn label(&self) -> &'static str {
        match self {
            Builder::Recursive => "Recursive",
            Builder::Iterative => "Iterative",
            Builder::BottomUp => "Bottom-up",
        }
    }

    /// Build and drop one tree with default rules
    ///
    /// Gives builders with different output types one shape, which is what
    /// the timing harness needs when it measures them side by side.
    pub fn build_erased(&self, height: u32, root: i64) {
        let rules = ChildRules::default();
        match self {
            Builder::Recursive => {
                std::hint::black_box(build_recursive(height, root, &rules));
            }
            Builder::Iterative => {
                std::hint::black_box(build_iterative(height, root, &rules));
            }
            Builder::BottomUp => {
                std::hint::black_box(build_bottom_up(height, root, &rules));
            }
        }
    }
}

impl fmt::Display for Builder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Builder {
    type Err = crate::BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "recursive" => Ok(Builder::Recursive),
            "iterative" => Ok(Builder::Iterative),
            "bottom-up" | "bottom_up" | "bottomup" => Ok(Builder::BottomUp),
            _ => Err(crate::BenchError::UnknownBuilder(s.to_string())),
        }
    }
}
