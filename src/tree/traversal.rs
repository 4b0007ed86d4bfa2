//! Traversal and comparison helpers
//!
//! The two builders emit different container shapes, so equivalence is
//! checked on values grouped by depth: level k of both trees must hold
//! the same multiset of values.

use super::{Entry, LevelOrderTree, Subtree};

impl Subtree {
    /// Total number of node values
    pub fn len(&self) -> usize {
        self.values().len()
    }

    /// Always false: a subtree holds at least its own value
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Values in pre-order (node, then left subtree, then right subtree)
    ///
    /// Explicit stack, so flattening never recurses.
    pub fn values(&self) -> Vec<i64> {
        let mut out = Vec::new();
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            out.push(node.value);
            // Right first so left is visited first
            stack.extend(node.children.iter().rev());
        }

        out
    }

    /// Values grouped by depth, left to right within a level
    pub fn levels(&self) -> Vec<Vec<i64>> {
        let mut levels = Vec::new();
        let mut frontier = vec![self];

        while !frontier.is_empty() {
            levels.push(frontier.iter().map(|node| node.value).collect());
            frontier = frontier
                .into_iter()
                .flat_map(|node| node.children.iter())
                .collect();
        }

        levels
    }

    /// Number of edge-levels below this node (0 for a leaf)
    pub fn height(&self) -> usize {
        self.levels().len().saturating_sub(1)
    }

    /// Leaf invariant: every node is either a leaf or has exactly two
    /// children, and all leaves sit on the last level.
    pub fn is_perfect(&self) -> bool {
        let levels = self.levels();
        let last = levels.len().saturating_sub(1);
        let mut frontier = vec![(self, 0usize)];

        while let Some((node, depth)) = frontier.pop() {
            match node.children.len() {
                0 if depth == last => {}
                2 => frontier.extend(node.children.iter().map(|child| (child, depth + 1))),
                _ => return false,
            }
        }

        true
    }
}

impl LevelOrderTree {
    /// Total number of node values
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// Always false: the bare root is present even at height 0
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Values in breadth-first generation order
    pub fn values(&self) -> Vec<i64> {
        self.entries().iter().map(Entry::value).collect()
    }

    /// Values grouped by depth
    ///
    /// Level k occupies indices [2^k - 1, 2^(k+1) - 1).
    pub fn levels(&self) -> Vec<Vec<i64>> {
        let values = self.values();
        let mut levels = Vec::new();
        let mut start = 0usize;
        let mut width = 1usize;

        while start < values.len() {
            let end = start.saturating_add(width).min(values.len());
            levels.push(values[start..end].to_vec());
            start = end;
            width = width.saturating_mul(2);
        }

        levels
    }
}

/// Sort every level, turning ordered levels into per-level multisets
pub fn level_multiset(levels: Vec<Vec<i64>>) -> Vec<Vec<i64>> {
    levels
        .into_iter()
        .map(|mut level| {
            level.sort_unstable();
            level
        })
        .collect()
}

/// True when both trees hold the same multiset of values on every level
pub fn same_level_multisets(nested: &Subtree, flat: &LevelOrderTree) -> bool {
    level_multiset(nested.levels()) == level_multiset(flat.levels())
}
