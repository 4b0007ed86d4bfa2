//! Flat level-order representation
//!
//! `[root, [l, [], []], [r, [], []], ...]`: the root is stored bare at
//! index 0, every other node as a triple whose child slots are always
//! empty. Linkage is implicit in generation order (breadth-first), so the
//! children of entry i sit at 2i+1 and 2i+2.

use std::collections::VecDeque;
use std::fmt;

use super::ChildRules;

/// One slot in a [`LevelOrderTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entry {
    /// Bare root value at index 0
    Root(i64),

    /// `[value, [], []]` triple for every non-root node
    Node(i64),
}

impl Entry {
    /// Node value regardless of slot shape
    #[inline]
    pub fn value(&self) -> i64 {
        match *self {
            Entry::Root(value) | Entry::Node(value) => value,
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Root(value) => write!(f, "{value}"),
            Entry::Node(value) => write!(f, "[{value}, [], []]"),
        }
    }
}

/// Breadth-first list of tree entries
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LevelOrderTree {
    entries: Vec<Entry>,
}

impl LevelOrderTree {
    /// All entries in generation order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Root value (always present)
    pub fn root(&self) -> Option<i64> {
        self.entries.first().map(Entry::value)
    }
}

/// Iterative builder
///
/// Worklist of (value, remaining height) pairs seeded with the root.
/// Each popped pair with height left appends its two children as
/// triples (left then right) and queues them one level lower. Runs
/// exactly 2^(h+1) - 1 iterations.
pub fn build_iterative<L, R>(height: u32, root: i64, rules: &ChildRules<L, R>) -> LevelOrderTree
where
    L: Fn(i64) -> i64,
    R: Fn(i64) -> i64,
{
    let mut entries = vec![Entry::Root(root)];
    let mut worklist = VecDeque::from([(root, height)]);

    while let Some((current, remaining)) = worklist.pop_front() {
        if remaining > 0 {
            let (left, right) = rules.children(current);
            entries.push(Entry::Node(left));
            entries.push(Entry::Node(right));
            worklist.push_back((left, remaining - 1));
            worklist.push_back((right, remaining - 1));
        }
    }

    LevelOrderTree { entries }
}

impl fmt::Display for LevelOrderTree {
    /// Source notation: `[7, [21, [], []], [3, [], []]]`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{entry}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_zero_is_bare_root() {
        let tree = build_iterative(0, 7, &ChildRules::default());
        assert_eq!(tree.entries(), &[Entry::Root(7)]);
        assert_eq!(tree.to_string(), "[7]");
    }

    #[test]
    fn test_height_one() {
        let tree = build_iterative(1, 7, &ChildRules::default());
        assert_eq!(
            tree.entries(),
            &[Entry::Root(7), Entry::Node(21), Entry::Node(3)]
        );
        assert_eq!(tree.to_string(), "[7, [21, [], []], [3, [], []]]");
    }

    #[test]
    fn test_breadth_first_order() {
        let tree = build_iterative(2, 7, &ChildRules::default());
        let values: Vec<i64> = tree.entries().iter().map(Entry::value).collect();
        assert_eq!(values, vec![7, 21, 3, 63, 17, 9, -1]);
    }

    #[test]
    fn test_implicit_linkage() {
        let rules = ChildRules::default();
        let tree = build_iterative(4, 5, &rules);
        let entries = tree.entries();
        for (i, parent) in entries.iter().enumerate() {
            let (left, right) = rules.children(parent.value());
            if let (Some(l), Some(r)) = (entries.get(2 * i + 1), entries.get(2 * i + 2)) {
                assert_eq!(l.value(), left);
                assert_eq!(r.value(), right);
            }
        }
    }

    #[test]
    fn test_only_index_zero_is_bare() {
        let tree = build_iterative(3, 7, &ChildRules::default());
        assert_eq!(tree.root(), Some(7));
        assert!(tree.entries()[1..]
            .iter()
            .all(|entry| matches!(entry, Entry::Node(_))));
    }
}
