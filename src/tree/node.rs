//! Nested tree representation
//!
//! Node = value plus an ordered child list:
//!   Leaf:   {v: []}
//!   Branch: {v: [left, right]}
//!
//! Two ways to build it: plain self-recursion, and level-by-level
//! assembly that never grows the call stack.

use std::fmt;

use super::ChildRules;

/// Nested binary tree node (the `{value: [left, right]}` mapping)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Subtree {
    /// Node value
    pub value: i64,

    /// Empty for a leaf, `[left, right]` otherwise
    pub children: Vec<Subtree>,
}

impl Subtree {
    /// Leaf node: `{value: []}`
    pub fn leaf(value: i64) -> Self {
        Self {
            value,
            children: Vec::new(),
        }
    }

    /// Branch node: `{value: [left, right]}`
    pub fn branch(value: i64, left: Subtree, right: Subtree) -> Self {
        Self {
            value,
            children: vec![left, right],
        }
    }

    /// Check if leaf (empty child list)
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Left subtree, if any
    pub fn left(&self) -> Option<&Subtree> {
        self.children.first()
    }

    /// Right subtree, if any
    pub fn right(&self) -> Option<&Subtree> {
        self.children.get(1)
    }
}

/// Recursive builder
///
/// height 0 yields `{root: []}`; otherwise both children are built at
/// `height - 1` and paired under the root. Stack depth grows with
/// `height`, so very tall trees overflow the stack (use
/// [`build_bottom_up`] for those).
pub fn build_recursive<L, R>(height: u32, root: i64, rules: &ChildRules<L, R>) -> Subtree
where
    L: Fn(i64) -> i64,
    R: Fn(i64) -> i64,
{
    if height == 0 {
        return Subtree::leaf(root);
    }

    let (left_value, right_value) = rules.children(root);
    let left = build_recursive(height - 1, left_value, rules);
    let right = build_recursive(height - 1, right_value, rules);

    Subtree::branch(root, left, right)
}

/// Non-recursive builder producing the same nested tree as [`build_recursive`]
///
/// Values are expanded level by level (level k holds 2^k values in
/// left-to-right order), then subtrees are assembled bottom-up: every
/// consecutive pair on level k+1 becomes the children of one value on
/// level k.
pub fn build_bottom_up<L, R>(height: u32, root: i64, rules: &ChildRules<L, R>) -> Subtree
where
    L: Fn(i64) -> i64,
    R: Fn(i64) -> i64,
{
    let mut levels: Vec<Vec<i64>> = Vec::with_capacity(height as usize + 1);
    levels.push(vec![root]);

    for _ in 0..height {
        let next = levels
            .last()
            .map(|level| {
                level
                    .iter()
                    .flat_map(|&value| {
                        let (left, right) = rules.children(value);
                        [left, right]
                    })
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();
        levels.push(next);
    }

    let mut below: Vec<Subtree> = Vec::new();
    while let Some(values) = levels.pop() {
        let mut children = below.into_iter();
        below = values
            .into_iter()
            .map(|value| match (children.next(), children.next()) {
                (Some(left), Some(right)) => Subtree::branch(value, left, right),
                _ => Subtree::leaf(value),
            })
            .collect();
    }

    below.pop().unwrap_or_else(|| Subtree::leaf(root))
}

impl fmt::Display for Subtree {
    /// Source notation: `{7: [{21: []}, {3: []}]}`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}: [", self.value)?;
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{child}")?;
        }
        f.write_str("]}")
    }
}
