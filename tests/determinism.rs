use std::collections::HashSet;

use blake3::hash;
use treebench::{build_iterative, build_recursive, ChildRules};

#[test]
fn builders_are_deterministic() {
    let rules = ChildRules::default();

    let mut recursive = HashSet::new();
    let mut iterative = HashSet::new();
    for _ in 0..5 {
        recursive.insert(hash(build_recursive(8, 7, &rules).to_string().as_bytes()));
        iterative.insert(hash(build_iterative(8, 7, &rules).to_string().as_bytes()));
    }

    assert_eq!(recursive.len(), 1, "recursive outputs diverged across runs");
    assert_eq!(iterative.len(), 1, "iterative outputs diverged across runs");
}

#[test]
fn identical_inputs_give_equal_trees() {
    let rules = ChildRules::default();
    for height in 0..7 {
        assert_eq!(
            build_recursive(height, -11, &rules),
            build_recursive(height, -11, &rules)
        );
        assert_eq!(
            build_iterative(height, -11, &rules),
            build_iterative(height, -11, &rules)
        );
    }
}
