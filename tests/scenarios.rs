//! Concrete builder outputs in source notation

#[path = "common/mod.rs"]
mod common;
use common::assert_snapshot;
use test_case::test_case;
use treebench::{build_bottom_up, build_iterative, build_recursive, ChildRules, Entry, Subtree};

#[test_case(0, 7, "{7: []}" ; "leaf")]
#[test_case(1, 7, "{7: [{21: []}, {3: []}]}" ; "one level")]
#[test_case(0, -2, "{-2: []}" ; "negative leaf")]
#[test_case(1, 0, "{0: [{0: []}, {-4: []}]}" ; "zero root")]
fn recursive_notation(height: u32, root: i64, expected: &str) {
    let rules = ChildRules::default();
    assert_eq!(build_recursive(height, root, &rules).to_string(), expected);
    assert_eq!(build_bottom_up(height, root, &rules).to_string(), expected);
}

#[test_case(0, 7, "[7]" ; "bare root")]
#[test_case(1, 7, "[7, [21, [], []], [3, [], []]]" ; "one level")]
#[test_case(1, 0, "[0, [0, [], []], [-4, [], []]]" ; "zero root")]
fn iterative_notation(height: u32, root: i64, expected: &str) {
    let tree = build_iterative(height, root, &ChildRules::default());
    assert_eq!(tree.to_string(), expected);
}

#[test]
fn height_one_structures() {
    let rules = ChildRules::default();

    assert_eq!(
        build_recursive(1, 7, &rules),
        Subtree::branch(7, Subtree::leaf(21), Subtree::leaf(3))
    );
    assert_eq!(
        build_iterative(1, 7, &rules).entries(),
        &[Entry::Root(7), Entry::Node(21), Entry::Node(3)]
    );
}

#[test]
fn height_three_matches_golden() {
    let rules = ChildRules::default();
    assert_snapshot(
        "recursive_h3_root7.txt",
        &build_recursive(3, 7, &rules).to_string(),
    );
    assert_snapshot(
        "iterative_h3_root7.txt",
        &build_iterative(3, 7, &rules).to_string(),
    );
}

#[test]
fn closures_capture_environment() {
    let step = 5;
    let rules = ChildRules::new(move |v| v + step, move |v| v - step);
    assert_eq!(
        build_iterative(1, 10, &rules).to_string(),
        "[10, [15, [], []], [5, [], []]]"
    );
}
