//! Tests for the backtracking solver.

use super::backtracking::*;
use queens_core::Board;

/// Sum over depths of non-attacking partial placements for N=8, including
/// the empty root and the 92 terminal calls.
const FIND_ALL_NODES: u64 = 2057;

#[test]
fn test_find_all_counts_92_solutions() {
    let outcome = BacktrackingSolver::new(SearchMode::FindAll).solve();
    assert_eq!(outcome.solutions.len(), 92);
    assert!(outcome.success());
}

#[test]
fn test_find_all_solutions_are_pairwise_non_attacking() {
    let outcome = BacktrackingSolver::new(SearchMode::FindAll).solve();
    for solution in &outcome.solutions {
        assert!(solution.is_solution(), "conflicting placement: {solution:?}");
    }
}

#[test]
fn test_find_all_node_count_is_reproducible() {
    let outcome = BacktrackingSolver::new(SearchMode::FindAll).solve();
    assert_eq!(outcome.nodes_visited, FIND_ALL_NODES);
}

#[test]
fn test_find_one_returns_row_ascending_first_solution() {
    let outcome = BacktrackingSolver::new(SearchMode::FindOne).solve();
    assert_eq!(outcome.solutions.len(), 1);
    assert_eq!(outcome.first(), Some(&Board::new([0, 4, 7, 5, 2, 6, 1, 3])));
}

#[test]
fn test_find_one_matches_find_all_first_element() {
    let one = BacktrackingSolver::new(SearchMode::FindOne).solve();
    let all = BacktrackingSolver::new(SearchMode::FindAll).solve();
    assert_eq!(one.first(), all.first());
}

#[test]
fn test_find_one_cost_is_reproducible() {
    let a = BacktrackingSolver::new(SearchMode::FindOne).solve();
    let b = BacktrackingSolver::new(SearchMode::FindOne).solve();
    assert_eq!(a.nodes_visited, b.nodes_visited);
    assert!(a.nodes_visited > 0);
    assert!(a.nodes_visited < FIND_ALL_NODES);
}

#[test]
fn test_empty_outcome_accessors() {
    let outcome = BacktrackingOutcome {
        solutions: Vec::new(),
        nodes_visited: 1,
    };
    assert!(!outcome.success());
    assert_eq!(outcome.first(), None);
}
