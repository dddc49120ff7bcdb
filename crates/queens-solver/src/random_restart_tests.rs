//! Tests for the random-restart solver.

use super::random_restart::*;
use queens_core::BOARD_SIZE;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn test_solution_is_a_conflict_free_permutation() {
    let solver = RandomRestartSolver::new();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let outcome = solver.solve(&mut rng);

    assert!(outcome.success());
    let board = outcome.solution.expect("ceiling should not be reached");
    assert_eq!(board.conflicts(), 0);

    // Permutation property: every row used exactly once.
    let mut seen = [false; BOARD_SIZE];
    for &row in board.rows() {
        assert!(!seen[row as usize], "repeated row {row}");
        seen[row as usize] = true;
    }
}

#[test]
fn test_attempts_stay_within_bounds() {
    let solver = RandomRestartSolver::new();
    for seed in 0..20 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let outcome = solver.solve(&mut rng);
        assert!(outcome.attempts >= 1);
        assert!(outcome.attempts <= DEFAULT_MAX_ATTEMPTS);
        assert!(outcome.success(), "ceiling reached at seed {seed}");
    }
}

#[test]
fn test_exhausted_ceiling_reports_failure() {
    // A one-draw ceiling almost always fails (92 solutions in 40320
    // permutations); scan seeds until a failing draw shows up and check how
    // failure is reported.
    let solver = RandomRestartSolver::new().with_max_attempts(1);
    let mut saw_failure = false;
    for seed in 0..50 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let outcome = solver.solve(&mut rng);
        assert_eq!(outcome.attempts, 1);
        if !outcome.success() {
            assert!(outcome.solution.is_none());
            saw_failure = true;
        }
    }
    assert!(saw_failure);
}

#[test]
fn test_outcome_is_reproducible_for_a_seed() {
    let solver = RandomRestartSolver::new();
    let a = solver.solve(&mut ChaCha8Rng::seed_from_u64(3));
    let b = solver.solve(&mut ChaCha8Rng::seed_from_u64(3));
    assert_eq!(a.solution, b.solution);
    assert_eq!(a.attempts, b.attempts);
}
