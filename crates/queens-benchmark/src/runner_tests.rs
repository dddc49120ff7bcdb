//! Tests for the benchmark harness.

use queens_core::Board;

use super::config::BenchmarkConfig;
use super::runner::BenchmarkHarness;

fn small_config() -> BenchmarkConfig {
    BenchmarkConfig::new()
        .with_backtracking_runs(2)
        .with_stochastic_runs(10)
        .with_random_seed(Some(42))
}

#[test]
fn test_sweep_produces_all_solver_sections() {
    let report = BenchmarkHarness::new(small_config()).run();
    assert!(report.backtracking.is_some());
    assert!(report.hill_climbing.is_some());
    assert!(report.random_restart.is_some());
}

#[test]
fn test_backtracking_aggregates() {
    let report = BenchmarkHarness::new(small_config()).run();
    let bt = report.backtracking.unwrap();

    assert_eq!(
        bt.find_one.solution_example,
        Some(Board::new([0, 4, 7, 5, 2, 6, 1, 3]))
    );
    assert_eq!(bt.find_all.solutions_count, 92);
    // Deterministic search: the cost mean equals the per-run cost.
    assert!((bt.find_all.avg_cost_nodes - 2057.0).abs() < 1e-9);
    assert!(bt.find_one.avg_cost_nodes > 0.0);
    assert!(bt.find_one.avg_time_s >= 0.0);
}

#[test]
fn test_stochastic_aggregates_are_consistent() {
    let config = small_config();
    let runs = config.stochastic_runs;
    let report = BenchmarkHarness::new(config).run();

    let hc = report.hill_climbing.unwrap().find_one;
    assert!((0.0..=1.0).contains(&hc.success_rate));
    assert!((hc.solutions_found_count as f64 - hc.success_rate * runs as f64).abs() < 1e-9);
    if let Some(example) = hc.solution_example {
        assert!(example.is_solution());
        assert!(hc.avg_cost_conflict_evals > 0.0);
    }

    let rr = report.random_restart.unwrap().find_one;
    // Valid-permutation density makes success within the ceiling certain in
    // practice.
    assert!((rr.success_rate - 1.0).abs() < 1e-12);
    assert_eq!(rr.solutions_found_count, runs);
    assert!(rr.avg_cost_attempts >= 1.0);
    assert!(rr.solution_example.unwrap().is_solution());
}

#[test]
fn test_seeded_sweeps_are_reproducible() {
    let a = BenchmarkHarness::new(small_config()).run();
    let b = BenchmarkHarness::new(small_config()).run();

    let (ha, hb) = (
        a.hill_climbing.unwrap().find_one,
        b.hill_climbing.unwrap().find_one,
    );
    assert_eq!(ha.solutions_found_count, hb.solutions_found_count);
    assert!((ha.avg_cost_conflict_evals - hb.avg_cost_conflict_evals).abs() < 1e-9);
    assert_eq!(ha.solution_example, hb.solution_example);

    let (ra, rb) = (
        a.random_restart.unwrap().find_one,
        b.random_restart.unwrap().find_one,
    );
    assert!((ra.avg_cost_attempts - rb.avg_cost_attempts).abs() < 1e-9);
    assert_eq!(ra.solution_example, rb.solution_example);
}

#[test]
fn test_zero_runs_yield_empty_aggregates() {
    let config = BenchmarkConfig::new()
        .with_backtracking_runs(0)
        .with_stochastic_runs(0)
        .with_random_seed(Some(1));
    let report = BenchmarkHarness::new(config).run();

    let bt = report.backtracking.unwrap();
    assert_eq!(bt.find_one.solution_example, None);
    assert_eq!(bt.find_all.solutions_count, 0);

    let hc = report.hill_climbing.unwrap().find_one;
    assert_eq!(hc.success_rate, 0.0);
    assert_eq!(hc.solution_example, None);
}
