//! Benchmark runner.
//!
//! Runs each solver for the configured repetition count, bracketing every
//! invocation with a [`Probe`], and aggregates the measurements into the
//! persisted metrics model. Aggregation conventions:
//!
//! - time, memory and cost are arithmetic means over the *successful* runs
//!   only (stochastic solvers may fail individual runs)
//! - `success_rate` is successes over total repetitions
//! - the first successful solution is kept as `solution_example`
//!
//! A run that fails to find a solution never aborts the sweep and never
//! touches another solver's aggregates.

use queens_core::Board;
use queens_solver::{
    BacktrackingSolver, HillClimbingSolver, RandomRestartSolver, SearchMode,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::config::BenchmarkConfig;
use crate::metrics::{
    BacktrackingFindAll, BacktrackingFindOne, BacktrackingMetrics, HillClimbingFindOne,
    HillClimbingMetrics, MetricsReport, RandomRestartFindOne, RandomRestartMetrics,
};
use crate::probe::{Measurement, Probe};

/// Runs the full benchmark sweep described by a [`BenchmarkConfig`].
///
/// Single-threaded and synchronous: every repetition runs to completion
/// before the next begins, on a fresh solver state each time.
pub struct BenchmarkHarness {
    config: BenchmarkConfig,
}

impl BenchmarkHarness {
    /// Creates a harness for the given configuration.
    pub fn new(config: BenchmarkConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this harness runs with.
    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Runs all three solvers and returns the aggregated metrics.
    pub fn run(&self) -> MetricsReport {
        info!(
            event = "benchmark_start",
            backtracking_runs = self.config.backtracking_runs,
            stochastic_runs = self.config.stochastic_runs,
            seed = ?self.config.random_seed,
        );

        let mut rng = match self.config.random_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };

        let backtracking = self.run_backtracking();
        let hill_climbing = self.run_hill_climbing(&mut rng);
        let random_restart = self.run_random_restart(&mut rng);

        info!(event = "benchmark_end");
        MetricsReport {
            backtracking: Some(backtracking),
            hill_climbing: Some(hill_climbing),
            random_restart: Some(random_restart),
        }
    }

    /// Benchmarks both backtracking modes.
    ///
    /// Backtracking is deterministic and always succeeds, so every
    /// repetition contributes to the averages; the repetitions exist for
    /// timing stability.
    fn run_backtracking(&self) -> BacktrackingMetrics {
        info!(event = "sweep_start", solver = "backtracking");

        let mut one = Accumulator::default();
        let mut example = None;
        for _ in 0..self.config.backtracking_runs {
            let solver = BacktrackingSolver::new(SearchMode::FindOne);
            let probe = Probe::start();
            let outcome = solver.solve();
            let measurement = probe.finish();
            if let Some(solution) = outcome.first() {
                example.get_or_insert(*solution);
                one.push(measurement, outcome.nodes_visited as f64);
            }
        }

        let mut all = Accumulator::default();
        let mut solutions_count = 0;
        for _ in 0..self.config.backtracking_runs {
            let solver = BacktrackingSolver::new(SearchMode::FindAll);
            let probe = Probe::start();
            let outcome = solver.solve();
            let measurement = probe.finish();
            if outcome.success() {
                if solutions_count == 0 {
                    solutions_count = outcome.solutions.len();
                }
                all.push(measurement, outcome.nodes_visited as f64);
            }
        }

        BacktrackingMetrics {
            find_one: BacktrackingFindOne {
                avg_time_s: one.avg_time_s(),
                avg_mem_peak_kb: one.avg_mem_kb(),
                avg_cost_nodes: one.avg_cost(),
                solution_example: example,
            },
            find_all: BacktrackingFindAll {
                avg_time_s: all.avg_time_s(),
                avg_mem_peak_kb: all.avg_mem_kb(),
                avg_cost_nodes: all.avg_cost(),
                solutions_count,
            },
        }
    }

    fn run_hill_climbing(&self, rng: &mut ChaCha8Rng) -> HillClimbingMetrics {
        info!(event = "sweep_start", solver = "hill_climbing");

        let solver = HillClimbingSolver::new();
        let mut acc = Accumulator::default();
        let mut example: Option<Board> = None;
        let mut successes = 0usize;
        for _ in 0..self.config.stochastic_runs {
            let probe = Probe::start();
            let outcome = solver.solve(rng);
            let measurement = probe.finish();
            if outcome.success {
                successes += 1;
                example.get_or_insert(outcome.state);
                acc.push(measurement, outcome.conflict_evals as f64);
            }
        }

        HillClimbingMetrics {
            find_one: HillClimbingFindOne {
                avg_time_s: acc.avg_time_s(),
                avg_mem_peak_kb: acc.avg_mem_kb(),
                avg_cost_conflict_evals: acc.avg_cost(),
                success_rate: rate(successes, self.config.stochastic_runs),
                solutions_found_count: successes,
                solution_example: example,
            },
        }
    }

    fn run_random_restart(&self, rng: &mut ChaCha8Rng) -> RandomRestartMetrics {
        info!(event = "sweep_start", solver = "random_restart");

        let solver = RandomRestartSolver::new();
        let mut acc = Accumulator::default();
        let mut example: Option<Board> = None;
        let mut successes = 0usize;
        for _ in 0..self.config.stochastic_runs {
            let probe = Probe::start();
            let outcome = solver.solve(rng);
            let measurement = probe.finish();
            if let Some(solution) = outcome.solution {
                successes += 1;
                example.get_or_insert(solution);
                acc.push(measurement, outcome.attempts as f64);
            }
        }

        RandomRestartMetrics {
            find_one: RandomRestartFindOne {
                avg_time_s: acc.avg_time_s(),
                avg_mem_peak_kb: acc.avg_mem_kb(),
                avg_cost_attempts: acc.avg_cost(),
                success_rate: rate(successes, self.config.stochastic_runs),
                solutions_found_count: successes,
                solution_example: example,
            },
        }
    }
}

/// Collects per-run measurements for the successful runs of one sweep.
#[derive(Debug, Default)]
struct Accumulator {
    times_s: Vec<f64>,
    mems_kb: Vec<f64>,
    costs: Vec<f64>,
}

impl Accumulator {
    fn push(&mut self, measurement: Measurement, cost: f64) {
        self.times_s.push(measurement.elapsed.as_secs_f64());
        self.mems_kb.push(measurement.peak_mem_kb);
        self.costs.push(cost);
    }

    fn avg_time_s(&self) -> f64 {
        mean(&self.times_s)
    }

    fn avg_mem_kb(&self) -> f64 {
        mean(&self.mems_kb)
    }

    fn avg_cost(&self) -> f64 {
        mean(&self.costs)
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

fn rate(successes: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        successes as f64 / total as f64
    }
}
