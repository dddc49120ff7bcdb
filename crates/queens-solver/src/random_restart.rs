//! Random-restart permutation sampling.

use queens_core::{Board, BOARD_SIZE};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Hard attempt ceiling. A safety bound, not an expected stop: valid
/// permutations are dense enough for 8-queens that this essentially never
/// triggers.
pub const DEFAULT_MAX_ATTEMPTS: u64 = 200_000;

/// Outcome of a random-restart run.
#[derive(Debug, Clone)]
pub struct RandomRestartOutcome {
    /// The first conflict-free permutation found, or `None` if the attempt
    /// ceiling was exhausted.
    pub solution: Option<Board>,
    /// Permutations drawn, always in `1..=max_attempts`.
    pub attempts: u64,
}

impl RandomRestartOutcome {
    /// Returns true if a solution was found before the ceiling.
    pub fn success(&self) -> bool {
        self.solution.is_some()
    }
}

/// Uniform permutation sampling with a bounded number of draws.
///
/// Each attempt shuffles the rows `0..8` into a random permutation, so no
/// two queens can share a row and only diagonal conflicts remain. The first
/// conflict-free permutation is returned immediately; reaching the ceiling
/// reports an explicit failure rather than looping forever.
#[derive(Debug, Clone, Copy)]
pub struct RandomRestartSolver {
    max_attempts: u64,
}

impl Default for RandomRestartSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomRestartSolver {
    /// Creates a solver with the default attempt ceiling.
    pub fn new() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Overrides the attempt ceiling.
    pub fn with_max_attempts(mut self, max_attempts: u64) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Draws random permutations until one is conflict-free or the ceiling
    /// is reached.
    pub fn solve<R: Rng + ?Sized>(&self, rng: &mut R) -> RandomRestartOutcome {
        let mut attempts: u64 = 0;
        while attempts < self.max_attempts {
            attempts += 1;
            let board = random_permutation(rng);
            if board.is_solution() {
                debug!(event = "random_restart_done", success = true, attempts);
                return RandomRestartOutcome {
                    solution: Some(board),
                    attempts,
                };
            }
        }
        debug!(event = "random_restart_done", success = false, attempts);
        RandomRestartOutcome {
            solution: None,
            attempts,
        }
    }
}

/// Samples a uniformly random permutation of the rows `0..8`.
fn random_permutation<R: Rng + ?Sized>(rng: &mut R) -> Board {
    let mut rows = [0u8; BOARD_SIZE];
    for (i, row) in rows.iter_mut().enumerate() {
        *row = i as u8;
    }
    rows.shuffle(rng);
    Board::new(rows)
}
