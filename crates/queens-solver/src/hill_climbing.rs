//! Hill-climbing local search with plateau perturbation.

use queens_core::{Board, BOARD_SIZE};
use rand::Rng;
use tracing::{debug, trace};

/// Consecutive non-improving sweeps tolerated before the search gives up.
pub const DEFAULT_STALL_LIMIT: u32 = 50;

/// Outcome of a single hill-climbing attempt.
#[derive(Debug, Clone)]
pub struct HillClimbingOutcome {
    /// The final state, which is only a solution when `success` is set.
    pub state: Board,
    /// Conflict evaluations performed (initial check per sweep plus every
    /// neighbor probe).
    pub conflict_evals: u64,
    /// Whether the search terminated on a conflict-free board.
    pub success: bool,
}

impl HillClimbingOutcome {
    /// Returns the final state as a solution, if the search succeeded.
    pub fn solution(&self) -> Option<&Board> {
        self.success.then_some(&self.state)
    }
}

/// Steepest-descent local search over full board states.
///
/// Starts from eight independent uniformly random rows (not a permutation)
/// and repeatedly moves to the best-scoring neighbor across a full sweep of
/// every column and alternative row. A sweep whose best neighbor only ties
/// the current score perturbs one random column to escape the plateau; the
/// perturbation may cycle between equally-good states, which is accepted
/// behavior — the stall counter bounds it.
///
/// Callers must check [`HillClimbingOutcome::success`] before trusting the
/// returned state: on stall exhaustion the final (conflicting) state is
/// still returned.
#[derive(Debug, Clone, Copy)]
pub struct HillClimbingSolver {
    stall_limit: u32,
}

impl Default for HillClimbingSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl HillClimbingSolver {
    /// Creates a solver with the default stall limit.
    pub fn new() -> Self {
        Self {
            stall_limit: DEFAULT_STALL_LIMIT,
        }
    }

    /// Overrides the stall limit.
    pub fn with_stall_limit(mut self, limit: u32) -> Self {
        self.stall_limit = limit;
        self
    }

    /// Runs one hill-climbing attempt from a fresh random state.
    pub fn solve<R: Rng + ?Sized>(&self, rng: &mut R) -> HillClimbingOutcome {
        let mut state = random_board(rng);
        let mut conflict_evals: u64 = 0;
        let mut stall_count: u32 = 0;

        loop {
            let current = state.conflicts();
            conflict_evals += 1;

            if current == 0 {
                debug!(event = "hill_climbing_done", success = true, conflict_evals);
                return HillClimbingOutcome {
                    state,
                    conflict_evals,
                    success: true,
                };
            }

            // Sweep every column and every alternative row, tracking the
            // single best neighbor. The best score starts at the current
            // score, so only strict improvements are recorded.
            let mut best_neighbor = state;
            let mut best_conflicts = current;
            for col in 0..BOARD_SIZE {
                let original = state.row(col);
                for row in 0..BOARD_SIZE as u8 {
                    if row == original {
                        continue;
                    }
                    state.set_row(col, row);
                    let probed = state.conflicts();
                    conflict_evals += 1;
                    if probed < best_conflicts {
                        best_conflicts = probed;
                        best_neighbor = state;
                    }
                }
                state.set_row(col, original);
            }

            if best_conflicts >= current {
                stall_count += 1;
                if stall_count > self.stall_limit {
                    break;
                }
                if best_conflicts == current {
                    // Plateau: perturb a single random column.
                    let col = rng.random_range(0..BOARD_SIZE);
                    let row = rng.random_range(0..BOARD_SIZE as u8);
                    state.set_row(col, row);
                    trace!(event = "plateau_perturbation", col, row, stall_count);
                } else {
                    // Local optimum with no equal-or-better neighbor.
                    break;
                }
            } else {
                state = best_neighbor;
                stall_count = 0;
                trace!(event = "improving_move", conflicts = best_conflicts);
            }
        }

        debug!(event = "hill_climbing_done", success = false, conflict_evals);
        HillClimbingOutcome {
            state,
            conflict_evals,
            success: false,
        }
    }
}

/// Samples eight independent uniformly random rows.
fn random_board<R: Rng + ?Sized>(rng: &mut R) -> Board {
    let mut rows = [0u8; BOARD_SIZE];
    for row in &mut rows {
        *row = rng.random_range(0..BOARD_SIZE as u8);
    }
    Board::new(rows)
}
