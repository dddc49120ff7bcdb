//! Backtracking depth-first search.

use queens_core::{is_consistent, Board, Placement, BOARD_SIZE};
use tracing::debug;

/// Whether the search stops at the first solution or enumerates all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Stop as soon as one complete, conflict-free placement is reached.
    FindOne,
    /// Explore the whole tree and record every solution (92 for 8-queens).
    FindAll,
}

/// Outcome of a backtracking search.
#[derive(Debug, Clone)]
pub struct BacktrackingOutcome {
    /// Every complete placement reached, in discovery order.
    pub solutions: Vec<Board>,
    /// Recursive invocations, including terminal `col == BOARD_SIZE` calls.
    ///
    /// Deterministic for a given mode, so it serves as a reproducible search
    /// cost independent of wall-clock timing.
    pub nodes_visited: u64,
}

impl BacktrackingOutcome {
    /// Returns the first solution found, if any.
    pub fn first(&self) -> Option<&Board> {
        self.solutions.first()
    }

    /// Returns true if at least one solution was found.
    pub fn success(&self) -> bool {
        !self.solutions.is_empty()
    }
}

/// Depth-first search over columns, one queen per column.
///
/// At each column every candidate row is tried in ascending order; a
/// candidate is explored only if it is consistent with all previously
/// assigned columns. `FindOne` is therefore deterministic: it always returns
/// the row-ascending first solution, `[0, 4, 7, 5, 2, 6, 1, 3]`.
///
/// # Example
///
/// ```
/// use queens_solver::{BacktrackingSolver, SearchMode};
///
/// let outcome = BacktrackingSolver::new(SearchMode::FindAll).solve();
/// assert_eq!(outcome.solutions.len(), 92);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BacktrackingSolver {
    mode: SearchMode,
}

impl BacktrackingSolver {
    /// Creates a solver for the given search mode.
    pub fn new(mode: SearchMode) -> Self {
        Self { mode }
    }

    /// Runs the search from an empty board.
    ///
    /// The search space is finite, so this always terminates. An empty
    /// `solutions` vector means "no solution found"; callers go through
    /// [`BacktrackingOutcome::first`] rather than indexing.
    pub fn solve(&self) -> BacktrackingOutcome {
        let mut placement = Placement::empty();
        let mut outcome = BacktrackingOutcome {
            solutions: Vec::new(),
            nodes_visited: 0,
        };
        self.search(&mut placement, 0, &mut outcome);
        debug!(
            event = "backtracking_done",
            mode = ?self.mode,
            solutions = outcome.solutions.len(),
            nodes_visited = outcome.nodes_visited,
        );
        outcome
    }

    /// Recursive descent into `col`. Returns true if a solution was reached
    /// in this subtree.
    fn search(&self, placement: &mut Placement, col: usize, outcome: &mut BacktrackingOutcome) -> bool {
        outcome.nodes_visited += 1;
        if col == BOARD_SIZE {
            if let Some(board) = placement.as_board() {
                outcome.solutions.push(board);
            }
            return true;
        }

        let mut found = false;
        for row in 0..BOARD_SIZE as u8 {
            if is_consistent(placement, col, row) {
                placement.place(col, row);
                if self.search(placement, col + 1, outcome) {
                    if self.mode == SearchMode::FindOne {
                        // First-found policy: propagate success immediately.
                        return true;
                    }
                    found = true;
                }
                placement.clear(col);
            }
        }
        found
    }
}
