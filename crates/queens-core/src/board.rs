//! Column-major board states and conflict checking.
//!
//! A board state is represented column-major: index = column, value = row.
//! This implicitly guarantees at most one queen per column, so the only
//! conflicts that can occur are shared rows and shared diagonals.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed board size. The benchmark targets the classic 8-queens instance.
pub const BOARD_SIZE: usize = 8;

/// A partial board assignment: one optional row per column.
///
/// This is the mutable working state of the backtracking search. Columns are
/// placed and cleared in depth-first order; unfilled columns are `None`.
///
/// # Example
///
/// ```
/// use queens_core::Placement;
///
/// let mut placement = Placement::empty();
/// placement.place(0, 3);
/// assert_eq!(placement.row(0), Some(3));
/// assert!(!placement.is_complete());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Placement {
    rows: [Option<u8>; BOARD_SIZE],
}

impl Placement {
    /// Creates an empty placement with no queens assigned.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Assigns a queen to `row` in `col`.
    pub fn place(&mut self, col: usize, row: u8) {
        self.rows[col] = Some(row);
    }

    /// Removes the queen from `col`.
    pub fn clear(&mut self, col: usize) {
        self.rows[col] = None;
    }

    /// Returns the assigned row for `col`, if any.
    pub fn row(&self, col: usize) -> Option<u8> {
        self.rows[col]
    }

    /// Returns true if every column has an assigned row.
    pub fn is_complete(&self) -> bool {
        self.rows.iter().all(Option::is_some)
    }

    /// Converts a complete placement into a [`Board`].
    ///
    /// Returns `None` while any column is still unassigned.
    pub fn as_board(&self) -> Option<Board> {
        let mut rows = [0u8; BOARD_SIZE];
        for (col, row) in self.rows.iter().enumerate() {
            rows[col] = (*row)?;
        }
        Some(Board::new(rows))
    }
}

/// A complete board assignment: one row per column.
///
/// A `Board` is not necessarily conflict-free; the local-search solvers mutate
/// complete boards through conflicting states. Use [`Board::is_solution`] to
/// check validity. Serializes as a plain array of eight row indices.
///
/// # Example
///
/// ```
/// use queens_core::Board;
///
/// let board = Board::new([0, 4, 7, 5, 2, 6, 1, 3]);
/// assert_eq!(board.conflicts(), 0);
/// assert!(board.is_solution());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    rows: [u8; BOARD_SIZE],
}

impl Board {
    /// Creates a board from an explicit row-per-column assignment.
    pub fn new(rows: [u8; BOARD_SIZE]) -> Self {
        Self { rows }
    }

    /// Returns the row assignment for each column.
    pub fn rows(&self) -> &[u8; BOARD_SIZE] {
        &self.rows
    }

    /// Returns the row of the queen in `col`.
    pub fn row(&self, col: usize) -> u8 {
        self.rows[col]
    }

    /// Moves the queen in `col` to `row`.
    pub fn set_row(&mut self, col: usize, row: u8) {
        self.rows[col] = row;
    }

    /// Counts the conflicting unordered column pairs on this board.
    ///
    /// A pair conflicts when the two queens share a row or a diagonal. O(N²).
    pub fn conflicts(&self) -> u32 {
        let mut conflicts = 0;
        for i in 0..BOARD_SIZE {
            for j in (i + 1)..BOARD_SIZE {
                if attacks(i, self.rows[i], j, self.rows[j]) {
                    conflicts += 1;
                }
            }
        }
        conflicts
    }

    /// Returns true if no two queens attack each other.
    pub fn is_solution(&self) -> bool {
        self.conflicts() == 0
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "-".repeat(BOARD_SIZE * 2 + 1))?;
        for row in 0..BOARD_SIZE as u8 {
            write!(f, "|")?;
            for col in 0..BOARD_SIZE {
                write!(f, "{}", if self.rows[col] == row { "Q|" } else { " |" })?;
            }
            writeln!(f)?;
        }
        write!(f, "{}", "-".repeat(BOARD_SIZE * 2 + 1))
    }
}

/// Returns true if queens at `(col_a, row_a)` and `(col_b, row_b)` attack
/// each other: same row, or equal absolute row and column distance (diagonal).
///
/// Symmetric in its two queens.
pub fn attacks(col_a: usize, row_a: u8, col_b: usize, row_b: u8) -> bool {
    if row_a == row_b {
        return true;
    }
    let col_diff = col_a.abs_diff(col_b);
    let row_diff = row_a.abs_diff(row_b) as usize;
    col_diff == row_diff
}

/// Checks whether placing a queen at `(col, row)` is consistent with every
/// other assigned column of `placement`. O(k) for k assigned columns.
pub fn is_consistent(placement: &Placement, col: usize, row: u8) -> bool {
    for other_col in 0..BOARD_SIZE {
        if other_col == col {
            continue;
        }
        if let Some(other_row) = placement.row(other_col) {
            if attacks(col, row, other_col, other_row) {
                return false;
            }
        }
    }
    true
}

/// Full conflict count of a placement.
///
/// An incomplete placement is not a solution and reports the maximal cost
/// (`u32::MAX`) so callers can treat it uniformly as "worse than anything".
pub fn placement_conflicts(placement: &Placement) -> u32 {
    match placement.as_board() {
        Some(board) => board.conflicts(),
        None => u32::MAX,
    }
}
