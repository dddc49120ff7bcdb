//! Queens Core - Board model and conflict checking
//!
//! This crate provides the shared vocabulary of the benchmark workspace:
//! - `Placement` for partial, column-major board states used while searching
//! - `Board` for complete assignments (one row per column)
//! - Pure conflict-checking functions (row and diagonal attacks)
//! - The workspace-wide error type

pub mod board;
pub mod error;

#[cfg(test)]
mod board_tests;

pub use board::{attacks, is_consistent, placement_conflicts, Board, Placement, BOARD_SIZE};
pub use error::{QueensError, Result};
