//! Queens Solver - Search strategies for the 8-queens placement problem
//!
//! Three solvers with deliberately different characters:
//! - [`BacktrackingSolver`]: deterministic depth-first search, able to find
//!   the first solution or enumerate all 92
//! - [`HillClimbingSolver`]: steepest-descent local search with plateau
//!   perturbation and a stall bound; may fail
//! - [`RandomRestartSolver`]: uniform permutation sampling with a hard
//!   attempt ceiling; may fail (in theory)
//!
//! Every solver exposes an algorithm-specific cost counter so search effort
//! can be compared independently of wall-clock timing. Solvers that need
//! randomness take an explicit `Rng` so runs are reproducible under a seed.
//!
//! Logging levels:
//! - **DEBUG**: one event per completed solve with outcome and cost
//! - **TRACE**: step-level detail in the local search

pub mod backtracking;
pub mod hill_climbing;
pub mod random_restart;

#[cfg(test)]
mod backtracking_tests;
#[cfg(test)]
mod random_restart_tests;

pub use backtracking::{BacktrackingOutcome, BacktrackingSolver, SearchMode};
pub use hill_climbing::{HillClimbingOutcome, HillClimbingSolver, DEFAULT_STALL_LIMIT};
pub use random_restart::{RandomRestartOutcome, RandomRestartSolver, DEFAULT_MAX_ATTEMPTS};
