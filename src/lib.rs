//! Exhaustive N-queens backtracking search with step-by-step observation
//!
//! The solver walks the full placement tree depth-first and announces every
//! queen placement and removal to registered observers in mutation order.
//! Observers drive pacing, progress display, and animated replay of the
//! exploration without the search knowing how any of it is rendered.

#![forbid(unsafe_code)]

/// Board occupancy, safety checks, and recorded solutions
pub mod board;
/// Input/output operations and error handling
pub mod io;
/// Depth-first search, observation hooks, and statistics
pub mod search;

pub use io::error::{Result, SolverError};
