//! Board representation for the queen placement search
//!
//! This module contains the mutable board the search explores and the
//! immutable solution snapshots it records:
//! - Row-indexed queen occupancy with the column/diagonal safety check
//! - Value-copy solutions preserved across later board mutation

/// Immutable complete placements recorded during search
pub mod solution;
/// Mutable board occupancy and the safety check
pub mod state;

pub use solution::Solution;
pub use state::BoardState;
