//! Depth-first exploration of the queen placement tree
//!
//! This module contains the search itself and its observation surface:
//! - Exhaustive backtracking solver emitting one event per board mutation
//! - Observer trait with fan-out, null, and step-limit implementations
//! - Counters describing the shape of a finished run

/// Observation hooks announced after every board mutation
pub mod observer;
/// Exhaustive backtracking search and its outcome
pub mod solver;
/// Counters accumulated while the tree is explored
pub mod stats;

pub use observer::{SearchEvent, SearchObserver, SearchSignal};
pub use solver::{SearchOutcome, Solver};
pub use stats::SearchStats;
