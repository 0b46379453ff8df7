//! Exhaustive depth-first exploration of the placement tree

use crate::board::solution::Solution;
use crate::board::state::BoardState;
use crate::search::observer::{NullObserver, SearchEvent, SearchObserver, SearchSignal};
use crate::search::stats::SearchStats;

/// Result of a finished search run
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Solutions in discovery order
    pub solutions: Vec<Solution>,
    /// Event tallies for the whole run
    pub stats: SearchStats,
    /// Whether an observer unwound the search before exhaustion
    pub interrupted: bool,
}

/// How the exploration of a subtree ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Exploration {
    Exhausted,
    Interrupted,
}

/// Exhaustive backtracking searcher over a single board
///
/// The solver owns the board, the solution list, and the statistics for
/// the duration of one run. Columns are tried left to right in every row;
/// finding a solution never prunes the remaining columns of any row, so
/// the enumeration visits the entire tree unless an observer interrupts.
pub struct Solver<O> {
    board: BoardState,
    observer: O,
    solutions: Vec<Solution>,
    stats: SearchStats,
}

impl Solver<NullObserver> {
    /// Searcher without observation
    pub fn new(board: BoardState) -> Self {
        Self::with_observer(board, NullObserver)
    }
}

impl<O: SearchObserver> Solver<O> {
    /// Searcher announcing every mutation to `observer`
    pub fn with_observer(board: BoardState, observer: O) -> Self {
        Self {
            board,
            observer,
            solutions: Vec::new(),
            stats: SearchStats::default(),
        }
    }

    /// Run the search to exhaustion or interruption
    ///
    /// Consumes the solver; the board is fully unwound on exhaustion and
    /// left at the interruption point otherwise. Recorded solutions are
    /// value copies either way.
    pub fn run(mut self) -> SearchOutcome {
        self.observer.on_search_started(&self.board);
        let ending = self.explore(0);
        self.observer.on_search_finished(&self.stats);

        SearchOutcome {
            solutions: self.solutions,
            stats: self.stats,
            interrupted: ending == Exploration::Interrupted,
        }
    }

    /// Try every column of `row`, recursing one row deeper per placement
    fn explore(&mut self, row: usize) -> Exploration {
        if row == self.board.size() {
            return self.record_solution();
        }

        for col in 0..self.board.size() {
            if !self.board.is_safe(row, col) {
                self.stats.rejected += 1;
                continue;
            }

            self.board.place(row, col);
            self.stats.placements += 1;
            if self.notify(SearchEvent::Placed { row, col }).is_interrupt() {
                return Exploration::Interrupted;
            }

            if self.explore(row + 1) == Exploration::Interrupted {
                return Exploration::Interrupted;
            }

            self.board.unplace(row);
            self.stats.removals += 1;
            if self.notify(SearchEvent::Removed { row, col }).is_interrupt() {
                return Exploration::Interrupted;
            }
        }

        Exploration::Exhausted
    }

    /// Snapshot the full board into the solution list
    fn record_solution(&mut self) -> Exploration {
        let Some(solution) = self.board.solution() else {
            unreachable!("base row reached with an unfilled placement")
        };

        self.solutions.push(solution);
        self.stats.solutions += 1;

        let index = self.solutions.len() - 1;
        if self.notify(SearchEvent::SolutionFound { index }).is_interrupt() {
            Exploration::Interrupted
        } else {
            Exploration::Exhausted
        }
    }

    fn notify(&mut self, event: SearchEvent) -> SearchSignal {
        self.observer.on_state_changed(event, &self.board)
    }
}
