//! Observation hooks announcing every board mutation during search

use crate::board::state::BoardState;
use crate::search::stats::SearchStats;

/// Single observable transition of the search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEvent {
    /// A queen was placed at the cell
    Placed {
        /// Row of the placed queen
        row: usize,
        /// Column of the placed queen
        col: usize,
    },
    /// The queen at the cell was removed while backtracking
    Removed {
        /// Row of the removed queen
        row: usize,
        /// Column the queen occupied
        col: usize,
    },
    /// A complete placement was recorded
    SolutionFound {
        /// Position of the solution in discovery order
        index: usize,
    },
}

/// Observer verdict returned after each event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchSignal {
    /// Keep exploring
    #[default]
    Continue,
    /// Unwind the search, keeping solutions recorded so far
    Interrupt,
}

impl SearchSignal {
    /// Whether this signal requests the search to unwind
    pub const fn is_interrupt(self) -> bool {
        matches!(self, Self::Interrupt)
    }
}

/// Receives every search transition in mutation order
///
/// `on_state_changed` runs synchronously after each mutation; the search
/// does not advance until it returns. Observers are free to block for
/// pacing, redraw the board, or request an interrupt. Exactly one call is
/// made per placement, per removal, and per recorded solution.
pub trait SearchObserver {
    /// Called once before the root row is explored
    fn on_search_started(&mut self, _board: &BoardState) {}

    /// Called after every placement, removal, and recorded solution
    fn on_state_changed(&mut self, event: SearchEvent, board: &BoardState) -> SearchSignal;

    /// Called once after the search returns, interrupted or not
    fn on_search_finished(&mut self, _stats: &SearchStats) {}
}

impl<O: SearchObserver + ?Sized> SearchObserver for &mut O {
    fn on_search_started(&mut self, board: &BoardState) {
        (**self).on_search_started(board);
    }

    fn on_state_changed(&mut self, event: SearchEvent, board: &BoardState) -> SearchSignal {
        (**self).on_state_changed(event, board)
    }

    fn on_search_finished(&mut self, stats: &SearchStats) {
        (**self).on_search_finished(stats);
    }
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl SearchObserver for NullObserver {
    fn on_state_changed(&mut self, _event: SearchEvent, _board: &BoardState) -> SearchSignal {
        SearchSignal::Continue
    }
}

/// Fans every event out to a list of observers
///
/// The composite interrupts when any member interrupts; members after the
/// interrupting one still see the event that triggered it, so no observer
/// misses a mutation.
#[derive(Default)]
pub struct CompositeObserver<'a> {
    observers: Vec<&'a mut dyn SearchObserver>,
}

impl<'a> CompositeObserver<'a> {
    /// Create an empty composite
    pub const fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Add an observer to the fan-out list
    pub fn attach(&mut self, observer: &'a mut dyn SearchObserver) {
        self.observers.push(observer);
    }

    /// Number of attached observers
    pub const fn len(&self) -> usize {
        self.observers.len()
    }

    /// Whether no observers are attached
    pub const fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl SearchObserver for CompositeObserver<'_> {
    fn on_search_started(&mut self, board: &BoardState) {
        for observer in &mut self.observers {
            observer.on_search_started(board);
        }
    }

    fn on_state_changed(&mut self, event: SearchEvent, board: &BoardState) -> SearchSignal {
        let mut signal = SearchSignal::Continue;
        for observer in &mut self.observers {
            if observer.on_state_changed(event, board).is_interrupt() {
                signal = SearchSignal::Interrupt;
            }
        }
        signal
    }

    fn on_search_finished(&mut self, stats: &SearchStats) {
        for observer in &mut self.observers {
            observer.on_search_finished(stats);
        }
    }
}

/// Interrupts the search after a fixed number of events
///
/// Deterministic stand-in for host-driven cancellation: the limit counts
/// delivered events, so a limit of `k` lets exactly `k` events through and
/// interrupts on the `k`-th.
#[derive(Debug, Clone, Copy)]
pub struct StepLimit {
    limit: usize,
    seen: usize,
}

impl StepLimit {
    /// Interrupt once `limit` events have been observed
    pub const fn new(limit: usize) -> Self {
        Self { limit, seen: 0 }
    }

    /// Events observed so far
    pub const fn seen(&self) -> usize {
        self.seen
    }
}

impl SearchObserver for StepLimit {
    fn on_state_changed(&mut self, _event: SearchEvent, _board: &BoardState) -> SearchSignal {
        self.seen += 1;
        if self.seen >= self.limit {
            SearchSignal::Interrupt
        } else {
            SearchSignal::Continue
        }
    }
}
