//! Live progress display for a running search

use std::sync::LazyLock;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::board::state::BoardState;
use crate::search::observer::{SearchEvent, SearchObserver, SearchSignal};
use crate::search::stats::SearchStats;

static SEARCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg} [{elapsed_precise}]")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Spinner reporting steps explored and solutions found so far
///
/// Counts every delivered event; the spinner redraws are throttled by
/// indicatif's steady tick, so per-event updates stay cheap even on deep
/// searches.
pub struct SearchProgress {
    bar: ProgressBar,
    steps: u64,
    solutions: u64,
}

impl Default for SearchProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchProgress {
    /// Create a spinner ready to attach to a search
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(SEARCH_STYLE.clone());
        bar.enable_steady_tick(Duration::from_millis(100));

        Self {
            bar,
            steps: 0,
            solutions: 0,
        }
    }

    /// Events observed so far
    pub const fn steps(&self) -> u64 {
        self.steps
    }
}

impl SearchObserver for SearchProgress {
    fn on_search_started(&mut self, board: &BoardState) {
        self.bar
            .set_message(format!("exploring {0}x{0} board", board.size()));
    }

    fn on_state_changed(&mut self, event: SearchEvent, _board: &BoardState) -> SearchSignal {
        self.steps += 1;
        if matches!(event, SearchEvent::SolutionFound { .. }) {
            self.solutions += 1;
        }
        self.bar.set_message(format!(
            "{} steps, {} solutions",
            self.steps, self.solutions
        ));
        SearchSignal::Continue
    }

    fn on_search_finished(&mut self, _stats: &SearchStats) {
        self.bar.finish_and_clear();
    }
}
