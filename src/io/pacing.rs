//! Wall-clock pacing between observed search steps

use std::thread;
use std::time::Duration;

use crate::board::state::BoardState;
use crate::search::observer::{SearchEvent, SearchObserver, SearchSignal};

/// Blocks after every event so a viewer can follow the exploration
///
/// The search sequences around the pause: no event is delivered out of
/// order no matter how long the sleep lasts. A zero delay never calls
/// into the scheduler.
#[derive(Debug, Clone, Copy)]
pub struct StepPacer {
    delay: Duration,
}

impl StepPacer {
    /// Pacer sleeping `delay` after each event
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Pacer sleeping a whole number of milliseconds after each event
    pub const fn from_millis(millis: u64) -> Self {
        Self {
            delay: Duration::from_millis(millis),
        }
    }

    /// Configured pause length
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl SearchObserver for StepPacer {
    fn on_state_changed(&mut self, _event: SearchEvent, _board: &BoardState) -> SearchSignal {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        SearchSignal::Continue
    }
}
