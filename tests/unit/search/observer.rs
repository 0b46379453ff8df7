//! Tests for observer composition, signals, and the step limit

#[cfg(test)]
mod tests {
    use queentrace::board::state::BoardState;
    use queentrace::search::observer::{
        CompositeObserver, NullObserver, SearchEvent, SearchObserver, SearchSignal, StepLimit,
    };

    fn board() -> BoardState {
        BoardState::new(4).unwrap()
    }

    fn placed() -> SearchEvent {
        SearchEvent::Placed { row: 0, col: 0 }
    }

    // Tests the default signal keeps the search running
    // Verified by flipping the default variant
    #[test]
    fn test_signal_defaults_to_continue() {
        assert_eq!(SearchSignal::default(), SearchSignal::Continue);
        assert!(!SearchSignal::Continue.is_interrupt());
        assert!(SearchSignal::Interrupt.is_interrupt());
    }

    // Tests the null observer never interrupts
    // Verified by returning Interrupt from the null implementation
    #[test]
    fn test_null_observer_continues() {
        let mut observer = NullObserver;
        let signal = observer.on_state_changed(placed(), &board());

        assert_eq!(signal, SearchSignal::Continue);
    }

    // Tests the composite forwards events to every member
    // Verified by breaking out of the fan-out loop early
    #[test]
    fn test_composite_forwards_to_all_members() {
        #[derive(Default)]
        struct Counter {
            seen: usize,
        }

        impl SearchObserver for Counter {
            fn on_state_changed(
                &mut self,
                _event: SearchEvent,
                _board: &BoardState,
            ) -> SearchSignal {
                self.seen += 1;
                SearchSignal::Continue
            }
        }

        let mut first = Counter::default();
        let mut second = Counter::default();
        {
            let mut composite = CompositeObserver::new();
            composite.attach(&mut first);
            composite.attach(&mut second);
            assert_eq!(composite.len(), 2);
            assert!(!composite.is_empty());

            composite.on_state_changed(placed(), &board());
            composite.on_state_changed(placed(), &board());
        }

        assert_eq!(first.seen, 2);
        assert_eq!(second.seen, 2);
    }

    // Tests a single interrupting member interrupts the whole composite
    // Verified by returning only the last member's signal
    #[test]
    fn test_composite_propagates_interrupt() {
        let mut interrupter = StepLimit::new(1);
        let mut quiet = NullObserver;
        let mut composite = CompositeObserver::new();
        composite.attach(&mut interrupter);
        composite.attach(&mut quiet);

        let signal = composite.on_state_changed(placed(), &board());
        assert_eq!(signal, SearchSignal::Interrupt);
    }

    // Tests an empty composite behaves like the null observer
    // Verified by making the empty fan-out interrupt
    #[test]
    fn test_empty_composite_continues() {
        let mut composite = CompositeObserver::new();
        assert!(composite.is_empty());

        let signal = composite.on_state_changed(placed(), &board());
        assert_eq!(signal, SearchSignal::Continue);
    }

    // Tests the limit lets exactly its count of events through
    // Verified by interrupting one event early
    #[test]
    fn test_step_limit_counts_events() {
        let mut limit = StepLimit::new(3);
        let board = board();

        assert_eq!(
            limit.on_state_changed(placed(), &board),
            SearchSignal::Continue
        );
        assert_eq!(
            limit.on_state_changed(placed(), &board),
            SearchSignal::Continue
        );
        assert_eq!(
            limit.on_state_changed(placed(), &board),
            SearchSignal::Interrupt
        );
        assert_eq!(limit.seen(), 3);

        // Further events keep signalling the interrupt
        assert_eq!(
            limit.on_state_changed(placed(), &board),
            SearchSignal::Interrupt
        );
    }
}
