//! Tests for interval scheduling including pause and forced runs

#[cfg(test)]
mod tests {
    use std::time::Duration;
    use towergrid::algorithm::action::ActionTimer;

    const FREQUENCY: Duration = Duration::from_millis(100);

    // Tests timer fires once the frequency has elapsed
    // Verified by comparing with > instead of >=
    #[test]
    fn test_fires_after_frequency() {
        let mut timer = ActionTimer::new(FREQUENCY);
        assert!(!timer.advance(Duration::from_millis(50)));
        assert!(timer.advance(Duration::from_millis(50)));
        assert_eq!(timer.frequency(), FREQUENCY);
    }

    // Tests firing restarts the interval
    // Verified by not clearing elapsed time after firing
    #[test]
    fn test_firing_restarts_interval() {
        let mut timer = ActionTimer::new(FREQUENCY);
        assert!(timer.advance(Duration::from_millis(350)));
        assert!(!timer.advance(Duration::from_millis(10)));
    }

    // Tests reset makes the next advance fire immediately
    // Verified by resetting elapsed to zero instead of the frequency
    #[test]
    fn test_reset_interval_forces_run() {
        let mut timer = ActionTimer::new(FREQUENCY);
        timer.reset_interval();
        assert!(timer.advance(Duration::ZERO));
    }

    // Tests paused timer ignores time and resumes from where it stopped
    // Verified by accumulating time while paused
    #[test]
    fn test_pause_and_unpause() {
        let mut timer = ActionTimer::new(FREQUENCY);
        timer.pause();
        assert!(timer.is_paused());
        assert!(!timer.advance(Duration::from_secs(5)));

        timer.unpause();
        assert!(!timer.is_paused());
        assert!(!timer.advance(Duration::from_millis(99)));
        assert!(timer.advance(Duration::from_millis(1)));
    }
}
