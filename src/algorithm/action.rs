//! Frequency-limited scheduling for recurring grid passes

use std::time::Duration;

/// Accumulates simulated time and reports when a pass is due
///
/// A paused timer ignores elapsed time entirely. Resetting the interval makes
/// the next [`advance`](Self::advance) fire regardless of how little time
/// passes, which is how mutation events force an early recompute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionTimer {
    frequency: Duration,
    elapsed: Duration,
    paused: bool,
}

impl ActionTimer {
    /// Create a running timer that fires every `frequency`
    pub const fn new(frequency: Duration) -> Self {
        Self {
            frequency,
            elapsed: Duration::ZERO,
            paused: false,
        }
    }

    /// Interval between passes
    pub const fn frequency(&self) -> Duration {
        self.frequency
    }

    /// Check if the timer is paused
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Stop accumulating time
    pub const fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume accumulating time
    pub const fn unpause(&mut self) {
        self.paused = false;
    }

    /// Make the next advance fire
    pub const fn reset_interval(&mut self) {
        self.elapsed = self.frequency;
    }

    /// Add elapsed time and report whether the pass should run now
    ///
    /// Firing restarts the interval from zero, so several overdue intervals
    /// still produce a single run.
    pub fn advance(&mut self, delta: Duration) -> bool {
        if self.paused {
            return false;
        }

        self.elapsed = self.elapsed.saturating_add(delta);
        if self.elapsed >= self.frequency {
            self.elapsed = Duration::ZERO;
            true
        } else {
            false
        }
    }
}
