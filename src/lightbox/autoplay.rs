// SPDX-License-Identifier: MPL-2.0
//! Auto-advance timer state.
//!
//! The slideshow is driven by a repeating timer that the application
//! subscribes to while [`AutoAdvance::is_running`] holds. This type only
//! tracks the interval and the running flag; the actual ticks come from an
//! `iced::time::every` subscription gated on this state, so stopping is a
//! real cancellation rather than an ignored callback.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoAdvance {
    interval: Duration,
    running: bool,
}

impl AutoAdvance {
    /// Creates a stopped timer with the given tick interval.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            running: false,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Flips between running and stopped, keyed off the current timer
    /// state. This is the click-to-pause behavior: a click while cycling
    /// pauses, a click while paused resumes.
    pub fn toggle(&mut self) {
        if self.running {
            self.stop();
        } else {
            self.start();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_stopped() {
        let autoplay = AutoAdvance::new(Duration::from_secs(5));
        assert!(!autoplay.is_running());
        assert_eq!(autoplay.interval(), Duration::from_secs(5));
    }

    #[test]
    fn start_and_stop_are_idempotent() {
        let mut autoplay = AutoAdvance::new(Duration::from_secs(5));
        autoplay.start();
        autoplay.start();
        assert!(autoplay.is_running());
        autoplay.stop();
        autoplay.stop();
        assert!(!autoplay.is_running());
    }

    #[test]
    fn toggle_is_keyed_off_the_running_state() {
        let mut autoplay = AutoAdvance::new(Duration::from_secs(5));
        autoplay.start();
        autoplay.toggle();
        assert!(!autoplay.is_running());
        autoplay.toggle();
        assert!(autoplay.is_running());
    }
}
